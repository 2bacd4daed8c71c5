//! Pluggable finite coordinate spaces

use crate::io::configuration::MAX_LATTICE_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::lattice::coord::Coord;
use crate::lattice::direction::Direction;

/// A finite coordinate space the lattice builder can wire
///
/// Implementations fully determine cell enumeration and adjacency, so 2D
/// grids, 3D grids, or other finite topologies plug in without changing the
/// engine. `neighbor_of` must be consistent with itself: if it names `n` as
/// the neighbor of `c` in direction `d`, it must name `c` as the neighbor of
/// `n` in `opposite(d)` — the lattice's symmetry invariant depends on it.
pub trait Topology {
    /// Enumerate every cell of the space
    fn coordinates(&self) -> Vec<Coord>;

    /// The adjacent coordinate in `direction`, or `None` at a boundary
    ///
    /// Boundaries do not wrap.
    fn neighbor_of(&self, coord: Coord, direction: Direction) -> Option<Coord>;
}

/// Axis-aligned box of cells anchored at the origin
#[derive(Clone, Copy, Debug)]
pub struct GridTopology {
    width: usize,
    height: usize,
    depth: usize,
}

impl GridTopology {
    /// Create a box topology with validated dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any dimension is zero or exceeds
    /// [`MAX_LATTICE_DIMENSION`].
    pub fn new(width: usize, height: usize, depth: usize) -> Result<Self> {
        for (name, value) in [("width", width), ("height", height), ("depth", depth)] {
            if value == 0 {
                return Err(invalid_parameter(name, &value, &"must be non-zero"));
            }
            if value > MAX_LATTICE_DIMENSION {
                return Err(invalid_parameter(
                    name,
                    &value,
                    &format!("must not exceed {MAX_LATTICE_DIMENSION}"),
                ));
            }
        }
        Ok(Self {
            width,
            height,
            depth,
        })
    }

    /// Create a single-layer 2D topology
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or exceeds
    /// [`MAX_LATTICE_DIMENSION`].
    pub fn flat(width: usize, height: usize) -> Result<Self> {
        Self::new(width, height, 1)
    }

    /// Width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Depth in cells
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Test whether a coordinate lies inside the box
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && (coord.x as i64) < self.width as i64
            && coord.y >= 0
            && (coord.y as i64) < self.height as i64
            && coord.z >= 0
            && (coord.z as i64) < self.depth as i64
    }
}

impl Topology for GridTopology {
    fn coordinates(&self) -> Vec<Coord> {
        let mut coords = Vec::with_capacity(self.width * self.height * self.depth);
        for z in 0..self.depth {
            for y in 0..self.height {
                for x in 0..self.width {
                    coords.push(Coord::new(x as i32, y as i32, z as i32));
                }
            }
        }
        coords
    }

    fn neighbor_of(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let neighbor = coord.step(direction);
        self.contains(neighbor).then_some(neighbor)
    }
}
