//! Hashable cell keys for finite lattices

use crate::lattice::direction::Direction;
use std::fmt;

/// Identifies one lattice cell
///
/// Supports equality and hashing only; no ordering is defined or needed.
/// 2D lattices use a fixed `z` of zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    /// X component
    pub x: i32,
    /// Y component
    pub y: i32,
    /// Z component
    pub z: i32,
}

impl Coord {
    /// Create a coordinate from its components
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The coordinate one step away in the given direction
    pub const fn step(self, direction: Direction) -> Self {
        let [dx, dy, dz] = direction.offset();
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
