//! Base tile descriptors, oriented variants, and socket mating rules

use crate::lattice::direction::Direction;
use std::collections::HashSet;

/// External description of one base tile before variant expansion
///
/// Face sockets are indexed by [`Direction::index`]. Weight biases the
/// observation draw and must be positive.
#[derive(Clone, Debug)]
pub struct TileDescriptor {
    /// Asset identifier handed back to the caller in resolved payloads
    pub name: String,
    /// Positive selection weight
    pub weight: f64,
    /// Per-face socket labels
    pub sockets: [String; 6],
}

impl TileDescriptor {
    /// Create a descriptor from borrowed socket labels
    pub fn new(name: &str, weight: f64, sockets: [&str; 6]) -> Self {
        Self {
            name: name.to_owned(),
            weight,
            sockets: sockets.map(str::to_owned),
        }
    }
}

/// Resolved payload carried by one prototype
///
/// Everything a caller needs to instantiate the cell: which asset, how many
/// quarter turns about the vertical axis, and whether it is X-mirrored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TilePayload {
    /// Asset identifier from the source descriptor
    pub asset: String,
    /// Quarter turns about the vertical axis, 0..4
    pub rotation: u8,
    /// Whether the variant is reflected across the X axis
    pub mirrored: bool,
}

/// One oriented tile variant produced by a generation rule
#[derive(Clone, Debug)]
pub struct TileVariant {
    /// Orientation payload for the resolved output
    pub payload: TilePayload,
    /// Selection weight inherited from the source descriptor
    pub weight: f64,
    /// Per-face socket labels after orientation
    pub sockets: [String; 6],
}

impl TileVariant {
    /// The unrotated, unmirrored variant of a base tile
    pub fn from_descriptor(tile: &TileDescriptor) -> Self {
        Self {
            payload: TilePayload {
                asset: tile.name.clone(),
                rotation: 0,
                mirrored: false,
            },
            weight: tile.weight,
            sockets: tile.sockets.clone(),
        }
    }

    /// This variant rotated one quarter turn counter-clockwise about +Z
    ///
    /// Face labels follow their rotating normals; vertical faces are
    /// unchanged.
    pub fn yaw_quarter(&self) -> Self {
        let [px, nx, py, ny, pz, nz] = self.sockets.clone();
        Self {
            payload: TilePayload {
                asset: self.payload.asset.clone(),
                rotation: (self.payload.rotation + 1) % 4,
                mirrored: self.payload.mirrored,
            },
            weight: self.weight,
            sockets: [ny, py, px, nx, pz, nz],
        }
    }

    /// This variant reflected across the X axis
    pub fn mirror_x(&self) -> Self {
        let [px, nx, py, ny, pz, nz] = self.sockets.clone();
        Self {
            payload: TilePayload {
                asset: self.payload.asset.clone(),
                rotation: self.payload.rotation,
                mirrored: !self.payload.mirrored,
            },
            weight: self.weight,
            sockets: [nx, px, py, ny, pz, nz],
        }
    }

    /// Socket label on the face pointing in `direction`
    pub const fn socket(&self, direction: Direction) -> &String {
        let [px, nx, py, ny, pz, nz] = &self.sockets;
        match direction {
            Direction::PosX => px,
            Direction::NegX => nx,
            Direction::PosY => py,
            Direction::NegY => ny,
            Direction::PosZ => pz,
            Direction::NegZ => nz,
        }
    }
}

/// Unordered-pair table declaring which socket labels may touch
///
/// Pairs are normalized on insertion, so "a mates b" and "b mates a" are the
/// same entry. This makes the prototype compatibility cross-invariant — P
/// allows Q in d exactly when Q allows P in opposite(d) — hold by
/// construction rather than by runtime validation.
#[derive(Clone, Debug, Default)]
pub struct SocketRules {
    pairs: HashSet<(String, String)>,
}

impl SocketRules {
    /// Create an empty mating table
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare that faces labelled `a` and `b` may sit adjacent
    pub fn allow(&mut self, a: &str, b: &str) {
        self.pairs.insert(Self::key(a, b));
    }

    /// Test whether two face labels mate
    pub fn mates(&self, a: &str, b: &str) -> bool {
        self.pairs.contains(&Self::key(a, b))
    }

    /// Number of declared pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Test if no pairs are declared
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn key(a: &str, b: &str) -> (String, String) {
        if a <= b {
            (a.to_owned(), b.to_owned())
        } else {
            (b.to_owned(), a.to_owned())
        }
    }
}
