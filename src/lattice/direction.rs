//! Axis-aligned adjacency directions between lattice cells

/// Relative offset from a cell to one of its six axis-aligned neighbors
///
/// The discriminant doubles as a dense index into per-direction tables
/// such as prototype compatibility sets and node neighbor slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards positive X
    PosX = 0,
    /// Towards negative X
    NegX = 1,
    /// Towards positive Y
    PosY = 2,
    /// Towards negative Y
    NegY = 3,
    /// Towards positive Z
    PosZ = 4,
    /// Towards negative Z
    NegZ = 5,
}

impl Direction {
    /// All directions in table order
    pub const ALL: [Self; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// Number of directions
    pub const COUNT: usize = 6;

    /// The direction facing back; `opposite` is an involution
    pub const fn opposite(self) -> Self {
        match self {
            Self::PosX => Self::NegX,
            Self::NegX => Self::PosX,
            Self::PosY => Self::NegY,
            Self::NegY => Self::PosY,
            Self::PosZ => Self::NegZ,
            Self::NegZ => Self::PosZ,
        }
    }

    /// Integer displacement applied when stepping a coordinate
    pub const fn offset(self) -> [i32; 3] {
        match self {
            Self::PosX => [1, 0, 0],
            Self::NegX => [-1, 0, 0],
            Self::PosY => [0, 1, 0],
            Self::NegY => [0, -1, 0],
            Self::PosZ => [0, 0, 1],
            Self::NegZ => [0, 0, -1],
        }
    }

    /// Dense index into per-direction tables
    pub const fn index(self) -> usize {
        self as usize
    }
}
