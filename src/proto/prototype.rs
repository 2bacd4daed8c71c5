//! Frozen prototype library with per-direction compatibility sets

use crate::algorithm::domain::DomainBitset;
use crate::lattice::direction::Direction;
use crate::proto::tile::TilePayload;

/// One concrete oriented tile variant
///
/// Immutable once the library is frozen. Compatibility sets and weight are
/// pure data; nothing here changes during a run.
#[derive(Clone, Debug)]
pub struct Prototype {
    payload: TilePayload,
    weight: f64,
    compatible: [DomainBitset; 6],
}

impl Prototype {
    pub(crate) const fn new(
        payload: TilePayload,
        weight: f64,
        compatible: [DomainBitset; 6],
    ) -> Self {
        Self {
            payload,
            weight,
            compatible,
        }
    }

    /// Orientation payload handed to the caller once resolved
    pub const fn payload(&self) -> &TilePayload {
        &self.payload
    }

    /// Positive weight biasing the observation draw
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Prototypes allowed adjacent in `direction`
    ///
    /// An empty set means nothing may sit on that face, which is distinct
    /// from an unconstrained face (every prototype present).
    pub const fn compatible(&self, direction: Direction) -> &DomainBitset {
        let [px, nx, py, ny, pz, nz] = &self.compatible;
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

/// The frozen prototype library produced by the generator
#[derive(Clone, Debug)]
pub struct PrototypeSet {
    prototypes: Vec<Prototype>,
    starved: Vec<String>,
}

impl PrototypeSet {
    pub(crate) const fn new(prototypes: Vec<Prototype>, starved: Vec<String>) -> Self {
        Self {
            prototypes,
            starved,
        }
    }

    /// Number of prototypes in the library
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    /// Test if the library is empty
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// Look up a prototype by index
    pub fn get(&self, index: usize) -> Option<&Prototype> {
        self.prototypes.get(index)
    }

    /// Iterate prototypes in library order
    pub fn iter(&self) -> impl Iterator<Item = &Prototype> {
        self.prototypes.iter()
    }

    /// Weight of the prototype at `index`, zero when out of range
    pub fn weight(&self, index: usize) -> f64 {
        self.prototypes.get(index).map_or(0.0, Prototype::weight)
    }

    /// A domain containing every prototype
    pub fn full_domain(&self) -> DomainBitset {
        DomainBitset::full(self.len())
    }

    /// Union of compatible sets over every prototype in `domain`
    ///
    /// This is the propagation kernel: what a neighbor with the given domain
    /// still permits adjacent to itself in `direction`.
    pub fn support(&self, domain: &DomainBitset, direction: Direction) -> DomainBitset {
        let mut support = DomainBitset::new(self.len());
        for index in domain.iter_indices() {
            if let Some(prototype) = self.prototypes.get(index) {
                support.union_with(prototype.compatible(direction));
            }
        }
        support
    }

    /// Base tiles whose registered rules produced zero variants
    ///
    /// Not an error, but worth surfacing: a starved tile silently removes its
    /// variants from the library and can leave a lattice without valid states.
    pub fn starved_tiles(&self) -> &[String] {
        &self.starved
    }
}
