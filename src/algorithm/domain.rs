//! Fixed-size bitsets over prototype indices

use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Set of prototypes still possible for a node
///
/// Indices are zero-based positions into the frozen prototype library.
/// All bitsets participating in an operation must share the same capacity;
/// the capacity is the library size for the whole run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainBitset {
    bits: BitVec,
    capacity: usize,
}

impl DomainBitset {
    /// Create a bitset with no prototypes present
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
            capacity,
        }
    }

    /// Create a bitset containing every prototype
    pub fn full(capacity: usize) -> Self {
        Self {
            bits: bitvec![1; capacity],
            capacity,
        }
    }

    /// Insert a prototype index; out-of-range indices are ignored
    pub fn insert(&mut self, index: usize) {
        if index < self.capacity {
            self.bits.set(index, true);
        }
    }

    /// Test prototype membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Number of prototypes present
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Total capacity, present or not
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Test if no prototypes are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Intersect with another bitset in place, reporting whether this set shrank
    pub fn intersect_with(&mut self, other: &Self) -> bool {
        let before = self.bits.count_ones();
        self.bits &= &other.bits;
        self.bits.count_ones() < before
    }

    /// Union another bitset into this one in place
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Test whether every prototype here is also present in `other`
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.bits.iter_ones().all(|index| other.contains(index))
    }

    /// Iterate present prototype indices in fixed ascending order
    pub fn iter_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Lowest present prototype index, if any
    pub fn first(&self) -> Option<usize> {
        self.bits.first_one()
    }

    /// Extract all present indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }

    /// Build a bitset from a slice of prototype indices
    pub fn from_indices(indices: &[usize], capacity: usize) -> Self {
        let mut bitset = Self::new(capacity);
        for &index in indices {
            bitset.insert(index);
        }
        bitset
    }
}

impl fmt::Display for DomainBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DomainBitset({}: {:?})", self.count(), self.to_vec())
    }
}
