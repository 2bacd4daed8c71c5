//! Collapse engine: domains, weighted selection, propagation, and the solver loop

/// Fixed-size bitsets over prototype indices
pub mod domain;
/// Breadth-first arc-consistency propagation
pub mod propagation;
/// Insertion-ordered weighted random selection
pub mod selector;
/// The entropy-ordered observation loop
pub mod solver;

pub use domain::DomainBitset;
pub use solver::{CollapseEngine, Solution};
