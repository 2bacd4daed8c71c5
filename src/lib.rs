//! Wave function collapse solver over pluggable lattice topologies
//!
//! Base tiles are expanded into oriented prototypes with per-direction
//! compatibility, a finite lattice of nodes is wired from an injected
//! topology, and an entropy-ordered observe/propagate loop assigns every
//! cell a single prototype or reports a contradiction. Runs are single
//! threaded and fully reproducible from (seed, prototype set, topology).

#![forbid(unsafe_code)]

/// Collapse engine: domains, weighted selection, propagation, and the solver loop
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Coordinate model, topologies, and the node lattice
pub mod lattice;
/// Tile descriptors, generation rules, and the frozen prototype library
pub mod proto;

pub use io::error::{AlgorithmError, Result};
