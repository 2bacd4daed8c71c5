//! Tile descriptors, generation rules, and the frozen prototype library
//!
//! Base tiles enter as [`tile::TileDescriptor`] values, are expanded by
//! [`rules::GenerationRule`] pipelines into oriented variants, and freeze
//! into a [`prototype::PrototypeSet`] whose per-direction compatibility
//! bitsets drive propagation.

/// Variant expansion and freezing of the prototype library
pub mod generator;
/// Frozen prototypes and their compatibility sets
pub mod prototype;
/// Built-in and custom variant expansion rules
pub mod rules;
/// Tile descriptors, payloads, and socket mating rules
pub mod tile;

pub use generator::PrototypeGenerator;
pub use prototype::{Prototype, PrototypeSet};
