//! Variant expansion rules applied during prototype generation

use crate::proto::tile::{TileDescriptor, TileVariant};
use std::fmt;

/// Capability for caller-supplied variant expansion
///
/// Implementations must be pure: the same descriptor always expands to the
/// same variants. Returning an empty vector is legal and simply contributes
/// nothing for that tile.
pub trait VariantRule {
    /// Expand one base tile into zero or more oriented variants
    fn expand(&self, tile: &TileDescriptor) -> Vec<TileVariant>;
}

/// Built-in expansion rules plus a custom escape hatch
///
/// Rules are independent and order-insensitive; their outputs are merged and
/// structurally deduplicated by the generator. `Rotations` and `Mirror`
/// produce only the transformed variants, so most pipelines also register
/// `Identity`.
pub enum GenerationRule {
    /// The tile itself, unrotated and unmirrored
    Identity,
    /// The three additional quarter-turn yaw rotations
    Rotations,
    /// The reflection across the X axis
    Mirror,
    /// Caller-supplied expansion
    Custom(Box<dyn VariantRule>),
}

impl GenerationRule {
    /// Run this rule against one base tile
    pub fn expand(&self, tile: &TileDescriptor) -> Vec<TileVariant> {
        match self {
            Self::Identity => vec![TileVariant::from_descriptor(tile)],
            Self::Rotations => {
                let mut variants = Vec::with_capacity(3);
                let mut current = TileVariant::from_descriptor(tile);
                for _ in 0..3 {
                    current = current.yaw_quarter();
                    variants.push(current.clone());
                }
                variants
            }
            Self::Mirror => vec![TileVariant::from_descriptor(tile).mirror_x()],
            Self::Custom(rule) => rule.expand(tile),
        }
    }
}

impl fmt::Debug for GenerationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("Identity"),
            Self::Rotations => f.write_str("Rotations"),
            Self::Mirror => f.write_str("Mirror"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
