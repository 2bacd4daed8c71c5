//! Variant expansion and freezing of the prototype library

use crate::algorithm::domain::DomainBitset;
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::lattice::direction::Direction;
use crate::proto::prototype::{Prototype, PrototypeSet};
use crate::proto::rules::GenerationRule;
use crate::proto::tile::{SocketRules, TileDescriptor, TileVariant};
use std::collections::HashSet;

/// Ingestion statistics kept while the library is being built
#[derive(Clone, Debug, Default)]
pub struct GeneratorStats {
    /// Variants kept per ingested base tile, in ingestion order
    pub produced: Vec<(String, usize)>,
    /// Base tiles for which every registered rule produced zero variants
    pub starved: Vec<String>,
    /// Variants discarded as structural duplicates
    pub deduplicated: usize,
}

/// Structural identity of a variant: asset, sockets, and weight
///
/// Two variants matching on all three are the same prototype regardless of
/// the orientation that produced them, so a fully symmetric tile contributes
/// one prototype however many rotation rules are registered.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct VariantKey {
    asset: String,
    sockets: [String; 6],
    weight_bits: u64,
}

impl VariantKey {
    fn of(variant: &TileVariant) -> Self {
        Self {
            asset: variant.payload.asset.clone(),
            sockets: variant.sockets.clone(),
            weight_bits: variant.weight.to_bits(),
        }
    }
}

/// Expands base tiles through registered rules into a frozen prototype set
///
/// Usage: register rules, ingest every base tile, then call [`finish`] once.
/// `finish` consumes the generator, so the library cannot be observed before
/// ingestion completes.
///
/// [`finish`]: PrototypeGenerator::finish
#[derive(Debug, Default)]
pub struct PrototypeGenerator {
    rules: Vec<GenerationRule>,
    sockets: SocketRules,
    variants: Vec<TileVariant>,
    seen: HashSet<VariantKey>,
    stats: GeneratorStats,
}

impl PrototypeGenerator {
    /// Create a generator over the given socket mating table
    pub fn new(sockets: SocketRules) -> Self {
        Self {
            rules: Vec::new(),
            sockets,
            variants: Vec::new(),
            seen: HashSet::new(),
            stats: GeneratorStats::default(),
        }
    }

    /// Register an expansion rule
    ///
    /// Rules are independent and order-insensitive; registration order does
    /// not affect the frozen library beyond prototype enumeration order.
    pub fn add_rule(&mut self, rule: GenerationRule) {
        self.rules.push(rule);
    }

    /// Ingest one base tile, running every registered rule against it
    ///
    /// Returns the number of new (non-duplicate) variants kept. Zero is not
    /// an error, but is recorded in [`GeneratorStats::starved`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the descriptor or any produced variant
    /// carries a non-positive weight.
    pub fn ingest(&mut self, tile: &TileDescriptor) -> Result<usize> {
        if tile.weight <= 0.0 {
            return Err(invalid_parameter(
                "weight",
                &tile.weight,
                &format!("tile '{}' must have a positive weight", tile.name),
            ));
        }

        let mut added = 0;
        for rule in &self.rules {
            for variant in rule.expand(tile) {
                if variant.weight <= 0.0 {
                    return Err(invalid_parameter(
                        "weight",
                        &variant.weight,
                        &format!("variant of '{}' must have a positive weight", tile.name),
                    ));
                }
                if self.seen.insert(VariantKey::of(&variant)) {
                    self.variants.push(variant);
                    added += 1;
                } else {
                    self.stats.deduplicated += 1;
                }
            }
        }

        self.stats.produced.push((tile.name.clone(), added));
        if added == 0 {
            self.stats.starved.push(tile.name.clone());
        }
        Ok(added)
    }

    /// Statistics gathered so far
    pub const fn stats(&self) -> &GeneratorStats {
        &self.stats
    }

    /// Number of variants kept so far
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Freeze the library, computing per-direction compatibility bitsets
    ///
    /// P allows Q in direction d exactly when their facing sockets mate;
    /// because the mating table is unordered, the reverse relation holds for
    /// Q in opposite(d) by construction.
    ///
    /// # Errors
    ///
    /// Returns `NothingIngested` if no variants were produced.
    pub fn finish(self) -> Result<PrototypeSet> {
        if self.variants.is_empty() {
            return Err(AlgorithmError::NothingIngested);
        }

        let count = self.variants.len();
        let mut prototypes = Vec::with_capacity(count);

        for variant in &self.variants {
            let compatible = Direction::ALL.map(|direction| {
                let mut allowed = DomainBitset::new(count);
                for (other_index, other) in self.variants.iter().enumerate() {
                    let facing = other.socket(direction.opposite());
                    if self.sockets.mates(variant.socket(direction), facing) {
                        allowed.insert(other_index);
                    }
                }
                allowed
            });

            prototypes.push(Prototype::new(
                variant.payload.clone(),
                variant.weight,
                compatible,
            ));
        }

        Ok(PrototypeSet::new(prototypes, self.stats.starved))
    }
}
