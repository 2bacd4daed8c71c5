//! Validates variant expansion, structural deduplication, and frozen compatibility

use wavelattice::AlgorithmError;
use wavelattice::io::cli::demo_tileset;
use wavelattice::lattice::Direction;
use wavelattice::proto::rules::{GenerationRule, VariantRule};
use wavelattice::proto::tile::{SocketRules, TileDescriptor, TileVariant};
use wavelattice::proto::{PrototypeGenerator, PrototypeSet};

fn must<T>(result: wavelattice::Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => unreachable!("unexpected error: {err}"),
    }
}

fn open_rules(labels: &[&str]) -> SocketRules {
    let mut sockets = SocketRules::new();
    for a in labels {
        for b in labels {
            sockets.allow(a, b);
        }
    }
    sockets
}

#[test]
fn test_identity_rule_keeps_one_variant_per_tile() {
    let mut generator = PrototypeGenerator::new(open_rules(&["a"]));
    generator.add_rule(GenerationRule::Identity);

    let added = must(generator.ingest(&TileDescriptor::new(
        "plain",
        1.0,
        ["a", "a", "a", "a", "a", "a"],
    )));
    assert_eq!(added, 1);

    let prototypes = must(generator.finish());
    assert_eq!(prototypes.len(), 1);
    let Some(prototype) = prototypes.get(0) else {
        unreachable!("library must contain the ingested tile");
    };
    assert_eq!(prototype.payload().asset, "plain");
    assert_eq!(prototype.payload().rotation, 0);
    assert!(!prototype.payload().mirrored);
}

#[test]
fn test_rotations_of_symmetric_tile_deduplicate_to_nothing() {
    let mut generator = PrototypeGenerator::new(open_rules(&["a"]));
    generator.add_rule(GenerationRule::Identity);
    generator.add_rule(GenerationRule::Rotations);

    let added = must(generator.ingest(&TileDescriptor::new(
        "uniform",
        1.0,
        ["a", "a", "a", "a", "a", "a"],
    )));

    // All three rotations are structurally identical to the identity
    assert_eq!(added, 1);
    assert_eq!(generator.stats().deduplicated, 3);
}

#[test]
fn test_two_fold_tile_keeps_two_rotations() {
    let mut generator = PrototypeGenerator::new(open_rules(&["r", "g"]));
    generator.add_rule(GenerationRule::Identity);
    generator.add_rule(GenerationRule::Rotations);

    // A straight road: X faces and Y faces differ, but a half turn maps the
    // tile onto itself
    let added = must(generator.ingest(&TileDescriptor::new(
        "road",
        1.0,
        ["r", "r", "g", "g", "v", "v"],
    )));
    assert_eq!(added, 2);

    let prototypes = must(generator.finish());
    let rotations: Vec<u8> = prototypes.iter().map(|p| p.payload().rotation).collect();
    assert_eq!(rotations, vec![0, 1]);
}

#[test]
fn test_fully_asymmetric_tile_keeps_all_four_rotations() {
    let mut generator = PrototypeGenerator::new(open_rules(&["a", "b", "c", "d"]));
    generator.add_rule(GenerationRule::Identity);
    generator.add_rule(GenerationRule::Rotations);

    let added = must(generator.ingest(&TileDescriptor::new(
        "corner",
        1.0,
        ["a", "b", "c", "d", "v", "v"],
    )));
    assert_eq!(added, 4);
}

#[test]
fn test_mirror_rule_reflects_across_x() {
    let mut generator = PrototypeGenerator::new(open_rules(&["a", "b", "c"]));
    generator.add_rule(GenerationRule::Identity);
    generator.add_rule(GenerationRule::Mirror);

    let added = must(generator.ingest(&TileDescriptor::new(
        "ramp",
        1.0,
        ["a", "b", "c", "c", "v", "v"],
    )));
    assert_eq!(added, 2);

    let prototypes = must(generator.finish());
    let mirrored: Vec<bool> = prototypes.iter().map(|p| p.payload().mirrored).collect();
    assert_eq!(mirrored, vec![false, true]);
}

#[test]
fn test_mirror_of_x_symmetric_tile_deduplicates() {
    let mut generator = PrototypeGenerator::new(open_rules(&["a", "c"]));
    generator.add_rule(GenerationRule::Identity);
    generator.add_rule(GenerationRule::Mirror);

    let added = must(generator.ingest(&TileDescriptor::new(
        "even",
        1.0,
        ["a", "a", "c", "c", "v", "v"],
    )));
    assert_eq!(added, 1);
    assert_eq!(generator.stats().deduplicated, 1);
}

struct HeavyTwin;

impl VariantRule for HeavyTwin {
    fn expand(&self, tile: &TileDescriptor) -> Vec<TileVariant> {
        let mut twin = TileVariant::from_descriptor(tile);
        twin.weight = tile.weight * 2.0;
        vec![twin]
    }
}

#[test]
fn test_custom_rule_contributes_variants() {
    let mut generator = PrototypeGenerator::new(open_rules(&["a"]));
    generator.add_rule(GenerationRule::Identity);
    generator.add_rule(GenerationRule::Custom(Box::new(HeavyTwin)));

    let added = must(generator.ingest(&TileDescriptor::new(
        "stone",
        1.5,
        ["a", "a", "a", "a", "a", "a"],
    )));

    // Same sockets but a different weight is a distinct prototype
    assert_eq!(added, 2);
    let prototypes = must(generator.finish());
    let weights: Vec<f64> = prototypes.iter().map(|p| p.weight()).collect();
    assert!((weights.iter().sum::<f64>() - 4.5).abs() < 1e-12);
}

struct SkipNamed(&'static str);

impl VariantRule for SkipNamed {
    fn expand(&self, tile: &TileDescriptor) -> Vec<TileVariant> {
        if tile.name == self.0 {
            Vec::new()
        } else {
            vec![TileVariant::from_descriptor(tile)]
        }
    }
}

#[test]
fn test_starved_tile_is_observable_but_not_an_error() {
    let mut generator = PrototypeGenerator::new(open_rules(&["a"]));
    generator.add_rule(GenerationRule::Custom(Box::new(SkipNamed("ghost"))));

    let kept = must(generator.ingest(&TileDescriptor::new(
        "solid",
        1.0,
        ["a", "a", "a", "a", "a", "a"],
    )));
    let skipped = must(generator.ingest(&TileDescriptor::new(
        "ghost",
        1.0,
        ["a", "a", "a", "a", "a", "a"],
    )));

    assert_eq!(kept, 1);
    assert_eq!(skipped, 0);
    assert_eq!(generator.stats().starved, vec!["ghost".to_owned()]);

    let prototypes = must(generator.finish());
    assert_eq!(prototypes.len(), 1);
    assert_eq!(prototypes.starved_tiles(), ["ghost".to_owned()]);
}

#[test]
fn test_freezing_an_empty_generator_is_a_usage_error() {
    let generator = PrototypeGenerator::new(SocketRules::new());
    assert!(matches!(
        generator.finish(),
        Err(AlgorithmError::NothingIngested)
    ));
}

#[test]
fn test_non_positive_weight_is_rejected() {
    let mut generator = PrototypeGenerator::new(open_rules(&["a"]));
    generator.add_rule(GenerationRule::Identity);

    let result = generator.ingest(&TileDescriptor::new(
        "weightless",
        0.0,
        ["a", "a", "a", "a", "a", "a"],
    ));
    assert!(matches!(
        result,
        Err(AlgorithmError::InvalidParameter { parameter: "weight", .. })
    ));
}

fn demo_prototypes() -> PrototypeSet {
    let (tiles, sockets, _) = demo_tileset();
    let mut generator = PrototypeGenerator::new(sockets);
    generator.add_rule(GenerationRule::Identity);
    generator.add_rule(GenerationRule::Rotations);
    generator.add_rule(GenerationRule::Mirror);
    for tile in &tiles {
        must(generator.ingest(tile));
    }
    must(generator.finish())
}

#[test]
fn test_compatibility_cross_invariant_holds_by_construction() {
    let prototypes = demo_prototypes();

    for p in 0..prototypes.len() {
        for q in 0..prototypes.len() {
            for direction in Direction::ALL {
                let forward = prototypes
                    .get(p)
                    .map(|proto| proto.compatible(direction).contains(q));
                let backward = prototypes
                    .get(q)
                    .map(|proto| proto.compatible(direction.opposite()).contains(p));
                assert_eq!(forward, backward, "asymmetric compatibility for {p}/{q}");
            }
        }
    }
}

#[test]
fn test_unmated_socket_yields_empty_compatible_sets() {
    let mut sockets = SocketRules::new();
    sockets.allow("a", "a");

    let mut generator = PrototypeGenerator::new(sockets);
    generator.add_rule(GenerationRule::Identity);
    must(generator.ingest(&TileDescriptor::new(
        "island",
        1.0,
        ["iso", "iso", "iso", "iso", "iso", "iso"],
    )));
    let prototypes = must(generator.finish());

    let Some(island) = prototypes.get(0) else {
        unreachable!("library must contain the ingested tile");
    };
    for direction in Direction::ALL {
        // Empty means nothing may sit adjacent, not "unconstrained"
        assert!(island.compatible(direction).is_empty());
    }
}
