//! Performance measurement for full collapse runs at varying lattice sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wavelattice::algorithm::CollapseEngine;
use wavelattice::io::cli::demo_tileset;
use wavelattice::lattice::{GridTopology, Lattice};
use wavelattice::proto::rules::GenerationRule;
use wavelattice::proto::{PrototypeGenerator, PrototypeSet};

fn demo_prototypes() -> Option<PrototypeSet> {
    let (tiles, sockets, _) = demo_tileset();
    let mut generator = PrototypeGenerator::new(sockets);
    generator.add_rule(GenerationRule::Identity);
    generator.add_rule(GenerationRule::Rotations);
    for tile in &tiles {
        if generator.ingest(tile).is_err() {
            return None;
        }
    }
    generator.finish().ok()
}

/// Measures end-to-end collapse cost as the grid grows
fn bench_collapse_full_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("collapse_full_grid");

    for side in &[8_usize, 16, 32] {
        let Some(prototypes) = demo_prototypes() else {
            group.finish();
            return;
        };
        let Ok(topology) = GridTopology::flat(*side, *side) else {
            group.finish();
            return;
        };
        let Ok(lattice) = Lattice::generate(&topology, &prototypes) else {
            group.finish();
            return;
        };

        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, _| {
            b.iter(|| {
                let mut engine =
                    CollapseEngine::new(lattice.clone(), prototypes.clone(), 12345);
                let Ok(solution) = engine.run() else {
                    return;
                };
                black_box(solution.observations);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_collapse_full_grid);
criterion_main!(benches);
