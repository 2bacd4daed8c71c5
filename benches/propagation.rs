//! Performance measurement for a single propagation sweep from a pinned cell

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wavelattice::algorithm::domain::DomainBitset;
use wavelattice::algorithm::propagation::propagate;
use wavelattice::io::cli::demo_tileset;
use wavelattice::lattice::{Coord, GridTopology, Lattice};
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

/// Measures one full sweep after pinning the center cell to a singleton
fn bench_propagate_from_center(c: &mut Criterion) {
    let mut group = c.benchmark_group("propagate_from_center");

    for side in &[16_usize, 32, 64] {
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
        let half = (*side / 2) as i32;
        let center = Coord::new(half, half, 0);

        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, _| {
            b.iter(|| {
                let mut lattice = lattice.clone();
                let pinned = DomainBitset::from_indices(&[0], prototypes.len());
                if lattice.constrain(center, &pinned).is_err() {
                    return;
                }
                let Some(origin) = lattice.index_of(center) else {
                    return;
                };
                let report = propagate(&mut lattice, &prototypes, origin);
                black_box(report.visited);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_propagate_from_center);
criterion_main!(benches);
