//! Breadth-first arc-consistency sweep over node domains

use crate::lattice::{Coord, Direction, Lattice, NodeState};
use crate::proto::PrototypeSet;
use bitvec::prelude::{BitVec, bitvec};
use std::collections::VecDeque;

/// Outcome of one propagation pass
#[derive(Clone, Debug, Default)]
pub struct PropagationReport {
    /// Nodes visited during the sweep
    pub visited: usize,
    /// Nodes whose domain shrank
    pub shrunk: usize,
    /// Coordinate of the first node whose domain emptied, if any
    pub contradiction: Option<Coord>,
}

/// Propagate constraints outward from an observed node
///
/// Breadth-first traversal over the neighbor graph visiting each reachable
/// node at most once per pass. Every visited node has its domain
/// intersected, per live neighbor in direction d, with the union over that
/// neighbor's domain of compatible sets in opposite(d) — what the neighbor
/// still permits adjacent to itself, facing back. Collapsed nodes are
/// intersected too: a singleton that loses its support empties out and
/// surfaces the inconsistency instead of masking it.
///
/// This is a single arc-consistency sweep, not full path consistency;
/// repeated passes from successive observations converge the fixed point
/// incrementally. Intersection is commutative and associative, so traversal
/// order does not affect the result. The sweep stops early at the first
/// emptied domain and reports its coordinate.
pub fn propagate(
    lattice: &mut Lattice,
    prototypes: &PrototypeSet,
    origin: usize,
) -> PropagationReport {
    let mut report = PropagationReport::default();
    let mut queued: BitVec = bitvec![0; lattice.len()];
    let mut queue = VecDeque::with_capacity(lattice.len());

    if origin >= lattice.len() {
        return report;
    }
    queued.set(origin, true);
    queue.push_back(origin);

    while let Some(current) = queue.pop_front() {
        report.visited += 1;

        let Some(node) = lattice.node(current) else {
            continue;
        };

        for direction in Direction::ALL {
            if let Some(neighbor) = node.neighbor(direction) {
                if queued.get(neighbor).as_deref() != Some(&true) {
                    queued.set(neighbor, true);
                    queue.push_back(neighbor);
                }
            }
        }

        let mut changed = false;
        for direction in Direction::ALL {
            let support = match lattice
                .node(current)
                .and_then(|node| node.neighbor(direction))
                .and_then(|neighbor| lattice.node(neighbor))
            {
                Some(neighbor) => {
                    prototypes.support(neighbor.domain(), direction.opposite())
                }
                None => continue,
            };

            if let Some(node) = lattice.node_mut(current) {
                if node.domain_mut().intersect_with(&support) {
                    changed = true;
                }
            }
        }

        if changed {
            report.shrunk += 1;
            if let Some(node) = lattice.node(current) {
                if node.state() == NodeState::Impossible {
                    report.contradiction = Some(node.coord());
                    return report;
                }
            }
        }
    }

    report
}
