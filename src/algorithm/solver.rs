//! Entropy-ordered observation loop driving collapse to a terminal state

use crate::algorithm::propagation::propagate;
use crate::algorithm::selector::WeightedSelector;
use crate::io::configuration::ENTROPY_TIE_EPSILON;
use crate::io::error::{AlgorithmError, Result};
use crate::lattice::{Coord, Lattice, LatticeState, Node, NodeState};
use crate::proto::PrototypeSet;
use crate::proto::tile::TilePayload;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Terminal result of a fully collapsed run
#[derive(Clone, Debug)]
pub struct Solution {
    /// Resolved (coordinate, payload) pairs, one per lattice cell
    pub assignments: Vec<(Coord, TilePayload)>,
    /// Number of observation steps performed
    pub observations: usize,
    /// Coordinates in the order they were observed
    pub history: Vec<Coord>,
}

/// The collapse state machine over one lattice
///
/// Runs single-threaded to completion: repeated (select → observe →
/// propagate) until the lattice classifies as collapsed or contradictory.
/// The engine owns the lattice for the run, so nothing else can mutate node
/// domains mid-run. Randomness comes from one seeded generator, making a run
/// fully reproducible from (seed, prototype set, topology, constraints).
pub struct CollapseEngine {
    lattice: Lattice,
    prototypes: PrototypeSet,
    rng: StdRng,
    selector: WeightedSelector<usize>,
    step_budget: usize,
    observations: usize,
    history: Vec<Coord>,
    primed: bool,
}

impl CollapseEngine {
    /// Create an engine over a prepared lattice
    ///
    /// The default step budget is the sum of initial domain sizes: every
    /// observation strictly shrinks at least one domain, so a correct run can
    /// never need more steps than that.
    pub fn new(lattice: Lattice, prototypes: PrototypeSet, seed: u64) -> Self {
        let step_budget = lattice
            .nodes()
            .iter()
            .map(|node| node.domain().count())
            .sum();
        Self {
            lattice,
            prototypes,
            rng: StdRng::seed_from_u64(seed),
            selector: WeightedSelector::new(),
            step_budget,
            observations: 0,
            history: Vec::new(),
            primed: false,
        }
    }

    /// Replace the default step budget
    #[must_use]
    pub fn with_step_budget(mut self, budget: usize) -> Self {
        self.step_budget = budget;
        self
    }

    /// The lattice in its current partial or terminal state
    pub const fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The frozen prototype library
    pub const fn prototypes(&self) -> &PrototypeSet {
        &self.prototypes
    }

    /// Observation steps performed so far
    pub const fn observations(&self) -> usize {
        self.observations
    }

    /// Perform one (select → observe → propagate) step
    ///
    /// Returns `Ok(true)` while unknown nodes remain and `Ok(false)` once the
    /// lattice is fully collapsed. The first step primes the lattice by
    /// propagating from every pre-constrained node, so seeded cells that are
    /// mutually inconsistent surface as a contradiction instead of slipping
    /// into the output.
    ///
    /// # Errors
    ///
    /// Returns `Contradiction` when some domain has emptied and
    /// `StepBudgetExhausted` when the observation cap is hit.
    pub fn step(&mut self) -> Result<bool> {
        if !self.primed {
            self.primed = true;
            if let LatticeState::Contradiction(coordinate) = self.lattice.classify() {
                return Err(AlgorithmError::Contradiction {
                    coordinate,
                    observations: self.observations,
                });
            }
            self.prime()?;
        }

        match self.lattice.classify() {
            LatticeState::Collapsed => return Ok(false),
            LatticeState::Contradiction(coordinate) => {
                return Err(AlgorithmError::Contradiction {
                    coordinate,
                    observations: self.observations,
                });
            }
            LatticeState::Unknown => {}
        }

        if self.observations >= self.step_budget {
            return Err(AlgorithmError::StepBudgetExhausted {
                budget: self.step_budget,
            });
        }

        let Some(chosen) = self.lowest_entropy_node() else {
            return Ok(false);
        };

        self.observe(chosen);
        self.observations += 1;

        let report = propagate(&mut self.lattice, &self.prototypes, chosen);
        if let Some(coordinate) = report.contradiction {
            return Err(AlgorithmError::Contradiction {
                coordinate,
                observations: self.observations,
            });
        }

        Ok(true)
    }

    /// Run the observation loop to a terminal state
    ///
    /// # Errors
    ///
    /// Returns `Contradiction` when no consistent assignment is reachable
    /// from the current partial state (no backtracking is attempted — the
    /// caller decides whether to retry with a new seed) and
    /// `StepBudgetExhausted` when the observation cap is hit.
    pub fn run(&mut self) -> Result<Solution> {
        while self.step()? {}
        self.solution()
    }

    /// Build the resolved output once every domain is a singleton
    ///
    /// # Errors
    ///
    /// Returns `NotCollapsed` if any node remains unresolved.
    pub fn solution(&self) -> Result<Solution> {
        let mut assignments = Vec::with_capacity(self.lattice.len());
        for (coord, prototype) in self.lattice.resolved()? {
            if let Some(resolved) = self.prototypes.get(prototype) {
                assignments.push((coord, resolved.payload().clone()));
            }
        }
        Ok(Solution {
            assignments,
            observations: self.observations,
            history: self.history.clone(),
        })
    }

    /// Entropy of one node: the sum of its domain's weights
    ///
    /// A collapse-order heuristic, not information-theoretic entropy.
    pub fn entropy(&self, node: &Node) -> f64 {
        node.domain()
            .iter_indices()
            .map(|prototype| self.prototypes.weight(prototype))
            .sum()
    }

    /// Propagate once from every node whose domain was narrowed before the run
    fn prime(&mut self) -> Result<()> {
        let full = self.prototypes.len();
        let seeded: Vec<usize> = self
            .lattice
            .nodes()
            .iter()
            .enumerate()
            .filter(|(_, node)| node.domain().count() < full)
            .map(|(index, _)| index)
            .collect();

        for origin in seeded {
            let report = propagate(&mut self.lattice, &self.prototypes, origin);
            if let Some(coordinate) = report.contradiction {
                return Err(AlgorithmError::Contradiction {
                    coordinate,
                    observations: self.observations,
                });
            }
        }
        Ok(())
    }

    /// Minimum-entropy unknown node, ties broken uniformly at random
    fn lowest_entropy_node(&mut self) -> Option<usize> {
        let mut minimum = f64::INFINITY;
        for node in self.lattice.nodes() {
            if node.state() == NodeState::Unknown {
                let entropy = self.entropy(node);
                if entropy < minimum {
                    minimum = entropy;
                }
            }
        }
        if !minimum.is_finite() {
            return None;
        }

        let ties: Vec<usize> = self
            .lattice
            .nodes()
            .iter()
            .enumerate()
            .filter(|(_, node)| {
                node.state() == NodeState::Unknown
                    && (self.entropy(node) - minimum).abs() <= ENTROPY_TIE_EPSILON
            })
            .map(|(index, _)| index)
            .collect();

        if ties.is_empty() {
            return None;
        }
        let pick = self.rng.random_range(0..ties.len());
        ties.get(pick).copied()
    }

    /// Commit one node to a single prototype via weighted random draw
    fn observe(&mut self, index: usize) {
        let Some((coord, members)) = self
            .lattice
            .node(index)
            .map(|node| (node.coord(), node.domain().to_vec()))
        else {
            return;
        };

        self.selector.clear();
        for prototype in members {
            self.selector
                .add_item(prototype, self.prototypes.weight(prototype));
        }

        let choice = self.rng.random::<f64>() * self.selector.total_weight();
        let Some(&selected) = self.selector.pick(choice) else {
            return;
        };

        if let Some(node) = self.lattice.node_mut(index) {
            node.collapse_to(selected);
        }
        self.history.push(coord);
    }
}
