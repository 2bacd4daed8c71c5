//! Coordinate model, topologies, and the node lattice
//!
//! Nodes live in a dense arena owned by the [`Lattice`]; neighbor links and
//! the coordinate index are plain indices into that arena, so there are no
//! reference cycles and no shared ownership.

/// Hashable cell keys
pub mod coord;
/// Axis-aligned adjacency directions
pub mod direction;
/// Pluggable finite coordinate spaces
pub mod topology;

pub use coord::Coord;
pub use direction::Direction;
pub use topology::{GridTopology, Topology};

use crate::algorithm::domain::DomainBitset;
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::proto::PrototypeSet;
use std::collections::HashMap;

/// Classification of one node's domain
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
    /// Domain holds more than one prototype
    Unknown,
    /// Domain holds exactly one prototype
    Collapsed,
    /// Domain is empty: no valid assignment exists from this state
    Impossible,
}

/// Classification of the whole lattice, folded over its nodes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatticeState {
    /// At least one node is still unknown
    Unknown,
    /// Every node is collapsed: terminal success
    Collapsed,
    /// Some node is impossible: terminal failure at the named coordinate
    Contradiction(Coord),
}

/// Mutable per-cell state
///
/// Created once during lattice construction with the full prototype set as
/// its domain, then mutated only by observation and propagation. Domains
/// shrink monotonically for the duration of a run.
#[derive(Clone, Debug)]
pub struct Node {
    coord: Coord,
    domain: DomainBitset,
    neighbors: [Option<usize>; Direction::COUNT],
}

impl Node {
    /// Coordinate of this cell
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    /// Prototypes still possible for this cell
    pub const fn domain(&self) -> &DomainBitset {
        &self.domain
    }

    /// Arena index of the neighbor in `direction`, if one exists
    pub fn neighbor(&self, direction: Direction) -> Option<usize> {
        self.neighbors.get(direction.index()).copied().flatten()
    }

    /// Classify this node by its domain size
    pub fn state(&self) -> NodeState {
        match self.domain.count() {
            0 => NodeState::Impossible,
            1 => NodeState::Collapsed,
            _ => NodeState::Unknown,
        }
    }

    pub(crate) const fn domain_mut(&mut self) -> &mut DomainBitset {
        &mut self.domain
    }

    pub(crate) fn collapse_to(&mut self, prototype: usize) {
        self.domain = DomainBitset::from_indices(&[prototype], self.domain.capacity());
    }
}

/// Dense arena of nodes keyed by coordinate
///
/// Invariants: every neighbor index resolves to a node in the arena, and
/// neighbor wiring is symmetric — if B is A's neighbor in direction d, A is
/// B's neighbor in opposite(d). Both hold by construction when the topology's
/// `neighbor_of` is self-consistent.
#[derive(Clone, Debug)]
pub struct Lattice {
    nodes: Vec<Node>,
    index: HashMap<Coord, usize>,
}

impl Lattice {
    /// Build the node graph for a topology, with full domains everywhere
    ///
    /// # Errors
    ///
    /// Returns `EmptyPrototypeSet` when the library is empty, and
    /// `InvalidParameter` when the topology enumerates no coordinates or
    /// repeats one.
    pub fn generate(topology: &dyn Topology, prototypes: &PrototypeSet) -> Result<Self> {
        if prototypes.is_empty() {
            return Err(AlgorithmError::EmptyPrototypeSet);
        }

        let coords = topology.coordinates();
        if coords.is_empty() {
            return Err(invalid_parameter(
                "topology",
                &"<empty>",
                &"must enumerate at least one coordinate",
            ));
        }

        let mut index = HashMap::with_capacity(coords.len());
        let mut nodes = Vec::with_capacity(coords.len());
        for (position, &coord) in coords.iter().enumerate() {
            if index.insert(coord, position).is_some() {
                return Err(invalid_parameter(
                    "topology",
                    &coord,
                    &"enumerated the same coordinate twice",
                ));
            }
            nodes.push(Node {
                coord,
                domain: prototypes.full_domain(),
                neighbors: [None; Direction::COUNT],
            });
        }

        for node in &mut nodes {
            for direction in Direction::ALL {
                let linked = topology
                    .neighbor_of(node.coord, direction)
                    .and_then(|neighbor| index.get(&neighbor).copied());
                if let Some(slot) = node.neighbors.get_mut(direction.index()) {
                    *slot = linked;
                }
            }
        }

        Ok(Self { nodes, index })
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Test if the lattice has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in arena order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Look up a node by arena index
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Arena index of the node at `coord`, if present
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.index.get(&coord).copied()
    }

    /// Fold node states into a lattice state
    ///
    /// Any impossible node short-circuits to `Contradiction`.
    pub fn classify(&self) -> LatticeState {
        let mut any_unknown = false;
        for node in &self.nodes {
            match node.state() {
                NodeState::Impossible => return LatticeState::Contradiction(node.coord),
                NodeState::Unknown => any_unknown = true,
                NodeState::Collapsed => {}
            }
        }
        if any_unknown {
            LatticeState::Unknown
        } else {
            LatticeState::Collapsed
        }
    }

    /// Number of nodes already collapsed to a single prototype
    pub fn collapsed_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.state() == NodeState::Collapsed)
            .count()
    }

    /// Intersect a node's domain with `allowed` before a run starts
    ///
    /// Pre-seeding hook: restricting a cell to a known subset lets callers
    /// pin features or reproduce scenarios. Domains only shrink, so
    /// constraining with a superset is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCoordinate` if no node exists at `coord`.
    pub fn constrain(&mut self, coord: Coord, allowed: &DomainBitset) -> Result<()> {
        let position = self
            .index
            .get(&coord)
            .copied()
            .ok_or(AlgorithmError::UnknownCoordinate { coordinate: coord })?;
        if let Some(node) = self.nodes.get_mut(position) {
            node.domain_mut().intersect_with(allowed);
        }
        Ok(())
    }

    /// Resolved (coordinate, prototype index) pairs, one per cell
    ///
    /// # Errors
    ///
    /// Returns `NotCollapsed` naming the first unresolved coordinate if any
    /// node's domain is not a singleton.
    pub fn resolved(&self) -> Result<Vec<(Coord, usize)>> {
        let mut assignments = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            match (node.state(), node.domain.first()) {
                (NodeState::Collapsed, Some(prototype)) => {
                    assignments.push((node.coord, prototype));
                }
                _ => {
                    return Err(AlgorithmError::NotCollapsed {
                        coordinate: node.coord,
                    });
                }
            }
        }
        Ok(assignments)
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }
}
