//! Insertion-ordered weighted random selection

/// Cumulative-weight selector used during observation
///
/// Items are walked in insertion order; a draw selects the first item whose
/// cumulative weight reaches the supplied choice value. The total weight is
/// maintained incrementally so reads are O(1). The selector is cleared and
/// repopulated from the observed node's current domain before every draw.
#[derive(Clone, Debug)]
pub struct WeightedSelector<T> {
    items: Vec<(T, f64)>,
    total_weight: f64,
}

impl<T> Default for WeightedSelector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WeightedSelector<T> {
    /// Create an empty selector
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            total_weight: 0.0,
        }
    }

    /// Register a candidate with the caller-supplied weight, recorded verbatim
    pub fn add_item(&mut self, item: T, weight: f64) {
        self.total_weight += weight;
        self.items.push((item, weight));
    }

    /// Sum of all registered weights
    pub const fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Number of registered candidates
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Test if no candidates are registered
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Select the first item whose cumulative weight reaches `choice`
    ///
    /// Returns `None` when the candidate set is empty; an empty domain is a
    /// condition the classification step has already detected, not a selector
    /// error. A `choice` past the total weight (floating-point slack) falls
    /// back to the final item.
    pub fn pick(&self, choice: f64) -> Option<&T> {
        let mut cumulative = 0.0;
        for (item, weight) in &self.items {
            cumulative += weight;
            if cumulative >= choice {
                return Some(item);
            }
        }
        self.items.last().map(|(item, _)| item)
    }

    /// Reset all state before the next observation
    pub fn clear(&mut self) {
        self.items.clear();
        self.total_weight = 0.0;
    }
}
