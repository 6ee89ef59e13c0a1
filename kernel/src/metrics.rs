//! Instrumentation counters threaded through every strategy.

use std::collections::BTreeMap;

/// Property key: nodes expanded so far.
pub const NODES_EXPANDED: &str = "nodesExpanded";
/// Property key: current frontier size.
pub const QUEUE_SIZE: &str = "queueSize";
/// Property key: frontier high-water mark.
pub const MAX_QUEUE_SIZE: &str = "maxQueueSize";
/// Property key: deepest node generated.
pub const MAX_DEPTH: &str = "maxDepth";
/// Property key: cost of the returned path.
pub const PATH_COST: &str = "pathCost";

/// Counters for one search invocation.
///
/// Strategies reset nothing: a fresh `Metrics` is created per search and
/// returned with the result. Iterative deepening accumulates expansions over
/// all of its depth-limited passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metrics {
    pub nodes_expanded: u64,
    pub queue_size: u64,
    pub max_queue_size: u64,
    pub max_depth: u32,
    pub path_cost: f64,
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current frontier size and update the high-water mark.
    pub fn record_queue_size(&mut self, size: usize) {
        let size = size as u64;
        self.queue_size = size;
        if size > self.max_queue_size {
            self.max_queue_size = size;
        }
    }

    /// Update the deepest generated node.
    pub fn record_depth(&mut self, depth: u32) {
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }

    /// Fold another pass's counters into this one (used by iterative deepening).
    pub fn absorb(&mut self, other: &Self) {
        self.nodes_expanded += other.nodes_expanded;
        self.queue_size = other.queue_size;
        self.max_queue_size = self.max_queue_size.max(other.max_queue_size);
        self.max_depth = self.max_depth.max(other.max_depth);
        self.path_cost = other.path_cost;
    }

    /// Read-only string-keyed view for reporting tools.
    #[must_use]
    pub fn properties(&self) -> BTreeMap<String, String> {
        let mut props = BTreeMap::new();
        props.insert(NODES_EXPANDED.to_string(), self.nodes_expanded.to_string());
        props.insert(QUEUE_SIZE.to_string(), self.queue_size.to_string());
        props.insert(MAX_QUEUE_SIZE.to_string(), self.max_queue_size.to_string());
        props.insert(MAX_DEPTH.to_string(), self.max_depth.to_string());
        props.insert(PATH_COST.to_string(), self.path_cost.to_string());
        props
    }

    /// Look up a single property by key.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<String> {
        self.properties().remove(key)
    }

    /// JSON object of [`Metrics::properties`]. Values stay strings so the
    /// object is valid input for canonical hashing.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .properties()
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect();
        serde_json::Value::Object(map)
    }
}
