//! Strategy catalog: caller-built name → strategy mapping.
//!
//! There is no global registry. Callers build a catalog, usually from
//! [`Catalog::standard`], and look strategies up by name.

use std::collections::BTreeMap;

use aima_search::{
    AStarSearch, BreadthFirstSearch, DepthFirstSearch, DepthLimitedSearch, GreedyBestFirstSearch,
    HillClimbingSearch, IterativeDeepeningSearch, SimulatedAnnealingSearch, Strategy,
    UniformCostSearch,
};

use crate::contract::WorldError;

/// Parameters for [`Catalog::standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Bound for the `"dls"` entry.
    pub depth_limit: u32,
    /// Seed for the `"simulated-annealing"` entry.
    pub seed: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            depth_limit: 9,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Catalog<H> {
    entries: BTreeMap<String, Strategy<H>>,
}

impl<H> Catalog<H> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add `strategy` under `name`, returning the entry it replaced.
    pub fn register(&mut self, name: impl Into<String>, strategy: Strategy<H>) -> Option<Strategy<H>> {
        self.entries.insert(name.into(), strategy)
    }

    /// # Errors
    ///
    /// Returns [`WorldError::UnknownStrategy`] if nothing is registered
    /// under `name`.
    pub fn get(&self, name: &str) -> Result<&Strategy<H>, WorldError> {
        self.entries.get(name).ok_or_else(|| WorldError::UnknownStrategy {
            name: name.to_string(),
        })
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H> Default for Catalog<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Clone> Catalog<H> {
    /// One entry per strategy, with default policies. The informed and local
    /// entries share `heuristic`.
    #[must_use]
    pub fn standard(heuristic: H, config: CatalogConfig) -> Self {
        let mut catalog = Self::new();
        catalog.register("bfs", Strategy::BreadthFirst(BreadthFirstSearch::default()));
        catalog.register("dfs", Strategy::DepthFirst(DepthFirstSearch::default()));
        catalog.register(
            "dls",
            Strategy::DepthLimited(DepthLimitedSearch::new(config.depth_limit)),
        );
        catalog.register(
            "ids",
            Strategy::IterativeDeepening(IterativeDeepeningSearch::default()),
        );
        catalog.register("ucs", Strategy::UniformCost(UniformCostSearch::default()));
        catalog.register(
            "greedy",
            Strategy::Greedy(GreedyBestFirstSearch::new(heuristic.clone())),
        );
        catalog.register("astar", Strategy::AStar(AStarSearch::new(heuristic.clone())));
        catalog.register(
            "hill-climbing",
            Strategy::HillClimbing(HillClimbingSearch::new(heuristic.clone())),
        );
        catalog.register(
            "simulated-annealing",
            Strategy::SimulatedAnnealing(SimulatedAnnealingSearch::new(heuristic).with_seed(config.seed)),
        );
        catalog
    }
}
