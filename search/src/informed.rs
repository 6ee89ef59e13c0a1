//! Heuristic strategies: greedy best-first and A*.

use aima_kernel::{CancelToken, Heuristic, Problem};

use crate::error::SearchError;
use crate::eval::{AStarEvaluation, GreedyEvaluation};
use crate::outcome::SearchResult;
use crate::policy::{FrontierKind, SearchPolicy};
use crate::queue::queue_search;
use crate::strategy::Search;

/// Expands the node with the lowest `h` first. Neither complete on infinite
/// spaces nor optimal.
#[derive(Debug, Clone, Copy)]
pub struct GreedyBestFirstSearch<H> {
    pub heuristic: H,
    pub policy: SearchPolicy,
}

impl<H> GreedyBestFirstSearch<H> {
    pub const NAME: &'static str = "greedy best-first search";

    pub fn new(heuristic: H) -> Self {
        Self {
            heuristic,
            policy: SearchPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl<P, H> Search<P> for GreedyBestFirstSearch<H>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn search(
        &self,
        problem: &P,
        cancel: &CancelToken,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        let eval = GreedyEvaluation {
            heuristic: &self.heuristic,
        };
        queue_search(problem, Self::NAME, FrontierKind::Priority, &eval, &self.policy, cancel)
    }
}

/// Expands the node with the lowest `g + h` first. Cost-optimal when `h` is
/// admissible (tree mode) or consistent (graph mode).
#[derive(Debug, Clone, Copy)]
pub struct AStarSearch<H> {
    pub heuristic: H,
    pub policy: SearchPolicy,
}

impl<H> AStarSearch<H> {
    pub const NAME: &'static str = "A* search";

    pub fn new(heuristic: H) -> Self {
        Self {
            heuristic,
            policy: SearchPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl<P, H> Search<P> for AStarSearch<H>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn search(
        &self,
        problem: &P,
        cancel: &CancelToken,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        let eval = AStarEvaluation {
            heuristic: &self.heuristic,
        };
        queue_search(problem, Self::NAME, FrontierKind::Priority, &eval, &self.policy, cancel)
    }
}
