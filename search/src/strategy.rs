//! The `Search` trait and the closed set of strategies.

use aima_kernel::{CancelToken, Heuristic, Problem, ZeroHeuristic};

use crate::error::SearchError;
use crate::informed::{AStarSearch, GreedyBestFirstSearch};
use crate::local::{HillClimbingSearch, SimulatedAnnealingSearch};
use crate::outcome::SearchResult;
use crate::uninformed::{
    BreadthFirstSearch, DepthFirstSearch, DepthLimitedSearch, IterativeDeepeningSearch,
    UniformCostSearch,
};

/// A configured search strategy.
///
/// `search` never mutates the strategy; one value may serve many runs. Plain
/// terminations (no solution, cutoff, cancellation) come back as `Ok`.
pub trait Search<P: Problem> {
    /// Stable human-readable name, used in logs and reports.
    fn name(&self) -> &'static str;

    /// Run the strategy on `problem`, polling `cancel` once per expansion.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] if the configuration is rejected before any
    /// expansion happens.
    fn search(
        &self,
        problem: &P,
        cancel: &CancelToken,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError>;
}

/// Every strategy the engine offers, as one value.
///
/// `H` is the heuristic for the informed and local variants; the uninformed
/// ones ignore it.
#[derive(Debug, Clone, Copy)]
pub enum Strategy<H = ZeroHeuristic> {
    BreadthFirst(BreadthFirstSearch),
    DepthFirst(DepthFirstSearch),
    DepthLimited(DepthLimitedSearch),
    IterativeDeepening(IterativeDeepeningSearch),
    UniformCost(UniformCostSearch),
    Greedy(GreedyBestFirstSearch<H>),
    AStar(AStarSearch<H>),
    HillClimbing(HillClimbingSearch<H>),
    SimulatedAnnealing(SimulatedAnnealingSearch<H>),
}

impl<H> Strategy<H> {
    /// JSON echo of the configuration, for run reports.
    #[must_use]
    pub fn config_json(&self) -> serde_json::Value {
        match self {
            Self::BreadthFirst(s) => serde_json::json!({"policy": s.policy.to_json()}),
            Self::DepthFirst(s) => serde_json::json!({"policy": s.policy.to_json()}),
            Self::UniformCost(s) => serde_json::json!({"policy": s.policy.to_json()}),
            Self::DepthLimited(s) => serde_json::json!({"limit": s.limit}),
            Self::IterativeDeepening(s) => serde_json::json!({"max_depth": s.max_depth}),
            Self::Greedy(s) => serde_json::json!({"policy": s.policy.to_json()}),
            Self::AStar(s) => serde_json::json!({"policy": s.policy.to_json()}),
            Self::HillClimbing(_) => serde_json::json!({}),
            // Schedule parameters are floats; canonical JSON carries them as
            // strings.
            Self::SimulatedAnnealing(s) => serde_json::json!({
                "schedule": {
                    "k": s.schedule.k.to_string(),
                    "lambda": s.schedule.lambda.to_string(),
                    "limit": s.schedule.limit,
                },
                "seed": s.seed,
            }),
        }
    }
}

impl<P, H> Search<P> for Strategy<H>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst(s) => Search::<P>::name(s),
            Self::DepthFirst(s) => Search::<P>::name(s),
            Self::DepthLimited(s) => Search::<P>::name(s),
            Self::IterativeDeepening(s) => Search::<P>::name(s),
            Self::UniformCost(s) => Search::<P>::name(s),
            Self::Greedy(s) => Search::<P>::name(s),
            Self::AStar(s) => Search::<P>::name(s),
            Self::HillClimbing(s) => Search::<P>::name(s),
            Self::SimulatedAnnealing(s) => Search::<P>::name(s),
        }
    }

    fn search(
        &self,
        problem: &P,
        cancel: &CancelToken,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        match self {
            Self::BreadthFirst(s) => s.search(problem, cancel),
            Self::DepthFirst(s) => s.search(problem, cancel),
            Self::DepthLimited(s) => s.search(problem, cancel),
            Self::IterativeDeepening(s) => s.search(problem, cancel),
            Self::UniformCost(s) => s.search(problem, cancel),
            Self::Greedy(s) => s.search(problem, cancel),
            Self::AStar(s) => s.search(problem, cancel),
            Self::HillClimbing(s) => s.search(problem, cancel),
            Self::SimulatedAnnealing(s) => s.search(problem, cancel),
        }
    }
}
