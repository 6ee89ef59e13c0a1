//! Uninformed strategies: breadth-first, depth-first, depth-limited,
//! iterative deepening and uniform-cost search.

use aima_kernel::{expand, CancelToken, Metrics, NodeId, Problem, SearchTree};

use crate::error::SearchError;
use crate::eval::PathCostEvaluation;
use crate::outcome::{SearchOutcome, SearchResult};
use crate::policy::{FrontierKind, GoalTest, SearchPolicy};
use crate::queue::{finish, queue_search};
use crate::strategy::Search;

/// FIFO frontier. Defaults to graph search with the goal tested when nodes
/// are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreadthFirstSearch {
    pub policy: SearchPolicy,
}

impl BreadthFirstSearch {
    pub const NAME: &'static str = "breadth-first search";

    #[must_use]
    pub fn with_policy(policy: SearchPolicy) -> Self {
        Self { policy }
    }
}

impl Default for BreadthFirstSearch {
    fn default() -> Self {
        Self {
            policy: SearchPolicy::graph().with_goal_test(GoalTest::OnGeneration),
        }
    }
}

impl<P: Problem> Search<P> for BreadthFirstSearch {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn search(
        &self,
        problem: &P,
        cancel: &CancelToken,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        queue_search(problem, Self::NAME, FrontierKind::Fifo, &PathCostEvaluation, &self.policy, cancel)
    }
}

/// LIFO frontier. Incomplete on infinite spaces, and in tree mode on cyclic
/// ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthFirstSearch {
    pub policy: SearchPolicy,
}

impl DepthFirstSearch {
    pub const NAME: &'static str = "depth-first search";

    #[must_use]
    pub fn with_policy(policy: SearchPolicy) -> Self {
        Self { policy }
    }
}

impl<P: Problem> Search<P> for DepthFirstSearch {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn search(
        &self,
        problem: &P,
        cancel: &CancelToken,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        queue_search(problem, Self::NAME, FrontierKind::Lifo, &PathCostEvaluation, &self.policy, cancel)
    }
}

/// Frontier ordered by path cost `g`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformCostSearch {
    pub policy: SearchPolicy,
}

impl UniformCostSearch {
    pub const NAME: &'static str = "uniform-cost search";

    #[must_use]
    pub fn with_policy(policy: SearchPolicy) -> Self {
        Self { policy }
    }
}

impl<P: Problem> Search<P> for UniformCostSearch {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn search(
        &self,
        problem: &P,
        cancel: &CancelToken,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        queue_search(
            problem,
            Self::NAME,
            FrontierKind::Priority,
            &PathCostEvaluation,
            &self.policy,
            cancel,
        )
    }
}

/// Depth-first tree search that never expands a node at depth `limit`.
///
/// Returns `Cutoff` when some node sat at the bound unexpanded, so a goal
/// may lie deeper; `Failure` only when the bounded tree ran out first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthLimitedSearch {
    pub limit: u32,
}

impl DepthLimitedSearch {
    pub const NAME: &'static str = "depth-limited search";

    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self { limit }
    }
}

impl<P: Problem> Search<P> for DepthLimitedSearch {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn search(
        &self,
        problem: &P,
        cancel: &CancelToken,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        let mut metrics = Metrics::new();
        let outcome = depth_limited(problem, self.limit, cancel, &mut metrics);
        Ok(finish(Self::NAME, outcome, metrics))
    }
}

/// One bounded pass. Children go on the stack in reverse so the first
/// generated child is explored first.
fn depth_limited<P: Problem>(
    problem: &P,
    limit: u32,
    cancel: &CancelToken,
    metrics: &mut Metrics,
) -> SearchOutcome<P::Action> {
    let mut tree: SearchTree<P::State, P::Action> = SearchTree::new(problem.initial_state());
    let mut stack: Vec<NodeId> = vec![tree.root()];
    let mut cutoff_occurred = false;
    metrics.record_queue_size(stack.len());

    while let Some(id) = stack.pop() {
        if cancel.is_cancelled() {
            return SearchOutcome::Cancelled { partial: Vec::new() };
        }
        let node = tree.get(id);
        if problem.is_goal(&node.state) {
            metrics.path_cost = node.path_cost;
            return SearchOutcome::Solution(tree.actions_to(id));
        }
        if node.depth >= limit {
            cutoff_occurred = true;
            metrics.record_queue_size(stack.len());
            continue;
        }
        let children: Vec<NodeId> = expand(&tree, id, problem, metrics)
            .into_iter()
            .map(|child| tree.insert(child))
            .collect();
        stack.extend(children.into_iter().rev());
        metrics.record_queue_size(stack.len());
    }

    if cutoff_occurred {
        SearchOutcome::Cutoff
    } else {
        SearchOutcome::Failure
    }
}

/// Depth-limited search with limits 0, 1, 2, … until a pass does not cut
/// off. With `max_depth` set, running past it yields `Cutoff`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IterativeDeepeningSearch {
    pub max_depth: Option<u32>,
}

impl IterativeDeepeningSearch {
    pub const NAME: &'static str = "iterative deepening search";

    /// Takes the depth bound from `policy.max_depth`; the rest of the policy
    /// does not apply to depth-limited passes.
    #[must_use]
    pub fn with_policy(policy: &SearchPolicy) -> Self {
        Self {
            max_depth: policy.max_depth,
        }
    }
}

impl<P: Problem> Search<P> for IterativeDeepeningSearch {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn search(
        &self,
        problem: &P,
        cancel: &CancelToken,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        let mut total = Metrics::new();
        for limit in 0..=self.max_depth.unwrap_or(u32::MAX) {
            let mut pass = Metrics::new();
            let outcome = depth_limited(problem, limit, cancel, &mut pass);
            total.absorb(&pass);
            tracing::trace!(limit, outcome = outcome.kind_str(), "deepening pass");
            if !outcome.is_cutoff() {
                return Ok(finish(Self::NAME, outcome, total));
            }
        }
        Ok(finish(Self::NAME, SearchOutcome::Cutoff, total))
    }
}
