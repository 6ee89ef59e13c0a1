//! The queue-search loop shared by BFS, DFS, UCS, greedy and A*.
//!
//! Strategies differ only in frontier ordering, evaluation function and
//! policy. The loop owns the node arena for one invocation; nodes are dropped
//! together when it returns.

use std::collections::{HashMap, HashSet};

use aima_kernel::{expand, CancelToken, Metrics, NodeId, Problem, SearchTree};

use crate::error::SearchError;
use crate::eval::EvaluationFunction;
use crate::frontier::{Frontier, FrontierKey};
use crate::outcome::{SearchOutcome, SearchResult};
use crate::policy::{FrontierKind, GoalTest, QueueMode, SearchPolicy};

/// Run one queue search.
///
/// # Errors
///
/// Returns [`SearchError::UnsupportedPolicyMode`] if `policy` is not sound
/// for `kind`.
pub(crate) fn queue_search<P, E>(
    problem: &P,
    strategy: &'static str,
    kind: FrontierKind,
    eval: &E,
    policy: &SearchPolicy,
    cancel: &CancelToken,
) -> Result<SearchResult<P::State, P::Action>, SearchError>
where
    P: Problem,
    E: EvaluationFunction<P::State, P::Action>,
{
    policy.validate_for(strategy, kind)?;

    let mut metrics = Metrics::new();
    let mut tree: SearchTree<P::State, P::Action> = SearchTree::new(problem.initial_state());
    let root = tree.root();
    let early = policy.goal_test == GoalTest::OnGeneration;
    let graph = policy.mode == QueueMode::Graph;

    if early && problem.is_goal(&tree.get(root).state) {
        return Ok(solution(strategy, &tree, root, metrics));
    }

    let mut frontier = Frontier::new(kind);
    // Graph mode only: states already expanded, and the best evaluation
    // currently queued per state.
    let mut explored: HashSet<P::State> = HashSet::new();
    let mut queued: HashMap<P::State, f64> = HashMap::new();

    let root_f = eval.f(tree.get(root));
    if graph {
        queued.insert(tree.get(root).state.clone(), root_f);
    }
    frontier.push(root, key(root_f, &tree, root));
    metrics.record_queue_size(frontier.len());

    loop {
        if cancel.is_cancelled() {
            return Ok(finish(strategy, SearchOutcome::Cancelled { partial: Vec::new() }, metrics));
        }
        let Some(id) = frontier.pop() else {
            return Ok(finish(strategy, SearchOutcome::Failure, metrics));
        };
        metrics.record_queue_size(frontier.len());

        if graph {
            let state = &tree.get(id).state;
            if explored.contains(state) {
                continue;
            }
            queued.remove(state);
        }

        if !early && problem.is_goal(&tree.get(id).state) {
            return Ok(solution(strategy, &tree, id, metrics));
        }

        if graph {
            explored.insert(tree.get(id).state.clone());
        }

        for child in expand(&tree, id, problem, &mut metrics) {
            let f = eval.f(&child);
            if graph {
                if explored.contains(&child.state) {
                    continue;
                }
                if queued.get(&child.state).is_some_and(|best| *best <= f) {
                    continue;
                }
            }
            let is_goal = early && problem.is_goal(&child.state);
            if graph {
                queued.insert(child.state.clone(), f);
            }
            let child_id = tree.insert(child);
            if is_goal {
                return Ok(solution(strategy, &tree, child_id, metrics));
            }
            frontier.push(child_id, key(f, &tree, child_id));
        }
        metrics.record_queue_size(frontier.len());
    }
}

fn key<S, A>(f: f64, tree: &SearchTree<S, A>, id: NodeId) -> FrontierKey {
    FrontierKey {
        f,
        depth: tree.get(id).depth,
        creation_order: id.index(),
    }
}

fn solution<S, A: Clone>(
    strategy: &'static str,
    tree: &SearchTree<S, A>,
    goal: NodeId,
    mut metrics: Metrics,
) -> SearchResult<S, A> {
    metrics.path_cost = tree.get(goal).path_cost;
    finish(strategy, SearchOutcome::Solution(tree.actions_to(goal)), metrics)
}

pub(crate) fn finish<S, A>(
    strategy: &'static str,
    outcome: SearchOutcome<A>,
    metrics: Metrics,
) -> SearchResult<S, A> {
    tracing::debug!(
        strategy,
        outcome = outcome.kind_str(),
        nodes_expanded = metrics.nodes_expanded,
        max_queue_size = metrics.max_queue_size,
        max_depth = metrics.max_depth,
        "search finished"
    );
    SearchResult::new(outcome, metrics)
}
