//! Node expansion.

use crate::metrics::Metrics;
use crate::node::{Node, NodeId, SearchTree};
use crate::problem::Problem;

/// Generate one child per applicable action of `id`, in generator order.
///
/// Children come back detached; the caller decides which to
/// [`SearchTree::insert`]. No duplicate or cycle filtering happens here.
/// Increments `metrics.nodes_expanded` and tracks the deepest child.
pub fn expand<P: Problem>(
    tree: &SearchTree<P::State, P::Action>,
    id: NodeId,
    problem: &P,
    metrics: &mut Metrics,
) -> Vec<Node<P::State, P::Action>> {
    let parent = tree.get(id);
    metrics.nodes_expanded += 1;

    let children: Vec<Node<P::State, P::Action>> = problem
        .actions(&parent.state)
        .into_iter()
        .map(|action| {
            let state = problem.result(&parent.state, &action);
            let step = problem.step_cost(&parent.state, &action, &state);
            Node {
                state,
                parent: Some(id),
                action: Some(action),
                path_cost: parent.path_cost + step,
                depth: parent.depth + 1,
            }
        })
        .collect();

    if !children.is_empty() {
        metrics.record_depth(parent.depth + 1);
    }
    children
}
