//! Bidirectional search: a problem paired with its goal-reversed view.

use std::collections::{HashMap, VecDeque};

use aima_kernel::{expand, CancelToken, Metrics, NodeId, Problem, SearchTree};

use crate::error::SearchError;
use crate::outcome::{SearchOutcome, SearchResult};
use crate::queue::finish;

/// A problem with one designated goal state, searchable from both ends.
#[derive(Debug, Clone)]
pub struct Bidirectional<P: Problem> {
    problem: P,
    goal: P::State,
}

impl<P: Problem> Bidirectional<P> {
    pub const NAME: &'static str = "bidirectional search";

    /// `goal` must satisfy `problem.is_goal`.
    pub fn new(problem: P, goal: P::State) -> Self {
        Self { problem, goal }
    }

    #[must_use]
    pub fn original(&self) -> &P {
        &self.problem
    }

    #[must_use]
    pub fn goal(&self) -> &P::State {
        &self.goal
    }

    /// The same space searched from the goal back to the initial state.
    #[must_use]
    pub fn reverse(&self) -> Reversed<'_, P> {
        Reversed {
            problem: &self.problem,
            from: &self.goal,
            to: self.problem.initial_state(),
        }
    }
}

/// Goal-reversed view: starts at the goal state, and its only goal is the
/// original initial state. Actions, results and step costs are the
/// original's, so it is meaningful for reversible spaces.
#[derive(Debug)]
pub struct Reversed<'a, P: Problem> {
    problem: &'a P,
    from: &'a P::State,
    to: P::State,
}

impl<P: Problem> Problem for Reversed<'_, P> {
    type State = P::State;
    type Action = P::Action;

    fn initial_state(&self) -> P::State {
        self.from.clone()
    }

    fn actions(&self, state: &P::State) -> Vec<P::Action> {
        self.problem.actions(state)
    }

    fn result(&self, state: &P::State, action: &P::Action) -> P::State {
        self.problem.result(state, action)
    }

    fn is_goal(&self, state: &P::State) -> bool {
        *state == self.to
    }

    fn step_cost(&self, state: &P::State, action: &P::Action, next: &P::State) -> f64 {
        self.problem.step_cost(state, action, next)
    }
}

/// One direction of the search: its arena, reached set and current layer.
struct Side<S, A> {
    tree: SearchTree<S, A>,
    reached: HashMap<S, NodeId>,
    layer: VecDeque<NodeId>,
}

enum Layer {
    /// Best meeting point of the layer: (node on this side, node on the other).
    Met(NodeId, NodeId),
    Continue,
    Cancelled,
}

impl<S: Clone + Eq + std::hash::Hash, A> Side<S, A> {
    fn new(root: S) -> Self {
        let tree = SearchTree::new(root.clone());
        let id = tree.root();
        Self {
            tree,
            reached: HashMap::from([(root, id)]),
            layer: VecDeque::from([id]),
        }
    }

    /// Expand every node of the current layer. All meetings in the layer are
    /// considered so the shortest join wins.
    fn expand_layer<P>(
        &mut self,
        problem: &P,
        other: &Self,
        metrics: &mut Metrics,
        cancel: &CancelToken,
    ) -> Layer
    where
        P: Problem<State = S, Action = A>,
    {
        let mut best: Option<(u32, NodeId, NodeId)> = None;
        for id in std::mem::take(&mut self.layer) {
            if cancel.is_cancelled() {
                return Layer::Cancelled;
            }
            for child in expand(&self.tree, id, problem, metrics) {
                if self.reached.contains_key(&child.state) {
                    continue;
                }
                let state = child.state.clone();
                let depth = child.depth;
                let child_id = self.tree.insert(child);
                if let Some(&meet) = other.reached.get(&state) {
                    let total = depth + other.tree.get(meet).depth;
                    let shorter = match best {
                        Some((shortest, _, _)) => total < shortest,
                        None => true,
                    };
                    if shorter {
                        best = Some((total, child_id, meet));
                    }
                }
                self.reached.insert(state, child_id);
                self.layer.push_back(child_id);
            }
        }
        match best {
            Some((_, here, there)) => Layer::Met(here, there),
            None => Layer::Continue,
        }
    }
}

/// Alternate breadth-first layers from the initial state and from the goal
/// until they meet. Shortest in step count on reversible spaces.
///
/// # Errors
///
/// Returns [`SearchError::IrreversibleTransition`] if the backward half of
/// the join holds a step that no forward action reproduces.
pub fn bidirectional_search<P: Problem>(
    bidirectional: &Bidirectional<P>,
    cancel: &CancelToken,
) -> Result<SearchResult<P::State, P::Action>, SearchError> {
    let name = Bidirectional::<P>::NAME;
    let problem = bidirectional.original();
    let mut metrics = Metrics::new();
    let mut forward = Side::new(problem.initial_state());
    let mut backward = Side::new(bidirectional.goal().clone());

    if forward.reached.contains_key(bidirectional.goal()) {
        return Ok(finish(name, SearchOutcome::Solution(Vec::new()), metrics));
    }
    metrics.record_queue_size(2);

    let mut forward_turn = true;
    loop {
        if cancel.is_cancelled() {
            return Ok(finish(name, SearchOutcome::Cancelled { partial: Vec::new() }, metrics));
        }
        let (this, other) = if forward_turn {
            (&mut forward, &backward)
        } else {
            (&mut backward, &forward)
        };
        if this.layer.is_empty() {
            return Ok(finish(name, SearchOutcome::Failure, metrics));
        }
        let layer = this.expand_layer(problem, other, &mut metrics, cancel);
        metrics.record_queue_size(forward.layer.len() + backward.layer.len());
        match layer {
            Layer::Cancelled => {
                return Ok(finish(name, SearchOutcome::Cancelled { partial: Vec::new() }, metrics));
            }
            Layer::Continue => forward_turn = !forward_turn,
            Layer::Met(here, there) => {
                let (f, b) = if forward_turn { (here, there) } else { (there, here) };
                let actions = join(problem, &forward.tree, f, &backward.tree, b, &mut metrics)?;
                return Ok(finish(name, SearchOutcome::Solution(actions), metrics));
            }
        }
    }
}

/// Forward actions to `f`, then the backward path from `b` to the goal
/// turned into forward actions.
fn join<P: Problem>(
    problem: &P,
    forward: &SearchTree<P::State, P::Action>,
    f: NodeId,
    backward: &SearchTree<P::State, P::Action>,
    b: NodeId,
    metrics: &mut Metrics,
) -> Result<Vec<P::Action>, SearchError> {
    let mut actions = forward.actions_to(f);
    let mut cost = forward.get(f).path_cost;
    let mut states = backward.states_to(b);
    states.reverse();
    for pair in states.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let action = problem
            .actions(from)
            .into_iter()
            .find(|a| problem.result(from, a) == *to)
            .ok_or_else(|| SearchError::IrreversibleTransition {
                from: format!("{from:?}"),
                to: format!("{to:?}"),
            })?;
        cost += problem.step_cost(from, &action, to);
        actions.push(action);
    }
    metrics.path_cost = cost;
    Ok(actions)
}
