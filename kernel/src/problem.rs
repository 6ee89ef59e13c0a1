//! Problem contract consumed by every search strategy.

use std::fmt::Debug;
use std::hash::Hash;

/// An immutable description of a state space.
///
/// # Contract
///
/// - `actions` must be side-effect free and deterministic: same state, same
///   actions in the same order. Strategies rely on this ordering for
///   reproducible runs.
/// - `result` must be a pure function of `(state, action)`.
/// - `step_cost` must never be negative. Cost-ordered strategies lose their
///   optimality guarantee otherwise; the engine does not check this.
pub trait Problem {
    /// Problem-defined state. Graph search hashes states for its explored set.
    type State: Clone + Eq + Hash + Debug;
    /// Problem-defined action.
    type Action: Clone + Eq + Debug;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Actions applicable in `state`, in generator order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action` in `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Cost of the transition `state --action--> next`. Defaults to 1.
    fn step_cost(&self, _state: &Self::State, _action: &Self::Action, _next: &Self::State) -> f64 {
        1.0
    }
}

/// Estimated cost from a state to the nearest goal.
///
/// Must be non-negative. Admissibility (never overestimating) is a property
/// the caller supplies; A* returns cost-optimal plans only when it holds.
pub trait Heuristic<S> {
    fn h(&self, state: &S) -> f64;
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S) -> f64,
{
    fn h(&self, state: &S) -> f64 {
        self(state)
    }
}

/// The heuristic that always answers 0. A* with it is uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<S> Heuristic<S> for ZeroHeuristic {
    fn h(&self, _state: &S) -> f64 {
        0.0
    }
}

/// What an agent does on one step: a problem action, or nothing.
///
/// `NoOp` is returned once a goal is reached or when no useful move is left.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AgentAction<A> {
    Act(A),
    NoOp,
}

impl<A> AgentAction<A> {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }

    /// The wrapped action, if any.
    #[must_use]
    pub fn action(&self) -> Option<&A> {
        match self {
            Self::Act(a) => Some(a),
            Self::NoOp => None,
        }
    }
}
