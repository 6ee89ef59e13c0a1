//! Search outcomes and results.

use aima_kernel::Metrics;

/// How a search terminated.
///
/// `Failure` and `Cutoff` are normal results, not errors. Callers that need
/// to tell "definitely no solution" from "maybe deeper" must match on both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<A> {
    /// A plan from the initial state to a goal. Empty if the initial state
    /// is already a goal.
    Solution(Vec<A>),
    /// The searched space holds no goal.
    Failure,
    /// Depth-limited search stopped at its bound; a goal may exist deeper.
    Cutoff,
    /// Cancellation was observed. `partial` is the path to the current node
    /// for local search and empty for queue-based search.
    Cancelled { partial: Vec<A> },
}

impl<A> SearchOutcome<A> {
    #[must_use]
    pub fn is_solution(&self) -> bool {
        matches!(self, Self::Solution(_))
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure)
    }

    #[must_use]
    pub fn is_cutoff(&self) -> bool {
        matches!(self, Self::Cutoff)
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// The plan, if the search succeeded.
    #[must_use]
    pub fn actions(&self) -> Option<&[A]> {
        match self {
            Self::Solution(actions) => Some(actions),
            _ => None,
        }
    }

    /// Stable lowercase name, used in logs and reports.
    #[must_use]
    pub fn kind_str(&self) -> &'static str {
        match self {
            Self::Solution(_) => "solution",
            Self::Failure => "failure",
            Self::Cutoff => "cutoff",
            Self::Cancelled { .. } => "cancelled",
        }
    }
}

impl<A: std::fmt::Debug> SearchOutcome<A> {
    /// JSON rendering; actions are written with their `Debug` form.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let render = |actions: &[A]| -> Vec<String> {
            actions.iter().map(|a| format!("{a:?}")).collect()
        };
        match self {
            Self::Solution(actions) => {
                serde_json::json!({"actions": render(actions), "type": "solution"})
            }
            Self::Failure => serde_json::json!({"type": "failure"}),
            Self::Cutoff => serde_json::json!({"type": "cutoff"}),
            Self::Cancelled { partial } => {
                serde_json::json!({"partial": render(partial), "type": "cancelled"})
            }
        }
    }
}

/// Result of one search invocation: outcome plus instrumentation.
#[derive(Debug, Clone)]
pub struct SearchResult<S, A> {
    pub outcome: SearchOutcome<A>,
    pub metrics: Metrics,
    /// Final current state for local search, regardless of goal status.
    /// `None` for queue-based and bidirectional search.
    pub last_state: Option<S>,
}

impl<S, A> SearchResult<S, A> {
    #[must_use]
    pub fn new(outcome: SearchOutcome<A>, metrics: Metrics) -> Self {
        Self {
            outcome,
            metrics,
            last_state: None,
        }
    }

    #[must_use]
    pub fn with_last_state(mut self, state: S) -> Self {
        self.last_state = Some(state);
        self
    }
}
