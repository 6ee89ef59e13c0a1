//! Offline search agent: plan once, then act the plan out.

use std::collections::BTreeMap;

use aima_kernel::{AgentAction, CancelToken, Metrics, Problem};

use crate::error::SearchError;
use crate::outcome::SearchOutcome;
use crate::strategy::Search;

/// Holds the outcome of one search and replays its plan step by step.
#[derive(Debug, Clone)]
pub struct SearchAgent<A> {
    outcome: SearchOutcome<A>,
    metrics: Metrics,
    next: usize,
}

impl<A: Clone> SearchAgent<A> {
    /// Search `problem` with `strategy` right away.
    ///
    /// # Errors
    ///
    /// Propagates the strategy's [`SearchError`].
    pub fn new<P, S>(problem: &P, strategy: &S, cancel: &CancelToken) -> Result<Self, SearchError>
    where
        P: Problem<Action = A>,
        S: Search<P> + ?Sized,
    {
        let result = strategy.search(problem, cancel)?;
        Ok(Self {
            outcome: result.outcome,
            metrics: result.metrics,
            next: 0,
        })
    }

    /// The plan; empty unless the search found a solution.
    #[must_use]
    pub fn actions(&self) -> &[A] {
        self.outcome.actions().unwrap_or(&[])
    }

    #[must_use]
    pub fn outcome(&self) -> &SearchOutcome<A> {
        &self.outcome
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Counters keyed by their reporting names (`nodesExpanded`, …).
    #[must_use]
    pub fn instrumentation(&self) -> BTreeMap<String, String> {
        self.metrics.properties()
    }

    /// The next planned action, then `NoOp` forever.
    pub fn execute(&mut self) -> AgentAction<A> {
        match self.actions().get(self.next).cloned() {
            Some(action) => {
                self.next += 1;
                AgentAction::Act(action)
            }
            None => AgentAction::NoOp,
        }
    }

    /// Whether `execute` still has planned actions to hand out.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.next < self.actions().len()
    }
}
