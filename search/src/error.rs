//! Typed search errors.
//!
//! `SearchError` covers exceptional conditions only. Ordinary terminations
//! (no solution, depth cutoff, cancellation) are expressed via
//! [`crate::outcome::SearchOutcome`] and never surface here.

/// Failure that prevents a search from producing an outcome at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A policy option was selected that the chosen strategy cannot honor.
    #[error("unsupported policy mode: {detail}")]
    UnsupportedPolicyMode { detail: String },

    /// A temperature schedule with parameters that can never cool down.
    #[error("invalid annealing schedule: {detail}")]
    InvalidSchedule { detail: String },

    /// Bidirectional search met in the middle, but a backward step has no
    /// forward action undoing it.
    #[error("no forward action from {from} reaches {to}")]
    IrreversibleTransition { from: String, to: String },
}
