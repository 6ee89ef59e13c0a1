//! World contract: what a world adds on top of a search problem.
//!
//! Worlds provide the state space and a JSON rendering of their states.
//! They do not hash, write reports or drive agents; the runner does.

use aima_kernel::digest::CanonError;
use aima_kernel::Problem;
use aima_search::SearchError;

/// A named problem whose states can be rendered into run reports.
pub trait World: Problem {
    /// Unique world identifier (e.g., `"eight_puzzle"`).
    fn world_id(&self) -> &str;

    /// JSON rendering of a state. Must use integer numbers only.
    fn state_json(&self, state: &Self::State) -> serde_json::Value;
}

/// Typed failure building a world or looking up a strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("invalid world: {detail}")]
    InvalidWorld { detail: String },

    #[error("unknown location {name:?}")]
    UnknownLocation { name: String },

    #[error("no strategy named {name:?} in the catalog")]
    UnknownStrategy { name: String },
}

/// Failure producing or verifying a run report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("report cannot be canonicalized: {0}")]
    Canon(#[from] CanonError),

    #[error("report is not valid JSON: {detail}")]
    Parse { detail: String },

    #[error("report bytes are not in canonical form")]
    NotCanonical,

    #[error("digest mismatch: stored={stored}, recomputed={recomputed}")]
    DigestMismatch { stored: String, recomputed: String },
}

/// Anything that can stop [`crate::runner::run_search`].
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
