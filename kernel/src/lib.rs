//! AIMA Kernel: the problem contract and search-tree substrate.
//!
//! Everything a search strategy needs that is not itself a strategy lives
//! here: the [`problem::Problem`] contract, the [`node::SearchTree`] arena,
//! node [`expand::expand`]ion, [`metrics::Metrics`] counters, the
//! cooperative [`cancel::CancelToken`], and canonical digests for run
//! reports.
//!
//! # Module Dependency Direction
//!
//! `problem` ← `node` ← `expand`
//!
//! `metrics`, `cancel` and `digest` depend on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cancel;
pub mod digest;
pub mod expand;
pub mod metrics;
pub mod node;
pub mod problem;

pub use cancel::CancelToken;
pub use expand::expand;
pub use metrics::Metrics;
pub use node::{Node, NodeId, SearchTree};
pub use problem::{AgentAction, Heuristic, Problem, ZeroHeuristic};
