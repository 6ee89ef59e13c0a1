//! AIMA harness: worlds, the strategy catalog and run reports.
//!
//! The harness runs a world through a search strategy (or an online agent)
//! and packages the result as a canonical, digestible run report.
//!
//! The harness does NOT implement search logic; it delegates to
//! `aima-search`. Worlds provide the state space only; the harness owns
//! orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod contract;
pub mod report;
pub mod runner;
pub mod worlds;

pub use catalog::{Catalog, CatalogConfig};
pub use contract::{ReportError, RunError, World, WorldError};
pub use report::{plan_digest, verify_report, RunReport};
pub use runner::{run_named, run_online, run_search, OnlineRun, SearchRun};
