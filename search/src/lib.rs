//! Generic state-space search over any [`aima_kernel::Problem`].
//!
//! This crate provides the strategies. It depends only on `aima_kernel`
//! and knows nothing about concrete worlds.
//!
//! # Crate dependency graph
//!
//! ```text
//! aima_kernel  ←  aima_search  ←  aima_harness
//! (problem,       (frontiers,      (worlds, catalog,
//!  nodes, hash)    strategies)      run reports)
//! ```
//!
//! # Key types
//!
//! - [`Search`] — one configured strategy; [`Strategy`] is the closed set
//! - [`SearchPolicy`] — tree/graph mode and goal-test timing for queue search
//! - [`SearchResult`] / [`SearchOutcome`] — plan, failure, cutoff or cancelled
//! - [`OnlineDfsAgent`] — explores while acting, one percept per step
//! - [`Bidirectional`] — a problem plus its goal-reversed view

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod agent;
pub mod bidirectional;
pub mod error;
pub mod eval;
pub mod frontier;
pub mod informed;
pub mod local;
pub mod online;
pub mod outcome;
pub mod policy;
mod queue;
pub mod strategy;
pub mod uninformed;


pub use agent::SearchAgent;
pub use bidirectional::{bidirectional_search, Bidirectional, Reversed};
pub use error::SearchError;
pub use eval::{AStarEvaluation, EvaluationFunction, GreedyEvaluation, PathCostEvaluation};
pub use frontier::{Frontier, FrontierKey};
pub use informed::{AStarSearch, GreedyBestFirstSearch};
pub use local::{
    hill_climbing, probability_of_acceptance, simulated_annealing, HillClimbingSearch, Schedule,
    Scheduler, SimulatedAnnealingSearch,
};
pub use online::OnlineDfsAgent;
pub use outcome::{SearchOutcome, SearchResult};
pub use policy::{FrontierKind, GoalTest, QueueMode, SearchPolicy};
pub use strategy::{Search, Strategy};
pub use uninformed::{
    BreadthFirstSearch, DepthFirstSearch, DepthLimitedSearch, IterativeDeepeningSearch,
    UniformCostSearch,
};
