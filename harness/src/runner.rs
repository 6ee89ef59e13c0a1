//! Harness runner: drives a world through a strategy or an online agent.
//!
//! # Pipeline
//!
//! ```text
//! run_search:  strategy.search(world) → RunReport::new → digest
//! run_online:  loop { agent.execute(state) → world.result } until NoOp
//! ```
//!
//! The runner owns orchestration only. Search logic lives in
//! `aima-search`; worlds provide the state space.

use aima_kernel::{AgentAction, CancelToken, Heuristic, Problem};
use aima_search::{OnlineDfsAgent, Search, SearchResult, Strategy};

use crate::catalog::Catalog;
use crate::contract::{RunError, World};
use crate::report::RunReport;

/// A finished search run: the raw result plus its report.
#[derive(Debug, Clone)]
pub struct SearchRun<S, A> {
    pub result: SearchResult<S, A>,
    pub report: RunReport,
}

/// Run `strategy` on `world` and build the report.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the strategy rejects its configuration
/// and [`RunError::Report`] if the world renders states the report cannot
/// hold.
pub fn run_search<W, H>(
    world: &W,
    strategy: &Strategy<H>,
    cancel: &CancelToken,
) -> Result<SearchRun<W::State, W::Action>, RunError>
where
    W: World,
    H: Heuristic<W::State>,
{
    let name = Search::<W>::name(strategy);
    let result = strategy.search(world, cancel)?;
    let report = RunReport::new(
        world.world_id(),
        name,
        strategy.config_json(),
        world.state_json(&world.initial_state()),
        &result.outcome,
        &result.metrics,
    )?;
    tracing::info!(
        world = world.world_id(),
        strategy = name,
        outcome = result.outcome.kind_str(),
        nodes_expanded = result.metrics.nodes_expanded,
        "search run finished"
    );
    Ok(SearchRun { result, report })
}

/// Look `name` up in `catalog` and run it.
///
/// # Errors
///
/// Returns [`RunError::World`] for an unknown name, otherwise as
/// [`run_search`].
pub fn run_named<W, H>(
    world: &W,
    catalog: &Catalog<H>,
    name: &str,
    cancel: &CancelToken,
) -> Result<SearchRun<W::State, W::Action>, RunError>
where
    W: World,
    H: Heuristic<W::State>,
{
    let strategy = catalog.get(name)?;
    run_search(world, strategy, cancel)
}

/// What an online agent did in a simulated environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnlineRun<S, A> {
    /// Actions executed, in order.
    pub actions: Vec<A>,
    pub final_state: S,
    pub reached_goal: bool,
    /// `true` if the agent returned `NoOp` within the step budget.
    pub stopped: bool,
}

/// Simulate the environment for `agent`: the world is fully observable, so
/// each percept is the current state, and [`Problem::result`] plays the
/// environment. Runs until the agent returns `NoOp` or `max_steps` actions
/// have been executed.
pub fn run_online<W, P, F>(
    world: &W,
    agent: &mut OnlineDfsAgent<P, F>,
    max_steps: usize,
) -> OnlineRun<W::State, W::Action>
where
    W: Problem,
    P: Problem<State = W::State, Action = W::Action>,
    F: Fn(&W::State) -> W::State,
{
    let mut state = world.initial_state();
    let mut actions = Vec::new();
    let mut stopped = false;
    while actions.len() < max_steps {
        match agent.execute(&state) {
            AgentAction::Act(action) => {
                state = world.result(&state, &action);
                actions.push(action);
            }
            AgentAction::NoOp => {
                stopped = true;
                break;
            }
        }
    }
    if !stopped {
        tracing::warn!(max_steps, "online agent still running at step budget");
    }
    let reached_goal = world.is_goal(&state);
    OnlineRun {
        actions,
        final_state: state,
        reached_goal,
        stopped,
    }
}
