//! Binary that runs a fixed set of searches through the harness and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: key=value lines on stdout (see source for format). Logs go to
//! stderr, filtered by `RUST_LOG` (default `warn`).

use aima_harness::worlds::eight_puzzle::{manhattan, EightPuzzle, MEDIUM};
use aima_harness::worlds::n_queens::{attacking_pairs, NQueens, Queens, QueensBoard};
use aima_harness::worlds::route_map::{RouteMap, RouteProblem, ARAD, BUCHAREST};
use aima_harness::{run_online, run_search, RunError, SearchRun};
use aima_kernel::CancelToken;
use aima_search::{
    AStarSearch, DepthLimitedSearch, OnlineDfsAgent, SimulatedAnnealingSearch, Strategy,
};
use tracing_subscriber::{fmt, EnvFilter};

fn print_run<S, A>(key: &str, run: &SearchRun<S, A>) -> Result<(), RunError> {
    println!("{key}_digest={}", run.report.digest()?);
    println!("{key}_outcome={}", run.result.outcome.kind_str());
    println!("{key}_nodes_expanded={}", run.result.metrics.nodes_expanded);
    println!("{key}_path_cost={}", run.result.metrics.path_cost);
    if let Some(plan) = &run.report.plan_digest {
        println!("{key}_plan_digest={plan}");
    }
    Ok(())
}

fn main() -> Result<(), RunError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cancel = CancelToken::new();

    let puzzle = EightPuzzle::new(MEDIUM)?;
    let astar = Strategy::AStar(AStarSearch::new(manhattan));
    print_run("eight_puzzle_astar", &run_search(&puzzle, &astar, &cancel)?)?;

    let map = RouteMap::romania();
    let route = RouteProblem::new(&map, ARAD, BUCHAREST)?;
    let straight = Strategy::AStar(AStarSearch::new(route.straight_line()));
    print_run("romania_astar", &run_search(&route, &straight, &cancel)?)?;

    let queens = NQueens::new(8)?;
    let dls: Strategy = Strategy::DepthLimited(DepthLimitedSearch::new(8));
    print_run("queens_dls", &run_search(&queens, &dls, &cancel)?)?;

    let board = QueensBoard::new(8)?;
    let annealing = Strategy::SimulatedAnnealing(
        SimulatedAnnealingSearch::new(|q: &Queens| attacking_pairs(q)).with_seed(7),
    );
    print_run("queens_annealing", &run_search(&board, &annealing, &cancel)?)?;

    let mut agent = OnlineDfsAgent::new(route.clone(), String::clone);
    let online = run_online(&route, &mut agent, 200);
    println!("romania_online_steps={}", online.actions.len());
    println!("romania_online_reached_goal={}", online.reached_goal);
    println!("romania_online_final={}", online.final_state);

    Ok(())
}
