//! Lock tests: properties every strategy must keep across refactors.
//!
//! Optimality of BFS/UCS/A*, A* with a zero heuristic matching uniform
//! cost, depth-limited cutoff vs failure, iterative deepening matching
//! BFS, and the annealing schedule extremes.

use aima_harness::worlds::eight_puzzle::{manhattan, EightPuzzle, Slide, GOAL, MEDIUM, THREE_MOVES};
use aima_harness::worlds::n_queens::{attacking_pairs, NQueens, Queens, QueensBoard};
use aima_harness::worlds::route_map::{MoveTo, RouteMap, RouteProblem, ARAD, BUCHAREST};
use aima_kernel::{CancelToken, Problem, ZeroHeuristic};
use aima_search::{
    AStarSearch, BreadthFirstSearch, DepthLimitedSearch, GreedyBestFirstSearch,
    IterativeDeepeningSearch, Search, SearchOutcome, SimulatedAnnealingSearch, UniformCostSearch,
};
use lock_tests::fixtures::detour;

fn route(map: &RouteMap) -> RouteProblem<'_> {
    RouteProblem::new(map, ARAD, BUCHAREST).unwrap()
}

fn moves(cities: &[&str]) -> Vec<MoveTo> {
    cities.iter().map(|c| MoveTo((*c).to_string())).collect()
}

// ---------------------------------------------------------------------------
// Optimality
// ---------------------------------------------------------------------------

#[test]
fn bfs_solves_one_move_puzzle_in_one_expansion_layer() {
    let one_move = [1, 0, 2, 3, 4, 5, 6, 7, 8];
    let puzzle = EightPuzzle::new(one_move).unwrap();
    let result = BreadthFirstSearch::default()
        .search(&puzzle, &CancelToken::new())
        .unwrap();
    assert_eq!(result.outcome, SearchOutcome::Solution(vec![Slide::Left]));
    // No more expansions than there are boards one move away.
    let neighbours = u64::try_from(puzzle.actions(&one_move).len()).unwrap();
    assert!(
        result.metrics.nodes_expanded <= neighbours,
        "expanded {} > {neighbours}",
        result.metrics.nodes_expanded
    );
    assert_eq!(puzzle.result(&one_move, &Slide::Left), GOAL);
}

#[test]
fn astar_on_romania_is_optimal() {
    let map = RouteMap::romania();
    let problem = route(&map);
    let result = AStarSearch::new(problem.straight_line())
        .search(&problem, &CancelToken::new())
        .unwrap();
    assert_eq!(
        result.outcome,
        SearchOutcome::Solution(moves(&["Sibiu", "RimnicuVilcea", "Pitesti", BUCHAREST]))
    );
    assert!((result.metrics.path_cost - 418.0).abs() < 1e-9);
}

#[test]
fn greedy_on_romania_takes_the_fagaras_road() {
    let map = RouteMap::romania();
    let problem = route(&map);
    let result = GreedyBestFirstSearch::new(problem.straight_line())
        .search(&problem, &CancelToken::new())
        .unwrap();
    assert_eq!(
        result.outcome,
        SearchOutcome::Solution(moves(&["Sibiu", "Fagaras", BUCHAREST]))
    );
    assert!((result.metrics.path_cost - 450.0).abs() < 1e-9);
}

#[test]
fn bfs_on_romania_finds_fewest_roads() {
    let map = RouteMap::romania();
    let result = BreadthFirstSearch::default()
        .search(&route(&map), &CancelToken::new())
        .unwrap();
    assert_eq!(result.outcome.actions().map(<[MoveTo]>::len), Some(3));
}

#[test]
fn astar_manhattan_solves_medium_puzzle_optimally() {
    let puzzle = EightPuzzle::new(MEDIUM).unwrap();
    let astar = AStarSearch::new(manhattan)
        .search(&puzzle, &CancelToken::new())
        .unwrap();
    let bfs = BreadthFirstSearch::default()
        .search(&puzzle, &CancelToken::new())
        .unwrap();
    assert_eq!(astar.outcome.actions().map(<[Slide]>::len), Some(9));
    assert_eq!(bfs.outcome.actions().map(<[Slide]>::len), Some(9));
    assert!(astar.metrics.nodes_expanded < bfs.metrics.nodes_expanded);
}

// ---------------------------------------------------------------------------
// A* with h = 0 is uniform-cost search
// ---------------------------------------------------------------------------

#[test]
fn zero_heuristic_astar_matches_ucs_on_detour_graph() {
    let problem = detour();
    let cancel = CancelToken::new();
    let astar = AStarSearch::new(ZeroHeuristic).search(&problem, &cancel).unwrap();
    let ucs = UniformCostSearch::default().search(&problem, &cancel).unwrap();
    assert_eq!(astar.outcome, SearchOutcome::Solution(vec![2, 3, 4, 5]));
    assert_eq!(astar.outcome, ucs.outcome);
    assert!((astar.metrics.path_cost - 10.0).abs() < f64::EPSILON);
    assert!((ucs.metrics.path_cost - 10.0).abs() < f64::EPSILON);
}

#[test]
fn zero_heuristic_astar_matches_ucs_on_romania() {
    let map = RouteMap::romania();
    let problem = route(&map);
    let cancel = CancelToken::new();
    let astar = AStarSearch::new(ZeroHeuristic).search(&problem, &cancel).unwrap();
    let ucs = UniformCostSearch::default().search(&problem, &cancel).unwrap();
    assert!((astar.metrics.path_cost - ucs.metrics.path_cost).abs() < 1e-9);
    assert!((ucs.metrics.path_cost - 418.0).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Depth-limited search
// ---------------------------------------------------------------------------

#[test]
fn dls_places_eight_queens() {
    let queens = NQueens::new(8).unwrap();
    let result = DepthLimitedSearch::new(8)
        .search(&queens, &CancelToken::new())
        .unwrap();
    let plan = result.outcome.actions().expect("eight queens has a solution");
    let rows: Vec<usize> = plan.iter().map(|a| a.row).collect();
    assert_eq!(rows, vec![0, 4, 7, 5, 2, 6, 1, 3]);
    assert_eq!(result.metrics.nodes_expanded, 113);
}

#[test]
fn dls_reports_cutoff_when_goal_is_deeper() {
    let queens = NQueens::new(8).unwrap();
    let result = DepthLimitedSearch::new(1)
        .search(&queens, &CancelToken::new())
        .unwrap();
    assert_eq!(result.outcome, SearchOutcome::Cutoff);
    assert_eq!(result.metrics.nodes_expanded, 1);

    let map = RouteMap::romania();
    let result = DepthLimitedSearch::new(2)
        .search(&route(&map), &CancelToken::new())
        .unwrap();
    assert!(result.outcome.is_cutoff());
}

#[test]
fn dls_reports_failure_when_space_is_exhausted() {
    // Three queens cannot be placed; every branch dies before the limit.
    let queens = NQueens::new(3).unwrap();
    let result = DepthLimitedSearch::new(5)
        .search(&queens, &CancelToken::new())
        .unwrap();
    assert_eq!(result.outcome, SearchOutcome::Failure);
    assert_eq!(result.metrics.nodes_expanded, 6);
}

#[test]
fn dls_never_exceeds_its_limit() {
    let map = RouteMap::romania();
    for limit in 3..7 {
        let result = DepthLimitedSearch::new(limit)
            .search(&route(&map), &CancelToken::new())
            .unwrap();
        let plan = result.outcome.actions().expect("Bucharest is 3 roads away");
        assert!(plan.len() <= limit as usize, "limit {limit}: {plan:?}");
    }
}

// ---------------------------------------------------------------------------
// Iterative deepening
// ---------------------------------------------------------------------------

#[test]
fn ids_matches_bfs_on_unit_cost_puzzle() {
    let puzzle = EightPuzzle::new(THREE_MOVES).unwrap();
    let cancel = CancelToken::new();
    let ids = IterativeDeepeningSearch::default().search(&puzzle, &cancel).unwrap();
    let bfs = BreadthFirstSearch::default().search(&puzzle, &cancel).unwrap();
    assert_eq!(ids.outcome, bfs.outcome);
    assert_eq!(
        ids.outcome,
        SearchOutcome::Solution(vec![Slide::Up, Slide::Left, Slide::Left])
    );
}

#[test]
fn ids_finds_shallowest_goal() {
    let puzzle = EightPuzzle::new(MEDIUM).unwrap();
    let ids = IterativeDeepeningSearch::default()
        .search(&puzzle, &CancelToken::new())
        .unwrap();
    assert_eq!(ids.outcome.actions().map(<[Slide]>::len), Some(9));
    assert_eq!(ids.metrics.max_depth, 9);
}

// ---------------------------------------------------------------------------
// Simulated annealing schedule extremes
// ---------------------------------------------------------------------------

fn conflicts(q: &Queens) -> f64 {
    attacking_pairs(q)
}

#[test]
fn frozen_schedule_only_checks_the_start() {
    let frozen = |_t: u64| 0.0;

    let solved = QueensBoard::new(1).unwrap();
    let result = SimulatedAnnealingSearch::new(conflicts)
        .with_schedule(frozen)
        .search(&solved, &CancelToken::new())
        .unwrap();
    assert_eq!(result.outcome, SearchOutcome::Solution(vec![]));

    let unsolved = QueensBoard::new(4).unwrap();
    let result = SimulatedAnnealingSearch::new(conflicts)
        .with_schedule(frozen)
        .search(&unsolved, &CancelToken::new())
        .unwrap();
    assert_eq!(result.outcome, SearchOutcome::Failure);
    assert_eq!(result.metrics.nodes_expanded, 0);
    assert_eq!(result.last_state, Some(vec![0, 0, 0, 0]));
}

#[test]
fn scorching_schedule_accepts_every_move() {
    let scorching = |t: u64| if t < 200 { f64::MAX } else { 0.0 };
    let board = QueensBoard::new(6).unwrap();
    let result = SimulatedAnnealingSearch::new(conflicts)
        .with_schedule(scorching)
        .with_seed(3)
        .search(&board, &CancelToken::new())
        .unwrap();
    assert_eq!(result.metrics.nodes_expanded, 200);
    // Every step moved the current node one level deeper.
    assert_eq!(result.metrics.max_depth, 200);
    assert!((result.metrics.path_cost - 200.0).abs() < f64::EPSILON);
}

#[test]
fn seeded_annealing_is_reproducible() {
    let board = QueensBoard::new(8).unwrap();
    let search = SimulatedAnnealingSearch::new(conflicts).with_seed(11);
    let a = search.search(&board, &CancelToken::new()).unwrap();
    let b = search.search(&board, &CancelToken::new()).unwrap();
    assert_eq!(a.outcome, b.outcome);
    assert_eq!(a.last_state, b.last_state);
    assert_eq!(a.metrics, b.metrics);
}
