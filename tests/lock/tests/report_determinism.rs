//! Lock tests: run reports are byte-stable within a process and verify
//! against their own digest.

use std::collections::BTreeSet;

use aima_harness::report::verify_report;
use aima_harness::worlds::eight_puzzle::{manhattan, EightPuzzle, MEDIUM};
use aima_harness::worlds::n_queens::{attacking_pairs, Queens, QueensBoard};
use aima_harness::{run_named, run_search, Catalog, CatalogConfig, ReportError};
use aima_kernel::CancelToken;
use aima_search::{AStarSearch, SimulatedAnnealingSearch, Strategy};
use lock_tests::fixtures::detour;

#[test]
fn astar_report_is_stable_n10() {
    let puzzle = EightPuzzle::new(MEDIUM).unwrap();
    let strategy = Strategy::AStar(AStarSearch::new(manhattan));
    let first = run_search(&puzzle, &strategy, &CancelToken::new()).unwrap();
    let first_bytes = first.report.canonical_bytes().unwrap();
    for _ in 1..10 {
        let again = run_search(&puzzle, &strategy, &CancelToken::new()).unwrap();
        assert_eq!(again.report.canonical_bytes().unwrap(), first_bytes);
    }
}

#[test]
fn annealing_walk_depends_on_seed() {
    let board = QueensBoard::new(8).unwrap();
    let run = |seed| {
        let strategy = Strategy::SimulatedAnnealing(
            SimulatedAnnealingSearch::new(|q: &Queens| attacking_pairs(q)).with_seed(seed),
        );
        run_search(&board, &strategy, &CancelToken::new()).unwrap()
    };

    let first = run(5);
    let again = run(5);
    assert_eq!(
        first.report.digest().unwrap(),
        again.report.digest().unwrap()
    );
    assert_eq!(first.result.last_state, again.result.last_state);

    // Different seeds walk to different boards, not just different configs.
    let finals: BTreeSet<Queens> = (0..8)
        .map(|seed| run(seed).result.last_state.expect("annealing reports its last state"))
        .collect();
    assert!(finals.len() > 1, "every seed ended on {finals:?}");
}

#[test]
fn every_catalog_entry_produces_a_report() {
    let world = detour();
    let catalog = Catalog::standard(aima_kernel::ZeroHeuristic, CatalogConfig::default());
    for name in catalog.names() {
        let run = run_named(&world, &catalog, name, &CancelToken::new()).unwrap();
        let json = run.report.to_json();
        assert_eq!(json["world_id"], "graph");
        assert!(json["metrics"]["nodesExpanded"].is_string(), "{name}");
        assert!(run.report.digest().is_ok(), "{name}");
    }
}

#[test]
fn report_bytes_verify_against_their_digest() {
    let puzzle = EightPuzzle::new(MEDIUM).unwrap();
    let strategy = Strategy::AStar(AStarSearch::new(manhattan));
    let run = run_search(&puzzle, &strategy, &CancelToken::new()).unwrap();

    let bytes = run.report.canonical_bytes().unwrap();
    let digest = run.report.digest().unwrap();
    assert_eq!(verify_report(&bytes, digest.as_str()).unwrap(), digest);
}

#[test]
fn forged_digest_fails_verification() {
    let puzzle = EightPuzzle::new(MEDIUM).unwrap();
    let strategy = Strategy::AStar(AStarSearch::new(manhattan));
    let run = run_search(&puzzle, &strategy, &CancelToken::new()).unwrap();
    let bytes = run.report.canonical_bytes().unwrap();

    let forged = "sha256:0000000000000000000000000000000000000000000000000000000000000000";
    assert!(matches!(
        verify_report(&bytes, forged),
        Err(ReportError::DigestMismatch { .. })
    ));
}
