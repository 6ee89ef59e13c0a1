//! Shared helpers for the benchmark suites.

use aima_harness::worlds::eight_puzzle::{EightPuzzle, EXTREME, MEDIUM, THREE_MOVES};
use aima_kernel::{Node, NodeId, SearchTree};

/// A tree of `n` nodes hanging off the root, for frontier benchmarks.
/// Returns the tree and the ids of the non-root nodes.
#[must_use]
pub fn flat_tree(n: u32) -> (SearchTree<u32, u32>, Vec<NodeId>) {
    let mut tree = SearchTree::new(0);
    let root = tree.root();
    let ids = (1..=n)
        .map(|i| {
            tree.insert(Node {
                state: i,
                parent: Some(root),
                action: Some(i),
                path_cost: f64::from(i % 17),
                depth: 1,
            })
        })
        .collect();
    (tree, ids)
}

/// Named 8-puzzle boards by difficulty.
///
/// # Panics
///
/// Panics if a preset board is malformed. Presets are constants, so this
/// is a programming error.
#[must_use]
pub fn puzzles() -> Vec<(&'static str, EightPuzzle)> {
    [("three_moves", THREE_MOVES), ("medium", MEDIUM), ("extreme", EXTREME)]
        .into_iter()
        .map(|(name, board)| (name, EightPuzzle::new(board).expect("preset board")))
        .collect()
}
