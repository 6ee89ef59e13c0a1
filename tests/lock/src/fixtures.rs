//! Small worlds shared across lock tests.
//!
//! [`GraphWorld`] nodes are `u32`; an action is the id of the node it leads
//! to. Actions come out in the order edges were added, so runs are
//! reproducible. [`Tripwire`] fires a hook partway through a search.

use std::cell::Cell;
use std::collections::BTreeMap;

use aima_harness::World;
use aima_kernel::{CancelToken, Problem};

/// A weighted graph with one start and one goal node.
#[derive(Debug, Clone)]
pub struct GraphWorld {
    pub start: u32,
    pub goal: u32,
    edges: BTreeMap<u32, Vec<(u32, f64)>>,
}

impl GraphWorld {
    /// One-way edges.
    #[must_use]
    pub fn directed(start: u32, goal: u32, edges: &[(u32, u32, f64)]) -> Self {
        let mut world = Self {
            start,
            goal,
            edges: BTreeMap::new(),
        };
        for &(a, b, cost) in edges {
            world.edges.entry(a).or_default().push((b, cost));
        }
        world
    }

    /// Every edge usable both ways.
    #[must_use]
    pub fn undirected(start: u32, goal: u32, edges: &[(u32, u32, f64)]) -> Self {
        let mut world = Self::directed(start, goal, edges);
        for &(a, b, cost) in edges {
            world.edges.entry(b).or_default().push((a, cost));
        }
        world
    }

    /// Number of edges, counting each direction once.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

impl Problem for GraphWorld {
    type State = u32;
    type Action = u32;

    fn initial_state(&self) -> u32 {
        self.start
    }

    fn actions(&self, state: &u32) -> Vec<u32> {
        self.edges
            .get(state)
            .map(|out| out.iter().map(|(to, _)| *to).collect())
            .unwrap_or_default()
    }

    fn result(&self, _state: &u32, action: &u32) -> u32 {
        *action
    }

    fn is_goal(&self, state: &u32) -> bool {
        *state == self.goal
    }

    fn step_cost(&self, state: &u32, action: &u32, _next: &u32) -> f64 {
        self.edges
            .get(state)
            .and_then(|out| out.iter().find(|(to, _)| to == action))
            .map_or(f64::INFINITY, |(_, cost)| *cost)
    }
}

impl World for GraphWorld {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "graph"
    }

    fn state_json(&self, state: &u32) -> serde_json::Value {
        serde_json::json!({"goal": self.goal, "node": state})
    }
}

/// The four-node ring A-B-C-D-A with goal D, every edge two-way.
#[must_use]
pub fn ring() -> GraphWorld {
    GraphWorld::undirected(
        0,
        3,
        &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0)],
    )
}

/// A graph where the cheapest path is not the shortest one.
#[must_use]
pub fn detour() -> GraphWorld {
    GraphWorld::directed(
        0,
        5,
        &[
            (0, 5, 20.0),
            (0, 1, 2.0),
            (0, 2, 4.0),
            (1, 3, 7.0),
            (2, 3, 1.0),
            (3, 4, 3.0),
            (4, 5, 2.0),
            (1, 5, 14.0),
        ],
    )
}

/// An endless one-way counter `0 -> 1 -> 2 -> ...` with no goal. The
/// `trip_at`-th call to `actions` (1-based) runs a hook before answering,
/// so tests can act in the middle of an expansion.
pub struct Tripwire {
    trip_at: usize,
    calls: Cell<usize>,
    on_trip: Box<dyn Fn() + Send>,
}

impl Tripwire {
    #[must_use]
    pub fn new(trip_at: usize, on_trip: impl Fn() + Send + 'static) -> Self {
        Self {
            trip_at,
            calls: Cell::new(0),
            on_trip: Box::new(on_trip),
        }
    }

    /// Cancel `token` during the `trip_at`-th expansion.
    #[must_use]
    pub fn cancelling(token: &CancelToken, trip_at: usize) -> Self {
        let token = token.clone();
        Self::new(trip_at, move || token.cancel())
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Problem for Tripwire {
    type State = u32;
    type Action = u32;

    fn initial_state(&self) -> u32 {
        0
    }

    fn actions(&self, _state: &u32) -> Vec<u32> {
        let calls = self.calls.get() + 1;
        self.calls.set(calls);
        if calls == self.trip_at {
            (self.on_trip)();
        }
        vec![1]
    }

    fn result(&self, state: &u32, action: &u32) -> u32 {
        state + action
    }

    fn is_goal(&self, _state: &u32) -> bool {
        false
    }
}

/// Heuristic for [`Tripwire`] that always favours the next counter value.
#[must_use]
pub fn uphill(state: &u32) -> f64 {
    1_000.0 - f64::from(*state)
}
