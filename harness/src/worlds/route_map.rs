//! Route finding on an undirected road map.
//!
//! A [`RouteMap`] holds named locations with planar positions and weighted
//! two-way roads. A [`RouteProblem`] asks for a route between two of them;
//! [`StraightLine`] is the matching heuristic. [`RouteMap::romania`] is the
//! textbook map, with the straight-line figure's coordinates.

use std::collections::BTreeMap;

use aima_kernel::{Heuristic, Problem};

use crate::contract::{World, WorldError};

/// Drive to a neighbouring location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveTo(pub String);

#[derive(Debug, Clone, Default)]
pub struct RouteMap {
    /// Neighbours of each location, in the order roads were added.
    roads: BTreeMap<String, Vec<(String, f64)>>,
    positions: BTreeMap<String, (f64, f64)>,
}

impl RouteMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or move a location.
    pub fn set_position(&mut self, location: &str, x: f64, y: f64) {
        self.positions.insert(location.to_string(), (x, y));
    }

    /// Add a two-way road.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidWorld`] for a negative or non-finite
    /// length.
    pub fn add_road(&mut self, a: &str, b: &str, length: f64) -> Result<(), WorldError> {
        if !length.is_finite() || length < 0.0 {
            return Err(WorldError::InvalidWorld {
                detail: format!("road {a}-{b} has invalid length {length}"),
            });
        }
        self.link(a, b, length);
        Ok(())
    }

    fn link(&mut self, a: &str, b: &str, length: f64) {
        self.roads
            .entry(a.to_string())
            .or_default()
            .push((b.to_string(), length));
        self.roads
            .entry(b.to_string())
            .or_default()
            .push((a.to_string(), length));
    }

    /// Locations one road away from `location`.
    #[must_use]
    pub fn neighbours(&self, location: &str) -> &[(String, f64)] {
        self.roads.get(location).map(Vec::as_slice).unwrap_or_default()
    }

    /// Length of the road between `a` and `b`, if there is one.
    #[must_use]
    pub fn distance(&self, a: &str, b: &str) -> Option<f64> {
        self.neighbours(a)
            .iter()
            .find(|(to, _)| to == b)
            .map(|(_, length)| *length)
    }

    #[must_use]
    pub fn contains(&self, location: &str) -> bool {
        self.roads.contains_key(location) || self.positions.contains_key(location)
    }

    #[must_use]
    pub fn position(&self, location: &str) -> Option<(f64, f64)> {
        self.positions.get(location).copied()
    }

    /// Every location, sorted by name.
    #[must_use]
    pub fn locations(&self) -> Vec<&str> {
        let mut all: Vec<&str> = self
            .roads
            .keys()
            .chain(self.positions.keys())
            .map(String::as_str)
            .collect();
        all.sort_unstable();
        all.dedup();
        all
    }

    /// Number of two-way roads.
    #[must_use]
    pub fn road_count(&self) -> usize {
        self.roads.values().map(Vec::len).sum::<usize>() / 2
    }

    /// The simplified road map of Romania.
    #[must_use]
    pub fn romania() -> Self {
        let mut map = Self::new();
        for (a, b, length) in ROMANIA_ROADS {
            map.link(a, b, length);
        }
        for (location, x, y) in ROMANIA_POSITIONS {
            map.set_position(location, x, y);
        }
        map
    }
}

pub const ARAD: &str = "Arad";
pub const BUCHAREST: &str = "Bucharest";

const ROMANIA_ROADS: [(&str, &str, f64); 23] = [
    (ARAD, "Zerind", 75.0),
    ("Oradea", "Zerind", 71.0),
    (ARAD, "Timisoara", 118.0),
    ("Lugoj", "Timisoara", 111.0),
    ("Lugoj", "Mehadia", 70.0),
    ("Drobeta", "Mehadia", 75.0),
    ("Craiova", "Drobeta", 120.0),
    ("Craiova", "RimnicuVilcea", 146.0),
    ("Craiova", "Pitesti", 138.0),
    (ARAD, "Sibiu", 140.0),
    ("Oradea", "Sibiu", 151.0),
    ("Fagaras", "Sibiu", 99.0),
    ("RimnicuVilcea", "Sibiu", 80.0),
    ("Pitesti", "RimnicuVilcea", 97.0),
    (BUCHAREST, "Fagaras", 211.0),
    (BUCHAREST, "Pitesti", 101.0),
    (BUCHAREST, "Giurgiu", 90.0),
    (BUCHAREST, "Urziceni", 85.0),
    ("Hirsova", "Urziceni", 98.0),
    ("Eforie", "Hirsova", 86.0),
    ("Urziceni", "Vaslui", 142.0),
    ("Iasi", "Vaslui", 92.0),
    ("Iasi", "Neamt", 87.0),
];

const ROMANIA_POSITIONS: [(&str, f64, f64); 20] = [
    (ARAD, 91.0, 492.0),
    (BUCHAREST, 400.0, 327.0),
    ("Craiova", 253.0, 288.0),
    ("Drobeta", 165.0, 299.0),
    ("Eforie", 562.0, 293.0),
    ("Fagaras", 305.0, 449.0),
    ("Giurgiu", 375.0, 270.0),
    ("Hirsova", 534.0, 350.0),
    ("Iasi", 473.0, 506.0),
    ("Lugoj", 165.0, 379.0),
    ("Mehadia", 168.0, 339.0),
    ("Neamt", 406.0, 537.0),
    ("Oradea", 131.0, 571.0),
    ("Pitesti", 320.0, 368.0),
    ("RimnicuVilcea", 233.0, 410.0),
    ("Sibiu", 207.0, 457.0),
    ("Timisoara", 94.0, 410.0),
    ("Urziceni", 456.0, 350.0),
    ("Vaslui", 509.0, 444.0),
    ("Zerind", 108.0, 531.0),
];

/// Find a route from `from` to `to` on a borrowed map.
#[derive(Debug, Clone)]
pub struct RouteProblem<'m> {
    map: &'m RouteMap,
    from: String,
    to: String,
}

impl<'m> RouteProblem<'m> {
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownLocation`] if either end is not on the
    /// map.
    pub fn new(map: &'m RouteMap, from: &str, to: &str) -> Result<Self, WorldError> {
        for location in [from, to] {
            if !map.contains(location) {
                return Err(WorldError::UnknownLocation {
                    name: location.to_string(),
                });
            }
        }
        Ok(Self {
            map,
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    #[must_use]
    pub fn map(&self) -> &'m RouteMap {
        self.map
    }

    #[must_use]
    pub fn destination(&self) -> &str {
        &self.to
    }

    /// Straight-line distance to this problem's destination.
    #[must_use]
    pub fn straight_line(&self) -> StraightLine<'m> {
        StraightLine {
            map: self.map,
            goal: self.to.clone(),
        }
    }
}

impl Problem for RouteProblem<'_> {
    type State = String;
    type Action = MoveTo;

    fn initial_state(&self) -> String {
        self.from.clone()
    }

    fn actions(&self, state: &String) -> Vec<MoveTo> {
        self.map
            .neighbours(state)
            .iter()
            .map(|(to, _)| MoveTo(to.clone()))
            .collect()
    }

    fn result(&self, _state: &String, action: &MoveTo) -> String {
        action.0.clone()
    }

    fn is_goal(&self, state: &String) -> bool {
        *state == self.to
    }

    fn step_cost(&self, state: &String, action: &MoveTo, _next: &String) -> f64 {
        self.map.distance(state, &action.0).unwrap_or(f64::INFINITY)
    }
}

impl World for RouteProblem<'_> {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "route_map"
    }

    fn state_json(&self, state: &String) -> serde_json::Value {
        serde_json::json!({"at": state, "to": self.to})
    }
}

/// Euclidean distance between map positions. Consistent whenever no road is
/// shorter than the straight line between its ends, as on [`RouteMap::romania`].
/// Locations without a position score 0.
#[derive(Debug, Clone)]
pub struct StraightLine<'m> {
    map: &'m RouteMap,
    goal: String,
}

impl Heuristic<String> for StraightLine<'_> {
    fn h(&self, state: &String) -> f64 {
        match (self.map.position(state), self.map.position(&self.goal)) {
            (Some((x1, y1)), Some((x2, y2))) => (x1 - x2).hypot(y1 - y2),
            _ => 0.0,
        }
    }
}
