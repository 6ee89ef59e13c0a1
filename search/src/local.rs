//! Local search: steepest-ascent hill climbing and simulated annealing.
//!
//! Both keep a single current node and no frontier. A state's value is
//! `-h(state)`, so climbing means lowering the heuristic. Neither can prove
//! that no solution exists: `Failure` means the walk ended on a non-goal.

use aima_kernel::{expand, CancelToken, Heuristic, Metrics, NodeId, Problem, SearchTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SearchError;
use crate::outcome::{SearchOutcome, SearchResult};
use crate::queue::finish;
use crate::strategy::Search;

const ANNEALING: &str = "simulated annealing";
const HILL_CLIMBING: &str = "hill climbing";

/// Maps a time step to a temperature. Must be non-negative and
/// non-increasing; annealing ends at the first step where it is 0.
pub trait Schedule {
    fn temperature(&self, t: u64) -> f64;

    /// Reject configurations that cannot produce a valid temperature curve.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidSchedule`] describing the bad parameter.
    fn validate(&self) -> Result<(), SearchError> {
        Ok(())
    }
}

impl<F> Schedule for F
where
    F: Fn(u64) -> f64,
{
    fn temperature(&self, t: u64) -> f64 {
        self(t)
    }
}

/// Exponential cooling: `k * e^(-lambda * t)` for `t < limit`, then 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scheduler {
    pub k: f64,
    pub lambda: f64,
    pub limit: u64,
}

impl Scheduler {
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidSchedule`] if `k` or `lambda` is
    /// negative or not finite.
    pub fn new(k: f64, lambda: f64, limit: u64) -> Result<Self, SearchError> {
        let scheduler = Self { k, lambda, limit };
        scheduler.validate()?;
        Ok(scheduler)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            k: 20.0,
            lambda: 0.045,
            limit: 100,
        }
    }
}

impl Schedule for Scheduler {
    #[allow(clippy::cast_precision_loss)]
    fn temperature(&self, t: u64) -> f64 {
        if t < self.limit {
            self.k * (-self.lambda * t as f64).exp()
        } else {
            0.0
        }
    }

    fn validate(&self) -> Result<(), SearchError> {
        for (name, value) in [("k", self.k), ("lambda", self.lambda)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SearchError::InvalidSchedule {
                    detail: format!("{name} must be finite and non-negative, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// Probability of accepting a move that changes the value by `delta` at
/// `temperature`: `e^(delta / temperature)`.
#[must_use]
pub fn probability_of_acceptance(temperature: f64, delta: f64) -> f64 {
    (delta / temperature).exp()
}

/// Run simulated annealing with the caller's random source.
///
/// Runs until the schedule reaches 0 or `cancel` fires. A schedule that
/// never reaches 0 runs until cancelled.
pub fn simulated_annealing<P, H, Sch, R>(
    problem: &P,
    heuristic: &H,
    schedule: &Sch,
    rng: &mut R,
    cancel: &CancelToken,
) -> SearchResult<P::State, P::Action>
where
    P: Problem,
    H: Heuristic<P::State>,
    Sch: Schedule + ?Sized,
    R: Rng + ?Sized,
{
    let mut metrics = Metrics::new();
    let mut tree: SearchTree<P::State, P::Action> = SearchTree::new(problem.initial_state());
    let mut current = tree.root();

    for t in 0u64.. {
        if cancel.is_cancelled() {
            let partial = tree.actions_to(current);
            return stop(ANNEALING, SearchOutcome::Cancelled { partial }, &tree, current, metrics);
        }
        let temperature = schedule.temperature(t);
        if temperature <= 0.0 {
            break;
        }

        let children = expand(&tree, current, problem, &mut metrics);
        if children.is_empty() {
            continue;
        }
        let pick = rng.gen_range(0..children.len());
        let Some(child) = children.into_iter().nth(pick) else {
            continue;
        };

        let delta = heuristic.h(&tree.get(current).state) - heuristic.h(&child.state);
        if delta > 0.0 || rng.gen::<f64>() < probability_of_acceptance(temperature, delta) {
            current = tree.insert(child);
        }
    }

    let outcome = settle(problem, &tree, current);
    stop(ANNEALING, outcome, &tree, current, metrics)
}

/// Run steepest-ascent hill climbing. Stops when no successor is strictly
/// better than the current state; among equally good successors the first
/// generated wins.
pub fn hill_climbing<P, H>(
    problem: &P,
    heuristic: &H,
    cancel: &CancelToken,
) -> SearchResult<P::State, P::Action>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    let mut metrics = Metrics::new();
    let mut tree: SearchTree<P::State, P::Action> = SearchTree::new(problem.initial_state());
    let mut current = tree.root();

    loop {
        if cancel.is_cancelled() {
            let partial = tree.actions_to(current);
            return stop(HILL_CLIMBING, SearchOutcome::Cancelled { partial }, &tree, current, metrics);
        }
        let here = heuristic.h(&tree.get(current).state);
        let mut best: Option<(f64, _)> = None;
        for child in expand(&tree, current, problem, &mut metrics) {
            let h = heuristic.h(&child.state);
            let better = match &best {
                Some((best_h, _)) => h < *best_h,
                None => true,
            };
            if better {
                best = Some((h, child));
            }
        }
        match best {
            Some((h, child)) if h < here => current = tree.insert(child),
            _ => break,
        }
    }

    let outcome = settle(problem, &tree, current);
    stop(HILL_CLIMBING, outcome, &tree, current, metrics)
}

fn settle<P: Problem>(
    problem: &P,
    tree: &SearchTree<P::State, P::Action>,
    current: NodeId,
) -> SearchOutcome<P::Action> {
    if problem.is_goal(&tree.get(current).state) {
        SearchOutcome::Solution(tree.actions_to(current))
    } else {
        SearchOutcome::Failure
    }
}

fn stop<S: Clone, A>(
    strategy: &'static str,
    outcome: SearchOutcome<A>,
    tree: &SearchTree<S, A>,
    current: NodeId,
    mut metrics: Metrics,
) -> SearchResult<S, A> {
    metrics.path_cost = tree.get(current).path_cost;
    finish(strategy, outcome, metrics).with_last_state(tree.get(current).state.clone())
}

/// Seeded simulated annealing: the same seed replays the same walk.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedAnnealingSearch<H, Sch = Scheduler> {
    pub heuristic: H,
    pub schedule: Sch,
    pub seed: u64,
}

impl<H> SimulatedAnnealingSearch<H> {
    pub const NAME: &'static str = ANNEALING;

    /// Default [`Scheduler`], seed 0.
    pub fn new(heuristic: H) -> Self {
        Self {
            heuristic,
            schedule: Scheduler::default(),
            seed: 0,
        }
    }
}

impl<H, Sch> SimulatedAnnealingSearch<H, Sch> {
    pub fn with_schedule<T: Schedule>(self, schedule: T) -> SimulatedAnnealingSearch<H, T> {
        SimulatedAnnealingSearch {
            heuristic: self.heuristic,
            schedule,
            seed: self.seed,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl<P, H, Sch> Search<P> for SimulatedAnnealingSearch<H, Sch>
where
    P: Problem,
    H: Heuristic<P::State>,
    Sch: Schedule,
{
    fn name(&self) -> &'static str {
        ANNEALING
    }

    fn search(
        &self,
        problem: &P,
        cancel: &CancelToken,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        self.schedule.validate()?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        Ok(simulated_annealing(problem, &self.heuristic, &self.schedule, &mut rng, cancel))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HillClimbingSearch<H> {
    pub heuristic: H,
}

impl<H> HillClimbingSearch<H> {
    pub const NAME: &'static str = HILL_CLIMBING;

    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<P, H> Search<P> for HillClimbingSearch<H>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn search(
        &self,
        problem: &P,
        cancel: &CancelToken,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        Ok(hill_climbing(problem, &self.heuristic, cancel))
    }
}
