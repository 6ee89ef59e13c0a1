//! Online depth-first exploration.
//!
//! The agent interleaves planning and acting: it sees one percept per step,
//! learns the outcome of the action it took last, and only ever walks edges
//! it has tried. It never calls [`Problem::result`]; the environment does
//! that. Backtracking needs reversible actions: a transition recorded as
//! `s --a--> s'` is undone by some action of `s'` observed to lead back.

use std::collections::{HashMap, VecDeque};

use aima_kernel::{AgentAction, Problem};

/// Online depth-first search agent over `P`, mapping percepts to states
/// with `F`.
#[derive(Debug)]
pub struct OnlineDfsAgent<P: Problem, F> {
    problem: P,
    percept_to_state: F,
    /// Observed transitions, per origin state in recording order.
    result: HashMap<P::State, Vec<(P::Action, P::State)>>,
    untried: HashMap<P::State, VecDeque<P::Action>>,
    unbacktracked: HashMap<P::State, VecDeque<P::State>>,
    previous: Option<(P::State, P::Action)>,
    alive: bool,
}

impl<P: Problem, F> OnlineDfsAgent<P, F> {
    pub fn new(problem: P, percept_to_state: F) -> Self {
        Self {
            problem,
            percept_to_state,
            result: HashMap::new(),
            untried: HashMap::new(),
            unbacktracked: HashMap::new(),
            previous: None,
            alive: true,
        }
    }

    #[must_use]
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// `false` once the agent has returned `NoOp`.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Forget everything learned and start over.
    pub fn reset(&mut self) {
        self.result.clear();
        self.untried.clear();
        self.unbacktracked.clear();
        self.previous = None;
        self.alive = true;
    }

    /// The recorded outcome of `action` in `state`, if it has been observed.
    #[must_use]
    pub fn observed(&self, state: &P::State, action: &P::Action) -> Option<&P::State> {
        self.result
            .get(state)?
            .iter()
            .find(|(a, _)| a == action)
            .map(|(_, next)| next)
    }

    /// Choose the action for this step.
    pub fn execute<Pc>(&mut self, percept: &Pc) -> AgentAction<P::Action>
    where
        F: Fn(&Pc) -> P::State,
    {
        if !self.alive {
            return AgentAction::NoOp;
        }
        let current = (self.percept_to_state)(percept);
        let action = self.choose(&current);
        match &action {
            AgentAction::Act(a) => self.previous = Some((current, a.clone())),
            AgentAction::NoOp => {
                tracing::trace!(state = ?current, "online agent done");
                self.alive = false;
                self.previous = None;
            }
        }
        action
    }

    fn choose(&mut self, current: &P::State) -> AgentAction<P::Action> {
        if self.problem.is_goal(current) {
            return AgentAction::NoOp;
        }
        if !self.untried.contains_key(current) {
            let actions = self.problem.actions(current);
            self.untried.insert(current.clone(), actions.into());
        }

        if let Some((prev_state, prev_action)) = self.previous.take() {
            if self.observed(&prev_state, &prev_action) != Some(current) {
                tracing::trace!(from = ?prev_state, action = ?prev_action, to = ?current, "transition recorded");
                self.record(prev_state.clone(), prev_action, current.clone());
                self.unbacktracked
                    .entry(current.clone())
                    .or_default()
                    .push_front(prev_state);
            }
        }

        if let Some(action) = self.untried.get_mut(current).and_then(VecDeque::pop_front) {
            return AgentAction::Act(action);
        }

        let Some(back) = self
            .unbacktracked
            .get_mut(current)
            .and_then(VecDeque::pop_front)
        else {
            return AgentAction::NoOp;
        };
        let undo = self.result.get(current).and_then(|outcomes| {
            outcomes
                .iter()
                .find(|(_, next)| *next == back)
                .map(|(a, _)| a.clone())
        });
        match undo {
            Some(action) => AgentAction::Act(action),
            None => {
                tracing::warn!(from = ?current, to = ?back, "no observed action leads back; stopping");
                AgentAction::NoOp
            }
        }
    }

    fn record(&mut self, from: P::State, action: P::Action, to: P::State) {
        let outcomes = self.result.entry(from).or_default();
        match outcomes.iter_mut().find(|(a, _)| *a == action) {
            Some(entry) => entry.1 = to,
            None => outcomes.push((action, to)),
        }
    }
}
