//! N-queens, in two formulations.
//!
//! [`NQueens`] places queens one column at a time, left to right, only on
//! rows the queens already placed do not attack; every reachable board is
//! conflict-free, so a goal is any board with `n` queens. [`QueensBoard`]
//! starts with a queen in every column and moves them around, for local
//! search with [`attacking_pairs`] as the heuristic.

use aima_kernel::Problem;

use crate::contract::{World, WorldError};

/// Queen rows by column, leftmost first.
pub type Queens = Vec<usize>;

/// Put a queen at (`column`, `row`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueenAt {
    pub column: usize,
    pub row: usize,
}

fn attacks(queens: &[usize], column: usize, row: usize) -> bool {
    queens
        .iter()
        .enumerate()
        .filter(|&(c, _)| c != column)
        .any(|(c, &r)| r == row || c.abs_diff(column) == r.abs_diff(row))
}

fn check_size(n: usize) -> Result<(), WorldError> {
    if n == 0 {
        return Err(WorldError::InvalidWorld {
            detail: "board needs at least one column".into(),
        });
    }
    Ok(())
}

/// Incremental formulation: start empty, add a queen per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NQueens {
    n: usize,
}

impl NQueens {
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidWorld`] for `n == 0`.
    pub fn new(n: usize) -> Result<Self, WorldError> {
        check_size(n)?;
        Ok(Self { n })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.n
    }
}

impl Problem for NQueens {
    type State = Queens;
    type Action = QueenAt;

    fn initial_state(&self) -> Queens {
        Vec::new()
    }

    fn actions(&self, state: &Queens) -> Vec<QueenAt> {
        let column = state.len();
        if column >= self.n {
            return Vec::new();
        }
        (0..self.n)
            .filter(|&row| !attacks(state, column, row))
            .map(|row| QueenAt { column, row })
            .collect()
    }

    fn result(&self, state: &Queens, action: &QueenAt) -> Queens {
        let mut next = state.clone();
        next.push(action.row);
        next
    }

    fn is_goal(&self, state: &Queens) -> bool {
        state.len() == self.n
    }
}

impl World for NQueens {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "n_queens"
    }

    fn state_json(&self, state: &Queens) -> serde_json::Value {
        serde_json::json!({"n": self.n, "rows": state})
    }
}

/// Complete-state formulation: one queen per column, all in row 0 at the
/// start. An action moves one queen to another row of its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueensBoard {
    n: usize,
}

impl QueensBoard {
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidWorld`] for `n == 0`.
    pub fn new(n: usize) -> Result<Self, WorldError> {
        check_size(n)?;
        Ok(Self { n })
    }
}

impl Problem for QueensBoard {
    type State = Queens;
    type Action = QueenAt;

    fn initial_state(&self) -> Queens {
        vec![0; self.n]
    }

    fn actions(&self, state: &Queens) -> Vec<QueenAt> {
        (0..self.n)
            .flat_map(|column| {
                (0..self.n)
                    .filter(move |&row| state.get(column) != Some(&row))
                    .map(move |row| QueenAt { column, row })
            })
            .collect()
    }

    fn result(&self, state: &Queens, action: &QueenAt) -> Queens {
        let mut next = state.clone();
        if let Some(row) = next.get_mut(action.column) {
            *row = action.row;
        }
        next
    }

    fn is_goal(&self, state: &Queens) -> bool {
        attacking_pairs(state).abs() < f64::EPSILON
    }
}

impl World for QueensBoard {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "n_queens_board"
    }

    fn state_json(&self, state: &Queens) -> serde_json::Value {
        serde_json::json!({"n": self.n, "rows": state})
    }
}

/// Number of queen pairs that attack each other.
#[must_use]
pub fn attacking_pairs(queens: &[usize]) -> f64 {
    let mut pairs: u32 = 0;
    for (c1, &r1) in queens.iter().enumerate() {
        for (c2, &r2) in queens.iter().enumerate().skip(c1 + 1) {
            if r1 == r2 || c1.abs_diff(c2) == r1.abs_diff(r2) {
                pairs += 1;
            }
        }
    }
    f64::from(pairs)
}
