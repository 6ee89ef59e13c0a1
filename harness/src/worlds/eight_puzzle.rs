//! The 8-puzzle: a 3×3 sliding-tile board with one blank.
//!
//! Tiles are numbered 1–8 and the blank is 0. The goal board is
//! `0 1 2 / 3 4 5 / 6 7 8`. Actions move the blank; each costs 1.

use aima_kernel::Problem;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::contract::{World, WorldError};

/// Row-major tile layout; `0` is the blank.
pub type Board = [u8; 9];

pub const GOAL: Board = [0, 1, 2, 3, 4, 5, 6, 7, 8];

/// Three blank moves from the goal.
pub const THREE_MOVES: Board = [1, 2, 5, 3, 4, 0, 6, 7, 8];
pub const MEDIUM: Board = [1, 4, 2, 7, 5, 8, 3, 0, 6];
pub const EXTREME: Board = [0, 8, 7, 6, 5, 4, 3, 2, 1];

/// Direction the blank moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slide {
    Up,
    Down,
    Left,
    Right,
}

impl Slide {
    pub const ALL: [Slide; 4] = [Slide::Up, Slide::Down, Slide::Left, Slide::Right];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EightPuzzle {
    initial: Board,
}

impl EightPuzzle {
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidWorld`] unless `initial` is a
    /// permutation of 0–8.
    pub fn new(initial: Board) -> Result<Self, WorldError> {
        let mut seen = [false; 9];
        for &tile in &initial {
            let slot = seen.get_mut(usize::from(tile)).ok_or_else(|| WorldError::InvalidWorld {
                detail: format!("tile {tile} out of range 0-8"),
            })?;
            if *slot {
                return Err(WorldError::InvalidWorld {
                    detail: format!("tile {tile} appears twice"),
                });
            }
            *slot = true;
        }
        Ok(Self { initial })
    }

    /// A board reached by `moves` random blank slides from the goal, so it
    /// is always solvable. The same seed yields the same board.
    #[must_use]
    pub fn scrambled(seed: u64, moves: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = GOAL;
        for _ in 0..moves {
            let slide = Slide::ALL[rng.gen_range(0..Slide::ALL.len())];
            if let Some(next) = slid(&board, slide) {
                board = next;
            }
        }
        Self { initial: board }
    }
}

fn blank(board: &Board) -> usize {
    board.iter().position(|&t| t == 0).unwrap_or(0)
}

/// The board after sliding the blank, or `None` if it would leave the grid.
fn slid(board: &Board, slide: Slide) -> Option<Board> {
    let gap = blank(board);
    let (row, col) = (gap / 3, gap % 3);
    let target = match slide {
        Slide::Up if row > 0 => gap - 3,
        Slide::Down if row < 2 => gap + 3,
        Slide::Left if col > 0 => gap - 1,
        Slide::Right if col < 2 => gap + 1,
        _ => return None,
    };
    let mut next = *board;
    next.swap(gap, target);
    Some(next)
}

impl Problem for EightPuzzle {
    type State = Board;
    type Action = Slide;

    fn initial_state(&self) -> Board {
        self.initial
    }

    fn actions(&self, state: &Board) -> Vec<Slide> {
        Slide::ALL
            .into_iter()
            .filter(|s| slid(state, *s).is_some())
            .collect()
    }

    fn result(&self, state: &Board, action: &Slide) -> Board {
        slid(state, *action).unwrap_or(*state)
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == GOAL
    }
}

impl World for EightPuzzle {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "eight_puzzle"
    }

    fn state_json(&self, state: &Board) -> serde_json::Value {
        serde_json::json!(state)
    }
}

/// Sum over tiles of grid distance to the tile's goal square. Admissible.
#[must_use]
pub fn manhattan(board: &Board) -> f64 {
    let total: usize = board
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(at, &tile)| {
            let home = usize::from(tile);
            (at / 3).abs_diff(home / 3) + (at % 3).abs_diff(home % 3)
        })
        .sum();
    f64::from(u8::try_from(total).unwrap_or(u8::MAX))
}

/// Number of tiles off their goal square. Admissible.
#[must_use]
pub fn misplaced_tiles(board: &Board) -> f64 {
    let count = board
        .iter()
        .zip(GOAL.iter())
        .filter(|(tile, goal)| **tile != 0 && tile != goal)
        .count();
    f64::from(u8::try_from(count).unwrap_or(u8::MAX))
}
