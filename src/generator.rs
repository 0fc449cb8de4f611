//! Puzzle generation
//!
//! A new puzzle starts as a randomized solve of an empty board. The full
//! grid is then dug out cell by cell: a removal only happens if the
//! remaining clues still pin down a single solution, which is checked by
//! trial-solving a copy of the board for every other digit the cell
//! could hold.

use std::fmt;
use std::str::FromStr;

use rand::seq::index;
use rand::Rng;

use crate::board::Board;
use crate::consts::N_CELLS;
use crate::errors::ParseDifficultyError;
use crate::positions::Cell;

/// Preset removal counts for [`Board::new_game`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Tries to blank 45 cells
    Easy,
    /// Tries to blank 63 cells
    Medium,
    /// Tries to blank every cell the uniqueness check allows
    Hard,
}

impl Difficulty {
    /// Returns the number of cells [`Board::conceal`] samples for removal
    /// at this difficulty.
    pub fn conceal_count(self) -> u8 {
        match self {
            Difficulty::Easy => 45,
            Difficulty::Medium => 63,
            Difficulty::Hard => 81,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_owned())),
        }
    }
}

impl Board {
    /// Marks every filled cell as a given of the puzzle and every empty
    /// cell as writable.
    pub fn fix(&mut self) {
        for state in self.cells.iter_mut() {
            state.fixed = state.digit.is_some();
        }
    }

    /// Fixes the board, then tries to blank `count` distinct cells chosen
    /// at random. A sampled cell is only blanked if the puzzle would still
    /// have a unique solution without it, checked with
    /// [`is_unique`](Board::is_unique); blanked cells become writable
    /// again. Counts above 81 are clamped.
    ///
    /// Returns the number of cells actually blanked. Every sampled cell
    /// costs up to one trial solve per alternative candidate, so large
    /// counts on full boards can take a while.
    pub fn conceal(&mut self, count: u8, rng: &mut impl Rng) -> u8 {
        self.fix();
        let count = usize::from(count).min(N_CELLS);
        let mut n_blanked = 0;

        for idx in index::sample(rng, N_CELLS, count) {
            let cell = Cell::new(idx as u8);
            if self.digit(cell).is_none() {
                continue;
            }
            if !self.is_unique(cell, rng) {
                continue;
            }
            let state = &mut self.cells[cell.as_index()];
            state.digit = None;
            state.fixed = false;
            n_blanked += 1;
        }
        n_blanked
    }

    /// Checks whether the puzzle's solution stays unique when this cell is
    /// blanked.
    ///
    /// For every other digit the cell could hold, a copy of the board is
    /// solved with that digit forced in. Any completed copy is a second
    /// solution, so the removal would not be unique. Returns `false` for
    /// empty cells.
    pub fn is_unique(&self, cell: Cell, rng: &mut impl Rng) -> bool {
        let current = match self.digit(cell) {
            Some(digit) => digit,
            None => return false,
        };
        let mut alternatives = self.candidates(cell);
        alternatives.remove(current);

        for digit in alternatives {
            let mut trial = self.clone();
            trial.cells[cell.as_index()].digit = Some(digit);
            if trial.solve(rng) {
                return false;
            }
        }
        true
    }

    /// Generates a fresh puzzle: solves an empty board to a random full
    /// grid, then conceals cells according to `difficulty`.
    ///
    /// The solution is recorded, so [`Board::solution`] and
    /// [`Board::is_complete`] work right away. All randomness comes from
    /// `rng`; seeding it reproduces the game.
    pub fn new_game(difficulty: Difficulty, rng: &mut impl Rng) -> Board {
        let mut board = Board::new();
        let solved = board.solve(rng);
        debug_assert!(solved);
        board.conceal(difficulty.conceal_count(), rng);
        board
    }
}
