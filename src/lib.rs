#![warn(missing_docs)]
//! The Sudoku game library
//!
//! ## Overview
//!
//! Sudoku-game generates sudoku puzzles with a unique solution and tracks
//! play on them. A [`Board`] knows which cells are fixed givens, which
//! digits the player has entered and what the recorded solution looks
//! like. Full grids without play state are handled by [`Grid`].
//!
//! ## Example
//!
//! ```
//! use sudoku_game::{Board, Cell, Difficulty};
//!
//! let mut rng = rand::thread_rng();
//! let mut board = Board::new_game(Difficulty::Easy, &mut rng);
//!
//! // the solution was recorded during generation
//! let solution = board.solution().unwrap();
//!
//! // fill in the blanks; givens are fixed and stay untouched
//! for cell in Cell::all() {
//!     if board.digit(cell).is_none() {
//!         board.enter(cell, solution.digit(cell).unwrap()).unwrap();
//!     }
//! }
//!
//! assert!(board.is_complete());
//! assert!(board.to_grid().is_solved());
//! ```

mod consts;
mod digit;
mod bitset;
mod positions;
mod grid;
mod board;
mod solver;
mod generator;

pub mod errors;

pub use crate::bitset::DigitSet;
pub use crate::board::{Board, CellState};
pub use crate::digit::Digit;
pub use crate::generator::Difficulty;
pub use crate::grid::{Grid, LineString};
pub use crate::positions::Cell;
