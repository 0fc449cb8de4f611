//! Randomized exhaustive search
//!
//! Puzzle generation wants a *random* full grid, so candidate digits are
//! tried in uniformly random order instead of lowest-first. The search
//! walks the cells in reading order and keeps its own stack of trial
//! frames rather than recursing, one frame per writable cell.

use rand::Rng;

use crate::bitset::DigitSet;
use crate::board::Board;
use crate::consts::N_CELLS;
use crate::positions::Cell;

// One level of the search: the writable cell under trial and the
// candidates not yet tried there. Candidates are computed once per
// descent into the cell and consumed across retries.
#[derive(Copy, Clone, Debug)]
struct Frame {
    cell: Cell,
    remaining: DigitSet,
}

impl Board {
    /// Fills the board with a complete valid grid, backtracking on dead
    /// ends. Fixed cells are never reassigned and act as constraints.
    /// Every other cell is rewritten as the search passes over it, so
    /// entries do not constrain the solution.
    ///
    /// Candidates are tried in uniformly random order, so solving an empty
    /// board with a fresh `rng` yields a random full grid. Pass a seeded
    /// rng to make the search reproducible.
    ///
    /// Returns `true` once a full grid is reached; the grid is then
    /// recorded and available via [`Board::solution`]. Returns `false` if
    /// the search space is exhausted, in which case every writable cell
    /// the search stepped into has been blanked.
    pub fn solve(&mut self, rng: &mut impl Rng) -> bool {
        let mut stack: Vec<Frame> = Vec::with_capacity(N_CELLS);
        let mut depth = 0;

        loop {
            while depth < N_CELLS && self.cells[depth].fixed {
                depth += 1;
            }
            if depth == N_CELLS {
                self.master = Some(self.to_grid());
                return true;
            }

            let cell = Cell::new(depth as u8);
            let mut frame = Frame {
                cell,
                remaining: self.candidates(cell),
            };

            // pick an untried candidate for the current frame, or unwind
            // to the closest frame that still has one
            loop {
                if frame.remaining.is_empty() {
                    self.cells[frame.cell.as_index()].digit = None;
                    frame = match stack.pop() {
                        Some(frame) => frame,
                        None => return false,
                    };
                    continue;
                }

                let choice = rng.gen_range(0..frame.remaining.len());
                let digit = frame.remaining.into_iter().nth(choice as usize).unwrap();
                frame.remaining.remove(digit);

                self.cells[frame.cell.as_index()].digit = Some(digit);
                depth = frame.cell.as_index() + 1;
                stack.push(frame);
                break;
            }
        }
    }
}
