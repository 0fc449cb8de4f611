use crate::bitset::DigitSet;
use crate::consts::N_CELLS;
use crate::digit::Digit;
use crate::errors::InvalidWrite;
use crate::grid::Grid;
use crate::positions::Cell;

/// The state of a single cell: its digit, if any, and whether the digit
/// is one of the puzzle's givens.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug, Hash)]
pub struct CellState {
    pub(crate) digit: Option<Digit>,
    pub(crate) fixed: bool,
}

impl CellState {
    /// Returns the digit held in the cell, `None` for an empty cell.
    pub fn digit(self) -> Option<Digit> {
        self.digit
    }

    /// Checks whether the cell holds a given of the puzzle.
    ///
    /// Fixed cells reject writes and are never blanked by the generator.
    pub fn is_fixed(self) -> bool {
        self.fixed
    }
}

/// The main structure exposing all the functionality of the library.
///
/// A `Board` owns the 81 [`CellState`]s in reading order together with the
/// solution recorded by the last successful [`solve`](Board::solve). The
/// peer topology is shared by all boards, so cloning a board for a trial
/// solve only copies the cell array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [CellState; N_CELLS],
    pub(crate) master: Option<Grid>,
}

impl Board {
    /// Creates an empty board. Every cell is open for entry.
    pub fn new() -> Board {
        Board {
            cells: [CellState::default(); N_CELLS],
            master: None,
        }
    }

    /// Creates a board from a grid of clues. Every filled cell of the grid
    /// becomes a given of the puzzle.
    pub fn from_grid(grid: &Grid) -> Board {
        let mut board = Board::new();
        for (state, digit) in board.cells.iter_mut().zip(grid.iter()) {
            if digit.is_some() {
                *state = CellState { digit, fixed: true };
            }
        }
        board
    }

    /// Returns the state of the given cell.
    pub fn cell(&self, cell: Cell) -> CellState {
        self.cells[cell.as_index()]
    }

    /// Returns the digit held in the given cell, `None` for an empty cell.
    pub fn digit(&self, cell: Cell) -> Option<Digit> {
        self.cells[cell.as_index()].digit
    }

    /// Checks whether the given cell holds a given of the puzzle.
    pub fn is_fixed(&self, cell: Cell) -> bool {
        self.cells[cell.as_index()].fixed
    }

    /// Returns the digits the given cell could hold without colliding with
    /// any of its 20 peers.
    ///
    /// The set is recomputed from the current peer values on every call.
    /// It is a point-in-time answer, not a live view: entering or blanking
    /// a peer digit afterwards invalidates it. The cell's own digit is not
    /// excluded.
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        let mut candidates = DigitSet::ALL;
        for peer in cell.peers() {
            if let Some(digit) = self.digit(peer) {
                candidates.remove(digit);
            }
        }
        candidates
    }

    /// Enters a digit into an empty, writable cell.
    ///
    /// Writes to fixed cells are rejected with [`InvalidWrite::Fixed`],
    /// writes to cells already holding a digit with
    /// [`InvalidWrite::Occupied`]. The digit does not have to be a current
    /// candidate of the cell; colliding entries are allowed and simply
    /// never pass [`is_complete`](Board::is_complete).
    pub fn enter(&mut self, cell: Cell, digit: Digit) -> Result<(), InvalidWrite> {
        let state = &mut self.cells[cell.as_index()];
        if state.fixed {
            return Err(InvalidWrite::Fixed);
        }
        if state.digit.is_some() {
            return Err(InvalidWrite::Occupied);
        }
        state.digit = Some(digit);
        Ok(())
    }

    /// Blanks every cell that is not fixed, resetting the board to the
    /// bare puzzle.
    pub fn clear_entries(&mut self) {
        for state in self.cells.iter_mut() {
            if !state.fixed {
                state.digit = None;
            }
        }
    }

    /// Flattens the current cell values into a [`Grid`].
    pub fn to_grid(&self) -> Grid {
        let mut bytes = [0; N_CELLS];
        for (byte, state) in bytes.iter_mut().zip(self.cells.iter()) {
            if let Some(digit) = state.digit {
                *byte = digit.get();
            }
        }
        Grid(bytes)
    }

    /// Returns the givens of the puzzle as a [`Grid`], with every
    /// non-fixed cell blank. This is the shareable form of the puzzle.
    pub fn givens(&self) -> Grid {
        let mut bytes = [0; N_CELLS];
        for (byte, state) in bytes.iter_mut().zip(self.cells.iter()) {
            if let (Some(digit), true) = (state.digit, state.fixed) {
                *byte = digit.get();
            }
        }
        Grid(bytes)
    }

    /// Returns the number of fixed cells.
    pub fn n_givens(&self) -> u8 {
        self.cells.iter().filter(|state| state.fixed).count() as u8
    }

    /// Checks whether the current cell values equal the recorded solution.
    ///
    /// Always `false` before the first successful [`solve`](Board::solve).
    pub fn is_complete(&self) -> bool {
        match self.master {
            Some(master) => self.to_grid() == master,
            None => false,
        }
    }

    /// Returns the solution recorded by the last successful
    /// [`solve`](Board::solve), if any.
    ///
    /// The recorded solution is unaffected by entries made afterwards, so
    /// repeated calls without an intervening solve return the same grid.
    pub fn solution(&self) -> Option<Grid> {
        self.master
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}
