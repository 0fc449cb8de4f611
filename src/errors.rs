//! Errors for cell writes and the various conversion and parsing modes

use crate::positions::Cell;
#[cfg(doc)]
use crate::{Board, Difficulty, Grid};

/// Error for [`Board::enter`]. The board is left untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum InvalidWrite {
    /// The cell is one of the puzzle's givens
    #[error("cell holds a given of the puzzle")]
    Fixed,
    /// The cell already holds an entry
    #[error("cell already holds an entry")]
    Occupied,
}

/// Error for [`Grid::from_bytes`]
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("byte array contains entries >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Grid::from_bytes_slice`]
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FromBytesSliceError {
    /// Slice is not 81 long
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// Slice contains invalid entries
    #[error(transparent)]
    FromBytesError(FromBytesError),
}

/// An invalid cell entry encountered during parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidEntry {
    /// Cell number goes from 0..=80, 0..=8 for first line, 9..=17 for 2nd and so on
    pub cell: u8,
    /// The parsed invalid char
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        Cell::new(self.cell).row()
    }
    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        Cell::new(self.cell).col()
    }
    /// Block index from 0..=8, numbering from left to right, top to bottom
    #[inline]
    pub fn block(self) -> u8 {
        Cell::new(self.cell).block()
    }
}

/// Error for [`Grid::from_str_line`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LineParseError {
    /// Accepted values are numbers 1...9 and '0', '.' or '_' for empty cells
    #[error("cell {} contains invalid character '{}'", .0.cell, .0.ch)]
    InvalidEntry(InvalidEntry),
    /// Contains the number of cells supplied
    #[error("grid contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// Returned if >=82 valid cell positions are supplied
    #[error("grid contains more than 81 cells or is missing the comment delimiter")]
    TooManyCells,
    /// Comments must be delimited by a space or tab
    #[error("missing comment delimiter")]
    MissingCommentDelimiter,
}

/// Error for parsing a [`Difficulty`] from a string
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty: {0}")]
pub struct ParseDifficultyError(pub(crate) String);
