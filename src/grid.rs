use std::{fmt, ops, str};

use crate::bitset::DigitSet;
use crate::consts::*;
use crate::digit::Digit;
use crate::errors::{FromBytesError, FromBytesSliceError, InvalidEntry, LineParseError};
use crate::positions::Cell;

/// The values of all 81 cells, with `0` marking an empty cell.
///
/// A `Grid` is a plain value snapshot, it carries no information about
/// which cells are givens. It is the type crossing the API boundary:
/// recorded solutions, exported puzzles and parsed input all use it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grid(pub(crate) [u8; N_CELLS]);

impl Grid {
    /// Creates a grid from a byte array. Empty cells are denoted by 0, clues by 1..=9.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Grid, FromBytesError> {
        match bytes.iter().all(|&byte| byte <= 9) {
            true => Ok(Grid(bytes)),
            false => Err(FromBytesError(())),
        }
    }

    /// Creates a grid from a byte slice. The slice must be 81 long.
    /// Empty cells are denoted by 0, clues by 1..=9.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Grid, FromBytesSliceError> {
        if bytes.len() != N_CELLS {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut array = [0; N_CELLS];
        array.copy_from_slice(bytes);
        Grid::from_bytes(array).map_err(FromBytesSliceError::FromBytesError)
    }

    /// Returns the underlying byte array. Empty cells are denoted by 0, clues by 1..=9.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Reads a grid in line format, i.e. all 81 cells in reading order on
    /// one line with `_`, `.` and `0` all accepted for empty cells.
    /// Everything after a whitespace-delimited 81st cell is ignored.
    pub fn from_str_line(s: &str) -> Result<Grid, LineParseError> {
        let mut grid = [0; N_CELLS];
        let mut n_cells = 0_u8;
        for ch in s.chars() {
            if n_cells == 81 {
                return match ch {
                    ' ' | '\t' | '\r' | '\n' => Ok(Grid(grid)),
                    '1'..='9' | '0' | '.' | '_' => Err(LineParseError::TooManyCells),
                    _ => Err(LineParseError::MissingCommentDelimiter),
                };
            }
            match ch {
                '1'..='9' => grid[n_cells as usize] = ch as u8 - b'0',
                '0' | '.' | '_' => {}
                _ => {
                    return Err(LineParseError::InvalidEntry(InvalidEntry {
                        cell: n_cells,
                        ch,
                    }))
                }
            }
            n_cells += 1;
        }
        if n_cells < 81 {
            return Err(LineParseError::NotEnoughCells(n_cells));
        }
        Ok(Grid(grid))
    }

    /// Returns the line format of this grid, with `.` for empty cells.
    pub fn to_str_line(&self) -> LineString {
        let mut chars = [0; N_CELLS];
        for (ch, &num) in chars.iter_mut().zip(self.0.iter()) {
            *ch = match num {
                0 => b'.',
                num => num + b'0',
            };
        }
        LineString(chars)
    }

    /// Returns the digit in the given cell, `None` for an empty cell.
    pub fn digit(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    /// Returns an iterator over all cell values in reading order.
    pub fn iter(&self) -> impl Iterator<Item = Option<Digit>> + '_ {
        self.0.iter().map(|&num| Digit::new_checked(num))
    }

    /// Returns the number of filled cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&num| num != 0).count() as u8
    }

    /// Checks that the grid is full and that every row, column and block
    /// contains each digit exactly once.
    pub fn is_solved(&self) -> bool {
        for house in 0..9 {
            let mut row_digits = DigitSet::NONE;
            let mut col_digits = DigitSet::NONE;
            let mut block_digits = DigitSet::NONE;
            for pos in 0..9 {
                if let Some(digit) = Digit::new_checked(self.0[house * 9 + pos]) {
                    row_digits.insert(digit);
                }
                if let Some(digit) = Digit::new_checked(self.0[pos * 9 + house]) {
                    col_digits.insert(digit);
                }
                let block_cell = house / 3 * 27 + house % 3 * 3 + pos / 3 * 9 + pos % 3;
                if let Some(digit) = Digit::new_checked(self.0[block_cell]) {
                    block_digits.insert(digit);
                }
            }
            if row_digits != DigitSet::ALL
                || col_digits != DigitSet::ALL
                || block_digits != DigitSet::ALL
            {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (cell, &num) in self.0.iter().enumerate() {
            match (cell / 9, cell % 9) {
                (0, 0) => {}
                (_, 3) | (_, 6) => write!(f, " ")?, // separate stacks in a line
                (3, 0) | (6, 0) => write!(f, "\n\n")?, // separate bands
                (_, 0) => writeln!(f)?,
                _ => {}
            }
            match num {
                0 => f.write_str("_")?,
                _ => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str_line())
    }
}

/// The line format of a [`Grid`]. Derefs into a `&str`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct LineString([u8; N_CELLS]);

impl ops::Deref for LineString {
    type Target = str;

    fn deref(&self) -> &str {
        // the buffer only ever holds ascii digits and '.'
        str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self)
    }
}

impl fmt::Debug for LineString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Grid;
    use serde::de::{self, Deserializer, Visitor};
    use serde::{Deserialize, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Grid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.to_str_line())
            } else {
                serializer.serialize_bytes(&self.to_bytes())
            }
        }
    }

    struct GridVisitor;

    impl<'de> Visitor<'de> for GridVisitor {
        type Value = Grid;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a grid in line format or as 81 raw bytes")
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<Grid, E> {
            Grid::from_str_line(s).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, bytes: &[u8]) -> Result<Grid, E> {
            Grid::from_bytes_slice(bytes).map_err(de::Error::custom)
        }
    }

    impl<'de> Deserialize<'de> for Grid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Grid, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(GridVisitor)
            } else {
                deserializer.deserialize_bytes(GridVisitor)
            }
        }
    }
}
