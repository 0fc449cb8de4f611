//! Cell positions and the peer topology of the grid

use crate::consts::*;

/// A cell of the board, counted in reading order from `0` to `80`.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Constructs a new `Cell`.
    pub fn new(num: u8) -> Self {
        debug_assert!(num < 81);
        Cell(num)
    }

    /// Constructs a new `Cell`. Returns `None`, if the number is not below `81`.
    pub fn new_checked(num: u8) -> Option<Self> {
        if num < 81 {
            Some(Cell(num))
        } else {
            None
        }
    }

    /// Constructs the `Cell` at the given row and column, both counted from `0`.
    pub fn from_coords(row: u8, col: u8) -> Self {
        debug_assert!(row < 9 && col < 9);
        Cell(row * 9 + col)
    }

    /// Returns the cell number contained within.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the cell number as `usize`.
    pub fn as_index(self) -> usize {
        self.0 as _
    }

    /// Returns an iterator over all cells in reading order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Cell::new)
    }

    /// Row index from `0..=8`, topmost row is `0`.
    #[inline(always)]
    pub fn row(self) -> u8 {
        self.0 / 9
    }

    /// Column index from `0..=8`, leftmost col is `0`.
    #[inline(always)]
    pub fn col(self) -> u8 {
        self.0 % 9
    }

    /// Block index from `0..=8`, numbering from left to right, top to bottom.
    #[inline(always)]
    pub fn block(self) -> u8 {
        BLOCK[self.as_index()]
    }

    /// Returns an iterator over the 20 cells that share a row, column or block
    /// with this cell.
    #[inline(always)]
    pub fn peers(self) -> impl Iterator<Item = Cell> {
        PEERS_OF_CELL[self.as_index()].iter().cloned().map(Cell::new)
    }
}

#[cfg_attr(rustfmt, rustfmt_skip)]
static BLOCK: [u8; N_CELLS] = [
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
];

// list of cells that share a row, col or block for a given cell
// column partners first, then row partners, then the 4 remaining block cells
static PEERS_OF_CELL: [[u8; N_PEERS]; N_CELLS] = peer_table();

const fn peer_table() -> [[u8; N_PEERS]; N_CELLS] {
    let mut peers = [[0; N_PEERS]; N_CELLS];

    let mut cell = 0;
    while cell < N_CELLS {
        let row = (cell / 9) as u8;
        let col = (cell % 9) as u8;
        let mut n = 0;

        // cells in the same column, top to bottom
        let mut other_row = 0;
        while other_row < 9 {
            if other_row != row {
                peers[cell][n] = other_row * 9 + col;
                n += 1;
            }
            other_row += 1;
        }

        // cells in the same row, left to right
        let mut other_col = 0;
        while other_col < 9 {
            if other_col != col {
                peers[cell][n] = row * 9 + other_col;
                n += 1;
            }
            other_col += 1;
        }

        // cells of the block sharing neither row nor column
        let first_row = row / 3 * 3;
        let first_col = col / 3 * 3;
        let mut block_row = first_row;
        while block_row < first_row + 3 {
            let mut block_col = first_col;
            while block_col < first_col + 3 {
                if block_row != row && block_col != col {
                    peers[cell][n] = block_row * 9 + block_col;
                    n += 1;
                }
                block_col += 1;
            }
            block_row += 1;
        }

        cell += 1;
    }
    peers
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn coords_roundtrip() {
        for cell in Cell::all() {
            assert_eq!(Cell::from_coords(cell.row(), cell.col()), cell);
            assert_eq!(cell.block(), cell.row() / 3 * 3 + cell.col() / 3);
        }
        assert!(Cell::new_checked(81).is_none());
    }

    #[test]
    fn twenty_peers_without_self() {
        for cell in Cell::all() {
            assert_eq!(cell.peers().count(), 20);
            assert!(cell.peers().all(|peer| peer != cell));
        }
    }

    #[test]
    fn peers_share_a_house() {
        for cell in Cell::all() {
            for peer in cell.peers() {
                assert!(
                    peer.row() == cell.row()
                        || peer.col() == cell.col()
                        || peer.block() == cell.block()
                );
            }
        }
    }

    #[test]
    fn peer_relation_is_symmetric() {
        for cell in Cell::all() {
            for peer in cell.peers() {
                assert!(
                    peer.peers().any(|other| other == cell),
                    "cell {} lists {} but not vice versa",
                    cell.get(),
                    peer.get()
                );
            }
        }
    }

    #[test]
    fn peer_order_by_construction() {
        // column partners, then row partners, then the block corners
        let peers = Cell::new(40).peers().map(Cell::get).collect::<Vec<_>>();
        assert_eq!(
            peers,
            [4, 13, 22, 31, 49, 58, 67, 76, 36, 37, 38, 39, 41, 42, 43, 44, 30, 32, 48, 50]
        );
    }
}
