use serde::{Deserialize, Serialize};

/// Number of ranks and files on the board.
pub const BOARD_SIZE: u8 = 8;

/// One of the 64 board squares, identified by (row, column).
///
/// Row 0 is the far rank (black's back rank), row 7 the near rank
/// (white's back rank), matching the initial-setup convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Returns `None` unless both coordinates are in `0..8`.
    pub fn new(row: u8, col: u8) -> Option<Square> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Square { row, col })
    }

    /// Construct without the range check. Callers guarantee both
    /// coordinates are in `0..8`.
    pub(crate) fn new_unchecked(row: u8, col: u8) -> Square {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Square { row, col }
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    /// Signed displacement `to - self`.
    #[inline]
    pub fn delta_to(self, to: Square) -> Delta {
        Delta {
            d_row: to.row as i8 - self.row as i8,
            d_col: to.col as i8 - self.col as i8,
        }
    }

    /// The square at `self + d`, or `None` if it falls off the board.
    pub fn offset(self, d: Delta) -> Option<Square> {
        let row = self.row as i8 + d.d_row;
        let col = self.col as i8 + d.d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }
}

/// Signed (row, column) displacement between two squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    pub d_row: i8,
    pub d_col: i8,
}

impl Delta {
    #[inline]
    pub fn abs_row(self) -> i8 {
        self.d_row.abs()
    }

    #[inline]
    pub fn abs_col(self) -> i8 {
        self.d_col.abs()
    }

    /// Chebyshev distance covered by this displacement.
    #[inline]
    pub fn chebyshev(self) -> i8 {
        self.abs_row().max(self.abs_col())
    }

    /// True for a pure rank or file displacement (rook-like).
    #[inline]
    pub fn is_straight(self) -> bool {
        (self.d_row == 0) != (self.d_col == 0)
    }

    /// True for a pure diagonal displacement (bishop-like).
    #[inline]
    pub fn is_diagonal(self) -> bool {
        self.d_row != 0 && self.abs_row() == self.abs_col()
    }

    /// The unit step (per-axis signum) pointing along this displacement.
    #[inline]
    pub fn unit_step(self) -> Delta {
        Delta {
            d_row: self.d_row.signum(),
            d_col: self.d_col.signum(),
        }
    }
}
