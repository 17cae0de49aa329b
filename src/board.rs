use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::{Square, BOARD_SIZE};
use crate::pieces::{Color, Piece, PieceKind};

const SIZE: usize = BOARD_SIZE as usize;

/// Back-rank piece order, left to right from white's point of view.
const BACK_RANK: [PieceKind; SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 grid, each square empty or holding exactly one piece.
///
/// The board never validates moves itself; legality lives in
/// [`crate::rules`] and turn bookkeeping in [`crate::game`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; SIZE]; SIZE],
}

impl Board {
    /// A board with no pieces on it.
    pub fn empty() -> Board {
        Board {
            squares: [[None; SIZE]; SIZE],
        }
    }

    /// The standard initial layout: rows 0-1 black, rows 6-7 white.
    pub fn new() -> Board {
        let mut board = Board::empty();
        for col in 0..SIZE {
            board.squares[0][col] = Some(Piece::new(Color::Black, BACK_RANK[col]));
            board.squares[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.squares[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.squares[7][col] = Some(Piece::new(Color::White, BACK_RANK[col]));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// The color of the piece on `sq`, or `None` for an empty square.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    /// Place `piece` on `sq` (or clear it with `None`), replacing whatever
    /// was there. Intended for setting up positions.
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// Move whatever sits on `from` to `to`, unconditionally.
    ///
    /// The destination is overwritten, which is how captures happen; the
    /// origin is cleared. No legality check is performed here — callers
    /// are expected to have passed the move through
    /// [`crate::rules::is_legal_move`] first.
    pub fn apply_move(&mut self, from: Square, to: Square) {
        self.squares[to.row() as usize][to.col() as usize] =
            self.squares[from.row() as usize][from.col() as usize];
        self.squares[from.row() as usize][from.col() as usize] = None;
    }

    /// Whether a king of the given color is anywhere on the board.
    pub fn has_king(&self, color: Color) -> bool {
        self.squares
            .iter()
            .flatten()
            .flatten()
            .any(|p| p.kind == PieceKind::King && p.color == color)
    }

    /// All occupied squares with their pieces, row-major.
    pub fn iter_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, rank)| {
            rank.iter().enumerate().filter_map(move |(col, sq)| {
                sq.map(|p| (Square::new_unchecked(row as u8, col as u8), p))
            })
        })
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in &self.squares {
            let mut line = String::with_capacity(2 * SIZE);
            for (col, sq) in rank.iter().enumerate() {
                if col > 0 {
                    line.push(' ');
                }
                line.push(match sq {
                    Some(piece) => piece.letter(),
                    None => '.',
                });
            }
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
