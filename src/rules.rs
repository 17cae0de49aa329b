//! Movement legality: one geometry rule per piece kind, plus the shared
//! path-clearance walk used by the sliding pieces.

use crate::board::Board;
use crate::coord::{Delta, Square};
use crate::pieces::{Piece, PieceKind};

/// Legality verdict for moving `piece` from `from` to `to` on `board`.
///
/// Pure: the board is never mutated and nothing is assumed about whose
/// turn it is. A destination holding a piece of the mover's own color is
/// illegal for every kind, before any geometry is considered.
///
/// Deliberate scope limits of the ruleset: there is no check safety (a
/// move may leave one's own king capturable), and a pawn's two-square
/// advance does not require the skipped square to be empty.
pub fn is_legal_move(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    if from == to {
        return false;
    }
    if board.color_at(to) == Some(piece.color) {
        return false;
    }

    let d = from.delta_to(to);
    match piece.kind {
        PieceKind::Knight => is_knight_jump(d),
        PieceKind::Pawn => is_pawn_move(piece, from, to, d, board),
        PieceKind::Rook => d.is_straight() && is_path_clear(from, to, board),
        PieceKind::Bishop => d.is_diagonal() && is_path_clear(from, to, board),
        PieceKind::Queen => {
            (d.is_straight() || d.is_diagonal()) && is_path_clear(from, to, board)
        }
        PieceKind::King => d.chebyshev() <= 1,
    }
}

/// Whether every square strictly between `from` and `to` is empty.
///
/// Walks one unit step per axis (signum) from `from` toward `to`; used by
/// rook, bishop, and queen moves but never by knights (which jump), pawns,
/// or kings (which only move one square). Squares that are not aligned on
/// a rank, file, or diagonal never meet, so the walk runs off the board
/// and reports `false`.
pub fn is_path_clear(from: Square, to: Square, board: &Board) -> bool {
    let step = from.delta_to(to).unit_step();
    let mut cur = from;
    while let Some(next) = cur.offset(step) {
        if next == to {
            return true;
        }
        if board.piece_at(next).is_some() {
            return false;
        }
        cur = next;
    }
    false
}

#[inline]
fn is_knight_jump(d: Delta) -> bool {
    (d.abs_row() == 2 && d.abs_col() == 1) || (d.abs_row() == 1 && d.abs_col() == 2)
}

fn is_pawn_move(piece: Piece, from: Square, to: Square, d: Delta, board: &Board) -> bool {
    let dir = piece.color.pawn_dir();
    let dest_occupied = board.piece_at(to).is_some();

    // Single advance onto an empty square.
    if d.d_col == 0 && d.d_row == dir && !dest_occupied {
        return true;
    }
    // Double advance from the start row onto an empty square. The square
    // being jumped over is not inspected.
    if d.d_col == 0
        && d.d_row == 2 * dir
        && from.row() == piece.color.pawn_start_row()
        && !dest_occupied
    {
        return true;
    }
    // Diagonal capture: one column over, one row forward, onto an occupied
    // square. Same-color occupants were already rejected above.
    if d.abs_col() == 1 && d.d_row == dir && dest_occupied {
        return true;
    }
    false
}
