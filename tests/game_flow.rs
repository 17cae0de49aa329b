use pretty_assertions::assert_eq;

use capture_chess::board::Board;
use capture_chess::coord::Square;
use capture_chess::game::{Game, MoveError, Outcome};
use capture_chess::pieces::{Color, Piece, PieceKind};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

#[test]
fn opening_pawn_advance_updates_board_and_flips_turn() {
    let mut game = Game::new();
    assert_eq!(game.try_move(sq(6, 4), sq(4, 4)), Ok(Outcome::InProgress));
    assert_eq!(game.board().piece_at(sq(6, 4)), None);
    assert_eq!(
        game.board().piece_at(sq(4, 4)),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(game.to_move(), Color::Black);
}

#[test]
fn blocked_rook_from_the_initial_position_is_rejected() {
    let mut game = Game::new();
    assert_eq!(game.try_move(sq(7, 0), sq(5, 0)), Err(MoveError::IllegalMove));
    assert_eq!(game, Game::new());
}

#[test]
fn turns_strictly_alternate() {
    let mut game = Game::new();
    game.try_move(sq(6, 4), sq(4, 4)).unwrap();
    assert_eq!(game.to_move(), Color::Black);
    game.try_move(sq(1, 4), sq(3, 4)).unwrap();
    assert_eq!(game.to_move(), Color::White);
    game.try_move(sq(7, 6), sq(5, 5)).unwrap();
    assert_eq!(game.to_move(), Color::Black);
}

#[test]
fn moving_out_of_turn_is_rejected() {
    let mut game = Game::new();
    assert_eq!(
        game.try_move(sq(1, 4), sq(2, 4)),
        Err(MoveError::NotYourTurn(Color::White))
    );
    assert_eq!(game.to_move(), Color::White);
}

#[test]
fn moving_from_an_empty_square_is_rejected() {
    let mut game = Game::new();
    assert_eq!(game.try_move(sq(4, 4), sq(3, 4)), Err(MoveError::EmptyOrigin));
}

#[test]
fn capturing_the_king_ends_the_game_and_freezes_the_turn() {
    let mut board = Board::empty();
    board.set(sq(7, 4), Some(Piece::new(Color::White, PieceKind::King)));
    board.set(sq(4, 0), Some(Piece::new(Color::White, PieceKind::Queen)));
    board.set(sq(4, 7), Some(Piece::new(Color::Black, PieceKind::King)));
    let mut game = Game::from_position(board, Color::White);
    assert_eq!(game.outcome(), Outcome::InProgress);

    assert_eq!(
        game.try_move(sq(4, 0), sq(4, 7)),
        Ok(Outcome::WonBy(Color::White))
    );
    assert_eq!(game.outcome(), Outcome::WonBy(Color::White));
    // The turn does not flip once the game is decided.
    assert_eq!(game.to_move(), Color::White);
    assert_eq!(game.try_move(sq(4, 7), sq(4, 0)), Err(MoveError::GameOver));
}

#[test]
fn a_rejected_move_leaves_the_session_unchanged() {
    let mut game = Game::new();
    let before = game.clone();
    // Queen through its own pawn.
    assert_eq!(game.try_move(sq(7, 3), sq(4, 0)), Err(MoveError::IllegalMove));
    assert_eq!(game, before);
}

#[test]
fn from_position_recognizes_an_already_decided_board() {
    let mut board = Board::empty();
    board.set(sq(7, 4), Some(Piece::new(Color::White, PieceKind::King)));
    board.set(sq(0, 0), Some(Piece::new(Color::Black, PieceKind::Rook)));
    let mut game = Game::from_position(board, Color::Black);

    assert_eq!(game.outcome(), Outcome::WonBy(Color::White));
    assert_eq!(game.try_move(sq(0, 0), sq(0, 7)), Err(MoveError::GameOver));
}
