//! Move legality, turn alternation, and king-capture win detection for a
//! casual chess variant played until one side's king is taken off the board.
//!
//! Rendering, input capture, and restart flows live with the caller: the
//! engine is handed a move request (origin and destination squares) against
//! its board and answers with a verdict and the updated state.

pub mod board;
pub mod coord;
pub mod game;
pub mod pieces;
pub mod rules;
