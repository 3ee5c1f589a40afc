//! Canonical chess-rule constants.
//!
//! Fixed squares and ranks that the generator, oracle and evaluator agree on.

use crate::game_state::chess_types::{Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const RANK_2: u64 = 0x0000_0000_0000_FF00;
pub const RANK_7: u64 = 0x00FF_0000_0000_0000;

/// Rank a pawn may double-push from.
#[inline]
pub const fn pawn_start_rank(color: Color) -> u64 {
    match color {
        Color::White => RANK_2,
        Color::Black => RANK_7,
    }
}

/// Squares a king occupies after castling: g1/c1 for White, g8/c8 for Black.
#[inline]
pub const fn castled_king_squares(color: Color) -> [Square; 2] {
    match color {
        Color::White => [6, 2],
        Color::Black => [62, 58],
    }
}
