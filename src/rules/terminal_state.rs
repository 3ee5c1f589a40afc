//! Terminal-state classification for the side to move.

use std::fmt;

use crate::errors::RulesResult;
use crate::game_state::chess_rules::castled_king_squares;
use crate::game_state::{chess_types::Color, position::Position};
use crate::rules::check_detection::is_in_check;
use crate::rules::legal_moves::legal_moves;

/// Status of the side to move, derived from one legal-move generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
    InsufficientMaterial,
}

impl GameStatus {
    /// Stalemate or bare kings.
    #[inline]
    pub const fn is_draw(self) -> bool {
        matches!(self, GameStatus::Stalemate | GameStatus::InsufficientMaterial)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::InsufficientMaterial => "insufficient material",
        };
        f.write_str(text)
    }
}

/// Classify the side to move. Having no legal move takes priority over the
/// material test, so a mated or stalemated king is reported as such even
/// when little material is left.
pub fn game_status(position: &Position) -> RulesResult<GameStatus> {
    let side = position.side_to_move();
    let in_check = is_in_check(position, side)?;
    let no_moves = legal_moves(position)?.is_empty();

    let status = match (in_check, no_moves) {
        (true, true) => GameStatus::Checkmate,
        (false, true) => GameStatus::Stalemate,
        _ if is_insufficient_material(position) => GameStatus::InsufficientMaterial,
        (true, false) => GameStatus::Check,
        (false, false) => GameStatus::Ongoing,
    };

    Ok(status)
}

pub fn is_checkmate(position: &Position) -> RulesResult<bool> {
    Ok(game_status(position)? == GameStatus::Checkmate)
}

pub fn is_stalemate(position: &Position) -> RulesResult<bool> {
    Ok(game_status(position)? == GameStatus::Stalemate)
}

/// Neither side holds a non-king piece.
#[inline]
pub fn is_insufficient_material(position: &Position) -> bool {
    position.non_king_count() == 0
}

pub fn is_draw(position: &Position) -> RulesResult<bool> {
    if is_insufficient_material(position) {
        return Ok(true);
    }
    Ok(game_status(position)?.is_draw())
}

/// Positional proxy: `color`'s king stands on its g- or c-file castled square.
pub fn is_castled(position: &Position, color: Color) -> bool {
    let kings = position.kings(color);
    castled_king_squares(color)
        .iter()
        .any(|&sq| kings & (1u64 << sq) != 0)
}
