//! Legal leaf-node counting for generator validation.
//!
//! Counts cover the implemented move set only (no castling, en-passant or
//! promotion), which matches standard figures from the start position up to
//! depth 3.

use crate::errors::RulesResult;
use crate::game_state::{chess_types::Move, position::Position};
use crate::rules::legal_moves::legal_moves;

pub fn perft(position: &Position, depth: u8) -> RulesResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = legal_moves(position)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in moves {
        nodes += perft(&position.apply_move(mv), depth - 1)?;
    }
    Ok(nodes)
}

/// Per-root-move counts, in generation order.
pub fn perft_divide(position: &Position, depth: u8) -> RulesResult<Vec<(Move, u64)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    legal_moves(position)?
        .into_iter()
        .map(|mv| Ok((mv, perft(&position.apply_move(mv), depth - 1)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide};
    use crate::game_state::position::Position;

    #[test]
    fn perft_start_position_depth_1_to_3() {
        let pos = Position::starting();
        assert_eq!(perft(&pos, 1), Ok(20));
        assert_eq!(perft(&pos, 2), Ok(400));
        assert_eq!(perft(&pos, 3), Ok(8_902));
    }

    #[test]
    fn divide_sums_to_perft() {
        let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").expect("FEN parse");
        let divided = perft_divide(&pos, 2).expect("kings present");
        let total: u64 = divided.iter().map(|(_, n)| n).sum();

        assert_eq!(Ok(total), perft(&pos, 2));
        assert_eq!(divided.len() as u64, perft(&pos, 1).expect("kings present"));
    }
}
