//! Capture-first move ordering (most valuable victim, least valuable attacker).

use crate::game_state::{chess_types::*, position::Position};

/// Ordering weights; independent of the evaluation material scale.
const fn ordering_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20_000,
    }
}

/// `victim * 10 - attacker` for captures, 0 for quiet moves.
pub fn mvv_lva_score(position: &Position, mv: Move) -> i32 {
    let Some((_, victim)) = position.piece_at(mv.to) else {
        return 0;
    };
    let attacker = position
        .piece_at(mv.from)
        .map_or(0, |(_, kind)| ordering_value(kind));
    ordering_value(victim) * 10 - attacker
}

/// Stable sort, highest score first. Quiet moves keep generation order.
pub fn order_captures_first(position: &Position, moves: &mut [Move]) {
    moves.sort_by_cached_key(|&mv| std::cmp::Reverse(mvv_lva_score(position, mv)));
}

#[cfg(test)]
mod tests {
    use super::{mvv_lva_score, order_captures_first};
    use crate::game_state::chess_types::Move;
    use crate::game_state::position::Position;
    use crate::rules::legal_moves::legal_moves;

    #[test]
    fn capture_score_is_victim_times_ten_minus_attacker() {
        let pos = Position::from_fen("4k3/8/8/2q5/3P4/8/8/3QK3 w - - 0 1").expect("FEN parse");
        let pawn_takes_queen = Move::new(27, 34);
        let quiet = Move::new(3, 2);

        assert_eq!(mvv_lva_score(&pos, pawn_takes_queen), 9_000 - 100);
        assert_eq!(mvv_lva_score(&pos, quiet), 0);
    }

    #[test]
    fn captures_move_to_the_front_and_quiet_order_is_kept() {
        let pos = Position::from_fen("4k3/8/8/2q5/3P4/8/8/3QK3 w - - 0 1").expect("FEN parse");
        let generated = legal_moves(&pos).expect("kings present");
        let mut ordered = generated.clone();
        order_captures_first(&pos, &mut ordered);

        assert_eq!(ordered[0], Move::new(27, 34));

        let quiet_generated: Vec<Move> = generated
            .iter()
            .copied()
            .filter(|&mv| mvv_lva_score(&pos, mv) == 0)
            .collect();
        let quiet_ordered: Vec<Move> = ordered
            .iter()
            .copied()
            .filter(|&mv| mvv_lva_score(&pos, mv) == 0)
            .collect();
        assert_eq!(quiet_generated, quiet_ordered);
    }
}
