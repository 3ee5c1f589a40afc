use crate::errors::RulesResult;
use crate::game_state::{chess_types::Move, position::Position};
use crate::move_generation::move_generator::pseudo_legal_moves;
use crate::rules::check_detection::{is_in_check, king_square};

/// Pseudo-legal moves that do not leave the mover's own king attacked.
///
/// Keeps generation order. Fails only when the mover's king is missing or
/// duplicated.
pub fn legal_moves(position: &Position) -> RulesResult<Vec<Move>> {
    let side = position.side_to_move();
    king_square(position, side)?;

    let mut legal = Vec::new();
    for mv in pseudo_legal_moves(position) {
        let next = position.apply_move(mv);
        if !is_in_check(&next, side)? {
            legal.push(mv);
        }
    }

    Ok(legal)
}

pub fn is_legal_move(position: &Position, mv: Move) -> RulesResult<bool> {
    Ok(legal_moves(position)?.contains(&mv))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{is_legal_move, legal_moves};
    use crate::errors::RulesError;
    use crate::game_state::chess_types::{Color, Move};
    use crate::game_state::position::Position;
    use crate::move_generation::move_generator::pseudo_legal_moves;
    use crate::rules::check_detection::is_in_check;

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        // Knight e2 pinned to e1 by the rook on e8.
        let pos = Position::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN parse");
        let moves = legal_moves(&pos).expect("kings present");

        assert!(moves.iter().all(|mv| mv.from != 12));
        assert!(moves.contains(&Move::new(4, 3)));
    }

    #[test]
    fn king_may_not_step_into_attack() {
        let pos = Position::from_fen("3r2k1/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN parse");
        let moves = legal_moves(&pos).expect("kings present");

        assert!(!moves.contains(&Move::new(4, 3)));
        assert!(!moves.contains(&Move::new(4, 11)));
        assert!(moves.contains(&Move::new(4, 5)));
    }

    #[test]
    fn check_must_be_answered() {
        // Queen on e7 checks e1 along the file; block with the bishop or step aside.
        let pos = Position::from_fen("6k1/4q3/8/8/8/8/3B4/4K3 w - - 0 1").expect("FEN parse");
        let moves = legal_moves(&pos).expect("kings present");

        assert!(moves.contains(&Move::new(11, 20)));
        assert!(!moves.contains(&Move::new(11, 18)));
        for mv in &moves {
            let next = pos.apply_move(*mv);
            assert_eq!(is_in_check(&next, Color::White), Ok(false));
        }
    }

    #[test]
    fn missing_mover_king_is_reported() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/4P3/8 w - - 0 1").expect("FEN parse");
        assert_eq!(legal_moves(&pos), Err(RulesError::MissingKing(Color::White)));
    }

    #[test]
    fn book_style_legality_probe() {
        let pos = Position::starting();
        assert_eq!(is_legal_move(&pos, Move::new(12, 28)), Ok(true));
        assert_eq!(is_legal_move(&pos, Move::new(12, 36)), Ok(false));
    }

    #[test]
    fn legal_moves_are_a_safe_subset_on_random_playouts() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let mut pos = Position::starting();
            for _ in 0..60 {
                let side = pos.side_to_move();
                let pseudo = pseudo_legal_moves(&pos);
                let legal = legal_moves(&pos).expect("kings present");

                for mv in &legal {
                    assert!(pseudo.contains(mv));
                    let next = pos.apply_move(*mv);
                    assert_eq!(is_in_check(&next, side), Ok(false));

                    let captured = pos.piece_at(mv.to).is_some();
                    let expected = pos.piece_count(side.opposite()) - u32::from(captured);
                    assert_eq!(next.piece_count(side.opposite()), expected);
                    assert_eq!(next.piece_count(side), pos.piece_count(side));
                }

                if legal.is_empty() {
                    break;
                }
                pos = pos.apply_move(legal[rng.random_range(0..legal.len())]);
            }
        }
    }
}
