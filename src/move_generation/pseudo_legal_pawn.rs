use crate::game_state::chess_rules::pawn_start_rank;
use crate::game_state::{chess_types::*, position::Position};
use crate::moves::leaper_attacks::pawn_attacks;

/// Pushes and diagonal captures for the side to move. Promotion and
/// en-passant are not generated; a pawn reaching the last rank stays a pawn.
pub fn generate_pawn_moves(position: &Position, out: &mut Vec<Move>) {
    let side = position.side_to_move();
    let enemy_occ = position.enemy(side);
    let empty = !position.occupied();
    let start_rank = pawn_start_rank(side);

    let mut pawns = position.pieces(side, PieceKind::Pawn);
    while pawns != 0 {
        let from = pawns.trailing_zeros() as Square;
        let from_mask = 1u64 << from;

        if let Some(one_step) = forward(side, from) {
            if (1u64 << one_step) & empty != 0 {
                out.push(Move::new(from, one_step));

                // The single-push square is empty here, so only the
                // destination still needs checking.
                if from_mask & start_rank != 0 {
                    if let Some(two_step) = forward(side, one_step) {
                        if (1u64 << two_step) & empty != 0 {
                            out.push(Move::new(from, two_step));
                        }
                    }
                }
            }
        }

        let mut captures = pawn_attacks(side, from) & enemy_occ;
        while captures != 0 {
            let to = captures.trailing_zeros() as Square;
            out.push(Move::new(from, to));
            captures &= captures - 1;
        }

        pawns &= pawns - 1;
    }
}

/// One square toward the enemy back rank: +8 for White, -8 for Black.
#[inline]
fn forward(side: Color, square: Square) -> Option<Square> {
    match side {
        Color::White => square.checked_add(8).filter(|&sq| sq < 64),
        Color::Black => square.checked_sub(8),
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::Move;
    use crate::game_state::position::Position;

    fn pawn_moves(fen: &str) -> Vec<Move> {
        let pos = Position::from_fen(fen).expect("FEN parse");
        let mut out = Vec::new();
        generate_pawn_moves(&pos, &mut out);
        out
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        let moves = pawn_moves("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        assert_eq!(moves, vec![Move::new(12, 20), Move::new(12, 28)]);
    }

    #[test]
    fn blocked_single_push_also_blocks_double_push() {
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        assert!(moves.is_empty());
    }

    #[test]
    fn double_push_needs_empty_destination() {
        let moves = pawn_moves("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
        assert_eq!(moves, vec![Move::new(12, 20)]);
    }

    #[test]
    fn black_pawns_move_toward_rank_one_and_capture_diagonally() {
        let moves = pawn_moves("4k3/3p4/2N1N3/8/8/8/8/4K3 b - - 0 1");
        // d7 pawn: d6, d5, captures on c6 and e6.
        assert_eq!(moves.len(), 4);
        assert!(moves.contains(&Move::new(51, 43)));
        assert!(moves.contains(&Move::new(51, 35)));
        assert!(moves.contains(&Move::new(51, 42)));
        assert!(moves.contains(&Move::new(51, 44)));
    }

    #[test]
    fn pawns_never_capture_friendly_pieces_or_push_into_them() {
        let moves = pawn_moves("4k3/8/8/8/8/3NPN2/4P3/4K3 w - - 0 1");
        // e2 is blocked by e3 and d3/f3 are friendly; e3 pushes to e4.
        assert_eq!(moves, vec![Move::new(20, 28)]);
    }
}
