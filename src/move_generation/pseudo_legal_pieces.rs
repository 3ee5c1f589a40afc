//! Knight, king and slider generators.
//!
//! Each piece contributes its attack set minus friendly-occupied squares.
//! Enemy-occupied squares are captures; the enemy king is not special-cased.

use crate::game_state::{chess_types::*, position::Position};
use crate::moves::leaper_attacks::{king_attacks, knight_attacks};
use crate::moves::slider_attacks::{bishop_attacks, queen_attacks, rook_attacks};

pub fn generate_knight_moves(position: &Position, out: &mut Vec<Move>) {
    generate_for_kind(position, PieceKind::Knight, out, |from, _| knight_attacks(from));
}

pub fn generate_bishop_moves(position: &Position, out: &mut Vec<Move>) {
    generate_for_kind(position, PieceKind::Bishop, out, bishop_attacks);
}

pub fn generate_rook_moves(position: &Position, out: &mut Vec<Move>) {
    generate_for_kind(position, PieceKind::Rook, out, rook_attacks);
}

pub fn generate_queen_moves(position: &Position, out: &mut Vec<Move>) {
    generate_for_kind(position, PieceKind::Queen, out, queen_attacks);
}

/// Single-step king moves. Castling is never generated.
pub fn generate_king_moves(position: &Position, out: &mut Vec<Move>) {
    generate_for_kind(position, PieceKind::King, out, |from, _| king_attacks(from));
}

fn generate_for_kind<F>(position: &Position, kind: PieceKind, out: &mut Vec<Move>, attacks_from: F)
where
    F: Fn(Square, u64) -> u64,
{
    let side = position.side_to_move();
    let own_occ = position.friendly(side);
    let occupancy = position.occupied();

    let mut movers = position.pieces(side, kind);
    while movers != 0 {
        let from = movers.trailing_zeros() as Square;
        let mut targets = attacks_from(from, occupancy) & !own_occ;

        while targets != 0 {
            let to = targets.trailing_zeros() as Square;
            out.push(Move::new(from, to));
            targets &= targets - 1;
        }

        movers &= movers - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(fen: &str, generate: fn(&Position, &mut Vec<Move>)) -> Vec<Move> {
        let pos = Position::from_fen(fen).expect("FEN parse");
        let mut out = Vec::new();
        generate(&pos, &mut out);
        out
    }

    #[test]
    fn starting_knights_have_two_moves_each() {
        let moves = collect(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            generate_knight_moves,
        );
        assert_eq!(moves.len(), 4);
        assert!(moves.contains(&Move::new(1, 16)));
        assert!(moves.contains(&Move::new(6, 23)));
    }

    #[test]
    fn boxed_in_sliders_have_no_moves() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert!(collect(fen, generate_bishop_moves).is_empty());
        assert!(collect(fen, generate_rook_moves).is_empty());
        assert!(collect(fen, generate_queen_moves).is_empty());
    }

    #[test]
    fn slider_capture_ends_the_ray() {
        // Rook a1, black knight a4, white pawn c1.
        let moves = collect("4k3/8/8/8/n7/8/8/R1P1K3 w - - 0 1", generate_rook_moves);

        assert!(moves.contains(&Move::new(0, 24)));
        assert!(!moves.contains(&Move::new(0, 32)));
        assert!(moves.contains(&Move::new(0, 1)));
        assert!(!moves.contains(&Move::new(0, 2)));
        // a2, a3, a4 and b1.
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn king_in_corner_skips_friendly_neighbours() {
        let moves = collect("4k3/8/8/8/8/8/PP6/K7 w - - 0 1", generate_king_moves);
        assert_eq!(moves, vec![Move::new(0, 1)]);
    }
}
