use crate::game_state::{chess_types::Move, position::Position};
use crate::move_generation::pseudo_legal_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_legal_pieces::{
    generate_bishop_moves, generate_king_moves, generate_knight_moves, generate_queen_moves,
    generate_rook_moves,
};

/// Every pseudo-legal move for the side to move.
///
/// Order is fixed: pawns, knights, bishops, rooks, queens, king, and within a
/// class ascending origin then ascending destination. Search tie-breaks rely
/// on this being deterministic.
pub fn pseudo_legal_moves(position: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(48);

    generate_pawn_moves(position, &mut out);
    generate_knight_moves(position, &mut out);
    generate_bishop_moves(position, &mut out);
    generate_rook_moves(position, &mut out);
    generate_queen_moves(position, &mut out);
    generate_king_moves(position, &mut out);

    out
}
