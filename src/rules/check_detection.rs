//! King location and attack queries.
//!
//! `is_in_check` answers "would any pseudo-legal opponent move land on this
//! king" by probing the king square with the same attack tables the
//! generator uses, read in reverse: a square is attacked by a knight iff a
//! knight sits a knight's jump away, and so on per class.

use crate::errors::{RulesError, RulesResult};
use crate::game_state::{chess_types::*, position::Position};
use crate::moves::leaper_attacks::{king_attacks, knight_attacks, pawn_attacks};
use crate::moves::slider_attacks::{bishop_attacks, rook_attacks};

/// The single square holding `color`'s king.
///
/// An empty king mask or a mask with several bits is a malformed position
/// and is reported instead of guessed at.
pub fn king_square(position: &Position, color: Color) -> RulesResult<Square> {
    let kings = position.kings(color);
    match kings.count_ones() {
        0 => Err(RulesError::MissingKing(color)),
        1 => Ok(kings.trailing_zeros() as Square),
        count => Err(RulesError::DuplicateKing { color, count }),
    }
}

/// True if any `by` piece attacks `square` under the current occupancy.
pub fn is_square_attacked(position: &Position, square: Square, by: Color) -> bool {
    let occupancy = position.occupied();
    let diagonal = position.pieces(by, PieceKind::Bishop) | position.pieces(by, PieceKind::Queen);
    let orthogonal = position.pieces(by, PieceKind::Rook) | position.pieces(by, PieceKind::Queen);

    // A `by` pawn attacks `square` iff it stands where a pawn of the other
    // color on `square` would capture.
    (pawn_attacks(by.opposite(), square) & position.pieces(by, PieceKind::Pawn)) != 0
        || (knight_attacks(square) & position.pieces(by, PieceKind::Knight)) != 0
        || (king_attacks(square) & position.kings(by)) != 0
        || (bishop_attacks(square, occupancy) & diagonal) != 0
        || (rook_attacks(square, occupancy) & orthogonal) != 0
}

pub fn is_in_check(position: &Position, color: Color) -> RulesResult<bool> {
    let king = king_square(position, color)?;
    Ok(is_square_attacked(position, king, color.opposite()))
}
