//! Bitboard position container.
//!
//! `Position` stores twelve disjoint piece masks (`[color][piece_kind]`) and
//! the side to move. It is a plain value: search copies it before every trial
//! move, so no ply ever mutates an ancestor's state.

use crate::errors::FenError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    // [color][piece_kind]
    pieces: [[u64; 6]; 2],
    side_to_move: Color,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            side_to_move: Color::White,
        }
    }
}

impl Position {
    /// Empty board with `side_to_move` to play.
    #[inline]
    pub fn empty(side_to_move: Color) -> Self {
        Self {
            side_to_move,
            ..Self::default()
        }
    }

    pub fn starting() -> Self {
        // The start FEN is a crate constant; the fallback is never taken.
        parse_fen(STARTING_POSITION_FEN).unwrap_or_default()
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    #[inline]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Same placement, different side to move.
    #[inline]
    pub const fn with_side_to_move(&self, side: Color) -> Self {
        Self {
            pieces: self.pieces,
            side_to_move: side,
        }
    }

    #[inline]
    pub const fn pieces(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub const fn kings(&self, color: Color) -> u64 {
        self.pieces(color, PieceKind::King)
    }

    /// Union of one side's masks.
    #[inline]
    pub fn friendly(&self, color: Color) -> u64 {
        self.pieces[color.index()]
            .iter()
            .copied()
            .fold(0u64, |acc, bb| acc | bb)
    }

    /// Union of the opponent's masks.
    #[inline]
    pub fn enemy(&self, color: Color) -> u64 {
        self.friendly(color.opposite())
    }

    /// Union of all twelve masks.
    #[inline]
    pub fn occupied(&self) -> u64 {
        self.friendly(Color::White) | self.friendly(Color::Black)
    }

    /// Piece on `square`, or `None` for empty and off-board squares.
    pub fn piece_at(&self, square: Square) -> Option<(Color, PieceKind)> {
        if square > 63 {
            return None;
        }
        let mask = 1u64 << square;
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                if (self.pieces(color, kind) & mask) != 0 {
                    return Some((color, kind));
                }
            }
        }
        None
    }

    /// Place a piece, replacing whatever stood on `square`. Off-board squares
    /// are ignored.
    pub fn put_piece(&mut self, color: Color, kind: PieceKind, square: Square) {
        if square > 63 {
            return;
        }
        self.clear_square(square);
        self.pieces[color.index()][kind.index()] |= 1u64 << square;
    }

    /// Number of pawns, knights, bishops, rooks and queens on the board.
    pub fn non_king_count(&self) -> u32 {
        Color::ALL
            .iter()
            .flat_map(|&color| {
                PieceKind::NON_KING
                    .iter()
                    .map(move |&kind| self.pieces(color, kind).count_ones())
            })
            .sum()
    }

    #[inline]
    pub fn piece_count(&self, color: Color) -> u32 {
        self.friendly(color).count_ones()
    }

    /// Color mirror: White and Black swap, ranks flip, and the other side
    /// moves. Evaluation of the mirror is the negation of the original.
    pub fn mirrored(&self) -> Self {
        let mut pieces = [[0u64; 6]; 2];
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                pieces[color.opposite().index()][kind.index()] =
                    self.pieces(color, kind).swap_bytes();
            }
        }
        Self {
            pieces,
            side_to_move: self.side_to_move.opposite(),
        }
    }

    /// Mechanical move application: lift the mover from `from`, drop any
    /// piece on `to`, place the mover on `to`, hand the turn over. No
    /// legality is checked.
    pub(crate) fn apply_move(&self, mv: Move) -> Self {
        let mut next = *self;
        let Some((color, kind)) = self.piece_at(mv.from) else {
            next.side_to_move = self.side_to_move.opposite();
            return next;
        };

        next.pieces[color.index()][kind.index()] &= !(1u64 << mv.from);
        next.clear_square(mv.to);
        next.pieces[color.index()][kind.index()] |= 1u64 << mv.to;
        next.side_to_move = self.side_to_move.opposite();
        next
    }

    fn clear_square(&mut self, square: Square) {
        let keep = !(1u64 << square);
        for side in self.pieces.iter_mut() {
            for bb in side.iter_mut() {
                *bb &= keep;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::game_state::chess_types::{Color, Move, PieceKind};

    #[test]
    fn starting_position_occupancy() {
        let pos = Position::starting();
        assert_eq!(pos.occupied().count_ones(), 32);
        assert_eq!(pos.friendly(Color::White), 0x0000_0000_0000_FFFF);
        assert_eq!(pos.enemy(Color::White), 0xFFFF_0000_0000_0000);
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.non_king_count(), 30);
    }

    #[test]
    fn piece_at_fails_closed() {
        let pos = Position::starting();
        assert_eq!(pos.piece_at(4), Some((Color::White, PieceKind::King)));
        assert_eq!(pos.piece_at(59), Some((Color::Black, PieceKind::Queen)));
        assert_eq!(pos.piece_at(27), None);
        assert_eq!(pos.piece_at(64), None);
        assert_eq!(pos.piece_at(200), None);
    }

    #[test]
    fn quiet_move_preserves_piece_count() {
        let pos = Position::starting();
        let next = pos.apply_move(Move::new(12, 28));

        assert_eq!(next.occupied().count_ones(), 32);
        assert_eq!(next.piece_at(28), Some((Color::White, PieceKind::Pawn)));
        assert_eq!(next.piece_at(12), None);
        assert_eq!(next.side_to_move(), Color::Black);
        // Original untouched.
        assert_eq!(pos.piece_at(12), Some((Color::White, PieceKind::Pawn)));
    }

    #[test]
    fn capture_removes_exactly_one_enemy_piece() {
        let pos = Position::from_fen("4k3/8/3p4/8/4N3/8/8/4K3 w - - 0 1").expect("FEN parse");
        let before = pos.piece_count(Color::Black);
        let next = pos.apply_move(Move::new(28, 43));

        assert_eq!(next.piece_count(Color::Black), before - 1);
        assert_eq!(next.piece_count(Color::White), pos.piece_count(Color::White));
        assert_eq!(next.piece_at(43), Some((Color::White, PieceKind::Knight)));
        assert_eq!(next.pieces(Color::Black, PieceKind::Pawn), 0);
    }

    #[test]
    fn put_piece_keeps_masks_disjoint() {
        let mut pos = Position::empty(Color::White);
        pos.put_piece(Color::White, PieceKind::Rook, 10);
        pos.put_piece(Color::Black, PieceKind::Queen, 10);

        assert_eq!(pos.pieces(Color::White, PieceKind::Rook), 0);
        assert_eq!(pos.piece_at(10), Some((Color::Black, PieceKind::Queen)));
        assert_eq!(pos.occupied().count_ones(), 1);
    }

    #[test]
    fn mirror_swaps_colors_and_ranks() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN parse");
        let mirror = pos.mirrored();

        assert_eq!(mirror.side_to_move(), Color::Black);
        assert_eq!(mirror.piece_at(52), Some((Color::Black, PieceKind::Pawn)));
        assert_eq!(mirror.piece_at(60), Some((Color::Black, PieceKind::King)));
        assert_eq!(mirror.piece_at(4), Some((Color::White, PieceKind::King)));
        assert_eq!(mirror.mirrored(), pos);
    }
}
