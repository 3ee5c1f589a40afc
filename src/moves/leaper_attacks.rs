//! Fixed-offset attack tables for knights, kings and pawns.
//!
//! All tables are built at compile time from (file, rank) offset lists so the
//! on-board filter runs once per square instead of once per generated move.

use crate::game_state::chess_types::{Color, Square};

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

const WHITE_PAWN_CAPTURE_OFFSETS: [(i32, i32); 2] = [(-1, 1), (1, 1)];
const BLACK_PAWN_CAPTURE_OFFSETS: [(i32, i32); 2] = [(-1, -1), (1, -1)];

pub const KNIGHT_ATTACKS: [u64; 64] = build_offset_table(&KNIGHT_OFFSETS);
pub const KING_ATTACKS: [u64; 64] = build_offset_table(&KING_OFFSETS);

/// Diagonal capture targets, indexed `[color][square]`.
pub const PAWN_ATTACKS: [[u64; 64]; 2] = [
    build_offset_table(&WHITE_PAWN_CAPTURE_OFFSETS),
    build_offset_table(&BLACK_PAWN_CAPTURE_OFFSETS),
];

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square as usize]
}

/// Squares a `color` pawn on `square` captures onto.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    PAWN_ATTACKS[color.index()][square as usize]
}

const fn build_offset_table(offsets: &[(i32, i32)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut i = 0usize;

        while i < offsets.len() {
            table[sq] |= on_board_bit(file + offsets[i].0, rank + offsets[i].1);
            i += 1;
        }

        sq += 1;
    }

    table
}

const fn on_board_bit(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }
    1u64 << (rank * 8 + file)
}
