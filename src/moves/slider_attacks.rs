//! Ray-cast attacks for bishops, rooks and queens.
//!
//! A ray advances one square at a time and stops on the first occupied
//! square, which is included in the result. Callers strip friendly squares.

use crate::game_state::chess_types::{file_of, rank_of, Square};

/// (file step, rank step) pairs.
pub const DIAGONAL_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
pub const ORTHOGONAL_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    rays(square, &DIAGONAL_DIRECTIONS, occupancy)
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    rays(square, &ORTHOGONAL_DIRECTIONS, occupancy)
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

fn rays(square: Square, directions: &[(i32, i32)], occupancy: u64) -> u64 {
    directions
        .iter()
        .fold(0u64, |acc, &(file_step, rank_step)| {
            acc | trace_ray(square, file_step, rank_step, occupancy)
        })
}

fn trace_ray(square: Square, file_step: i32, rank_step: i32, occupancy: u64) -> u64 {
    let mut file = i32::from(file_of(square)) + file_step;
    let mut rank = i32::from(rank_of(square)) + rank_step;
    let mut attacks = 0u64;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let bit = 1u64 << (rank * 8 + file);
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        file += file_step;
        rank += rank_step;
    }

    attacks
}
