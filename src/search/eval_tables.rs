//! Static evaluation data: material values, piece-square tables and event
//! bonuses.
//!
//! Tables are laid out from White's point of view with index 0 = a1. A Black
//! piece on `sq` reads entry `sq ^ 56` (same file, mirrored rank).

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Flat bonuses for game events, always credited to the side that caused them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventBonuses {
    pub check: i32,
    pub checkmate: i32,
    pub castled: i32,
    pub fork: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalTables {
    /// Indexed by `PieceKind::index()`.
    pub material: [i32; 6],
    pub pawn: [i32; 64],
    pub knight: [i32; 64],
    pub bishop: [i32; 64],
    pub rook: [i32; 64],
    pub queen: [i32; 64],
    pub king_opening: [i32; 64],
    pub king_endgame: [i32; 64],
    pub events: EventBonuses,
    /// Endgame when the non-king piece count is at or below this.
    pub endgame_threshold: u32,
}

impl EvalTables {
    #[inline]
    pub const fn material(&self, kind: PieceKind) -> i32 {
        self.material[kind.index()]
    }

    /// Positional bonus for a `color` `kind` standing on `square`.
    #[inline]
    pub fn positional(&self, color: Color, kind: PieceKind, square: Square, endgame: bool) -> i32 {
        let index = match color {
            Color::White => square as usize,
            Color::Black => (square ^ 56) as usize,
        };
        let table = match kind {
            PieceKind::Pawn => &self.pawn,
            PieceKind::Knight => &self.knight,
            PieceKind::Bishop => &self.bishop,
            PieceKind::Rook => &self.rook,
            PieceKind::Queen => &self.queen,
            PieceKind::King if endgame => &self.king_endgame,
            PieceKind::King => &self.king_opening,
        };
        table[index]
    }

    #[inline]
    pub fn is_endgame(&self, non_king_count: u32) -> bool {
        non_king_count <= self.endgame_threshold
    }
}

impl Default for EvalTables {
    fn default() -> Self {
        STANDARD_TABLES.clone()
    }
}

#[rustfmt::skip]
pub static STANDARD_TABLES: EvalTables = EvalTables {
    material: [10, 32, 33, 50, 90, 0],
    pawn: [
          0,   5,   5, -10, -10,   5,   5,   0,
          0,  10,  -5,   0,   0,  -5,  10,   0,
          0,  10,  10,  20,  20,  10,  10,   0,
          0,   5,  10,  25,  25,  10,   5,   0,
          5,  10,  20,  30,  30,  20,  10,   5,
         10,  20,  30,  40,  40,  30,  20,  10,
         50,  50,  50,  50,  50,  50,  50,  50,
          0,   0,   0,   0,   0,   0,   0,   0,
    ],
    knight: [
        -50, -40, -30, -30, -30, -30, -40, -50,
        -40, -20,   0,   0,   0,   0, -20, -40,
        -30,   0,  10,  15,  15,  10,   0, -30,
        -30,   5,  15,  20,  20,  15,   5, -30,
        -30,   0,  15,  20,  20,  15,   0, -30,
        -30,   5,  10,  15,  15,  10,   5, -30,
        -40, -20,   0,   5,   5,   0, -20, -40,
        -50, -40, -30, -30, -30, -30, -40, -50,
    ],
    bishop: [
        -20, -10, -10, -10, -10, -10, -10, -20,
        -10,   5,   0,   0,   0,   0,   5, -10,
        -10,  10,  10,  10,  10,  10,  10, -10,
        -10,   0,  10,  10,  10,  10,   0, -10,
        -10,   5,   5,  10,  10,   5,   5, -10,
        -10,   0,   5,  10,  10,   5,   0, -10,
        -10,   0,   0,   0,   0,   0,   0, -10,
        -20, -10, -10, -10, -10, -10, -10, -20,
    ],
    rook: [
          0,   0,   0,   5,   5,   0,   0,   0,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
          5,  10,  10,  10,  10,  10,  10,   5,
          0,   0,   0,   0,   0,   0,   0,   0,
    ],
    queen: [
        -20, -10, -10,  -5,  -5, -10, -10, -20,
        -10,   0,   0,   0,   0,   0,   0, -10,
        -10,   0,   5,   5,   5,   5,   0, -10,
         -5,   0,   5,   5,   5,   5,   0,  -5,
          0,   0,   5,   5,   5,   5,   0,  -5,
        -10,   5,   5,   5,   5,   5,   0, -10,
        -10,   0,   5,   0,   0,   0,   0, -10,
        -20, -10, -10,  -5,  -5, -10, -10, -20,
    ],
    king_opening: [
         20,  30,  10,   0,   0,  10,  30,  20,
         20,  20,   0,   0,   0,   0,  20,  20,
        -10, -20, -20, -20, -20, -20, -20, -10,
        -20, -30, -30, -40, -40, -30, -30, -20,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
    ],
    king_endgame: [
        -50, -30, -30, -30, -30, -30, -30, -50,
        -30, -30,   0,   0,   0,   0, -30, -30,
        -30, -10,  20,  30,  30,  20, -10, -30,
        -30, -10,  30,  40,  40,  30, -10, -30,
        -30, -10,  30,  40,  40,  30, -10, -30,
        -30, -10,  20,  30,  30,  20, -10, -30,
        -30, -20, -20,   0,   0, -20, -20, -30,
        -50, -40, -30, -20, -20, -30, -40, -50,
    ],
    events: EventBonuses {
        check: 25,
        checkmate: 1000,
        castled: 50,
        fork: 50,
    },
    endgame_threshold: 10,
};

#[cfg(test)]
mod tests {
    use super::STANDARD_TABLES;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn black_reads_the_rank_mirrored_entry() {
        // c2 for White and c7 for Black are the same relative square.
        let white = STANDARD_TABLES.positional(Color::White, PieceKind::Pawn, 10, false);
        let black = STANDARD_TABLES.positional(Color::Black, PieceKind::Pawn, 50, false);
        assert_eq!(white, black);
        assert_eq!(white, -5);
    }

    #[test]
    fn king_table_switches_with_phase() {
        let g1 = 6;
        assert_eq!(STANDARD_TABLES.positional(Color::White, PieceKind::King, g1, false), 30);
        assert_eq!(STANDARD_TABLES.positional(Color::White, PieceKind::King, g1, true), -30);
    }

    #[test]
    fn endgame_threshold_is_inclusive() {
        assert!(STANDARD_TABLES.is_endgame(10));
        assert!(!STANDARD_TABLES.is_endgame(11));
        assert_eq!(STANDARD_TABLES.material(PieceKind::King), 0);
    }
}
