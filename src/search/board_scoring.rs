//! Pluggable board evaluation.
//!
//! Search delegates static scoring to `BoardScorer` so heuristics can be
//! swapped without touching the tree walk. Scores are White-positive.

use crate::errors::RulesError;
use crate::game_state::{chess_types::*, position::Position};
use crate::rules::check_detection::{is_in_check, king_square};
use crate::rules::fork_detection::detect_fork;
use crate::rules::terminal_state::{game_status, is_castled, GameStatus};
use crate::search::eval_tables::{EvalTables, STANDARD_TABLES};

/// A static score plus anything odd noticed while computing it.
///
/// A malformed king mask does not abort scoring; it is recorded here and the
/// check and mate terms are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub score: i32,
    pub diagnostics: Vec<RulesError>,
}

impl Evaluation {
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

pub trait BoardScorer: Send + Sync {
    /// Score from White's perspective.
    fn score(&self, position: &Position) -> Evaluation;
}

/// Material, piece-square, terminal, castling and fork terms over injected
/// tables.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    tables: &'a EvalTables,
}

impl<'a> Evaluator<'a> {
    pub const fn new(tables: &'a EvalTables) -> Self {
        Self { tables }
    }

    fn material_and_position(&self, position: &Position) -> i32 {
        let endgame = self.tables.is_endgame(position.non_king_count());
        let mut score = 0i32;

        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let mut bb = position.pieces(color, kind);
                while bb != 0 {
                    let sq = bb.trailing_zeros() as Square;
                    let value = self.tables.material(kind)
                        + self.tables.positional(color, kind, sq, endgame);
                    score += color.sign() * value;
                    bb &= bb - 1;
                }
            }
        }

        score
    }

    /// Mate beats check; draws add nothing.
    fn terminal_adjustment(&self, position: &Position) -> Result<i32, RulesError> {
        let events = &self.tables.events;
        let adjustment = match game_status(position)? {
            GameStatus::Checkmate => -position.side_to_move().sign() * events.checkmate,
            GameStatus::Stalemate | GameStatus::InsufficientMaterial => 0,
            GameStatus::Check | GameStatus::Ongoing => {
                let mut delivered = 0;
                for victim in Color::ALL {
                    if is_in_check(position, victim)? {
                        delivered -= victim.sign() * events.check;
                    }
                }
                delivered
            }
        };
        Ok(adjustment)
    }

    fn castling_bonus(&self, position: &Position) -> i32 {
        Color::ALL
            .into_iter()
            .filter(|&color| is_castled(position, color))
            .map(|color| color.sign() * self.tables.events.castled)
            .sum()
    }

    /// Each distinct attacked class is worth its material once, however many
    /// pieces of that class are hit.
    fn fork_bonus(&self, position: &Position) -> i32 {
        let mut score = 0;
        for color in Color::ALL {
            let report = detect_fork(position, color);
            if !report.is_fork() {
                continue;
            }
            let classes: i32 = report
                .classes
                .iter()
                .map(|&kind| self.tables.material(kind))
                .sum();
            score += color.sign() * (self.tables.events.fork + classes);
        }
        score
    }
}

impl Default for Evaluator<'static> {
    fn default() -> Self {
        Self::new(&STANDARD_TABLES)
    }
}

impl BoardScorer for Evaluator<'_> {
    fn score(&self, position: &Position) -> Evaluation {
        let diagnostics: Vec<RulesError> = Color::ALL
            .into_iter()
            .filter_map(|color| king_square(position, color).err())
            .collect();

        let mut score = self.material_and_position(position);

        if diagnostics.is_empty() {
            // Kings are well formed, so the rules queries cannot fail here.
            score += self.terminal_adjustment(position).unwrap_or(0);
        }

        score += self.castling_bonus(position);
        score += self.fork_bonus(position);

        Evaluation { score, diagnostics }
    }
}
