//! Depth-limited minimax with alpha-beta pruning.
//!
//! White maximizes and Black minimizes. Every ply works on its own copied
//! `Position`; nothing is undone. Ties keep the first move reaching the best
//! score, so results are reproducible for a given move order.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::errors::{SearchError, SearchRunResult};
use crate::game_state::{chess_types::*, position::Position};
use crate::rules::check_detection::{is_in_check, king_square};
use crate::rules::legal_moves::legal_moves;
use crate::rules::terminal_state::{game_status, GameStatus};
use crate::search::board_scoring::{BoardScorer, Evaluator};
use crate::search::move_ordering::order_captures_first;

const INFINITY: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MoveOrdering {
    /// Generator order.
    #[default]
    Generated,
    /// MVV-LVA captures first, then quiet moves in generator order.
    CapturesFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u32,
    pub ordering: MoveOrdering,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            ordering: MoveOrdering::Generated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    BestMove { mv: Move, score: i32 },
    /// The side to move is mated or stalemated.
    NoLegalMove { status: GameStatus },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub depth: u32,
    pub nodes: u64,
    pub elapsed: Duration,
}

impl SearchResult {
    pub fn best_move(&self) -> Option<Move> {
        match self.outcome {
            SearchOutcome::BestMove { mv, .. } => Some(mv),
            SearchOutcome::NoLegalMove { .. } => None,
        }
    }

    pub fn score(&self) -> Option<i32> {
        match self.outcome {
            SearchOutcome::BestMove { score, .. } => Some(score),
            SearchOutcome::NoLegalMove { .. } => None,
        }
    }
}

pub struct Searcher<'s, S: BoardScorer> {
    scorer: &'s S,
    config: SearchConfig,
}

impl<'s, S: BoardScorer> Searcher<'s, S> {
    /// Searcher with the default depth and the given move order.
    pub fn new(scorer: &'s S, ordering: MoveOrdering) -> Self {
        Self::with_config(
            scorer,
            SearchConfig {
                ordering,
                ..SearchConfig::default()
            },
        )
    }

    pub fn with_config(scorer: &'s S, config: SearchConfig) -> Self {
        Self { scorer, config }
    }

    /// `find_best_move` at the configured depth.
    pub fn search(&self, position: &Position) -> SearchRunResult<SearchResult> {
        self.find_best_move(position, self.config.depth)
    }

    /// Best move for the side to move at `depth` plies.
    ///
    /// Depth 0 and malformed kings are rejected here, before any recursion.
    /// A position without legal moves yields `SearchOutcome::NoLegalMove`.
    pub fn find_best_move(&self, position: &Position, depth: u32) -> SearchRunResult<SearchResult> {
        self.search_root(position, depth, true)
    }

    /// Same contract as `find_best_move` without pruning.
    pub fn find_best_move_unpruned(
        &self,
        position: &Position,
        depth: u32,
    ) -> SearchRunResult<SearchResult> {
        self.search_root(position, depth, false)
    }

    pub fn minimax(
        &self,
        position: &Position,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        nodes: &mut u64,
    ) -> SearchRunResult<i32> {
        *nodes += 1;

        if depth == 0 {
            return Ok(self.scorer.score(position).score);
        }

        let moves = self.ordered_moves(position)?;
        if moves.is_empty() {
            return Ok(self.scorer.score(position).score);
        }

        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for mv in moves {
            let child = position.apply_move(mv);
            let score = self.minimax(&child, depth - 1, alpha, beta, !maximizing, nodes)?;

            if maximizing {
                if score > best {
                    best = score;
                }
                alpha = alpha.max(best);
            } else {
                if score < best {
                    best = score;
                }
                beta = beta.min(best);
            }

            if beta <= alpha {
                break;
            }
        }

        Ok(best)
    }

    /// Plain minimax over the full tree.
    pub fn minimax_unpruned(
        &self,
        position: &Position,
        depth: u32,
        maximizing: bool,
        nodes: &mut u64,
    ) -> SearchRunResult<i32> {
        *nodes += 1;

        if depth == 0 {
            return Ok(self.scorer.score(position).score);
        }

        let moves = self.ordered_moves(position)?;
        if moves.is_empty() {
            return Ok(self.scorer.score(position).score);
        }

        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for mv in moves {
            let score =
                self.minimax_unpruned(&position.apply_move(mv), depth - 1, !maximizing, nodes)?;
            if (maximizing && score > best) || (!maximizing && score < best) {
                best = score;
            }
        }

        Ok(best)
    }

    fn search_root(
        &self,
        position: &Position,
        depth: u32,
        pruned: bool,
    ) -> SearchRunResult<SearchResult> {
        if depth == 0 {
            return Err(SearchError::InvalidDepth(depth));
        }
        for color in Color::ALL {
            king_square(position, color)?;
        }
        let waiting = position.side_to_move().opposite();
        if is_in_check(position, waiting)? {
            return Err(SearchError::OpponentInCheck(waiting));
        }

        let started = Instant::now();
        let mut nodes = 1u64;
        let moves = self.ordered_moves(position)?;

        if moves.is_empty() {
            let status = game_status(position)?;
            info!(%status, "no legal move at the root");
            return Ok(SearchResult {
                outcome: SearchOutcome::NoLegalMove { status },
                depth,
                nodes,
                elapsed: started.elapsed(),
            });
        }

        let maximizing = position.side_to_move() == Color::White;
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for mv in moves {
            let child = position.apply_move(mv);
            let score = if pruned {
                self.minimax(&child, depth - 1, alpha, beta, !maximizing, &mut nodes)?
            } else {
                self.minimax_unpruned(&child, depth - 1, !maximizing, &mut nodes)?
            };
            debug!(%mv, score, "root move scored");

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((mv, score));
                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
            }
        }

        let elapsed = started.elapsed();
        let outcome = match best {
            Some((mv, score)) => SearchOutcome::BestMove { mv, score },
            None => SearchOutcome::NoLegalMove {
                status: game_status(position)?,
            },
        };

        if let SearchOutcome::BestMove { mv, score } = outcome {
            info!(%mv, score, depth, nodes, ?elapsed, "search finished");
        }

        Ok(SearchResult {
            outcome,
            depth,
            nodes,
            elapsed,
        })
    }

    fn ordered_moves(&self, position: &Position) -> SearchRunResult<Vec<Move>> {
        let mut moves = legal_moves(position)?;
        if self.config.ordering == MoveOrdering::CapturesFirst {
            order_captures_first(position, &mut moves);
        }
        Ok(moves)
    }
}

/// Search with the standard evaluation tables and generator move order.
pub fn find_best_move(position: &Position, depth: u32) -> SearchRunResult<SearchResult> {
    let evaluator = Evaluator::default();
    Searcher::new(&evaluator, MoveOrdering::Generated).find_best_move(position, depth)
}
