//! Error types for the analyzer.
//!
//! Mechanical board operations never fail. Failure signaling is concentrated
//! in the rules oracle (malformed king state), the search root (bad depth),
//! and the outer collaborators (board-description parsing, notation, book).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::game_state::chess_types::Color;

/// Malformed king state. Returned by every rules query that has to locate a
/// king, and carried as a diagnostic by the evaluator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesError {
    #[error("{0} king is missing from the board")]
    MissingKing(Color),

    #[error("{color} has {count} kings on the board")]
    DuplicateKing { color: Color, count: u32 },
}

pub type RulesResult<T> = Result<T, RulesError>;

/// Errors raised at the search root.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(u32),

    #[error("position cannot be searched: {0}")]
    Rules(#[from] RulesError),

    /// The side that just moved left its own king attacked.
    #[error("position cannot be searched: {0} is in check but it is not {0}'s turn")]
    OpponentInCheck(Color),
}

pub type SearchRunResult<T> = Result<T, SearchError>;

/// Board description (FEN) parse failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("board description is empty")]
    Empty,

    #[error("board layout must contain 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not describe exactly 8 files")]
    FileCount { rank: usize },

    #[error("invalid empty-square count '{0}'")]
    InvalidEmptyCount(char),

    #[error("invalid piece character '{0}' in board layout")]
    InvalidPiece(char),

    #[error("invalid side-to-move field: {0}")]
    InvalidSideToMove(String),
}

/// Algebraic square and move parse failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),

    #[error("square index out of bounds: {0}")]
    SquareOutOfBounds(u8),

    #[error("invalid long algebraic move: {0}")]
    InvalidMove(String),
}

/// Opening-book loading failures.
#[derive(Error, Debug)]
pub enum BookError {
    #[error("failed reading opening book {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed opening book line {line_number}: {line}")]
    MalformedLine { line_number: usize, line: String },
}
