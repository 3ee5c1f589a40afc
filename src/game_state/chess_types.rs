//! Core value types shared by every layer of the analyzer.
//!
//! Colors and piece kinds form a closed tagged variant; squares are plain
//! `u8` indices with `0 == a1` and `63 == h8`.

use std::fmt;

use crate::errors::NotationError;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Board square index (`0..=63`).
pub type Square = u8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// +1 for White, -1 for Black. Scores are always White-positive.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece class (color is carried separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub const NON_KING: [PieceKind; 5] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// A move is just its origin and destination. Promotion, en-passant and
/// castling bookkeeping are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Parse a long algebraic move such as `e2e4`. A trailing promotion
    /// letter (`e7e8q`) is accepted and dropped.
    pub fn from_long_algebraic(text: &str) -> Result<Self, NotationError> {
        let text = text.trim();
        if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
            return Err(NotationError::InvalidMove(text.to_owned()));
        }

        let from = algebraic_to_square(&text[0..2])?;
        let to = algebraic_to_square(&text[2..4])?;
        let promotion_ok = text[4..].chars().all(|c| matches!(c, 'q' | 'r' | 'b' | 'n'));
        if from == to || !promotion_ok {
            return Err(NotationError::InvalidMove(text.to_owned()));
        }

        Ok(Self { from, to })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Squares inside a Move are always on the board.
        let from = square_to_algebraic(self.from).map_err(|_| fmt::Error)?;
        let to = square_to_algebraic(self.to).map_err(|_| fmt::Error)?;
        write!(f, "{from}{to}")
    }
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}
