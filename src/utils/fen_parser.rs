//! FEN-to-Position parser.
//!
//! Reads the piece placement and side-to-move fields of a Forsyth-Edwards
//! board description. Castling, en-passant and clock fields are accepted and
//! ignored; when the side-to-move field is absent White moves.

use crate::errors::FenError;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;

pub fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(FenError::Empty)?;
    let side = match parts.next() {
        Some(side_part) => parse_side_to_move(side_part)?,
        None => Color::White,
    };

    let mut position = Position::empty(side);
    parse_board(board_part, &mut position)?;

    Ok(position)
}

fn parse_board(board_part: &str, position: &mut Position) -> Result<(), FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::InvalidEmptyCount(ch));
                }
                file += empty_count as usize;
                continue;
            }

            let (color, piece) = piece_from_fen_char(ch).ok_or(FenError::InvalidPiece(ch))?;

            if file >= 8 {
                return Err(FenError::FileCount { rank: board_rank + 1 });
            }

            position.put_piece(color, piece, (board_rank * 8 + file) as Square);
            file += 1;
        }

        if file != 8 {
            return Err(FenError::FileCount { rank: board_rank + 1 });
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::InvalidSideToMove(side_part.to_owned())),
    }
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}
