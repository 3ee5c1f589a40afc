//! Position-keyed opening book.
//!
//! Each non-comment line reads `<position description> : <move> [<move> ...]`
//! with moves in long algebraic form. Lines starting with `*` and blank lines
//! are skipped. A move listed again under the same key gains one unit of
//! weight, so repeated opening lines make their shared moves more likely.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use rand::Rng;

use crate::errors::BookError;
use crate::game_state::chess_types::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookMove {
    pub mv: Move,
    pub weight: u32,
}

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    // Candidate order is first-seen order.
    by_key: HashMap<String, Vec<BookMove>>,
}

impl OpeningBook {
    /// Small classical repertoire compiled into the binary.
    pub fn embedded() -> Self {
        include_str!("data/openings.txt")
            .parse()
            .unwrap_or_default()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BookError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| BookError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        data.parse()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Every stored key with its candidates.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[BookMove])> {
        self.by_key
            .iter()
            .map(|(key, moves)| (key.as_str(), moves.as_slice()))
    }

    /// Candidates for a position description.
    ///
    /// The full whitespace-normalized description is tried first, then only
    /// its board, side and castling fields, so a description carrying
    /// en-passant and clock fields still finds a three-field book key.
    ///
    /// A description without a castling field (board and side, or board
    /// alone with White to move) matches any key with the same board and
    /// side; when several castling variants exist the lexically smallest
    /// key wins.
    pub fn moves_for(&self, description: &str) -> Option<&[BookMove]> {
        let fields: Vec<&str> = description.split_whitespace().collect();
        if fields.is_empty() {
            return None;
        }

        if let Some(moves) = self.by_key.get(&fields.join(" ")) {
            return Some(moves.as_slice());
        }
        if fields.len() >= 3 {
            return self.by_key.get(&fields[..3].join(" ")).map(Vec::as_slice);
        }

        let board = fields[0];
        let side = fields.get(1).copied().unwrap_or("w");
        self.by_key
            .iter()
            .filter(|(key, _)| {
                let mut key_fields = key.split_whitespace();
                key_fields.next() == Some(board) && key_fields.next() == Some(side)
            })
            .min_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, moves)| moves.as_slice())
    }

    /// Heaviest candidate; the earliest listed wins a tie.
    pub fn first_move(&self, description: &str) -> Option<Move> {
        let moves = self.moves_for(description)?;
        let mut best = moves.first()?;
        for candidate in &moves[1..] {
            if candidate.weight > best.weight {
                best = candidate;
            }
        }
        Some(best.mv)
    }

    /// Candidate drawn with probability proportional to its weight.
    pub fn choose_weighted_move<R: Rng + ?Sized>(
        &self,
        description: &str,
        rng: &mut R,
    ) -> Option<Move> {
        let moves = self.moves_for(description)?;
        let first = moves.first()?;

        let total_weight: u64 = moves.iter().map(|m| u64::from(m.weight)).sum();
        if total_weight == 0 {
            return Some(first.mv);
        }

        let mut pick = rng.random_range(0..total_weight);
        for m in moves {
            let w = u64::from(m.weight);
            if pick < w {
                return Some(m.mv);
            }
            pick -= w;
        }

        Some(first.mv)
    }

    fn add(&mut self, key: String, mv: Move) {
        let row = self.by_key.entry(key).or_default();
        match row.iter_mut().find(|candidate| candidate.mv == mv) {
            Some(candidate) => candidate.weight = candidate.weight.saturating_add(1),
            None => row.push(BookMove { mv, weight: 1 }),
        }
    }
}

impl FromStr for OpeningBook {
    type Err = BookError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut book = OpeningBook::default();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('*') {
                continue;
            }

            let malformed = || BookError::MalformedLine {
                line_number: idx + 1,
                line: line.to_owned(),
            };

            let (key_part, moves_part) = line.split_once(':').ok_or_else(malformed)?;
            let key = key_part.split_whitespace().collect::<Vec<_>>().join(" ");
            if key.is_empty() || moves_part.trim().is_empty() {
                return Err(malformed());
            }

            for token in moves_part.split_whitespace() {
                let mv = Move::from_long_algebraic(token).map_err(|_| malformed())?;
                book.add(key.clone(), mv);
            }
        }

        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::OpeningBook;
    use crate::errors::BookError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::Move;
    use crate::game_state::position::Position;
    use crate::rules::legal_moves::is_legal_move;

    const START_KEY: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq";

    #[test]
    fn embedded_book_prefers_the_most_repeated_first_move() {
        let book = OpeningBook::embedded();
        assert!(!book.is_empty());

        // e2e4 heads seven lines, d2d4 three.
        let row = book.moves_for(START_KEY).expect("start position is in the book");
        assert_eq!(row.len(), 2);
        assert_eq!(book.first_move(START_KEY), Some(Move::new(12, 28)));
    }

    #[test]
    fn full_description_falls_back_to_three_fields() {
        let book = OpeningBook::embedded();
        assert_eq!(book.first_move(STARTING_POSITION_FEN), Some(Move::new(12, 28)));
        assert_eq!(book.first_move("8/8/8/8/8/8/8/K6k w - - 0 1"), None);
        assert_eq!(book.first_move(""), None);
    }

    #[test]
    fn descriptions_without_castling_still_find_the_book() {
        let book = OpeningBook::embedded();
        let board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

        assert_eq!(book.first_move(&format!("{board} w")), Some(Move::new(12, 28)));
        assert_eq!(book.first_move(board), Some(Move::new(12, 28)));
        assert_eq!(book.first_move(&format!("{board} b")), None);
    }

    #[test]
    fn two_field_lookup_picks_the_smallest_castling_variant() {
        let text = "k7/8/8/8/8/8/8/K7 w K : a1a2\nk7/8/8/8/8/8/8/K7 w - : a1b1\n";
        let book: OpeningBook = text.parse().expect("book should parse");
        assert_eq!(book.first_move("k7/8/8/8/8/8/8/K7 w"), Some(Move::new(0, 1)));
        assert_eq!(book.first_move("k7/8/8/8/8/8/8/K7 w K"), Some(Move::new(0, 8)));
    }

    #[test]
    fn every_embedded_move_is_legal_in_its_position() {
        let book = OpeningBook::embedded();
        for (key, moves) in book.entries() {
            let position = Position::from_fen(key).expect("book keys are valid descriptions");
            for candidate in moves {
                assert_eq!(
                    is_legal_move(&position, candidate.mv),
                    Ok(true),
                    "{key} : {}",
                    candidate.mv
                );
            }
        }
    }

    #[test]
    fn ties_go_to_the_first_listed_move() {
        let text = "* comment\n\nk7/8/8/8/8/8/8/K7 w - : a1a2 a1b1\n";
        let book: OpeningBook = text.parse().expect("book should parse");
        assert_eq!(book.first_move("k7/8/8/8/8/8/8/K7 w -"), Some(Move::new(0, 8)));
    }

    #[test]
    fn weighted_choice_returns_a_listed_move() {
        let text = "k7/8/8/8/8/8/8/K7 w - : a1a2 a1b1 a1b1 a1b1\n";
        let book: OpeningBook = text.parse().expect("book should parse");
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let mv = book
                .choose_weighted_move("k7/8/8/8/8/8/8/K7 w -", &mut rng)
                .expect("book should choose");
            assert!(mv == Move::new(0, 8) || mv == Move::new(0, 1));
        }
        assert_eq!(book.first_move("k7/8/8/8/8/8/8/K7 w -"), Some(Move::new(0, 1)));
    }

    #[test]
    fn malformed_lines_are_reported_with_their_number() {
        let err = "ok/line w - : a1a2\nno separator here\n"
            .parse::<OpeningBook>()
            .expect_err("second line is malformed");
        assert!(matches!(err, BookError::MalformedLine { line_number: 2, .. }));

        let err = "k7/8/8/8/8/8/8/K7 w - : zz\n"
            .parse::<OpeningBook>()
            .expect_err("bad move token");
        assert!(matches!(err, BookError::MalformedLine { line_number: 1, .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = OpeningBook::from_path("/nonexistent/catmate/book.txt").expect_err("no such file");
        assert!(matches!(err, BookError::Io { .. }));
    }
}
