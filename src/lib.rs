//! Crate root module declarations for the catmate position analyzer.
//!
//! Exposes the board model, pseudo-legal move generation, the rules oracle,
//! static evaluation and minimax search, plus the notation and opening-book
//! collaborators used by the command-line binary.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod moves {
    pub mod leaper_attacks;
    pub mod slider_attacks;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_legal_pawn;
    pub mod pseudo_legal_pieces;
}

pub mod rules {
    pub mod check_detection;
    pub mod fork_detection;
    pub mod legal_moves;
    pub mod terminal_state;
}

pub mod search {
    pub mod board_scoring;
    pub mod eval_tables;
    pub mod minimax;
    pub mod move_ordering;
}

pub mod tables {
    pub mod opening_book;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod render_position;
}
