use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use catmate::game_state::{chess_types::Move, position::Position};
use catmate::rules::legal_moves::is_legal_move;
use catmate::search::board_scoring::{BoardScorer, Evaluator};
use catmate::search::minimax::{MoveOrdering, SearchConfig, SearchOutcome, Searcher};
use catmate::tables::opening_book::OpeningBook;
use catmate::utils::render_position::render_position;

#[derive(Parser, Debug)]
#[command(name = "catmate")]
#[command(about = "Pick a move for a chess position", long_about = None)]
struct Args {
    /// Position in FEN; castling, en-passant and clock fields are optional
    fen: String,

    /// Search depth in plies
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    depth: u32,

    /// Opening book file, `embedded` for the built-in book, or `none`
    book: String,

    /// Draw book moves by weight instead of taking the heaviest
    #[arg(long)]
    book_random: bool,

    /// Seed for --book-random
    #[arg(long, requires = "book_random")]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = OrderingArg::Generated)]
    ordering: OrderingArg,

    /// Print the board to stderr before searching
    #[arg(long)]
    show_board: bool,

    /// Print the static evaluation to stderr before searching
    #[arg(long)]
    eval: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderingArg {
    Generated,
    CapturesFirst,
}

impl From<OrderingArg> for MoveOrdering {
    fn from(arg: OrderingArg) -> Self {
        match arg {
            OrderingArg::Generated => MoveOrdering::Generated,
            OrderingArg::CapturesFirst => MoveOrdering::CapturesFirst,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CATMATE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let position = Position::from_fen(&args.fen)
        .with_context(|| format!("invalid position description: {}", args.fen))?;
    let evaluator = Evaluator::default();

    if args.show_board {
        eprintln!("{}", render_position(&position));
    }

    if args.eval {
        let evaluation = evaluator.score(&position);
        for diagnostic in &evaluation.diagnostics {
            warn!(%diagnostic, "malformed position");
        }
        eprintln!("static evaluation: {}", evaluation.score);
    }

    if let Some(mv) = book_move(&args, &position) {
        println!("{mv}");
        return Ok(());
    }

    let config = SearchConfig {
        depth: args.depth,
        ordering: args.ordering.into(),
    };
    let result = Searcher::with_config(&evaluator, config)
        .search(&position)
        .context("search failed")?;

    match result.outcome {
        SearchOutcome::BestMove { mv, .. } => println!("{mv}"),
        SearchOutcome::NoLegalMove { status } => println!("no move: {status}"),
    }

    Ok(())
}

/// A legal book move for `position`, if the selected book has one.
///
/// Book problems never abort the run; they are logged and search takes over.
fn book_move(args: &Args, position: &Position) -> Option<Move> {
    let book = match args.book.to_ascii_lowercase().as_str() {
        "none" => return None,
        "embedded" => OpeningBook::embedded(),
        _ => match OpeningBook::from_path(&args.book) {
            Ok(book) => book,
            Err(error) => {
                warn!(%error, "opening book unavailable, searching instead");
                return None;
            }
        },
    };

    let candidate = if args.book_random {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        book.choose_weighted_move(&args.fen, &mut rng)
    } else {
        book.first_move(&args.fen)
    }?;

    match is_legal_move(position, candidate) {
        Ok(true) => Some(candidate),
        Ok(false) => {
            warn!(mv = %candidate, "book move is not legal here, searching instead");
            None
        }
        Err(error) => {
            warn!(%error, "cannot verify book move, searching instead");
            None
        }
    }
}
