use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use gridwords::board::Board;
use gridwords::budget::{SearchLimits, SearchStatus};
use gridwords::config::{GameConfig, DEFAULT_COLS, DEFAULT_MIN_LENGTH, DEFAULT_ROWS};
use gridwords::dice::DiceBag;
use gridwords::errors::{BoardError, ConfigError};
use gridwords::lexicon::Lexicon;
use gridwords::search;
use gridwords::verify;
use gridwords::word_list::WordList;

/// Find every dictionary word on a Boggle-style letter grid
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
struct Cli {
    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_words.txt")
    )]
    word_list: String,

    /// Number of board rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Number of board columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Minimum word length
    #[arg(short, long, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Board faces, row-major, separated by spaces or commas (e.g. "c a t s").
    /// A random board is rolled when omitted.
    #[arg(short, long)]
    board: Option<String>,

    /// Seed for the random board
    #[arg(long)]
    seed: Option<u64>,

    /// Check a word the way a human player's submission is checked (repeatable)
    #[arg(long = "check", value_name = "WORD")]
    checks: Vec<String>,

    /// Stop the search after this many milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Stop the search after this many steps
    #[arg(long)]
    max_steps: Option<u64>,

    /// Print discovered words as JSON
    #[arg(long)]
    json: bool,
}

/// Entry point of the gridwords CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("GRIDWORDS_DEBUG").is_ok();
    gridwords::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(board_err) = e.downcast_ref::<BoardError>() {
            eprintln!("Error: {}", board_err.display_detailed());
        } else if let Some(config_err) = e.downcast_ref::<ConfigError>() {
            eprintln!("Error: {}", config_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the gridwords CLI.
///
/// Steps:
/// 1. Parse and validate CLI arguments.
/// 2. Load the word list and build the lexicon.
/// 3. Build the board from `--board`, or roll one.
/// 4. Check any submitted words.
/// 5. Enumerate every word on the board and print it with its path.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = GameConfig::new(cli.rows, cli.cols, cli.min_length)?;

    // 1. Load the word list and build the lexicon
    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list)?;
    let lexicon = Lexicon::build(&word_list.words, config.min_length())?;
    let load_secs = t_load.elapsed().as_secs_f64();
    log::info!(
        "Loaded {} words ({} of length {}+) in {:.3}s",
        word_list.len(),
        lexicon.len(),
        config.min_length(),
        load_secs
    );

    // 2. Build the board
    let board = match &cli.board {
        Some(spec) => Board::new(&split_faces(spec), config.rows(), config.cols())?,
        None => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            DiceBag::classic().roll(config.rows(), config.cols(), &mut rng)?
        }
    };
    log::debug!("{}x{} board, {} tiles", config.rows(), config.cols(), config.cell_count());
    eprint!("{board}");

    let mut limits = SearchLimits::unbounded();
    if let Some(ms) = cli.time_limit_ms {
        limits = limits.with_time_limit(Duration::from_millis(ms));
    }
    if let Some(steps) = cli.max_steps {
        limits = limits.with_max_steps(steps);
    }

    // 3. Human submissions
    for word in &cli.checks {
        match check_submission(&board, &lexicon, &config, word) {
            Ok(path) => println!("{word}: accepted {path}"),
            Err(reason) => println!("{word}: {reason}"),
        }
    }

    // 4. Enumerate everything on the board
    let t_search = Instant::now();
    let result = search::enumerate_with_limits(&board, &lexicon, config.min_length(), &limits);
    let search_secs = t_search.elapsed().as_secs_f64();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result.words)?);
    } else {
        for found in &result.words {
            println!("{found}");
        }
    }

    match result.status {
        SearchStatus::Complete => {}
        SearchStatus::TimedOut { elapsed } => {
            eprintln!("⚠️  Timed out after {:.1}s; some words may be missing", elapsed.as_secs_f64());
        }
        SearchStatus::StepLimitReached { steps } => {
            eprintln!("⚠️  Stopped after {steps} steps; some words may be missing");
        }
    }

    eprintln!(
        "Found {} words in {:.3}s ({} nodes visited).",
        result.words.len(),
        search_secs,
        result.nodes_visited
    );

    Ok(())
}

/// Faces from a `--board` argument: whitespace- or comma-separated.
fn split_faces(spec: &str) -> Vec<&str> {
    spec.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect()
}

/// Apply the human-player rules to one submitted word.
///
/// Checked in order: long enough, on the board, in the lexicon.
fn check_submission(
    board: &Board,
    lexicon: &Lexicon,
    config: &GameConfig,
    word: &str,
) -> Result<gridwords::path::Path, String> {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return Err("empty word, skipped".to_string());
    }
    if word.chars().count() < config.min_length() {
        return Err(format!("too short (fewer than {} letters)", config.min_length()));
    }
    let Some(path) = verify::verify(board, &word) else {
        return Err("not on board".to_string());
    };
    if !lexicon.contains(&word) {
        return Err("not in lexicon".to_string());
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Board, Lexicon, GameConfig) {
        (
            Board::new(&split_faces("c a t s"), 2, 2).unwrap(),
            Lexicon::build(["cat", "cats", "act", "scat"], 3).unwrap(),
            GameConfig::new(2, 2, 3).unwrap(),
        )
    }

    #[test]
    fn test_split_faces() {
        assert_eq!(split_faces("c a,t  s"), vec!["c", "a", "t", "s"]);
        assert_eq!(split_faces(" Qu,,e "), vec!["Qu", "e"]);
        assert!(split_faces("").is_empty());
    }

    #[test]
    fn test_check_submission_order_of_rules() {
        let (board, lexicon, config) = setup();
        assert_eq!(check_submission(&board, &lexicon, &config, "at"), Err("too short (fewer than 3 letters)".to_string()));
        assert_eq!(check_submission(&board, &lexicon, &config, "dog"), Err("not on board".to_string()));
        assert_eq!(check_submission(&board, &lexicon, &config, "tac"), Err("not in lexicon".to_string()));
        assert!(check_submission(&board, &lexicon, &config, "").is_err());
        let path = check_submission(&board, &lexicon, &config, "CATS").unwrap();
        assert_eq!(path.spell(&board), "cats");
    }

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::parse_from(["gridwords", "--board", "c a t s", "-r", "2", "-c", "2", "--check", "cat", "--check", "act"]);
        assert_eq!(cli.rows, 2);
        assert_eq!(cli.min_length, DEFAULT_MIN_LENGTH);
        assert_eq!(cli.checks, vec!["cat", "act"]);
        assert!(!cli.json);
    }
}
