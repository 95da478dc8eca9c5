//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of full-board enumeration on *your* machine.
//! - Loads the word list once, builds the lexicon once, then enumerates each
//!   board several times and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print a few words per board:    `cargo run --bin bench_local --release -- -p 5`
//!
//! NOTES
//! -----
//! - Not statistically rigorous; use the same machine and `--release` for comparable numbers.
//! - Boards live in `get_cases()` below. Seeded cases are rolled from the classic dice.
//! - One warm-up run per board, not included in timing.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use std::time::Instant;

use gridwords::board::Board;
use gridwords::dice::DiceBag;
use gridwords::lexicon::Lexicon;
use gridwords::search;
use gridwords::word_list::WordList;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_words.txt")
    )]
    word_list: String,

    /// Minimum word length
    #[arg(short, long, default_value_t = 3)]
    min_length: usize,

    /// Number of repeats per board (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Print up to this many words per board (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// A benchmark board: either explicit faces or a dice seed.
#[derive(Clone)]
enum Case {
    Faces { name: &'static str, rows: usize, cols: usize, faces: &'static str },
    Rolled { seed: u64, rows: usize, cols: usize },
}

fn get_cases() -> Vec<Case> {
    vec![
        Case::Faces { name: "classic-ish", rows: 4, cols: 4, faces: "s e r s p a t g l i n e s e r s" },
        Case::Faces { name: "all-e", rows: 4, cols: 4, faces: "e e e e e e e e e e e e e e e e" },
        Case::Rolled { seed: 1, rows: 4, cols: 4 },
        Case::Rolled { seed: 2, rows: 5, cols: 5 },
        Case::Rolled { seed: 3, rows: 6, cols: 6 },
    ]
}

impl Case {
    fn name(&self) -> String {
        match self {
            Case::Faces { name, .. } => (*name).to_string(),
            Case::Rolled { seed, rows, cols } => format!("dice {rows}x{cols} seed {seed}"),
        }
    }

    fn board(&self) -> Result<Board, gridwords::errors::BoardError> {
        match self {
            Case::Faces { rows, cols, faces, .. } => {
                let faces: Vec<&str> = faces.split_whitespace().collect();
                Board::new(&faces, *rows, *cols)
            }
            Case::Rolled { seed, rows, cols } => {
                DiceBag::classic().roll(*rows, *cols, &mut StdRng::seed_from_u64(*seed))
            }
        }
    }
}

fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    eprintln!("Loading word list from: {}", cli.word_list);
    let t_load = Instant::now();
    let wl = WordList::load_from_path(&cli.word_list)?;
    let lexicon = Lexicon::build(&wl.words, cli.min_length)?;
    eprintln!("Loaded {} words in {:.3}s", lexicon.len(), t_load.elapsed().as_secs_f64());

    let mut summary: Vec<(String, f64, usize)> = Vec::new();

    for (idx, case) in get_cases().iter().enumerate() {
        let board = case.board()?;
        eprintln!("\n[{:02}] {}", idx + 1, case.name());
        eprint!("{board}");

        let _warmup = search::enumerate(&board, &lexicon, cli.min_length);

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last = Vec::new();
        for rep in 0..cli.num_repeats {
            let t = Instant::now();
            let found = search::enumerate(black_box(&board), &lexicon, cli.min_length);
            let secs = t.elapsed().as_secs_f64();
            times.push(secs);
            eprintln!("  run {:>2}/{:>2}: {:.4}s ({} words)", rep + 1, cli.num_repeats, secs, found.len());
            last = found;
        }

        for found in last.iter().take(cli.print_limit) {
            println!("{found}");
        }

        let med = median(times);
        eprintln!("  → median {:.4}s over {} run(s); {} {}", med, cli.num_repeats, last.len(), pluralizer(last.len(), "word"));
        summary.push((case.name(), med, last.len()));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<24} | {:>10} | {:>7}", "board", "median (s)", "# words");
    eprintln!("{:-<24}-+-{:-<10}-+-{:-<7}", "", "", "");
    for (name, med, count) in &summary {
        eprintln!("{name:<24} | {med:>10.4} | {count:>7}");
    }

    Ok(())
}

fn pluralizer(count: usize, singular: &str) -> String {
    if count == 1 {
        singular.to_string()
    } else {
        format!("{singular}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralizer() {
        assert_eq!(pluralizer(0, "word"), "words");
        assert_eq!(pluralizer(1, "word"), "word");
        assert_eq!(pluralizer(2, "word"), "words");
    }

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_cases_build_boards() {
        for case in get_cases() {
            assert!(case.board().is_ok(), "{}", case.name());
        }
    }
}
