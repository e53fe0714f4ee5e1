//! Spelling Bee - CLI
//!
//! Spelling bee game with TUI and CLI modes, plus solving and puzzle survey tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use spelling_bee::{
    commands::{GameSources, run_simple, run_survey, solve_puzzle},
    generator::generate_or_default,
    output::{print_board, print_solve_result, print_survey_report},
    wordlists::{CandidateList, Dictionary, WordSource},
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Spelling bee word game: find words from seven letters, always using the center one",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file (whitespace-separated words); defaults to the built-in list
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Candidate puzzle file (one puzzle per line or `;`); defaults to the built-in list
    #[arg(short, long, global = true)]
    puzzles: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// List every word of a puzzle with its score
    Solve {
        /// Seven distinct letters, center letter first
        puzzle: String,
    },

    /// Print a random puzzle from the candidate list
    Random,

    /// Count words, pangrams and points for each candidate puzzle
    Survey {
        /// Limit number of puzzles to survey
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let dictionary = WordSource::from_path(cli.dictionary);
    let puzzles = WordSource::from_path(cli.puzzles);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, puzzles),
        Commands::Simple => run_simple_command(&dictionary, puzzles),
        Commands::Solve { puzzle } => run_solve_command(&puzzle, &dictionary),
        Commands::Random => {
            run_random_command(&puzzles);
            Ok(())
        }
        Commands::Survey { limit } => run_survey_command(&dictionary, &puzzles, limit),
    }
}

fn run_solve_command(puzzle: &str, dictionary: &WordSource) -> Result<()> {
    let words = Dictionary::load(dictionary).context("failed to load dictionary")?;
    let report = solve_puzzle(puzzle, &words).with_context(|| format!("invalid puzzle '{puzzle}'"))?;

    print_solve_result(&report);
    Ok(())
}

fn run_random_command(puzzles: &WordSource) {
    let spec = generate_or_default(puzzles, &mut rand::rng());
    println!("{}", spec.as_str().bright_white().bold());
    print_board(spec.letters());
}

fn run_survey_command(
    dictionary: &WordSource,
    puzzles: &WordSource,
    limit: Option<usize>,
) -> Result<()> {
    let words = Dictionary::load(dictionary).context("failed to load dictionary")?;
    let candidates = CandidateList::load(puzzles).context("failed to load candidate puzzles")?;

    println!("\n{}", "═".repeat(60));
    println!(" Spelling Bee Candidate Survey ");
    println!("{}", "═".repeat(60));
    println!("\nDictionary: {dictionary}");
    println!("Candidates: {puzzles}\n");

    let report = run_survey(&candidates, &words, limit);
    print_survey_report(&report);
    Ok(())
}

fn run_simple_command(dictionary: &WordSource, puzzles: WordSource) -> Result<()> {
    let sources = GameSources::load(dictionary, puzzles);
    run_simple(&sources, io::stdin().lock())
}

fn run_play_command(dictionary: &WordSource, puzzles: WordSource) -> Result<()> {
    use spelling_bee::interactive::{App, run_tui};

    let sources = GameSources::load(dictionary, puzzles);
    let app = App::new(&sources);
    run_tui(app)
}
