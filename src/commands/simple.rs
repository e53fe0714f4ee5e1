//! Simple interactive CLI mode
//!
//! Text-based game without TUI

use super::sources::GameSources;
use crate::core::{PUZZLE_SIZE, shuffle_board};
use crate::output::display::styled_entry;
use crate::output::formatters::totals_line;
use crate::output::{print_board, print_guess_result, print_totals};
use crate::session::PuzzleSession;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Guess(String),
    Puzzle(String),
    Shuffle,
    Random,
    Solve,
    Score,
    Help,
    Quit,
    Blank,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let Some(command) = line.strip_prefix(':') else {
        return if line.is_empty() {
            Input::Blank
        } else {
            Input::Guess(line.to_string())
        };
    };

    let mut parts = command.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next().unwrap_or_default().trim();

    match name.as_str() {
        "puzzle" | "p" => Input::Puzzle(arg.to_string()),
        "shuffle" | "s" => Input::Shuffle,
        "random" | "r" => Input::Random,
        "solve" => Input::Solve,
        "score" => Input::Score,
        "help" | "h" | "?" => Input::Help,
        "quit" | "q" | "exit" => Input::Quit,
        _ => Input::Unknown(line.to_string()),
    }
}

fn print_help() {
    println!("Type a word to guess it. Commands:");
    println!("  :puzzle LETTERS  start a puzzle (center letter first)");
    println!("  :shuffle         rearrange the outer letters");
    println!("  :random          start a random puzzle");
    println!("  :solve           reveal every word");
    println!("  :score           show found words and totals");
    println!("  :quit            exit\n");
}

fn start_puzzle(session: &PuzzleSession, board: &mut [u8; PUZZLE_SIZE]) {
    *board = *session.spec().letters();
    print_board(board);
    if !session.has_pangram() {
        println!("{}", "Note: this puzzle has no pangram.".yellow());
    }
}

/// Run the simple interactive CLI mode
///
/// Reads commands and guesses line by line until `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_simple<R: BufRead>(sources: &GameSources, mut reader: R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Spelling Bee - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    if let Some(e) = &sources.dictionary_error {
        println!("{}", format!("⚠ {e}").red());
    }
    print_help();

    let mut rng = rand::rng();
    let mut session = sources.random_session(&mut rng);
    let mut board = *session.spec().letters();
    start_puzzle(&session, &mut board);

    loop {
        print!("{} ", "guess>".bright_black());
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        if reader
            .read_line(&mut line)
            .context("failed to read input")?
            == 0
        {
            println!();
            return Ok(());
        }

        match parse_input(&line) {
            Input::Guess(word) => match session.check_guess(&word) {
                Ok(result) => print_guess_result(&result, &session),
                Err(e) => println!("{}", e.to_string().red()),
            },
            Input::Puzzle(raw) => match sources.new_session(&raw) {
                Ok(next) => {
                    session = next;
                    start_puzzle(&session, &mut board);
                }
                Err(e) => println!("{}", e.to_string().red()),
            },
            Input::Shuffle => {
                board = shuffle_board(board, &mut rng);
                print_board(&board);
            }
            Input::Random => {
                session = sources.random_session(&mut rng);
                start_puzzle(&session, &mut board);
            }
            Input::Solve => {
                let result = session.solve_all();
                for entry in result.entries {
                    println!("  {}", styled_entry(entry));
                }
                println!(
                    "{}",
                    totals_line(result.total_words, result.total_score)
                        .green()
                        .bold()
                );
            }
            Input::Score => {
                for entry in session.discovered() {
                    println!("  {}", styled_entry(entry));
                }
                print_totals(&session);
            }
            Input::Help => print_help(),
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::Blank => {}
            Input::Unknown(command) => {
                println!("{}", format!("Unknown command '{command}'. Try :help").red());
            }
        }
    }
}
