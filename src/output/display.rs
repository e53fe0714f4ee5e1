//! Display functions for command results

use super::formatters::{board_text, score_bar, totals_line};
use crate::commands::{SolveReport, SurveyReport};
use crate::core::{PUZZLE_SIZE, WordEntry};
use crate::session::{GuessResult, PuzzleSession};
use colored::Colorize;

/// Print the puzzle board
pub fn print_board(board: &[u8; PUZZLE_SIZE]) {
    println!("\n   {}\n", board_text(board).bright_yellow().bold());
}

/// A found word, pangrams highlighted
#[must_use]
pub fn styled_entry(entry: &WordEntry) -> String {
    let text = entry.to_string();
    if entry.is_pangram() {
        text.bright_blue().bold().to_string()
    } else {
        text
    }
}

/// Print an accepted guess followed by the running totals
pub fn print_guess_result(result: &GuessResult, session: &PuzzleSession) {
    let line = format!("{} ({})", result.word, result.score);
    if result.is_pangram {
        println!("🐝 {} {}", line.bright_blue().bold(), "Pangram!".bright_green());
    } else {
        println!("✓ {}", line.green());
    }
    print_totals(session);
}

/// Print the running totals with a score bar
pub fn print_totals(session: &PuzzleSession) {
    let current = session.current_score();
    let total = session.total_score();
    println!(
        "  {} [{}] {current}/{total}",
        totals_line(session.current_word_count(), current).bright_white(),
        score_bar(current, total, 20).cyan()
    );
}

/// Print every word of a solved puzzle
pub fn print_solve_result(report: &SolveReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle: {}",
        report.puzzle.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for entry in &report.entries {
        println!("  {}", styled_entry(entry));
    }

    println!();
    println!(
        "{}",
        totals_line(report.total_words, report.total_score)
            .green()
            .bold()
    );
    if report.pangrams == 0 {
        println!("{}", "No pangram for this puzzle.".yellow());
    }
}

/// Print the survey of a candidate list
pub fn print_survey_report(report: &SurveyReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CANDIDATE SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for result in &report.results {
        match &result.outcome {
            Ok(stats) => {
                let mark = if stats.is_playable() {
                    "✓".green()
                } else {
                    "✗".yellow()
                };
                println!(
                    "  {mark} {}  {:>4} words  {:>2} pangrams  {:>5} points  best {:>3}",
                    result.puzzle.bright_white().bold(),
                    stats.words,
                    stats.pangrams,
                    stats.total_score,
                    stats.max_score
                );
            }
            Err(e) => {
                println!("  {} {}  {}", "✗".red(), result.puzzle.red(), e);
            }
        }
    }

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Candidates:  {}", report.results.len());
    println!(
        "   Playable:    {}",
        format!("{}", report.playable()).green().bold()
    );
    println!("   Invalid:     {}", report.invalid());
    println!("   Time taken:  {:.2}s", report.duration.as_secs_f64());
}
