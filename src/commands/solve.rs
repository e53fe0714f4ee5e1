//! Solve command
//!
//! Reveals every word of a puzzle at once.

use crate::core::{PuzzleError, WordEntry};
use crate::session::PuzzleSession;
use crate::wordlists::Dictionary;

/// Every word of a solved puzzle
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub puzzle: String,
    pub entries: Vec<WordEntry>,
    pub total_words: usize,
    pub total_score: u32,
    pub pangrams: usize,
}

/// Build a puzzle and reveal all of its words
///
/// # Errors
///
/// Returns the `PuzzleError` of the first puzzle rule the input breaks.
pub fn solve_puzzle(raw: &str, dictionary: &Dictionary) -> Result<SolveReport, PuzzleError> {
    let mut session = PuzzleSession::create(raw.trim(), dictionary)?;
    let puzzle = session.spec().to_string();
    let result = session.solve_all();

    Ok(SolveReport {
        puzzle,
        entries: result.entries.to_vec(),
        total_words: result.total_words,
        total_score: result.total_score,
        pangrams: result.entries.iter().filter(|e| e.is_pangram()).count(),
    })
}
