//! Core domain types for the spelling bee
//!
//! Puzzle letters, word entries with their scores, and the guess rules. Pure
//! and independent of any word source or user interface.

mod entry;
mod puzzle;
mod rules;

pub use entry::{PANGRAM_BONUS, WordEntry, score_word};
pub use puzzle::{MIN_WORD_LEN, PUZZLE_SIZE, PuzzleError, PuzzleSpec, shuffle_board};
pub use rules::{GuessError, check_letters};
