//! Puzzle sessions
//!
//! A session owns one puzzle and the words the dictionary accepts for it, and
//! tracks which of those words have been discovered.

mod engine;
mod table;

pub use engine::{GuessResult, PuzzleSession, SolveResult};
pub use table::WordTable;
