//! Word lists for the spelling bee
//!
//! Provides the default dictionary and candidate puzzles compiled into the
//! binary, plus loaders for user-supplied files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, PUZZLES, PUZZLES_COUNT};
pub use loader::{CandidateList, Dictionary, SourceError, WordSource};
