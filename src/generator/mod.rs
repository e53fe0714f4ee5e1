//! Puzzle generation
//!
//! Random selection from a precomputed candidate list, and surveys of how
//! well each candidate plays against a dictionary.

mod random;
pub mod survey;

pub use random::{
    DEFAULT_PUZZLE, GenerateError, default_puzzle, generate_from_source, generate_or_default,
    generate_random,
};
pub use survey::{PLAYABLE_WORDS, PuzzleSurvey, SurveyStats, survey, survey_puzzle, survey_with};
