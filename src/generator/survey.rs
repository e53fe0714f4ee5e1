//! Candidate puzzle survey
//!
//! Measures how many words, pangrams and points each candidate puzzle offers
//! under a dictionary.

use crate::core::{PuzzleError, PuzzleSpec};
use crate::session::WordTable;
use crate::wordlists::Dictionary;
use rayon::prelude::*;
use std::ops::RangeInclusive;

/// Word counts that make a comfortable puzzle
pub const PLAYABLE_WORDS: RangeInclusive<usize> = 21..=81;

/// Word statistics for one valid puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyStats {
    pub words: usize,
    pub pangrams: usize,
    pub total_score: u32,
    pub max_score: u32,
}

impl SurveyStats {
    /// Has a pangram and a word count in `PLAYABLE_WORDS`
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.pangrams > 0 && PLAYABLE_WORDS.contains(&self.words)
    }
}

/// Survey result for one candidate record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSurvey {
    pub puzzle: String,
    pub outcome: Result<SurveyStats, PuzzleError>,
}

/// Survey a single puzzle string
#[must_use]
pub fn survey_puzzle(puzzle: &str, dictionary: &Dictionary) -> PuzzleSurvey {
    let outcome = PuzzleSpec::new(puzzle).map(|spec| {
        let table = WordTable::load(&spec, dictionary.words());
        SurveyStats {
            words: table.len(),
            pangrams: table.pangram_count(),
            total_score: table.total_score(),
            max_score: table.max_score(),
        }
    });

    PuzzleSurvey {
        puzzle: puzzle.to_string(),
        outcome,
    }
}

/// Survey every candidate in parallel, preserving candidate order
#[must_use]
pub fn survey(candidates: &[String], dictionary: &Dictionary) -> Vec<PuzzleSurvey> {
    survey_with(candidates, dictionary, || {})
}

/// Like `survey`, calling `on_done` after each candidate (for progress display)
pub fn survey_with<F>(candidates: &[String], dictionary: &Dictionary, on_done: F) -> Vec<PuzzleSurvey>
where
    F: Fn() + Sync,
{
    candidates
        .par_iter()
        .map(|puzzle| {
            let result = survey_puzzle(puzzle, dictionary);
            on_done();
            result
        })
        .collect()
}
