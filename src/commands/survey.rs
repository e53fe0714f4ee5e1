//! Survey command
//!
//! Checks every candidate puzzle against the dictionary.

use crate::generator::{PuzzleSurvey, survey_with};
use crate::wordlists::{CandidateList, Dictionary};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Results of surveying a candidate list
#[derive(Debug)]
pub struct SurveyReport {
    pub results: Vec<PuzzleSurvey>,
    pub duration: Duration,
}

impl SurveyReport {
    #[must_use]
    pub fn playable(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome.as_ref().is_ok_and(|stats| stats.is_playable()))
            .count()
    }

    #[must_use]
    pub fn invalid(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_err()).count()
    }
}

/// Survey the candidate list (or its first `limit` records)
///
/// # Panics
///
/// Will not panic - the progress bar template is a valid constant.
pub fn run_survey(
    candidates: &CandidateList,
    dictionary: &Dictionary,
    limit: Option<usize>,
) -> SurveyReport {
    let puzzles = &candidates.puzzles()[..limit.unwrap_or(candidates.len()).min(candidates.len())];

    println!(
        "🐝 Surveying {} puzzles against {} dictionary words...",
        puzzles.len(),
        dictionary.len()
    );

    let pb = ProgressBar::new(puzzles.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let results = survey_with(puzzles, dictionary, || pb.inc(1));
    pb.finish_with_message("Complete!");

    SurveyReport {
        results,
        duration: start.elapsed(),
    }
}
