//! Random puzzle selection from a precomputed candidate list

use crate::core::{PuzzleError, PuzzleSpec};
use crate::wordlists::{CandidateList, SourceError, WordSource};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Puzzle used when no candidate can be generated
pub const DEFAULT_PUZZLE: &str = "acegiop";

/// Error type for random puzzle generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The candidate list could not be read
    Source(SourceError),
    /// The candidate list has no records
    Empty,
    /// The chosen record is not a valid puzzle
    InvalidCandidate { puzzle: String, error: PuzzleError },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(e) => write!(f, "{e}"),
            Self::Empty => write!(f, "Candidate puzzle list is empty."),
            Self::InvalidCandidate { puzzle, error } => {
                write!(f, "Candidate puzzle '{puzzle}' is invalid: {error}")
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(e) => Some(e),
            Self::InvalidCandidate { error, .. } => Some(error),
            Self::Empty => None,
        }
    }
}

impl From<SourceError> for GenerateError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

/// Pick a puzzle uniformly at random from a candidate list
///
/// # Errors
///
/// Returns `Empty` for an empty list and `InvalidCandidate` if the chosen
/// record fails puzzle validation.
///
/// # Examples
/// ```
/// use spelling_bee::generator::generate_random;
/// use spelling_bee::wordlists::CandidateList;
///
/// let candidates = CandidateList::from_text("aceprtu;agiknpr");
/// let spec = generate_random(&candidates, &mut rand::rng()).unwrap();
/// assert!(["aceprtu", "agiknpr"].contains(&spec.as_str()));
/// ```
pub fn generate_random<R: Rng + ?Sized>(
    candidates: &CandidateList,
    rng: &mut R,
) -> Result<PuzzleSpec, GenerateError> {
    let puzzle = candidates.puzzles().choose(rng).ok_or(GenerateError::Empty)?;
    log::debug!("picked {puzzle} from {} candidates", candidates.len());

    PuzzleSpec::new(puzzle).map_err(|error| GenerateError::InvalidCandidate {
        puzzle: puzzle.clone(),
        error,
    })
}

/// Read the candidate list from `source` and pick a puzzle from it
///
/// # Errors
///
/// Returns `Source` if the list cannot be read, otherwise as `generate_random`.
pub fn generate_from_source<R: Rng + ?Sized>(
    source: &WordSource,
    rng: &mut R,
) -> Result<PuzzleSpec, GenerateError> {
    let candidates = CandidateList::load(source)?;
    generate_random(&candidates, rng)
}

/// Pick a random puzzle, falling back to the default puzzle on any failure
pub fn generate_or_default<R: Rng + ?Sized>(source: &WordSource, rng: &mut R) -> PuzzleSpec {
    generate_from_source(source, rng).unwrap_or_else(|e| {
        log::warn!("random puzzle unavailable, using {DEFAULT_PUZZLE}: {e}");
        default_puzzle()
    })
}

/// The fixed fallback puzzle
///
/// # Panics
/// Will not panic - `DEFAULT_PUZZLE` is a valid puzzle.
#[must_use]
pub fn default_puzzle() -> PuzzleSpec {
    PuzzleSpec::new(DEFAULT_PUZZLE).expect("default puzzle is valid")
}
