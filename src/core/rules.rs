//! Guess validation rules
//!
//! Rules are evaluated in a fixed order and the first failure is reported, so a
//! guess that breaks several rules always yields the same message.

use super::puzzle::{MIN_WORD_LEN, PuzzleSpec};
use std::fmt;

/// Reasons a guess is rejected, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    TooShort,
    InvalidLetter,
    MissingCenterLetter,
    NotInDictionary,
    AlreadyFound,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "Not enough letters."),
            Self::InvalidLetter => write!(f, "Word uses invalid letter."),
            Self::MissingCenterLetter => write!(f, "Word does not use center letter."),
            Self::NotInDictionary => write!(f, "Word was not found in dictionary."),
            Self::AlreadyFound => write!(f, "Already found."),
        }
    }
}

impl std::error::Error for GuessError {}

/// A violation check paired with the error it reports
type GuessRule = (GuessError, fn(&PuzzleSpec, &str) -> bool);

/// Rules that depend only on the puzzle letters. Dictionary membership and
/// discovery state are checked afterwards against the word table.
const LETTER_RULES: [GuessRule; 3] = [
    (GuessError::TooShort, is_too_short),
    (GuessError::InvalidLetter, has_foreign_letter),
    (GuessError::MissingCenterLetter, lacks_center),
];

fn is_too_short(_: &PuzzleSpec, word: &str) -> bool {
    word.chars().count() < MIN_WORD_LEN
}

fn has_foreign_letter(spec: &PuzzleSpec, word: &str) -> bool {
    !spec.uses_only_puzzle_letters(word)
}

fn lacks_center(spec: &PuzzleSpec, word: &str) -> bool {
    !spec.uses_center(word)
}

/// Apply the letter rules to a guess
///
/// # Errors
/// Returns `TooShort`, `InvalidLetter` or `MissingCenterLetter`, whichever is
/// violated first.
///
/// # Examples
/// ```
/// use spelling_bee::core::{GuessError, PuzzleSpec, check_letters};
///
/// let spec = PuzzleSpec::new("abcdefg").unwrap();
/// assert_eq!(check_letters(&spec, "cab"), Err(GuessError::TooShort));
/// assert_eq!(check_letters(&spec, "cabs"), Err(GuessError::InvalidLetter));
/// assert_eq!(check_letters(&spec, "deed"), Err(GuessError::MissingCenterLetter));
/// assert_eq!(check_letters(&spec, "cage"), Ok(()));
/// ```
pub fn check_letters(spec: &PuzzleSpec, word: &str) -> Result<(), GuessError> {
    match LETTER_RULES.iter().find(|(_, violated)| violated(spec, word)) {
        Some((error, _)) => Err(*error),
        None => Ok(()),
    }
}
