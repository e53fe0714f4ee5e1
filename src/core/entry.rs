//! Word table entries and scoring

use super::puzzle::{MIN_WORD_LEN, PuzzleSpec};
use std::fmt;

/// Points added for a word using all seven letters
pub const PANGRAM_BONUS: u32 = 7;

/// Score a word from its length and pangram flag
///
/// A minimum-length word is worth 1 point, longer words are worth their length,
/// and pangrams earn a bonus on top.
///
/// # Examples
/// ```
/// use spelling_bee::core::score_word;
///
/// assert_eq!(score_word(4, false), 1);
/// assert_eq!(score_word(5, false), 5);
/// assert_eq!(score_word(7, true), 14);
/// ```
#[must_use]
pub const fn score_word(len: usize, is_pangram: bool) -> u32 {
    let base = if len == MIN_WORD_LEN { 1 } else { len as u32 };
    if is_pangram { base + PANGRAM_BONUS } else { base }
}

/// A dictionary word accepted for the current puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    score: u32,
    is_pangram: bool,
    discovered: bool,
}

impl WordEntry {
    /// Build an undiscovered entry for a word that already passed `spec.matches`
    #[must_use]
    pub fn new(word: impl Into<String>, spec: &PuzzleSpec) -> Self {
        let word = word.into().to_ascii_lowercase();
        let is_pangram = spec.is_pangram(&word);

        Self {
            score: score_word(word.len(), is_pangram),
            word,
            is_pangram,
            discovered: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn is_pangram(&self) -> bool {
        self.is_pangram
    }

    #[inline]
    #[must_use]
    pub const fn is_discovered(&self) -> bool {
        self.discovered
    }

    /// Flag the entry as found; returns whether it was previously hidden
    pub(crate) fn mark_discovered(&mut self) -> bool {
        let was_hidden = !self.discovered;
        self.discovered = true;
        was_hidden
    }
}

/// Renders as `word (score)`
impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.score)
    }
}
