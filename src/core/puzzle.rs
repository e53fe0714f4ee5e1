//! Puzzle letter set representation
//!
//! A `PuzzleSpec` stores the seven distinct puzzle letters (center letter first)
//! along with a letter mask for fast membership checks.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// Number of letters on a puzzle board
pub const PUZZLE_SIZE: usize = 7;

/// Minimum length of an acceptable word
pub const MIN_WORD_LEN: usize = 4;

/// Error type for invalid puzzle strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleError {
    NonLetterCharacter,
    RepeatedLetter,
    WrongLength,
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonLetterCharacter => write!(f, "Input string contains non-letter symbols."),
            Self::RepeatedLetter => write!(f, "Input string contains repeated letters."),
            Self::WrongLength => {
                write!(f, "Input string does not contain exactly {PUZZLE_SIZE} characters.")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

/// A violation check paired with the error it reports
type PuzzleRule = (PuzzleError, fn(&str) -> bool);

/// Checked in order; the first violated rule is the one reported.
const PUZZLE_RULES: [PuzzleRule; 3] = [
    (PuzzleError::NonLetterCharacter, has_non_letter),
    (PuzzleError::RepeatedLetter, has_repeated_letter),
    (PuzzleError::WrongLength, has_wrong_length),
];

fn has_non_letter(raw: &str) -> bool {
    !raw.chars().all(|c| c.is_ascii_alphabetic())
}

fn has_repeated_letter(raw: &str) -> bool {
    let mut seen = 0u32;
    for byte in raw.bytes() {
        if let Some(bit) = letter_bit(byte) {
            if seen & bit != 0 {
                return true;
            }
            seen |= bit;
        }
    }
    false
}

fn has_wrong_length(raw: &str) -> bool {
    raw.chars().count() != PUZZLE_SIZE
}

/// Bit for an ASCII letter in a 26-bit alphabet mask (case-insensitive)
#[inline]
pub(crate) fn letter_bit(byte: u8) -> Option<u32> {
    byte.is_ascii_alphabetic()
        .then(|| 1 << (byte.to_ascii_lowercase() - b'a'))
}

/// Mask of every letter used by `word`, or `None` if it contains a non-letter
pub(crate) fn letter_mask(word: &str) -> Option<u32> {
    word.bytes()
        .try_fold(0u32, |mask, byte| letter_bit(byte).map(|bit| mask | bit))
}

/// A validated seven-letter puzzle
///
/// Letters are stored lowercase in their input order; the first one is the
/// center letter that every accepted word must contain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PuzzleSpec {
    text: String,
    letters: [u8; PUZZLE_SIZE],
    mask: u32,
}

impl PuzzleSpec {
    /// Create a new puzzle from a raw string
    ///
    /// # Errors
    /// Returns the first violated rule, checked in this order:
    /// - `NonLetterCharacter` if anything other than A-Z/a-z appears
    /// - `RepeatedLetter` if a letter appears twice (case-insensitive)
    /// - `WrongLength` if there are not exactly 7 letters
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::{PuzzleError, PuzzleSpec};
    ///
    /// let spec = PuzzleSpec::new("ACEGIOP").unwrap();
    /// assert_eq!(spec.as_str(), "acegiop");
    /// assert_eq!(spec.center(), 'a');
    ///
    /// assert_eq!(PuzzleSpec::new("abc-efg"), Err(PuzzleError::NonLetterCharacter));
    /// assert_eq!(PuzzleSpec::new("abcdefa"), Err(PuzzleError::RepeatedLetter));
    /// assert_eq!(PuzzleSpec::new("abcdef"), Err(PuzzleError::WrongLength));
    /// ```
    pub fn new(raw: &str) -> Result<Self, PuzzleError> {
        if let Some((error, _)) = PUZZLE_RULES.iter().find(|(_, violated)| violated(raw)) {
            return Err(*error);
        }

        let text = raw.to_ascii_lowercase();
        let mut letters = [0u8; PUZZLE_SIZE];
        letters.copy_from_slice(text.as_bytes());
        let mask = letter_mask(&text).unwrap_or_default();

        Ok(Self {
            text,
            letters,
            mask,
        })
    }

    /// Canonical lowercase letters, center first
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; PUZZLE_SIZE] {
        &self.letters
    }

    /// The letter every accepted word must contain
    #[inline]
    #[must_use]
    pub const fn center(&self) -> char {
        self.letters[0] as char
    }

    /// Check whether `letter` is one of the puzzle letters (case-insensitive)
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        u8::try_from(letter)
            .ok()
            .and_then(letter_bit)
            .is_some_and(|bit| self.mask & bit != 0)
    }

    /// Check that every character of `word` is a puzzle letter
    #[must_use]
    pub fn uses_only_puzzle_letters(&self, word: &str) -> bool {
        letter_mask(word).is_some_and(|used| used & !self.mask == 0)
    }

    /// Check that `word` contains the center letter
    #[must_use]
    pub fn uses_center(&self, word: &str) -> bool {
        word.bytes()
            .any(|byte| byte.to_ascii_lowercase() == self.letters[0])
    }

    /// Dictionary filter: at least 4 letters, only puzzle letters, center used
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::PuzzleSpec;
    ///
    /// let spec = PuzzleSpec::new("abcdefg").unwrap();
    /// assert!(spec.matches("badge"));
    /// assert!(spec.matches("CAGE"));
    /// assert!(!spec.matches("bed"));    // too short
    /// assert!(!spec.matches("deed"));   // no center letter
    /// assert!(!spec.matches("basket")); // letters outside the puzzle
    /// ```
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        word.len() >= MIN_WORD_LEN && self.uses_only_puzzle_letters(word) && self.uses_center(word)
    }

    /// Check whether `word` uses all seven puzzle letters
    ///
    /// Assumes `word` already passed `matches`.
    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        letter_mask(word) == Some(self.mask)
    }

    /// The puzzle letters rearranged for display, center kept first
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> [u8; PUZZLE_SIZE] {
        shuffle_board(self.letters, rng)
    }
}

/// Randomly rearrange a board, keeping the center letter at position 0
///
/// # Examples
/// ```
/// use spelling_bee::core::shuffle_board;
///
/// let board = shuffle_board(*b"acegiop", &mut rand::rng());
/// assert_eq!(board[0], b'a');
/// ```
#[must_use]
pub fn shuffle_board<R: Rng + ?Sized>(
    mut board: [u8; PUZZLE_SIZE],
    rng: &mut R,
) -> [u8; PUZZLE_SIZE] {
    board[1..].shuffle(rng);
    board
}

impl fmt::Display for PuzzleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for PuzzleSpec {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn puzzle_creation_valid() {
        let spec = PuzzleSpec::new("abcdefg").unwrap();
        assert_eq!(spec.as_str(), "abcdefg");
        assert_eq!(spec.letters(), b"abcdefg");
        assert_eq!(spec.center(), 'a');
    }

    #[test]
    fn puzzle_creation_uppercase_normalized() {
        let spec = PuzzleSpec::new("GaBcDeF").unwrap();
        assert_eq!(spec.as_str(), "gabcdef");
        assert_eq!(spec.center(), 'g');
    }

    #[test]
    fn puzzle_wrong_length() {
        assert_eq!(PuzzleSpec::new(""), Err(PuzzleError::WrongLength));
        assert_eq!(PuzzleSpec::new("abcdef"), Err(PuzzleError::WrongLength));
        assert_eq!(PuzzleSpec::new("abcdefgh"), Err(PuzzleError::WrongLength));
    }

    #[test]
    fn puzzle_repeated_letter() {
        assert_eq!(PuzzleSpec::new("abcdeff"), Err(PuzzleError::RepeatedLetter));
        assert_eq!(PuzzleSpec::new("Abcdefa"), Err(PuzzleError::RepeatedLetter));
    }

    #[test]
    fn puzzle_non_letter() {
        assert_eq!(PuzzleSpec::new("abc1efg"), Err(PuzzleError::NonLetterCharacter));
        assert_eq!(PuzzleSpec::new("abc efg"), Err(PuzzleError::NonLetterCharacter));
        assert_eq!(PuzzleSpec::new("abcdéfg"), Err(PuzzleError::NonLetterCharacter));
    }

    #[test]
    fn puzzle_error_precedence() {
        // Repeats and wrong length: repeat wins
        assert_eq!(PuzzleSpec::new("aab"), Err(PuzzleError::RepeatedLetter));
        assert_eq!(PuzzleSpec::new("aabcdefgh"), Err(PuzzleError::RepeatedLetter));
        // Symbols beat everything
        assert_eq!(PuzzleSpec::new("aa!"), Err(PuzzleError::NonLetterCharacter));
        assert_eq!(PuzzleSpec::new("a-a-a-a-a"), Err(PuzzleError::NonLetterCharacter));
    }

    #[test]
    fn puzzle_error_messages() {
        assert_eq!(
            PuzzleError::NonLetterCharacter.to_string(),
            "Input string contains non-letter symbols."
        );
        assert_eq!(
            PuzzleError::RepeatedLetter.to_string(),
            "Input string contains repeated letters."
        );
        assert_eq!(
            PuzzleError::WrongLength.to_string(),
            "Input string does not contain exactly 7 characters."
        );
    }

    #[test]
    fn puzzle_canonical_round_trip() {
        let spec = PuzzleSpec::new("QwErTyU").unwrap();
        let again = PuzzleSpec::new(spec.as_str()).unwrap();
        assert_eq!(spec, again);
        assert_eq!(again.to_string(), "qwertyu");
    }

    #[test]
    fn puzzle_from_str() {
        let spec: PuzzleSpec = "acegiop".parse().unwrap();
        assert_eq!(spec.center(), 'a');
        assert!("acegio".parse::<PuzzleSpec>().is_err());
    }

    #[test]
    fn puzzle_contains() {
        let spec = PuzzleSpec::new("abcdefg").unwrap();
        assert!(spec.contains('a'));
        assert!(spec.contains('G'));
        assert!(!spec.contains('z'));
        assert!(!spec.contains('1'));
        assert!(!spec.contains('é'));
    }

    #[test]
    fn matcher_rules() {
        let spec = PuzzleSpec::new("abcdefg").unwrap();
        assert!(spec.matches("cage"));
        assert!(spec.matches("aced"));
        assert!(spec.matches("Badge"));
        assert!(spec.matches("aaaa")); // letters may repeat
        assert!(!spec.matches("ace"));
        assert!(!spec.matches("deed"));
        assert!(!spec.matches("cages"));
        assert!(!spec.matches("ca-ge"));
    }

    #[test]
    fn pangram_detection() {
        let spec = PuzzleSpec::new("aceprtu").unwrap();
        assert!(spec.is_pangram("capture"));
        assert!(!spec.is_pangram("captured"));
        assert!(!spec.is_pangram("acute"));
    }

    #[test]
    fn letter_mask_rejects_non_letters() {
        assert_eq!(letter_mask("ab"), Some(0b11));
        assert_eq!(letter_mask("AB"), Some(0b11));
        assert_eq!(letter_mask("a b"), None);
        assert_eq!(letter_mask(""), Some(0));
    }

    #[test]
    fn shuffle_keeps_center() {
        let mut rng = StdRng::seed_from_u64(7);
        let spec = PuzzleSpec::new("acegiop").unwrap();

        for _ in 0..50 {
            let board = spec.shuffled(&mut rng);
            assert_eq!(board[0], b'a');

            let mut sorted = board;
            sorted.sort_unstable();
            assert_eq!(&sorted, b"acegiop");
        }
    }

    #[test]
    fn shuffle_eventually_reorders() {
        let mut rng = StdRng::seed_from_u64(42);
        let original = *b"acegiop";
        let changed = (0..20).any(|_| shuffle_board(original, &mut rng) != original);
        assert!(changed);
    }
}
