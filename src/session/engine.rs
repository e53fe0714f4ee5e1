//! Puzzle session: guesses, solve-all and score tracking

use super::table::WordTable;
use crate::core::{GuessError, PuzzleError, PuzzleSpec, WordEntry, check_letters};
use crate::wordlists::{Dictionary, SourceError, WordSource};

/// An accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub word: String,
    pub score: u32,
    pub is_pangram: bool,
}

/// Outcome of revealing every word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult<'a> {
    /// Every entry in dictionary order, all discovered
    pub entries: &'a [WordEntry],
    pub total_score: u32,
    pub total_words: usize,
    /// Entries that were still hidden before solving
    pub revealed: usize,
}

/// One active puzzle and its word table
///
/// Score and word count are always derived from the entries' discovered flags.
/// Starting a new puzzle means building a new session.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    spec: PuzzleSpec,
    table: WordTable,
    source_error: Option<SourceError>,
}

impl PuzzleSession {
    /// Build a session for a validated puzzle from an in-memory dictionary
    #[must_use]
    pub fn new(spec: PuzzleSpec, dictionary: &Dictionary) -> Self {
        Self::with_words(spec, dictionary.words())
    }

    #[must_use]
    pub fn with_words<S: AsRef<str> + Sync>(spec: PuzzleSpec, words: &[S]) -> Self {
        let table = WordTable::load(&spec, words);
        log::info!(
            "new puzzle {spec}: {} words, {} points available",
            table.len(),
            table.total_score()
        );

        Self {
            spec,
            table,
            source_error: None,
        }
    }

    /// Validate a raw puzzle string and build its session
    ///
    /// # Errors
    ///
    /// Returns the `PuzzleError` of the first puzzle rule the input breaks.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::session::PuzzleSession;
    /// use spelling_bee::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["badge", "cage", "deed"]);
    /// let mut session = PuzzleSession::create("abcdefg", &dictionary).unwrap();
    ///
    /// let found = session.check_guess("badge").unwrap();
    /// assert_eq!(found.score, 5);
    /// assert_eq!(session.current_score(), 5);
    /// assert_eq!(session.current_word_count(), 1);
    /// ```
    pub fn create(raw: &str, dictionary: &Dictionary) -> Result<Self, PuzzleError> {
        Ok(Self::new(PuzzleSpec::new(raw)?, dictionary))
    }

    /// Validate a raw puzzle string and read its dictionary from `source`
    ///
    /// An unreadable source is a soft failure: the session is created with an
    /// empty word table and the error is kept in `source_error`.
    ///
    /// # Errors
    ///
    /// Returns the `PuzzleError` of the first puzzle rule the input breaks.
    pub fn load(raw: &str, source: &WordSource) -> Result<Self, PuzzleError> {
        let spec = PuzzleSpec::new(raw)?;

        match Dictionary::load(source) {
            Ok(dictionary) => Ok(Self::new(spec, &dictionary)),
            Err(e) => {
                log::warn!("dictionary unavailable, puzzle {spec} has no words: {e}");
                Ok(Self {
                    spec,
                    table: WordTable::default(),
                    source_error: Some(e),
                })
            }
        }
    }

    /// Check a guess and record it when accepted
    ///
    /// The guess is trimmed and lowercased first. Nothing changes on error.
    ///
    /// # Errors
    ///
    /// Rules are checked in order and the first failure is returned:
    /// `TooShort`, `InvalidLetter`, `MissingCenterLetter`, `NotInDictionary`,
    /// `AlreadyFound`.
    pub fn check_guess(&mut self, guess: &str) -> Result<GuessResult, GuessError> {
        let word = guess.trim().to_ascii_lowercase();
        check_letters(&self.spec, &word)?;

        let entry = self
            .table
            .get_mut(&word)
            .ok_or(GuessError::NotInDictionary)?;
        if entry.is_discovered() {
            return Err(GuessError::AlreadyFound);
        }
        entry.mark_discovered();

        log::debug!("found {entry}");
        Ok(GuessResult {
            word: entry.word().to_string(),
            score: entry.score(),
            is_pangram: entry.is_pangram(),
        })
    }

    /// Reveal every word of the puzzle
    ///
    /// Afterwards every guess of a table word fails with `AlreadyFound`.
    pub fn solve_all(&mut self) -> SolveResult<'_> {
        let revealed = self
            .table
            .entries_mut()
            .iter_mut()
            .map(WordEntry::mark_discovered)
            .filter(|&newly| newly)
            .count();

        log::info!(
            "solved puzzle {}: revealed {revealed} of {} words",
            self.spec,
            self.table.len()
        );

        SolveResult {
            entries: self.table.entries(),
            total_score: self.table.total_score(),
            total_words: self.table.len(),
            revealed,
        }
    }

    /// Sum of scores over discovered words
    #[must_use]
    pub fn current_score(&self) -> u32 {
        self.discovered().map(WordEntry::score).sum()
    }

    /// Number of discovered words
    #[must_use]
    pub fn current_word_count(&self) -> usize {
        self.discovered().count()
    }

    /// Discovered entries in dictionary order
    pub fn discovered(&self) -> impl Iterator<Item = &WordEntry> {
        self.table.entries().iter().filter(|e| e.is_discovered())
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.table.total_score()
    }

    #[must_use]
    pub fn total_words(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub const fn has_pangram(&self) -> bool {
        self.table.has_pangram()
    }

    /// True once every word has been discovered
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.table.entries().iter().all(WordEntry::is_discovered)
    }

    #[inline]
    #[must_use]
    pub const fn spec(&self) -> &PuzzleSpec {
        &self.spec
    }

    #[inline]
    #[must_use]
    pub const fn table(&self) -> &WordTable {
        &self.table
    }

    /// Why the word table is empty, if the dictionary could not be read
    #[inline]
    #[must_use]
    pub const fn source_error(&self) -> Option<&SourceError> {
        self.source_error.as_ref()
    }
}
