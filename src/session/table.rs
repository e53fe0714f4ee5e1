//! Word table built by filtering a dictionary against a puzzle

use crate::core::{PuzzleSpec, WordEntry};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Accepted words for one puzzle, in dictionary scan order
///
/// Entries are never removed; only their discovered flag changes.
#[derive(Debug, Clone, Default)]
pub struct WordTable {
    entries: Vec<WordEntry>,
    index: FxHashMap<String, usize>,
    has_pangram: bool,
}

impl WordTable {
    /// Filter `words` against the puzzle matcher
    ///
    /// Words are keyed in lowercase; a word seen again later in the scan keeps
    /// its first position.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::PuzzleSpec;
    /// use spelling_bee::session::WordTable;
    ///
    /// let spec = PuzzleSpec::new("abcdefg").unwrap();
    /// let table = WordTable::load(&spec, &["badge", "deed", "cage", "bed"]);
    ///
    /// let words: Vec<&str> = table.entries().iter().map(|e| e.word()).collect();
    /// assert_eq!(words, ["badge", "cage"]);
    /// ```
    pub fn load<S: AsRef<str> + Sync>(spec: &PuzzleSpec, words: &[S]) -> Self {
        // Order-preserving parallel filter; dedup stays sequential
        let matched: Vec<WordEntry> = words
            .par_iter()
            .map(AsRef::as_ref)
            .filter(|word| spec.matches(word))
            .map(|word| WordEntry::new(word, spec))
            .collect();

        let mut table = Self::default();
        for entry in matched {
            table.insert(entry);
        }

        log::debug!(
            "puzzle {spec}: {} of {} dictionary words accepted, pangram: {}",
            table.len(),
            words.len(),
            table.has_pangram
        );
        table
    }

    fn insert(&mut self, entry: WordEntry) -> bool {
        if self.index.contains_key(entry.word()) {
            return false;
        }

        self.has_pangram |= entry.is_pangram();
        self.index
            .insert(entry.word().to_string(), self.entries.len());
        self.entries.push(entry);
        true
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.index.get(word).map(|&i| &self.entries[i])
    }

    pub(crate) fn get_mut(&mut self, word: &str) -> Option<&mut WordEntry> {
        self.index.get(word).map(|&i| &mut self.entries[i])
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [WordEntry] {
        &mut self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any accepted word is a pangram
    #[inline]
    #[must_use]
    pub const fn has_pangram(&self) -> bool {
        self.has_pangram
    }

    #[must_use]
    pub fn pangram_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_pangram()).count()
    }

    /// Sum of scores over every entry
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.entries.iter().map(WordEntry::score).sum()
    }

    /// Highest single-word score
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.entries.iter().map(WordEntry::score).max().unwrap_or(0)
    }
}
