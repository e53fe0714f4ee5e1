//! Word list loading utilities
//!
//! Provides the dictionary and candidate puzzle lists, read either from files
//! or from the embedded constants.

use super::embedded::{DICTIONARY, PUZZLES};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for word sources that cannot be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    Unavailable { path: PathBuf, reason: String },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { path, reason } => {
                write!(f, "File not found at path: {} ({reason})", path.display())
            }
        }
    }
}

impl std::error::Error for SourceError {}

/// Where a word list comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WordSource {
    /// Lists compiled into the binary
    #[default]
    Embedded,
    /// A plain text file on disk
    File(PathBuf),
}

impl WordSource {
    /// `File` for a given path, `Embedded` otherwise
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Embedded, Self::File)
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read a whole source file
///
/// # Errors
///
/// Returns `SourceError::Unavailable` if the file cannot be opened or read.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String, SourceError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| SourceError::Unavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Split dictionary text into word tokens (any whitespace separates)
pub fn dictionary_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Split candidate text into puzzle strings
///
/// Records are separated by newlines or semicolons; the first whitespace-separated
/// token of each record is the puzzle. Blank records are skipped.
///
/// # Examples
/// ```
/// use spelling_bee::wordlists::loader::candidate_tokens;
///
/// let puzzles: Vec<&str> = candidate_tokens("aceprtu 45;agiknpr 17\n\najlnoru").collect();
/// assert_eq!(puzzles, ["aceprtu", "agiknpr", "ajlnoru"]);
/// ```
pub fn candidate_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', ';'])
        .filter_map(|record| record.split_whitespace().next())
}

/// Dictionary words in scan order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Load the dictionary from a source
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if a file source cannot be read.
    pub fn load(source: &WordSource) -> Result<Self, SourceError> {
        match source {
            WordSource::Embedded => Ok(Self::embedded()),
            WordSource::File(path) => {
                let dictionary = Self::from_text(&read_source(path)?);
                log::debug!(
                    "loaded {} dictionary tokens from {}",
                    dictionary.len(),
                    path.display()
                );
                Ok(dictionary)
            }
        }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY)
    }

    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_words(dictionary_tokens(text))
    }

    /// Build from any sequence of words, keeping their order
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["cage", "badge"]);
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_string()).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Precomputed puzzle strings for random generation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList {
    puzzles: Vec<String>,
}

impl CandidateList {
    /// Load candidate puzzles from a source
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if a file source cannot be read.
    pub fn load(source: &WordSource) -> Result<Self, SourceError> {
        match source {
            WordSource::Embedded => Ok(Self::embedded()),
            WordSource::File(path) => Ok(Self::from_text(&read_source(path)?)),
        }
    }

    #[must_use]
    pub fn embedded() -> Self {
        Self {
            puzzles: PUZZLES.iter().map(|&p| p.to_string()).collect(),
        }
    }

    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            puzzles: candidate_tokens(text).map(str::to_string).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn puzzles(&self) -> &[String] {
        &self.puzzles
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_tokens_split_on_any_whitespace() {
        let tokens: Vec<&str> = dictionary_tokens("cage badge\n\tface  \r\naced\n").collect();
        assert_eq!(tokens, ["cage", "badge", "face", "aced"]);
    }

    #[test]
    fn dictionary_keeps_scan_order() {
        let dictionary = Dictionary::from_text("zebra apple mango");
        assert_eq!(dictionary.words(), ["zebra", "apple", "mango"]);
    }

    #[test]
    fn dictionary_empty_text() {
        let dictionary = Dictionary::from_text("  \n ");
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.len(), 0);
    }

    #[test]
    fn candidate_records_use_first_token() {
        let list = CandidateList::from_text("aceprtu capture 45;agiknpr\n  ajlnoru journal\n;\n");
        assert_eq!(list.puzzles(), ["aceprtu", "agiknpr", "ajlnoru"]);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let result = read_source("definitely/not/here/words.txt");
        match result {
            Err(SourceError::Unavailable { path, .. }) => {
                assert_eq!(path, PathBuf::from("definitely/not/here/words.txt"));
            }
            Ok(_) => panic!("expected missing file to fail"),
        }
    }

    #[test]
    fn dictionary_load_missing_file() {
        let source = WordSource::File(PathBuf::from("no_such_dictionary.txt"));
        assert!(Dictionary::load(&source).is_err());
        assert!(CandidateList::load(&source).is_err());
    }

    #[test]
    fn embedded_sources_load() {
        let dictionary = Dictionary::load(&WordSource::Embedded).unwrap();
        assert_eq!(dictionary.len(), DICTIONARY.len());

        let candidates = CandidateList::load(&WordSource::Embedded).unwrap();
        assert_eq!(candidates.len(), PUZZLES.len());
    }

    #[test]
    fn word_source_from_path() {
        assert_eq!(WordSource::from_path(None), WordSource::Embedded);
        assert_eq!(
            WordSource::from_path(Some(PathBuf::from("words.txt"))),
            WordSource::File(PathBuf::from("words.txt"))
        );
    }
}
