//! Word sources shared by the interactive modes

use crate::core::PuzzleError;
use crate::generator::generate_or_default;
use crate::session::PuzzleSession;
use crate::wordlists::{Dictionary, SourceError, WordSource};
use rand::Rng;

/// Dictionary loaded once at startup plus where to draw random puzzles from
#[derive(Debug, Clone, Default)]
pub struct GameSources {
    pub dictionary: Dictionary,
    /// Set when the dictionary could not be read; puzzles then have no words
    pub dictionary_error: Option<SourceError>,
    pub puzzles: WordSource,
}

impl GameSources {
    /// Load the dictionary, keeping going with an empty one if it is unreadable
    #[must_use]
    pub fn load(dictionary: &WordSource, puzzles: WordSource) -> Self {
        let (dictionary, dictionary_error) = match Dictionary::load(dictionary) {
            Ok(words) => (words, None),
            Err(e) => {
                log::warn!("continuing with an empty dictionary: {e}");
                (Dictionary::default(), Some(e))
            }
        };

        Self {
            dictionary,
            dictionary_error,
            puzzles,
        }
    }

    /// Start a session for a typed-in puzzle
    ///
    /// # Errors
    ///
    /// Returns the `PuzzleError` of the first puzzle rule the input breaks.
    pub fn new_session(&self, raw: &str) -> Result<PuzzleSession, PuzzleError> {
        PuzzleSession::create(raw.trim(), &self.dictionary)
    }

    /// Start a session for a random puzzle, or the default one if none is available
    pub fn random_session<R: Rng + ?Sized>(&self, rng: &mut R) -> PuzzleSession {
        let spec = generate_or_default(&self.puzzles, rng);
        PuzzleSession::new(spec, &self.dictionary)
    }
}
