//! End-to-end game scenarios through the public API

use spelling_bee::commands::{GameSources, solve_puzzle};
use spelling_bee::core::{GuessError, PANGRAM_BONUS, PuzzleError, PuzzleSpec};
use spelling_bee::generator::{DEFAULT_PUZZLE, generate_or_default, survey};
use spelling_bee::session::PuzzleSession;
use spelling_bee::wordlists::{CandidateList, Dictionary, WordSource};
use std::fs;
use std::path::PathBuf;

fn dictionary() -> Dictionary {
    Dictionary::from_text("face deed cage aced badge cabbage\nfabdeg abcdefg BADGE")
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("spelling_bee_{}_{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn full_game_on_abcdefg() {
    let mut session = PuzzleSession::create("abcdefg", &dictionary()).unwrap();
    assert_eq!(session.total_words(), 7);
    assert!(session.has_pangram());

    assert_eq!(
        session.check_guess("deed"),
        Err(GuessError::MissingCenterLetter)
    );
    assert_eq!(session.check_guess("cag"), Err(GuessError::TooShort));
    assert_eq!(session.check_guess("cagex"), Err(GuessError::InvalidLetter));
    assert_eq!(session.check_guess("faced"), Err(GuessError::NotInDictionary));
    assert_eq!(session.current_score(), 0);

    assert_eq!(session.check_guess("cage").unwrap().score, 1);
    assert_eq!(session.check_guess("ACED").unwrap().score, 1);
    assert_eq!(session.check_guess(" badge ").unwrap().score, 5);

    let pangram = session.check_guess("abcdefg").unwrap();
    assert!(pangram.is_pangram);
    assert_eq!(pangram.score, 7 + PANGRAM_BONUS);

    assert_eq!(session.current_word_count(), 4);
    assert_eq!(session.current_score(), 1 + 1 + 5 + 14);

    assert_eq!(session.check_guess("badge"), Err(GuessError::AlreadyFound));
    assert_eq!(session.current_word_count(), 4);
    assert_eq!(session.current_score(), 21);
}

#[test]
fn solve_all_then_guess() {
    let mut session = PuzzleSession::create("abcdefg", &dictionary()).unwrap();
    session.check_guess("badge").unwrap();

    let result = session.solve_all();
    assert_eq!(result.revealed, 6);
    assert_eq!(result.total_words, 7);
    let total = result.total_score;

    assert!(session.is_solved());
    assert_eq!(session.current_score(), total);
    assert_eq!(session.current_word_count(), 7);
    assert_eq!(session.check_guess("face"), Err(GuessError::AlreadyFound));
}

#[test]
fn invalid_puzzles_are_rejected_in_order() {
    let dictionary = dictionary();
    let create = |raw: &str| PuzzleSession::create(raw, &dictionary).map(|_| ());

    assert_eq!(create("aab1"), Err(PuzzleError::NonLetterCharacter));
    assert_eq!(create("aabbccdd"), Err(PuzzleError::RepeatedLetter));
    assert_eq!(create("abcdefgh"), Err(PuzzleError::WrongLength));
    assert_eq!(create(""), Err(PuzzleError::WrongLength));
}

#[test]
fn dictionary_and_puzzles_from_files() {
    let words = temp_file("words.txt", "Capture crate\n\ncater acute  zebra\n");
    let puzzles = temp_file("puzzles.txt", "aceprtu 12\n");

    let sources = GameSources::load(
        &WordSource::File(words.clone()),
        WordSource::File(puzzles.clone()),
    );
    assert!(sources.dictionary_error.is_none());

    let mut session = sources.random_session(&mut rand::rng());
    assert_eq!(session.spec().as_str(), "aceprtu");
    assert_eq!(session.total_words(), 4);
    assert!(session.check_guess("capture").unwrap().is_pangram);

    fs::remove_file(words).unwrap();
    fs::remove_file(puzzles).unwrap();
}

#[test]
fn missing_dictionary_gives_empty_puzzle() {
    let source = WordSource::File(PathBuf::from("/nonexistent/words.txt"));
    let mut session = PuzzleSession::load("abcdefg", &source).unwrap();

    assert!(session.source_error().is_some());
    assert_eq!(session.total_words(), 0);
    assert!(!session.has_pangram());
    assert_eq!(session.check_guess("badge"), Err(GuessError::NotInDictionary));
}

#[test]
fn missing_candidate_list_falls_back() {
    let source = WordSource::File(PathBuf::from("/nonexistent/puzzles.txt"));
    let spec = generate_or_default(&source, &mut rand::rng());
    assert_eq!(spec, PuzzleSpec::new(DEFAULT_PUZZLE).unwrap());
}

#[test]
fn embedded_puzzles_all_have_pangrams() {
    let candidates = CandidateList::embedded();
    let results = survey(candidates.puzzles(), &Dictionary::embedded());

    assert_eq!(results.len(), candidates.len());
    for result in results {
        let stats = result.outcome.unwrap();
        assert!(stats.pangrams > 0, "{} has no pangram", result.puzzle);
    }
}

#[test]
fn solve_report_matches_session() {
    let report = solve_puzzle("abcdefg", &dictionary()).unwrap();
    let mut session = PuzzleSession::create("abcdefg", &dictionary()).unwrap();
    let result = session.solve_all();

    assert_eq!(report.total_words, result.total_words);
    assert_eq!(report.total_score, result.total_score);
    assert_eq!(report.pangrams, 1);
}
