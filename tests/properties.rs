//! Property tests for puzzle validation, shuffling and score tracking

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use spelling_bee::core::{PuzzleError, PuzzleSpec, WordEntry, shuffle_board};
use spelling_bee::session::PuzzleSession;

const DICTIONARY: &[&str] = &[
    "face", "deed", "cage", "aced", "badge", "cabbage", "fabdeg", "abcdefg", "decaf", "faded",
    "begged", "gabbed",
];

/// Seven distinct lowercase letters in random order
fn puzzle_letters() -> impl Strategy<Value = String> {
    Just(('a'..='z').collect::<Vec<char>>())
        .prop_shuffle()
        .prop_map(|letters| letters[..7].iter().collect())
}

fn sorted(letters: &[u8]) -> Vec<u8> {
    let mut letters = letters.to_vec();
    letters.sort_unstable();
    letters
}

proptest! {
    #[test]
    fn valid_puzzles_round_trip(raw in puzzle_letters(), upper in any::<bool>()) {
        let input = if upper { raw.to_uppercase() } else { raw.clone() };
        let spec = PuzzleSpec::new(&input).unwrap();

        prop_assert_eq!(spec.as_str(), raw.as_str());
        prop_assert_eq!(PuzzleSpec::new(spec.as_str()).unwrap(), spec.clone());
        prop_assert_eq!(spec.center(), raw.chars().next().unwrap());
    }

    #[test]
    fn non_letter_is_reported_first(raw in "[a-z]{0,10}", pos in 0usize..10, symbol in "[0-9 !?-]") {
        let pos = pos.min(raw.len());
        let input = format!("{}{symbol}{}", &raw[..pos], &raw[pos..]);
        prop_assert_eq!(PuzzleSpec::new(&input), Err(PuzzleError::NonLetterCharacter));
    }

    #[test]
    fn repeated_letter_beats_wrong_length(raw in "[a-z]{1,12}", pos in 0usize..12) {
        let pos = pos % raw.len();
        let mut input = raw.clone();
        input.push(char::from(raw.as_bytes()[pos]).to_ascii_uppercase());
        prop_assert_eq!(PuzzleSpec::new(&input), Err(PuzzleError::RepeatedLetter));
    }

    #[test]
    fn distinct_letters_of_wrong_length(raw in puzzle_letters(), len in 0usize..7) {
        prop_assert_eq!(PuzzleSpec::new(&raw[..len]), Err(PuzzleError::WrongLength));
    }

    #[test]
    fn shuffle_keeps_center_and_letters(raw in puzzle_letters(), seed in any::<u64>()) {
        let spec = PuzzleSpec::new(&raw).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);

        let mut board = *spec.letters();
        for _ in 0..5 {
            board = shuffle_board(board, &mut rng);
            prop_assert_eq!(board[0], spec.letters()[0]);
            prop_assert_eq!(sorted(&board), sorted(spec.letters()));
        }
    }

    #[test]
    fn counters_match_discovered_entries(
        guesses in prop::collection::vec(prop::sample::select(DICTIONARY), 0..20),
        solve in any::<bool>(),
    ) {
        let spec = PuzzleSpec::new("abcdefg").unwrap();
        let mut session = PuzzleSession::with_words(spec, DICTIONARY);

        for guess in &guesses {
            let _ = session.check_guess(guess);
        }
        if solve {
            session.solve_all();
        }

        let discovered: Vec<&WordEntry> = session
            .table()
            .entries()
            .iter()
            .filter(|e| e.is_discovered())
            .collect();
        let score: u32 = discovered.iter().map(|e| e.score()).sum();

        prop_assert_eq!(session.current_word_count(), discovered.len());
        prop_assert_eq!(session.current_score(), score);
        prop_assert!(session.current_score() <= session.total_score());
        if solve {
            prop_assert_eq!(session.current_score(), session.total_score());
        }
    }
}
