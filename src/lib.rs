//! Spelling Bee
//!
//! A rule engine for the spelling bee word game: seven letters, one of them
//! the center, and a dictionary of words that can be spelled from them.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::core::PuzzleSpec;
//! use spelling_bee::session::PuzzleSession;
//!
//! let spec = PuzzleSpec::new("abcdefg").unwrap();
//! let mut session = PuzzleSession::with_words(spec, &["badge", "cage", "deed"]);
//!
//! let result = session.check_guess("badge").unwrap();
//! assert_eq!(result.score, 5);
//! assert_eq!(session.current_score(), 5);
//! ```

// Core domain types and rules
pub mod core;

// Puzzle sessions and word tables
pub mod session;

// Random puzzle selection and candidate surveys
pub mod generator;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
