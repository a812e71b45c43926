//! Russian Wordle
//!
//! A terminal word-guessing game over a dictionary of Russian five-letter
//! words. After each guess the game answers with a clue string over
//! `+` (hit), `^` (present), `-` (miss), using the Wordle duplicate-letter
//! rule; an empty input lets the computer play the first dictionary word
//! consistent with all clues so far.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_ru::game::{Dictionary, Game, SeededSampler};
//!
//! let dictionary = Dictionary::from_lines(["слово", "столб", "сосна"]).unwrap();
//! let mut sampler = SeededSampler::new(42);
//! let mut game = Game::new(&dictionary, &mut sampler).unwrap();
//!
//! let clue = game.make_guess("слово").unwrap();
//! assert_eq!(game.remaining_steps(), 5);
//! assert_eq!(clue.to_string().chars().count(), 5);
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Word list loading
pub mod wordlists;

// Command implementations
pub mod commands;

/// Word length for the game
pub const WORD_LENGTH: usize = 5;

/// Number of attempts per game
pub const MAX_STEPS: usize = 6;
