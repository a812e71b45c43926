//! Core domain types for the game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod clue;
mod word;

pub use clue::{Clue, Marker};
pub use word::{Word, WordError, normalize};
