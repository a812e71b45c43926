//! Error types surfaced by the game engine

use crate::WORD_LENGTH;
use crate::core::WordError;
use std::fmt;

/// Error type for rejected moves and failed game construction
///
/// Every variant is raised before any state mutation: a failed call leaves
/// the history and the attempt counter untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The guess does not have exactly 5 letters after normalization
    InvalidWord(usize),
    /// The guess is well-formed but not a dictionary member
    WordNotInDictionary(String),
    /// The dictionary has no playable words
    EmptyDictionary,
    /// A move was attempted with no attempts remaining
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(len) => {
                write!(f, "The word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::WordNotInDictionary(word) => {
                write!(f, "The word '{word}' is not in the dictionary")
            }
            Self::EmptyDictionary => write!(f, "The game dictionary contains no playable words"),
            Self::GameOver => write!(f, "No attempts remain"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<WordError> for GameError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(len) => Self::InvalidWord(len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            GameError::InvalidWord(3).to_string(),
            "The word must be exactly 5 letters, got 3"
        );
        assert_eq!(
            GameError::WordNotInDictionary("жизнь".to_string()).to_string(),
            "The word 'жизнь' is not in the dictionary"
        );
        assert_eq!(GameError::GameOver.to_string(), "No attempts remain");
    }

    #[test]
    fn word_error_converts_to_invalid_word() {
        let err: GameError = WordError::InvalidLength(7).into();
        assert_eq!(err, GameError::InvalidWord(7));
    }
}
