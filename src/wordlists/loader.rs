//! Dictionary file loading
//!
//! Reads a UTF-8 word list, one candidate per line, and hands the raw lines
//! to the dictionary for normalization and filtering. All file and encoding
//! concerns live here; the engine never touches the filesystem.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::game::Dictionary;

/// Error type for dictionary loading
#[derive(Debug)]
pub enum DictionaryLoadError {
    /// The file could not be read (absent, unreadable, not UTF-8)
    Io(io::Error),
    /// The file was read but yielded no playable words
    Empty,
}

impl fmt::Display for DictionaryLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read the dictionary file: {err}"),
            Self::Empty => write!(f, "The dictionary file contains no playable words"),
        }
    }
}

impl std::error::Error for DictionaryLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for DictionaryLoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Load a dictionary from a word list file
///
/// Blank lines are ignored; every other line is normalized and admitted only
/// if it comes out at exactly 5 letters.
///
/// # Errors
/// Returns `DictionaryLoadError::Io` if the file cannot be read and
/// `DictionaryLoadError::Empty` if no playable word remains after
/// normalization.
///
/// # Examples
/// ```no_run
/// use wordle_ru::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words_ru.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryLoadError> {
    let content = fs::read_to_string(&path)?;
    log::debug!(
        "read {} lines from {}",
        content.lines().count(),
        path.as_ref().display()
    );

    // from_lines raises only the empty-dictionary case
    Dictionary::from_lines(content.lines()).map_err(|_| DictionaryLoadError::Empty)
}
