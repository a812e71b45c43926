//! Dictionary validation mode
//!
//! Loads a word list through the regular loader and reports how many playable
//! words it yields, so a curated file can be checked without starting a game.

use anyhow::{Context, Result};
use std::path::Path;

use crate::wordlists::load_from_file;

/// Validate a dictionary file and report its size
///
/// # Errors
///
/// Returns an error if the file cannot be read or yields no playable words.
pub fn run_check(path: &Path) -> Result<()> {
    let dictionary = load_from_file(path)
        .with_context(|| format!("cannot use dictionary at {}", path.display()))?;

    println!("{}: {} playable words", path.display(), dictionary.len());
    Ok(())
}
