//! Word list collaborators
//!
//! File loading for user-supplied dictionaries. The engine consumes the
//! resulting `Dictionary` and never sees a path.

pub mod loader;

pub use loader::{DictionaryLoadError, load_from_file};
