//! Dictionary loading utilities
//!
//! Provides functions to load the dictionary from a file or use the embedded list.

use super::Dictionary;
use crate::core::EngineError;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// Word list compiled into the binary
    Embedded,
    /// Line-delimited UTF-8 file
    File(PathBuf),
}

impl FromStr for DictionarySource {
    type Err = std::convert::Infallible;

    /// `"embedded"` selects the built-in list; anything else is a path
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "embedded" | "default" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

/// Load a dictionary from `source`
///
/// # Errors
///
/// Returns [`EngineError::Resource`] if a file source cannot be read.
pub fn load(source: &DictionarySource) -> Result<Dictionary, EngineError> {
    match source {
        DictionarySource::Embedded => Ok(Dictionary::from_entries(super::WORDS)),
        DictionarySource::File(path) => load_from_file(path),
    }
}

/// Load a dictionary from a file, one word per line
///
/// Lines are trimmed and blank lines dropped.
///
/// # Errors
///
/// Returns [`EngineError::Resource`] if the file is missing, unreadable or not UTF-8.
///
/// # Examples
/// ```no_run
/// use jumble_engine::dictionary::loader::load_from_file;
///
/// let dict = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, EngineError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| EngineError::Resource {
        path: path.to_path_buf(),
        source,
    })?;

    let dict = Dictionary::from_lines(&content);
    tracing::debug!(path = %path.display(), words = dict.len(), "loaded dictionary");

    Ok(dict)
}
