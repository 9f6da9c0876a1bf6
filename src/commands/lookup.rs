//! Lookup commands
//!
//! Palindrome listing, membership checks and prefix search.

use crate::core::EngineError;
use crate::engine::JumbleEngine;
use rand::Rng;

/// Result of a membership check
pub struct ExistsResult {
    pub word: String,
    pub exists: bool,
}

/// Result of a prefix search
pub struct PrefixResult {
    pub prefix: String,
    pub words: Vec<String>,
}

/// All palindromes in the engine's dictionary
#[must_use]
pub fn list_palindromes<R: Rng>(engine: &JumbleEngine<'_, R>) -> Vec<String> {
    engine
        .palindromes()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Check whether `word` is in the dictionary
///
/// # Errors
///
/// Returns [`EngineError::InvalidArgument`] if `word` is blank.
pub fn check_exists<R: Rng>(
    engine: &JumbleEngine<'_, R>,
    word: &str,
) -> Result<ExistsResult, EngineError> {
    let word = non_blank(word, "word")?;
    Ok(ExistsResult {
        word: word.to_string(),
        exists: engine.exists(word),
    })
}

/// Find dictionary words starting with `prefix`
///
/// # Errors
///
/// Returns [`EngineError::InvalidArgument`] if `prefix` is blank. A prefix with
/// non-letters is accepted and simply matches nothing.
pub fn prefix_search<R: Rng>(
    engine: &JumbleEngine<'_, R>,
    prefix: &str,
) -> Result<PrefixResult, EngineError> {
    let prefix = non_blank(prefix, "prefix")?;
    Ok(PrefixResult {
        prefix: prefix.to_string(),
        words: engine
            .words_with_prefix(prefix)
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

fn non_blank<'s>(value: &'s str, field: &str) -> Result<&'s str, EngineError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(EngineError::InvalidArgument(format!(
            "{field} must not be empty"
        )));
    }
    Ok(value)
}
