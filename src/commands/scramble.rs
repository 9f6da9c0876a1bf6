//! Scramble command
//!
//! Scrambles a user-supplied word.

use crate::core::EngineError;
use crate::engine::JumbleEngine;
use rand::Rng;

/// Accepted input length for the scramble command
pub const SCRAMBLE_INPUT_LEN: std::ops::RangeInclusive<usize> = 3..=30;

/// Result of scrambling a word
pub struct ScrambleResult {
    pub word: String,
    pub scrambled: String,
}

/// Scramble `word`
///
/// # Errors
///
/// Returns [`EngineError::InvalidArgument`] if the trimmed input is not 3 to 30
/// characters long.
pub fn scramble_word<R: Rng>(
    engine: &mut JumbleEngine<'_, R>,
    word: &str,
) -> Result<ScrambleResult, EngineError> {
    let word = word.trim();
    let len = word.chars().count();
    if !SCRAMBLE_INPUT_LEN.contains(&len) {
        return Err(EngineError::InvalidArgument(format!(
            "word size must be between {} and {}, got {len}",
            SCRAMBLE_INPUT_LEN.start(),
            SCRAMBLE_INPUT_LEN.end()
        )));
    }

    Ok(ScrambleResult {
        word: word.to_string(),
        scrambled: engine.scramble(word),
    })
}
