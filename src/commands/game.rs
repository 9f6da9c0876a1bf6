//! Random word and game creation commands

use crate::core::EngineError;
use crate::engine::{GameOptions, GameState, JumbleEngine};
use rand::Rng;
use std::collections::BTreeMap;

/// Snapshot of a freshly created game, for display
pub struct GameSummary {
    pub original: String,
    pub scrambled: String,
    pub min_len: usize,
    pub sub_words: Vec<String>,
    pub by_length: BTreeMap<usize, usize>,
}

impl GameSummary {
    #[must_use]
    pub fn from_state(state: &GameState, min_len: usize) -> Self {
        Self {
            original: state.original().to_string(),
            scrambled: state.scrambled().to_string(),
            min_len,
            sub_words: state.sub_words().keys().cloned().collect(),
            by_length: state.remaining_by_length(),
        }
    }
}

/// Pick a random word, optionally of a fixed length
///
/// # Errors
///
/// Returns [`EngineError::NoWordFound`] when no entry has the requested length,
/// and [`EngineError::InvalidArgument`] when the dictionary is empty.
pub fn pick_random_word<R: Rng>(
    engine: &mut JumbleEngine<'_, R>,
    length: Option<usize>,
) -> Result<String, EngineError> {
    engine
        .random_word(length)
        .map(str::to_string)
        .ok_or_else(|| match length {
            Some(length) => EngineError::NoWordFound { length },
            None => EngineError::InvalidArgument("dictionary is empty".to_string()),
        })
}

/// Create a new game and summarize it
///
/// # Errors
///
/// Propagates the validation and lookup errors of game creation.
pub fn new_game<R: Rng>(
    engine: &mut JumbleEngine<'_, R>,
    length: usize,
    options: &GameOptions,
) -> Result<GameSummary, EngineError> {
    let state = engine.create_game_state_with(length, options)?;
    Ok(GameSummary::from_state(&state, options.min_len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    #[test]
    fn random_word_of_length() {
        let dict = Dictionary::from_entries(["cat", "yellow"]);
        let mut engine = JumbleEngine::seeded(&dict, 9);

        assert_eq!(pick_random_word(&mut engine, Some(6)).unwrap(), "yellow");
        assert!(matches!(
            pick_random_word(&mut engine, Some(4)),
            Err(EngineError::NoWordFound { length: 4 })
        ));
    }

    #[test]
    fn random_word_from_empty_dictionary() {
        let dict = Dictionary::default();
        let mut engine = JumbleEngine::seeded(&dict, 9);
        assert!(pick_random_word(&mut engine, None).is_err());
    }

    #[test]
    fn game_summary_counts_by_length() {
        let dict = Dictionary::from_entries(["cats"]);
        let mut engine = JumbleEngine::seeded(&dict, 9);

        let summary = new_game(&mut engine, 4, &GameOptions::default()).unwrap();
        assert_eq!(summary.original, "cats");
        assert_eq!(summary.sub_words, ["ats", "cas", "cat", "cats", "cts"]);
        assert_eq!(summary.by_length.get(&3), Some(&4));
        assert_eq!(summary.by_length.get(&4), Some(&1));
    }

    #[test]
    fn game_errors_propagate() {
        let dict = Dictionary::from_entries(["cats"]);
        let mut engine = JumbleEngine::seeded(&dict, 9);

        let options = GameOptions {
            min_len: 5,
            ..GameOptions::default()
        };
        assert!(matches!(
            new_game(&mut engine, 4, &options),
            Err(EngineError::InvalidArgument(_))
        ));
    }
}
