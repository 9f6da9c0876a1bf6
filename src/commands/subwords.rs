//! Sub-word command

use crate::engine::subwords::{DEFAULT_MIN_LEN, MAX_ANAGRAM_SEED_LEN, MAX_ORDERED_SEED_LEN};
use crate::engine::{Arrangement, JumbleEngine, SubwordOptions};
use rand::Rng;
use std::time::{Duration, Instant};

/// Configuration for sub-word generation
pub struct SubwordsConfig {
    pub word: String,
    pub min_len: usize,
    pub arrangement: Arrangement,
    pub real_words_only: bool,
}

impl SubwordsConfig {
    #[must_use]
    pub const fn new(word: String) -> Self {
        Self {
            word,
            min_len: DEFAULT_MIN_LEN,
            arrangement: Arrangement::Ordered,
            real_words_only: false,
        }
    }
}

/// Result of sub-word generation
pub struct SubwordsResult {
    pub word: String,
    pub min_len: usize,
    pub arrangement: Arrangement,
    pub real_words_only: bool,
    pub words: Vec<String>,
    pub duration: Duration,
    /// Set when the seed exceeded an enumeration bound and the result is empty
    pub truncated: bool,
}

/// Generate the sub-words of `config.word`
pub fn list_subwords<R: Rng>(
    engine: &JumbleEngine<'_, R>,
    config: SubwordsConfig,
) -> SubwordsResult {
    let mut options = SubwordOptions::default()
        .with_min_len(config.min_len)
        .with_arrangement(config.arrangement);
    if config.real_words_only {
        options = options.filtered_by(engine.dictionary());
    }

    let start = Instant::now();
    let words: Vec<String> = engine
        .subwords_with(&config.word, &options)
        .into_iter()
        .collect();
    let duration = start.elapsed();

    let limit = match config.arrangement {
        Arrangement::Ordered => MAX_ORDERED_SEED_LEN,
        Arrangement::Anagram => MAX_ANAGRAM_SEED_LEN,
    };
    let truncated = !config.real_words_only && config.word.trim().chars().count() > limit;

    SubwordsResult {
        word: config.word,
        min_len: config.min_len,
        arrangement: config.arrangement,
        real_words_only: config.real_words_only,
        words,
        duration,
        truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    #[test]
    fn ordered_subwords_sorted() {
        let dict = Dictionary::default();
        let engine = JumbleEngine::seeded(&dict, 0);

        let result = list_subwords(&engine, SubwordsConfig::new("cats".to_string()));
        assert_eq!(result.words, ["ats", "cas", "cat", "cats", "cts"]);
        assert!(!result.truncated);
    }

    #[test]
    fn real_words_only_uses_engine_dictionary() {
        let dict = Dictionary::from_entries(["low", "owl", "yew", "cat"]);
        let engine = JumbleEngine::seeded(&dict, 0);

        let mut config = SubwordsConfig::new("yellow".to_string());
        config.arrangement = Arrangement::Anagram;
        config.real_words_only = true;

        let result = list_subwords(&engine, config);
        assert_eq!(result.words, ["low", "owl", "yew"]);
    }

    #[test]
    fn long_anagram_seed_flagged() {
        let dict = Dictionary::default();
        let engine = JumbleEngine::seeded(&dict, 0);

        let mut config = SubwordsConfig::new("elephants".to_string());
        config.arrangement = Arrangement::Anagram;

        let result = list_subwords(&engine, config);
        assert!(result.words.is_empty());
        assert!(result.truncated);
    }
}
