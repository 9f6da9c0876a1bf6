//! Main jumble engine interface

use super::game::{GameOptions, GameState, create_game_state};
use super::search::SearchCriteria;
use super::subwords::{DEFAULT_MIN_LEN, SubwordOptions, generate};
use super::{lookup, palindrome, random, scramble, search};
use crate::core::EngineError;
use crate::dictionary::Dictionary;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

/// Main jumble engine
///
/// Borrows a loaded dictionary and owns the random source used for scrambles and
/// word picks. Supply a seeded RNG for reproducible results.
pub struct JumbleEngine<'a, R: Rng = StdRng> {
    dictionary: &'a Dictionary,
    rng: R,
}

impl<'a> JumbleEngine<'a, StdRng> {
    /// Engine with a deterministic RNG seeded from `seed`
    #[must_use]
    pub fn seeded(dictionary: &'a Dictionary, seed: u64) -> Self {
        Self::new(dictionary, StdRng::seed_from_u64(seed))
    }

    /// Engine with an RNG seeded from the operating system
    #[must_use]
    pub fn from_os_rng(dictionary: &'a Dictionary) -> Self {
        Self::new(dictionary, StdRng::from_os_rng())
    }
}

impl<'a, R: Rng> JumbleEngine<'a, R> {
    /// Create an engine over `dictionary` using `rng`
    pub const fn new(dictionary: &'a Dictionary, rng: R) -> Self {
        Self { dictionary, rng }
    }

    /// The dictionary this engine queries
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Random permutation of `word`, different from it whenever possible
    pub fn scramble(&mut self, word: &str) -> String {
        scramble::scramble(word, &mut self.rng)
    }

    /// Palindromic dictionary entries
    #[must_use]
    pub fn palindromes(&self) -> Vec<&'a str> {
        palindrome::palindromes(self.dictionary)
    }

    /// Case-insensitive membership
    #[must_use]
    pub fn exists(&self, word: &str) -> bool {
        lookup::exists(self.dictionary, word)
    }

    /// Lowercase forms of entries starting with `prefix`
    #[must_use]
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<&'a str> {
        lookup::words_with_prefix(self.dictionary, prefix)
    }

    /// Entries matching every supplied criterion
    #[must_use]
    pub fn search(
        &self,
        start: Option<char>,
        end: Option<char>,
        length: Option<usize>,
    ) -> Vec<&'a str> {
        search::search(self.dictionary, &SearchCriteria::new(start, end, length))
    }

    /// Ordered, unfiltered sub-words; `min_len` defaults to 3
    #[must_use]
    pub fn subwords(&self, word: &str, min_len: Option<usize>) -> BTreeSet<String> {
        let options = SubwordOptions::default().with_min_len(min_len.unwrap_or(DEFAULT_MIN_LEN));
        generate(word, &options)
    }

    /// Sub-words with explicit options
    #[must_use]
    pub fn subwords_with(&self, word: &str, options: &SubwordOptions<'_>) -> BTreeSet<String> {
        generate(word, options)
    }

    /// Random entry, optionally of exactly `length` characters
    pub fn random_word(&mut self, length: Option<usize>) -> Option<&'a str> {
        random::random_word(self.dictionary, length, &mut self.rng)
    }

    /// New game around a `length`-letter word; `min_len` defaults to 3
    ///
    /// # Errors
    ///
    /// See [`create_game_state`].
    pub fn create_game_state(
        &mut self,
        length: usize,
        min_len: Option<usize>,
    ) -> Result<GameState, EngineError> {
        let options = GameOptions {
            min_len: min_len.unwrap_or(DEFAULT_MIN_LEN),
            ..GameOptions::default()
        };
        self.create_game_state_with(length, &options)
    }

    /// New game with explicit options
    ///
    /// # Errors
    ///
    /// See [`create_game_state`].
    pub fn create_game_state_with(
        &mut self,
        length: usize,
        options: &GameOptions,
    ) -> Result<GameState, EngineError> {
        create_game_state(self.dictionary, length, options, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_dictionary() -> Dictionary {
        Dictionary::from_entries([
            "deed", "eye", "cat", "cats", "Listen", "silent", "apple", "angel", "yellow", "bridge",
            "prefer", "present", "a",
        ])
    }

    #[test]
    fn palindromes_only_multi_letter() {
        let dict = setup_dictionary();
        let engine = JumbleEngine::seeded(&dict, 1);
        assert_eq!(engine.palindromes(), ["deed", "eye"]);
    }

    #[test]
    fn exists_case_insensitive() {
        let dict = setup_dictionary();
        let engine = JumbleEngine::seeded(&dict, 1);
        assert!(engine.exists("listen"));
        assert!(engine.exists("LISTEN"));
        assert!(!engine.exists(""));
        assert!(!engine.exists("tinsel"));
    }

    #[test]
    fn prefix_and_search() {
        let dict = setup_dictionary();
        let engine = JumbleEngine::seeded(&dict, 1);
        assert_eq!(engine.words_with_prefix("PRE"), ["prefer", "present"]);
        assert!(engine.words_with_prefix("xyz123").is_empty());
        assert_eq!(engine.search(Some('a'), None, Some(5)), ["apple", "angel"]);
        assert!(engine.search(None, None, None).is_empty());
    }

    #[test]
    fn subwords_default_min_len() {
        let dict = setup_dictionary();
        let engine = JumbleEngine::seeded(&dict, 1);
        assert_eq!(engine.subwords("cats", None).len(), 5);
        assert!(engine.subwords("ab", None).is_empty());
        assert_eq!(engine.subwords("cats", Some(4)).len(), 1);
    }

    #[test]
    fn scramble_through_engine() {
        let dict = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dict, 8);
        let scrambled = engine.scramble("silent");
        assert_ne!(scrambled, "silent");
        assert_eq!(scrambled.len(), 6);
        assert_eq!(engine.scramble("a"), "a");
    }

    #[test]
    fn random_word_respects_length() {
        let dict = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dict, 8);
        let word = engine.random_word(Some(4)).unwrap();
        assert!(["deed", "cats"].contains(&word));
        assert!(engine.random_word(Some(11)).is_none());
        assert!(engine.random_word(None).is_some());
    }

    #[test]
    fn seeded_engines_agree() {
        let dict = setup_dictionary();
        let mut a = JumbleEngine::seeded(&dict, 77);
        let mut b = JumbleEngine::seeded(&dict, 77);
        assert_eq!(a.scramble("bridge"), b.scramble("bridge"));
        assert_eq!(a.random_word(Some(6)), b.random_word(Some(6)));
        assert_eq!(
            a.create_game_state(6, None).unwrap(),
            b.create_game_state(6, None).unwrap()
        );
    }

    #[test]
    fn create_game_state_validates() {
        let dict = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dict, 3);
        assert!(matches!(
            engine.create_game_state(2, Some(3)),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(matches!(
            engine.create_game_state(9, None),
            Err(EngineError::NoWordFound { length: 9 })
        ));

        let game = engine.create_game_state(6, Some(3)).unwrap();
        assert_eq!(game.original().len(), 6);
        assert_ne!(game.scrambled(), game.original());
        assert!(game.sub_words().values().all(|&found| !found));
    }
}
