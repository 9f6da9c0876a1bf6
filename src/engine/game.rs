//! Game state construction
//!
//! A game is a secret word, its scramble, and the sub-words a player can
//! discover. Only the discovery flags change after construction.

use super::random::random_letter_word;
use super::scramble::scramble;
use super::subwords::{Arrangement, DEFAULT_MIN_LEN, SubwordOptions, generate};
use crate::core::EngineError;
use crate::dictionary::Dictionary;
use rand::Rng;
use std::collections::BTreeMap;

/// Shortest secret word a game may use
pub const MIN_GAME_WORD_LEN: usize = 3;

/// Options for [`create_game_state`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    pub min_len: usize,
    pub arrangement: Arrangement,
    /// Keep only sub-words that are dictionary entries
    pub dictionary_filter: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            arrangement: Arrangement::Ordered,
            dictionary_filter: false,
        }
    }
}

/// Outcome of a discovery attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discovery {
    /// Newly discovered
    Found,
    /// Already discovered earlier
    AlreadyFound,
    /// Not one of this game's sub-words
    Unknown,
}

/// A playable jumble
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    original: String,
    scrambled: String,
    sub_words: BTreeMap<String, bool>,
}

impl GameState {
    /// Assemble a state with every sub-word undiscovered
    pub fn new<I>(original: impl Into<String>, scrambled: impl Into<String>, sub_words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            original: original.into(),
            scrambled: scrambled.into(),
            sub_words: sub_words.into_iter().map(|w| (w, false)).collect(),
        }
    }

    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    /// Sub-words with their discovered flags, sorted
    #[must_use]
    pub fn sub_words(&self) -> &BTreeMap<String, bool> {
        &self.sub_words
    }

    /// Mark `guess` discovered if it is one of the sub-words (case-insensitive)
    pub fn discover(&mut self, guess: &str) -> Discovery {
        let guess = guess.trim().to_lowercase();
        match self.sub_words.get_mut(&guess) {
            Some(found) if *found => Discovery::AlreadyFound,
            Some(found) => {
                *found = true;
                Discovery::Found
            }
            None => Discovery::Unknown,
        }
    }

    /// True if `guess` is the secret word (case-insensitive)
    #[must_use]
    pub fn is_original(&self, guess: &str) -> bool {
        guess.trim().eq_ignore_ascii_case(&self.original)
    }

    #[must_use]
    pub fn discovered_count(&self) -> usize {
        self.sub_words.values().filter(|&&found| found).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.sub_words.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.sub_words.values().all(|&found| found)
    }

    /// Undiscovered sub-word count per length
    #[must_use]
    pub fn remaining_by_length(&self) -> BTreeMap<usize, usize> {
        let mut remaining = BTreeMap::new();
        for (word, &found) in &self.sub_words {
            if !found {
                *remaining.entry(word.chars().count()).or_insert(0) += 1;
            }
        }
        remaining
    }

    /// Discovered sub-words, sorted
    pub fn discovered(&self) -> impl Iterator<Item = &str> + '_ {
        self.sub_words
            .iter()
            .filter(|&(_, &found)| found)
            .map(|(word, _)| word.as_str())
    }

    /// Mark every sub-word discovered
    pub fn reveal(&mut self) {
        for found in self.sub_words.values_mut() {
            *found = true;
        }
    }
}

/// Create a game around a random word of exactly `length` letters
///
/// # Errors
///
/// - [`EngineError::InvalidArgument`] if `length < 3`, `min_len == 0` or
///   `min_len > length`
/// - [`EngineError::NoWordFound`] if the dictionary has no word of that length
///
/// # Examples
/// ```
/// use jumble_engine::dictionary::Dictionary;
/// use jumble_engine::engine::game::{GameOptions, create_game_state};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let dict = Dictionary::from_entries(["yellow"]);
/// let mut rng = StdRng::seed_from_u64(1);
/// let game = create_game_state(&dict, 6, &GameOptions::default(), &mut rng).unwrap();
///
/// assert_eq!(game.original(), "yellow");
/// assert_ne!(game.scrambled(), "yellow");
/// assert!(game.sub_words().values().all(|&found| !found));
/// ```
pub fn create_game_state<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    length: usize,
    options: &GameOptions,
    rng: &mut R,
) -> Result<GameState, EngineError> {
    if length < MIN_GAME_WORD_LEN {
        return Err(EngineError::invalid(format!(
            "length={length}, expected at least {MIN_GAME_WORD_LEN}"
        )));
    }
    if options.min_len == 0 {
        return Err(EngineError::invalid("min_len must be a positive integer"));
    }
    if options.min_len > length {
        return Err(EngineError::invalid(format!(
            "min_len={} must not exceed length={length}",
            options.min_len
        )));
    }

    let original =
        random_letter_word(dictionary, length, rng).ok_or(EngineError::NoWordFound { length })?;
    let scrambled = scramble(original, rng);

    let mut sub_options = SubwordOptions::default()
        .with_min_len(options.min_len)
        .with_arrangement(options.arrangement);
    if options.dictionary_filter {
        sub_options = sub_options.filtered_by(dictionary);
    }
    let sub_words = generate(original, &sub_options);

    tracing::debug!(
        length,
        min_len = options.min_len,
        sub_words = sub_words.len(),
        "created game state"
    );

    Ok(GameState::new(original, scrambled, sub_words))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterCounts;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(31)
    }

    fn sorted(word: &str) -> Vec<char> {
        let mut chars: Vec<char> = word.to_lowercase().chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn six_letter_game_from_embedded_dictionary() {
        let dict = Dictionary::embedded();
        let game = create_game_state(dict, 6, &GameOptions::default(), &mut rng()).unwrap();

        assert_eq!(game.original().len(), 6);
        assert_ne!(game.scrambled(), game.original());
        assert_eq!(sorted(game.scrambled()), sorted(game.original()));

        let available = LetterCounts::of(game.original());
        assert!(game.total() > 0);
        for (word, &found) in game.sub_words() {
            assert!((3..=6).contains(&word.len()), "'{word}' out of range");
            assert!(LetterCounts::of(word).is_subset_of(&available));
            assert!(!found);
        }
        assert!(game.sub_words().contains_key(&game.original().to_lowercase()));
    }

    #[test]
    fn min_len_greater_than_length_is_invalid() {
        let dict = Dictionary::embedded();
        let options = GameOptions {
            min_len: 3,
            ..GameOptions::default()
        };
        let err = create_game_state(dict, 2, &options, &mut rng()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));

        let options = GameOptions {
            min_len: 7,
            ..GameOptions::default()
        };
        let err = create_game_state(dict, 6, &options, &mut rng()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn zero_min_len_is_invalid() {
        let options = GameOptions {
            min_len: 0,
            ..GameOptions::default()
        };
        let err = create_game_state(Dictionary::embedded(), 5, &options, &mut rng()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn missing_length_is_no_word_found() {
        let dict = Dictionary::from_entries(["cat", "yellow"]);
        let err = create_game_state(&dict, 5, &GameOptions::default(), &mut rng()).unwrap_err();
        assert!(matches!(err, EngineError::NoWordFound { length: 5 }));
    }

    #[test]
    fn uniform_word_keeps_scramble_equal() {
        let dict = Dictionary::from_entries(["zzz"]);
        let game = create_game_state(&dict, 3, &GameOptions::default(), &mut rng()).unwrap();
        assert_eq!(game.scrambled(), "zzz");
        assert_eq!(game.total(), 1);
    }

    #[test]
    fn dictionary_filtered_game() {
        let dict = Dictionary::from_entries(["yellow", "low", "owl", "yew", "cat"]);
        let options = GameOptions {
            arrangement: Arrangement::Anagram,
            dictionary_filter: true,
            ..GameOptions::default()
        };
        let game = create_game_state(&dict, 6, &options, &mut rng()).unwrap();
        let words: Vec<&str> = game.sub_words().keys().map(String::as_str).collect();
        assert_eq!(words, ["low", "owl", "yellow", "yew"]);
    }

    #[test]
    fn same_seed_same_game() {
        let dict = Dictionary::embedded();
        let a = create_game_state(dict, 5, &GameOptions::default(), &mut rng()).unwrap();
        let b = create_game_state(dict, 5, &GameOptions::default(), &mut rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn discover_marks_once() {
        let mut game = GameState::new("cats", "tsac", ["cat".to_string(), "cats".to_string()]);

        assert_eq!(game.discover("CAT"), Discovery::Found);
        assert_eq!(game.discover("cat"), Discovery::AlreadyFound);
        assert_eq!(game.discover("dog"), Discovery::Unknown);
        assert_eq!(game.discovered_count(), 1);
        assert!(!game.is_complete());
        assert_eq!(game.discovered().collect::<Vec<_>>(), ["cat"]);

        assert_eq!(game.discover(" cats "), Discovery::Found);
        assert!(game.is_complete());
    }

    #[test]
    fn remaining_by_length_and_reveal() {
        let mut game = GameState::new(
            "cats",
            "stac",
            ["cat", "cas", "cats"].map(String::from),
        );
        game.discover("cas");

        let remaining = game.remaining_by_length();
        assert_eq!(remaining.get(&3), Some(&1));
        assert_eq!(remaining.get(&4), Some(&1));

        game.reveal();
        assert!(game.is_complete());
        assert!(game.remaining_by_length().is_empty());
    }

    #[test]
    fn is_original_ignores_case() {
        let game = GameState::new("Bridge", "gedirB", Vec::new());
        assert!(game.is_original("bridge"));
        assert!(!game.is_original("ridge"));
    }
}
