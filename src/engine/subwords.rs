//! Sub-word generation
//!
//! Enumerates the strings that can be formed from a seed word's letters at every
//! length from a minimum up to the seed's own length.
//!
//! Two switches control the output, and neither is applied implicitly:
//!
//! - [`Arrangement`]: `Ordered` keeps letters in seed order (every choice of
//!   positions), `Anagram` allows any order of any sub-multiset of letters.
//! - `dictionary`: when set, only dictionary words survive. Without it the result
//!   is purely combinatorial and most strings are not real words.
//!
//! # Bounds
//!
//! Unfiltered generation is exponential. `Ordered` visits 2^n position subsets and
//! is capped at [`MAX_ORDERED_SEED_LEN`] letters; unfiltered `Anagram` visits every
//! arrangement of every sub-multiset and is capped at [`MAX_ANAGRAM_SEED_LEN`].
//! Seeds over a cap produce an empty set and a warning. Dictionary-filtered
//! generation scans the dictionary instead of enumerating, so it has no cap.

use crate::core::{LetterCounts, Word};
use crate::dictionary::Dictionary;
use std::collections::BTreeSet;

/// Default minimum sub-word length
pub const DEFAULT_MIN_LEN: usize = 3;

/// Longest seed accepted for unfiltered ordered generation
pub const MAX_ORDERED_SEED_LEN: usize = 20;

/// Longest seed accepted for unfiltered anagram generation
pub const MAX_ANAGRAM_SEED_LEN: usize = 8;

/// How chosen letters may be arranged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Arrangement {
    /// Letters keep their order in the seed
    #[default]
    Ordered,
    /// Letters may appear in any order
    Anagram,
}

/// Generation options
#[derive(Debug, Clone, Copy)]
pub struct SubwordOptions<'d> {
    pub min_len: usize,
    pub arrangement: Arrangement,
    pub dictionary: Option<&'d Dictionary>,
}

impl Default for SubwordOptions<'_> {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            arrangement: Arrangement::Ordered,
            dictionary: None,
        }
    }
}

impl<'d> SubwordOptions<'d> {
    #[must_use]
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    #[must_use]
    pub fn with_arrangement(mut self, arrangement: Arrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    #[must_use]
    pub fn filtered_by(mut self, dictionary: &'d Dictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }
}

/// Ordered, unfiltered sub-words of `word` with at least `min_len` letters
///
/// # Examples
/// ```
/// use jumble_engine::engine::subwords::subwords;
///
/// let found = subwords("cats", 3);
/// assert!(found.contains("cat"));
/// assert!(found.contains("cts"));
/// assert!(found.contains("cats"));
/// assert_eq!(found.len(), 5);
///
/// assert!(subwords("ab", 3).is_empty());
/// ```
#[must_use]
pub fn subwords(word: &str, min_len: usize) -> BTreeSet<String> {
    generate(word, &SubwordOptions::default().with_min_len(min_len))
}

/// Generate sub-words of `word` according to `options`
///
/// Returns lowercase strings. Blank or non-letter seeds, `min_len == 0`, and seeds
/// shorter than `min_len` yield an empty set. The seed itself is included.
#[must_use]
pub fn generate(word: &str, options: &SubwordOptions<'_>) -> BTreeSet<String> {
    let Ok(seed) = Word::new(word) else {
        return BTreeSet::new();
    };
    if options.min_len == 0 || seed.len() < options.min_len {
        return BTreeSet::new();
    }

    match (options.arrangement, options.dictionary) {
        (Arrangement::Ordered, None) => ordered_combinations(seed.lower(), options.min_len),
        (Arrangement::Anagram, None) => anagram_combinations(&seed, options.min_len),
        (Arrangement::Ordered, Some(dict)) => {
            dictionary_matches(dict, &seed, options.min_len, |lower| {
                is_subsequence(lower, seed.lower())
            })
        }
        (Arrangement::Anagram, Some(dict)) => {
            let available = seed.letter_counts();
            dictionary_matches(dict, &seed, options.min_len, |lower| {
                LetterCounts::of(lower).is_subset_of(&available)
            })
        }
    }
}

/// Every choice of at least `min_len` positions, letters kept in order
///
/// Positions are enumerated as bitmasks, so no recursion is involved.
fn ordered_combinations(seed: &str, min_len: usize) -> BTreeSet<String> {
    let letters = seed.as_bytes();
    let n = letters.len();
    if n > MAX_ORDERED_SEED_LEN {
        tracing::warn!(
            seed,
            limit = MAX_ORDERED_SEED_LEN,
            "seed too long for ordered sub-word generation"
        );
        return BTreeSet::new();
    }

    let mut result = BTreeSet::new();
    let mut buf = String::with_capacity(n);
    for mask in 1u32..(1u32 << n) {
        if (mask.count_ones() as usize) < min_len {
            continue;
        }
        buf.clear();
        buf.extend(
            letters
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1u32 << i) != 0)
                .map(|(_, &b)| char::from(b)),
        );
        if !result.contains(buf.as_str()) {
            result.insert(buf.clone());
        }
    }
    result
}

/// Every arrangement of every sub-multiset with at least `min_len` letters
///
/// Walks letter counts depth-first; depth never exceeds the seed length.
fn anagram_combinations(seed: &Word, min_len: usize) -> BTreeSet<String> {
    if seed.len() > MAX_ANAGRAM_SEED_LEN {
        tracing::warn!(
            seed = seed.lower(),
            limit = MAX_ANAGRAM_SEED_LEN,
            "seed too long for anagram sub-word generation"
        );
        return BTreeSet::new();
    }

    let mut counts = *seed.letter_counts().as_array();
    let mut current = String::with_capacity(seed.len());
    let mut result = BTreeSet::new();
    extend_arrangements(&mut counts, &mut current, min_len, &mut result);
    result
}

fn extend_arrangements(
    counts: &mut [u8; 26],
    current: &mut String,
    min_len: usize,
    result: &mut BTreeSet<String>,
) {
    if current.len() >= min_len {
        result.insert(current.clone());
    }

    for letter in 0..26u8 {
        let idx = usize::from(letter);
        if counts[idx] == 0 {
            continue;
        }
        counts[idx] -= 1;
        current.push(char::from(b'a' + letter));
        extend_arrangements(counts, current, min_len, result);
        current.pop();
        counts[idx] += 1;
    }
}

fn dictionary_matches<F>(
    dict: &Dictionary,
    seed: &Word,
    min_len: usize,
    fits: F,
) -> BTreeSet<String>
where
    F: Fn(&str) -> bool,
{
    (min_len..=seed.len())
        .flat_map(|len| dict.length_bucket(len).iter())
        .map(|&idx| dict.entry(idx).1)
        .filter(|lower| lower.bytes().all(|b| b.is_ascii_lowercase()) && fits(lower))
        .map(str::to_string)
        .collect()
}

/// True if `needle` can be formed by deleting characters from `haystack`
fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut remaining = haystack.chars();
    needle.chars().all(|c| remaining.any(|h| h == c))
}
