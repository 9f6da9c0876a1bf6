//! Random word picking

use crate::dictionary::Dictionary;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick a word uniformly at random, optionally of exactly `length` characters
///
/// Returns `None` if the dictionary is empty or has no word of that length.
pub fn random_word<'a, R: Rng + ?Sized>(
    dictionary: &'a Dictionary,
    length: Option<usize>,
    rng: &mut R,
) -> Option<&'a str> {
    match length {
        None => {
            if dictionary.is_empty() {
                return None;
            }
            let idx = rng.random_range(0..dictionary.len());
            Some(dictionary.entry(idx).0)
        }
        Some(n) => dictionary
            .length_bucket(n)
            .choose(rng)
            .map(|&idx| dictionary.entry(idx).0),
    }
}

/// Pick a word of exactly `length` ASCII letters, as a playable seed
///
/// Entries containing anything other than letters are skipped.
pub fn random_letter_word<'a, R: Rng + ?Sized>(
    dictionary: &'a Dictionary,
    length: usize,
    rng: &mut R,
) -> Option<&'a str> {
    let playable: Vec<&str> = dictionary
        .length_bucket(length)
        .iter()
        .map(|&idx| dictionary.entry(idx).0)
        .filter(|entry| entry.bytes().all(|b| b.is_ascii_alphabetic()))
        .collect();

    playable.choose(rng).copied()
}
