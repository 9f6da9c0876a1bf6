//! Letter scrambling

use rand::Rng;
use rand::seq::SliceRandom;

/// Produce a random permutation of `word`'s characters that differs from `word`
///
/// Words whose every permutation equals the input (empty, a single character, or
/// one character repeated like "aaa") are returned unchanged instead of looping.
///
/// # Examples
/// ```
/// use jumble_engine::engine::scramble::scramble;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let scrambled = scramble("elephant", &mut rng);
/// assert_ne!(scrambled, "elephant");
/// assert_eq!(scramble("aaa", &mut rng), "aaa");
/// ```
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    if !can_scramble(word) {
        return word.to_string();
    }

    let mut chars: Vec<char> = word.chars().collect();
    loop {
        chars.shuffle(rng);
        let candidate: String = chars.iter().collect();
        if candidate != word {
            return candidate;
        }
    }
}

/// True if at least one permutation of `word` differs from it
#[must_use]
pub fn can_scramble(word: &str) -> bool {
    let mut chars = word.chars();
    chars
        .next()
        .is_some_and(|first| chars.any(|c| c != first))
}
