//! Letter multisets over a-z

/// Count of each lowercase ASCII letter in a string
///
/// Non-letters are ignored and uppercase letters fold to lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCounts([u8; 26]);

impl LetterCounts {
    /// Build the multiset for `text`
    #[must_use]
    pub fn of(text: &str) -> Self {
        let mut counts = [0u8; 26];
        for b in text.bytes().filter(u8::is_ascii_alphabetic) {
            let idx = usize::from(b.to_ascii_lowercase() - b'a');
            counts[idx] = counts[idx].saturating_add(1);
        }
        Self(counts)
    }

    /// Occurrences of `letter` (case-insensitive)
    #[must_use]
    pub fn get(&self, letter: char) -> u8 {
        if letter.is_ascii_alphabetic() {
            self.0[usize::from(letter.to_ascii_lowercase() as u8 - b'a')]
        } else {
            0
        }
    }

    /// True if every letter of `self` is available in `other`
    ///
    /// # Examples
    /// ```
    /// use jumble_engine::core::LetterCounts;
    ///
    /// let seed = LetterCounts::of("yellow");
    /// assert!(LetterCounts::of("owl").is_subset_of(&seed));
    /// assert!(!LetterCounts::of("wow").is_subset_of(&seed));
    /// ```
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a <= b)
    }

    /// Total number of letters
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| usize::from(c)).sum()
    }

    pub(crate) fn as_array(&self) -> &[u8; 26] {
        &self.0
    }
}
