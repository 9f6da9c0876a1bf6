//! Jumble word representation
//!
//! A Word is a non-empty run of ASCII letters. The text is kept as entered for
//! display, alongside a lowercase form used for every comparison.

use super::letters::LetterCounts;
use std::fmt;

/// A validated word of ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    lower: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed; case is preserved in [`Word::text`].
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed input is empty
    /// - Contains non-ASCII characters
    /// - Contains anything other than letters
    ///
    /// # Examples
    /// ```
    /// use jumble_engine::core::Word;
    ///
    /// let word = Word::new(" Listen ").unwrap();
    /// assert_eq!(word.text(), "Listen");
    /// assert_eq!(word.lower(), "listen");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("b4").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: text.to_string(),
            lower: text.to_ascii_lowercase(),
        })
    }

    /// The word as entered (trimmed, case preserved)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The lowercase form used for matching
    #[inline]
    #[must_use]
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lower.len()
    }

    /// Always false for a constructed Word; present for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// Letter multiset of the lowercase form
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        LetterCounts::of(&self.lower)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.lower(), "crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_preserves_case() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "CrAnE");
        assert_eq!(word.lower(), "crane");
    }

    #[test]
    fn word_creation_trims() {
        let word = Word::new("  yellow\t").unwrap();
        assert_eq!(word.text(), "yellow");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("two words"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("it's"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("Speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get('e'), 2);
        assert_eq!(counts.get('s'), 1);
        assert_eq!(counts.get('z'), 0);
    }

    #[test]
    fn word_display_uses_original_text() {
        let word = Word::new("Listen").unwrap();
        assert_eq!(format!("{word}"), "Listen");
    }

    #[test]
    fn word_equality_is_case_sensitive_on_text() {
        let a = Word::new("listen").unwrap();
        let b = Word::new("Listen").unwrap();
        assert_ne!(a, b);
        assert_eq!(a.lower(), b.lower());
    }
}
