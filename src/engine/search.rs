//! Range search by first letter, last letter and length
//!
//! Criteria combine conjunctively: a word matches when every supplied criterion
//! holds. Criteria left as `None` impose no constraint.

use crate::dictionary::Dictionary;

/// Search filters; at least one must be supplied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub start: Option<char>,
    pub end: Option<char>,
    pub length: Option<usize>,
}

impl SearchCriteria {
    #[must_use]
    pub const fn new(start: Option<char>, end: Option<char>, length: Option<usize>) -> Self {
        Self { start, end, length }
    }

    #[must_use]
    pub const fn starting_with(mut self, letter: char) -> Self {
        self.start = Some(letter);
        self
    }

    #[must_use]
    pub const fn ending_with(mut self, letter: char) -> Self {
        self.end = Some(letter);
        self
    }

    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// True if at least one criterion is supplied and every supplied one is valid
    ///
    /// Letters must be `a`-`z` (either case); length must be at least 1.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let any_supplied = self.start.is_some() || self.end.is_some() || self.length.is_some();

        any_supplied
            && self.start.is_none_or(|c| c.is_ascii_alphabetic())
            && self.end.is_none_or(|c| c.is_ascii_alphabetic())
            && self.length.is_none_or(|n| n >= 1)
    }

    fn matches(&self, lower: &str) -> bool {
        self.start
            .is_none_or(|c| lower.starts_with(c.to_ascii_lowercase()))
            && self
                .end
                .is_none_or(|c| lower.ends_with(c.to_ascii_lowercase()))
            && self.length.is_none_or(|n| lower.chars().count() == n)
    }
}

/// Entries matching every supplied criterion, in dictionary order
///
/// Invalid or empty criteria yield no results.
///
/// # Examples
/// ```
/// use jumble_engine::dictionary::Dictionary;
/// use jumble_engine::engine::search::{SearchCriteria, search};
///
/// let dict = Dictionary::from_entries(["apple", "angel", "arm", "bagel"]);
/// let criteria = SearchCriteria::default().starting_with('A').with_length(5);
/// assert_eq!(search(&dict, &criteria), ["apple", "angel"]);
/// ```
#[must_use]
pub fn search<'a>(dictionary: &'a Dictionary, criteria: &SearchCriteria) -> Vec<&'a str> {
    if !criteria.is_valid() {
        return Vec::new();
    }

    let candidates: Box<dyn Iterator<Item = usize> + 'a> = match criteria.length {
        Some(n) => Box::new(dictionary.length_bucket(n).iter().copied()),
        None => Box::new(0..dictionary.len()),
    };

    candidates
        .map(|idx| dictionary.entry(idx))
        .filter(|(_, lower)| criteria.matches(lower))
        .map(|(entry, _)| entry)
        .collect()
}
