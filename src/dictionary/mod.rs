//! Word store
//!
//! The dictionary is loaded once and never mutated afterwards. Every other
//! component borrows it, so concurrent readers need no locking.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{DictionarySource, load, load_from_file};

use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::OnceLock;

/// Immutable, indexed word list
///
/// Keeps each entry as written (trimmed, case preserved, insertion order) next to
/// its lowercase form. Derived indices give O(1) membership, an O(1) length
/// bucket and an O(1) first-letter bucket for prefix queries.
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: Vec<String>,
    lower: Vec<String>,
    members: FxHashSet<String>,
    by_length: FxHashMap<usize, Vec<usize>>,
    by_initial: FxHashMap<char, Vec<usize>>,
}

impl Dictionary {
    /// Build a dictionary from entries, trimming each and dropping blanks
    ///
    /// # Examples
    /// ```
    /// use jumble_engine::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_entries(["Deed", "  eye ", "", "cat"]);
    /// assert_eq!(dict.all_words().collect::<Vec<_>>(), ["Deed", "eye", "cat"]);
    /// assert!(dict.contains("DEED"));
    /// ```
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();
        for entry in entries {
            dict.push(entry.as_ref());
        }
        dict
    }

    /// Build a dictionary from line-delimited text
    #[must_use]
    pub fn from_lines(content: &str) -> Self {
        Self::from_entries(content.lines())
    }

    /// The dictionary compiled into the binary, loaded on first use
    pub fn embedded() -> &'static Self {
        static EMBEDDED: OnceLock<Dictionary> = OnceLock::new();
        EMBEDDED.get_or_init(|| {
            let dict = Self::from_entries(WORDS);
            tracing::debug!(words = dict.len(), "loaded embedded dictionary");
            dict
        })
    }

    fn push(&mut self, raw: &str) {
        let entry = raw.trim();
        if entry.is_empty() {
            return;
        }

        let lower = entry.to_lowercase();
        let idx = self.entries.len();

        self.by_length
            .entry(lower.chars().count())
            .or_default()
            .push(idx);
        if let Some(initial) = lower.chars().next() {
            self.by_initial.entry(initial).or_default().push(idx);
        }
        self.members.insert(lower.clone());

        self.entries.push(entry.to_string());
        self.lower.push(lower);
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing was loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries as written, in insertion order
    pub fn all_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    /// Lowercase forms, in insertion order
    pub fn lowercase_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.lower.iter().map(String::as_str)
    }

    /// Entry at `idx` paired with its lowercase form
    pub(crate) fn entry(&self, idx: usize) -> (&str, &str) {
        (&self.entries[idx], &self.lower[idx])
    }

    /// Case-insensitive membership; surrounding whitespace is ignored
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim();
        !word.is_empty() && self.members.contains(&word.to_lowercase())
    }

    /// Entries with exactly `n` characters, in insertion order
    #[must_use]
    pub fn words_of_length(&self, n: usize) -> Vec<&str> {
        self.length_bucket(n)
            .iter()
            .map(|&idx| self.entries[idx].as_str())
            .collect()
    }

    pub(crate) fn length_bucket(&self, n: usize) -> &[usize] {
        self.by_length.get(&n).map_or(&[], Vec::as_slice)
    }

    /// Lowercase forms starting with `prefix` (case-insensitive), in insertion order
    ///
    /// An empty prefix matches every entry.
    #[must_use]
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.to_lowercase();

        let Some(initial) = prefix.chars().next() else {
            return self.lowercase_words().collect();
        };

        self.by_initial
            .get(&initial)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(|&idx| self.lower[idx].as_str())
            .filter(|lower| lower.starts_with(&prefix))
            .collect()
    }

    /// Distinct entry lengths, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_lines("Listen\nsilent\n\n  prefer \nprize\npen\nPrey\n")
    }

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
        assert_eq!(Dictionary::embedded().len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_entries_are_trimmed_and_non_blank() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert_eq!(word, word.trim(), "Word '{word}' has surrounding whitespace");
        }
    }

    #[test]
    fn blank_lines_dropped_and_order_kept() {
        let dict = sample();
        assert_eq!(dict.len(), 6);
        assert_eq!(
            dict.all_words().collect::<Vec<_>>(),
            ["Listen", "silent", "prefer", "prize", "pen", "Prey"]
        );
    }

    #[test]
    fn lowercase_view_parallels_entries() {
        let dict = sample();
        let lower: Vec<&str> = dict.lowercase_words().collect();
        assert_eq!(lower, ["listen", "silent", "prefer", "prize", "pen", "prey"]);
    }

    #[test]
    fn contains_is_case_insensitive() {
        let dict = sample();
        assert!(dict.contains("listen"));
        assert!(dict.contains("LISTEN"));
        assert!(dict.contains(" Silent "));
        assert!(!dict.contains("enlist"));
        assert!(!dict.contains(""));
        assert!(!dict.contains("   "));
    }

    #[test]
    fn words_of_length_uses_index() {
        let dict = sample();
        assert_eq!(dict.words_of_length(6), ["Listen", "silent", "prefer"]);
        assert_eq!(dict.words_of_length(3), ["pen"]);
        assert!(dict.words_of_length(12).is_empty());
    }

    #[test]
    fn words_with_prefix_case_insensitive() {
        let dict = sample();
        assert_eq!(dict.words_with_prefix("PR"), ["prefer", "prize", "prey"]);
        assert_eq!(dict.words_with_prefix("pre"), ["prefer", "prey"]);
        assert!(dict.words_with_prefix("q").is_empty());
    }

    #[test]
    fn prefix_bucket_matches_full_scan() {
        let dict = Dictionary::embedded();
        for prefix in ["a", "pre", "st", "yel", "zz"] {
            let scanned: Vec<&str> = dict
                .lowercase_words()
                .filter(|w| w.starts_with(prefix))
                .collect();
            assert_eq!(dict.words_with_prefix(prefix), scanned, "prefix '{prefix}'");
        }
    }

    #[test]
    fn empty_prefix_matches_everything() {
        let dict = sample();
        assert_eq!(dict.words_with_prefix("").len(), dict.len());
    }

    #[test]
    fn lengths_sorted() {
        let dict = sample();
        assert_eq!(dict.lengths(), [3, 4, 5, 6]);
    }
}
