//! Membership and prefix lookup
//!
//! Both operations treat malformed input as "no results" rather than an error.

use crate::dictionary::Dictionary;

/// Case-insensitive membership test; empty or blank input is never a member
#[must_use]
pub fn exists(dictionary: &Dictionary, word: &str) -> bool {
    dictionary.contains(word)
}

/// Lowercase forms of the entries starting with `prefix`, case-insensitive, in
/// dictionary order
///
/// Returns nothing if `prefix` is empty, blank, or contains anything other than
/// ASCII letters.
///
/// # Examples
/// ```
/// use jumble_engine::dictionary::Dictionary;
/// use jumble_engine::engine::lookup::words_with_prefix;
///
/// let dict = Dictionary::from_entries(["prefix", "Prey", "pen"]);
/// assert_eq!(words_with_prefix(&dict, "PRE"), ["prefix", "prey"]);
/// assert!(words_with_prefix(&dict, "pr3").is_empty());
/// ```
#[must_use]
pub fn words_with_prefix<'a>(dictionary: &'a Dictionary, prefix: &str) -> Vec<&'a str> {
    if !is_letter_prefix(prefix) {
        return Vec::new();
    }
    dictionary.words_with_prefix(prefix)
}

fn is_letter_prefix(prefix: &str) -> bool {
    !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_entries(["listen", "silent", "prefer", "present", "press", "Prey", "pen"])
    }

    #[test]
    fn exists_is_case_insensitive() {
        let dict = sample();
        assert_eq!(exists(&dict, "Listen"), exists(&dict, "listen"));
        assert!(exists(&dict, "LISTEN"));
        assert!(exists(&dict, "prey"));
        assert!(!exists(&dict, "tinsel"));
    }

    #[test]
    fn exists_rejects_empty_and_blank() {
        let dict = sample();
        assert!(!exists(&dict, ""));
        assert!(!exists(&dict, "   "));
    }

    #[test]
    fn prefix_matches_lowercase_form() {
        let dict = sample();
        assert_eq!(
            words_with_prefix(&dict, "pre"),
            ["prefer", "present", "press", "prey"]
        );
        assert_eq!(words_with_prefix(&dict, "PRES"), ["present", "press"]);
    }

    #[test]
    fn prefix_results_are_lowercased() {
        let dict = Dictionary::from_entries(["Prey", "prefer", "PREVIEW", "pen"]);
        assert_eq!(words_with_prefix(&dict, "pre"), ["prey", "prefer", "preview"]);
        assert!(dict.all_words().any(|w| w == "Prey"));
    }

    #[test]
    fn prefix_rejects_non_letters() {
        let dict = sample();
        assert!(words_with_prefix(&dict, "xyz123").is_empty());
        assert!(words_with_prefix(&dict, "pre-").is_empty());
        assert!(words_with_prefix(&dict, " pre").is_empty());
    }

    #[test]
    fn prefix_rejects_empty_and_blank() {
        let dict = sample();
        assert!(words_with_prefix(&dict, "").is_empty());
        assert!(words_with_prefix(&dict, "   ").is_empty());
    }

    #[test]
    fn prefix_with_no_match() {
        let dict = sample();
        assert!(words_with_prefix(&dict, "zebra").is_empty());
    }

    #[test]
    fn embedded_prefix_results_start_with_prefix() {
        let found = words_with_prefix(Dictionary::embedded(), "pre");
        assert!(!found.is_empty());
        assert!(found.iter().all(|w| w.to_lowercase().starts_with("pre")));
    }
}
