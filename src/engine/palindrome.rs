//! Palindrome detection over the dictionary

use crate::dictionary::Dictionary;

/// True if `word` has at least two characters and reads the same reversed
///
/// Characters are compared as stored, so "Anna" is not a palindrome.
#[must_use]
pub fn is_palindrome(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    chars.len() >= 2 && chars.iter().eq(chars.iter().rev())
}

/// All palindromic entries, in dictionary order
#[must_use]
pub fn palindromes(dictionary: &Dictionary) -> Vec<&str> {
    dictionary
        .all_words()
        .filter(|word| is_palindrome(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_palindromes() {
        assert!(is_palindrome("deed"));
        assert!(is_palindrome("eye"));
        assert!(is_palindrome("aa"));
        assert!(is_palindrome("racecar"));
        assert!(!is_palindrome("cat"));
        assert!(!is_palindrome("ab"));
    }

    #[test]
    fn single_characters_are_excluded() {
        assert!(!is_palindrome(""));
        assert!(!is_palindrome("a"));
    }

    #[test]
    fn comparison_is_ordinal() {
        assert!(!is_palindrome("Anna"));
        assert!(is_palindrome("anna"));
    }

    #[test]
    fn palindromes_in_dictionary_order() {
        let dict = Dictionary::from_entries(["deed", "cat", "eye", "a", "noon"]);
        assert_eq!(palindromes(&dict), ["deed", "eye", "noon"]);
    }

    #[test]
    fn embedded_palindromes_are_valid() {
        let found = palindromes(Dictionary::embedded());
        assert!(found.contains(&"level"));
        assert!(found.contains(&"radar"));
        for word in found {
            assert!(word.chars().count() >= 2);
            assert!(word.chars().eq(word.chars().rev()), "'{word}' is not a palindrome");
        }
    }
}
