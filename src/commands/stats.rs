//! Dictionary statistics
//!
//! Profiles the loaded dictionary: words per length, palindromes, and how many
//! ordered sub-words a seed of each length produces.

use crate::dictionary::Dictionary;
use crate::engine::palindrome::is_palindrome;
use crate::engine::subwords::{DEFAULT_MIN_LEN, subwords};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Longest seed profiled for sub-word counts; longer words are counted but not expanded
pub const MAX_PROFILED_SEED_LEN: usize = 12;

/// Per-length statistics
#[derive(Debug, Clone, PartialEq)]
pub struct LengthStats {
    pub length: usize,
    pub words: usize,
    pub playable: usize,
    pub average_subwords: Option<f64>,
    pub richest: Option<(String, usize)>,
}

/// Statistics for a whole dictionary
#[derive(Debug)]
pub struct DictionaryStats {
    pub total_words: usize,
    pub palindromes: usize,
    pub by_length: Vec<LengthStats>,
    pub total_time: Duration,
}

struct WordProfile {
    length: usize,
    playable: bool,
    palindrome: bool,
    subwords: Option<usize>,
}

/// Profile every dictionary entry in parallel
///
/// Set `show_progress` to draw a progress bar on stderr.
#[must_use]
pub fn dictionary_stats(dictionary: &Dictionary, show_progress: bool) -> DictionaryStats {
    let start = Instant::now();
    let words: Vec<&str> = dictionary.all_words().collect();

    let pb = if show_progress {
        ProgressBar::new(words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );
    pb.set_message("profiling");

    let profiles: Vec<(&str, WordProfile)> = words
        .par_iter()
        .map(|&word| {
            let length = word.chars().count();
            let playable = word.bytes().all(|b| b.is_ascii_alphabetic());
            let subword_count = (playable && length <= MAX_PROFILED_SEED_LEN)
                .then(|| subwords(word, DEFAULT_MIN_LEN.min(length)).len());
            pb.inc(1);
            (
                word,
                WordProfile {
                    length,
                    playable,
                    palindrome: is_palindrome(word),
                    subwords: subword_count,
                },
            )
        })
        .collect();

    pb.finish_with_message("Complete!");

    let palindromes = profiles.iter().filter(|(_, p)| p.palindrome).count();

    let by_length = dictionary
        .lengths()
        .into_iter()
        .map(|length| {
            let group: Vec<(&str, &WordProfile)> = profiles
                .iter()
                .filter(|(_, p)| p.length == length)
                .map(|(word, p)| (*word, p))
                .collect();
            let counted: Vec<(&str, usize)> = group
                .iter()
                .filter_map(|(word, p)| p.subwords.map(|n| (*word, n)))
                .collect();
            let average_subwords = (!counted.is_empty()).then(|| {
                counted.iter().map(|(_, n)| *n).sum::<usize>() as f64 / counted.len() as f64
            });
            let richest = counted
                .iter()
                .max_by_key(|(_, n)| *n)
                .map(|(word, n)| ((*word).to_string(), *n));

            LengthStats {
                length,
                words: group.len(),
                playable: group.iter().filter(|(_, p)| p.playable).count(),
                average_subwords,
                richest,
            }
        })
        .collect();

    DictionaryStats {
        total_words: words.len(),
        palindromes,
        by_length,
        total_time: start.elapsed(),
    }
}

/// Print dictionary statistics
pub fn print_dictionary_stats(stats: &DictionaryStats) {
    println!("\n{}", "═".repeat(70));
    println!(" Dictionary Profile ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overview".bright_cyan().bold());
    println!("  Total words:   {}", stats.total_words);
    println!("  Palindromes:   {}", stats.palindromes);
    println!("  Profiled in:   {:.2}s", stats.total_time.as_secs_f64());

    println!("\n📈 {}", "Words by Length".bright_cyan().bold());
    let max_count = stats.by_length.iter().map(|s| s.words).max().unwrap_or(1);
    for entry in &stats.by_length {
        let bar_len = (entry.words * 40 / max_count.max(1)).max(usize::from(entry.words > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {:>2} letters: {bar} {:5}", entry.length, entry.words);
    }

    println!(
        "\n🧩 {}",
        "Sub-words per Seed (ordered, unfiltered)"
            .bright_cyan()
            .bold()
    );
    for entry in &stats.by_length {
        match (&entry.average_subwords, &entry.richest) {
            (Some(avg), Some((word, count))) => println!(
                "  {:>2} letters: avg {} | richest {} ({count})",
                entry.length,
                format!("{avg:8.1}").bright_yellow(),
                word.to_uppercase().bright_white().bold()
            ),
            _ => println!(
                "  {:>2} letters: {}",
                entry.length,
                "not profiled".bright_black()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_group_by_length() {
        let dict = Dictionary::from_entries(["deed", "eye", "cats", "cat", "it's", "a"]);
        let stats = dictionary_stats(&dict, false);

        assert_eq!(stats.total_words, 6);
        assert_eq!(stats.palindromes, 2);

        let lengths: Vec<usize> = stats.by_length.iter().map(|s| s.length).collect();
        assert_eq!(lengths, [1, 3, 4]);
        assert_eq!(lengths, dict.lengths());

        let four = &stats.by_length[2];
        assert_eq!(four.words, 3);
        assert_eq!(four.playable, 2);
        assert_eq!(four.richest.as_ref().map(|(_, n)| *n), Some(5));
    }

    #[test]
    fn single_letter_words_profiled_with_reduced_min_len() {
        let dict = Dictionary::from_entries(["a"]);
        let stats = dictionary_stats(&dict, false);
        assert_eq!(stats.by_length[0].average_subwords, Some(1.0));
    }

    #[test]
    fn long_words_not_expanded() {
        let seed = "abcdefghijklm";
        let dict = Dictionary::from_entries([seed]);
        let stats = dictionary_stats(&dict, false);
        assert_eq!(stats.by_length[0].average_subwords, None);
        assert_eq!(stats.by_length[0].playable, 1);
    }

    #[test]
    fn empty_dictionary() {
        let stats = dictionary_stats(&Dictionary::default(), false);
        assert_eq!(stats.total_words, 0);
        assert!(stats.by_length.is_empty());
    }
}
