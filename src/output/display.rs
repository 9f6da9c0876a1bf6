//! Display functions for command results

use super::formatters::{create_progress_bar, format_columns, mask_word};
use crate::commands::{
    ExistsResult, GameSummary, PrefixResult, ScrambleResult, SearchResult, SubwordsResult,
};
use crate::engine::Arrangement;
use colored::Colorize;

const WORD_COLUMNS: usize = 6;

/// Print a scrambled word
pub fn print_scramble_result(result: &ScrambleResult) {
    println!(
        "{} → {}",
        result.word.bright_white(),
        result.scrambled.bright_yellow().bold()
    );
}

/// Print a membership check
pub fn print_exists_result(result: &ExistsResult) {
    if result.exists {
        println!("✅ {} is in the dictionary", result.word.green().bold());
    } else {
        println!("❌ {} is not in the dictionary", result.word.red().bold());
    }
}

/// Print the palindrome list
pub fn print_palindromes(words: &[String]) {
    print_heading("PALINDROMES", words.len());
    print_word_list(words);
}

/// Print a prefix search
pub fn print_prefix_result(result: &PrefixResult) {
    print_heading(&format!("WORDS STARTING WITH '{}'", result.prefix), result.words.len());
    print_word_list(&result.words);
}

/// Print a range search
pub fn print_search_result(result: &SearchResult) {
    let mut filters = Vec::new();
    if let Some(start) = result.criteria.start {
        filters.push(format!("start '{start}'"));
    }
    if let Some(end) = result.criteria.end {
        filters.push(format!("end '{end}'"));
    }
    if let Some(length) = result.criteria.length {
        filters.push(format!("length {length}"));
    }
    print_heading(
        &format!("SEARCH: {}", filters.join(", ").to_uppercase()),
        result.words.len(),
    );
    print_word_list(&result.words);
}

/// Print generated sub-words
pub fn print_subwords_result(result: &SubwordsResult) {
    let mode = match result.arrangement {
        Arrangement::Ordered => "ordered",
        Arrangement::Anagram => "anagram",
    };
    let filter = if result.real_words_only {
        ", dictionary words only"
    } else {
        ""
    };

    print_heading(
        &format!("SUB-WORDS OF {}", result.word.trim().to_uppercase()),
        result.words.len(),
    );
    println!(
        "  {}",
        format!(
            "min length {}, {mode}{filter}, {:.1}ms",
            result.min_len,
            result.duration.as_secs_f64() * 1000.0
        )
        .bright_black()
    );
    if result.truncated {
        println!(
            "  {}",
            "⚠ seed too long to enumerate without --real-words".yellow()
        );
    }
    print_word_list(&result.words);
}

/// Print a new game with its hidden words masked
pub fn print_game_summary(summary: &GameSummary, reveal: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "JUMBLE:".bright_cyan().bold(),
        summary.scrambled.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} words to find (min length {})",
        summary.sub_words.len(),
        summary.min_len
    );

    let max_count = summary.by_length.values().copied().max().unwrap_or(0);
    for (length, count) in &summary.by_length {
        let bar = create_progress_bar(*count as f64, max_count as f64, 30);
        println!("   {length:>2} letters: {} {count:4}", bar.green());
    }

    let cells: Vec<String> = if reveal {
        summary.sub_words.iter().map(|w| w.to_uppercase()).collect()
    } else {
        summary.sub_words.iter().map(|w| mask_word(w)).collect()
    };
    println!();
    for row in format_columns(&cells, WORD_COLUMNS) {
        println!("   {row}");
    }

    if reveal {
        println!(
            "\n   The word was {}",
            summary.original.to_uppercase().bright_green().bold()
        );
    }
}

/// Print a random word
pub fn print_random_word(word: &str) {
    println!("🎲 {}", word.bright_yellow().bold());
}

fn print_heading(title: &str, count: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        " {} {}",
        title.bright_cyan().bold(),
        format!("({count})").bright_black()
    );
    println!("{}", "─".repeat(60).cyan());
}

fn print_word_list(words: &[String]) {
    if words.is_empty() {
        println!("  {}", "(no words)".bright_black());
        return;
    }
    for row in format_columns(words, WORD_COLUMNS) {
        println!("  {row}");
    }
}
