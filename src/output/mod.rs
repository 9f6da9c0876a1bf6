//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_exists_result, print_game_summary, print_palindromes, print_prefix_result,
    print_random_word, print_scramble_result, print_search_result, print_subwords_result,
};
