//! Command implementations

pub mod game;
pub mod lookup;
pub mod scramble;
pub mod search;
pub mod simple;
pub mod stats;
pub mod subwords;

pub use game::{GameSummary, new_game, pick_random_word};
pub use lookup::{ExistsResult, PrefixResult, check_exists, list_palindromes, prefix_search};
pub use scramble::{ScrambleResult, scramble_word};
pub use search::{SearchResult, run_search};
pub use simple::{play_session, run_simple};
pub use stats::{DictionaryStats, LengthStats, dictionary_stats, print_dictionary_stats};
pub use subwords::{SubwordsConfig, SubwordsResult, list_subwords};
