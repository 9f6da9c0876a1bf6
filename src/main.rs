//! Word Jumble - CLI
//!
//! Dictionary-backed word puzzles with TUI and CLI modes.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use jumble_engine::{
    commands::{
        SubwordsConfig, check_exists, dictionary_stats, list_palindromes, list_subwords,
        new_game, pick_random_word, prefix_search, print_dictionary_stats, run_search,
        run_simple, scramble_word,
    },
    dictionary::{Dictionary, DictionarySource, load_from_file},
    engine::{Arrangement, GameOptions, JumbleEngine, SearchCriteria},
    output::{
        print_exists_result, print_game_summary, print_palindromes, print_prefix_result,
        print_random_word, print_scramble_result, print_search_result, print_subwords_result,
    },
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "jumble",
    about = "Word jumble engine: scrambles, palindromes, searches, sub-words and games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default, built-in list) or path to a word-per-line file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: DictionarySource,

    /// Seed the random generator for reproducible scrambles and games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play(GameArgs),

    /// Simple CLI game (line-based, without TUI)
    Simple(GameArgs),

    /// Scramble a word
    Scramble {
        /// Word to scramble (3 to 30 characters)
        word: String,
    },

    /// List every palindrome in the dictionary
    Palindromes,

    /// Check whether a word is in the dictionary
    Exists {
        /// Word to look up (case-insensitive)
        word: String,
    },

    /// List dictionary words starting with a prefix
    Prefix {
        /// Prefix to match (case-insensitive)
        prefix: String,
    },

    /// Search by first letter, last letter and length
    Search {
        /// First letter
        #[arg(short, long)]
        start: Option<char>,

        /// Last letter
        #[arg(short, long)]
        end: Option<char>,

        /// Exact length
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Generate the sub-words of a word
    Subwords {
        /// Seed word
        word: String,

        /// Shortest sub-word to include
        #[arg(short, long, default_value = "3")]
        min_len: usize,

        /// Allow letters in any order instead of keeping their order
        #[arg(short, long)]
        anagram: bool,

        /// Keep only dictionary words
        #[arg(short, long)]
        real_words: bool,
    },

    /// Pick a random dictionary word
    Random {
        /// Exact length
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Create a game and print it
    Game {
        #[command(flatten)]
        game: GameArgs,

        /// Show the hidden words and the secret word
        #[arg(long)]
        reveal: bool,
    },

    /// Profile the dictionary
    Stats,
}

#[derive(Args, Clone, Copy)]
struct GameArgs {
    /// Length of the secret word
    #[arg(short, long, default_value = "6")]
    length: usize,

    /// Shortest hidden word
    #[arg(short, long, default_value = "3")]
    min_len: usize,

    /// Hide anagrams, not only in-order letter picks
    #[arg(short, long)]
    anagram: bool,

    /// Hide only dictionary words
    #[arg(short, long)]
    real_words: bool,
}

impl Default for GameArgs {
    fn default() -> Self {
        Self {
            length: 6,
            min_len: 3,
            anagram: false,
            real_words: false,
        }
    }
}

impl GameArgs {
    const fn options(self) -> GameOptions {
        GameOptions {
            min_len: self.min_len,
            arrangement: arrangement(self.anagram),
            dictionary_filter: self.real_words,
        }
    }
}

const fn arrangement(anagram: bool) -> Arrangement {
    if anagram {
        Arrangement::Anagram
    } else {
        Arrangement::Ordered
    }
}

/// Install the stderr subscriber; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8, interactive: bool) {
    // The TUI owns the screen, so stay quiet there unless asked
    let default_level = match (verbose, interactive) {
        (0, true) => "off",
        (0, false) => "warn",
        (1, _) => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(default_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Filter for both the binary's own events and the library's
fn default_directive(level: &str) -> String {
    format!("jumble={level},jumble_engine={level}")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Play(GameArgs::default()));
    init_tracing(cli.verbose, matches!(command, Commands::Play(_)));

    let owned;
    let dictionary: &Dictionary = match &cli.dictionary {
        DictionarySource::Embedded => Dictionary::embedded(),
        DictionarySource::File(path) => {
            owned = load_from_file(path)?;
            &owned
        }
    };
    tracing::debug!(words = dictionary.len(), "dictionary ready");

    let mut engine = match cli.seed {
        Some(seed) => JumbleEngine::seeded(dictionary, seed),
        None => JumbleEngine::from_os_rng(dictionary),
    };

    match command {
        Commands::Play(args) => run_play_command(engine, args),
        Commands::Simple(args) => run_simple(&mut engine, args.length, &args.options()),
        Commands::Scramble { word } => {
            print_scramble_result(&scramble_word(&mut engine, &word)?);
            Ok(())
        }
        Commands::Palindromes => {
            print_palindromes(&list_palindromes(&engine));
            Ok(())
        }
        Commands::Exists { word } => {
            print_exists_result(&check_exists(&engine, &word)?);
            Ok(())
        }
        Commands::Prefix { prefix } => {
            print_prefix_result(&prefix_search(&engine, &prefix)?);
            Ok(())
        }
        Commands::Search { start, end, length } => {
            let criteria = SearchCriteria::new(start, end, length);
            print_search_result(&run_search(&engine, criteria)?);
            Ok(())
        }
        Commands::Subwords {
            word,
            min_len,
            anagram,
            real_words,
        } => {
            let config = SubwordsConfig {
                min_len,
                arrangement: arrangement(anagram),
                real_words_only: real_words,
                ..SubwordsConfig::new(word)
            };
            print_subwords_result(&list_subwords(&engine, config));
            Ok(())
        }
        Commands::Random { length } => {
            print_random_word(&pick_random_word(&mut engine, length)?);
            Ok(())
        }
        Commands::Game { game, reveal } => {
            let summary = new_game(&mut engine, game.length, &game.options())?;
            print_game_summary(&summary, reveal);
            Ok(())
        }
        Commands::Stats => {
            println!("\nProfiling {} words", dictionary.len());
            let stats = dictionary_stats(dictionary, true);
            print_dictionary_stats(&stats);
            Ok(())
        }
    }
}

fn run_play_command(engine: JumbleEngine<'_>, args: GameArgs) -> Result<()> {
    use jumble_engine::interactive::{App, run_tui};

    let app = App::new(engine, args.length, args.options())?;
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_covers_binary_and_library() {
        let directive = default_directive("debug");
        assert_eq!(directive, "jumble=debug,jumble_engine=debug");
        assert!(directive.parse::<EnvFilter>().is_ok());
    }
}
