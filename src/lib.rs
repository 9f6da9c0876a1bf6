//! Jumble Engine
//!
//! A dictionary-backed word puzzle engine: scrambles, palindromes, prefix and range
//! search, sub-word generation and playable jumble games.
//!
//! # Quick Start
//!
//! ```rust
//! use jumble_engine::dictionary::Dictionary;
//! use jumble_engine::engine::JumbleEngine;
//!
//! let dict = Dictionary::from_entries(["deed", "eye", "cat", "listen"]);
//! let mut engine = JumbleEngine::seeded(&dict, 42);
//!
//! assert!(engine.exists("Listen"));
//! assert_eq!(engine.palindromes(), ["deed", "eye"]);
//! assert_ne!(engine.scramble("listen"), "listen");
//!
//! let game = engine.create_game_state(6, Some(3)).unwrap();
//! assert_eq!(game.original(), "listen");
//! assert!(game.sub_words().contains_key("list"));
//! ```

// Core domain types
pub mod core;

// Word store
pub mod dictionary;

// Engine operations
pub mod engine;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
