//! Core domain types for the jumble engine
//!
//! This module contains the fundamental domain types: validated words, letter
//! multisets and the engine error taxonomy. Nothing here touches I/O or randomness.

mod error;
mod letters;
mod word;

pub use error::EngineError;
pub use letters::LetterCounts;
pub use word::{Word, WordError};
