//! Jumble engine operations
//!
//! Every operation is a query or combinatorial generation over a shared,
//! immutable [`Dictionary`](crate::dictionary::Dictionary). Randomness is always
//! passed in by the caller.

pub mod game;
mod jumble;
pub mod lookup;
pub mod palindrome;
pub mod random;
pub mod scramble;
pub mod search;
pub mod subwords;

pub use game::{Discovery, GameOptions, GameState, create_game_state};
pub use jumble::JumbleEngine;
pub use search::SearchCriteria;
pub use subwords::{Arrangement, SubwordOptions};
