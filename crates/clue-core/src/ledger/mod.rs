//! Private knowledge tracking for each player.
//!
//! - `sheet`: the clue sheet, an explicit three-state fact table per card.
//! - `history`: per-player and global suggestion counters.

pub mod history;
pub mod sheet;

pub use history::{SuggestionLog, SuggestionTally};
pub use sheet::{CardFact, ClueSheet};
