//! Persistence boundary.
//!
//! - `BoardSnapshot`: serde-derived position, bincode helpers
//! - `SavedLayout`: the one-line custom-game format
//! - `SavedGame`: the JSON save-game document
//!
//! The engine never touches the filesystem; hosts read and write these
//! representations themselves.

mod snapshot;
mod saved_layout;
mod saved_game;

pub use snapshot::BoardSnapshot;
pub use saved_layout::SavedLayout;
pub use saved_game::{SavedGame, SavedSide};
