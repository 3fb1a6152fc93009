//! The board: pit state, the sowing algorithm and the capture rules.
//!
//! - `state`: `Board` construction, accessors, legal moves, reserve lookup
//! - `sowing`: `Board::sow` and the capture / reserve-creation rules
//! - `event`: what a sow reports back to the caller

pub mod state;
pub mod sowing;
pub mod event;

pub use state::{Board, MoveList};
pub use sowing::{mirrors_reserve, RESERVE_TRIGGER};
pub use event::{BoardEvent, SowOutcome, SowReport};
