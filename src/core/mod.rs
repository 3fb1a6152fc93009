//! Core engine types: sides, pits, configuration, errors, RNG.
//!
//! These are the leaf building blocks the `board` module composes.

pub mod side;
pub mod pit;
pub mod config;
pub mod error;
pub mod rng;

pub use side::{Side, SideMap};
pub use pit::{IgnoreReason, Pit, PitIndex, ScorePit, PIT_COUNT, PITS_PER_SIDE};
pub(crate) use pit::fits_piece_counters;
pub use config::{BoardConfig, DEFAULT_PIECES_PER_PIT};
pub use error::BoardError;
pub use rng::{GameRng, GameRngState};
