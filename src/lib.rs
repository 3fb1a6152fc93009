//! # toguz-korgool
//!
//! Rules engine for Toguz Korgool, the two-player mancala game played on
//! 18 pits with a score pit (kazan) and at most one reserve pit (tuz) per
//! side.
//!
//! ## Design Principles
//!
//! 1. **Plain data**: a `Board` is a few fixed-size arrays. Cloning is cheap
//!    and there is no interior mutability.
//!
//! 2. **Illegal moves are not errors**: sowing an empty pit or an opponent's
//!    pit leaves the board untouched and says so in the returned outcome.
//!
//! 3. **Events, not callbacks**: a sow reports captures and reserve creation
//!    to the caller instead of reaching into a presentation layer.
//!
//! 4. **Injected randomness**: policies draw from a caller-owned `GameRng`,
//!    so seeded games replay move for move.
//!
//! ## Modules
//!
//! - `core`: sides, pits, configuration, errors, RNG
//! - `board`: board state, sowing, capture and reserve rules
//! - `policy`: random and greedy "challenge" move selection
//! - `persist`: snapshots, the custom-game save line and JSON save games
//!
//! ## Example
//!
//! ```
//! use toguz_korgool::{Board, GameRng, Side};
//!
//! let mut board = Board::new();
//! let mut rng = GameRng::new(7);
//!
//! let report = board.challenge_move(&mut rng).unwrap();
//! assert_eq!(report.side, Side::A);
//! assert_eq!(board.next_to_play(), Side::B);
//! ```

pub mod core;
pub mod board;
pub mod policy;
pub mod persist;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    Pit, PitIndex, ScorePit, IgnoreReason, PIT_COUNT, PITS_PER_SIDE,
    BoardConfig, BoardError,
    GameRng, GameRngState,
};

pub use crate::board::{Board, BoardEvent, MoveList, SowOutcome, SowReport};

pub use crate::policy::{ChallengePolicy, MovePolicy, RandomPolicy};

pub use crate::persist::{BoardSnapshot, SavedGame, SavedLayout, SavedSide};
