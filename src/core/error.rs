//! Error type shared by every fallible engine operation.
//!
//! Illegal moves (an empty pit, a pit on the wrong side) are not errors:
//! `Board::sow` reports them as `SowOutcome::Ignored`. Errors are reserved for
//! contract violations and malformed external input.

use thiserror::Error;

use super::pit::{IgnoreReason, PitIndex};
use super::side::Side;

/// Errors raised by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A pit index outside `0..18`.
    #[error("pit index {0} is outside 0..18")]
    InvalidIndex(usize),

    /// A policy was asked to move for a side with no playable pit.
    #[error("{0} has no legal moves")]
    NoLegalMoves(Side),

    /// A policy picked a pit that cannot be sown.
    #[error("pit {pit} cannot be played: {reason}")]
    IllegalMove { pit: PitIndex, reason: IgnoreReason },

    /// A layout holding more pieces than the pit counters can track.
    #[error("layout holds {0} pieces, too many for the pit counters")]
    TooManyPieces(u64),

    #[error("invalid board configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid board snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("malformed saved layout: {0}")]
    MalformedSave(String),

    #[error("snapshot encoding failed: {0}")]
    Encoding(String),
}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        BoardError::Encoding(err.to_string())
    }
}

impl From<bincode::Error> for BoardError {
    fn from(err: bincode::Error) -> Self {
        BoardError::Encoding(err.to_string())
    }
}
