//! Results and notifications produced by a sow.
//!
//! The engine never calls into a presentation layer. Instead each sow returns
//! a `SowReport` listing the `BoardEvent`s it raised, e.g. a reserve pit being
//! created, and the caller decides how to react (disable the pit in a UI,
//! log it, record it for training data).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BoardError, IgnoreReason, PitIndex, Side};

/// Something noteworthy that happened during a sow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardEvent {
    /// An even landing pit was emptied into the mover's score pit.
    Captured {
        pit: PitIndex,
        by: Side,
        pieces: u32,
    },

    /// The landing pit became `by`'s reserve pit.
    ///
    /// `pieces` were moved from the pit into the kazan and the kazan was
    /// credited with the same number again as a bonus.
    ReserveCreated {
        pit: PitIndex,
        by: Side,
        pieces: u32,
    },
}

impl BoardEvent {
    /// The pit the event concerns.
    #[must_use]
    pub fn pit(&self) -> PitIndex {
        match self {
            BoardEvent::Captured { pit, .. } | BoardEvent::ReserveCreated { pit, .. } => *pit,
        }
    }

    /// Total added to the mover's score pit.
    #[must_use]
    pub fn scored(&self) -> u32 {
        match self {
            BoardEvent::Captured { pieces, .. } => *pieces,
            BoardEvent::ReserveCreated { pieces, .. } => pieces * 2,
        }
    }
}

/// What a completed sow did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SowReport {
    /// Side that moved.
    pub side: Side,

    /// Pit the pieces were picked up from.
    pub from: PitIndex,

    /// Pit that received the last piece.
    pub landing: PitIndex,

    /// Events raised on the landing pit (at most one per sow today).
    pub events: SmallVec<[BoardEvent; 1]>,
}

impl SowReport {
    /// The reserve pit created by this sow, if any.
    #[must_use]
    pub fn reserve_created(&self) -> Option<PitIndex> {
        self.events.iter().find_map(|e| match e {
            BoardEvent::ReserveCreated { pit, .. } => Some(*pit),
            BoardEvent::Captured { .. } => None,
        })
    }

    /// Pieces added to the mover's score pit.
    #[must_use]
    pub fn scored(&self) -> u32 {
        self.events.iter().map(BoardEvent::scored).sum()
    }
}

/// Result of a sow request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SowOutcome {
    /// The move was legal and has been applied.
    Sown(SowReport),

    /// The move was not playable; the board is unchanged.
    Ignored(IgnoreReason),
}

impl SowOutcome {
    /// Whether the board changed.
    #[must_use]
    pub fn is_sown(&self) -> bool {
        matches!(self, SowOutcome::Sown(_))
    }

    /// The report of an applied move.
    #[must_use]
    pub fn report(&self) -> Option<&SowReport> {
        match self {
            SowOutcome::Sown(report) => Some(report),
            SowOutcome::Ignored(_) => None,
        }
    }

    /// Convert into a `Result`, treating an ignored move as an error.
    pub fn into_result(self, pit: PitIndex) -> Result<SowReport, BoardError> {
        match self {
            SowOutcome::Sown(report) => Ok(report),
            SowOutcome::Ignored(reason) => Err(BoardError::IllegalMove { pit, reason }),
        }
    }
}
