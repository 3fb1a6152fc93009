//! Pits, score pits and pit indices.
//!
//! Pieces (korgools) are fungible, so a pit stores a count. The sowing rule
//! that keeps the first piece picked up in the source pit is handled inside
//! a single sow by putting one piece back; no per-piece order is stored.

use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::side::Side;

/// Number of playable pits on the board.
pub const PIT_COUNT: usize = 18;

/// Number of pits owned by each side.
pub const PITS_PER_SIDE: usize = 9;

/// Whether a board holding `total` pieces keeps every count within `u32`.
///
/// Counts only grow through reserve creation, which credits at most the
/// current total again, so each of the `reserves_left` reserves still to be
/// created can double it.
#[must_use]
pub(crate) fn fits_piece_counters(total: u64, reserves_left: u32) -> bool {
    (total << reserves_left) <= u64::from(u32::MAX)
}

/// Index of a pit, guaranteed to be in `0..18`.
///
/// Pits 0-8 belong to `Side::A`, pits 9-17 to `Side::B`. Sowing runs in
/// ascending index order and wraps from 17 back to 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PitIndex(u8);

impl PitIndex {
    /// Validate a raw index.
    pub fn new(index: usize) -> Result<Self, BoardError> {
        if index < PIT_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(BoardError::InvalidIndex(index))
        }
    }

    /// Wrap an index already known to be in range.
    pub(crate) const fn from_raw(index: usize) -> Self {
        debug_assert!(index < PIT_COUNT);
        Self(index as u8)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// The side owning this pit.
    #[must_use]
    pub const fn owner(self) -> Side {
        if (self.0 as usize) < PITS_PER_SIDE {
            Side::A
        } else {
            Side::B
        }
    }

    /// The pit `steps` positions further along the sowing direction.
    #[must_use]
    pub const fn offset(self, steps: usize) -> Self {
        Self(((self.0 as usize + steps % PIT_COUNT) % PIT_COUNT) as u8)
    }

    /// Whether this is the last pit of its side (8 or 17).
    ///
    /// These two pits can never become a reserve pit.
    #[must_use]
    pub const fn is_last_of_side(self) -> bool {
        self.0 as usize % PITS_PER_SIDE == PITS_PER_SIDE - 1
    }

    /// The pit at the same position on the other side's row.
    #[must_use]
    pub const fn mirror(self) -> Self {
        self.offset(PITS_PER_SIDE)
    }

    /// Iterate over all 18 pits in ascending order.
    pub fn all() -> impl Iterator<Item = PitIndex> {
        (0..PIT_COUNT as u8).map(PitIndex)
    }

    /// Iterate over the pits owned by `side` in ascending order.
    pub fn of_side(side: Side) -> impl Iterator<Item = PitIndex> {
        let start = side.index() * PITS_PER_SIDE;
        (start..start + PITS_PER_SIDE).map(|i| PitIndex(i as u8))
    }
}

impl std::fmt::Display for PitIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A playable pit (hole).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pit {
    index: PitIndex,
    pieces: u32,
    reserve: bool,
}

impl Pit {
    /// Create a pit holding `pieces`.
    #[must_use]
    pub const fn new(index: PitIndex, pieces: u32) -> Self {
        Self {
            index,
            pieces,
            reserve: false,
        }
    }

    #[must_use]
    pub const fn index(&self) -> PitIndex {
        self.index
    }

    /// The side that owns this pit. Fixed by the index, never changes.
    #[must_use]
    pub const fn owner(&self) -> Side {
        self.index.owner()
    }

    #[must_use]
    pub const fn pieces(&self) -> u32 {
        self.pieces
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pieces == 0
    }

    /// Whether this pit has been turned into a reserve pit (tuz).
    ///
    /// A reserve pit keeps its owner; the side that created it is
    /// `self.owner().opponent()`.
    #[must_use]
    pub const fn is_reserve(&self) -> bool {
        self.reserve
    }

    pub(crate) fn add(&mut self, pieces: u32) {
        self.pieces += pieces;
    }

    pub(crate) fn set_pieces(&mut self, pieces: u32) {
        self.pieces = pieces;
    }

    /// Empty the pit, returning how many pieces it held.
    pub(crate) fn take_all(&mut self) -> u32 {
        std::mem::take(&mut self.pieces)
    }

    pub(crate) fn mark_reserve(&mut self) {
        self.reserve = true;
    }
}

/// A side's score pit (kazan). The count never decreases during a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScorePit {
    pieces: u32,
}

impl ScorePit {
    #[must_use]
    pub const fn new(pieces: u32) -> Self {
        Self { pieces }
    }

    #[must_use]
    pub const fn pieces(&self) -> u32 {
        self.pieces
    }

    pub(crate) fn deposit(&mut self, pieces: u32) {
        self.pieces += pieces;
    }
}

/// Why a sow request left the board unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The pit holds no pieces.
    EmptyPit,
    /// The pit belongs to the side not on move.
    NotOwned,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IgnoreReason::EmptyPit => write!(f, "pit is empty"),
            IgnoreReason::NotOwned => write!(f, "pit belongs to the other side"),
        }
    }
}
