//! Format-neutral board snapshots.
//!
//! A `BoardSnapshot` holds everything needed to rebuild a behaviourally
//! identical board: pit counts, score pits, reserve pits and the side to
//! play. It derives serde so hosts can write it in whatever format they use;
//! `to_bytes`/`from_bytes` provide a compact bincode encoding.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::{mirrors_reserve, Board};
use crate::core::{
    fits_piece_counters, BoardError, Pit, PitIndex, ScorePit, Side, SideMap, PIT_COUNT,
};

/// Serializable copy of a board position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Piece count of every pit, index order. Must hold exactly 18 entries.
    pub pits: Vec<u32>,

    /// Score pit contents per side.
    pub scores: SideMap<u32>,

    /// Reserve pit located on each side's row, as reported by
    /// [`Board::reserve_pit`]. The reserve on A's row belongs to B and
    /// vice versa.
    pub reserves: SideMap<Option<u8>>,

    pub next_to_play: Side,
}

impl BoardSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, BoardError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a bincode payload produced by [`BoardSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BoardError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Check the reserve entries, returning them as validated indices.
    fn validated_reserves(&self) -> Result<SideMap<Option<PitIndex>>, BoardError> {
        let mut reserves = SideMap::default();

        for (side, raw) in self.reserves.iter() {
            let Some(raw) = *raw else { continue };
            let index = PitIndex::new(usize::from(raw)).map_err(|_| {
                BoardError::InvalidSnapshot(format!("reserve index {raw} is outside 0..18"))
            })?;
            if index.owner() != side {
                return Err(BoardError::InvalidSnapshot(format!(
                    "reserve pit {index} is not on the row of {side}"
                )));
            }
            if index.is_last_of_side() {
                return Err(BoardError::InvalidSnapshot(format!(
                    "pit {index} can never be a reserve pit"
                )));
            }
            reserves[side] = Some(index);
        }

        if let (Some(a_row), b_row @ Some(_)) = (reserves[Side::A], reserves[Side::B]) {
            if mirrors_reserve(a_row, b_row) {
                return Err(BoardError::InvalidSnapshot(
                    "reserve pits mirror each other".to_string(),
                ));
            }
        }

        Ok(reserves)
    }
}

impl Board {
    /// Capture the current position.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            pits: self.pits.iter().map(Pit::pieces).collect(),
            scores: SideMap::from_fn(|side| self.score(side)),
            reserves: SideMap::from_fn(|side| self.reserve_pit(side).map(|p| p.get() as u8)),
            next_to_play: self.next_to_play,
        }
    }

    /// Rebuild a board from a snapshot, validating it first.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self, BoardError> {
        let layout: [u32; PIT_COUNT] = snapshot.pits.as_slice().try_into().map_err(|_| {
            BoardError::InvalidSnapshot(format!(
                "expected {PIT_COUNT} pits, found {}",
                snapshot.pits.len()
            ))
        })?;
        let reserves = snapshot.validated_reserves()?;

        let total: u64 = layout
            .iter()
            .chain(snapshot.scores.iter().map(|(_, score)| score))
            .map(|&n| u64::from(n))
            .sum();
        let reserves_left = reserves.iter().filter(|(_, r)| r.is_none()).count() as u32;
        if !fits_piece_counters(total, reserves_left) {
            return Err(BoardError::InvalidSnapshot(format!(
                "{total} pieces leave no room for {reserves_left} more reserve bonus(es)"
            )));
        }

        let mut board = Board::build(layout, snapshot.next_to_play);
        board.kazans = snapshot.scores.map(|&n| ScorePit::new(n));
        for (row, reserve) in reserves.iter() {
            if let Some(index) = *reserve {
                board.pit_mut(index).mark_reserve();
                board.has_reserve[row.opponent()] = true;
            }
        }

        debug!("restored board from snapshot, {} to play", board.next_to_play);
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> BoardSnapshot {
        BoardSnapshot {
            pits: vec![2; PIT_COUNT],
            scores: SideMap::new(10, 4),
            reserves: SideMap::new(Some(3), None),
            next_to_play: Side::B,
        }
    }

    #[test]
    fn test_restore() {
        let board = Board::from_snapshot(&snapshot()).unwrap();

        assert_eq!(board.next_to_play(), Side::B);
        assert_eq!(board.score(Side::A), 10);
        assert_eq!(board.reserve_pit(Side::A), Some(PitIndex::new(3).unwrap()));
        assert!(board.has_reserve(Side::B));
        assert!(!board.has_reserve(Side::A));
    }

    #[test]
    fn test_round_trip() {
        let board = Board::from_snapshot(&snapshot()).unwrap();
        assert_eq!(board.snapshot(), snapshot());
    }

    #[test]
    fn test_wrong_pit_count() {
        let mut snap = snapshot();
        snap.pits.pop();
        assert!(matches!(Board::from_snapshot(&snap), Err(BoardError::InvalidSnapshot(_))));
    }

    #[test]
    fn test_reserve_on_wrong_row() {
        let mut snap = snapshot();
        snap.reserves = SideMap::new(Some(12), None);
        assert!(matches!(Board::from_snapshot(&snap), Err(BoardError::InvalidSnapshot(_))));
    }

    #[test]
    fn test_reserve_on_last_pit() {
        let mut snap = snapshot();
        snap.reserves = SideMap::new(None, Some(17));
        assert!(matches!(Board::from_snapshot(&snap), Err(BoardError::InvalidSnapshot(_))));
    }

    #[test]
    fn test_reserve_out_of_range() {
        let mut snap = snapshot();
        snap.reserves = SideMap::new(Some(40), None);
        assert!(matches!(Board::from_snapshot(&snap), Err(BoardError::InvalidSnapshot(_))));
    }

    #[test]
    fn test_mirrored_reserves_rejected() {
        let mut snap = snapshot();
        snap.reserves = SideMap::new(Some(3), Some(12));
        assert!(matches!(Board::from_snapshot(&snap), Err(BoardError::InvalidSnapshot(_))));
    }

    #[test]
    fn test_score_without_headroom_rejected() {
        let mut snap = snapshot();
        snap.pits = vec![0; PIT_COUNT];
        snap.pits[7] = 3;
        snap.pits[9] = 1;
        snap.scores = SideMap::new(u32::MAX - 1, 0);
        snap.reserves = SideMap::default();
        snap.next_to_play = Side::A;

        assert!(matches!(Board::from_snapshot(&snap), Err(BoardError::InvalidSnapshot(_))));
    }

    #[test]
    fn test_headroom_counts_only_missing_reserves() {
        // Both reserves exist, so the total only has to fit as it is.
        let mut snap = snapshot();
        snap.pits = vec![0; PIT_COUNT];
        snap.pits[0] = 1;
        snap.scores = SideMap::new(u32::MAX - 1, 0);
        snap.reserves = SideMap::new(Some(3), Some(10));
        assert!(Board::from_snapshot(&snap).is_ok());

        snap.reserves = SideMap::new(Some(3), None);
        assert!(matches!(Board::from_snapshot(&snap), Err(BoardError::InvalidSnapshot(_))));
    }

    #[test]
    fn test_bytes_round_trip() {
        let bytes = snapshot().to_bytes().unwrap();
        assert_eq!(BoardSnapshot::from_bytes(&bytes).unwrap(), snapshot());
    }

    #[test]
    fn test_bad_bytes() {
        assert!(matches!(BoardSnapshot::from_bytes(&[1, 2]), Err(BoardError::Encoding(_))));
    }
}
