//! JSON save-game documents.
//!
//! A saved game lists both sides, white (`Side::A`) first:
//!
//! ```text
//! {"players": [
//!   {"name": "white", "config": [{"kazan": 12}, {"tuz": -1}, {"hole:0": 9}, ..., {"hole:8": 9}]},
//!   {"name": "black", "config": [{"kazan": 4}, {"tuz": 2}, {"hole:0": 9}, ..., {"hole:8": 9}]}
//! ]}
//! ```
//!
//! `tuz` is the absolute index of the reserve pit on that side's own row
//! (created by the opponent), or `-1`. Hole keys are relative to the side,
//! so black's `hole:0` is pit 9. The side to play is not stored; a loaded
//! game starts with A to play.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{BoardError, PitIndex, Side, SideMap, PITS_PER_SIDE, PIT_COUNT};

use super::BoardSnapshot;

const KAZAN_KEY: &str = "kazan";
const TUZ_KEY: &str = "tuz";

/// Entries before the holes in a side's `config` list.
const HEADER_ENTRIES: usize = 2;

fn side_name(side: Side) -> &'static str {
    match side {
        Side::A => "white",
        Side::B => "black",
    }
}

fn hole_key(offset: usize) -> String {
    format!("hole:{offset}")
}

fn malformed(msg: impl Into<String>) -> BoardError {
    BoardError::MalformedSave(msg.into())
}

/// One side's entry in a saved game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSide {
    pub name: String,

    /// Single-key objects: kazan, tuz, then one per hole.
    pub config: Vec<BTreeMap<String, i64>>,
}

impl SavedSide {
    fn from_board(board: &Board, side: Side) -> Self {
        let single = |key: String, value: i64| BTreeMap::from([(key, value)]);

        let mut config = Vec::with_capacity(HEADER_ENTRIES + PITS_PER_SIDE);
        config.push(single(KAZAN_KEY.to_string(), i64::from(board.score(side))));
        config.push(single(
            TUZ_KEY.to_string(),
            board.reserve_pit(side).map_or(-1, |p| p.get() as i64),
        ));
        for (offset, pit) in PitIndex::of_side(side).enumerate() {
            config.push(single(hole_key(offset), i64::from(board.pit(pit).pieces())));
        }

        Self {
            name: side_name(side).to_string(),
            config,
        }
    }

    fn entry(&self, position: usize, key: &str) -> Result<i64, BoardError> {
        self.config
            .get(position)
            .and_then(|object| object.get(key))
            .copied()
            .ok_or_else(|| malformed(format!("{}: entry {position} has no {key:?}", self.name)))
    }

    fn count(&self, position: usize, key: &str) -> Result<u32, BoardError> {
        let value = self.entry(position, key)?;
        u32::try_from(value)
            .map_err(|_| malformed(format!("{}: {key:?} count {value} is out of range", self.name)))
    }

    fn reserve(&self) -> Result<Option<u8>, BoardError> {
        match self.entry(1, TUZ_KEY)? {
            -1 => Ok(None),
            value => u8::try_from(value)
                .map(Some)
                .map_err(|_| malformed(format!("{}: tuz index {value} is out of range", self.name))),
        }
    }
}

/// A saved game document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub players: Vec<SavedSide>,
}

impl SavedGame {
    /// Record the pits, score pits and reserves of a board.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        Self {
            players: Side::ALL
                .iter()
                .map(|&side| SavedSide::from_board(board, side))
                .collect(),
        }
    }

    /// Build the board this document describes, with A to play.
    pub fn into_board(&self) -> Result<Board, BoardError> {
        let [white, black] = self.players.as_slice() else {
            return Err(malformed(format!(
                "expected 2 players, found {}",
                self.players.len()
            )));
        };
        let players = SideMap::new(white, black);

        let mut pits = vec![0; PIT_COUNT];
        let mut scores = SideMap::default();
        let mut reserves = SideMap::default();

        for (side, player) in players.iter() {
            if player.name != side_name(side) {
                return Err(malformed(format!(
                    "expected player {:?}, found {:?}",
                    side_name(side),
                    player.name
                )));
            }
            if player.config.len() != HEADER_ENTRIES + PITS_PER_SIDE {
                return Err(malformed(format!(
                    "{}: expected {} config entries, found {}",
                    player.name,
                    HEADER_ENTRIES + PITS_PER_SIDE,
                    player.config.len()
                )));
            }

            scores[side] = player.count(0, KAZAN_KEY)?;
            reserves[side] = player.reserve()?;
            for (offset, pit) in PitIndex::of_side(side).enumerate() {
                pits[pit.get()] = player.count(HEADER_ENTRIES + offset, &hole_key(offset))?;
            }
        }

        Board::from_snapshot(&BoardSnapshot {
            pits,
            scores,
            reserves,
            next_to_play: Side::A,
        })
    }

    /// Encode as a JSON document.
    pub fn to_json(&self) -> Result<String, BoardError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a JSON document; the shape is checked by [`SavedGame::into_board`].
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        Ok(serde_json::from_str(json)?)
    }
}
