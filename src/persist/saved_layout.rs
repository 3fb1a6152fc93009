//! Custom-game save lines.
//!
//! A custom game is stored as a single line:
//!
//! ```text
//! <A reserve>|<B reserve>|[a0, a1, ..., a8]|[b0, b1, ..., b8]
//! ```
//!
//! The reserve tokens are absolute pit indices of the reserve each side holds
//! (so A's reserve is in 9..17), or `-1` for none. The bracketed lists are
//! each side's pit counts in index order. Score pits are not stored: a custom
//! game starts with empty kazans and A to play.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::core::{BoardError, PitIndex, Side, SideMap, PITS_PER_SIDE, PIT_COUNT};

use super::BoardSnapshot;

/// Token meaning "no reserve pit".
const NO_RESERVE: &str = "-1";

/// A hand-built starting position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedLayout {
    /// Reserve pit held by each side.
    pub held: SideMap<Option<PitIndex>>,

    /// Pit counts in index order.
    pub pits: [u32; PIT_COUNT],
}

impl SavedLayout {
    /// Capture the pit counts and reserves of a board.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        Self {
            held: SideMap::from_fn(|side| board.reserve_held_by(side)),
            pits: std::array::from_fn(|i| board.pits()[i].pieces()),
        }
    }

    /// Build the board this layout describes.
    pub fn into_board(self) -> Result<Board, BoardError> {
        let snapshot = BoardSnapshot {
            pits: self.pits.to_vec(),
            scores: SideMap::default(),
            reserves: SideMap::from_fn(|row| self.held[row.opponent()].map(|p| p.get() as u8)),
            next_to_play: Side::A,
        };
        Board::from_snapshot(&snapshot)
    }
}

fn malformed(msg: impl Into<String>) -> BoardError {
    BoardError::MalformedSave(msg.into())
}

fn parse_reserve(token: &str) -> Result<Option<PitIndex>, BoardError> {
    let token = token.trim();
    if token == NO_RESERVE {
        return Ok(None);
    }
    let raw: usize = token
        .parse()
        .map_err(|_| malformed(format!("reserve token {token:?} is not a pit index")))?;
    PitIndex::new(raw)
        .map(Some)
        .map_err(|_| malformed(format!("reserve index {raw} is outside 0..18")))
}

fn parse_row(token: &str) -> Result<Vec<u32>, BoardError> {
    let inner = token
        .trim()
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .ok_or_else(|| malformed(format!("pit list {token:?} is not bracketed")))?;

    let row = inner
        .split(',')
        .map(|n| {
            let n = n.trim();
            n.parse::<u32>()
                .map_err(|_| malformed(format!("pit count {n:?} is not a number")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if row.len() != PITS_PER_SIDE {
        return Err(malformed(format!(
            "expected {PITS_PER_SIDE} pit counts, found {}",
            row.len()
        )));
    }
    Ok(row)
}

impl FromStr for SavedLayout {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.trim().split('|').collect();
        let [a_reserve, b_reserve, a_row, b_row] = fields.as_slice() else {
            return Err(malformed(format!("expected 4 fields, found {}", fields.len())));
        };

        let held = SideMap::new(parse_reserve(a_reserve)?, parse_reserve(b_reserve)?);
        let mut pits = [0; PIT_COUNT];
        for (slot, count) in pits.iter_mut().zip(parse_row(a_row)?.into_iter().chain(parse_row(b_row)?)) {
            *slot = count;
        }

        Ok(Self { held, pits })
    }
}

impl fmt::Display for SavedLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reserve = |r: Option<PitIndex>| r.map_or_else(|| NO_RESERVE.to_string(), |p| p.to_string());
        let row = |counts: &[u32]| {
            counts
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        write!(
            f,
            "{}|{}|[{}]|[{}]",
            reserve(self.held[Side::A]),
            reserve(self.held[Side::B]),
            row(&self.pits[..PITS_PER_SIDE]),
            row(&self.pits[PITS_PER_SIDE..]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "11|-1|[9, 9, 9, 9, 9, 9, 9, 9, 9]|[1, 2, 3, 4, 5, 6, 7, 8, 0]";

    #[test]
    fn test_parse() {
        let layout: SavedLayout = LINE.parse().unwrap();

        assert_eq!(layout.held[Side::A], Some(PitIndex::new(11).unwrap()));
        assert_eq!(layout.held[Side::B], None);
        assert_eq!(layout.pits[0], 9);
        assert_eq!(layout.pits[9], 1);
        assert_eq!(layout.pits[17], 0);
    }

    #[test]
    fn test_display_matches_input() {
        let layout: SavedLayout = LINE.parse().unwrap();
        assert_eq!(layout.to_string(), LINE);
    }

    #[test]
    fn test_into_board() {
        let board = LINE.parse::<SavedLayout>().unwrap().into_board().unwrap();

        assert!(board.has_reserve(Side::A));
        assert!(!board.has_reserve(Side::B));
        assert_eq!(board.reserve_pit(Side::B), Some(PitIndex::new(11).unwrap()));
        assert_eq!(board.next_to_play(), Side::A);
        assert_eq!(SavedLayout::from_board(&board).to_string(), LINE);
    }

    #[test]
    fn test_reserve_on_own_row_rejected() {
        let line = "2|-1|[9, 9, 9, 9, 9, 9, 9, 9, 9]|[9, 9, 9, 9, 9, 9, 9, 9, 9]";
        let layout: SavedLayout = line.parse().unwrap();
        assert!(matches!(layout.into_board(), Err(BoardError::InvalidSnapshot(_))));
    }

    #[test]
    fn test_malformed_lines() {
        let cases = [
            "",
            "-1|-1|[1, 2, 3]",
            "x|-1|[9, 9, 9, 9, 9, 9, 9, 9, 9]|[9, 9, 9, 9, 9, 9, 9, 9, 9]",
            "-1|30|[9, 9, 9, 9, 9, 9, 9, 9, 9]|[9, 9, 9, 9, 9, 9, 9, 9, 9]",
            "-1|-1|9, 9, 9, 9, 9, 9, 9, 9, 9|[9, 9, 9, 9, 9, 9, 9, 9, 9]",
            "-1|-1|[9, 9, 9, 9, 9, 9, 9, 9]|[9, 9, 9, 9, 9, 9, 9, 9, 9]",
            "-1|-1|[9, 9, 9, 9, -9, 9, 9, 9, 9]|[9, 9, 9, 9, 9, 9, 9, 9, 9]",
        ];

        for line in cases {
            assert!(
                matches!(line.parse::<SavedLayout>(), Err(BoardError::MalformedSave(_))),
                "accepted {line:?}"
            );
        }
    }
}
