//! The sowing algorithm and the capture / reserve-creation rules.
//!
//! ## Sowing
//!
//! - One piece: it moves to the next pit, which is the landing pit.
//! - `n >= 2` pieces: the first piece picked up goes straight back into the
//!   source pit, the other `n - 1` are dropped one per pit after it. The
//!   landing pit is `n - 1` pits along. Sowing 19 or more pieces laps the
//!   board, and the source pit receives pieces like any other.
//!
//! ## Landing in an opponent pit
//!
//! 1. Exactly 3 pieces, the mover has no reserve yet, the pit is not 8 or 17,
//!    not already a reserve, and not the mirror of the opponent's reserve:
//!    the pit becomes the mover's reserve (tuz).
//! 2. Otherwise an even, non-zero count is captured into the mover's kazan.
//!
//! The turn passes after every applied sow.

use log::{debug, trace};
use smallvec::SmallVec;

use super::event::{BoardEvent, SowOutcome, SowReport};
use super::state::Board;
use crate::core::{BoardError, IgnoreReason, PitIndex, Side, PIT_COUNT};

/// Landing count that turns a pit into a reserve pit.
pub const RESERVE_TRIGGER: u32 = 3;

/// True when `landing` sits at the mirrored position of `reserve`.
///
/// A side may not create its reserve opposite the one the opponent holds.
/// No reserve means no restriction.
#[must_use]
pub fn mirrors_reserve(landing: PitIndex, reserve: Option<PitIndex>) -> bool {
    reserve.is_some_and(|r| r.mirror() == landing)
}

impl Board {
    /// Play the pit at `index` for the side to move.
    ///
    /// Returns `Err(InvalidIndex)` for an index outside `0..18`. Playing an
    /// empty pit or a pit of the side not on move is not an error: the board
    /// is left untouched and `SowOutcome::Ignored` says why.
    pub fn sow(&mut self, index: usize) -> Result<SowOutcome, BoardError> {
        let from = PitIndex::new(index)?;
        Ok(self.sow_pit(from))
    }

    /// Play a validated pit for the side to move.
    pub fn sow_pit(&mut self, from: PitIndex) -> SowOutcome {
        let side = self.next_to_play;

        if from.owner() != side {
            debug!("{side} tried to sow pit {from} of the other side, ignored");
            return SowOutcome::Ignored(IgnoreReason::NotOwned);
        }

        let pieces = self.pit(from).pieces();
        let landing = match pieces {
            0 => {
                debug!("{side} tried to sow empty pit {from}, ignored");
                return SowOutcome::Ignored(IgnoreReason::EmptyPit);
            }
            1 => {
                self.pit_mut(from).set_pieces(0);
                let landing = from.offset(1);
                self.pit_mut(landing).add(1);
                landing
            }
            n => {
                // The first piece stays home; the rest go one per pit.
                self.pit_mut(from).set_pieces(1);
                self.distribute(from, n - 1)
            }
        };
        trace!("{side} sowed {pieces} from pit {from}, last piece in pit {landing}");

        let mut events = SmallVec::new();
        if landing.owner() != side {
            events.extend(self.resolve_landing(side, landing));
        }

        self.next_to_play = side.opponent();

        SowOutcome::Sown(SowReport {
            side,
            from,
            landing,
            events,
        })
    }

    /// Drop `count` pieces, one per pit, starting after `from`.
    ///
    /// Returns the pit that received the last piece.
    fn distribute(&mut self, from: PitIndex, count: u32) -> PitIndex {
        let laps = count / PIT_COUNT as u32;
        let rest = count as usize % PIT_COUNT;

        if laps > 0 {
            for pit in &mut self.pits {
                pit.add(laps);
            }
        }
        for step in 1..=rest {
            self.pit_mut(from.offset(step)).add(1);
        }

        from.offset(count as usize)
    }

    /// Apply the reserve and capture rules to an opponent-owned landing pit.
    fn resolve_landing(&mut self, side: Side, landing: PitIndex) -> Option<BoardEvent> {
        if self.can_create_reserve(side, landing) {
            return Some(self.create_reserve(side, landing));
        }

        let count = self.pit(landing).pieces();
        if count > 0 && count % 2 == 0 {
            let pieces = self.pit_mut(landing).take_all();
            self.kazans[side].deposit(pieces);
            debug!("{side} captured {pieces} from pit {landing}");
            return Some(BoardEvent::Captured {
                pit: landing,
                by: side,
                pieces,
            });
        }

        None
    }

    /// Whether `side` sowing its last piece into `landing` creates a reserve.
    #[must_use]
    pub fn can_create_reserve(&self, side: Side, landing: PitIndex) -> bool {
        let pit = self.pit(landing);
        pit.owner() != side
            && !pit.is_reserve()
            && !self.has_reserve[side]
            && !landing.is_last_of_side()
            && pit.pieces() == RESERVE_TRIGGER
            && !mirrors_reserve(landing, self.reserve_held_by(side.opponent()))
    }

    fn create_reserve(&mut self, side: Side, landing: PitIndex) -> BoardEvent {
        let pit = self.pit_mut(landing);
        pit.mark_reserve();
        let pieces = pit.take_all();

        self.has_reserve[side] = true;
        // The pit's pieces go to the kazan and the kazan is credited the same
        // number again.
        self.kazans[side].deposit(pieces * 2);

        debug!("{side} created reserve pit {landing}, scoring {}", pieces * 2);
        BoardEvent::ReserveCreated {
            pit: landing,
            by: side,
            pieces,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pit(i: usize) -> PitIndex {
        PitIndex::new(i).unwrap()
    }

    fn board_with(pits: &[(usize, u32)], side: Side) -> Board {
        let mut layout = [0; PIT_COUNT];
        for &(i, n) in pits {
            layout[i] = n;
        }
        Board::from_layout(layout, side).unwrap()
    }

    #[test]
    fn test_single_piece_moves_to_next_pit() {
        let mut board = board_with(&[(3, 1)], Side::A);

        let outcome = board.sow(3).unwrap();

        let report = outcome.report().unwrap();
        assert_eq!(report.landing, pit(4));
        assert!(report.events.is_empty());
        assert_eq!(board.pit_count(3), Ok(0));
        assert_eq!(board.pit_count(4), Ok(1));
        assert_eq!(board.next_to_play(), Side::B);
    }

    #[test]
    fn test_multi_piece_keeps_first_piece() {
        let mut board = board_with(&[(0, 5)], Side::A);

        board.sow(0).unwrap();

        assert_eq!(board.pit_count(0), Ok(1));
        for i in 1..=4 {
            assert_eq!(board.pit_count(i), Ok(1));
        }
        assert_eq!(board.pit_count(5), Ok(0));
    }

    #[test]
    fn test_lapping_sow_feeds_source() {
        // 20 pieces: 1 stays, 19 sown. 18 fill every pit once (source too),
        // the 19th lands one past the source.
        let mut board = board_with(&[(2, 20)], Side::A);

        let outcome = board.sow(2).unwrap();

        assert_eq!(outcome.report().unwrap().landing, pit(3));
        assert_eq!(board.pit_count(2), Ok(2));
        assert_eq!(board.pit_count(3), Ok(2));
        assert_eq!(board.pit_count(4), Ok(1));
        assert_eq!(board.pieces_in_play(), 20);
    }

    #[test]
    fn test_wrong_side_is_ignored() {
        let mut board = board_with(&[(10, 4)], Side::A);
        let before = board.clone();

        let outcome = board.sow(10).unwrap();

        assert_eq!(outcome, SowOutcome::Ignored(IgnoreReason::NotOwned));
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_pit_is_ignored() {
        let mut board = board_with(&[(1, 4)], Side::A);
        let before = board.clone();

        let outcome = board.sow(0).unwrap();

        assert_eq!(outcome, SowOutcome::Ignored(IgnoreReason::EmptyPit));
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_index() {
        let mut board = Board::new();
        assert_eq!(board.sow(18), Err(BoardError::InvalidIndex(18)));
    }

    #[test]
    fn test_even_capture() {
        // A sows 3 from pit 7: pits 8 and 9 get one each, 9 goes 3 -> 4.
        let mut board = board_with(&[(7, 3), (9, 3)], Side::A);

        let outcome = board.sow(7).unwrap();

        let report = outcome.report().unwrap();
        assert_eq!(
            report.events.as_slice(),
            &[BoardEvent::Captured { pit: pit(9), by: Side::A, pieces: 4 }]
        );
        assert_eq!(board.pit_count(9), Ok(0));
        assert_eq!(board.score(Side::A), 4);
    }

    #[test]
    fn test_odd_landing_not_captured() {
        let mut board = board_with(&[(8, 1), (9, 4)], Side::A);

        board.sow(8).unwrap();

        assert_eq!(board.pit_count(9), Ok(5));
        assert_eq!(board.score(Side::A), 0);
    }

    #[test]
    fn test_own_side_landing_never_captures() {
        let mut board = board_with(&[(2, 3), (4, 1)], Side::A);

        board.sow(2).unwrap();

        assert_eq!(board.pit_count(4), Ok(2));
        assert_eq!(board.score(Side::A), 0);
    }

    #[test]
    fn test_reserve_creation() {
        let mut board = board_with(&[(8, 2), (9, 2)], Side::A);

        let outcome = board.sow(8).unwrap();

        assert_eq!(outcome.report().unwrap().reserve_created(), Some(pit(9)));
        assert!(board.pit(pit(9)).is_reserve());
        assert!(board.has_reserve(Side::A));
        assert_eq!(board.pit_count(9), Ok(0));
        assert_eq!(board.score(Side::A), 6);
        assert_eq!(board.reserve_pit(Side::B), Some(pit(9)));
    }

    #[test]
    fn test_last_pits_never_become_reserve() {
        // 17 keeps one piece and sows 9 into pits 0..=8, leaving 3 in pit 8.
        let mut board = board_with(&[(8, 2), (17, 10)], Side::B);
        board.sow(17).unwrap();

        assert!(!board.pit(pit(8)).is_reserve());
        assert!(!board.has_reserve(Side::B));
        assert_eq!(board.pit_count(8), Ok(3));
    }

    #[test]
    fn test_mirror_of_opponent_reserve_rejected() {
        let mut board = board_with(&[(2, 3), (11, 2)], Side::A);
        // B already holds a reserve at pit 2, mirror of pit 11.
        board.pit_mut(pit(2)).mark_reserve();
        board.has_reserve[Side::B] = true;

        assert!(!board.can_create_reserve(Side::A, pit(11)));
        board.pit_mut(pit(11)).set_pieces(3);
        assert!(!board.can_create_reserve(Side::A, pit(11)));
        board.pit_mut(pit(12)).set_pieces(3);
        assert!(board.can_create_reserve(Side::A, pit(12)));
    }

    #[test]
    fn test_second_reserve_refused() {
        let mut board = board_with(&[(8, 2), (9, 2), (10, 2), (0, 1)], Side::A);
        board.sow(8).unwrap();
        assert!(board.has_reserve(Side::A));

        board.pit_mut(pit(10)).set_pieces(3);
        assert!(!board.can_create_reserve(Side::A, pit(10)));
    }

    #[test]
    fn test_capture_from_reserve_pit() {
        let mut board = board_with(&[(7, 2), (8, 1)], Side::A);
        board.pit_mut(pit(8)).mark_reserve();
        board.has_reserve[Side::B] = true;
        board.next_to_play = Side::B;
        board.pit_mut(pit(16)).set_pieces(11);

        // 16 keeps 1, sows 10 into 17, 0..=8: pit 8 goes 1 -> 2.
        let outcome = board.sow(16).unwrap();

        assert_eq!(outcome.report().unwrap().landing, pit(8));
        assert_eq!(board.pit_count(8), Ok(0));
        assert_eq!(board.score(Side::B), 2);
        assert!(board.pit(pit(8)).is_reserve());
    }
}
