//! Move-selection policies.
//!
//! A `MovePolicy` only picks a pit; [`Board::play`] applies it. Two policies
//! ship with the engine:
//!
//! - `RandomPolicy`: uniform over the legal moves
//! - `ChallengePolicy`: single-ply greedy, prefers creating a reserve pit,
//!   then the largest capture, then falls back to random
//!
//! Both draw randomness from a caller-supplied `GameRng`, so seeded games
//! replay exactly.

mod challenge;
mod random;

pub use challenge::ChallengePolicy;
pub use random::RandomPolicy;

use crate::board::{Board, SowReport};
use crate::core::{BoardError, GameRng, PitIndex};

/// Picks the pit the side to move should sow.
pub trait MovePolicy {
    /// Choose a pit for `board.next_to_play()`.
    ///
    /// Returns `None` only when that side has no legal move.
    fn choose(&self, board: &Board, rng: &mut GameRng) -> Option<PitIndex>;
}

impl Board {
    /// Let `policy` pick a move for the side to play and sow it.
    ///
    /// Fails with `NoLegalMoves` when the side to play has nothing to sow;
    /// callers are expected to check [`Board::legal_moves`] first.
    pub fn play<P: MovePolicy + ?Sized>(
        &mut self,
        policy: &P,
        rng: &mut GameRng,
    ) -> Result<SowReport, BoardError> {
        let side = self.next_to_play();
        let from = policy
            .choose(self, rng)
            .ok_or(BoardError::NoLegalMoves(side))?;
        self.sow_pit(from).into_result(from)
    }

    /// Sow a uniformly random legal move.
    pub fn random_move(&mut self, rng: &mut GameRng) -> Result<SowReport, BoardError> {
        self.play(&RandomPolicy, rng)
    }

    /// Sow the move picked by the greedy challenge heuristic.
    pub fn challenge_move(&mut self, rng: &mut GameRng) -> Result<SowReport, BoardError> {
        self.play(&ChallengePolicy, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Side, PIT_COUNT};

    /// Always answers with the same pit, legal or not.
    struct Fixed(usize);

    impl MovePolicy for Fixed {
        fn choose(&self, _board: &Board, _rng: &mut GameRng) -> Option<PitIndex> {
            PitIndex::new(self.0).ok()
        }
    }

    #[test]
    fn test_play_applies_choice() {
        let mut board = Board::new();
        let mut rng = GameRng::new(1);

        let report = board.play(&Fixed(4), &mut rng).unwrap();

        assert_eq!(report.side, Side::A);
        assert_eq!(report.from.get(), 4);
        assert_eq!(board.next_to_play(), Side::B);
    }

    #[test]
    fn test_play_rejects_illegal_choice() {
        let mut board = Board::new();
        let mut rng = GameRng::new(1);
        let before = board.clone();

        let result = board.play(&Fixed(12), &mut rng);

        assert!(matches!(result, Err(BoardError::IllegalMove { .. })));
        assert_eq!(board, before);
    }

    #[test]
    fn test_no_legal_moves() {
        let mut board = Board::from_layout([0; PIT_COUNT], Side::B).unwrap();
        let mut rng = GameRng::new(1);

        assert_eq!(board.random_move(&mut rng), Err(BoardError::NoLegalMoves(Side::B)));
        assert_eq!(board.challenge_move(&mut rng), Err(BoardError::NoLegalMoves(Side::B)));
    }
}
