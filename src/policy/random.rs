//! Uniform random move selection.

use log::trace;

use super::MovePolicy;
use crate::board::Board;
use crate::core::{GameRng, PitIndex};

/// Picks uniformly among the legal moves of the side to play.
///
/// Legal moves never include an empty pit, so one draw always suffices.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose(&self, board: &Board, rng: &mut GameRng) -> Option<PitIndex> {
        let side = board.next_to_play();
        let moves = board.legal_moves(side);
        let choice = rng.choose(moves.as_slice()).copied();
        trace!("random policy picked {choice:?} for {side} from {} moves", moves.len());
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Side, PIT_COUNT};

    #[test]
    fn test_random_choice_is_legal() {
        let mut layout = [0; PIT_COUNT];
        layout[2] = 1;
        layout[6] = 4;
        layout[11] = 7;
        let board = Board::from_layout(layout, Side::A).unwrap();
        let mut rng = GameRng::new(3);

        for _ in 0..50 {
            let pit = RandomPolicy.choose(&board, &mut rng).unwrap();
            assert!(pit.get() == 2 || pit.get() == 6);
        }
    }

    #[test]
    fn test_random_covers_all_moves() {
        let board = Board::new();
        let mut rng = GameRng::new(11);

        let mut seen = [false; 9];
        for _ in 0..500 {
            let pit = RandomPolicy.choose(&board, &mut rng).unwrap();
            seen[pit.get()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_random_same_seed_same_choice() {
        let board = Board::new();
        let mut rng1 = GameRng::new(99);
        let mut rng2 = GameRng::new(99);

        for _ in 0..20 {
            assert_eq!(
                RandomPolicy.choose(&board, &mut rng1),
                RandomPolicy.choose(&board, &mut rng2)
            );
        }
    }
}
