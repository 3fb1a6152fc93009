//! Greedy single-ply "challenge" heuristic.
//!
//! Moves are scanned in ascending pit order. For a move whose last piece
//! lands in an opponent pit, the expected count there is taken to be the
//! current count plus one (a move is assumed to add a single piece to its
//! landing pit, even when a long sow would lap the board).
//!
//! 1. An expected count of 3 that could create the mover's reserve wins
//!    outright. Unlike the real rule, pits 8 and 17 are not excluded here.
//! 2. Otherwise the largest even expected count wins, the lowest pit on ties.
//! 3. With no candidate at all the move is random.

use log::debug;

use super::{MovePolicy, RandomPolicy};
use crate::board::{mirrors_reserve, Board, RESERVE_TRIGGER};
use crate::core::{GameRng, PitIndex};

/// Greedy heuristic preferring reserve creation, then the biggest capture.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChallengePolicy;

impl MovePolicy for ChallengePolicy {
    fn choose(&self, board: &Board, rng: &mut GameRng) -> Option<PitIndex> {
        let side = board.next_to_play();
        let opponent_reserve = board.reserve_held_by(side.opponent());
        let mut best: Option<(PitIndex, u32)> = None;

        for from in board.legal_moves(side) {
            let Some(landing) = board.landing_pit(from) else {
                continue;
            };
            if landing.owner() == side {
                continue;
            }

            let expected = board.pit(landing).pieces() + 1;
            if expected == RESERVE_TRIGGER
                && !board.has_reserve(side)
                && !mirrors_reserve(landing, opponent_reserve)
            {
                debug!("challenge policy: {side} aims for a reserve at pit {landing} from pit {from}");
                return Some(from);
            }

            if expected % 2 == 0 && best.map_or(true, |(_, most)| expected > most) {
                best = Some((from, expected));
            }
        }

        match best {
            Some((from, expected)) => {
                debug!("challenge policy: {side} captures {expected} with pit {from}");
                Some(from)
            }
            None => RandomPolicy.choose(board, rng),
        }
    }
}
