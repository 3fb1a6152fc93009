//! Starting layout configuration.
//!
//! The traditional game puts 9 pieces in each of the 18 pits and lets
//! side A move first. `BoardConfig` captures those choices so a host can
//! start shorter practice games or hand the first move to B.

use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::pit::{fits_piece_counters, PIT_COUNT};
use super::side::Side;

/// Pieces per pit in the traditional layout.
pub const DEFAULT_PIECES_PER_PIT: u32 = 9;

/// Configuration for a new board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Pieces placed in every pit at the start.
    pub pieces_per_pit: u32,

    /// Side that makes the first move.
    pub first_to_play: Side,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            pieces_per_pit: DEFAULT_PIECES_PER_PIT,
            first_to_play: Side::A,
        }
    }
}

impl BoardConfig {
    /// The traditional configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting piece count per pit.
    #[must_use]
    pub fn with_pieces_per_pit(mut self, pieces: u32) -> Self {
        self.pieces_per_pit = pieces;
        self
    }

    /// Set the side that moves first.
    #[must_use]
    pub fn with_first_to_play(mut self, side: Side) -> Self {
        self.first_to_play = side;
        self
    }

    /// Check the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.pieces_per_pit == 0 {
            return Err(BoardError::InvalidConfig(
                "pieces_per_pit must be at least 1".to_string(),
            ));
        }
        let total = u64::from(self.pieces_per_pit) * PIT_COUNT as u64;
        if !fits_piece_counters(total, 2) {
            return Err(BoardError::InvalidConfig(format!(
                "pieces_per_pit {} is too large",
                self.pieces_per_pit
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_traditional() {
        let config = BoardConfig::default();
        assert_eq!(config.pieces_per_pit, 9);
        assert_eq!(config.first_to_play, Side::A);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = BoardConfig::new()
            .with_pieces_per_pit(4)
            .with_first_to_play(Side::B);

        assert_eq!(config.pieces_per_pit, 4);
        assert_eq!(config.first_to_play, Side::B);
    }

    #[test]
    fn test_validate_rejects_empty_layout() {
        let config = BoardConfig::new().with_pieces_per_pit(0);
        assert!(matches!(config.validate(), Err(BoardError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_overflowing_layout() {
        let config = BoardConfig::new().with_pieces_per_pit(u32::MAX);
        assert!(matches!(config.validate(), Err(BoardError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_headroom_boundary() {
        // 18 pits, and two reserves that can each double the total.
        let largest = u32::MAX / 72;
        assert!(BoardConfig::new().with_pieces_per_pit(largest).validate().is_ok());

        let config = BoardConfig::new().with_pieces_per_pit(largest + 1);
        assert!(matches!(config.validate(), Err(BoardError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_serde() {
        let config = BoardConfig::new().with_first_to_play(Side::B);
        let json = serde_json::to_string(&config).unwrap();
        let back: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
