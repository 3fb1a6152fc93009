//! Board state, construction and read-only queries.
//!
//! ## Layout
//!
//! ```text
//!            17  16  15  14  13  12  11  10   9     <- side B
//!  kazan B                                          kazan A
//!             0   1   2   3   4   5   6   7   8     <- side A
//! ```
//!
//! Sowing runs in ascending index order, so side A sows left to right into
//! B's row and B sows back into A's row.

use smallvec::SmallVec;

use crate::core::{
    fits_piece_counters, BoardConfig, BoardError, Pit, PitIndex, ScorePit, Side, SideMap,
    PIT_COUNT,
};

/// The legal moves for a side: at most one per owned pit.
pub type MoveList = SmallVec<[PitIndex; 9]>;

/// Complete game position.
///
/// Mutated only through [`Board::sow`] and the policy helpers built on it.
/// Cloning is cheap (plain arrays), which policies and simulations rely on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) pits: [Pit; PIT_COUNT],
    pub(crate) kazans: SideMap<ScorePit>,
    /// Whether each side has already created its (single) reserve pit.
    pub(crate) has_reserve: SideMap<bool>,
    pub(crate) next_to_play: Side,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board with the traditional layout: 9 pieces per pit, A to play.
    #[must_use]
    pub fn new() -> Self {
        let config = BoardConfig::default();
        Self::build([config.pieces_per_pit; PIT_COUNT], config.first_to_play)
    }

    /// Create a board from a validated configuration.
    pub fn with_config(config: &BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;
        Ok(Self::build(
            [config.pieces_per_pit; PIT_COUNT],
            config.first_to_play,
        ))
    }

    /// Create a board with arbitrary per-pit counts.
    ///
    /// Ownership comes from the index. Score pits start empty and no
    /// reserve pits exist. Fails with `TooManyPieces` when the counts leave
    /// no room for the reserve bonuses still to come.
    pub fn from_layout(layout: [u32; PIT_COUNT], first_to_play: Side) -> Result<Self, BoardError> {
        let total: u64 = layout.iter().map(|&n| u64::from(n)).sum();
        if !fits_piece_counters(total, 2) {
            return Err(BoardError::TooManyPieces(total));
        }
        Ok(Self::build(layout, first_to_play))
    }

    /// Lay out the pits without checking the piece total.
    pub(crate) fn build(layout: [u32; PIT_COUNT], first_to_play: Side) -> Self {
        let pits = std::array::from_fn(|i| Pit::new(PitIndex::from_raw(i), layout[i]));

        Self {
            pits,
            kazans: SideMap::default(),
            has_reserve: SideMap::default(),
            next_to_play: first_to_play,
        }
    }

    // === Accessors ===

    /// Side whose turn it is.
    #[must_use]
    pub fn next_to_play(&self) -> Side {
        self.next_to_play
    }

    /// All 18 pits in index order.
    #[must_use]
    pub fn pits(&self) -> &[Pit; PIT_COUNT] {
        &self.pits
    }

    #[must_use]
    pub fn pit(&self, index: PitIndex) -> &Pit {
        &self.pits[index.get()]
    }

    pub(crate) fn pit_mut(&mut self, index: PitIndex) -> &mut Pit {
        &mut self.pits[index.get()]
    }

    /// Piece count of a pit given by raw index.
    pub fn pit_count(&self, index: usize) -> Result<u32, BoardError> {
        Ok(self.pit(PitIndex::new(index)?).pieces())
    }

    /// Pieces in a side's score pit.
    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        self.kazans[side].pieces()
    }

    /// Whether `side` has created its reserve pit.
    #[must_use]
    pub fn has_reserve(&self, side: Side) -> bool {
        self.has_reserve[side]
    }

    /// Pieces on the board plus pieces in both score pits.
    #[must_use]
    pub fn pieces_in_play(&self) -> u64 {
        let on_board: u64 = self.pits.iter().map(|p| u64::from(p.pieces())).sum();
        on_board + u64::from(self.score(Side::A)) + u64::from(self.score(Side::B))
    }

    // === Queries ===

    /// Pits owned by `side` that hold at least one piece, ascending.
    #[must_use]
    pub fn legal_moves(&self, side: Side) -> MoveList {
        PitIndex::of_side(side)
            .filter(|&index| !self.pit(index).is_empty())
            .collect()
    }

    /// The reserve pit located on `side`'s row, if one exists.
    ///
    /// Such a pit was created by `side.opponent()`. Use
    /// [`Board::reserve_held_by`] to look a reserve up by its creator.
    #[must_use]
    pub fn reserve_pit(&self, side: Side) -> Option<PitIndex> {
        self.pits
            .iter()
            .find(|p| p.is_reserve() && p.owner() == side)
            .map(Pit::index)
    }

    /// The reserve pit `side` has created (it lies on the opponent's row).
    #[must_use]
    pub fn reserve_held_by(&self, side: Side) -> Option<PitIndex> {
        self.reserve_pit(side.opponent())
    }

    /// Where the last piece of a sow from `from` would land.
    ///
    /// `None` for an empty pit. Does not check whose turn it is.
    #[must_use]
    pub fn landing_pit(&self, from: PitIndex) -> Option<PitIndex> {
        match self.pit(from).pieces() {
            0 => None,
            1 => Some(from.offset(1)),
            n => Some(from.offset(n as usize - 1)),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cell = |p: &Pit| {
            if p.is_reserve() {
                format!("{:>3}*", p.pieces())
            } else {
                format!("{:>3} ", p.pieces())
            }
        };

        write!(f, "B [{:>4}] ", self.score(Side::B))?;
        for p in self.pits[9..].iter().rev() {
            write!(f, "{}", cell(p))?;
        }
        writeln!(f)?;
        write!(f, "A [{:>4}] ", self.score(Side::A))?;
        for p in &self.pits[..9] {
            write!(f, "{}", cell(p))?;
        }
        writeln!(f)?;
        write!(f, "{} to play", self.next_to_play)
    }
}
