//! Sides of the board and per-side data storage.
//!
//! ## Side
//!
//! The two players. Side `A` owns pits 0-8, side `B` owns pits 9-17.
//!
//! ## SideMap
//!
//! A pair of values indexed by `Side`, used wherever the board keeps one
//! value per player (score pits, reserve flags).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    /// Owns pits 0-8. Moves first in a standard game.
    A,
    /// Owns pits 9-17.
    B,
}

impl Side {
    /// Both sides in play order.
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Position of this side in a `SideMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "Side A"),
            Side::B => write!(f, "Side B"),
        }
    }
}

/// One value per side with O(1) access.
///
/// ## Example
///
/// ```
/// use toguz_korgool::core::{Side, SideMap};
///
/// let mut scores: SideMap<u32> = SideMap::default();
/// scores[Side::B] += 4;
///
/// assert_eq!(scores[Side::A], 0);
/// assert_eq!(scores[Side::B], 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    a: T,
    b: T,
}

impl<T> SideMap<T> {
    /// Create a map from explicit values for each side.
    pub const fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    /// Create a map with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            a: factory(Side::A),
            b: factory(Side::B),
        }
    }

    /// Get a reference to a side's value.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    /// Get a mutable reference to a side's value.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::A => &mut self.a,
            Side::B => &mut self.b,
        }
    }

    /// Iterate over (Side, &T) pairs, A first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::A, &self.a), (Side::B, &self.b)].into_iter()
    }

    /// Apply a function to both values.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> SideMap<U> {
        SideMap {
            a: f(&self.a),
            b: f(&self.b),
        }
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
