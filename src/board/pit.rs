//! Slot identity on the 14-slot Kalaha board.
//!
//! Slots are enumerated in sowing order: Player One's six pits, Player One's
//! store, Player Two's six pits, Player Two's store. The `#[repr(u8)]`
//! discriminant is the board index, so index arithmetic and the enum agree.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Total number of slots on the board (12 pits + 2 stores).
pub const PIT_COUNT: usize = 14;

/// Number of playable pits owned by each player.
pub const PITS_PER_SIDE: usize = 6;

/// Board index of Player One's store.
pub const STORE_ONE: usize = 6;

/// Board index of Player Two's store.
pub const STORE_TWO: usize = 13;

/// Pit `i` faces pit `MIRROR_BASE - i` across the board.
pub const MIRROR_BASE: usize = 12;

/// A slot on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Pit {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    StoreOne = 6,
    U = 7,
    V = 8,
    W = 9,
    X = 10,
    Y = 11,
    Z = 12,
    StoreTwo = 13,
}

/// All slots in index order.
pub const ALL_PITS: [Pit; PIT_COUNT] = [
    Pit::A, Pit::B, Pit::C, Pit::D, Pit::E, Pit::F, Pit::StoreOne,
    Pit::U, Pit::V, Pit::W, Pit::X, Pit::Y, Pit::Z, Pit::StoreTwo,
];

impl Pit {
    /// Returns the board index of this slot.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a slot by board index.
    pub fn from_index(index: usize) -> Option<Pit> {
        ALL_PITS.get(index).copied()
    }

    /// Returns true for the two stores.
    pub const fn is_store(self) -> bool {
        matches!(self, Pit::StoreOne | Pit::StoreTwo)
    }

    /// Returns the player whose half of the board holds this slot.
    pub const fn owner(self) -> Player {
        if (self as usize) <= STORE_ONE {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Returns the pit directly across the board.
    ///
    /// Stores have no mirror and return `None`.
    pub const fn mirror(self) -> Option<Pit> {
        if self.is_store() {
            return None;
        }
        Some(ALL_PITS[MIRROR_BASE - self as usize])
    }

    /// Returns the next slot in sowing order, wrapping after Player Two's store.
    pub const fn next(self) -> Pit {
        ALL_PITS[(self as usize + 1) % PIT_COUNT]
    }

    /// Returns the single-letter label (`a`..`f`, `u`..`z`) or `S1`/`S2`.
    pub const fn label(self) -> &'static str {
        match self {
            Pit::A => "a",
            Pit::B => "b",
            Pit::C => "c",
            Pit::D => "d",
            Pit::E => "e",
            Pit::F => "f",
            Pit::StoreOne => "S1",
            Pit::U => "u",
            Pit::V => "v",
            Pit::W => "w",
            Pit::X => "x",
            Pit::Y => "y",
            Pit::Z => "z",
            Pit::StoreTwo => "S2",
        }
    }
}

impl std::fmt::Display for Pit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
