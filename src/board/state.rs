//! Board contents.
//!
//! Holds the stone count of every slot in canonical order. The layout never
//! changes; only the counts do.

use serde::{Deserialize, Serialize};

use super::pit::{Pit, PITS_PER_SIDE, PIT_COUNT};
use super::player::Player;

/// Largest starting stone count per pit.
pub const MAX_STONES_PER_PIT: u32 = 1000;

/// Largest number of stones a board may hold in total. Keeps every slot
/// count well inside `u32` whatever the sowing does.
pub const MAX_TOTAL_STONES: u32 = MAX_STONES_PER_PIT * (2 * PITS_PER_SIDE as u32);

/// Stone counts for all 14 slots.
///
/// Uses a fixed-size array indexed by `Pit as usize`, so the board is
/// trivially copyable and every turn works on its own value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    stones: [u32; PIT_COUNT],
}

impl Board {
    /// Creates a starting board: `stones_per_pit` in every pit, empty stores.
    pub fn new(stones_per_pit: u32) -> Self {
        let mut stones = [stones_per_pit; PIT_COUNT];
        stones[Pit::StoreOne.index()] = 0;
        stones[Pit::StoreTwo.index()] = 0;
        Board { stones }
    }

    /// Creates a board from raw counts in canonical order.
    pub const fn from_counts(stones: [u32; PIT_COUNT]) -> Self {
        Board { stones }
    }

    /// Returns the raw counts in canonical order.
    pub const fn counts(&self) -> &[u32; PIT_COUNT] {
        &self.stones
    }

    /// Returns the number of stones in a slot.
    pub const fn get(&self, pit: Pit) -> u32 {
        self.stones[pit as usize]
    }

    /// Overwrites the number of stones in a slot.
    pub fn set(&mut self, pit: Pit, stones: u32) {
        self.stones[pit.index()] = stones;
    }

    /// Adds stones to a slot.
    pub fn add(&mut self, pit: Pit, stones: u32) {
        self.stones[pit.index()] += stones;
    }

    /// Empties a slot and returns what it held.
    pub fn take(&mut self, pit: Pit) -> u32 {
        std::mem::take(&mut self.stones[pit.index()])
    }

    /// Total stones on the board, stores included.
    pub fn total(&self) -> u32 {
        self.stones.iter().sum()
    }

    /// Stones left in a player's six pits (store excluded).
    pub fn pit_total(&self, player: Player) -> u32 {
        player.pits().iter().map(|&p| self.get(p)).sum()
    }

    /// Returns true if all six of a player's pits are empty.
    pub fn side_empty(&self, player: Player) -> bool {
        player.pits().iter().all(|&p| self.get(p) == 0)
    }

    /// Stones in a player's store.
    pub const fn store(&self, player: Player) -> u32 {
        self.get(player.store())
    }
}

impl std::ops::Index<Pit> for Board {
    type Output = u32;

    fn index(&self, pit: Pit) -> &u32 {
        &self.stones[pit.index()]
    }
}
