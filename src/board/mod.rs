//! Board representation.
//!
//! Contains slot identity, the two players, and the stone counts that make
//! up a Kalaha position.

pub mod pit;
pub mod player;
pub mod state;

pub use pit::{Pit, ALL_PITS, MIRROR_BASE, PITS_PER_SIDE, PIT_COUNT, STORE_ONE, STORE_TWO};
pub use player::{Player, ALL_PLAYERS};
pub use state::{Board, MAX_STONES_PER_PIT, MAX_TOTAL_STONES};
