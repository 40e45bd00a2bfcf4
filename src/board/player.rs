//! The two players and the half of the board each one owns.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pit::{Pit, PITS_PER_SIDE};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

/// Both players in turn order.
pub const ALL_PLAYERS: [Player; 2] = [Player::One, Player::Two];

const PLAYER_ONE_PITS: [Pit; PITS_PER_SIDE] = [Pit::A, Pit::B, Pit::C, Pit::D, Pit::E, Pit::F];
const PLAYER_TWO_PITS: [Pit; PITS_PER_SIDE] = [Pit::U, Pit::V, Pit::W, Pit::X, Pit::Y, Pit::Z];

impl Player {
    /// Returns the opponent.
    pub const fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns this player's store.
    pub const fn store(self) -> Pit {
        match self {
            Player::One => Pit::StoreOne,
            Player::Two => Pit::StoreTwo,
        }
    }

    /// Returns this player's six playable pits in sowing order.
    pub fn pits(self) -> &'static [Pit; PITS_PER_SIDE] {
        match self {
            Player::One => &PLAYER_ONE_PITS,
            Player::Two => &PLAYER_TWO_PITS,
        }
    }

    /// Returns the numeric id (1 or 2) used in notation and the command protocol.
    pub const fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Parses a player from its numeric id.
    pub fn from_id(id: u8) -> Option<Player> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Picks a starting player uniformly at random.
    pub fn random(rng: &mut impl Rng) -> Player {
        if rng.gen_bool(0.5) {
            Player::One
        } else {
            Player::Two
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.id())
    }
}
