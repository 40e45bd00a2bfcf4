//! Turn resolution.
//!
//! Resolves one full turn: sowing (with capture), the next-player decision,
//! and end-of-game settlement. Resolution is pure and works on a copy of the
//! board it is given.

pub mod settle;
pub mod sowing;

pub use settle::{decide, either_side_empty, final_scores, is_game_over, settle, Outcome, TieBreak};
pub use sowing::{sow, Sowing};

use crate::board::{Board, Pit, Player};

/// Everything a resolved turn produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Board after sowing, capture and any settlement.
    pub board: Board,
    /// Slot that received the last stone.
    pub landing: Pit,
    /// Stones won by capture this turn.
    pub captured: u32,
    /// Player to move next.
    pub next_player: Player,
    /// Set once the turn ends the game.
    pub outcome: Option<Outcome>,
}

impl Turn {
    /// True when the last stone landed in the mover's own store.
    pub fn extra_turn(&self, mover: Player) -> bool {
        self.landing == mover.store()
    }
}

/// Plays `pit` for `player` and returns the resolved turn.
///
/// Assumes the selection already passed validation: `pit` is one of
/// `player`'s pits and holds at least one stone.
pub fn play_turn(board: &Board, player: Player, pit: Pit, tie_break: TieBreak) -> Turn {
    debug_assert!(!pit.is_store() && pit.owner() == player && board.get(pit) > 0);

    let mut next = *board;
    let Sowing { landing, captured } = sow(&mut next, player, pit);
    let next_player = if landing == player.store() {
        player
    } else {
        player.other()
    };
    let outcome = settle(&mut next, tie_break);

    tracing::debug!(%player, %pit, %landing, captured, ?outcome, "turn resolved");

    Turn {
        board: next,
        landing,
        captured,
        next_player,
        outcome,
    }
}
