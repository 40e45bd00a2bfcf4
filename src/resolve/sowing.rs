//! Sowing and capture.
//!
//! Picks up every stone in the selected pit and drops them one at a time
//! into the following slots, skipping the opponent's store. A last stone
//! that lands in an empty pit on the mover's own side captures the stones
//! in the pit across from it.

use crate::board::{Board, Pit, Player};

/// Where sowing ended and what it captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sowing {
    /// Slot that received the last stone.
    pub landing: Pit,
    /// Stones moved into the mover's store by a capture, 0 if none.
    pub captured: u32,
}

/// Sows the stones from `from` around the board on behalf of `player`.
///
/// The caller guarantees `from` is one of `player`'s pits and is non-empty.
pub fn sow(board: &mut Board, player: Player, from: Pit) -> Sowing {
    let skipped = player.other().store();
    let mut remaining = board.take(from);
    let mut cursor = from;
    let mut captured = 0;

    while remaining > 0 {
        cursor = cursor.next();
        if cursor == skipped {
            continue;
        }
        if remaining == 1 && can_capture(board, player, cursor) {
            captured = capture(board, player, cursor);
        } else {
            board.add(cursor, 1);
        }
        remaining -= 1;
    }

    Sowing { landing: cursor, captured }
}

/// Last stone, own side, not a store, and the pit was empty before it arrived.
fn can_capture(board: &Board, player: Player, pit: Pit) -> bool {
    !pit.is_store() && pit.owner() == player && board.get(pit) == 0
}

/// Resolves a capture for the last stone landing in `pit`.
///
/// With nothing across the board the stone simply stays. Otherwise the
/// opposing stones and the landing stone all go to the mover's store.
/// Returns the number of stones captured.
fn capture(board: &mut Board, player: Player, pit: Pit) -> u32 {
    let Some(across) = pit.mirror() else {
        board.add(pit, 1);
        return 0;
    };
    let opposing = board.take(across);
    if opposing == 0 {
        board.add(pit, 1);
        return 0;
    }
    let captured = opposing + 1;
    board.set(pit, 0);
    board.add(player.store(), captured);
    tracing::trace!(%pit, %across, captured, "capture");
    captured
}
