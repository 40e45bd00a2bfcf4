//! Pit selection validation.
//!
//! Checks a raw pit index against the acting player before any turn is
//! resolved. Checks run in a fixed order and stop at the first failure:
//! range, then store, then ownership. The empty-pit check is separate
//! because it needs the board.

use crate::board::{Board, Pit, Player, PIT_COUNT};

/// Why a pit selection was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("pit index {0} is outside the board (0..{max})", max = PIT_COUNT - 1)]
    OutOfRange(i64),

    #[error("store {0} cannot be played")]
    StoreSelected(Pit),

    #[error("pit {pit} belongs to {owner}")]
    OpponentPit { pit: Pit, owner: Player },

    #[error("pit {0} is empty")]
    EmptyPit(Pit),
}

impl SelectionError {
    /// Stable short name used in protocol error replies.
    pub const fn kind(&self) -> &'static str {
        match self {
            SelectionError::OutOfRange(_) => "out_of_range",
            SelectionError::StoreSelected(_) => "store_selected",
            SelectionError::OpponentPit { .. } => "opponent_pit",
            SelectionError::EmptyPit(_) => "empty_pit",
        }
    }
}

/// Validates a raw index for `player` and returns the typed pit.
pub fn validate_selection(player: Player, index: i64) -> Result<Pit, SelectionError> {
    let pit = usize::try_from(index)
        .ok()
        .and_then(Pit::from_index)
        .ok_or(SelectionError::OutOfRange(index))?;
    if pit.is_store() {
        return Err(SelectionError::StoreSelected(pit));
    }
    if pit.owner() != player {
        return Err(SelectionError::OpponentPit {
            pit,
            owner: pit.owner(),
        });
    }
    Ok(pit)
}

/// Rejects a pit that holds no stones.
pub fn ensure_not_empty(board: &Board, pit: Pit) -> Result<(), SelectionError> {
    if board.get(pit) == 0 {
        return Err(SelectionError::EmptyPit(pit));
    }
    Ok(())
}
