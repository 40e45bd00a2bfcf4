//! Compact text notation for a game.
//!
//! Format: `<counts>/<player>/<outcome>`
//!
//! - `counts`: 14 comma-separated stone counts in board order
//!   (pits a-f, store 1, pits u-z, store 2)
//! - `player`: `1` or `2`, the player to move
//! - `outcome`: `-` while the game is running, `1`/`2` for a winner, `=` for a draw
//!
//! A fresh six-stone game with Player One to move is
//! `6,6,6,6,6,6,0,6,6,6,6,6,6,0/1/-`.

use crate::board::{Board, Player, MAX_TOTAL_STONES, PIT_COUNT};
use crate::game::Game;
use crate::resolve::Outcome;

/// Errors that can occur during notation parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected 3 sections separated by '/', got {0}")]
    WrongSectionCount(usize),

    #[error("expected {expected} slot counts, got {0}", expected = PIT_COUNT)]
    WrongSlotCount(usize),

    #[error("invalid stone count: '{0}'")]
    InvalidCount(String),

    #[error("board holds more than {max} stones", max = MAX_TOTAL_STONES)]
    TooManyStones,

    #[error("invalid player: '{0}'")]
    InvalidPlayer(String),

    #[error("invalid outcome: '{0}'")]
    InvalidOutcome(String),
}

fn parse_counts(s: &str) -> Result<Board, NotationError> {
    let fields: Vec<&str> = s.split(',').collect();
    if fields.len() != PIT_COUNT {
        return Err(NotationError::WrongSlotCount(fields.len()));
    }
    let mut counts = [0u32; PIT_COUNT];
    let mut total: u32 = 0;
    for (slot, field) in counts.iter_mut().zip(fields) {
        *slot = field
            .trim()
            .parse()
            .map_err(|_| NotationError::InvalidCount(field.to_string()))?;
        total = total
            .checked_add(*slot)
            .filter(|&t| t <= MAX_TOTAL_STONES)
            .ok_or(NotationError::TooManyStones)?;
    }
    Ok(Board::from_counts(counts))
}

fn parse_player(s: &str) -> Result<Player, NotationError> {
    s.parse::<u8>()
        .ok()
        .and_then(Player::from_id)
        .ok_or_else(|| NotationError::InvalidPlayer(s.to_string()))
}

fn parse_outcome(s: &str) -> Result<Option<Outcome>, NotationError> {
    match s {
        "-" => Ok(None),
        "=" => Ok(Some(Outcome::Draw)),
        _ => parse_player(s)
            .map(|p| Some(Outcome::Winner(p)))
            .map_err(|_| NotationError::InvalidOutcome(s.to_string())),
    }
}

/// Parses a notation string into a game.
pub fn parse_notation(s: &str) -> Result<Game, NotationError> {
    let sections: Vec<&str> = s.trim().split('/').collect();
    if sections.len() != 3 {
        return Err(NotationError::WrongSectionCount(sections.len()));
    }
    Ok(Game {
        board: parse_counts(sections[0])?,
        player: parse_player(sections[1])?,
        outcome: parse_outcome(sections[2])?,
    })
}

/// Encodes a game as a notation string.
pub fn encode_notation(game: &Game) -> String {
    let counts: Vec<String> = game.board.counts().iter().map(|c| c.to_string()).collect();
    let outcome = match game.outcome {
        None => "-".to_string(),
        Some(Outcome::Draw) => "=".to_string(),
        Some(Outcome::Winner(p)) => p.id().to_string(),
    };
    format!("{}/{}/{}", counts.join(","), game.player.id(), outcome)
}
