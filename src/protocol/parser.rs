//! Command parser.
//!
//! Parses incoming protocol lines into structured `Command` variants that
//! the engine main loop can dispatch on.

use crate::game::GameId;

/// A parsed client-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Protocol handshake.
    Kalaha,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Start a new game with the current options.
    NewGame,

    /// Register a game from its notation: `position <notation>`.
    Position { notation: String },

    /// Play a pit in a game: `play <id> <pit>`.
    Play { id: GameId, pit: i64 },

    /// Print a game: `show <id>`.
    Show { id: GameId },

    /// Drop a game: `delete <id>`.
    Delete { id: GameId },

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let first = *tokens.first()?;

    match first {
        "kalaha" => Some(Command::Kalaha),
        "isready" => Some(Command::IsReady),
        "newgame" => Some(Command::NewGame),
        "quit" => Some(Command::Quit),

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(&tokens),
        "play" => parse_play(&tokens),
        "show" => parse_id(&tokens).map(|id| Command::Show { id }),
        "delete" => parse_id(&tokens).map(|id| Command::Delete { id }),

        other => {
            tracing::warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        tracing::warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");
    let (name_parts, value_parts) = match value_idx {
        Some(vi) => (&tokens[2..vi], &tokens[vi + 1..]),
        None => (&tokens[2..], &tokens[tokens.len()..]),
    };
    if name_parts.is_empty() {
        tracing::warn!("malformed setoption: empty name");
        return None;
    }
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };

    Some(Command::SetOption {
        name: name_parts.join(" "),
        value,
    })
}

/// Parses `position <notation>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        tracing::warn!("malformed position: expected 'position <notation>'");
        return None;
    }
    Some(Command::Position {
        notation: tokens[1].to_string(),
    })
}

/// Parses `play <id> <pit>`.
fn parse_play(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 3 {
        tracing::warn!("malformed play: expected 'play <id> <pit>'");
        return None;
    }
    let id = parse_id(tokens)?;
    match tokens[2].parse::<i64>() {
        Ok(pit) => Some(Command::Play { id, pit }),
        Err(_) => {
            tracing::warn!(value = tokens[2], "invalid pit index");
            None
        }
    }
}

/// Parses the game id in the second token.
fn parse_id(tokens: &[&str]) -> Option<GameId> {
    let Some(raw) = tokens.get(1) else {
        tracing::warn!(command = tokens[0], "missing game id");
        return None;
    };
    match raw.parse::<GameId>() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::warn!(value = *raw, "invalid game id");
            None
        }
    }
}
