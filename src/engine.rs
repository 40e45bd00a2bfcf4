//! Engine state management.
//!
//! Holds the engine options, the random source used for starting players,
//! and the registry of running games. Each command handler writes its reply
//! to the supplied writer.

use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::MAX_STONES_PER_PIT;
use crate::game::{check_stones_per_pit, Game, GameError, GameId, GameRegistry};
use crate::protocol::notation::{encode_notation, parse_notation};
use crate::resolve::TieBreak;

/// Default number of stones placed in each pit of a new game.
pub const DEFAULT_STONES: u32 = 6;

/// Tunable engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Stones per pit for `newgame`.
    pub stones: u32,
    /// How equal final stores are scored.
    pub tie_break: TieBreak,
    /// RNG seed for starting players; 0 means entropy.
    pub seed: u64,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            stones: DEFAULT_STONES,
            tie_break: TieBreak::default(),
            seed: 0,
        }
    }
}

/// Errors from `setoption`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error("unknown option '{0}'")]
    Unknown(String),

    #[error("option '{0}' needs a value")]
    MissingValue(String),

    #[error("invalid value '{value}' for option '{name}'")]
    InvalidValue { name: String, value: String },
}

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub options: Options,
    pub games: GameRegistry,
    rng: SmallRng,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine with default options and no games.
    pub fn new() -> Self {
        Engine {
            options: Options::default(),
            games: GameRegistry::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Sets an engine option. The engine is unchanged on error.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        let value = value.ok_or_else(|| OptionError::MissingValue(name.to_string()))?;
        let invalid = || OptionError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };

        match name {
            "Stones" => {
                let stones: u32 = value.parse().map_err(|_| invalid())?;
                check_stones_per_pit(stones).map_err(|_| invalid())?;
                self.options.stones = stones;
            }
            "TieBreak" => {
                self.options.tie_break = value.parse().map_err(|_| invalid())?;
            }
            "Seed" => {
                let seed: u64 = value.parse().map_err(|_| invalid())?;
                self.options.seed = seed;
                self.rng = if seed != 0 {
                    SmallRng::seed_from_u64(seed)
                } else {
                    SmallRng::from_entropy()
                };
            }
            other => return Err(OptionError::Unknown(other.to_string())),
        }
        Ok(())
    }

    /// Handles the handshake: writes id, options, and `kalahaok`.
    pub fn handle_kalaha<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name kalaha")?;
        writeln!(
            out,
            "option name Stones type spin default {} min 1 max {}",
            DEFAULT_STONES, MAX_STONES_PER_PIT
        )?;
        writeln!(
            out,
            "option name TieBreak type combo default {} var second var draw",
            TieBreak::default().name()
        )?;
        writeln!(out, "option name Seed type spin default 0")?;
        writeln!(out, "kalahaok")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles `newgame`: creates a game and writes `game <id> <notation>`.
    pub fn handle_newgame<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.games.create(self.options.stones, &mut self.rng) {
            Ok((id, game)) => write_game(out, id, &game),
            Err(e) => write_error(out, None, &e),
        }
    }

    /// Handles `position <notation>`: registers an existing game.
    ///
    /// A running position with an empty side is settled before it is stored.
    pub fn handle_position<W: Write>(&mut self, out: &mut W, notation: &str) -> io::Result<()> {
        match parse_notation(notation) {
            Ok(mut game) => {
                game.settle_if_ended(self.options.tie_break);
                let id = self.games.insert(game);
                write_game(out, id, &game)
            }
            Err(e) => {
                tracing::warn!(error = %e, notation, "rejected position");
                writeln!(out, "error - notation")?;
                out.flush()
            }
        }
    }

    /// Handles `play <id> <pit>`.
    ///
    /// Writes `turn <id> <notation> landing <index> captured <n>` on success
    /// and `error <id> <kind>` otherwise.
    pub fn handle_play<W: Write>(&mut self, out: &mut W, id: GameId, pit: i64) -> io::Result<()> {
        match self.games.play(id, pit, self.options.tie_break) {
            Ok(turn) => {
                let game = self.games.get(id).map_err(io::Error::other)?;
                writeln!(
                    out,
                    "turn {} {} landing {} captured {}",
                    id,
                    encode_notation(game),
                    turn.landing.index(),
                    turn.captured
                )?;
                out.flush()
            }
            Err(e) => write_error(out, Some(id), &e),
        }
    }

    /// Handles `show <id>`.
    pub fn handle_show<W: Write>(&self, out: &mut W, id: GameId) -> io::Result<()> {
        match self.games.get(id) {
            Ok(game) => write_game(out, id, game),
            Err(e) => write_error(out, Some(id), &e),
        }
    }

    /// Handles `delete <id>`.
    pub fn handle_delete<W: Write>(&mut self, out: &mut W, id: GameId) -> io::Result<()> {
        match self.games.remove(id) {
            Ok(_) => {
                writeln!(out, "deleted {}", id)?;
                out.flush()
            }
            Err(e) => write_error(out, Some(id), &e),
        }
    }
}

fn write_game<W: Write>(out: &mut W, id: GameId, game: &Game) -> io::Result<()> {
    writeln!(out, "game {} {}", id, encode_notation(game))?;
    out.flush()
}

fn write_error<W: Write>(out: &mut W, id: Option<GameId>, err: &GameError) -> io::Result<()> {
    tracing::warn!(id = ?id, error = %err, "command rejected");
    match id {
        Some(id) => writeln!(out, "error {} {}", id, err.kind())?,
        None => writeln!(out, "error - {}", err.kind())?,
    }
    out.flush()
}
