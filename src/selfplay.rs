//! Random self-play.
//!
//! Plays complete games with both sides choosing uniformly among their legal
//! pits. Used to exercise the turn engine end to end and to gather simple
//! statistics about openings and tie rates. Games can run in parallel on a
//! rayon pool; every game gets its own seeded RNG so results are repeatable.

use std::fmt;
use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::board::Player;
use crate::engine::DEFAULT_STONES;
use crate::game::{check_stones_per_pit, new_game, GameError};
use crate::movegen::random_pit;
use crate::protocol::notation::encode_notation;
use crate::resolve::{final_scores, Outcome, TieBreak};

/// Configuration for self-play runs.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Stones per pit at the start of each game.
    pub stones: u32,
    /// How equal final stores are scored.
    pub tie_break: TieBreak,
    /// Turn limit per game; games hitting it are recorded without an outcome.
    pub max_turns: usize,
    /// Number of parallel threads (1 = sequential).
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 100,
            stones: DEFAULT_STONES,
            tie_break: TieBreak::default(),
            max_turns: 1000,
            threads: 4,
            seed: 0,
        }
    }
}

/// Errors that stop a self-play run.
#[derive(Debug, thiserror::Error)]
pub enum SelfPlayError {
    #[error("game error: {0}")]
    Game(#[from] GameError),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One played turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    pub player: Player,
    pub pit: usize,
    pub landing: usize,
    pub captured: u32,
}

/// A complete self-play game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    pub starting_player: Player,
    pub turns: Vec<TurnRecord>,
    pub outcome: Option<Outcome>,
    pub scores: [u32; 2],
    pub final_notation: String,
}

fn game_rng(seed: u64, game_id: usize) -> SmallRng {
    if seed != 0 {
        SmallRng::seed_from_u64(seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Plays a single random game.
pub fn play_game(config: &SelfPlayConfig, game_id: usize, rng: &mut SmallRng) -> Result<GameRecord, GameError> {
    let mut game = new_game(config.stones, rng)?;
    let starting_player = game.player;
    let mut turns = Vec::new();

    while !game.is_over() && turns.len() < config.max_turns {
        let Some(pit) = random_pit(&game.board, game.player, rng) else {
            break;
        };
        let player = game.player;
        let turn = game.play(pit.index() as i64, config.tie_break)?;
        turns.push(TurnRecord {
            player,
            pit: pit.index(),
            landing: turn.landing.index(),
            captured: turn.captured,
        });
    }

    tracing::debug!(game_id, turns = turns.len(), outcome = ?game.outcome, "self-play game done");

    Ok(GameRecord {
        game_id,
        starting_player,
        turns,
        outcome: game.outcome,
        scores: final_scores(&game.board),
        final_notation: encode_notation(&game),
    })
}

/// Runs self-play and returns every game record in game-id order.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_self_play(config: &SelfPlayConfig) -> Result<Vec<GameRecord>, SelfPlayError> {
    check_stones_per_pit(config.stones)?;
    if config.threads > 1 {
        run_parallel(config)
    } else {
        run_sequential(config)
    }
}

fn run_sequential(config: &SelfPlayConfig) -> Result<Vec<GameRecord>, SelfPlayError> {
    (0..config.num_games)
        .map(|i| play_game(config, i, &mut game_rng(config.seed, i)).map_err(SelfPlayError::from))
        .collect()
}

fn run_parallel(config: &SelfPlayConfig) -> Result<Vec<GameRecord>, SelfPlayError> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    pool.install(|| {
        (0..config.num_games)
            .into_par_iter()
            .map(|i| play_game(config, i, &mut game_rng(config.seed, i)).map_err(SelfPlayError::from))
            .collect()
    })
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> Result<(), SelfPlayError> {
    for game in games {
        serde_json::to_writer(&mut *out, game).map_err(io::Error::from)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Aggregate results of a self-play run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub games: usize,
    /// Wins indexed by `player.id() - 1`.
    pub wins: [usize; 2],
    pub draws: usize,
    pub unfinished: usize,
    pub starter_wins: usize,
    pub mean_turns: f64,
}

/// Tallies outcomes over a set of games.
pub fn summarize(games: &[GameRecord]) -> Summary {
    let mut summary = Summary {
        games: games.len(),
        ..Default::default()
    };
    let mut total_turns = 0;
    for game in games {
        total_turns += game.turns.len();
        match game.outcome {
            Some(Outcome::Winner(p)) => {
                summary.wins[p.id() as usize - 1] += 1;
                if p == game.starting_player {
                    summary.starter_wins += 1;
                }
            }
            Some(Outcome::Draw) => summary.draws += 1,
            None => summary.unfinished += 1,
        }
    }
    if !games.is_empty() {
        summary.mean_turns = total_turns as f64 / games.len() as f64;
    }
    summary
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = |n: usize| {
            if self.games == 0 {
                0.0
            } else {
                100.0 * n as f64 / self.games as f64
            }
        };
        writeln!(f, "=== Self-Play Summary ===")?;
        writeln!(f, "Games: {}", self.games)?;
        writeln!(f, "Player 1 wins: {} ({:.1}%)", self.wins[0], pct(self.wins[0]))?;
        writeln!(f, "Player 2 wins: {} ({:.1}%)", self.wins[1], pct(self.wins[1]))?;
        writeln!(f, "Draws: {}", self.draws)?;
        writeln!(f, "Unfinished: {}", self.unfinished)?;
        writeln!(f, "Starting player wins: {} ({:.1}%)", self.starter_wins, pct(self.starter_wins))?;
        write!(f, "Mean turns: {:.1}", self.mean_turns)
    }
}
