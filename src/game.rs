//! Game values and the in-process game registry.
//!
//! A `Game` is the whole persisted state of one match: the board, whose turn
//! it is, and the outcome once there is one. Games are created by
//! [`new_game`] and only change through [`Game::play`], one full turn at a
//! time. The registry keeps many independent games addressable by id.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, MAX_STONES_PER_PIT};
use crate::resolve::{play_turn, settle, Outcome, TieBreak, Turn};
use crate::validate::{ensure_not_empty, validate_selection, SelectionError};

/// Errors returned by game creation, play, and registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("starting stones per pit must be between 1 and {max}", max = MAX_STONES_PER_PIT)]
    InvalidStoneCount,

    #[error("game is already over ({0:?})")]
    GameOver(Outcome),

    #[error("no game with id {0}")]
    NotFound(GameId),
}

impl GameError {
    /// Stable short name used in protocol error replies.
    pub const fn kind(&self) -> &'static str {
        match self {
            GameError::Selection(e) => e.kind(),
            GameError::InvalidStoneCount => "invalid_stone_count",
            GameError::GameOver(_) => "game_over",
            GameError::NotFound(_) => "not_found",
        }
    }
}

/// A single Kalaha match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub board: Board,
    pub player: Player,
    pub outcome: Option<Outcome>,
}

/// Creates a fresh game with `stones_per_pit` in every pit and a random
/// starting player drawn from `rng`.
pub fn new_game(stones_per_pit: u32, rng: &mut impl Rng) -> Result<Game, GameError> {
    check_stones_per_pit(stones_per_pit)?;
    Ok(Game::with_player(Board::new(stones_per_pit), Player::random(rng)))
}

/// Rejects starting stone counts outside `1..=MAX_STONES_PER_PIT`.
pub fn check_stones_per_pit(stones_per_pit: u32) -> Result<(), GameError> {
    if (1..=MAX_STONES_PER_PIT).contains(&stones_per_pit) {
        Ok(())
    } else {
        Err(GameError::InvalidStoneCount)
    }
}

impl Game {
    /// Creates an ongoing game from a board and the player to move.
    pub fn with_player(board: Board, player: Player) -> Self {
        Game {
            board,
            player,
            outcome: None,
        }
    }

    /// Returns true once an outcome has been recorded.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Settles a running game whose pits on either side are already empty,
    /// as loaded positions may be. Returns the recorded outcome, if any.
    pub fn settle_if_ended(&mut self, tie_break: TieBreak) -> Option<Outcome> {
        if self.outcome.is_none() {
            self.outcome = settle(&mut self.board, tie_break);
        }
        self.outcome
    }

    /// Validates `index` for the player to move and plays it.
    ///
    /// On error the game is left exactly as it was.
    pub fn play(&mut self, index: i64, tie_break: TieBreak) -> Result<Turn, GameError> {
        if let Some(outcome) = self.outcome {
            return Err(GameError::GameOver(outcome));
        }
        let pit = validate_selection(self.player, index)?;
        ensure_not_empty(&self.board, pit)?;

        let turn = play_turn(&self.board, self.player, pit, tie_break);
        self.board = turn.board;
        self.player = turn.next_player;
        self.outcome = turn.outcome;
        Ok(turn)
    }
}

/// Identifier handed out by the registry.
pub type GameId = u64;

/// Independent games addressed by id.
///
/// Owned by a single command loop; callers that share it across threads
/// must serialize access themselves.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: BTreeMap<GameId, Game>,
    next_id: GameId,
}

impl GameRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new game and returns its id.
    pub fn create(&mut self, stones_per_pit: u32, rng: &mut impl Rng) -> Result<(GameId, Game), GameError> {
        let game = new_game(stones_per_pit, rng)?;
        self.next_id += 1;
        let id = self.next_id;
        self.games.insert(id, game);
        tracing::info!(id, starting = %game.player, stones_per_pit, "game created");
        Ok((id, game))
    }

    /// Stores an existing game under a fresh id.
    pub fn insert(&mut self, game: Game) -> GameId {
        self.next_id += 1;
        self.games.insert(self.next_id, game);
        self.next_id
    }

    /// Looks up a game.
    pub fn get(&self, id: GameId) -> Result<&Game, GameError> {
        self.games.get(&id).ok_or(GameError::NotFound(id))
    }

    /// Plays a turn in the game with the given id.
    pub fn play(&mut self, id: GameId, index: i64, tie_break: TieBreak) -> Result<Turn, GameError> {
        let game = self.games.get_mut(&id).ok_or(GameError::NotFound(id))?;
        let turn = game.play(index, tie_break)?;
        if let Some(outcome) = turn.outcome {
            tracing::info!(id, ?outcome, "game finished");
        }
        Ok(turn)
    }

    /// Removes a game and returns its last state.
    pub fn remove(&mut self, id: GameId) -> Result<Game, GameError> {
        self.games.remove(&id).ok_or(GameError::NotFound(id))
    }

    /// Number of games currently held.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Returns true if no games are held.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pit;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn new_game_layout() {
        let mut rng = SmallRng::seed_from_u64(1);
        let game = new_game(4, &mut rng).unwrap();
        assert_eq!(game.board, Board::new(4));
        assert!(!game.is_over());
    }

    #[test]
    fn new_game_rejects_zero_stones() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(new_game(0, &mut rng), Err(GameError::InvalidStoneCount));
    }

    #[test]
    fn new_game_rejects_too_many_stones() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(new_game(MAX_STONES_PER_PIT, &mut rng).is_ok());
        assert_eq!(
            new_game(MAX_STONES_PER_PIT + 1, &mut rng),
            Err(GameError::InvalidStoneCount)
        );
        assert_eq!(new_game(u32::MAX, &mut rng), Err(GameError::InvalidStoneCount));
    }

    #[test]
    fn loaded_game_with_empty_side_settles() {
        let mut board = Board::new(0);
        board.set(Pit::StoreOne, 30);
        board.set(Pit::V, 5);
        board.set(Pit::StoreTwo, 20);
        let mut game = Game::with_player(board, Player::One);
        assert_eq!(
            game.settle_if_ended(TieBreak::default()),
            Some(Outcome::Winner(Player::One))
        );
        assert_eq!(game.board.store(Player::Two), 25);
        assert!(game.board.side_empty(Player::Two));
        assert_eq!(
            game.play(0, TieBreak::default()),
            Err(GameError::GameOver(Outcome::Winner(Player::One)))
        );
    }

    #[test]
    fn settle_if_ended_leaves_running_game_alone() {
        let mut game = Game::with_player(Board::new(6), Player::Two);
        let before = game;
        assert_eq!(game.settle_if_ended(TieBreak::default()), None);
        assert_eq!(game, before);
    }

    #[test]
    fn seeded_start_is_reproducible() {
        let a = new_game(6, &mut SmallRng::seed_from_u64(99)).unwrap();
        let b = new_game(6, &mut SmallRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn play_advances_turn() {
        let mut game = Game::with_player(Board::new(6), Player::One);
        let turn = game.play(1, TieBreak::default()).unwrap();
        assert_eq!(turn.landing, Pit::U);
        assert_eq!(game.player, Player::Two);
        assert_eq!(game.board, turn.board);
    }

    #[test]
    fn rejected_move_leaves_game_unchanged() {
        let mut game = Game::with_player(Board::new(6), Player::One);
        let before = game;
        for index in [-3, 6, 9, 14] {
            assert!(game.play(index, TieBreak::default()).is_err());
            assert_eq!(game, before);
        }
        game.board.set(Pit::C, 0);
        let before = game;
        assert_eq!(
            game.play(2, TieBreak::default()),
            Err(GameError::Selection(SelectionError::EmptyPit(Pit::C)))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn finished_game_refuses_moves() {
        let mut board = Board::new(0);
        board.set(Pit::F, 1);
        board.set(Pit::V, 2);
        let mut game = Game::with_player(board, Player::One);
        let turn = game.play(5, TieBreak::default()).unwrap();
        assert_eq!(turn.outcome, Some(Outcome::Winner(Player::Two)));
        assert_eq!(
            game.play(0, TieBreak::default()),
            Err(GameError::GameOver(Outcome::Winner(Player::Two)))
        );
    }

    #[test]
    fn registry_lifecycle() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut registry = GameRegistry::new();
        let (a, _) = registry.create(6, &mut rng).unwrap();
        let (b, _) = registry.create(3, &mut rng).unwrap();
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(b).unwrap().board, Board::new(3));

        let player = registry.get(a).unwrap().player;
        let index = player.pits()[0].index() as i64;
        registry.play(a, index, TieBreak::default()).unwrap();
        assert_eq!(registry.get(b).unwrap().board, Board::new(3));

        registry.remove(a).unwrap();
        assert_eq!(registry.get(a), Err(GameError::NotFound(a)));
        assert_eq!(registry.play(a, 0, TieBreak::default()), Err(GameError::NotFound(a)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn error_kinds() {
        assert_eq!(GameError::NotFound(4).kind(), "not_found");
        assert_eq!(
            GameError::from(SelectionError::OutOfRange(99)).kind(),
            "out_of_range"
        );
    }
}
