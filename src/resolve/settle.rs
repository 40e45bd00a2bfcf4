//! End-of-game detection and settlement.
//!
//! The game ends as soon as either player's six pits are all empty. The
//! other player's remaining pit stones are swept into their own store and
//! the larger store wins.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, ALL_PLAYERS};

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl Outcome {
    /// Returns the winning player, or `None` for a draw.
    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(p) => Some(p),
            Outcome::Draw => None,
        }
    }
}

/// How equal store totals are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// Equal stores award the game to Player Two.
    #[default]
    SecondPlayer,
    /// Equal stores are a draw.
    Draw,
}

impl TieBreak {
    /// Returns the option value used by `setoption`.
    pub const fn name(self) -> &'static str {
        match self {
            TieBreak::SecondPlayer => "second",
            TieBreak::Draw => "draw",
        }
    }

    fn resolve(self) -> Outcome {
        match self {
            TieBreak::SecondPlayer => Outcome::Winner(Player::Two),
            TieBreak::Draw => Outcome::Draw,
        }
    }
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "second" => Ok(TieBreak::SecondPlayer),
            "draw" => Ok(TieBreak::Draw),
            other => Err(format!("unknown tie break '{}'", other)),
        }
    }
}

/// Compares two final store totals.
pub fn decide(store_one: u32, store_two: u32, tie_break: TieBreak) -> Outcome {
    match store_one.cmp(&store_two) {
        std::cmp::Ordering::Greater => Outcome::Winner(Player::One),
        std::cmp::Ordering::Less => Outcome::Winner(Player::Two),
        std::cmp::Ordering::Equal => tie_break.resolve(),
    }
}

/// Returns true once either player has no stones left in their pits.
pub fn either_side_empty(board: &Board) -> bool {
    ALL_PLAYERS.iter().any(|&p| board.side_empty(p))
}

/// Store totals each player would finish with if the game ended now.
///
/// Indexed by `player.id() - 1`.
pub fn final_scores(board: &Board) -> [u32; 2] {
    ALL_PLAYERS.map(|p| board.store(p) + board.pit_total(p))
}

/// Settles a finished game in place.
///
/// If either side is empty, every pit is swept into its owner's store and
/// the outcome is returned. Otherwise the board is left untouched.
pub fn settle(board: &mut Board, tie_break: TieBreak) -> Option<Outcome> {
    if !either_side_empty(board) {
        return None;
    }
    for player in ALL_PLAYERS {
        let swept: u32 = player.pits().iter().map(|&p| board.take(p)).sum();
        board.add(player.store(), swept);
    }
    let outcome = decide(board.store(Player::One), board.store(Player::Two), tie_break);
    tracing::debug!(
        store_one = board.store(Player::One),
        store_two = board.store(Player::Two),
        ?outcome,
        "settled"
    );
    Some(outcome)
}

/// Read-only end-of-game check.
///
/// Returns the outcome the game would settle to, without sweeping.
pub fn is_game_over(board: &Board, tie_break: TieBreak) -> Option<Outcome> {
    if !either_side_empty(board) {
        return None;
    }
    let [one, two] = final_scores(board);
    Some(decide(one, two, tie_break))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pit;

    fn empty_side_one() -> Board {
        let mut board = Board::new(0);
        board.set(Pit::StoreOne, 20);
        board.set(Pit::StoreTwo, 15);
        board.set(Pit::U, 3);
        board.set(Pit::Z, 4);
        board
    }

    #[test]
    fn ongoing_game_is_not_settled() {
        let mut board = Board::new(6);
        assert_eq!(settle(&mut board, TieBreak::default()), None);
        assert_eq!(board, Board::new(6));
        assert_eq!(is_game_over(&board, TieBreak::default()), None);
    }

    #[test]
    fn settlement_sweeps_remaining_side() {
        let mut board = empty_side_one();
        let outcome = settle(&mut board, TieBreak::default());
        assert_eq!(board.pit_total(Player::Two), 0);
        assert_eq!(board.store(Player::Two), 22);
        assert_eq!(board.store(Player::One), 20);
        assert_eq!(outcome, Some(Outcome::Winner(Player::Two)));
        assert_eq!(board.total(), 42);
    }

    #[test]
    fn read_only_check_matches_settlement() {
        let before = empty_side_one();
        let projected = is_game_over(&before, TieBreak::default());
        let mut after = before;
        let settled = settle(&mut after, TieBreak::default());
        assert_eq!(projected, settled);
        assert_eq!(before.get(Pit::U), 3);
    }

    #[test]
    fn larger_store_wins() {
        assert_eq!(decide(25, 23, TieBreak::default()), Outcome::Winner(Player::One));
        assert_eq!(decide(23, 25, TieBreak::default()), Outcome::Winner(Player::Two));
    }

    #[test]
    fn tie_goes_to_second_player_by_default() {
        assert_eq!(decide(24, 24, TieBreak::default()), Outcome::Winner(Player::Two));
        assert_eq!(decide(24, 24, TieBreak::Draw), Outcome::Draw);
    }

    #[test]
    fn final_scores_include_pits() {
        assert_eq!(final_scores(&empty_side_one()), [20, 22]);
    }

    #[test]
    fn tie_break_parsing() {
        assert_eq!("second".parse::<TieBreak>(), Ok(TieBreak::SecondPlayer));
        assert_eq!("Draw".parse::<TieBreak>(), Ok(TieBreak::Draw));
        assert!("coin".parse::<TieBreak>().is_err());
        for tb in [TieBreak::SecondPlayer, TieBreak::Draw] {
            assert_eq!(tb.name().parse::<TieBreak>(), Ok(tb));
        }
    }
}
