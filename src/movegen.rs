//! Legal move generation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Pit, Player};
use crate::game::Game;
use crate::resolve::{play_turn, TieBreak};

/// Returns `player`'s non-empty pits in sowing order.
pub fn legal_pits(board: &Board, player: Player) -> Vec<Pit> {
    player
        .pits()
        .iter()
        .copied()
        .filter(|&p| board.get(p) > 0)
        .collect()
}

/// Picks a random legal pit, or `None` if the player has no stones in pits.
pub fn random_pit(board: &Board, player: Player, rng: &mut impl Rng) -> Option<Pit> {
    legal_pits(board, player).choose(rng).copied()
}

/// Counts the leaf positions reachable in exactly `depth` turns.
///
/// A finished game counts as a single leaf regardless of remaining depth.
pub fn perft(game: &Game, depth: u32, tie_break: TieBreak) -> u64 {
    if depth == 0 || game.is_over() {
        return 1;
    }
    legal_pits(&game.board, game.player)
        .into_iter()
        .map(|pit| {
            let turn = play_turn(&game.board, game.player, pit, tie_break);
            let child = Game {
                board: turn.board,
                player: turn.next_player,
                outcome: turn.outcome,
            };
            perft(&child, depth - 1, tie_break)
        })
        .sum()
}
