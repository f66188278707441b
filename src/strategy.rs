//! Move selection policies for the bot tiers.

use crate::board::{Board, SquareType};
use crate::search;
use rand::seq::SliceRandom;

/// A move selection policy for a bot player.
///
/// Policies are stateless: they read the board and the mover's mark and
/// return a free position, or `None` when no free square remains. The room
/// invokes the policy for the current player's type instead of branching on
/// the type inline.
pub trait MovePolicy: std::fmt::Debug + Sync {
    /// Chooses a position in `[0, 9)` among the free squares of `board`.
    fn choose_move(&self, board: &Board, mark: SquareType) -> Option<usize>;
}

/// Plays the lowest free position. Deterministic, weakest tier.
#[derive(Debug, Clone, Copy)]
pub struct EasyPolicy;

impl MovePolicy for EasyPolicy {
    fn choose_move(&self, board: &Board, _mark: SquareType) -> Option<usize> {
        board.free_positions().first().copied()
    }
}

/// Plays a uniformly random free position.
#[derive(Debug, Clone, Copy)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose_move(&self, board: &Board, _mark: SquareType) -> Option<usize> {
        board
            .free_positions()
            .choose(&mut rand::thread_rng())
            .copied()
    }
}

/// Plays the optimal position found by minimax search. Never loses.
#[derive(Debug, Clone, Copy)]
pub struct CheatPolicy;

impl MovePolicy for CheatPolicy {
    fn choose_move(&self, board: &Board, mark: SquareType) -> Option<usize> {
        search::best_position(board, mark)
    }
}
