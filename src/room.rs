//! Room: the per-match state machine.

use crate::board::{Board, SquareType};
use crate::error::EngineError;
use crate::player::{Player, PlayerType};
use crate::rules;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// One active match: a board, two ordered players, and a turn cursor.
///
/// The first player (the creator) is always X and the second player is
/// always O. When both players are human the starting player is chosen
/// uniformly at random; against a bot the creator always starts. The turn
/// cursor is mutated only by `swap_player`.
#[derive(Debug, Clone)]
pub struct Room {
    board: Board,
    players: [Player; 2],
    current: usize,
}

impl Room {
    /// Creates a room for `creator` against `opponent`.
    ///
    /// `opponent` is the second human's handle and is absent for bot games.
    #[instrument(skip_all, fields(creator = %creator, second_kind = %second_kind))]
    pub fn new(creator: String, opponent: Option<String>, second_kind: PlayerType) -> Self {
        let players = [
            Player::new(Some(creator), PlayerType::Human, SquareType::X),
            Player::new(opponent, second_kind, SquareType::O),
        ];
        let current = if second_kind == PlayerType::Human {
            rand::thread_rng().gen_range(0..2)
        } else {
            0
        };
        debug!(current, "room created");
        Self {
            board: Board::new(),
            players,
            current,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players, creator first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Returns the player waiting for their turn.
    pub fn opponent_player(&self) -> &Player {
        &self.players[(self.current + 1) % 2]
    }

    /// Plays the current player's mark at `pos`, then advances through any
    /// bot turns until the game ends or a human is to move.
    ///
    /// Either the whole move-plus-cascade completes, or the initial
    /// validation fails and nothing is mutated.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidArgument`] if `pos` is out of range or
    /// not free.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: usize) -> Result<(), EngineError> {
        if pos >= Board::SIZE * Board::SIZE {
            return Err(EngineError::invalid_argument(format!(
                "position {pos} is out of range"
            )));
        }
        if !self.board.free_positions().contains(&pos) {
            return Err(EngineError::invalid_argument(format!(
                "position {pos} is not free"
            )));
        }

        self.place(pos)?;
        self.run_bot_turns()
    }

    /// Plays a uniformly random free position on behalf of the current
    /// player.
    ///
    /// Adapters call this when a human times out; the engine itself has no
    /// notion of wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidState`] if no free square remains.
    #[instrument(skip(self))]
    pub fn pass_turn(&mut self) -> Result<(), EngineError> {
        let pos = self
            .board
            .free_positions()
            .choose(&mut rand::thread_rng())
            .copied()
            .ok_or_else(|| EngineError::invalid_state("no free square left to pass with"))?;
        debug!(pos, "turn passed");
        self.play(pos)
    }

    /// True when the board is full or a line is complete.
    pub fn is_over(&self) -> bool {
        rules::is_over(&self.board)
    }

    /// Returns the winning player, or `None` for a draw.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidState`] while the game is in progress.
    pub fn winner(&self) -> Result<Option<&Player>, EngineError> {
        if !self.is_over() {
            return Err(EngineError::invalid_state(
                "cannot get the winner while the game is in progress",
            ));
        }
        match rules::winning_mark(&self.board) {
            None => Ok(None),
            Some(mark) => Ok(self.players.iter().find(|player| *player.mark() == mark)),
        }
    }

    /// Places the current player's mark at `pos`.
    fn place(&mut self, pos: usize) -> Result<(), EngineError> {
        let mark = *self.current_player().mark();
        self.board.set_position(pos, mark)?;
        debug!(pos, %mark, "mark placed");
        Ok(())
    }

    /// Hands the turn to the other player.
    fn swap_player(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    /// Advances through bot turns until the game ends or a human is to move.
    ///
    /// Every bot move consumes a free square, so the cascade terminates on
    /// its own; the loop bound guards against a misbehaving policy.
    fn run_bot_turns(&mut self) -> Result<(), EngineError> {
        for _ in 0..Board::SIZE * Board::SIZE {
            if self.is_over() {
                return Ok(());
            }
            self.swap_player();
            let Some(policy) = self.current_player().kind().policy() else {
                return Ok(());
            };
            let Some(pos) = policy.choose_move(&self.board, *self.current_player().mark()) else {
                return Ok(());
            };
            self.place(pos)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creator_is_x_and_starts_against_bots() {
        let room = Room::new("alice".to_string(), None, PlayerType::EasyBot);
        assert_eq!(*room.players()[0].mark(), SquareType::X);
        assert_eq!(*room.players()[1].mark(), SquareType::O);
        assert_eq!(room.current_player().handle().as_deref(), Some("alice"));
        assert!(room.opponent_player().is_bot());
    }

    #[test]
    fn two_human_start_is_one_of_the_players() {
        for _ in 0..20 {
            let room = Room::new(
                "alice".to_string(),
                Some("bob".to_string()),
                PlayerType::Human,
            );
            let starter = room.current_player().handle().as_deref();
            assert!(starter == Some("alice") || starter == Some("bob"));
        }
    }

    #[test]
    fn swap_alternates_between_the_two_players() {
        let mut room = Room::new(
            "alice".to_string(),
            Some("bob".to_string()),
            PlayerType::Human,
        );
        let first = room.current_player().clone();
        room.swap_player();
        assert_eq!(room.opponent_player(), &first);
        room.swap_player();
        assert_eq!(room.current_player(), &first);
    }
}
