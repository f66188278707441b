//! Turn-based tic-tac-toe engine for chat bots.
//!
//! The engine covers the game itself: board state, turn order, win
//! detection, three bot difficulty tiers, and a registry that keeps at most
//! one active match per external room identifier. Everything platform-facing
//! (message rendering, reaction collection, command parsing, timeouts) is an
//! adapter around this crate.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of write-once squares, row-major positions 0-8.
//! - **Room**: one match — two ordered players, a turn cursor, and the
//!   synchronous bot-move cascade inside [`Room::play`].
//! - **Strategy**: one [`MovePolicy`] per bot tier; the strongest tier runs
//!   an exhaustive minimax search with alpha-beta pruning.
//! - **Registry**: external id to room, with explicit lifecycle.
//!
//! # Example
//!
//! ```
//! use oxo::{PlayerType, Registry};
//!
//! # fn main() -> Result<(), oxo::EngineError> {
//! let mut registry = Registry::new();
//! registry.new_room("channel-1", "alice".to_string(), None, PlayerType::CheatBot)?;
//!
//! let room = registry.room_mut("channel-1")?;
//! room.play(4)?; // the bot answers before play() returns
//! assert!(!room.board().free_positions().contains(&4));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod player;
mod registry;
mod room;
pub mod rules;
mod search;
mod strategy;

pub use board::{Board, Square, SquareType};
pub use error::EngineError;
pub use player::{Player, PlayerType};
pub use registry::{Registry, RoomId};
pub use room::Room;
pub use search::best_position;
pub use strategy::{CheatPolicy, EasyPolicy, MovePolicy, RandomPolicy};
