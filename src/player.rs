//! Player identity, mark assignment, and behavioral type.

use crate::board::SquareType;
use crate::strategy::{CheatPolicy, EasyPolicy, MovePolicy, RandomPolicy};
use serde::{Deserialize, Serialize};

/// Behavioral type of a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum PlayerType {
    /// A human driven by an external adapter.
    Human,
    /// Bot that plays the first free position.
    EasyBot,
    /// Bot that plays a uniformly random free position.
    RandomBot,
    /// Bot that plays optimally via minimax search.
    CheatBot,
}

impl PlayerType {
    /// True for the three bot tiers.
    pub fn is_bot(self) -> bool {
        self != PlayerType::Human
    }

    /// Returns the move policy for a bot type, `None` for humans.
    pub fn policy(self) -> Option<&'static dyn MovePolicy> {
        match self {
            PlayerType::Human => None,
            PlayerType::EasyBot => Some(&EasyPolicy),
            PlayerType::RandomBot => Some(&RandomPolicy),
            PlayerType::CheatBot => Some(&CheatPolicy),
        }
    }
}

/// A participant in a room.
///
/// The handle is the external user identity for humans and `None` for bots.
/// The mark is assigned exactly once at room construction and is always X
/// or O from then on.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct Player {
    /// External user handle; `None` for bots.
    handle: Option<String>,
    /// Behavioral type.
    kind: PlayerType,
    /// Assigned mark, fixed for the lifetime of the room.
    mark: SquareType,
}

impl Player {
    /// True if this player is driven by a bot policy.
    pub fn is_bot(&self) -> bool {
        self.kind.is_bot()
    }
}
