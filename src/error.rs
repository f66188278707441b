//! Engine error taxonomy.

use derive_more::{Display, Error};

/// Errors raised by the game engine.
///
/// Every failure is synchronous: the call that caused it fails and no state
/// is mutated. Adapters are expected to catch these and translate them into
/// user-facing messages; the engine never renders or retries.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Out-of-range coordinates or positions, a malformed identifier, or an
    /// attempt to assign the empty mark.
    #[display("invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument.
        message: String,
    },
    /// An operation attempted in the wrong state, such as writing to an
    /// occupied square or asking for a winner mid-game.
    #[display("invalid state: {message}")]
    InvalidState {
        /// Which precondition failed.
        message: String,
    },
    /// A room already exists for the given identifier.
    #[display("room {id:?} already exists")]
    AlreadyExists {
        /// The conflicting room identifier.
        id: String,
    },
}

impl EngineError {
    /// Creates an [`EngineError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates an [`EngineError::InvalidState`].
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Creates an [`EngineError::AlreadyExists`].
    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists { id: id.into() }
    }
}
