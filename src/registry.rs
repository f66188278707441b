//! Room registry: at most one active match per external identifier.

use crate::error::EngineError;
use crate::player::PlayerType;
use crate::room::Room;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// External room identifier, e.g. a channel or conversation id.
///
/// Identifiers are supplied by the adapter and treated as opaque keys; the
/// only malformed value is the empty string.
pub type RoomId = String;

/// Maps an external identifier to at most one active [`Room`].
///
/// The registry is not internally synchronized; a hosting system with
/// multiple workers must serialize access per room.
#[derive(Debug, Default)]
pub struct Registry {
    rooms: HashMap<RoomId, Room>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a room for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidArgument`] for an empty id and
    /// [`EngineError::AlreadyExists`] if a room is already active for it.
    #[instrument(skip_all)]
    pub fn new_room(
        &mut self,
        id: impl Into<RoomId>,
        creator: String,
        opponent: Option<String>,
        second_kind: PlayerType,
    ) -> Result<(), EngineError> {
        let id = id.into();
        validate_id(&id)?;
        if self.rooms.contains_key(&id) {
            warn!(id = %id, "room already exists");
            return Err(EngineError::already_exists(id));
        }
        info!(id = %id, %second_kind, "room created");
        self.rooms
            .insert(id, Room::new(creator, opponent, second_kind));
        Ok(())
    }

    /// Returns the room for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidArgument`] for an empty or unknown id;
    /// callers that expect absence should check [`Registry::has`] first.
    pub fn room(&self, id: &str) -> Result<&Room, EngineError> {
        validate_id(id)?;
        self.rooms
            .get(id)
            .ok_or_else(|| EngineError::invalid_argument(format!("no room for id {id:?}")))
    }

    /// Returns the room for `id` mutably.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Registry::room`].
    pub fn room_mut(&mut self, id: &str) -> Result<&mut Room, EngineError> {
        validate_id(id)?;
        self.rooms
            .get_mut(id)
            .ok_or_else(|| EngineError::invalid_argument(format!("no room for id {id:?}")))
    }

    /// True if a room is active for `id`.
    pub fn has(&self, id: &str) -> bool {
        self.rooms.contains_key(id)
    }

    /// Removes the room for `id`, if present.
    #[instrument(skip(self))]
    pub fn stop(&mut self, id: &str) {
        if self.rooms.remove(id).is_some() {
            info!("room stopped");
        } else {
            debug!("stop on an id with no active room");
        }
    }
}

fn validate_id(id: &str) -> Result<(), EngineError> {
    if id.is_empty() {
        return Err(EngineError::invalid_argument("empty room id"));
    }
    Ok(())
}
