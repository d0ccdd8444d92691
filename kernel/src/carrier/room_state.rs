//! `RoomStateV1`: one configuration of a vacuum world.
//!
//! The state is the agent's location plus the status of every room. The
//! status map is held in a `BTreeMap`, so the stored form is already
//! canonical: equality, `Hash`, and identity bytes are independent of the
//! order in which rooms were supplied.

use std::collections::BTreeMap;

use super::identity::{write_str, StateIdentity};
use super::location::Location;

/// Cleanliness of a single room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    Clean,
    Dirty,
}

impl Status {
    /// Stable byte tag used in identity encoding.
    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            Self::Clean => 0,
            Self::Dirty => 1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Dirty => "dirty",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure constructing or deriving a [`RoomStateV1`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// A state needs at least one room.
    #[error("state has no rooms")]
    NoRooms,
    /// The same room was listed twice.
    #[error("room {location} listed more than once")]
    DuplicateRoom { location: Location },
    /// A location outside the state's rooms was referenced.
    #[error("unknown location {location}")]
    UnknownLocation { location: Location },
}

/// Immutable vacuum-world state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomStateV1 {
    agent: Location,
    rooms: BTreeMap<Location, Status>,
}

impl RoomStateV1 {
    /// Build a state from the agent location and `(room, status)` pairs.
    ///
    /// # Errors
    ///
    /// - [`StateError::NoRooms`] if `rooms` is empty.
    /// - [`StateError::DuplicateRoom`] if a room appears twice.
    /// - [`StateError::UnknownLocation`] if `agent` is not one of the rooms.
    pub fn new(
        agent: Location,
        rooms: impl IntoIterator<Item = (Location, Status)>,
    ) -> Result<Self, StateError> {
        let mut map = BTreeMap::new();
        for (location, status) in rooms {
            if map.contains_key(&location) {
                return Err(StateError::DuplicateRoom { location });
            }
            map.insert(location, status);
        }
        if map.is_empty() {
            return Err(StateError::NoRooms);
        }
        if !map.contains_key(&agent) {
            return Err(StateError::UnknownLocation { location: agent });
        }
        Ok(Self { agent, rooms: map })
    }

    #[must_use]
    pub fn agent(&self) -> &Location {
        &self.agent
    }

    /// Rooms in canonical (sorted) order.
    pub fn rooms(&self) -> impl Iterator<Item = (&Location, Status)> {
        self.rooms.iter().map(|(l, s)| (l, *s))
    }

    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub fn status_of(&self, location: &Location) -> Option<Status> {
        self.rooms.get(location).copied()
    }

    /// Number of rooms that are not clean.
    #[must_use]
    pub fn dirty_count(&self) -> usize {
        self.rooms.values().filter(|s| **s != Status::Clean).count()
    }

    /// Goal test: every room is clean.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.dirty_count() == 0
    }

    /// A copy of this state with `location` set to `status`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::UnknownLocation`] if `location` is not a room.
    pub fn with_status(&self, location: &Location, status: Status) -> Result<Self, StateError> {
        let mut rooms = self.rooms.clone();
        let slot = rooms
            .get_mut(location)
            .ok_or_else(|| StateError::UnknownLocation {
                location: location.clone(),
            })?;
        *slot = status;
        Ok(Self {
            agent: self.agent.clone(),
            rooms,
        })
    }

    /// A copy of this state with the agent moved to `location`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::UnknownLocation`] if `location` is not a room.
    pub fn with_agent(&self, location: &Location) -> Result<Self, StateError> {
        if !self.rooms.contains_key(location) {
            return Err(StateError::UnknownLocation {
                location: location.clone(),
            });
        }
        Ok(Self {
            agent: location.clone(),
            rooms: self.rooms.clone(),
        })
    }
}

/// Layout: `agent || room_count:u32le || (room || status_tag)*` with rooms
/// in sorted order.
impl StateIdentity for RoomStateV1 {
    fn identity_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        write_str(&mut buf, self.agent.as_str());
        let count = u32::try_from(self.rooms.len()).unwrap_or(u32::MAX);
        buf.extend_from_slice(&count.to_le_bytes());
        for (location, status) in &self.rooms {
            write_str(&mut buf, location.as_str());
            buf.push(status.tag());
        }
        buf
    }
}
