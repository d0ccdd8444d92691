//! `VacuumWorld`: a cleaning agent in a left-to-right corridor of rooms.
//!
//! Every action costs 1. Successors are generated in a fixed order
//! (`Suck`, `MoveLeft`, `MoveRight`), which decides the tie-break between
//! equal-cost plans. The heuristic is the number of dirty rooms: each
//! dirty room needs at least one `Suck`, so it never overestimates.

use std::fmt;

use sweep_kernel::carrier::location::Location;
use sweep_kernel::carrier::room_state::{RoomStateV1, StateError, Status};
use sweep_search::contract::{SearchDomainV1, Successor};
use sweep_search::error::DomainError;

/// Unit cost shared by every vacuum action.
pub const STEP_COST: i64 = 1;

/// Actions available to the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VacuumAction {
    /// Clean the current room.
    Suck,
    MoveLeft,
    MoveRight,
}

impl VacuumAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Suck => "Suck",
            Self::MoveLeft => "MoveLeft",
            Self::MoveRight => "MoveRight",
        }
    }
}

impl fmt::Display for VacuumAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The vacuum world over an ordered corridor of rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacuumWorld {
    corridor: Vec<Location>,
}

impl VacuumWorld {
    /// Build a world from rooms listed left to right.
    ///
    /// # Errors
    ///
    /// - [`StateError::NoRooms`] for an empty corridor.
    /// - [`StateError::DuplicateRoom`] if a room is listed twice.
    pub fn new<I>(corridor: I) -> Result<Self, StateError>
    where
        I: IntoIterator<Item = Location>,
    {
        let mut rooms: Vec<Location> = Vec::new();
        for location in corridor {
            if rooms.contains(&location) {
                return Err(StateError::DuplicateRoom { location });
            }
            rooms.push(location);
        }
        if rooms.is_empty() {
            return Err(StateError::NoRooms);
        }
        Ok(Self { corridor: rooms })
    }

    /// The classic two-room world: `A` on the left, `B` on the right.
    #[must_use]
    pub fn two_room() -> Self {
        Self {
            corridor: vec![Location::from("A"), Location::from("B")],
        }
    }

    /// Rooms, left to right.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.corridor
    }

    /// Build a state for this world with `agent` in place and the listed
    /// rooms dirty; every other room is clean.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::UnknownLocation`] if `agent` or any dirty
    /// room is not part of the corridor.
    pub fn initial_state(
        &self,
        agent: &Location,
        dirty: &[Location],
    ) -> Result<RoomStateV1, StateError> {
        if let Some(unknown) = dirty.iter().find(|d| !self.corridor.contains(d)) {
            return Err(StateError::UnknownLocation {
                location: unknown.clone(),
            });
        }
        RoomStateV1::new(
            agent.clone(),
            self.corridor.iter().map(|room| {
                let status = if dirty.contains(room) {
                    Status::Dirty
                } else {
                    Status::Clean
                };
                (room.clone(), status)
            }),
        )
    }

    fn position(&self, location: &Location) -> Option<usize> {
        self.corridor.iter().position(|room| room == location)
    }
}

impl Default for VacuumWorld {
    fn default() -> Self {
        Self::two_room()
    }
}

impl SearchDomainV1 for VacuumWorld {
    type State = RoomStateV1;
    type Action = VacuumAction;

    #[allow(clippy::unnecessary_literal_bound)]
    fn domain_id(&self) -> &str {
        "vacuum"
    }

    /// A state must cover exactly the corridor's rooms.
    fn validate_state(&self, state: &RoomStateV1) -> Result<(), DomainError> {
        if let Some((unknown, _)) = state.rooms().find(|(room, _)| self.position(room).is_none()) {
            return Err(DomainError::UnknownLocation {
                location: unknown.clone(),
            });
        }
        match self
            .corridor
            .iter()
            .find(|room| state.status_of(room).is_none())
        {
            Some(missing) => Err(DomainError::UnknownLocation {
                location: missing.clone(),
            }),
            None => Ok(()),
        }
    }

    fn successors(
        &self,
        state: &RoomStateV1,
    ) -> Result<Vec<Successor<RoomStateV1, VacuumAction>>, DomainError> {
        self.validate_state(state)?;
        let here = state.agent();
        let index = self
            .position(here)
            .ok_or_else(|| DomainError::UnknownLocation {
                location: here.clone(),
            })?;

        let mut out = Vec::with_capacity(3);
        if state.status_of(here) == Some(Status::Dirty) {
            out.push(Successor::new(
                state.with_status(here, Status::Clean)?,
                VacuumAction::Suck,
                STEP_COST,
            ));
        }
        if index > 0 {
            out.push(Successor::new(
                state.with_agent(&self.corridor[index - 1])?,
                VacuumAction::MoveLeft,
                STEP_COST,
            ));
        }
        if index + 1 < self.corridor.len() {
            out.push(Successor::new(
                state.with_agent(&self.corridor[index + 1])?,
                VacuumAction::MoveRight,
                STEP_COST,
            ));
        }
        Ok(out)
    }

    fn is_goal(&self, state: &RoomStateV1) -> bool {
        state.is_goal()
    }

    fn heuristic(&self, state: &RoomStateV1) -> i64 {
        i64::try_from(state.dirty_count()).unwrap_or(i64::MAX)
    }
}
