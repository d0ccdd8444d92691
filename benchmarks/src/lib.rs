//! Shared helpers for sweep benchmark suites.

use sweep_harness::worlds::route::{RouteMap, RouteWorld};
use sweep_harness::worlds::vacuum::VacuumWorld;
use sweep_kernel::carrier::location::Location;
use sweep_kernel::carrier::room_state::RoomStateV1;

/// Room names `R00`, `R01`, ... for a corridor of `n` rooms.
#[must_use]
pub fn room_names(n: usize) -> Vec<Location> {
    (0..n).map(|i| Location::new(format!("R{i:02}"))).collect()
}

/// A corridor of `n` rooms, all dirty, with the agent in the middle.
///
/// # Panics
///
/// Panics if `n` is zero. Benchmark setup failures are fatal.
#[must_use]
pub fn dirty_corridor(n: usize) -> (VacuumWorld, RoomStateV1) {
    let rooms = room_names(n);
    let world = VacuumWorld::new(rooms.clone()).expect("corridor");
    let initial = world
        .initial_state(&rooms[n / 2], &rooms)
        .expect("initial state");
    (world, initial)
}

/// Every ordered `(start, world)` pair on the culinary map.
///
/// # Panics
///
/// Panics if the built-in map is inconsistent with its own node list.
#[must_use]
pub fn culinary_pairs() -> Vec<(Location, RouteWorld)> {
    let map = RouteMap::culinary();
    let mut pairs = Vec::new();
    for from in map.nodes() {
        for to in map.nodes() {
            let world = RouteWorld::new(map.clone(), to.name.as_str()).expect("known goal");
            pairs.push((from.name.clone(), world));
        }
    }
    pairs
}
