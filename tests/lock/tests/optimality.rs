//! Optimality against exhaustive enumeration.
//!
//! For every small instance, the cost of the path A* returns must equal
//! the minimum goal cost found by enumerating the whole reachable state
//! graph (`lock_tests::oracle`).

use lock_tests::oracle::cheapest_goal_cost;
use sweep_harness::worlds::route::{RouteMap, RouteWorld};
use sweep_harness::worlds::vacuum::VacuumWorld;
use sweep_kernel::carrier::location::Location;
use sweep_search::policy::SearchPolicyV1;
use sweep_search::search::{search, SearchOutcomeV1};

const ROOMS: [&str; 4] = ["A", "B", "C", "D"];

#[test]
fn vacuum_corridors_up_to_four_rooms() {
    let mut checked = 0;
    for n in 1..=ROOMS.len() {
        let corridor: Vec<Location> = ROOMS[..n].iter().map(|r| Location::from(*r)).collect();
        let world = VacuumWorld::new(corridor.clone()).unwrap();
        for agent in &corridor {
            for mask in 0..(1u32 << n) {
                let dirty: Vec<Location> = corridor
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, room)| room.clone())
                    .collect();
                let initial = world.initial_state(agent, &dirty).unwrap();
                let expected = cheapest_goal_cost(&world, initial.clone())
                    .expect("every vacuum instance is solvable");
                let result = search(initial, &world, &SearchPolicyV1::default()).unwrap();
                let SearchOutcomeV1::Solved(path) = &result.outcome else {
                    panic!("n={n} agent={agent} dirty={dirty:?}: not solved");
                };
                assert_eq!(
                    path.total_cost(),
                    expected,
                    "n={n} agent={agent} dirty={dirty:?}: A* cost differs from exhaustive minimum"
                );
                checked += 1;
            }
        }
    }
    // 1*2 + 2*4 + 3*8 + 4*16
    assert_eq!(checked, 98);
}

#[test]
fn culinary_map_all_pairs() {
    let map = RouteMap::culinary();
    let names: Vec<String> = map.nodes().iter().map(|n| n.name.to_string()).collect();
    for from in &names {
        for to in &names {
            let world = RouteWorld::new(map.clone(), to).unwrap();
            let start = Location::from(from.as_str());
            let expected = cheapest_goal_cost(&world, start.clone())
                .expect("culinary map is connected");
            let result = search(start, &world, &SearchPolicyV1::default()).unwrap();
            let path = result
                .path()
                .unwrap_or_else(|| panic!("{from} -> {to}: not solved"));
            assert_eq!(
                path.total_cost(),
                expected,
                "{from} -> {to}: A* cost differs from exhaustive minimum"
            );
            assert_eq!(path.final_state().as_str(), to.as_str());
        }
    }
}

#[test]
fn culinary_headline_route() {
    let world = RouteWorld::new(RouteMap::culinary(), "Nasi Goreng F").unwrap();
    let result = search(
        Location::from("Warung Sate A"),
        &world,
        &SearchPolicyV1::default(),
    )
    .unwrap();
    let path = result.path().unwrap();
    let stops: Vec<&str> = path.steps().iter().map(|s| s.state.as_str()).collect();
    assert_eq!(stops, ["Warung Sate A", "Pecel Lele D", "Nasi Goreng F"]);
    assert_eq!(path.total_cost(), 7000);
}
