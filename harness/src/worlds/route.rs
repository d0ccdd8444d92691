//! `RouteWorld`: shortest road distance between named places on a map.
//!
//! Roads are undirected and weighted in whole metres. Neighbours are
//! visited in road declaration order. The heuristic is the straight-line
//! distance to the goal, `floor(euclidean × metres_per_unit)`, which is
//! admissible as long as no road is shorter than its scaled straight line.

use std::collections::BTreeMap;
use std::fmt;

use sweep_kernel::carrier::location::Location;
use sweep_search::contract::{SearchDomainV1, Successor};
use sweep_search::error::DomainError;

/// Scale shipped with the culinary map. Every road on that map is at
/// least this many metres per coordinate unit of straight-line distance.
pub const CULINARY_METRES_PER_UNIT: f64 = 500.0;

/// A named place with planar coordinates (arbitrary units).
#[derive(Debug, Clone, PartialEq)]
pub struct RouteNode {
    pub name: Location,
    pub x: f64,
    pub y: f64,
}

impl RouteNode {
    #[must_use]
    pub fn new(name: impl Into<Location>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }
}

/// An undirected road between two places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Road {
    pub a: Location,
    pub b: Location,
    pub metres: i64,
}

impl Road {
    #[must_use]
    pub fn new(a: impl Into<Location>, b: impl Into<Location>, metres: i64) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            metres,
        }
    }
}

/// Failure building a [`RouteMap`] or a [`RouteWorld`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteMapError {
    #[error("node {name} declared more than once")]
    DuplicateNode { name: Location },
    #[error("node {name} has a non-finite coordinate")]
    NonFiniteCoordinate { name: Location },
    #[error("road {a} - {b} references undeclared node {endpoint}")]
    UnknownEndpoint {
        a: Location,
        b: Location,
        endpoint: Location,
    },
    #[error("road {a} - {b} has negative length {metres}")]
    NegativeLength {
        a: Location,
        b: Location,
        metres: i64,
    },
    #[error("metres_per_unit must be finite and non-negative, got {value}")]
    InvalidScale { value: f64 },
    #[error("unknown location {location}")]
    UnknownLocation { location: Location },
}

/// A validated road map.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMap {
    nodes: Vec<RouteNode>,
    roads: Vec<Road>,
    /// Neighbours per node, in road declaration order.
    adjacency: BTreeMap<Location, Vec<(Location, i64)>>,
    metres_per_unit: f64,
}

impl RouteMap {
    /// Validate and index a map.
    ///
    /// # Errors
    ///
    /// Returns [`RouteMapError`] for duplicate node names, non-finite
    /// coordinates, roads with undeclared endpoints or negative length,
    /// and a non-finite or negative scale.
    pub fn new(
        nodes: Vec<RouteNode>,
        roads: Vec<Road>,
        metres_per_unit: f64,
    ) -> Result<Self, RouteMapError> {
        if !metres_per_unit.is_finite() || metres_per_unit < 0.0 {
            return Err(RouteMapError::InvalidScale {
                value: metres_per_unit,
            });
        }
        for (i, node) in nodes.iter().enumerate() {
            if nodes[..i].iter().any(|n| n.name == node.name) {
                return Err(RouteMapError::DuplicateNode {
                    name: node.name.clone(),
                });
            }
            if !node.x.is_finite() || !node.y.is_finite() {
                return Err(RouteMapError::NonFiniteCoordinate {
                    name: node.name.clone(),
                });
            }
        }
        for road in &roads {
            for endpoint in [&road.a, &road.b] {
                if !nodes.iter().any(|n| &n.name == endpoint) {
                    return Err(RouteMapError::UnknownEndpoint {
                        a: road.a.clone(),
                        b: road.b.clone(),
                        endpoint: endpoint.clone(),
                    });
                }
            }
            if road.metres < 0 {
                return Err(RouteMapError::NegativeLength {
                    a: road.a.clone(),
                    b: road.b.clone(),
                    metres: road.metres,
                });
            }
        }
        Ok(Self::assemble(nodes, roads, metres_per_unit))
    }

    /// The seven-place culinary map with nine roads.
    #[must_use]
    pub fn culinary() -> Self {
        let nodes = vec![
            RouteNode::new("Warung Sate A", 0.0, 3.0),
            RouteNode::new("Restoran Seafood B", 2.0, 4.0),
            RouteNode::new("Kedai Kopi C", 4.0, 2.0),
            RouteNode::new("Pecel Lele D", 2.0, 0.0),
            RouteNode::new("Taman Kuliner G", 4.0, 6.0),
            RouteNode::new("Mie Ayam E", 6.0, 4.0),
            RouteNode::new("Nasi Goreng F", 8.0, 2.0),
        ];
        let roads = vec![
            Road::new("Warung Sate A", "Restoran Seafood B", 3500),
            Road::new("Warung Sate A", "Pecel Lele D", 2000),
            Road::new("Restoran Seafood B", "Taman Kuliner G", 2500),
            Road::new("Restoran Seafood B", "Kedai Kopi C", 1800),
            Road::new("Pecel Lele D", "Kedai Kopi C", 2200),
            Road::new("Kedai Kopi C", "Mie Ayam E", 3000),
            Road::new("Pecel Lele D", "Nasi Goreng F", 5000),
            Road::new("Taman Kuliner G", "Mie Ayam E", 4000),
            Road::new("Mie Ayam E", "Nasi Goreng F", 1500),
        ];
        Self::assemble(nodes, roads, CULINARY_METRES_PER_UNIT)
    }

    fn assemble(nodes: Vec<RouteNode>, roads: Vec<Road>, metres_per_unit: f64) -> Self {
        let mut adjacency: BTreeMap<Location, Vec<(Location, i64)>> = nodes
            .iter()
            .map(|n| (n.name.clone(), Vec::new()))
            .collect();
        for road in &roads {
            if let Some(list) = adjacency.get_mut(&road.a) {
                list.push((road.b.clone(), road.metres));
            }
            if road.a != road.b {
                if let Some(list) = adjacency.get_mut(&road.b) {
                    list.push((road.a.clone(), road.metres));
                }
            }
        }
        Self {
            nodes,
            roads,
            adjacency,
            metres_per_unit,
        }
    }

    /// Places in declaration order.
    #[must_use]
    pub fn nodes(&self) -> &[RouteNode] {
        &self.nodes
    }

    #[must_use]
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    #[must_use]
    pub fn metres_per_unit(&self) -> f64 {
        self.metres_per_unit
    }

    #[must_use]
    pub fn contains(&self, location: &Location) -> bool {
        self.adjacency.contains_key(location)
    }

    /// Neighbours of `location` with road lengths, in declaration order.
    #[must_use]
    pub fn neighbours(&self, location: &Location) -> Option<&[(Location, i64)]> {
        self.adjacency.get(location).map(Vec::as_slice)
    }

    /// Resolve a place name, failing for names not on the map.
    ///
    /// # Errors
    ///
    /// Returns [`RouteMapError::UnknownLocation`] for an undeclared name.
    pub fn resolve(&self, name: &str) -> Result<Location, RouteMapError> {
        let location = Location::from(name);
        if self.contains(&location) {
            Ok(location)
        } else {
            Err(RouteMapError::UnknownLocation { location })
        }
    }

    /// `floor(euclidean(a, b) × metres_per_unit)`, or `None` if either
    /// place is unknown.
    #[must_use]
    pub fn straight_line_metres(&self, a: &Location, b: &Location) -> Option<i64> {
        let pa = self.nodes.iter().find(|n| &n.name == a)?;
        let pb = self.nodes.iter().find(|n| &n.name == b)?;
        let metres = (pa.x - pb.x).hypot(pa.y - pb.y) * self.metres_per_unit;
        #[allow(clippy::cast_possible_truncation)]
        let whole = metres.floor() as i64;
        Some(whole)
    }
}

/// Travel along one road to `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteAction {
    pub to: Location,
}

impl fmt::Display for RouteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "to {}", self.to)
    }
}

/// A route-finding problem: a map plus a fixed destination.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteWorld {
    map: RouteMap,
    goal: Location,
}

impl RouteWorld {
    /// # Errors
    ///
    /// Returns [`RouteMapError::UnknownLocation`] if `goal` is not on the map.
    pub fn new(map: RouteMap, goal: &str) -> Result<Self, RouteMapError> {
        let goal = map.resolve(goal)?;
        Ok(Self { map, goal })
    }

    #[must_use]
    pub fn map(&self) -> &RouteMap {
        &self.map
    }

    #[must_use]
    pub fn goal(&self) -> &Location {
        &self.goal
    }
}

impl SearchDomainV1 for RouteWorld {
    type State = Location;
    type Action = RouteAction;

    #[allow(clippy::unnecessary_literal_bound)]
    fn domain_id(&self) -> &str {
        "route"
    }

    fn successors(
        &self,
        state: &Location,
    ) -> Result<Vec<Successor<Location, RouteAction>>, DomainError> {
        let neighbours =
            self.map
                .neighbours(state)
                .ok_or_else(|| DomainError::UnknownLocation {
                    location: state.clone(),
                })?;
        Ok(neighbours
            .iter()
            .map(|(to, metres)| Successor::new(to.clone(), RouteAction { to: to.clone() }, *metres))
            .collect())
    }

    fn validate_state(&self, state: &Location) -> Result<(), DomainError> {
        if self.map.contains(state) {
            Ok(())
        } else {
            Err(DomainError::UnknownLocation {
                location: state.clone(),
            })
        }
    }

    fn is_goal(&self, state: &Location) -> bool {
        *state == self.goal
    }

    fn heuristic(&self, state: &Location) -> i64 {
        self.map.straight_line_metres(state, &self.goal).unwrap_or(0)
    }
}
