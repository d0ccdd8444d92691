//! Problem files: TOML descriptions of a world, a start, and a budget.
//!
//! ```toml
//! [search]
//! max_expansions = 10000
//!
//! [problem]
//! world = "vacuum"
//! locations = ["A", "B"]
//! agent = "A"
//! dirty = ["A", "B"]
//! ```
//!
//! A `world = "route"` problem names `from` and `to`, and may carry its own
//! `[[problem.nodes]]` and `[[problem.roads]]` together with
//! `metres_per_unit`; without them the built-in culinary map is used.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use sweep_kernel::carrier::location::Location;
use sweep_kernel::carrier::room_state::{RoomStateV1, StateError};
use sweep_search::policy::SearchPolicyV1;

use crate::worlds::route::{RouteMap, RouteMapError, RouteNode, RouteWorld, Road};
use crate::worlds::vacuum::VacuumWorld;

/// Failure loading or building a problem.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid problem file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid vacuum problem: {0}")]
    State(#[from] StateError),
    #[error("invalid route problem: {0}")]
    Route(#[from] RouteMapError),
    #[error("route map needs both nodes and roads, or neither")]
    PartialRouteMap,
    #[error("a custom route map must set metres_per_unit")]
    MissingScale,
}

/// A parsed problem file.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProblemFile {
    #[serde(default)]
    pub search: SearchSection,
    pub problem: ProblemSpec,
}

/// `[search]`: budget settings.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SearchSection {
    /// Expansion cap; absent means unlimited.
    #[serde(default)]
    pub max_expansions: Option<u64>,
}

/// `[problem]`, tagged by `world`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "world", rename_all = "snake_case")]
pub enum ProblemSpec {
    Vacuum(VacuumProblem),
    Route(RouteProblem),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct VacuumProblem {
    /// Rooms, left to right (default: `A`, `B`)
    #[serde(default = "default_locations")]
    pub locations: Vec<String>,
    pub agent: String,
    /// Rooms that start dirty; the rest start clean
    #[serde(default)]
    pub dirty: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RouteProblem {
    pub from: String,
    pub to: String,
    /// Heuristic scale. Optional for the culinary map, required with `nodes`.
    #[serde(default)]
    pub metres_per_unit: Option<f64>,
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub roads: Vec<RoadSpec>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NodeSpec {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RoadSpec {
    pub a: String,
    pub b: String,
    pub metres: i64,
}

fn default_locations() -> Vec<String> {
    vec!["A".into(), "B".into()]
}

/// A problem ready to search.
#[derive(Debug, Clone)]
pub enum Problem {
    Vacuum {
        world: VacuumWorld,
        initial: RoomStateV1,
    },
    Route {
        world: RouteWorld,
        start: Location,
    },
}

impl ProblemFile {
    /// Parse a problem from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, unknown fields,
    /// or an unknown `world`.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a problem file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`ProblemFile::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    #[must_use]
    pub fn policy(&self) -> SearchPolicyV1 {
        SearchPolicyV1 {
            max_expansions: self.search.max_expansions,
        }
    }
}

impl ProblemSpec {
    /// Short world tag: `vacuum` or `route`.
    #[must_use]
    pub fn world(&self) -> &'static str {
        match self {
            Self::Vacuum(_) => "vacuum",
            Self::Route(_) => "route",
        }
    }

    /// Build the world and the initial state.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::State`] for an empty or duplicated corridor, or an
    ///   agent or dirty room outside it.
    /// - [`ConfigError::Route`] for an invalid map or an unknown `from`/`to`.
    /// - [`ConfigError::PartialRouteMap`] if only one of nodes and roads is
    ///   given.
    /// - [`ConfigError::MissingScale`] for a custom map without
    ///   `metres_per_unit`.
    pub fn build(&self) -> Result<Problem, ConfigError> {
        match self {
            Self::Vacuum(p) => {
                let world = VacuumWorld::new(p.locations.iter().map(|l| Location::from(l.as_str())))?;
                let dirty: Vec<Location> = p.dirty.iter().map(|d| Location::from(d.as_str())).collect();
                let initial = world.initial_state(&Location::from(p.agent.as_str()), &dirty)?;
                Ok(Problem::Vacuum { world, initial })
            }
            Self::Route(p) => {
                let map = p.route_map()?;
                let start = map.resolve(&p.from)?;
                let world = RouteWorld::new(map, &p.to)?;
                Ok(Problem::Route { world, start })
            }
        }
    }

    /// Integer-only JSON description used in reports.
    ///
    /// A custom route map is described in full: nodes sorted by name, roads
    /// in declaration order (which decides tie-breaks). Floats are written
    /// as strings.
    #[must_use]
    pub fn describe(&self) -> serde_json::Value {
        match self {
            Self::Vacuum(p) => serde_json::json!({
                "world": "vacuum",
                "locations": p.locations,
                "agent": p.agent,
                "dirty": p.dirty,
            }),
            Self::Route(p) => serde_json::json!({
                "world": "route",
                "from": p.from,
                "to": p.to,
                "map": p.describe_map(),
                "metres_per_unit": p.metres_per_unit.map(|m| m.to_string()),
            }),
        }
    }
}

impl RouteProblem {
    fn describe_map(&self) -> serde_json::Value {
        if self.nodes.is_empty() && self.roads.is_empty() {
            return "culinary".into();
        }
        let mut nodes: Vec<&NodeSpec> = self.nodes.iter().collect();
        nodes.sort_by(|a, b| a.name.cmp(&b.name));
        let nodes: Vec<serde_json::Value> = nodes
            .into_iter()
            .map(|n| {
                serde_json::json!({
                    "name": n.name,
                    "x": n.x.to_string(),
                    "y": n.y.to_string(),
                })
            })
            .collect();
        let roads: Vec<serde_json::Value> = self
            .roads
            .iter()
            .map(|r| serde_json::json!({ "a": r.a, "b": r.b, "metres": r.metres }))
            .collect();
        serde_json::json!({ "nodes": nodes, "roads": roads })
    }

    fn route_map(&self) -> Result<RouteMap, ConfigError> {
        match (self.nodes.is_empty(), self.roads.is_empty()) {
            (true, true) => match self.metres_per_unit {
                None => Ok(RouteMap::culinary()),
                Some(scale) => {
                    let builtin = RouteMap::culinary();
                    Ok(RouteMap::new(
                        builtin.nodes().to_vec(),
                        builtin.roads().to_vec(),
                        scale,
                    )?)
                }
            },
            (false, false) => {
                let nodes = self
                    .nodes
                    .iter()
                    .map(|n| RouteNode::new(n.name.as_str(), n.x, n.y))
                    .collect();
                let roads = self
                    .roads
                    .iter()
                    .map(|r| Road::new(r.a.as_str(), r.b.as_str(), r.metres))
                    .collect();
                let scale = self.metres_per_unit.ok_or(ConfigError::MissingScale)?;
                Ok(RouteMap::new(nodes, roads, scale)?)
            }
            _ => Err(ConfigError::PartialRouteMap),
        }
    }
}
