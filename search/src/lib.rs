//! Sweep Search: deterministic A* over caller-supplied discrete domains.
//!
//! This crate depends only on `sweep_kernel` for state identity and
//! hashing. It knows nothing about vacuum rooms or road maps; worlds plug
//! in through [`contract::SearchDomainV1`].
//!
//! # Crate dependency graph
//!
//! ```text
//! sweep_kernel  ←  sweep_search  ←  sweep_harness
//! (state values)   (A* engine)      (worlds, config, CLI)
//! ```
//!
//! # Key types
//!
//! - [`SearchNodeV1`] -- immutable node: state, g, h, f, parent index
//! - [`BestFirstFrontier`] -- min-heap ordered by `(f, insertion sequence)`
//! - [`ExploredSet`] -- fingerprint → best known g, with closed marks
//! - [`search::search`] -- the A* driver
//! - [`SearchOutcomeV1`] -- `Solved`, `NoSolution`, or `Aborted`

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod error;
pub mod explored;
pub mod frontier;
pub mod node;
pub mod path;
pub mod policy;
pub mod search;
pub mod stats;

pub use contract::{FnDomain, SearchDomainV1, Successor};
pub use error::{DomainError, SearchError};
pub use explored::ExploredSet;
pub use frontier::BestFirstFrontier;
pub use node::{FrontierKey, NodeId, SearchNodeV1};
pub use path::{PathStep, SolutionPath};
pub use policy::SearchPolicyV1;
pub use search::{search, search_fn, SearchOutcomeV1, SearchResult};
pub use stats::SearchStatsV1;
