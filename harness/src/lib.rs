//! Sweep Harness: worlds, problem files, and presentation for the A* engine.
//!
//! The harness does NOT implement search logic; it delegates to
//! `sweep_search`. Worlds provide domain data only; the harness owns
//! loading, rendering, and reporting.
//!
//! # Modules
//!
//! - [`worlds`]: `VacuumWorld` and `RouteWorld`, both implementing
//!   `SearchDomainV1`
//! - [`config`]: TOML problem files
//! - [`runner`]: problem in, [`runner::RunReport`] out
//! - [`render`]: boxes-and-arrows text for a solution path
//! - [`report`]: canonical JSON report with a content digest

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod render;
pub mod report;
pub mod runner;
pub mod worlds;
