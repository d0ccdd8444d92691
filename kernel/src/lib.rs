//! Sweep Kernel: immutable world-state values and canonical hashing.
//!
//! # API Surface
//!
//! - [`carrier::room_state::RoomStateV1`] -- vacuum-world state (agent + room statuses)
//! - [`carrier::location::Location`] -- named location identifier
//! - [`carrier::identity::StateIdentity`] -- canonical identity bytes and fingerprints
//! - [`proof::hash::canonical_hash`] -- SHA-256 content hashing with typed domains
//! - [`proof::canon::canonical_json_bytes`] -- the single canonical JSON encoder
//!
//! # Module Dependency Direction
//!
//! `proof` ← `carrier`
//!
//! One-way only. `carrier` hashes through `proof`; `proof` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod proof;
