//! Canonical hashing and serialization.

pub mod canon;
pub mod hash;
pub mod hash_domain;
