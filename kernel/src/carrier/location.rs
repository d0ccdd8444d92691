//! Named location identifiers.

use super::identity::{write_str, StateIdentity};

/// A location in a world: a vacuum-world room or a route-map node.
///
/// Ordered by name; the order is what canonical encodings sort by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location(String);

impl Location {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A bare location is a complete state in route-finding worlds.
impl StateIdentity for Location {
    fn identity_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(4 + self.0.len());
        write_str(&mut buf, &self.0);
        buf
    }
}
