//! Canonical state identity.

use crate::proof::hash::{canonical_hash, ContentHash};
use crate::proof::hash_domain::HashDomain;

/// A value with a canonical byte encoding of its identity.
///
/// # Contract
///
/// `a == b` must imply `a.identity_bytes() == b.identity_bytes()`, and the
/// converse must hold for any two values the search can meet. Encodings of
/// unordered collections must be normalized (sorted) before they are
/// written, so insertion order never leaks into the bytes.
pub trait StateIdentity {
    /// Canonical identity bytes.
    fn identity_bytes(&self) -> Vec<u8>;

    /// Content fingerprint of [`StateIdentity::identity_bytes`] under
    /// [`HashDomain::SearchState`]. Used as the explored-set key.
    #[must_use]
    fn fingerprint(&self) -> ContentHash {
        canonical_hash(HashDomain::SearchState, &self.identity_bytes())
    }
}

/// Append a length-prefixed UTF-8 string (u32 little-endian length).
///
/// Length prefixes keep concatenated fields unambiguous: `("ab", "c")`
/// and `("a", "bc")` encode differently.
pub fn write_str(buf: &mut Vec<u8>, s: &str) {
    let len = u32::try_from(s.len()).unwrap_or(u32::MAX);
    buf.extend_from_slice(&len.to_le_bytes());
    buf.extend_from_slice(s.as_bytes());
}
