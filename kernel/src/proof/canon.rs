//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are emitted in lexicographic byte order at every depth.
//! 2. Compact form, no whitespace.
//! 3. Numbers must be integers. Floats are rejected so digests never depend
//!    on float formatting.

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    /// A JSON number was not an integer.
    #[error("non-integer number in canonical JSON at {path}: {raw}")]
    NonIntegerNumber { path: String, raw: String },
    /// `serde_json` refused to write the normalized value.
    #[error("canonical JSON encoding failed: {detail}")]
    Encode { detail: String },
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an `i64`
/// or `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let normalized = normalize(value, "$")?;
    serde_json::to_vec(&normalized).map_err(|e| CanonError::Encode {
        detail: e.to_string(),
    })
}

// Rebuilds objects with keys inserted in sorted order, so the output is
// sorted whether or not `serde_json` preserves insertion order.
fn normalize(value: &serde_json::Value, path: &str) -> Result<serde_json::Value, CanonError> {
    match value {
        serde_json::Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                Ok(value.clone())
            } else {
                Err(CanonError::NonIntegerNumber {
                    path: path.to_string(),
                    raw: n.to_string(),
                })
            }
        }
        serde_json::Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| normalize(item, &format!("{path}[{i}]")))
            .collect::<Result<Vec<_>, _>>()
            .map(serde_json::Value::Array),
        serde_json::Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut out = serde_json::Map::new();
            for key in keys {
                out.insert(key.clone(), normalize(&map[key], &format!("{path}.{key}"))?);
            }
            Ok(serde_json::Value::Object(out))
        }
        serde_json::Value::Null | serde_json::Value::Bool(_) | serde_json::Value::String(_) => {
            Ok(value.clone())
        }
    }
}
