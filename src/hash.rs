//! Content identifiers for serializable values.
//!
//! Identifiers are the lowercase hex SHA-256 digest of the value's JSON
//! serialization, so equal values produce equal identifiers as long as their
//! maps iterate in the same order.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::Error;

/// Creates an identifier for the given value.
///
/// Fails only if the value cannot be serialized (e.g. a map with non-string keys).
pub fn object_hash<T: Serialize + ?Sized>(object: &T) -> Result<String, Error> {
    let bytes = serde_json::to_vec(object)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

/// Creates an identifier for the given slice.
pub fn array_hash<T: Serialize>(array: &[T]) -> Result<String, Error> {
    object_hash(array)
}
