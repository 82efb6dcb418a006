//! Opaque byte codec applied before every store write.
//!
//! The encoding exists so the store can hold structured values as byte
//! strings. It is shared by this pipeline and the serving layer that reads
//! the values back; it is not a public wire format and carries no
//! cross-version compatibility guarantee.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::catalog::errors::{Error, Result};

/// Encode a value into its store byte representation.
pub fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    bincode::serde::encode_to_vec(value, bincode::config::standard())
        .map_err(|e| Error::SerializationError(e.to_string()))
}

/// Decode a value from its store byte representation.
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let (value, _) = bincode::serde::decode_from_slice(bytes, bincode::config::standard())
        .map_err(|e| Error::SerializationError(e.to_string()))?;
    Ok(value)
}
