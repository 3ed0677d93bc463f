//! Request DTOs for the maintenance API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::cache::MAX_KEY_LENGTH;
use crate::error::CacheError;

/// Request body for the store operation (PUT /cache)
///
/// # Fields
/// - `key`: request fingerprint to store the payload under
/// - `value`: the response payload to cache (arbitrary JSON)
/// - `ttl_ms`: optional TTL in milliseconds (configured default if absent)
#[derive(Debug, Clone, Deserialize)]
pub struct StoreRequest {
    /// The request fingerprint
    pub key: String,
    /// The payload to cache
    pub value: Value,
    /// Optional TTL in milliseconds
    #[serde(default)]
    pub ttl_ms: Option<u64>,
}

impl StoreRequest {
    /// Validates the request data.
    ///
    /// Returns the precondition violation if validation fails, None if
    /// valid. The same checks run again inside the cache; rejecting here
    /// keeps bad requests out of the write lock.
    pub fn validate(&self) -> Option<CacheError> {
        if self.key.is_empty() {
            return Some(CacheError::EmptyKey);
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(CacheError::KeyTooLong(self.key.len()));
        }
        if self.ttl_ms == Some(0) {
            return Some(CacheError::InvalidTtl(0));
        }
        None
    }
}
