//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL expiry.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// A single cached response payload with expiry metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached response body
    pub value: Value,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_ms` milliseconds from now.
    ///
    /// Callers validate that `ttl_ms` is positive before constructing.
    /// The expiry saturates, so an absurdly large TTL means "never
    /// expires within the process lifetime" instead of wrapping into the
    /// past.
    pub fn new(value: Value, ttl_ms: u64) -> Self {
        let now = current_timestamp_ms();
        Self {
            value,
            created_at: now,
            expires_at: now.saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to `expires_at`, so a hit is only possible
    /// strictly before the TTL elapses.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, saturating at 0 once expired.
    #[allow(dead_code)]
    pub fn ttl_remaining_ms(&self) -> u64 {
        self.expires_at.saturating_sub(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
