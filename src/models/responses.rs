//! Response DTOs for the maintenance API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::monitor::MetricsSnapshot;

/// Response body for a cache lookup (GET /cache/:key)
///
/// Absence is a normal outcome: a miss is a 200 with `hit: false` and a
/// null value.
#[derive(Debug, Clone, Serialize)]
pub struct LookupResponse {
    /// The requested fingerprint
    pub key: String,
    /// The cached payload, or null on a miss
    pub value: Option<Value>,
    /// Whether the lookup was a cache hit
    pub hit: bool,
}

impl LookupResponse {
    /// Creates a new LookupResponse.
    pub fn new(key: impl Into<String>, value: Option<Value>) -> Self {
        let hit = value.is_some();
        Self {
            key: key.into(),
            value,
            hit,
        }
    }
}

/// Response body for the store operation (PUT /cache)
#[derive(Debug, Clone, Serialize)]
pub struct StoreResponse {
    /// Success message
    pub message: String,
    /// The fingerprint that was stored
    pub key: String,
}

impl StoreResponse {
    /// Creates a new StoreResponse.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' cached successfully", key),
            key,
        }
    }
}

/// Response body for the clear operation (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// Number of entries dropped
    pub cleared: usize,
}

impl ClearResponse {
    /// Creates a new ClearResponse.
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cache cleared, {} entries dropped", cleared),
            cleared,
        }
    }
}

/// Response body for the metrics endpoint (GET /metrics)
#[derive(Debug, Clone, Serialize)]
pub struct MetricsResponse {
    /// Aggregate request counters and derived rates
    #[serde(flatten)]
    pub snapshot: MetricsSnapshot,
    /// Current cache entry count (gauge, captured alongside the snapshot)
    pub cache_entries: usize,
}

impl MetricsResponse {
    /// Creates a new MetricsResponse.
    pub fn new(snapshot: MetricsSnapshot, cache_entries: usize) -> Self {
        Self {
            snapshot,
            cache_entries,
        }
    }
}

/// Response body for the metrics reset endpoint (POST /metrics/reset)
#[derive(Debug, Clone, Serialize)]
pub struct ResetResponse {
    /// Success message
    pub message: String,
}

impl ResetResponse {
    /// Creates a new ResetResponse.
    pub fn new() -> Self {
        Self {
            message: "Metrics reset".to_string(),
        }
    }
}

impl Default for ResetResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
