//! Metrics Snapshot Module
//!
//! Immutable point-in-time copy of the monitor's aggregate state, safe to
//! read and serialize without further synchronization.

use serde::Serialize;

// == Metrics Snapshot ==
/// A consistent copy of all monitor counters plus derived rates.
///
/// Derived fields are computed at capture time with zero-denominator
/// guards, so `average_latency_ms` and `cache_hit_rate` are always finite.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MetricsSnapshot {
    /// Total requests recorded since construction or last reset
    pub request_count: u64,
    /// Running sum of recorded latencies in milliseconds
    pub total_latency_ms: u64,
    /// Average latency in milliseconds (0 when no requests recorded)
    pub average_latency_ms: f64,
    /// Requests served from the cache
    pub cache_hits: u64,
    /// Requests that missed the cache
    pub cache_misses: u64,
    /// hits / (hits + misses), 0 when no lookups recorded
    pub cache_hit_rate: f64,
    /// Errors recorded independently of latency
    pub error_count: u64,
}
