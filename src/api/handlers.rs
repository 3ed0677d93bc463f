//! API Handlers
//!
//! HTTP request handlers wiring the response cache and performance
//! monitor together, in the role the application's route layer plays:
//! lookups report hit/miss and latency to the monitor, stores report the
//! write-back timing, and invalid input bumps the error counter.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    ClearResponse, HealthResponse, LookupResponse, MetricsResponse, ResetResponse, StoreRequest,
    StoreResponse,
};
use crate::monitor::PerformanceMonitor;

/// Application state shared across all handlers.
///
/// Cache and monitor each sit behind their own lock; neither component
/// calls into the other, so the handlers are the only place the two are
/// combined.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe response cache
    pub cache: Arc<RwLock<ResponseCache>>,
    /// Thread-safe performance monitor
    pub monitor: Arc<RwLock<PerformanceMonitor>>,
}

impl AppState {
    /// Creates a new AppState from already-constructed components.
    pub fn new(cache: ResponseCache, monitor: PerformanceMonitor) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            monitor: Arc::new(RwLock::new(monitor)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// # Errors
    /// Fails when the configured capacity or default TTL violates the
    /// cache preconditions.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = ResponseCache::new(config.max_entries, config.default_ttl_ms)?;
        Ok(Self::new(cache, PerformanceMonitor::new()))
    }
}

/// Handler for PUT /cache
///
/// Stores a response payload under a fingerprint. This is the write-back
/// half of the miss path, so the recorded timing counts as a miss.
pub async fn store_handler(
    State(state): State<AppState>,
    Json(req): Json<StoreRequest>,
) -> Result<Json<StoreResponse>> {
    let started = Instant::now();

    if let Some(violation) = req.validate() {
        state.monitor.write().await.record_error();
        return Err(violation);
    }

    let result = {
        let mut cache = state.cache.write().await;
        cache.set(req.key.clone(), req.value, req.ttl_ms)
    };

    let latency_ms = started.elapsed().as_millis() as u64;
    let mut monitor = state.monitor.write().await;
    match result {
        Ok(()) => {
            monitor.record_request(latency_ms, false);
            Ok(Json(StoreResponse::new(req.key)))
        }
        Err(err) => {
            monitor.record_error();
            Err(err)
        }
    }
}

/// Handler for GET /cache/:key
///
/// Looks up a fingerprint. A miss is a 200 with `hit: false`; only
/// precondition violations are errors. Hit/miss and latency are reported
/// to the monitor.
pub async fn lookup_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<LookupResponse>> {
    let started = Instant::now();

    let result = {
        // Write lock: lazy expiry may remove the entry
        let mut cache = state.cache.write().await;
        cache.get(&key)
    };

    let latency_ms = started.elapsed().as_millis() as u64;
    let mut monitor = state.monitor.write().await;
    match result {
        Ok(value) => {
            monitor.record_request(latency_ms, value.is_some());
            Ok(Json(LookupResponse::new(key, value)))
        }
        Err(err) => {
            monitor.record_error();
            Err(err)
        }
    }
}

/// Handler for DELETE /cache
///
/// Empties the cache. Maintenance only.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut cache = state.cache.write().await;
    let cleared = cache.len();
    cache.clear();

    Json(ClearResponse::new(cleared))
}

/// Handler for GET /metrics
///
/// Returns a point-in-time metrics snapshot plus the current cache entry
/// gauge.
pub async fn metrics_handler(State(state): State<AppState>) -> Json<MetricsResponse> {
    let cache_entries = state.cache.read().await.len();
    let snapshot = state.monitor.read().await.snapshot();

    Json(MetricsResponse::new(snapshot, cache_entries))
}

/// Handler for POST /metrics/reset
///
/// Zeroes all monitor counters. Operator maintenance only.
pub async fn reset_metrics_handler(State(state): State<AppState>) -> Json<ResetResponse> {
    state.monitor.write().await.reset();

    Json(ResetResponse::new())
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
