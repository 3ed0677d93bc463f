//! API Module
//!
//! HTTP handlers and routing for the cache/monitor maintenance surface.
//!
//! # Endpoints
//! - `PUT /cache` - Store a response payload
//! - `GET /cache/:key` - Look up a fingerprint
//! - `DELETE /cache` - Clear the cache
//! - `GET /metrics` - Performance metrics snapshot
//! - `POST /metrics/reset` - Zero all metrics counters
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
