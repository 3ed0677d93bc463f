//! Obelisk Cache - bounded TTL response cache and request performance
//! monitor.
//!
//! The two core components are [`cache::ResponseCache`] and
//! [`monitor::PerformanceMonitor`]; the `api` module wires them together
//! behind a thin HTTP maintenance surface.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod monitor;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
