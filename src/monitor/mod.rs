//! Monitor Module
//!
//! Process-wide request performance counters and point-in-time metrics
//! snapshots.

mod recorder;
mod snapshot;

// Re-export public types
pub use recorder::PerformanceMonitor;
pub use snapshot::MetricsSnapshot;
