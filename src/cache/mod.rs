//! Cache Module
//!
//! Bounded in-memory response cache with per-entry TTL expiry and FIFO
//! eviction under capacity pressure.

mod entry;
mod fifo;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use fifo::InsertionOrder;
pub use store::ResponseCache;

// == Public Constants ==
/// Maximum allowed fingerprint length in bytes
pub const MAX_KEY_LENGTH: usize = 512;
