//! Performance Monitor Module
//!
//! Aggregates request latencies, cache hit/miss counts, and error counts
//! for the observability endpoint.

use crate::monitor::MetricsSnapshot;

// == Performance Monitor ==
/// Process-wide request performance counters.
///
/// One instance is shared per process behind the application state's lock;
/// every mutator takes `&mut self`, so the lock is the whole concurrency
/// discipline and `reset` is atomic relative to any reader. Recording
/// operations are pure bookkeeping and never fail.
#[derive(Debug, Default)]
pub struct PerformanceMonitor {
    /// Total requests recorded since construction or last reset
    request_count: u64,
    /// Running sum of recorded latencies in milliseconds
    total_latency_ms: u64,
    /// Requests served from the cache
    cache_hits: u64,
    /// Requests that missed the cache
    cache_misses: u64,
    /// Errors recorded independently of latency
    error_count: u64,
}

impl PerformanceMonitor {
    // == Constructor ==
    /// Creates a new monitor with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Request ==
    /// Records one completed request.
    ///
    /// Increments the request count, adds the latency to the running sum,
    /// and bumps the hit or miss counter.
    pub fn record_request(&mut self, latency_ms: u64, was_cache_hit: bool) {
        self.request_count += 1;
        self.total_latency_ms += latency_ms;
        if was_cache_hit {
            self.cache_hits += 1;
        } else {
            self.cache_misses += 1;
        }
    }

    // == Record Error ==
    /// Records one error. Independent of latency recording: a request may
    /// record both, or an error alone.
    pub fn record_error(&mut self) {
        self.error_count += 1;
    }

    // == Snapshot ==
    /// Returns a consistent point-in-time copy of all counters with
    /// derived rates.
    ///
    /// Average latency and hit rate are 0 (not NaN) when their
    /// denominators are zero.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let average_latency_ms = if self.request_count == 0 {
            0.0
        } else {
            self.total_latency_ms as f64 / self.request_count as f64
        };

        let lookups = self.cache_hits + self.cache_misses;
        let cache_hit_rate = if lookups == 0 {
            0.0
        } else {
            self.cache_hits as f64 / lookups as f64
        };

        MetricsSnapshot {
            request_count: self.request_count,
            total_latency_ms: self.total_latency_ms,
            average_latency_ms,
            cache_hits: self.cache_hits,
            cache_misses: self.cache_misses,
            cache_hit_rate,
            error_count: self.error_count,
        }
    }

    // == Reset ==
    /// Zeroes all counters. Callers hold the state lock, so no reader can
    /// observe a partially-reset monitor.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}


// == Property Tests ==
#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        // Accumulation law: after any sequence of recordings, the counts
        // and the derived average match the sequence exactly.
        #[test]
        fn prop_metrics_accumulation(
            requests in prop::collection::vec((0u64..10_000, any::<bool>()), 1..100)
        ) {
            let mut monitor = PerformanceMonitor::new();

            let mut expected_total: u64 = 0;
            let mut expected_hits: u64 = 0;
            for (latency_ms, was_hit) in &requests {
                monitor.record_request(*latency_ms, *was_hit);
                expected_total += latency_ms;
                if *was_hit {
                    expected_hits += 1;
                }
            }

            let n = requests.len() as u64;
            let snapshot = monitor.snapshot();
            prop_assert_eq!(snapshot.request_count, n);
            prop_assert_eq!(snapshot.total_latency_ms, expected_total);
            prop_assert_eq!(snapshot.cache_hits, expected_hits);
            prop_assert_eq!(snapshot.cache_misses, n - expected_hits);

            let expected_average = expected_total as f64 / n as f64;
            prop_assert!(
                (snapshot.average_latency_ms - expected_average).abs() < 1e-9,
                "average {} != expected {}",
                snapshot.average_latency_ms,
                expected_average
            );

            let expected_rate = expected_hits as f64 / n as f64;
            prop_assert!((snapshot.cache_hit_rate - expected_rate).abs() < 1e-9);
        }

        // Reset always restores the freshly-constructed state, whatever
        // was recorded before.
        #[test]
        fn prop_reset_restores_initial_state(
            requests in prop::collection::vec((0u64..10_000, any::<bool>()), 0..50),
            errors in 0usize..10
        ) {
            let mut monitor = PerformanceMonitor::new();

            for (latency_ms, was_hit) in requests {
                monitor.record_request(latency_ms, was_hit);
            }
            for _ in 0..errors {
                monitor.record_error();
            }

            monitor.reset();

            let snapshot = monitor.snapshot();
            prop_assert_eq!(snapshot.request_count, 0);
            prop_assert_eq!(snapshot.total_latency_ms, 0);
            prop_assert_eq!(snapshot.average_latency_ms, 0.0);
            prop_assert_eq!(snapshot.cache_hits, 0);
            prop_assert_eq!(snapshot.cache_misses, 0);
            prop_assert_eq!(snapshot.cache_hit_rate, 0.0);
            prop_assert_eq!(snapshot.error_count, 0);
        }
    }
}
