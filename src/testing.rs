//! Testing utilities for retrying code.
//!
//! - [`AttemptCounter`]: a cloneable, thread-safe record of the statuses an
//!   action was invoked with.
//! - [`strategies`]: `proptest` strategies for statuses and policies
//!   (requires the `proptest` feature).
//!
//! # Example
//!
//! ```rust
//! use tidewater::io::{self, IO};
//! use tidewater::retry::RetryPolicy;
//! use tidewater::testing::AttemptCounter;
//!
//! let counter = AttemptCounter::new();
//! let recorder = counter.clone();
//!
//! let io = io::retrying_result(RetryPolicy::limit_retries(4), move |status| {
//!     let attempt = recorder.record(status);
//!     IO::of(if attempt < 3 { Err("flaky") } else { Ok(attempt) })
//! });
//!
//! assert_eq!(io.run(), Ok(3));
//! assert_eq!(counter.attempts(), 3);
//! assert_eq!(counter.iter_numbers(), vec![0, 1, 2]);
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use crate::retry::RetryStatus;

/// Records every status a retried action sees.
///
/// Clones share the same record, so one clone can move into the action while
/// the test keeps another for assertions.
#[derive(Debug, Clone, Default)]
pub struct AttemptCounter {
    statuses: Arc<Mutex<Vec<RetryStatus>>>,
}

impl AttemptCounter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an attempt and return how many attempts have been made so far
    /// (1 for the first).
    pub fn record(&self, status: RetryStatus) -> u32 {
        let mut statuses = self.statuses.lock().unwrap_or_else(PoisonError::into_inner);
        statuses.push(status);
        u32::try_from(statuses.len()).unwrap_or(u32::MAX)
    }

    /// Number of recorded attempts.
    pub fn attempts(&self) -> u32 {
        let statuses = self.statuses.lock().unwrap_or_else(PoisonError::into_inner);
        u32::try_from(statuses.len()).unwrap_or(u32::MAX)
    }

    /// All recorded statuses, in order.
    pub fn statuses(&self) -> Vec<RetryStatus> {
        self.statuses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The `iter_number` of every recorded status, in order.
    pub fn iter_numbers(&self) -> Vec<u32> {
        self.statuses().iter().map(|s| s.iter_number).collect()
    }
}

/// `proptest` strategies for retry types.
#[cfg(any(test, feature = "proptest"))]
pub mod strategies {
    use std::time::Duration;

    use proptest::prelude::*;

    use crate::retry::{RetryPolicy, RetryStatus};
    use crate::Semigroup;

    /// Durations up to `max_millis` milliseconds, at millisecond granularity.
    pub fn duration(max_millis: u64) -> impl Strategy<Value = Duration> {
        (0..=max_millis).prop_map(Duration::from_millis)
    }

    /// Arbitrary, internally consistent statuses.
    ///
    /// `previous_delay` never exceeds `cumulative_delay`, and the first
    /// attempt carries no delay at all.
    pub fn retry_status() -> impl Strategy<Value = RetryStatus> {
        (0u32..64, duration(60_000), proptest::option::of(0u64..=100))
            .prop_map(|(iter_number, cumulative, share)| {
                if iter_number == 0 {
                    return RetryStatus::default();
                }
                let previous_delay = share.map(|pct| cumulative.mul_f64(pct as f64 / 100.0));
                RetryStatus {
                    iter_number,
                    cumulative_delay: cumulative,
                    previous_delay,
                }
            })
    }

    /// Policies built from the standard building blocks, nested up to a few
    /// levels of `combine` and `cap_delay`.
    pub fn retry_policy() -> impl Strategy<Value = RetryPolicy> {
        let leaf = prop_oneof![
            (0u32..16).prop_map(RetryPolicy::limit_retries),
            duration(1_000).prop_map(RetryPolicy::constant_delay),
            duration(100).prop_map(RetryPolicy::exponential_backoff),
            duration(100).prop_map(RetryPolicy::linear_backoff),
        ];
        leaf.prop_recursive(3, 16, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(p, q)| p.combine(q)),
                (duration(5_000), inner).prop_map(|(max, p)| RetryPolicy::cap_delay(max, p)),
            ]
        })
    }
}
