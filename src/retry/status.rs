//! Retry progress tracking.

use std::time::Duration;

use crate::retry::policy::RetryPolicy;

/// Progress of a retry sequence.
///
/// A status is a plain value: every transition produces a new one through
/// [`apply_policy`], nothing is updated in place.
///
/// # Invariants
///
/// - `iter_number` grows by exactly one per [`apply_policy`].
/// - `cumulative_delay` is the sum of every `previous_delay` produced along the way.
///
/// # Example
///
/// ```rust
/// use tidewater::retry::{apply_policy, RetryPolicy, RetryStatus};
/// use std::time::Duration;
///
/// let policy = RetryPolicy::constant_delay(Duration::from_millis(100));
/// let status = apply_policy(&policy, RetryStatus::default());
///
/// assert_eq!(status.iter_number, 1);
/// assert_eq!(status.previous_delay, Some(Duration::from_millis(100)));
/// assert_eq!(status.cumulative_delay, Duration::from_millis(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetryStatus {
    /// Attempt index, 0 on the first try.
    pub iter_number: u32,
    /// Sum of all delays scheduled so far.
    pub cumulative_delay: Duration,
    /// Delay chosen by the most recent policy application.
    ///
    /// `None` before the first retry and once the policy has given up.
    pub previous_delay: Option<Duration>,
}

impl RetryStatus {
    /// The status of the first attempt: nothing tried, nothing waited.
    pub const fn new() -> Self {
        RetryStatus {
            iter_number: 0,
            cumulative_delay: Duration::ZERO,
            previous_delay: None,
        }
    }

    /// Whether this is the initial attempt.
    pub fn is_first_attempt(&self) -> bool {
        self.iter_number == 0
    }

    /// Advance this status under `policy`. Same as [`apply_policy`].
    pub fn next(self, policy: &RetryPolicy) -> Self {
        apply_policy(policy, self)
    }

    /// Replay a policy offline without waiting.
    ///
    /// Yields the status after each policy application, starting from the
    /// default status, and stops after the first status whose
    /// `previous_delay` is `None` or after `max_steps` items.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::retry::{RetryPolicy, RetryStatus};
    /// use std::time::Duration;
    ///
    /// let policy = RetryPolicy::exponential_backoff(Duration::from_millis(100))
    ///     .with_max_retries(3);
    ///
    /// let delays: Vec<_> = RetryStatus::simulate(&policy, 10)
    ///     .map(|s| s.previous_delay)
    ///     .collect();
    ///
    /// assert_eq!(delays, vec![
    ///     Some(Duration::from_millis(100)),
    ///     Some(Duration::from_millis(200)),
    ///     Some(Duration::from_millis(400)),
    ///     None,
    /// ]);
    /// ```
    pub fn simulate(policy: &RetryPolicy, max_steps: usize) -> Simulate {
        Simulate {
            policy: policy.clone(),
            status: RetryStatus::new(),
            remaining: max_steps,
            done: false,
        }
    }
}

/// Iterator returned by [`RetryStatus::simulate`].
#[derive(Debug, Clone)]
pub struct Simulate {
    policy: RetryPolicy,
    status: RetryStatus,
    remaining: usize,
    done: bool,
}

impl Iterator for Simulate {
    type Item = RetryStatus;

    fn next(&mut self) -> Option<RetryStatus> {
        if self.done || self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.status = apply_policy(&self.policy, self.status);
        self.done = self.status.previous_delay.is_none();
        Some(self.status)
    }
}

/// Advance `status` by consulting `policy`.
///
/// The new status has `iter_number + 1`, records the decision as
/// `previous_delay` and adds it (zero when absent) to `cumulative_delay`.
/// Pure: nothing waits, nothing is mutated.
pub fn apply_policy(policy: &RetryPolicy, status: RetryStatus) -> RetryStatus {
    let decision = policy.decide(&status);
    RetryStatus {
        iter_number: status.iter_number.saturating_add(1),
        cumulative_delay: status
            .cumulative_delay
            .saturating_add(decision.unwrap_or(Duration::ZERO)),
        previous_delay: decision,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status() {
        let status = RetryStatus::default();
        assert_eq!(status, RetryStatus::new());
        assert!(status.is_first_attempt());
        assert_eq!(status.cumulative_delay, Duration::ZERO);
        assert_eq!(status.previous_delay, None);
    }

    #[test]
    fn test_apply_policy_accumulates_delay() {
        let policy = RetryPolicy::constant_delay(Duration::from_millis(250));
        let status = RetryStatus::new().next(&policy).next(&policy).next(&policy);

        assert_eq!(status.iter_number, 3);
        assert_eq!(status.cumulative_delay, Duration::from_millis(750));
        assert_eq!(status.previous_delay, Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_apply_policy_on_termination() {
        let policy = RetryPolicy::limit_retries(0);
        let status = apply_policy(&policy, RetryStatus::new());

        assert_eq!(status.iter_number, 1);
        assert_eq!(status.previous_delay, None);
        assert_eq!(status.cumulative_delay, Duration::ZERO);
    }

    #[test]
    fn test_apply_policy_does_not_touch_input() {
        let policy = RetryPolicy::constant_delay(Duration::from_millis(10));
        let before = RetryStatus::new();
        let after = apply_policy(&policy, before);

        assert_eq!(before, RetryStatus::new());
        assert_ne!(before, after);
    }

    #[test]
    fn test_simulate_respects_max_steps() {
        let policy = RetryPolicy::constant_delay(Duration::from_millis(1));
        assert_eq!(RetryStatus::simulate(&policy, 5).count(), 5);
    }

    #[test]
    fn test_simulate_stops_after_termination() {
        let policy = RetryPolicy::limit_retries(2);
        let statuses: Vec<_> = RetryStatus::simulate(&policy, 100).collect();

        assert_eq!(statuses.len(), 3);
        assert_eq!(statuses[2].previous_delay, None);
        assert_eq!(statuses[2].iter_number, 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_status_serde_round_trip() {
        let status = RetryStatus {
            iter_number: 2,
            cumulative_delay: Duration::from_millis(300),
            previous_delay: Some(Duration::from_millis(200)),
        };
        let json = serde_json::to_string(&status).unwrap();
        let back: RetryStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
    }
}
