//! Retry policies as seen from outside the crate.

use std::time::Duration;

use tidewater::monoid::fold_all;
use tidewater::prelude::*;
use tidewater::retry::apply_policy;

fn delays(policy: &RetryPolicy, steps: usize) -> Vec<Option<Duration>> {
    RetryStatus::simulate(policy, steps)
        .map(|status| status.previous_delay)
        .collect()
}

fn ms(n: u64) -> Option<Duration> {
    Some(Duration::from_millis(n))
}

#[test]
fn test_limit_retries_allows_n_retries() {
    let policy = RetryPolicy::limit_retries(3);
    assert_eq!(
        delays(&policy, 10),
        vec![Some(Duration::ZERO), Some(Duration::ZERO), Some(Duration::ZERO), None]
    );
}

#[test]
fn test_backoff_schedules() {
    let base = Duration::from_millis(10);
    assert_eq!(
        delays(&RetryPolicy::exponential_backoff(base), 4),
        vec![ms(10), ms(20), ms(40), ms(80)]
    );
    assert_eq!(
        delays(&RetryPolicy::linear_backoff(base), 4),
        vec![ms(10), ms(20), ms(30), ms(40)]
    );
    assert_eq!(
        delays(&RetryPolicy::fibonacci_backoff(base), 6),
        vec![ms(10), ms(10), ms(20), ms(30), ms(50), ms(80)]
    );
}

#[test]
fn test_realistic_policy() {
    let policy = RetryPolicy::exponential_backoff(Duration::from_millis(100))
        .with_max_retries(6)
        .with_max_delay(Duration::from_millis(1000));

    assert_eq!(
        delays(&policy, 20),
        vec![ms(100), ms(200), ms(400), ms(800), ms(1000), ms(1000), None]
    );
}

#[test]
fn test_cumulative_limit_stops_before_overshooting() {
    let policy = RetryPolicy::limit_cumulative_delay(
        Duration::from_millis(350),
        RetryPolicy::exponential_backoff(Duration::from_millis(50)),
    );

    let statuses: Vec<_> = RetryStatus::simulate(&policy, 20).collect();
    let last = statuses.last().copied().unwrap_or_default();

    assert_eq!(statuses.len(), 4);
    assert_eq!(last.previous_delay, None);
    assert_eq!(last.cumulative_delay, Duration::from_millis(350));
}

#[test]
fn test_policies_fold_into_one() {
    let policy = fold_all([
        RetryPolicy::constant_delay(Duration::from_millis(30)),
        RetryPolicy::linear_backoff(Duration::from_millis(10)),
        RetryPolicy::limit_retries(4),
    ]);

    assert_eq!(delays(&policy, 10), vec![ms(30), ms(30), ms(30), ms(40), None]);
}

#[test]
fn test_empty_policy_is_neutral() {
    let policy = RetryPolicy::exponential_backoff(Duration::from_millis(5)).with_max_retries(3);
    let left = RetryPolicy::empty().combine(policy.clone());
    let right = policy.clone().combine(RetryPolicy::empty());

    assert_eq!(delays(&left, 10), delays(&policy, 10));
    assert_eq!(delays(&right, 10), delays(&policy, 10));
}

#[test]
fn test_custom_policy_from_fn() {
    // Retry quickly at first, then back off hard, give up after 4.
    let policy = RetryPolicy::from_fn(|status| match status.iter_number {
        0 | 1 => Some(Duration::from_millis(1)),
        2 | 3 => Some(Duration::from_secs(1)),
        _ => None,
    });

    let status = apply_policy(&policy, RetryStatus::default());
    assert_eq!(status.previous_delay, ms(1));
    assert_eq!(delays(&policy, 10).len(), 5);
}

#[test]
fn test_status_next_matches_apply_policy() {
    let policy = RetryPolicy::constant_delay(Duration::from_millis(7));
    let status = RetryStatus::new().next(&policy).next(&policy);

    assert_eq!(status, apply_policy(&policy, apply_policy(&policy, RetryStatus::new())));
    assert_eq!(status.iter_number, 2);
    assert_eq!(status.cumulative_delay, Duration::from_millis(14));
}

#[cfg(feature = "jitter")]
#[test]
fn test_jitter_stays_within_delay_and_keeps_termination() {
    let policy = RetryPolicy::constant_delay(Duration::from_millis(100))
        .with_max_retries(5)
        .jittered(42);

    let jittered = delays(&policy, 10);
    assert_eq!(jittered.len(), 6);
    assert_eq!(jittered[5], None);
    for delay in jittered.iter().flatten() {
        assert!(*delay <= Duration::from_millis(100));
    }
    assert_eq!(jittered, delays(&policy, 10));
}

#[cfg(feature = "serde")]
#[test]
fn test_status_serializes_to_json() {
    let policy = RetryPolicy::constant_delay(Duration::from_millis(250));
    let status = RetryStatus::new().next(&policy);

    let json = serde_json::to_string(&status).unwrap();
    let back: RetryStatus = serde_json::from_str(&json).unwrap();
    assert_eq!(back, status);
}
