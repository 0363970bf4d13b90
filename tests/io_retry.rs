//! Retrying synchronous IO.

use std::time::{Duration, Instant};

use tidewater::io::{self, IO};
use tidewater::prelude::*;
use tidewater::testing::AttemptCounter;

fn failing_until(
    counter: &AttemptCounter,
    succeed_on: u32,
) -> impl Fn(RetryStatus) -> IO<Result<u32, String>> + Send + Sync + 'static {
    let counter = counter.clone();
    move |status| {
        let counter = counter.clone();
        IO::new(move || {
            let attempt = counter.record(status);
            if attempt < succeed_on {
                Err(format!("attempt {attempt} failed"))
            } else {
                Ok(attempt)
            }
        })
    }
}

#[test]
fn test_nothing_runs_until_run() {
    let counter = AttemptCounter::new();
    let io = io::retrying_result(RetryPolicy::limit_retries(3), failing_until(&counter, 2));

    assert_eq!(counter.attempts(), 0);
    assert_eq!(io.run(), Ok(2));
    assert_eq!(counter.attempts(), 2);
}

#[test]
fn test_real_delays_are_slept() {
    let counter = AttemptCounter::new();
    let policy = RetryPolicy::constant_delay(Duration::from_millis(20)).with_max_retries(5);
    let start = Instant::now();

    let result = io::retrying_result(policy, failing_until(&counter, 3)).run();

    assert_eq!(result, Ok(3));
    assert!(start.elapsed() >= Duration::from_millis(40));
}

#[test]
fn test_exhaustion_returns_last_error() {
    let counter = AttemptCounter::new();
    let policy = RetryPolicy::limit_retries(2);
    let result = io::retrying_result(policy, failing_until(&counter, 100)).run();

    assert_eq!(result, Err("attempt 3 failed".to_string()));
    assert_eq!(counter.iter_numbers(), vec![0, 1, 2]);
}

#[test]
fn test_polling_a_value() {
    let counter = AttemptCounter::new();
    let poll = counter.clone();

    let io = io::retrying(
        RetryPolicy::limit_retries(10),
        move |status| {
            let poll = poll.clone();
            IO::new(move || poll.record(status) * 10)
        },
        |progress: &u32| *progress < 50,
    );

    assert_eq!(io.run(), 50);
    assert_eq!(counter.attempts(), 5);
}

#[test]
fn test_hundred_thousand_retries() {
    let counter = AttemptCounter::new();
    let policy = RetryPolicy::limit_retries(100_000);
    let result = io::retrying_result(policy, failing_until(&counter, u32::MAX)).run();

    assert_eq!(result, Err("attempt 100001 failed".to_string()));
    assert_eq!(counter.attempts(), 100_001);
}
