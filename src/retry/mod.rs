//! Retry policies and the retry engine.
//!
//! The module follows the "pure core, imperative shell" split:
//!
//! - **Pure core**: a [`RetryPolicy`] is a pure function from [`RetryStatus`] to an
//!   optional delay, and [`apply_policy`] advances a status without waiting. Both
//!   can be exercised offline, e.g. with [`RetryStatus::simulate`].
//! - **Composable**: policies form a [`Monoid`](crate::Monoid); combining takes the
//!   longest delay and stops as soon as any member stops.
//! - **Effect-polymorphic**: the [`generic`] engine drives any effect kind that
//!   provides `of`, `chain`, `delay` and `tail_rec`.
//!
//! # Quick Start
//!
//! ```rust
//! use tidewater::retry::RetryPolicy;
//! use tidewater::Semigroup;
//! use std::time::Duration;
//!
//! // Up to 5 retries, exponential backoff from 100ms, never waiting more than 2s
//! let policy = RetryPolicy::limit_retries(5)
//!     .combine(RetryPolicy::exponential_backoff(Duration::from_millis(100)))
//!     .with_max_delay(Duration::from_secs(2));
//! # let _ = policy;
//! ```
//!
//! # Building Blocks
//!
//! - [`RetryPolicy::limit_retries`]: stop after `n` retries
//! - [`RetryPolicy::constant_delay`]: fixed delay
//! - [`RetryPolicy::linear_backoff`]: `base * (n + 1)`
//! - [`RetryPolicy::exponential_backoff`]: `base * 2^n`
//! - [`RetryPolicy::fibonacci_backoff`]: `base * fib(n + 1)`
//! - [`RetryPolicy::cap_delay`]: clamp delays
//! - [`RetryPolicy::limit_cumulative_delay`]: bound the total wait
//!
//! # Exhaustion
//!
//! When the policy stops, the engine hands back whatever the last attempt
//! produced. There is no dedicated "retries exhausted" error: callers inspect
//! the value itself.

pub mod generic;
mod policy;
mod status;

pub use policy::RetryPolicy;
pub use status::{apply_policy, RetryStatus, Simulate};
