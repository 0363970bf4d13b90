//! # Tidewater
//!
//! Composable retries for effectful Rust code.
//!
//! A retry decision is a [`RetryPolicy`]: a function from the current
//! [`RetryStatus`] to "wait this long, then try again" or "stop". Policies
//! form a [`Monoid`], so small policies combine into the one you need:
//!
//! ```rust
//! use std::time::Duration;
//! use tidewater::prelude::*;
//!
//! // Exponential backoff, at most 5 retries, no single wait above 2s.
//! let policy = RetryPolicy::cap_delay(
//!     Duration::from_secs(2),
//!     RetryPolicy::exponential_backoff(Duration::from_millis(100))
//!         .combine(RetryPolicy::limit_retries(5)),
//! );
//!
//! let waits: Vec<_> = RetryStatus::simulate(&policy, 10)
//!     .map(|status| status.previous_delay)
//!     .collect();
//! assert_eq!(waits.len(), 6);
//! assert_eq!(waits[5], None);
//! ```
//!
//! The engine in [`retry::generic`] is written once against the small
//! capability traits in [`kind`] and runs on any effect that implements
//! them:
//!
//! - [`io`]: synchronous, lazy [`IO`]; waits block the thread.
//! - [`effect`]: async effects that read an environment and may fail; waits
//!   use the tokio timer (feature `async`, on by default).
//!
//! ```rust
//! use tidewater::io::{self, IO};
//! use tidewater::prelude::*;
//!
//! let answer = io::retrying_result(RetryPolicy::limit_retries(2), |status| {
//!     IO::new(move || if status.iter_number < 2 { Err("busy") } else { Ok(42) })
//! });
//! assert_eq!(answer.run(), Ok(42));
//! ```
//!
//! ## Features
//!
//! - `async` (default): tokio-backed delays, [`effect::retrying`] and
//!   `with_timeout`.
//! - `tracing`: spans around effects and `DEBUG` events for retry decisions.
//! - `jitter`: seeded random jitter for policies.
//! - `serde`: `Serialize`/`Deserialize` for [`RetryStatus`].
//! - `proptest`: strategies in [`testing::strategies`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod effect;
pub mod io;
pub mod kind;
pub mod lens;
pub mod monoid;
pub mod retry;
pub mod semigroup;
pub mod tailrec;
pub mod testing;

// Re-exports
pub use effect::{BoxedEffect, Effect, EffectExt};
pub use io::IO;
pub use lens::Lens;
pub use monoid::Monoid;
pub use retry::{RetryPolicy, RetryStatus};
pub use semigroup::Semigroup;
pub use tailrec::Trampoline;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::effect::{BoxedEffect, Effect, EffectExt};
    pub use crate::io::IO;
    pub use crate::kind::{Delay, Kind, Monad, TailRec};
    pub use crate::lens::Lens;
    pub use crate::monoid::Monoid;
    pub use crate::retry::{RetryPolicy, RetryStatus};
    pub use crate::semigroup::Semigroup;
    pub use crate::tailrec::Trampoline;
}
