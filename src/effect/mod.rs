//! Async effects that read an environment and may fail.
//!
//! An [`Effect`] is a lazy computation with three type parameters: what it
//! produces (`Output`), how it fails (`Error`) and what it reads (`Env`).
//! It is the `ReaderIOResult` of this crate.
//!
//! Combinators return concrete types, like iterator adapters, and only
//! [`EffectExt::boxed`] allocates. Boxing is needed to keep effects in a
//! collection, to return different effects from one function, and to
//! recurse.
//!
//! # Dependency injection
//!
//! ```rust
//! use std::sync::Arc;
//! use tidewater::effect::prelude::*;
//!
//! trait Clock: Send + Sync {
//!     fn now(&self) -> u64;
//! }
//!
//! struct Fixed(u64);
//! impl Clock for Fixed {
//!     fn now(&self) -> u64 { self.0 }
//! }
//!
//! #[derive(Clone)]
//! struct Env { clock: Arc<dyn Clock> }
//!
//! fn elapsed_since(start: u64) -> impl Effect<Output = u64, Error = String, Env = Env> {
//!     asks(move |env: &Env| env.clock.now() - start)
//! }
//!
//! # tokio_test::block_on(async {
//! let env = Env { clock: Arc::new(Fixed(100)) };
//! assert_eq!(elapsed_since(58).execute(&env).await, Ok(42));
//! # });
//! ```
//!
//! # Retrying
//!
//! [`retrying`] and [`retrying_on_error`] drive
//! [`crate::retry::generic::retrying`] over [`ReaderIOKind`]; delays use
//! the tokio timer. They need the `async` feature.

pub mod boxed;
pub mod combinators;
pub mod compat;
pub mod constructors;
pub mod ext;
pub mod kind;
pub mod prelude;
pub mod reader;
#[cfg(feature = "async")]
pub mod retry;
#[cfg(feature = "async")]
mod timeout;
pub mod trait_def;

#[cfg(feature = "tracing")]
pub mod tracing;


pub use boxed::BoxedEffect;
pub use compat::RunStandalone;
pub use constructors::{ask, asks, fail, from_async, from_fn, from_option, from_result, local, pure};
pub use ext::EffectExt;
pub use kind::ReaderIOKind;
pub use reader::{Ask, Asks, Local};
#[cfg(feature = "async")]
pub use retry::{retrying, retrying_on_error};
#[cfg(feature = "async")]
pub use timeout::{with_timeout, TimeoutError};
pub use trait_def::Effect;

#[cfg(feature = "tracing")]
pub use self::tracing::{EffectTracingExt, Instrument};
