//! Everything needed to build and run effects, in one import.
//!
//! ```rust
//! use tidewater::effect::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let effect = pure::<_, String, ()>(42)
//!     .map(|x| x * 2)
//!     .and_then(|x| pure(x + 1));
//!
//! assert_eq!(effect.execute(&()).await, Ok(85));
//! # });
//! ```

pub use crate::effect::boxed::BoxedEffect;
pub use crate::effect::compat::RunStandalone;
pub use crate::effect::constructors::{
    ask, asks, fail, from_async, from_fn, from_option, from_result, local, pure,
};
pub use crate::effect::ext::EffectExt;
pub use crate::effect::kind::ReaderIOKind;
pub use crate::effect::trait_def::Effect;

#[cfg(feature = "async")]
pub use crate::effect::retry::{retrying, retrying_on_error};
#[cfg(feature = "async")]
pub use crate::effect::timeout::with_timeout;

#[cfg(feature = "tracing")]
pub use crate::effect::tracing::EffectTracingExt;
