//! Concrete types returned by effect combinators.
//!
//! Each combinator is a plain struct holding its inner effect and closures,
//! so a chain of combinators compiles to one nested type with no heap
//! allocation. Most code only sees them as `impl Effect`; use
//! [`EffectExt::boxed`](crate::effect::EffectExt::boxed) when the concrete
//! type has to be erased.

mod and_then;
mod attempt;
mod bind;
mod fail;
mod from_async;
mod from_fn;
mod from_result;
mod map;
mod map_err;
mod pure;

pub use and_then::AndThen;
pub use attempt::Attempt;
pub use bind::{Bind, Let};
pub use fail::Fail;
pub use from_async::FromAsync;
pub use from_fn::FromFn;
pub use from_result::FromResult;
pub use map::Map;
pub use map_err::MapErr;
pub use pure::Pure;
