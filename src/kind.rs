//! Monad capabilities for effect-polymorphic code.
//!
//! Rust has no higher-kinded types, so an effect "type constructor" is named by
//! a zero-sized marker implementing [`Kind`]: `Kind::Of<A>` is the effect that
//! produces an `A`. Code that must work for any effect (such as the generic retry
//! engine) is written against these traits and instantiated with a marker.
//!
//! | Marker | `Of<A>` |
//! |--------|---------|
//! | [`IOKind`](crate::io::IOKind) | [`IO<A>`](crate::io::IO) |
//! | [`ReaderIOKind<Env>`](crate::effect::ReaderIOKind) | `BoxedEffect<A, Infallible, Env>` |
//!
//! # Example
//!
//! ```
//! use tidewater::io::IOKind;
//! use tidewater::kind::{Kind, Monad};
//!
//! fn double<M: Monad>(ma: M::Of<i32>) -> M::Of<i32> {
//!     M::map(ma, |x| x * 2)
//! }
//!
//! assert_eq!(double::<IOKind>(IOKind::of(21)).run(), 42);
//! ```

use std::time::Duration;

use crate::tailrec::Trampoline;

/// A type constructor, named by a marker type.
pub trait Kind {
    /// The effect producing a value of type `A`.
    type Of<A: Send + 'static>: Send + 'static;
}

/// Sequencing and lifting.
///
/// # Laws
///
/// ```text
/// chain(of(a), f)      == f(a)                          (left identity)
/// chain(m, of)         == m                             (right identity)
/// chain(chain(m, f), g) == chain(m, |x| chain(f(x), g)) (associativity)
/// ```
pub trait Monad: Kind {
    /// Lift a pure value.
    fn of<A>(value: A) -> Self::Of<A>
    where
        A: Send + 'static;

    /// Run `ma`, then feed its value to `f`.
    fn chain<A, B, F>(ma: Self::Of<A>, f: F) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> Self::Of<B> + Send + 'static;

    /// Transform the produced value.
    fn map<A, B, F>(ma: Self::Of<A>, f: F) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        Self::chain(ma, move |a| Self::of(f(a)))
    }
}

/// Stack-safe monadic recursion.
///
/// `tail_rec(a, step)` runs `step(a)`; a `Bounce(next)` result runs
/// `step(next)`, a `Land(b)` result finishes with `b`. Implementations must
/// loop rather than recurse, so the number of bounces does not grow the stack.
pub trait TailRec: Monad {
    /// Drive `step` from `initial` until it lands.
    fn tail_rec<A, B, F>(initial: A, step: F) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> Self::Of<Trampoline<A, B>> + Send + Sync + 'static;
}

/// Suspension for a fixed duration.
pub trait Delay: Kind {
    /// Wait for `duration`, then behave like `ma`.
    fn delay<A>(duration: Duration, ma: Self::Of<A>) -> Self::Of<A>
    where
        A: Send + 'static;
}
