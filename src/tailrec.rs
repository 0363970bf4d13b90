//! Trampolined tail recursion.
//!
//! A recursive step function returns a [`Trampoline`]: either `Bounce` with the
//! argument for the next step, or `Land` with the final result. A driver keeps
//! unwrapping bounces in a loop, so recursion depth never turns into stack depth.
//!
//! ```
//! use tidewater::tailrec::{self, Trampoline};
//!
//! // Sum 1..=n without recursion on the call stack
//! let sum = tailrec::run((1_000_000u64, 0u64), |(n, acc)| {
//!     if n == 0 {
//!         Trampoline::Land(acc)
//!     } else {
//!         Trampoline::Bounce((n - 1, acc + n))
//!     }
//! });
//! assert_eq!(sum, 500_000_500_000);
//! ```

/// One step of a trampolined computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trampoline<B, L> {
    /// Keep going with a new argument.
    Bounce(B),
    /// Finished with a result.
    Land(L),
}

impl<B, L> Trampoline<B, L> {
    /// Returns `true` if this step finishes the computation.
    pub fn is_land(&self) -> bool {
        matches!(self, Trampoline::Land(_))
    }

    /// Transform the landed result, leaving bounces untouched.
    pub fn map_land<L2, F>(self, f: F) -> Trampoline<B, L2>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Trampoline::Bounce(b) => Trampoline::Bounce(b),
            Trampoline::Land(l) => Trampoline::Land(f(l)),
        }
    }
}

/// Drive a pure step function until it lands.
///
/// Uses constant stack regardless of how many times `step` bounces.
pub fn run<A, B, F>(initial: A, mut step: F) -> B
where
    F: FnMut(A) -> Trampoline<A, B>,
{
    let mut current = initial;
    loop {
        match step(current) {
            Trampoline::Bounce(next) => current = next,
            Trampoline::Land(result) => return result,
        }
    }
}
