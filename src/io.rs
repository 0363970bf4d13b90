//! Synchronous, lazy IO.
//!
//! `IO<A>` is a deferred computation that produces an `A` when [`run`](IO::run).
//! Nothing happens at construction time, so an `IO` can be built, combined and
//! passed around before any side effect takes place.
//!
//! This is the blocking host for the retry engine: waiting between attempts
//! puts the current thread to sleep.
//!
//! # Example
//!
//! ```
//! use tidewater::io::{self, IO};
//! use tidewater::retry::RetryPolicy;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//!
//! let calls = Arc::new(AtomicU32::new(0));
//! let counter = calls.clone();
//!
//! let fetch = io::retrying_result(RetryPolicy::limit_retries(3), move |_status| {
//!     let counter = counter.clone();
//!     IO::new(move || match counter.fetch_add(1, Ordering::SeqCst) {
//!         0 | 1 => Err("connection reset"),
//!         _ => Ok("payload"),
//!     })
//! });
//!
//! assert_eq!(fetch.run(), Ok("payload"));
//! assert_eq!(calls.load(Ordering::SeqCst), 3);
//! ```

use std::time::Duration;

use crate::kind::{Delay, Kind, Monad, TailRec};
use crate::retry::{generic, RetryPolicy, RetryStatus};
use crate::tailrec::{self, Trampoline};

/// A lazy synchronous computation producing an `A`.
pub struct IO<A> {
    thunk: Box<dyn FnOnce() -> A + Send>,
}

impl<A> std::fmt::Debug for IO<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IO").field("thunk", &"<function>").finish()
    }
}

impl<A: 'static> IO<A> {
    /// Defer `f` until the IO is run.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> A + Send + 'static,
    {
        IO { thunk: Box::new(f) }
    }

    /// An IO that performs nothing and yields `value`.
    pub fn of(value: A) -> Self
    where
        A: Send,
    {
        IO::new(move || value)
    }

    /// Transform the produced value.
    pub fn map<B, F>(self, f: F) -> IO<B>
    where
        B: 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        IO::new(move || f(self.run()))
    }

    /// Run this IO, then the one built from its value.
    pub fn and_then<B, F>(self, f: F) -> IO<B>
    where
        B: 'static,
        F: FnOnce(A) -> IO<B> + Send + 'static,
    {
        IO::new(move || f(self.run()).run())
    }

    /// Perform the computation.
    pub fn run(self) -> A {
        (self.thunk)()
    }
}

/// Kind marker for [`IO`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IOKind;

impl Kind for IOKind {
    type Of<A: Send + 'static> = IO<A>;
}

impl Monad for IOKind {
    fn of<A>(value: A) -> IO<A>
    where
        A: Send + 'static,
    {
        IO::of(value)
    }

    fn chain<A, B, F>(ma: IO<A>, f: F) -> IO<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> IO<B> + Send + 'static,
    {
        ma.and_then(f)
    }
}

impl TailRec for IOKind {
    fn tail_rec<A, B, F>(initial: A, step: F) -> IO<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> IO<Trampoline<A, B>> + Send + Sync + 'static,
    {
        IO::new(move || tailrec::run(initial, |a| step(a).run()))
    }
}

impl Delay for IOKind {
    /// Blocks the running thread for `duration` (skipped when zero).
    fn delay<A>(duration: Duration, ma: IO<A>) -> IO<A>
    where
        A: Send + 'static,
    {
        IO::new(move || {
            if !duration.is_zero() {
                std::thread::sleep(duration);
            }
            ma.run()
        })
    }
}

/// Retry an IO action under `policy` while `check` asks for it.
///
/// See [`generic::retrying`] for the exact semantics. Waits block the thread.
pub fn retrying<A, Act, Chk>(policy: RetryPolicy, action: Act, check: Chk) -> IO<A>
where
    A: Send + 'static,
    Act: Fn(RetryStatus) -> IO<A> + Send + Sync + 'static,
    Chk: Fn(&A) -> bool + Send + Sync + 'static,
{
    generic::retrying::<IOKind, A, Act, Chk>(policy, action, check)
}

/// Retry an IO producing a `Result` for as long as it yields `Err`.
///
/// When the policy gives up, the last `Err` is returned unchanged.
pub fn retrying_result<T, E, Act>(policy: RetryPolicy, action: Act) -> IO<Result<T, E>>
where
    T: Send + 'static,
    E: Send + 'static,
    Act: Fn(RetryStatus) -> IO<Result<T, E>> + Send + Sync + 'static,
{
    retrying(policy, action, Result::is_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_io_is_lazy() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();
        let io = IO::new(move || flag.store(true, Ordering::SeqCst));

        assert!(!ran.load(Ordering::SeqCst));
        io.run();
        assert!(ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_map_and_then() {
        let io = IO::of(20).map(|x| x + 1).and_then(|x| IO::of(x * 2));
        assert_eq!(io.run(), 42);
    }

    #[test]
    fn test_monad_left_identity() {
        let f = |x: i32| IO::of(x + 1);
        assert_eq!(IOKind::chain(IOKind::of(1), f).run(), f(1).run());
    }

    #[test]
    fn test_monad_right_identity() {
        let io = IOKind::chain(IO::of("x"), IOKind::of);
        assert_eq!(io.run(), "x");
    }

    #[test]
    fn test_tail_rec_counts_down() {
        let io = IOKind::tail_rec(1_000_000u32, |n| {
            IO::of(if n == 0 {
                Trampoline::Land("landed")
            } else {
                Trampoline::Bounce(n - 1)
            })
        });
        assert_eq!(io.run(), "landed");
    }

    #[test]
    fn test_delay_waits() {
        let start = std::time::Instant::now();
        let io = IOKind::delay(Duration::from_millis(20), IO::of(1));
        assert_eq!(io.run(), 1);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_retrying_result_keeps_last_error() {
        let io = retrying_result(RetryPolicy::limit_retries(2), |status: RetryStatus| {
            IO::of(Err::<(), _>(status.iter_number))
        });
        assert_eq!(io.run(), Err(2));
    }
}
