//! Effect-polymorphic retry engine.
//!
//! The engine knows nothing about the effect it drives. It only needs the
//! capabilities in [`crate::kind`]: `of` and `chain` to sequence attempts,
//! `delay` to wait between them and, for the stack-safe variant, `tail_rec`
//! to loop.
//!
//! Concrete facades ([`crate::io::retrying`], `effect::retry::retrying`) pick
//! the kind and turn the host's failure channel into a value `check` can see.

use std::sync::Arc;

use crate::kind::{Delay, Monad, TailRec};
use crate::retry::policy::RetryPolicy;
use crate::retry::status::{apply_policy, RetryStatus};
use crate::tailrec::Trampoline;

/// Retry `action` under `policy` while `check` asks for it.
///
/// Each round runs `action` with the current [`RetryStatus`] and inspects the
/// produced value:
///
/// - `check(&value) == false`: done, the value is returned.
/// - `check(&value) == true`: the policy is applied. If it stops, the value is
///   returned as is (no error is synthesized). If it yields a delay, the
///   engine waits through [`Delay::delay`] and starts the next round with the
///   advanced status.
///
/// The first attempt always runs, so `RetryPolicy::limit_retries(0)` means a
/// single attempt. A policy that never stops combined with a `check` that is
/// always `true` loops forever.
///
/// Rounds are driven by [`TailRec::tail_rec`], so the stack does not grow with
/// the number of retries.
///
/// # Example
///
/// ```rust
/// use tidewater::io::{IOKind, IO};
/// use tidewater::retry::{generic, RetryPolicy};
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::sync::Arc;
///
/// let calls = Arc::new(AtomicU32::new(0));
/// let counter = calls.clone();
///
/// let io = generic::retrying::<IOKind, _, _, _>(
///     RetryPolicy::limit_retries(5),
///     move |_status| {
///         let counter = counter.clone();
///         IO::new(move || counter.fetch_add(1, Ordering::SeqCst) + 1)
///     },
///     |attempts: &u32| *attempts < 3,
/// );
///
/// assert_eq!(io.run(), 3);
/// assert_eq!(calls.load(Ordering::SeqCst), 3);
/// ```
pub fn retrying<M, A, Act, Chk>(policy: RetryPolicy, action: Act, check: Chk) -> M::Of<A>
where
    M: TailRec + Delay,
    A: Send + 'static,
    Act: Fn(RetryStatus) -> M::Of<A> + Send + Sync + 'static,
    Chk: Fn(&A) -> bool + Send + Sync + 'static,
{
    let check = Arc::new(check);
    M::tail_rec(RetryStatus::default(), move |status: RetryStatus| {
        let policy = policy.clone();
        let check = Arc::clone(&check);
        M::chain(action(status), move |value: A| {
            if !check(&value) {
                return M::of(Trampoline::Land(value));
            }
            let next = apply_policy(&policy, status);
            match next.previous_delay {
                None => M::of(Trampoline::Land(value)),
                Some(delay) => M::delay(delay, M::of(Trampoline::Bounce(next))),
            }
        })
    })
}

/// The retry engine expressed as plain recursion through [`Monad::chain`].
///
/// Same decisions as [`retrying`], but every retry nests one more `chain`
/// inside the previous one. Lazy hosts then grow the stack with each retry,
/// so this variant is only suitable for small retry counts, or for kinds
/// that have no [`TailRec`] instance.
pub fn retrying_recursive<M, A, Act, Chk>(policy: RetryPolicy, action: Act, check: Chk) -> M::Of<A>
where
    M: Monad + Delay,
    A: Send + 'static,
    Act: Fn(RetryStatus) -> M::Of<A> + Send + Sync + 'static,
    Chk: Fn(&A) -> bool + Send + Sync + 'static,
{
    let round = Arc::new(Round {
        policy,
        action,
        check,
    });
    attempt::<M, A, Act, Chk>(round, RetryStatus::default())
}

struct Round<Act, Chk> {
    policy: RetryPolicy,
    action: Act,
    check: Chk,
}

fn attempt<M, A, Act, Chk>(round: Arc<Round<Act, Chk>>, status: RetryStatus) -> M::Of<A>
where
    M: Monad + Delay,
    A: Send + 'static,
    Act: Fn(RetryStatus) -> M::Of<A> + Send + Sync + 'static,
    Chk: Fn(&A) -> bool + Send + Sync + 'static,
{
    let ma = (round.action)(status);
    M::chain(ma, move |value: A| {
        if !(round.check)(&value) {
            return M::of(value);
        }
        let next = apply_policy(&round.policy, status);
        match next.previous_delay {
            None => M::of(value),
            Some(delay) => M::chain(M::delay(delay, M::of(())), move |()| {
                attempt::<M, A, Act, Chk>(round, next)
            }),
        }
    })
}
