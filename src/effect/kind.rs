//! The effect host as a [`Kind`].
//!
//! [`ReaderIOKind<Env>`] names "an async computation reading `Env` that
//! cannot fail". The fallible effect is carried on top of it by
//! materializing errors with [`EffectExt::attempt`], which is how the retry
//! facade lets the generic engine inspect failures.

use std::convert::Infallible;
use std::marker::PhantomData;
#[cfg(feature = "async")]
use std::time::Duration;

use crate::effect::boxed::BoxedEffect;
use crate::effect::constructors::{from_async, pure};
use crate::effect::ext::EffectExt;
use crate::effect::trait_def::Effect;
#[cfg(feature = "async")]
use crate::kind::Delay;
use crate::kind::{Kind, Monad, TailRec};
use crate::tailrec::Trampoline;

/// Kind marker whose `Of<A>` is `BoxedEffect<A, Infallible, Env>`.
pub struct ReaderIOKind<Env> {
    _env: PhantomData<fn() -> Env>,
}

impl<Env> std::fmt::Debug for ReaderIOKind<Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ReaderIOKind")
    }
}

impl<Env> Kind for ReaderIOKind<Env>
where
    Env: Clone + Send + Sync + 'static,
{
    type Of<A: Send + 'static> = BoxedEffect<A, Infallible, Env>;
}

impl<Env> Monad for ReaderIOKind<Env>
where
    Env: Clone + Send + Sync + 'static,
{
    fn of<A>(value: A) -> BoxedEffect<A, Infallible, Env>
    where
        A: Send + 'static,
    {
        pure(value).boxed()
    }

    fn chain<A, B, F>(ma: BoxedEffect<A, Infallible, Env>, f: F) -> BoxedEffect<B, Infallible, Env>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> BoxedEffect<B, Infallible, Env> + Send + 'static,
    {
        ma.and_then(f).boxed()
    }
}

impl<Env> TailRec for ReaderIOKind<Env>
where
    Env: Clone + Send + Sync + 'static,
{
    /// Awaits each step in a loop, so neither the call stack nor the future
    /// nesting grows with the number of bounces.
    fn tail_rec<A, B, F>(initial: A, step: F) -> BoxedEffect<B, Infallible, Env>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> BoxedEffect<Trampoline<A, B>, Infallible, Env> + Send + Sync + 'static,
    {
        from_async(move |env: &Env| {
            let env = env.clone();
            async move {
                let mut state = initial;
                loop {
                    match step(state).run(&env).await {
                        Ok(Trampoline::Bounce(next)) => state = next,
                        Ok(Trampoline::Land(done)) => return Ok::<B, Infallible>(done),
                        Err(never) => match never {},
                    }
                }
            }
        })
        .boxed()
    }
}

#[cfg(feature = "async")]
impl<Env> Delay for ReaderIOKind<Env>
where
    Env: Clone + Send + Sync + 'static,
{
    /// Sleeps on the tokio timer (skipped when zero).
    fn delay<A>(
        duration: Duration,
        ma: BoxedEffect<A, Infallible, Env>,
    ) -> BoxedEffect<A, Infallible, Env>
    where
        A: Send + 'static,
    {
        from_async(move |env: &Env| {
            let env = env.clone();
            async move {
                if !duration.is_zero() {
                    tokio::time::sleep(duration).await;
                }
                ma.run(&env).await
            }
        })
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::constructors::asks;

    type R = ReaderIOKind<i32>;

    #[tokio::test]
    async fn test_of_and_chain_read_environment() {
        let effect = R::chain(R::of(2), |x| {
            asks::<_, Infallible, i32, _>(move |env: &i32| x * env).boxed()
        });
        assert_eq!(effect.execute(&21).await, Ok(42));
    }

    #[tokio::test]
    async fn test_map_default() {
        let effect = R::map(R::of("abc"), str::len);
        assert_eq!(effect.execute(&0).await, Ok(3));
    }

    #[tokio::test]
    async fn test_tail_rec_many_bounces() {
        let effect = R::tail_rec(0u64, |n| {
            R::of(if n < 200_000 {
                Trampoline::Bounce(n + 1)
            } else {
                Trampoline::Land(n)
            })
        });
        assert_eq!(effect.execute(&0).await, Ok(200_000));
    }

    #[cfg(feature = "async")]
    #[tokio::test(start_paused = true)]
    async fn test_delay_waits_before_running() {
        let start = tokio::time::Instant::now();
        let effect = R::delay(std::time::Duration::from_millis(250), R::of(1));
        assert_eq!(effect.execute(&0).await, Ok(1));
        assert!(start.elapsed() >= std::time::Duration::from_millis(250));
    }
}
