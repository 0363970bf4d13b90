//! Retrying effects.
//!
//! The facade runs the generic engine over [`ReaderIOKind`]. Each attempt's
//! outcome is materialized with [`EffectExt::attempt`] so `check` can look at
//! failures as values, and the final `Result` is put back into the error
//! channel afterwards. When the policy gives up, the last outcome is what the
//! effect produces: the last error, or the last value `check` rejected.
//!
//! With the `tracing` feature each retry and each exhaustion is reported as a
//! `DEBUG` event.

use std::convert::Infallible;
use std::sync::Arc;

use crate::effect::boxed::BoxedEffect;
use crate::effect::constructors::from_result;
use crate::effect::ext::EffectExt;
use crate::effect::kind::ReaderIOKind;
use crate::effect::trait_def::Effect;
use crate::retry::{generic, RetryPolicy, RetryStatus};

/// Retry the effect built by `action` while `check` asks for it.
///
/// `action` is called once per attempt with the current [`RetryStatus`] and
/// must build a fresh effect each time. Delays suspend on the tokio timer, so
/// dropping the returned effect (or wrapping it in
/// [`with_timeout`](crate::effect::with_timeout)) cancels the loop.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use tidewater::effect::prelude::*;
/// use tidewater::retry::RetryPolicy;
///
/// # tokio_test::block_on(async {
/// // Poll until the job reports completion.
/// let effect = retrying(
///     RetryPolicy::constant_delay(Duration::from_millis(1)).with_max_retries(10),
///     |status| pure::<_, String, ()>(status.iter_number >= 2),
///     |done: &Result<bool, String>| matches!(done, Ok(false)),
/// );
/// assert_eq!(effect.execute(&()).await, Ok(true));
/// # });
/// ```
pub fn retrying<T, E, Env, Act, Eff, Chk>(
    policy: RetryPolicy,
    action: Act,
    check: Chk,
) -> BoxedEffect<T, E, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
    Act: Fn(RetryStatus) -> Eff + Send + Sync + 'static,
    Eff: Effect<Output = T, Error = E, Env = Env> + 'static,
    Chk: Fn(&Result<T, E>) -> bool + Send + Sync + 'static,
{
    let check = Arc::new(check);
    let engine_check = Arc::clone(&check);

    let attempts = generic::retrying::<ReaderIOKind<Env>, Result<T, E>, _, _>(
        policy,
        move |status: RetryStatus| {
            #[cfg(feature = "tracing")]
            log_retry(&status);
            action(status).attempt().boxed()
        },
        move |outcome: &Result<T, E>| engine_check(outcome),
    );

    attempts
        .map_err(|never: Infallible| match never {})
        .and_then(move |outcome: Result<T, E>| {
            #[cfg(feature = "tracing")]
            if check(&outcome) {
                tracing::debug!("retry policy exhausted");
            }
            from_result(outcome)
        })
        .boxed()
}

/// Reports a retry; the first attempt is not one.
#[cfg(feature = "tracing")]
pub(crate) fn log_retry(status: &RetryStatus) {
    if !status.is_first_attempt() {
        tracing::debug!(
            attempt = status.iter_number.saturating_add(1),
            delay = ?status.previous_delay,
            cumulative_delay = ?status.cumulative_delay,
            "retrying effect"
        );
    }
}

/// Retry the effect built by `action` for as long as it fails.
///
/// ```rust
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
/// use tidewater::effect::prelude::*;
/// use tidewater::retry::RetryPolicy;
///
/// # tokio_test::block_on(async {
/// let calls = Arc::new(AtomicU32::new(0));
/// let counter = calls.clone();
///
/// let effect = retrying_on_error(
///     RetryPolicy::exponential_backoff(Duration::from_millis(1)).with_max_retries(2),
///     move |_status| {
///         let n = counter.fetch_add(1, Ordering::SeqCst);
///         from_fn(move |_: &()| Err::<u32, _>(format!("failure {}", n + 1)))
///     },
/// );
///
/// assert_eq!(effect.execute(&()).await, Err("failure 3".to_string()));
/// assert_eq!(calls.load(Ordering::SeqCst), 3);
/// # });
/// ```
pub fn retrying_on_error<T, E, Env, Act, Eff>(
    policy: RetryPolicy,
    action: Act,
) -> BoxedEffect<T, E, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
    Act: Fn(RetryStatus) -> Eff + Send + Sync + 'static,
    Eff: Effect<Output = T, Error = E, Env = Env> + 'static,
{
    retrying(policy, action, Result::is_err)
}
