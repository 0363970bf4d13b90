//! Deadlines for effects.
//!
//! Dropping a running effect cancels it at its next suspension point, so a
//! deadline also bounds a retry loop: the pending sleep or attempt is
//! dropped when time runs out.

use std::time::Duration;

use crate::effect::boxed::BoxedEffect;
use crate::effect::constructors::from_async;
use crate::effect::ext::EffectExt;
use crate::effect::trait_def::Effect;

/// Error of an effect run under [`with_timeout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeoutError<E> {
    /// The deadline passed before the effect finished.
    Timeout {
        /// The deadline that was exceeded.
        duration: Duration,
    },
    /// The effect failed on its own before the deadline.
    Inner(E),
}

impl<E> TimeoutError<E> {
    /// Returns true if the deadline was hit.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// The effect's own error, if that is what happened.
    pub fn into_inner(self) -> Option<E> {
        match self {
            Self::Inner(e) => Some(e),
            Self::Timeout { .. } => None,
        }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TimeoutError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout { duration } => write!(f, "timed out after {:?}", duration),
            Self::Inner(e) => write!(f, "{}", e),
        }
    }
}

impl<E> std::error::Error for TimeoutError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Timeout { .. } => None,
            Self::Inner(e) => Some(e),
        }
    }
}

/// Fail with [`TimeoutError::Timeout`] if `effect` does not finish within
/// `duration`.
///
/// ```rust
/// use std::time::Duration;
/// use tidewater::effect::prelude::*;
/// use tidewater::effect::TimeoutError;
///
/// # tokio_test::block_on(async {
/// let slow = from_async(|_: &()| async {
///     tokio::time::sleep(Duration::from_secs(10)).await;
///     Ok::<_, String>(42)
/// });
///
/// let result = with_timeout(slow, Duration::from_millis(10)).execute(&()).await;
/// assert_eq!(result, Err(TimeoutError::Timeout { duration: Duration::from_millis(10) }));
/// # });
/// ```
pub fn with_timeout<T, E, Env, Eff>(
    effect: Eff,
    duration: Duration,
) -> BoxedEffect<T, TimeoutError<E>, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
    Eff: Effect<Output = T, Error = E, Env = Env> + 'static,
{
    from_async(move |env: &Env| {
        let env = env.clone();
        async move {
            match tokio::time::timeout(duration, effect.run(&env)).await {
                Ok(result) => result.map_err(TimeoutError::Inner),
                Err(_elapsed) => Err(TimeoutError::Timeout { duration }),
            }
        }
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::constructors::{fail, pure};

    #[tokio::test]
    async fn test_finishes_in_time() {
        let effect = with_timeout(pure::<_, String, ()>(42), Duration::from_secs(1));
        assert_eq!(effect.execute(&()).await, Ok(42));
    }

    #[tokio::test]
    async fn test_inner_error_is_wrapped() {
        let effect = with_timeout(fail::<i32, _, ()>("bad".to_string()), Duration::from_secs(1));
        let error = effect.execute(&()).await.unwrap_err();
        assert!(!error.is_timeout());
        assert_eq!(error.into_inner(), Some("bad".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_exceeded() {
        let slow = from_async(|_: &()| async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<_, String>(1)
        });
        let error = with_timeout(slow, Duration::from_secs(5))
            .execute(&())
            .await
            .unwrap_err();
        assert!(error.is_timeout());
        assert_eq!(error.to_string(), "timed out after 5s");
    }
}
