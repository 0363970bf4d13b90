//! Spans around effects.
//!
//! Available with the `tracing` feature.

use crate::effect::trait_def::Effect;

/// An effect that runs inside a [`tracing::Span`].
///
/// Created by [`EffectTracingExt::instrument`].
#[derive(Debug)]
pub struct Instrument<E> {
    pub(crate) inner: E,
    pub(crate) span: tracing::Span,
}

impl<E> Effect for Instrument<E>
where
    E: Effect,
{
    type Output = E::Output;
    type Error = E::Error;
    type Env = E::Env;

    async fn run(self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        use tracing::Instrument as _;
        self.inner.run(env).instrument(self.span).await
    }
}

/// Adds [`instrument`](EffectTracingExt::instrument) to every effect.
pub trait EffectTracingExt: Effect {
    /// Enter `span` whenever this effect is polled.
    ///
    /// ```rust
    /// use tidewater::effect::prelude::*;
    /// use tracing::info_span;
    ///
    /// # tokio_test::block_on(async {
    /// let effect = pure::<_, String, ()>(42).instrument(info_span!("load_config"));
    /// assert_eq!(effect.execute(&()).await, Ok(42));
    /// # });
    /// ```
    fn instrument(self, span: tracing::Span) -> Instrument<Self> {
        Instrument { inner: self, span }
    }
}

impl<E: Effect> EffectTracingExt for E {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::compat::RunStandalone;
    use crate::effect::constructors::{fail, pure};
    use crate::effect::ext::EffectExt;
    use tracing_test::traced_test;

    #[tokio::test]
    async fn test_value_passes_through_span() {
        let effect = pure::<_, String, ()>(42).instrument(tracing::info_span!("value"));
        assert_eq!(effect.run_standalone().await, Ok(42));
    }

    #[tokio::test]
    async fn test_error_passes_through_span() {
        let effect =
            fail::<i32, _, ()>("oops".to_string()).instrument(tracing::info_span!("failing"));
        assert_eq!(effect.run_standalone().await, Err("oops".to_string()));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_events_carry_span_name() {
        let effect = pure::<_, String, ()>(5)
            .map(|x| {
                tracing::info!(x, "doubling");
                x * 2
            })
            .instrument(tracing::info_span!("compute"));

        assert_eq!(effect.run_standalone().await, Ok(10));
        assert!(logs_contain("compute"));
        assert!(logs_contain("doubling"));
    }
}
