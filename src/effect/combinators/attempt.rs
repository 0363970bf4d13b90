//! Attempt - move the error channel into the success value.

use std::convert::Infallible;

use crate::effect::trait_def::Effect;

/// Returned by [`EffectExt::attempt`](crate::effect::EffectExt::attempt).
///
/// Never fails: the inner outcome, success or error, becomes the output.
pub struct Attempt<Inner> {
    pub(crate) inner: Inner,
}

impl<Inner> std::fmt::Debug for Attempt<Inner> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attempt")
            .field("inner", &"<effect>")
            .finish()
    }
}

impl<Inner> Effect for Attempt<Inner>
where
    Inner: Effect,
{
    type Output = Result<Inner::Output, Inner::Error>;
    type Error = Infallible;
    type Env = Inner::Env;

    async fn run(self, env: &Self::Env) -> Result<Self::Output, Infallible> {
        Ok(self.inner.run(env).await)
    }
}
