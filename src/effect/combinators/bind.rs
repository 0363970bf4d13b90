//! Bind and Let - accumulate results into a state value.
//!
//! These are the building blocks of do-style pipelines: the current output
//! is a record, each step computes one more field from it and a setter
//! writes that field back.

use crate::effect::trait_def::Effect;

/// Returned by [`EffectExt::bind`](crate::effect::EffectExt::bind) and
/// [`EffectExt::bind_l`](crate::effect::EffectExt::bind_l).
///
/// Runs the effect produced by `f` from the current state and stores its
/// output with `set`.
pub struct Bind<Inner, Set, F> {
    pub(crate) inner: Inner,
    pub(crate) set: Set,
    pub(crate) f: F,
}

impl<Inner, Set, F> std::fmt::Debug for Bind<Inner, Set, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bind")
            .field("inner", &"<effect>")
            .field("set", &"<function>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, Set, F, Next> Effect for Bind<Inner, Set, F>
where
    Inner: Effect,
    Next: Effect<Error = Inner::Error, Env = Inner::Env>,
    F: FnOnce(&Inner::Output) -> Next + Send,
    Set: FnOnce(Inner::Output, Next::Output) -> Inner::Output + Send,
{
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let state = self.inner.run(env).await?;
        let field = (self.f)(&state).run(env).await?;
        Ok((self.set)(state, field))
    }
}

/// Returned by [`EffectExt::let_`](crate::effect::EffectExt::let_) and
/// [`EffectExt::let_l`](crate::effect::EffectExt::let_l).
///
/// Like [`Bind`] but the new field is computed purely.
pub struct Let<Inner, Set, F> {
    pub(crate) inner: Inner,
    pub(crate) set: Set,
    pub(crate) f: F,
}

impl<Inner, Set, F> std::fmt::Debug for Let<Inner, Set, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Let")
            .field("inner", &"<effect>")
            .field("set", &"<function>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, Set, F, B> Effect for Let<Inner, Set, F>
where
    Inner: Effect,
    F: FnOnce(&Inner::Output) -> B + Send,
    Set: FnOnce(Inner::Output, B) -> Inner::Output + Send,
    B: Send,
{
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let state = self.inner.run(env).await?;
        let field = (self.f)(&state);
        Ok((self.set)(state, field))
    }
}
