//! Environment access for effects.
//!
//! - [`Ask`] yields a clone of the whole environment.
//! - [`Asks`] projects a value out of it.
//! - [`Local`] runs an effect against a derived environment.

use std::future::Future;
use std::marker::PhantomData;

use crate::effect::trait_def::Effect;

/// Yields a clone of the environment.
///
/// Created by [`ask`](crate::effect::ask).
pub struct Ask<E, Env> {
    _phantom: PhantomData<(E, Env)>,
}

impl<E, Env> std::fmt::Debug for Ask<E, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ask").finish()
    }
}

impl<E, Env> Ask<E, Env> {
    /// Create the effect.
    pub fn new() -> Self {
        Ask {
            _phantom: PhantomData,
        }
    }
}

impl<E, Env> Default for Ask<E, Env> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, Env> Effect for Ask<E, Env>
where
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = Env;
    type Error = E;
    type Env = Env;

    fn run(self, env: &Env) -> impl Future<Output = Result<Env, E>> + Send {
        let env = env.clone();
        async move { Ok(env) }
    }
}

/// Projects a value out of the environment.
///
/// Created by [`asks`](crate::effect::asks).
pub struct Asks<F, E, Env> {
    pub(crate) f: F,
    _phantom: PhantomData<(E, Env)>,
}

impl<F, E, Env> std::fmt::Debug for Asks<F, E, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Asks").field("f", &"<function>").finish()
    }
}

impl<F, E, Env> Asks<F, E, Env> {
    /// Wrap the projection.
    pub fn new(f: F) -> Self {
        Asks {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<F, U, E, Env> Effect for Asks<F, E, Env>
where
    F: FnOnce(&Env) -> U + Send,
    U: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = U;
    type Error = E;
    type Env = Env;

    async fn run(self, env: &Env) -> Result<U, E> {
        Ok((self.f)(env))
    }
}

/// Runs an inner effect against an environment derived from the outer one.
///
/// Created by [`local`](crate::effect::local) and
/// [`EffectExt::local`](crate::effect::EffectExt::local).
pub struct Local<Inner, F, Outer> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
    _phantom: PhantomData<Outer>,
}

impl<Inner, F, Outer> std::fmt::Debug for Local<Inner, F, Outer> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Local")
            .field("inner", &"<effect>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, Outer> Local<Inner, F, Outer> {
    /// Pair `inner` with the environment mapping `f`.
    pub fn new(inner: Inner, f: F) -> Self {
        Local {
            inner,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<Inner, F, Outer> Effect for Local<Inner, F, Outer>
where
    Inner: Effect,
    F: FnOnce(&Outer) -> Inner::Env + Send,
    Outer: Clone + Send + Sync,
{
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = Outer;

    fn run(
        self,
        env: &Outer,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        let Local { inner, f, .. } = self;
        let inner_env = f(env);
        async move { inner.run(&inner_env).await }
    }
}
