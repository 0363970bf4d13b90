//! Combinator methods available on every [`Effect`].
//!
//! [`EffectExt`] is blanket-implemented; bring it into scope (the prelude
//! does) and chain.

use crate::effect::boxed::BoxedEffect;
use crate::effect::combinators::{AndThen, Attempt, Bind, Let, Map, MapErr};
use crate::effect::reader::Local;
use crate::effect::trait_def::Effect;
use crate::lens::Lens;

/// Extension methods for all effects.
///
/// # Example
///
/// ```rust
/// use tidewater::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = pure::<_, String, ()>(21)
///     .map(|x| x * 2)
///     .and_then(|x| pure(x + 1))
///     .map_err(|e| format!("failed: {e}"));
///
/// assert_eq!(effect.execute(&()).await, Ok(43));
/// # });
/// ```
pub trait EffectExt: Effect {
    /// Transform the success value.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnOnce(Self::Output) -> U + Send,
        U: Send,
    {
        Map { inner: self, f }
    }

    /// Transform the error value.
    fn map_err<E2, F>(self, f: F) -> MapErr<Self, F>
    where
        F: FnOnce(Self::Error) -> E2 + Send,
        E2: Send,
    {
        MapErr { inner: self, f }
    }

    /// Run a second effect built from this one's output.
    ///
    /// The first error short-circuits.
    fn and_then<E2, F>(self, f: F) -> AndThen<Self, F>
    where
        E2: Effect<Error = Self::Error, Env = Self::Env>,
        F: FnOnce(Self::Output) -> E2 + Send,
    {
        AndThen { inner: self, f }
    }

    /// Run this effect against an environment derived from `Outer`.
    fn local<F, Outer>(self, f: F) -> Local<Self, F, Outer>
    where
        F: FnOnce(&Outer) -> Self::Env + Send,
        Outer: Clone + Send + Sync,
    {
        Local::new(self, f)
    }

    /// Materialize the outcome: the result never fails and yields
    /// `Result<Output, Error>`.
    ///
    /// ```rust
    /// use tidewater::effect::prelude::*;
    ///
    /// # tokio_test::block_on(async {
    /// let outcome = fail::<i32, _, ()>("nope").attempt().execute(&()).await;
    /// assert_eq!(outcome, Ok(Err("nope")));
    /// # });
    /// ```
    fn attempt(self) -> Attempt<Self> {
        Attempt { inner: self }
    }

    /// Compute a field from the current state with an effect and store it
    /// with `set`.
    ///
    /// ```rust
    /// use tidewater::effect::prelude::*;
    ///
    /// #[derive(Clone, Debug, Default, PartialEq)]
    /// struct Order { id: u32, total: u32 }
    ///
    /// # tokio_test::block_on(async {
    /// let order = pure::<_, String, ()>(Order { id: 7, ..Order::default() })
    ///     .bind(|o, total| Order { total, ..o }, |o| pure(o.id * 100));
    /// assert_eq!(order.execute(&()).await, Ok(Order { id: 7, total: 700 }));
    /// # });
    /// ```
    fn bind<B, E2, Set, F>(self, set: Set, f: F) -> Bind<Self, Set, F>
    where
        E2: Effect<Output = B, Error = Self::Error, Env = Self::Env>,
        F: FnOnce(&Self::Output) -> E2 + Send,
        Set: FnOnce(Self::Output, B) -> Self::Output + Send,
    {
        Bind { inner: self, set, f }
    }

    /// Compute a field from the current state purely and store it with `set`.
    fn let_<B, Set, F>(self, set: Set, f: F) -> Let<Self, Set, F>
    where
        F: FnOnce(&Self::Output) -> B + Send,
        Set: FnOnce(Self::Output, B) -> Self::Output + Send,
        B: Send,
    {
        Let { inner: self, set, f }
    }

    /// [`bind`](EffectExt::bind) with the setter taken from a lens.
    #[allow(clippy::type_complexity)]
    fn bind_l<B, E2, F>(
        self,
        lens: Lens<Self::Output, B>,
        f: F,
    ) -> Bind<Self, Box<dyn FnOnce(Self::Output, B) -> Self::Output + Send>, F>
    where
        Self::Output: 'static,
        B: 'static,
        E2: Effect<Output = B, Error = Self::Error, Env = Self::Env>,
        F: FnOnce(&Self::Output) -> E2 + Send,
    {
        Bind {
            inner: self,
            set: Box::new(move |state, value| lens.set(state, value)),
            f,
        }
    }

    /// [`let_`](EffectExt::let_) with the setter taken from a lens.
    #[allow(clippy::type_complexity)]
    fn let_l<B, F>(
        self,
        lens: Lens<Self::Output, B>,
        f: F,
    ) -> Let<Self, Box<dyn FnOnce(Self::Output, B) -> Self::Output + Send>, F>
    where
        Self::Output: 'static,
        B: Send + 'static,
        F: FnOnce(&Self::Output) -> B + Send,
    {
        Let {
            inner: self,
            set: Box::new(move |state, value| lens.set(state, value)),
            f,
        }
    }

    /// Erase the concrete type.
    ///
    /// Needed to store effects in collections, to return different
    /// effects from match arms, and to recurse.
    fn boxed(self) -> BoxedEffect<Self::Output, Self::Error, Self::Env>
    where
        Self: 'static,
        Self::Output: 'static,
        Self::Error: 'static,
        Self::Env: 'static,
    {
        BoxedEffect::new(self)
    }

    /// Run the effect and await its result.
    #[allow(async_fn_in_trait)]
    async fn execute(self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        self.run(env).await
    }
}

impl<E: Effect> EffectExt for E {}
