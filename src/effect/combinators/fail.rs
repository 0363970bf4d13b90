//! Fail - an error lifted into an effect.

use std::marker::PhantomData;

use crate::effect::trait_def::Effect;

/// An effect that fails with an error it already holds.
///
/// Created by [`fail`](crate::effect::fail).
#[derive(Debug, Clone)]
pub struct Fail<T, E, Env> {
    error: E,
    _phantom: PhantomData<(T, Env)>,
}

impl<T, E, Env> Fail<T, E, Env> {
    /// Wrap `error`.
    pub fn new(error: E) -> Self {
        Fail {
            error,
            _phantom: PhantomData,
        }
    }
}

impl<T, E, Env> Effect for Fail<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(self, _env: &Env) -> Result<T, E> {
        Err(self.error)
    }
}
