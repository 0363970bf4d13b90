//! FromResult - an already computed `Result` as an effect.

use std::marker::PhantomData;

use crate::effect::trait_def::Effect;

/// An effect that yields a stored `Result`.
///
/// Created by [`from_result`](crate::effect::from_result) and
/// [`from_option`](crate::effect::from_option).
pub struct FromResult<T, E, Env> {
    result: Result<T, E>,
    _phantom: PhantomData<Env>,
}

impl<T, E, Env> std::fmt::Debug for FromResult<T, E, Env>
where
    T: std::fmt::Debug,
    E: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromResult")
            .field("result", &self.result)
            .finish()
    }
}

impl<T, E, Env> FromResult<T, E, Env> {
    /// Wrap `result`.
    pub fn new(result: Result<T, E>) -> Self {
        FromResult {
            result,
            _phantom: PhantomData,
        }
    }
}

impl<T, E, Env> Effect for FromResult<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(self, _env: &Env) -> Result<T, E> {
        self.result
    }
}
