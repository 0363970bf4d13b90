//! Pure - a value lifted into an effect.

use std::marker::PhantomData;

use crate::effect::trait_def::Effect;

/// An effect that succeeds with a value it already holds.
///
/// Created by [`pure`](crate::effect::pure). Reads nothing from the
/// environment and performs no I/O.
#[derive(Debug, Clone)]
pub struct Pure<T, E, Env> {
    value: T,
    _phantom: PhantomData<(E, Env)>,
}

impl<T, E, Env> Pure<T, E, Env> {
    /// Wrap `value`.
    pub fn new(value: T) -> Self {
        Pure {
            value,
            _phantom: PhantomData,
        }
    }
}

impl<T, E, Env> Effect for Pure<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(self, _env: &Env) -> Result<T, E> {
        Ok(self.value)
    }
}
