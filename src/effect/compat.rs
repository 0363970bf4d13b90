//! Running effects that need no environment.

use crate::effect::trait_def::Effect;

/// Run effects whose environment is `()`.
///
/// ```rust
/// use tidewater::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// assert_eq!(pure::<_, String, ()>(1).run_standalone().await, Ok(1));
/// # });
/// ```
#[allow(async_fn_in_trait)]
pub trait RunStandalone: Effect<Env = ()> {
    /// Run with the unit environment.
    async fn run_standalone(self) -> Result<Self::Output, Self::Error>;
}

impl<E: Effect<Env = ()>> RunStandalone for E {
    async fn run_standalone(self) -> Result<Self::Output, Self::Error> {
        self.run(&()).await
    }
}
