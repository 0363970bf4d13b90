//! Free functions that build effects.
//!
//! Each returns a concrete combinator type; nothing here allocates.

use std::future::Future;

use crate::effect::combinators::{Fail, FromAsync, FromFn, FromResult, Pure};
use crate::effect::reader::{Ask, Asks, Local};
use crate::effect::trait_def::Effect;

/// Succeed with `value`.
///
/// ```rust
/// use tidewater::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// assert_eq!(pure::<_, String, ()>(42).execute(&()).await, Ok(42));
/// # });
/// ```
pub fn pure<T, E, Env>(value: T) -> Pure<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    Pure::new(value)
}

/// Fail with `error`.
///
/// ```rust
/// use tidewater::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = fail::<i32, _, ()>("boom".to_string());
/// assert_eq!(effect.execute(&()).await, Err("boom".to_string()));
/// # });
/// ```
pub fn fail<T, E, Env>(error: E) -> Fail<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    Fail::new(error)
}

/// Build an effect from a synchronous function of the environment.
///
/// ```rust
/// use tidewater::effect::prelude::*;
///
/// #[derive(Clone)]
/// struct Env { value: i32 }
///
/// # tokio_test::block_on(async {
/// let effect = from_fn(|env: &Env| Ok::<_, String>(env.value * 2));
/// assert_eq!(effect.execute(&Env { value: 21 }).await, Ok(42));
/// # });
/// ```
pub fn from_fn<T, E, Env, F>(f: F) -> FromFn<F, Env>
where
    F: FnOnce(&Env) -> Result<T, E> + Send,
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    FromFn::new(f)
}

/// Build an effect from an async function of the environment.
///
/// The returned future may not borrow the environment; clone what it needs
/// before the `async` block.
///
/// ```rust
/// use tidewater::effect::prelude::*;
///
/// #[derive(Clone)]
/// struct Env { greeting: String }
///
/// # tokio_test::block_on(async {
/// let effect = from_async(|env: &Env| {
///     let greeting = env.greeting.clone();
///     async move { Ok::<_, String>(format!("{greeting}, world")) }
/// });
/// let env = Env { greeting: "hello".into() };
/// assert_eq!(effect.execute(&env).await, Ok("hello, world".to_string()));
/// # });
/// ```
pub fn from_async<T, E, Env, F, Fut>(f: F) -> FromAsync<F, Env>
where
    F: FnOnce(&Env) -> Fut + Send,
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    FromAsync::new(f)
}

/// Lift an already computed `Result`.
pub fn from_result<T, E, Env>(result: Result<T, E>) -> FromResult<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    FromResult::new(result)
}

/// Lift an `Option`, failing with `error()` when it is `None`.
///
/// ```rust
/// use tidewater::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let missing = from_option::<i32, _, (), _>(None, || "missing");
/// assert_eq!(missing.execute(&()).await, Err("missing"));
/// # });
/// ```
pub fn from_option<T, E, Env, F>(option: Option<T>, error: F) -> FromResult<T, E, Env>
where
    F: FnOnce() -> E,
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    FromResult::new(option.ok_or_else(error))
}

/// Yield a clone of the whole environment.
pub fn ask<E, Env>() -> Ask<E, Env>
where
    E: Send,
    Env: Clone + Send + Sync,
{
    Ask::new()
}

/// Project a value out of the environment.
///
/// ```rust
/// use tidewater::effect::prelude::*;
///
/// #[derive(Clone)]
/// struct Config { retries: u32 }
///
/// # tokio_test::block_on(async {
/// let effect = asks::<_, String, _, _>(|c: &Config| c.retries);
/// assert_eq!(effect.execute(&Config { retries: 3 }).await, Ok(3));
/// # });
/// ```
pub fn asks<U, E, Env, F>(f: F) -> Asks<F, E, Env>
where
    F: FnOnce(&Env) -> U + Send,
    U: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    Asks::new(f)
}

/// Run `inner` against an environment derived from the outer one.
///
/// ```rust
/// use tidewater::effect::prelude::*;
///
/// #[derive(Clone)]
/// struct App { db: Db }
/// #[derive(Clone)]
/// struct Db { url: String }
///
/// # tokio_test::block_on(async {
/// let url = asks::<_, String, Db, _>(|db: &Db| db.url.clone());
/// let effect = local(|app: &App| app.db.clone(), url);
/// let app = App { db: Db { url: "postgres://local".into() } };
/// assert_eq!(effect.execute(&app).await, Ok("postgres://local".to_string()));
/// # });
/// ```
pub fn local<Inner, F, Outer>(f: F, inner: Inner) -> Local<Inner, F, Outer>
where
    Inner: Effect,
    F: FnOnce(&Outer) -> Inner::Env + Send,
    Outer: Clone + Send + Sync,
{
    Local::new(inner, f)
}
