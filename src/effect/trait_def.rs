//! Effect trait definition.
//!
//! An `Effect` is a deferred computation that reads an environment, may
//! perform async I/O and may fail: the Reader + IO + Result stack in one trait.
//!
//! Like `Future` and `Iterator`, combinators return concrete types and
//! `.boxed()` erases them when needed.

use std::future::Future;

/// A computation that depends on an environment, may perform async I/O and
/// may fail.
///
/// # Type Parameters
///
/// * `Output` - The success type produced by this effect
/// * `Error` - The error type that may be produced
/// * `Env` - The environment type required to run this effect
///
/// `Env` must be `Clone` so that boxing can move an owned copy into a
/// `'static` future. Keep it cheap to clone by holding services behind `Arc`.
///
/// # Example
///
/// ```rust
/// use tidewater::effect::prelude::*;
///
/// #[derive(Clone)]
/// struct Env {
///     base_url: String,
/// }
///
/// fn endpoint(path: &'static str) -> impl Effect<Output = String, Error = String, Env = Env> {
///     asks(move |env: &Env| format!("{}/{}", env.base_url, path))
/// }
///
/// # tokio_test::block_on(async {
/// let env = Env { base_url: "https://api.example.com".into() };
/// assert_eq!(endpoint("users").execute(&env).await, Ok("https://api.example.com/users".into()));
/// # });
/// ```
pub trait Effect: Sized + Send {
    /// The success type produced by this effect.
    type Output: Send;

    /// The error type that may be produced.
    type Error: Send;

    /// The environment type required to run this effect.
    type Env: Clone + Send + Sync;

    /// Execute this effect with the given environment.
    fn run(self, env: &Self::Env)
        -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;
}
