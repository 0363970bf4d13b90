//! Retry policies and their monoid.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::monoid::Monoid;
use crate::retry::status::RetryStatus;
use crate::semigroup::Semigroup;

type DecideFn = dyn Fn(&RetryStatus) -> Option<Duration> + Send + Sync;

/// A retry policy: a pure decision from retry progress to an optional delay.
///
/// `Some(d)` means "wait `d`, then try again"; `None` means "stop". Policies
/// hold no state, so the same status always yields the same decision. They
/// are cheap to clone (one `Arc`).
///
/// # Composition
///
/// Policies form a [`Monoid`]. [`Semigroup::combine`] asks both policies about
/// the same status: if either stops, the combination stops; otherwise the
/// longer delay wins. [`Monoid::empty`] never stops and never waits.
///
/// Most building blocks never stop on their own (`constant_delay`,
/// `exponential_backoff`, ...) and need a terminating policy such as
/// [`RetryPolicy::limit_retries`] combined in.
///
/// # Examples
///
/// ```rust
/// use tidewater::retry::{RetryPolicy, RetryStatus};
/// use tidewater::Semigroup;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::limit_retries(3)
///     .combine(RetryPolicy::constant_delay(Duration::from_millis(500)));
///
/// let first = RetryStatus::default();
/// assert_eq!(policy.decide(&first), Some(Duration::from_millis(500)));
///
/// let exhausted = RetryStatus { iter_number: 3, ..RetryStatus::default() };
/// assert_eq!(policy.decide(&exhausted), None);
/// ```
#[derive(Clone)]
pub struct RetryPolicy {
    decide: Arc<DecideFn>,
    label: Arc<str>,
}

impl fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("label", &self.label)
            .field("decide", &"<function>")
            .finish()
    }
}

impl fmt::Display for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl RetryPolicy {
    /// Create a policy from a decision function.
    ///
    /// The function must be pure: the retry engine may consult it any number
    /// of times for the same status.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tidewater::retry::{RetryPolicy, RetryStatus};
    /// use std::time::Duration;
    ///
    /// // Retry quickly at first, then slow down
    /// let policy = RetryPolicy::from_fn(|status| match status.iter_number {
    ///     0..=2 => Some(Duration::from_millis(10)),
    ///     3..=5 => Some(Duration::from_secs(1)),
    ///     _ => None,
    /// });
    ///
    /// assert_eq!(policy.decide(&RetryStatus::default()), Some(Duration::from_millis(10)));
    /// ```
    pub fn from_fn<F>(decide: F) -> Self
    where
        F: Fn(&RetryStatus) -> Option<Duration> + Send + Sync + 'static,
    {
        Self::labelled("from_fn", decide)
    }

    fn labelled<F>(label: impl Into<Arc<str>>, decide: F) -> Self
    where
        F: Fn(&RetryStatus) -> Option<Duration> + Send + Sync + 'static,
    {
        RetryPolicy {
            decide: Arc::new(decide),
            label: label.into(),
        }
    }

    /// Consult the policy: `Some(delay)` to retry after `delay`, `None` to stop.
    pub fn decide(&self, status: &RetryStatus) -> Option<Duration> {
        (self.decide)(status)
    }

    /// Human-readable description of how the policy was built.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Allow `n` retries (so `n + 1` attempts in total), without delay.
    ///
    /// Returns `Some(Duration::ZERO)` while `iter_number < n`, `None` after.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tidewater::retry::{RetryPolicy, RetryStatus};
    /// use std::time::Duration;
    ///
    /// let policy = RetryPolicy::limit_retries(2);
    /// let at = |n| RetryStatus { iter_number: n, ..RetryStatus::default() };
    ///
    /// assert_eq!(policy.decide(&at(0)), Some(Duration::ZERO));
    /// assert_eq!(policy.decide(&at(1)), Some(Duration::ZERO));
    /// assert_eq!(policy.decide(&at(2)), None);
    /// ```
    pub fn limit_retries(n: u32) -> Self {
        Self::labelled(format!("limit_retries({n})"), move |status| {
            (status.iter_number < n).then_some(Duration::ZERO)
        })
    }

    /// Always wait `delay`. Never stops on its own.
    pub fn constant_delay(delay: Duration) -> Self {
        Self::labelled(format!("constant_delay({delay:?})"), move |_| Some(delay))
    }

    /// Wait `base * 2^iter_number`. Never stops on its own.
    ///
    /// Exact whenever the product fits in a `Duration`; only a product that
    /// does not fit saturates at `Duration::MAX`. Combine with
    /// [`RetryPolicy::cap_delay`] to keep delays realistic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tidewater::retry::{RetryPolicy, RetryStatus};
    /// use std::time::Duration;
    ///
    /// let policy = RetryPolicy::exponential_backoff(Duration::from_millis(100));
    /// let at = |n| RetryStatus { iter_number: n, ..RetryStatus::default() };
    ///
    /// assert_eq!(policy.decide(&at(0)), Some(Duration::from_millis(100)));
    /// assert_eq!(policy.decide(&at(3)), Some(Duration::from_millis(800)));
    /// assert_eq!(policy.decide(&at(40)), Some(Duration::from_millis(100 << 40)));
    /// assert_eq!(policy.decide(&at(128)), Some(Duration::MAX));
    /// ```
    pub fn exponential_backoff(base: Duration) -> Self {
        Self::labelled(format!("exponential_backoff({base:?})"), move |status| {
            Some(exponential(base, status.iter_number))
        })
    }

    /// Wait `base * (iter_number + 1)`, saturating. Never stops on its own.
    pub fn linear_backoff(base: Duration) -> Self {
        Self::labelled(format!("linear_backoff({base:?})"), move |status| {
            let factor = status.iter_number.saturating_add(1);
            Some(base.checked_mul(factor).unwrap_or(Duration::MAX))
        })
    }

    /// Wait `base * fib(iter_number + 1)`: 1, 1, 2, 3, 5, ... times `base`.
    /// Saturating. Never stops on its own.
    pub fn fibonacci_backoff(base: Duration) -> Self {
        Self::labelled(format!("fibonacci_backoff({base:?})"), move |status| {
            let factor = fibonacci(status.iter_number.saturating_add(1));
            Some(base.checked_mul(factor).unwrap_or(Duration::MAX))
        })
    }

    /// Clamp the delays of `policy` to at most `max`.
    ///
    /// `None` decisions pass through: capping never changes when a policy stops.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tidewater::retry::{RetryPolicy, RetryStatus};
    /// use std::time::Duration;
    ///
    /// let policy = RetryPolicy::cap_delay(
    ///     Duration::from_secs(1),
    ///     RetryPolicy::exponential_backoff(Duration::from_millis(100)),
    /// );
    /// let at = |n| RetryStatus { iter_number: n, ..RetryStatus::default() };
    ///
    /// assert_eq!(policy.decide(&at(2)), Some(Duration::from_millis(400)));
    /// assert_eq!(policy.decide(&at(4)), Some(Duration::from_secs(1)));
    /// ```
    pub fn cap_delay(max: Duration, policy: RetryPolicy) -> Self {
        let label = format!("cap_delay({max:?}, {})", policy.label);
        Self::labelled(label, move |status| {
            policy.decide(status).map(|delay| delay.min(max))
        })
    }

    /// Stop once the total time spent waiting would exceed `limit`.
    ///
    /// Delegates to `policy`; a decision that would push `cumulative_delay`
    /// past `limit` becomes `None`.
    pub fn limit_cumulative_delay(limit: Duration, policy: RetryPolicy) -> Self {
        let label = format!("limit_cumulative_delay({limit:?}, {})", policy.label);
        Self::labelled(label, move |status| {
            let delay = policy.decide(status)?;
            (status.cumulative_delay.saturating_add(delay) <= limit).then_some(delay)
        })
    }

    /// Combine with [`RetryPolicy::limit_retries`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tidewater::retry::RetryPolicy;
    /// use std::time::Duration;
    ///
    /// let policy = RetryPolicy::exponential_backoff(Duration::from_millis(100))
    ///     .with_max_retries(5)
    ///     .with_max_delay(Duration::from_secs(2));
    ///
    /// assert_eq!(
    ///     policy.label(),
    ///     "cap_delay(2s, exponential_backoff(100ms) <> limit_retries(5))"
    /// );
    /// ```
    pub fn with_max_retries(self, n: u32) -> Self {
        self.combine(Self::limit_retries(n))
    }

    /// Cap every delay at `max`. See [`RetryPolicy::cap_delay`].
    pub fn with_max_delay(self, max: Duration) -> Self {
        Self::cap_delay(max, self)
    }

    /// Full jitter: replace each delay `d` with a uniform random value in `[0, d]`.
    ///
    /// The random source is seeded from `seed` and the status' `iter_number`,
    /// so the policy stays a pure function of the status: replaying a status
    /// gives the same delay, while different seeds spread concurrent callers
    /// apart. Termination is unchanged.
    ///
    /// Requires the `jitter` feature.
    #[cfg(feature = "jitter")]
    pub fn jittered(self, seed: u64) -> Self {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let label = format!("jittered({}, seed = {seed})", self.label);
        Self::labelled(label, move |status| {
            let delay = self.decide(status)?;
            let mut rng = StdRng::seed_from_u64(seed ^ u64::from(status.iter_number));
            let nanos = u64::try_from(delay.as_nanos()).unwrap_or(u64::MAX);
            Some(Duration::from_nanos(rng.random_range(0..=nanos)))
        })
    }
}

impl Semigroup for RetryPolicy {
    /// Stop if either policy stops, otherwise wait for the longer delay.
    fn combine(self, other: Self) -> Self {
        let label = format!("{} <> {}", self.label, other.label);
        Self::labelled(label, move |status| {
            let left = self.decide(status)?;
            let right = other.decide(status)?;
            Some(left.max(right))
        })
    }
}

impl Monoid for RetryPolicy {
    /// Retry forever without waiting.
    fn empty() -> Self {
        Self::labelled("empty", |_| Some(Duration::ZERO))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::empty()
    }
}

fn exponential(base: Duration, iter_number: u32) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;

    let nanos = base.as_nanos();
    if nanos == 0 {
        return Duration::ZERO;
    }
    // Shifting must not drop any set bit.
    if nanos.leading_zeros() < iter_number {
        return Duration::MAX;
    }
    let scaled = nanos << iter_number;
    let subsec = (scaled % NANOS_PER_SEC) as u32;
    u64::try_from(scaled / NANOS_PER_SEC)
        .map(|secs| Duration::new(secs, subsec))
        .unwrap_or(Duration::MAX)
}

/// The nth Fibonacci number, saturating at `u32::MAX`.
fn fibonacci(n: u32) -> u32 {
    if n == 0 {
        return 0;
    }
    let mut a = 0u32;
    let mut b = 1u32;
    for _ in 1..n {
        let next = a.saturating_add(b);
        a = b;
        b = next;
    }
    b
}
