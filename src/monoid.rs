//! Monoid trait for types with identity elements
//!
//! A `Monoid` extends `Semigroup` by adding an identity element. This makes it
//! possible to fold any number of values (including zero) into one, which is how
//! a list of retry policies collapses into a single policy.
//!
//! # Mathematical Properties
//!
//! 1. **Associativity** (from Semigroup):
//!    ```text
//!    a.combine(b).combine(c) == a.combine(b.combine(c))
//!    ```
//! 2. **Right Identity**: `a.combine(M::empty()) == a`
//! 3. **Left Identity**: `M::empty().combine(a) == a`
//!
//! # Newtype Instances
//!
//! Numbers and booleans have more than one lawful monoid, so each lives behind
//! a wrapper:
//!
//! ```
//! use tidewater::monoid::{fold_all, All, Any, Sum};
//!
//! assert_eq!(fold_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! assert_eq!(fold_all(vec![All(true), All(false)]), All(false));
//! assert_eq!(fold_all(vec![Any(false), Any(true)]), Any(true));
//! assert_eq!(fold_all(Vec::<All>::new()), All(true));
//! ```

use std::ops::Add;
use std::time::Duration;

use crate::Semigroup;

/// A `Monoid` is a `Semigroup` with an identity element.
///
/// # Laws
///
/// ```text
/// a.combine(M::empty()) == a           (right identity)
/// M::empty().combine(a) == a           (left identity)
/// ```
///
/// # Example
///
/// ```rust
/// use tidewater::{Monoid, Semigroup};
///
/// let v1 = vec![1, 2, 3];
/// let empty: Vec<i32> = Monoid::empty();
///
/// assert_eq!(v1.clone().combine(empty.clone()), v1);
/// assert_eq!(empty.combine(v1.clone()), v1);
/// ```
pub trait Monoid: Semigroup {
    /// The identity element for this monoid.
    fn empty() -> Self;
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl Monoid for Duration {
    fn empty() -> Self {
        Duration::ZERO
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

macro_rules! impl_monoid_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Monoid),+> Monoid for ($($T,)+) {
            fn empty() -> Self {
                ($($T::empty(),)+)
            }
        }
    };
}

impl_monoid_tuple!(0 T1, 1 T2);
impl_monoid_tuple!(0 T1, 1 T2, 2 T3);
impl_monoid_tuple!(0 T1, 1 T2, 2 T3, 3 T4);

/// Monoid for numeric types under addition.
///
/// Identity: `T::default()`
///
/// # Example
///
/// ```
/// use tidewater::monoid::Sum;
/// use tidewater::Semigroup;
///
/// assert_eq!(Sum(5).combine(Sum(10)), Sum(15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sum<T>(pub T);

impl<T: Add<Output = T>> Semigroup for Sum<T> {
    fn combine(self, other: Self) -> Self {
        Sum(self.0 + other.0)
    }
}

impl<T: Add<Output = T> + Default> Monoid for Sum<T> {
    fn empty() -> Self {
        Sum(T::default())
    }
}

/// Semigroup for ordered types under maximum.
///
/// There is no identity without a lower bound; use `Option<Max<T>>` when one
/// is needed.
///
/// # Example
///
/// ```
/// use tidewater::monoid::Max;
/// use tidewater::Semigroup;
/// use std::time::Duration;
///
/// let longest = Max(Duration::from_millis(5)).combine(Max(Duration::from_millis(10)));
/// assert_eq!(longest, Max(Duration::from_millis(10)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<T>(pub T);

impl<T: Ord> Semigroup for Max<T> {
    fn combine(self, other: Self) -> Self {
        Max(self.0.max(other.0))
    }
}

/// Semigroup for ordered types under minimum.
///
/// # Example
///
/// ```
/// use tidewater::monoid::Min;
/// use tidewater::Semigroup;
///
/// assert_eq!(Min(5).combine(Min(10)), Min(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Min<T>(pub T);

impl<T: Ord> Semigroup for Min<T> {
    fn combine(self, other: Self) -> Self {
        Min(self.0.min(other.0))
    }
}

/// Boolean monoid under conjunction. Identity: `All(true)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct All(pub bool);

impl Semigroup for All {
    fn combine(self, other: Self) -> Self {
        All(self.0 && other.0)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        All(true)
    }
}

/// Boolean monoid under disjunction. Identity: `Any(false)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Any(pub bool);

impl Semigroup for Any {
    fn combine(self, other: Self) -> Self {
        Any(self.0 || other.0)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Any(false)
    }
}

/// Fold an iterator using the Monoid instance, starting with `empty()`.
///
/// # Example
///
/// ```
/// use tidewater::monoid::fold_all;
///
/// let result: Vec<i32> = fold_all(vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert_eq!(result, vec![1, 2, 3, 4, 5]);
/// ```
pub fn fold_all<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    iter.into_iter().fold(M::empty(), |acc, x| acc.combine(x))
}

/// Reduce a non-empty iterator with its Semigroup instance.
///
/// Returns `None` for an empty iterator, since a bare semigroup has no
/// identity to fall back on.
///
/// # Example
///
/// ```
/// use tidewater::monoid::{reduce, Max};
///
/// assert_eq!(reduce(vec![Max(3), Max(9), Max(4)]), Some(Max(9)));
/// assert_eq!(reduce(Vec::<Max<i32>>::new()), None);
/// ```
pub fn reduce<S, I>(iter: I) -> Option<S>
where
    S: Semigroup,
    I: IntoIterator<Item = S>,
{
    iter.into_iter().reduce(|acc, x| acc.combine(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_identity() {
        let d = Duration::from_millis(42);
        assert_eq!(d.combine(Duration::empty()), d);
        assert_eq!(Duration::empty().combine(d), d);
    }

    #[test]
    fn test_all_any_identity() {
        for b in [true, false] {
            assert_eq!(All(b).combine(All::empty()), All(b));
            assert_eq!(Any::empty().combine(Any(b)), Any(b));
        }
    }

    #[test]
    fn test_fold_all_empty_is_identity() {
        let total: Sum<i32> = fold_all(Vec::new());
        assert_eq!(total, Sum(0));
    }

    #[test]
    fn test_tuple_monoid_empty() {
        let empty: (Vec<i32>, String, Duration) = Monoid::empty();
        assert_eq!(empty, (vec![], String::new(), Duration::ZERO));
    }

    #[test]
    fn test_reduce_min() {
        assert_eq!(reduce(vec![Min(3), Min(1), Min(2)]), Some(Min(1)));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_vec_associativity(a: Vec<i32>, b: Vec<i32>, c: Vec<i32>) {
                let left = a.clone().combine(b.clone()).combine(c.clone());
                let right = a.combine(b.combine(c));
                prop_assert_eq!(left, right);
            }

            #[test]
            fn prop_duration_identity(ms in 0u64..1_000_000) {
                let d = Duration::from_millis(ms);
                prop_assert_eq!(d.combine(Duration::empty()), d);
                prop_assert_eq!(Duration::empty().combine(d), d);
            }

            #[test]
            fn prop_all_associativity(a: bool, b: bool, c: bool) {
                let left = All(a).combine(All(b)).combine(All(c));
                let right = All(a).combine(All(b).combine(All(c)));
                prop_assert_eq!(left, right);
            }

            #[test]
            fn prop_any_matches_iter_any(v: Vec<bool>) {
                let folded = fold_all(v.iter().copied().map(Any));
                prop_assert_eq!(folded, Any(v.iter().any(|b| *b)));
            }

            #[test]
            fn prop_max_matches_iter_max(v: Vec<u32>) {
                let reduced = reduce(v.iter().copied().map(Max)).map(|m| m.0);
                prop_assert_eq!(reduced, v.iter().copied().max());
            }
        }
    }
}
