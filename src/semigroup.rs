//! Semigroup trait for associative operations
//!
//! A Semigroup is a type with an associative binary operation. In tidewater it is
//! the building block of policy composition: two retry policies combine into one
//! whose decision is derived pointwise from both.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, the `combine` operation must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use tidewater::Semigroup;
//! use std::time::Duration;
//!
//! // Combining vectors
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//!
//! // Durations add up
//! let total = Duration::from_millis(250).combine(Duration::from_millis(750));
//! assert_eq!(total, Duration::from_secs(1));
//!
//! // Tuples combine component-wise
//! let t = (vec![1], "a".to_string()).combine((vec![2], "b".to_string()));
//! assert_eq!(t, (vec![1, 2], "ab".to_string()));
//! ```

use std::time::Duration;

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Note on Ownership
///
/// The `combine` method takes `self` by value, not by reference. If you need to
/// preserve the original values, you must clone them before combining.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use tidewater::Semigroup;
    ///
    /// let result = "tide".to_string().combine("water".to_string());
    /// assert_eq!(result, "tidewater");
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

// Addition, saturating at Duration::MAX
impl Semigroup for Duration {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

// None is the identity; two Somes combine their contents
impl<T: Semigroup> Semigroup for Option<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }
}

macro_rules! impl_semigroup_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Semigroup),+> Semigroup for ($($T,)+) {
            #[inline]
            fn combine(self, other: Self) -> Self {
                (
                    $(self.$idx.combine(other.$idx)),+
                )
            }
        }
    };
}

impl_semigroup_tuple!(0 T1, 1 T2);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_semigroup() {
        assert_eq!(vec![1, 2, 3].combine(vec![4, 5, 6]), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_string_semigroup() {
        let s1 = "Hello, ".to_string();
        let s2 = "World!".to_string();
        assert_eq!(s1.combine(s2), "Hello, World!");
    }

    #[test]
    fn test_duration_semigroup_adds() {
        let d = Duration::from_millis(500).combine(Duration::from_millis(500));
        assert_eq!(d, Duration::from_secs(1));
    }

    #[test]
    fn test_duration_semigroup_saturates() {
        let d = Duration::MAX.combine(Duration::from_secs(1));
        assert_eq!(d, Duration::MAX);
    }

    #[test]
    fn test_option_semigroup() {
        assert_eq!(Some(vec![1]).combine(Some(vec![2])), Some(vec![1, 2]));
        assert_eq!(Some(vec![1]).combine(None), Some(vec![1]));
        assert_eq!(None.combine(Some(vec![2])), Some(vec![2]));
        assert_eq!(None::<Vec<i32>>.combine(None), None);
    }

    #[test]
    fn test_tuple_3_semigroup() {
        let t1 = (vec![1], "a".to_string(), Duration::from_millis(1));
        let t2 = (vec![2], "b".to_string(), Duration::from_millis(2));
        assert_eq!(
            t1.combine(t2),
            (vec![1, 2], "ab".to_string(), Duration::from_millis(3))
        );
    }

    #[test]
    fn test_string_associativity() {
        let a = "hello".to_string();
        let b = " ".to_string();
        let c = "world".to_string();

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }
}
