//! Lenses: first-class getter/setter pairs.
//!
//! A [`Lens<S, A>`] focuses on one field `A` inside a larger value `S`.
//! Lenses compose, so a path through nested records is built from one lens
//! per level. The effect layer uses them to name the field a do-style step
//! writes into (see [`EffectExt::bind_l`](crate::effect::EffectExt::bind_l)).
//!
//! # Example
//!
//! ```rust
//! use tidewater::lens::Lens;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Address { city: String }
//! #[derive(Clone, Debug, PartialEq)]
//! struct User { name: String, address: Address }
//!
//! let address = Lens::new(|u: &User| u.address.clone(), |u: User, address| User { address, ..u });
//! let city = Lens::new(|a: &Address| a.city.clone(), |_a: Address, city| Address { city });
//! let user_city = address.compose(city);
//!
//! let user = User { name: "ada".into(), address: Address { city: "London".into() } };
//! assert_eq!(user_city.get(&user), "London");
//!
//! let moved = user_city.modify(user, |c| c.to_uppercase());
//! assert_eq!(moved.address.city, "LONDON");
//! ```

use std::sync::Arc;

type Getter<S, A> = Arc<dyn Fn(&S) -> A + Send + Sync>;
type Setter<S, A> = Arc<dyn Fn(S, A) -> S + Send + Sync>;

/// A getter/setter pair focusing on an `A` inside an `S`.
///
/// Well-behaved lenses satisfy:
/// - `set(s, get(&s)) == s`
/// - `get(&set(s, a)) == a`
/// - `set(set(s, a), b) == set(s, b)`
///
/// Cloning is cheap; both functions are reference counted.
pub struct Lens<S, A> {
    get: Getter<S, A>,
    set: Setter<S, A>,
}

impl<S, A> Clone for Lens<S, A> {
    fn clone(&self) -> Self {
        Lens {
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
        }
    }
}

impl<S, A> std::fmt::Debug for Lens<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lens")
            .field("get", &"<function>")
            .field("set", &"<function>")
            .finish()
    }
}

impl<S: 'static, A: 'static> Lens<S, A> {
    /// Build a lens from a getter and a setter.
    pub fn new<G, St>(get: G, set: St) -> Self
    where
        G: Fn(&S) -> A + Send + Sync + 'static,
        St: Fn(S, A) -> S + Send + Sync + 'static,
    {
        Lens {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    /// Read the focused field.
    pub fn get(&self, source: &S) -> A {
        (self.get)(source)
    }

    /// Replace the focused field.
    pub fn set(&self, source: S, value: A) -> S {
        (self.set)(source, value)
    }

    /// Replace the focused field with a function of its current value.
    pub fn modify<F>(&self, source: S, f: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let current = self.get(&source);
        self.set(source, f(current))
    }

    /// Focus further into the field with an inner lens.
    pub fn compose<B: 'static>(self, inner: Lens<A, B>) -> Lens<S, B> {
        let outer_get = Arc::clone(&self.get);
        let inner_get = Arc::clone(&inner.get);
        let outer = self;
        Lens {
            get: Arc::new(move |s: &S| inner_get(&outer_get(s))),
            set: Arc::new(move |s: S, b: B| {
                let focus = outer.get(&s);
                outer.set(s, inner.set(focus, b))
            }),
        }
    }
}
