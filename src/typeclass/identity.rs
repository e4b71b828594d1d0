//! Identity wrapper - the no-effect base context.
//!
//! `Identity<A>` wraps a single value with no additional semantics. It is
//! the simplest possible instance of the type class hierarchy: `fmap`
//! applies the function, `flat_map` applies the function, `pure` wraps.
//! Its value is as a base context for generic code and for stating laws
//! ("traversing with `Identity` is just `fmap`") and as the degenerate
//! base for transformers.
//!
//! # Examples
//!
//! ```rust
//! use kinded::typeclass::{Functor, Identity, Monad};
//!
//! let value = Identity::new(5);
//! assert_eq!(value.fmap(|n| n * 2), Identity::new(10));
//! assert_eq!(Identity::new(5).flat_map(|n| Identity::new(n + 1)), Identity::new(6));
//! ```

use super::higher::TypeConstructor;

/// A wrapper that adds no effect to its value.
///
/// # Examples
///
/// ```rust
/// use kinded::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity<A>(
    /// The wrapped value.
    pub A,
);

impl<A> Identity<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps, returning the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Borrows the wrapped value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    #[inline]
    fn from(value: A) -> Self {
        Self(value)
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}
