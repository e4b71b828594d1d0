//! Bifunctor type class - mapping over two type parameters independently.
//!
//! This module provides the `Bifunctor` trait for types with two covariant
//! type parameters, such as `Either<L, R>` and `Result<T, E>`. Where
//! `Functor` touches only the designated inner parameter, `Bifunctor` can
//! rewrite both arms in a single pass.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fab.bimap(|a| a, |b| b) == fab
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fab.bimap(f1, g1).bimap(f2, g2) == fab.bimap(|a| f2(f1(a)), |b| g2(g1(b)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kinded::control::Either;
//! use kinded::typeclass::Bifunctor;
//!
//! let value: Either<String, i32> = Either::Right(21);
//! let mapped = value.bimap(|message| message.len(), |n| n * 2);
//! assert_eq!(mapped, Either::Right(42));
//! ```

use crate::control::Either;

/// A type class for types with two independently mappable type parameters.
///
/// `A` is the first parameter (the `Left` arm of `Either`, the error of
/// `Result`), `B` the second. `Target<C, D>` names the same constructor
/// re-applied to new parameters, in the same GAT style as
/// [`TypeConstructor`](super::TypeConstructor).
///
/// # Examples
///
/// ```rust
/// use kinded::typeclass::Bifunctor;
///
/// // For Result, the first parameter is the error.
/// let failed: Result<i32, String> = Err("oops".to_string());
/// let annotated = failed.bimap(|error| format!("failed: {error}"), |n| n + 1);
/// assert_eq!(annotated, Err("failed: oops".to_string()));
/// ```
pub trait Bifunctor<A, B> {
    /// The same two-parameter constructor applied to `C` and `D`.
    type Target<C, D>;

    /// Maps both parameters at once.
    ///
    /// Exactly one of the two functions runs for sum-shaped instances;
    /// which one depends on the arm the value inhabits.
    ///
    /// # Arguments
    ///
    /// * `first` - Transforms the first parameter
    /// * `second` - Transforms the second parameter
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::control::Either;
    /// use kinded::typeclass::Bifunctor;
    ///
    /// let left: Either<i32, &str> = Either::Left(2);
    /// assert_eq!(left.bimap(|n| n * 10, str::len), Either::Left(20));
    /// ```
    fn bimap<C, D, F, G>(self, first: F, second: G) -> Self::Target<C, D>
    where
        F: FnMut(A) -> C,
        G: FnMut(B) -> D;

    /// Maps only the first parameter, leaving the second untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::control::Either;
    /// use kinded::typeclass::Bifunctor;
    ///
    /// let left: Either<i32, String> = Either::Left(5);
    /// assert_eq!(left.first(|n| n * 2), Either::Left(10));
    /// ```
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        Self: Sized,
        F: FnMut(A) -> C,
    {
        self.bimap(function, |b| b)
    }

    /// Maps only the second parameter, leaving the first untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::control::Either;
    /// use kinded::typeclass::Bifunctor;
    ///
    /// let right: Either<String, i32> = Either::Right(5);
    /// assert_eq!(right.second(|n| n * 2), Either::Right(10));
    /// ```
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        Self: Sized,
        G: FnMut(B) -> D,
    {
        self.bimap(|a| a, function)
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, mut first: F, mut second: G) -> Either<C, D>
    where
        F: FnMut(L) -> C,
        G: FnMut(R) -> D,
    {
        match self {
            Either::Left(left) => Either::Left(first(left)),
            Either::Right(right) => Either::Right(second(right)),
        }
    }
}

// =============================================================================
// Result<T, E> Implementation (first parameter is the error)
// =============================================================================

impl<T, E> Bifunctor<E, T> for Result<T, E> {
    type Target<C, D> = Result<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, mut first: F, mut second: G) -> Result<D, C>
    where
        F: FnMut(E) -> C,
        G: FnMut(T) -> D,
    {
        match self {
            Ok(value) => Ok(second(value)),
            Err(error) => Err(first(error)),
        }
    }
}
