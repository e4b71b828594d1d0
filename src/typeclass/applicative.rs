//! Applicative type class - lifting values and combining contexts.
//!
//! This module provides the `Applicative` trait, which extends `Functor`
//! with the ability to:
//!
//! - Lift pure values into the applicative context (`pure`)
//! - Combine two independent applicative values using a function (`map2`)
//! - Apply a wrapped function to a wrapped value (`apply`)
//! - Sequence two effects while keeping only one result
//!   (`product_left`, `product_right`)
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kinded::typeclass::Applicative;
//!
//! // Lifting a pure value into Option context
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! // Combining two Option values
//! let sum = Some(1).map2(Some(2), |x, y| x + y);
//! assert_eq!(sum, Some(3));
//! ```

use crate::control::Either;

use super::functor::Functor;
use super::identity::Identity;

/// A type class for types that support lifting values and combining
/// contexts.
///
/// `Applicative` extends `Functor` with `pure` (lift any value into the
/// context) and `map2` (combine two values in the context with a binary
/// function). The remaining operations are derived from those two.
///
/// The `B: Clone` bound on the combining operations exists for
/// multi-element instances, where forming the structural combination (a
/// cartesian product) visits each operand element several times.
///
/// # Examples
///
/// ```rust
/// use kinded::typeclass::Applicative;
///
/// let a = Some(3);
/// let b = Some(4);
/// assert_eq!(a.map2(b, |x, y| x + y), Some(7));
///
/// let a = Some(3);
/// let missing: Option<i32> = None;
/// assert_eq!(a.map2(missing, |x, y| x + y), None);
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// Produces the minimal instance holding the value: `Some` for
    /// `Option`, `Right` for `Either`, a one-element sequence for
    /// `Sequence`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    ///
    /// let y: Result<String, ()> = <Result<(), ()>>::pure("hello".to_string());
    /// assert_eq!(y, Ok("hello".to_string()));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// Both effects are sequenced (self first, then `other`); the function
    /// combines their payloads. If either side is a failure in the sense
    /// appropriate to the instance, the result is that failure.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    /// * `function` - A function that takes both inner values and produces
    ///   a result
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::typeclass::Applicative;
    ///
    /// let sum = Some(1).map2(Some(2), |x, y| x + y);
    /// assert_eq!(sum, Some(3));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        B: Clone,
        F: FnMut(Self::Inner, B) -> C;

    /// Applies function(s) inside this context to value(s) inside another.
    ///
    /// This is the classic `<*>`: the receiver holds the function(s), the
    /// operand holds the value(s). For multi-element instances the receiver
    /// is iterated outermost, so every function is applied to every value
    /// in receiver-major order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(function.apply(Some(5)), Some(6));
    /// ```
    #[inline]
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        B: Clone,
        Self::Inner: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }

    /// Combines two applicative values into a tuple.
    ///
    /// This is equivalent to `map2(other, |a, b| (a, b))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::typeclass::Applicative;
    ///
    /// let a = Some(1);
    /// let b = Some("hello");
    /// assert_eq!(a.product(b), Some((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        B: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Sequences both effects and keeps only the left value.
    ///
    /// The right operand's effect still participates (a failure there
    /// still fails the whole), but its value is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_left(Some(2)), Some(1));
    ///
    /// let missing: Option<i32> = None;
    /// assert_eq!(Some(1).product_left(missing), None);
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
        B: Clone,
    {
        self.map2(other, |a, _| a)
    }

    /// Sequences both effects and keeps only the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_right(Some(2)), Some(2));
    ///
    /// let missing: Option<i32> = None;
    /// assert_eq!(missing.product_right(Some(2)), None);
    /// ```
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.map2(other, |_, b| b)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, mut function: F) -> Option<C>
    where
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, mut function: F) -> Result<C, E>
    where
        B: Clone,
        F: FnMut(T, B) -> C,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) => Err(error),
            (_, Err(error)) => Err(error),
        }
    }
}

// =============================================================================
// Either<L, R> Implementation (right-biased, first Left wins)
// =============================================================================

impl<L, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, mut function: F) -> Either<L, C>
    where
        B: Clone,
        F: FnMut(R, B) -> C,
    {
        match (self, other) {
            (Either::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Either::Left(left), _) => Either::Left(left),
            (Either::Right(_), Either::Left(left)) => Either::Left(left),
        }
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, mut function: F) -> Identity<C>
    where
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_pure_lifts_value() {
        let x: Option<i32> = <Option<()>>::pure(42);
        assert_eq!(x, Some(42));
    }

    #[rstest]
    fn option_map2_both_present() {
        assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
    }

    #[rstest]
    fn option_map2_either_missing() {
        let missing: Option<i32> = None;
        assert_eq!(Some(1).map2(missing, |x, y| x + y), None);
        assert_eq!(missing.map2(Some(1), |x, y| x + y), None);
    }

    #[rstest]
    fn option_apply() {
        let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
        assert_eq!(function.apply(Some(5)), Some(6));
    }

    #[rstest]
    fn option_product_left_and_right() {
        assert_eq!(Some(1).product_left(Some("x")), Some(1));
        assert_eq!(Some(1).product_right(Some("x")), Some("x"));
    }

    #[rstest]
    fn result_map2_first_error_wins() {
        let first: Result<i32, &str> = Err("first");
        let second: Result<i32, &str> = Err("second");
        assert_eq!(first.map2(second, |x, y| x + y), Err("first"));
    }

    #[rstest]
    fn either_map2_both_right() {
        let a: Either<String, i32> = Either::Right(1);
        let b: Either<String, i32> = Either::Right(2);
        assert_eq!(a.map2(b, |x, y| x + y), Either::Right(3));
    }

    #[rstest]
    fn either_map2_first_left_wins() {
        let first: Either<&str, i32> = Either::Left("first");
        let second: Either<&str, i32> = Either::Left("second");
        assert_eq!(first.map2(second, |x, y| x + y), Either::Left("first"));

        let right: Either<&str, i32> = Either::Right(1);
        let left: Either<&str, i32> = Either::Left("only");
        assert_eq!(right.map2(left, |x, y| x + y), Either::Left("only"));
    }

    #[rstest]
    fn identity_map2_combines() {
        let result = Identity::new(20).map2(Identity::new(22), |x, y| x + y);
        assert_eq!(result, Identity::new(42));
    }

    /// Homomorphism law: pure(f).apply(pure(x)) == pure(f(x))
    #[rstest]
    fn option_homomorphism_law() {
        let function: fn(i32) -> i32 = |x| x * 2;
        let left: Option<i32> = <Option<()>>::pure(function).apply(<Option<()>>::pure(21));
        let right: Option<i32> = <Option<()>>::pure(function(21));
        assert_eq!(left, right);
    }
}
