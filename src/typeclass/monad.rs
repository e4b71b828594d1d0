//! Monad type class - sequencing dependent computations.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! `flat_map` (also known as `bind` or `>>=`), and the `MonadRec` trait for
//! stack-safe tail-recursive sequencing.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kinded::typeclass::Monad;
//!
//! let result = Some(5).flat_map(|x| if x > 3 { Some(x * 2) } else { None });
//! assert_eq!(result, Some(10));
//!
//! let chained: Option<i32> = Some(2)
//!     .flat_map(|x| Some(x + 1))
//!     .flat_map(|x| Some(x * 10));
//! assert_eq!(chained, Some(30));
//! ```

use crate::control::Either;

use super::applicative::Applicative;
use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for types that support sequencing of dependent
/// computations.
///
/// `Monad` extends `Applicative` with `flat_map`, which allows the next
/// computation to depend on the result of the previous one. This is the
/// key difference from `Applicative`, where the two sides are independent.
///
/// # Examples
///
/// ```rust
/// use kinded::typeclass::Monad;
///
/// fn parse(s: &str) -> Option<i32> {
///     s.parse().ok()
/// }
///
/// fn reciprocal(n: i32) -> Option<f64> {
///     if n == 0 { None } else { Some(1.0 / f64::from(n)) }
/// }
///
/// let result = parse("4").flat_map(reciprocal);
/// assert_eq!(result, Some(0.25));
///
/// let division_by_zero = parse("0").flat_map(reciprocal);
/// assert_eq!(division_by_zero, None);
/// ```
pub trait Monad: Applicative {
    /// Sequences a computation that depends on the inner value.
    ///
    /// Applies `function` to the inner value(s) and flattens the nested
    /// context. If the receiver is a failure in the sense appropriate to
    /// the instance, `function` is never called.
    ///
    /// # Arguments
    ///
    /// * `function` - A function from the inner value to a new monadic
    ///   value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::typeclass::Monad;
    ///
    /// let result = Some(5).flat_map(|x| if x > 3 { Some(x * 2) } else { None });
    /// assert_eq!(result, Some(10));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, discarding the first result.
    ///
    /// The first effect still participates (a failure there short-circuits),
    /// but its value is not consulted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::typeclass::Monad;
    ///
    /// assert_eq!(Some(1).then(Some("next")), Some("next"));
    ///
    /// let missing: Option<i32> = None;
    /// assert_eq!(missing.then(Some("next")), None);
    /// ```
    #[inline]
    fn then<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(move |_| other)
    }

    /// Flattens one level of nesting.
    ///
    /// Available when the inner value is itself an instance of the same
    /// constructor, witnessed by the `Into` bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::typeclass::Monad;
    ///
    /// let nested: Option<Option<i32>> = Some(Some(5));
    /// assert_eq!(nested.flatten_inner(), Some(5));
    ///
    /// let inner_none: Option<Option<i32>> = Some(None);
    /// assert_eq!(inner_none.flatten_inner(), None);
    /// ```
    #[inline]
    fn flatten_inner<B>(self) -> Self::WithType<B>
    where
        Self: Sized,
        Self::Inner: TypeConstructor<Inner = B> + Into<Self::WithType<B>>,
    {
        self.flat_map(Into::into)
    }
}

/// A type class for monads supporting stack-safe tail recursion.
///
/// `tail_rec` repeatedly feeds the `Left` continuation value back into
/// `step` until it produces a `Right`, without growing the call stack.
/// Any recursion expressible as a step function terminating in `Right`
/// can run for millions of iterations in constant stack space.
///
/// # Examples
///
/// ```rust
/// use kinded::control::Either;
/// use kinded::typeclass::MonadRec;
///
/// // Sum 1..=100_000 without stack growth.
/// let total: Option<u64> = <Option<()>>::tail_rec((0u64, 0u64), |(i, acc)| {
///     if i > 100_000 {
///         Some(Either::Right(acc))
///     } else {
///         Some(Either::Left((i + 1, acc + i)))
///     }
/// });
/// assert_eq!(total, Some(5_000_050_000));
/// ```
pub trait MonadRec: Monad {
    /// Runs `step` repeatedly from `initial` until it yields a `Right`.
    ///
    /// `Left(next)` means continue with the new state; `Right(done)` means
    /// finish with that result. A failing step (in the instance's sense)
    /// terminates the loop with that failure.
    fn tail_rec<A, B, F>(initial: A, step: F) -> Self::WithType<B>
    where
        F: FnMut(A) -> Self::WithType<Either<A, B>>;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<A> MonadRec for Option<A> {
    fn tail_rec<S, B, F>(initial: S, mut step: F) -> Option<B>
    where
        F: FnMut(S) -> Option<Either<S, B>>,
    {
        let mut state = initial;
        loop {
            match step(state)? {
                Either::Left(next) => state = next,
                Either::Right(done) => return Some(done),
            }
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}

impl<T, E> MonadRec for Result<T, E> {
    fn tail_rec<S, B, F>(initial: S, mut step: F) -> Result<B, E>
    where
        F: FnMut(S) -> Result<Either<S, B>, E>,
    {
        let mut state = initial;
        loop {
            match step(state)? {
                Either::Left(next) => state = next,
                Either::Right(done) => return Ok(done),
            }
        }
    }
}

// =============================================================================
// Either<L, R> Implementation (right-biased)
// =============================================================================

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        match self {
            Either::Left(left) => Either::Left(left),
            Either::Right(right) => function(right),
        }
    }
}

impl<L, R> MonadRec for Either<L, R> {
    fn tail_rec<S, B, F>(initial: S, mut step: F) -> Either<L, B>
    where
        F: FnMut(S) -> Either<L, Either<S, B>>,
    {
        let mut state = initial;
        loop {
            match step(state) {
                Either::Left(left) => return Either::Left(left),
                Either::Right(Either::Left(next)) => state = next,
                Either::Right(Either::Right(done)) => return Either::Right(done),
            }
        }
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

impl<A> MonadRec for Identity<A> {
    fn tail_rec<S, B, F>(initial: S, mut step: F) -> Identity<B>
    where
        F: FnMut(S) -> Identity<Either<S, B>>,
    {
        let mut state = initial;
        loop {
            match step(state).0 {
                Either::Left(next) => state = next,
                Either::Right(done) => return Identity(done),
            }
        }
    }
}
