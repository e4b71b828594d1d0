//! Traversable type class - turning a structure of effects inside out.
//!
//! This module provides the `Traversable` trait: walking a structure with
//! an effect-producing function and collecting the per-element effects into
//! a single effect wrapping the rebuilt structure. `traverse` is written
//! once against an abstract [`Applicative`] constructor, so the same
//! structure can be traversed with `Option`, `Result`, `Sequence`, or any
//! other instance without per-effect variants.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! Traversing with the no-effect context changes nothing:
//!
//! ```text
//! ta.traverse::<Identity<_>, _, _>(|a| Identity(f(a))) == Identity(ta.fmap(f))
//! ```
//!
//! ## Structure Preservation
//!
//! When the traversal succeeds, the rebuilt structure has the same shape
//! and element order as the original.
//!
//! # Examples
//!
//! ```rust
//! use kinded::control::Sequence;
//! use kinded::typeclass::Traversable;
//!
//! // All-or-nothing parsing: one failure collapses the whole traversal.
//! let digits = Sequence::wrap(["1", "2", "3"]);
//! let parsed: Option<Sequence<i32>> = digits.traverse(|s| s.parse().ok());
//! assert_eq!(parsed, Some(Sequence::wrap([1, 2, 3])));
//!
//! let mixed = Sequence::wrap(["1", "x", "3"]);
//! let failed: Option<Sequence<i32>> = mixed.traverse(|s| s.parse().ok());
//! assert_eq!(failed, None);
//! ```

use crate::control::Either;

use super::applicative::Applicative;
use super::functor::Functor;
use super::identity::Identity;

/// A type class for structures that can be traversed with an applicative
/// effect.
///
/// The `B: Clone` and `Self::WithType<B>: Clone` bounds exist for
/// multi-element effect contexts, whose `map2` forms a cartesian product
/// and therefore revisits intermediate results.
///
/// # Examples
///
/// ```rust
/// use kinded::typeclass::Traversable;
///
/// // Option is traversable too: an absent element stays absent,
/// // a present one runs the effect.
/// let present: Option<&str> = Some("42");
/// let parsed: Result<Option<i32>, _> = present.traverse(str::parse);
/// assert_eq!(parsed, Ok(Some(42)));
/// ```
pub trait Traversable: Functor {
    /// Maps each element to an effect and collects the effects.
    ///
    /// The effects are combined left to right; for short-circuiting
    /// contexts the first failure wins and later elements still have their
    /// effects evaluated only as the instance's `map2` dictates.
    ///
    /// # Arguments
    ///
    /// * `function` - Maps an element to its effectful replacement
    fn traverse<M, B, F>(self, function: F) -> M::WithType<Self::WithType<B>>
    where
        Self: Sized,
        M: Applicative<Inner = B>,
        B: Clone,
        Self::WithType<B>: Clone,
        F: FnMut(Self::Inner) -> M;

    /// Collects a structure of effects into an effect of the structure.
    ///
    /// This is `traverse` with the identity function: each element already
    /// is the effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::control::Sequence;
    /// use kinded::typeclass::Traversable;
    ///
    /// let all_present = Sequence::wrap([Some(1), Some(2)]);
    /// assert_eq!(all_present.sequence(), Some(Sequence::wrap([1, 2])));
    ///
    /// let one_missing = Sequence::wrap([Some(1), None]);
    /// assert_eq!(one_missing.sequence(), None::<Sequence<i32>>);
    /// ```
    #[inline]
    fn sequence<M, B>(self) -> M::WithType<Self::WithType<B>>
    where
        Self: Sized + Traversable<Inner = M>,
        M: Applicative<Inner = B>,
        B: Clone,
        Self::WithType<B>: Clone,
    {
        self.traverse(|effect| effect)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Traversable for Option<A> {
    #[inline]
    fn traverse<M, B, F>(self, mut function: F) -> M::WithType<Option<B>>
    where
        M: Applicative<Inner = B>,
        B: Clone,
        Option<B>: Clone,
        F: FnMut(A) -> M,
    {
        match self {
            Some(value) => function(value).fmap(Some),
            None => M::pure(None),
        }
    }
}

// =============================================================================
// Either<L, R> Implementation (right-biased)
// =============================================================================

impl<L, R> Traversable for Either<L, R> {
    #[inline]
    fn traverse<M, B, F>(self, mut function: F) -> M::WithType<Either<L, B>>
    where
        M: Applicative<Inner = B>,
        B: Clone,
        Either<L, B>: Clone,
        F: FnMut(R) -> M,
    {
        match self {
            Either::Left(left) => M::pure(Either::Left(left)),
            Either::Right(right) => function(right).fmap(Either::Right),
        }
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Traversable for Identity<A> {
    #[inline]
    fn traverse<M, B, F>(self, mut function: F) -> M::WithType<Identity<B>>
    where
        M: Applicative<Inner = B>,
        B: Clone,
        Identity<B>: Clone,
        F: FnMut(A) -> M,
    {
        function(self.0).fmap(Identity)
    }
}
