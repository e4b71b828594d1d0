//! EitherT monad transformer.
//!
//! `EitherT<M>` wraps a base context `M` whose payload is an
//! [`Either<L, R>`](crate::control::Either) and presents the pair as a
//! single context with two-armed choice semantics: the right arm carries
//! the working value, the left arm short-circuits.
//!
//! The transformer's capabilities track the base context's capabilities
//! exactly:
//!
//! | base `M` is       | `EitherT<M>` gains                        |
//! |-------------------|-------------------------------------------|
//! | `Functor`         | `Functor`, `Bifunctor`                    |
//! | `Applicative`     | `Applicative`, `pure`, `throw`, `lift`    |
//! | `Monad`           | `Monad`, [`lazy_map2`](EitherT::lazy_map2)|
//! | `MonadRec`        | [`tail_rec`](EitherT::tail_rec)           |
//!
//! # Examples
//!
//! ```rust
//! use kinded::control::Either;
//! use kinded::transformer::EitherT;
//! use kinded::typeclass::Monad;
//!
//! fn checked_halve(
//!     n: i32,
//! ) -> EitherT<Option<Either<String, i32>>> {
//!     if n % 2 == 0 {
//!         EitherT::pure(n / 2)
//!     } else {
//!         EitherT::throw(format!("{n} is odd"))
//!     }
//! }
//!
//! let start: EitherT<Option<Either<String, i32>>> = EitherT::pure(20);
//! let result = start.flat_map(checked_halve).flat_map(checked_halve);
//! assert_eq!(result.run(), Some(Either::Right(5)));
//!
//! let start: EitherT<Option<Either<String, i32>>> = EitherT::pure(20);
//! let stuck = start.flat_map(checked_halve).flat_map(checked_halve)
//!     .flat_map(checked_halve);
//! assert_eq!(stuck.run(), Some(Either::Left("5 is odd".to_string())));
//! ```

use crate::control::{Either, Lazy};
use crate::typeclass::{
    Applicative, Bifunctor, Functor, Monad, MonadRec, TypeConstructor,
};

/// A monad transformer layering two-armed choice over a base context.
///
/// Wraps exactly one `M` with `M::Inner = Either<L, R>`. The left arm
/// `L` is the short-circuiting alternative, the right arm `R` is the
/// value the type class instances operate on. `L` and `R` are recovered
/// from the base context's payload type, not stored.
///
/// Values are never mutated; comparison, hashing, and cloning defer to
/// the wrapped context.
///
/// # Examples
///
/// ```rust
/// use kinded::control::Either;
/// use kinded::transformer::EitherT;
/// use kinded::typeclass::Functor;
///
/// let layered = EitherT::new(Some(Either::Right::<String, i32>(21)));
/// assert_eq!(layered.fmap(|n| n * 2).run(), Some(Either::Right(42)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EitherT<M> {
    inner: M,
}

impl<M> EitherT<M> {
    /// Wraps a base-context value carrying an `Either` payload.
    #[inline]
    pub const fn new(inner: M) -> Self {
        Self { inner }
    }

    /// Unwraps the transformer, returning the base-context value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::control::Either;
    /// use kinded::transformer::EitherT;
    ///
    /// let layered = EitherT::new(Some(Either::Right::<String, i32>(42)));
    /// assert_eq!(layered.run(), Some(Either::Right(42)));
    /// ```
    #[inline]
    pub fn run(self) -> M {
        self.inner
    }
}

// =============================================================================
// Constructors (require an Applicative base)
// =============================================================================

impl<M, L, R> EitherT<M>
where
    M: Applicative<Inner = Either<L, R>, WithType<Either<L, R>> = M>,
{
    /// Lifts a value into the right arm of the transformer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::control::Either;
    /// use kinded::transformer::EitherT;
    ///
    /// let success: EitherT<Option<Either<String, i32>>> = EitherT::pure(42);
    /// assert_eq!(success.run(), Some(Either::Right(42)));
    /// ```
    #[inline]
    pub fn pure(value: R) -> Self {
        Self {
            inner: M::pure(Either::Right(value)),
        }
    }

    /// Lifts an error into the left arm of the transformer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::control::Either;
    /// use kinded::transformer::EitherT;
    ///
    /// let failure: EitherT<Option<Either<String, i32>>> =
    ///     EitherT::throw("boom".to_string());
    /// assert_eq!(failure.run(), Some(Either::Left("boom".to_string())));
    /// ```
    #[inline]
    pub fn throw(error: L) -> Self {
        Self {
            inner: M::pure(Either::Left(error)),
        }
    }

    /// Lifts a base-context computation of a bare `R` into the
    /// transformer, placing its result in the right arm.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::control::Either;
    /// use kinded::transformer::EitherT;
    ///
    /// let lifted: EitherT<Option<Either<String, i32>>> = EitherT::lift(Some(42));
    /// assert_eq!(lifted.run(), Some(Either::Right(42)));
    /// ```
    #[inline]
    pub fn lift<N>(base: N) -> Self
    where
        N: Functor<Inner = R, WithType<Either<L, R>> = M>,
    {
        Self {
            inner: base.fmap(Either::Right),
        }
    }
}

// =============================================================================
// Type Class Instances
// =============================================================================

impl<M, L, R> TypeConstructor for EitherT<M>
where
    M: TypeConstructor<Inner = Either<L, R>>,
{
    type Inner = R;
    type WithType<B> = EitherT<M::WithType<Either<L, B>>>;
}

impl<M, L, R> Functor for EitherT<M>
where
    M: Functor<Inner = Either<L, R>>,
{
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> EitherT<M::WithType<Either<L, B>>>
    where
        F: FnMut(R) -> B,
    {
        EitherT {
            inner: self.inner.fmap(|either| either.map_right(&mut function)),
        }
    }
}

impl<M, L, R> Bifunctor<L, R> for EitherT<M>
where
    M: Functor<Inner = Either<L, R>>,
{
    type Target<C, D> = EitherT<M::WithType<Either<C, D>>>;

    #[inline]
    fn bimap<C, D, F, G>(self, mut first: F, mut second: G) -> EitherT<M::WithType<Either<C, D>>>
    where
        F: FnMut(L) -> C,
        G: FnMut(R) -> D,
    {
        EitherT {
            inner: self.inner.fmap(|either| match either {
                Either::Left(left) => Either::Left(first(left)),
                Either::Right(right) => Either::Right(second(right)),
            }),
        }
    }
}

/// Sequences both base effects, then combines the choices: the first
/// `Left`, in left-to-right order, wins. `L: Clone` because the left arm
/// may travel through the base context's own combination.
impl<M, L, R> Applicative for EitherT<M>
where
    M: Applicative<Inner = Either<L, R>>,
    L: Clone,
{
    #[inline]
    fn pure<B>(value: B) -> EitherT<M::WithType<Either<L, B>>> {
        EitherT {
            inner: M::pure(Either::Right(value)),
        }
    }

    fn map2<B, C, F>(
        self,
        other: EitherT<M::WithType<Either<L, B>>>,
        mut function: F,
    ) -> EitherT<M::WithType<Either<L, C>>>
    where
        B: Clone,
        F: FnMut(R, B) -> C,
    {
        EitherT {
            inner: self.inner.map2(other.inner, |left_side, right_side| {
                match (left_side, right_side) {
                    (Either::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
                    (Either::Left(left), _) => Either::Left(left),
                    (Either::Right(_), Either::Left(left)) => Either::Left(left),
                }
            }),
        }
    }
}

impl<M, L, R> Monad for EitherT<M>
where
    M: Monad<Inner = Either<L, R>>,
    L: Clone,
{
    /// Binds the base context; on `Right` the continuation's wrapped
    /// context is spliced back in, on `Left` the continuation never runs.
    fn flat_map<B, F>(self, function: F) -> EitherT<M::WithType<Either<L, B>>>
    where
        F: FnOnce(R) -> EitherT<M::WithType<Either<L, B>>>,
    {
        EitherT {
            inner: self.inner.flat_map(|either| match either {
                Either::Left(left) => M::pure(Either::Left(left)),
                Either::Right(right) => function(right).inner,
            }),
        }
    }
}

// =============================================================================
// Short-circuiting Combination (requires a Monad base)
// =============================================================================

impl<M, L, R> EitherT<M>
where
    M: Monad<Inner = Either<L, R>>,
{
    /// Combines with a deferred second operand, forcing it only when the
    /// receiver's choice is `Right`.
    ///
    /// Unlike `map2`, which evaluates both operands before combining,
    /// the second operand arrives as a [`Lazy`] thunk. When the receiver
    /// short-circuits with `Left`, the thunk is dropped unforced; its
    /// effects (or panics) never happen.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::control::{Either, Lazy};
    /// use kinded::transformer::EitherT;
    ///
    /// let left: EitherT<Option<Either<String, i32>>> =
    ///     EitherT::throw("stop".to_string());
    /// let combined = left.lazy_map2(
    ///     Lazy::new(|| panic!("never forced")),
    ///     |a, b: i32| a + b,
    /// );
    /// assert_eq!(combined.run(), Some(Either::Left("stop".to_string())));
    /// ```
    pub fn lazy_map2<B, C, T, F>(
        self,
        other: Lazy<EitherT<M::WithType<Either<L, B>>>, T>,
        mut function: F,
    ) -> EitherT<M::WithType<Either<L, C>>>
    where
        R: Clone,
        T: FnOnce() -> EitherT<M::WithType<Either<L, B>>>,
        F: FnMut(R, B) -> C,
        M::WithType<Either<L, B>>: Functor<
            Inner = Either<L, B>,
            WithType<Either<L, C>> = M::WithType<Either<L, C>>,
        >,
    {
        EitherT {
            inner: self.inner.flat_map(move |either| match either {
                Either::Left(left) => M::pure(Either::Left(left)),
                Either::Right(right) => other.into_value().inner.fmap(move |other_either| {
                    other_either.map_right(|b| function(right.clone(), b))
                }),
            }),
        }
    }
}

// =============================================================================
// Stack-safe Recursion (requires a MonadRec base)
// =============================================================================

impl<M, L, R> EitherT<M>
where
    M: MonadRec<Inner = Either<L, R>, WithType<Either<L, R>> = M>,
{
    /// Runs `step` repeatedly from `initial` until it yields a `Right`,
    /// delegating the loop to the base context's `tail_rec` so the stack
    /// never grows with the iteration count.
    ///
    /// A `Left` produced by any step short-circuits the whole recursion,
    /// exactly as it short-circuits `flat_map`. The finished value lands
    /// in the right arm of `Self`, so an annotation on the result pins
    /// down the base context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::control::Either;
    /// use kinded::transformer::EitherT;
    ///
    /// let countdown: EitherT<Option<Either<String, u32>>> =
    ///     EitherT::tail_rec(100_000u32, |n| {
    ///         if n == 0 {
    ///             EitherT::pure(Either::Right(0))
    ///         } else {
    ///             EitherT::pure(Either::Left(n - 1))
    ///         }
    ///     });
    /// assert_eq!(countdown.run(), Some(Either::Right(0)));
    /// ```
    pub fn tail_rec<A, F>(initial: A, mut step: F) -> Self
    where
        F: FnMut(A) -> EitherT<M::WithType<Either<L, Either<A, R>>>>,
        M::WithType<Either<L, Either<A, R>>>: Functor<
            Inner = Either<L, Either<A, R>>,
            WithType<Either<A, Either<L, R>>> = M::WithType<Either<A, Either<L, R>>>,
        >,
    {
        EitherT {
            inner: M::tail_rec::<A, Either<L, R>, _>(initial, move |state| {
                step(state).inner.fmap(|either| match either {
                    // A Left finishes the recursion carrying the error.
                    Either::Left(left) => Either::Right(Either::Left(left)),
                    Either::Right(Either::Left(next)) => Either::Left(next),
                    Either::Right(Either::Right(done)) => Either::Right(Either::Right(done)),
                })
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;
    use rstest::rstest;
    use static_assertions::assert_impl_all;
    use std::cell::Cell;

    type OverOption = EitherT<Option<Either<String, i32>>>;
    type OverIdentity = EitherT<Identity<Either<String, i32>>>;

    assert_impl_all!(
        EitherT<Option<Either<String, i32>>>:
            Functor, Applicative, Monad, Bifunctor<String, i32>, Clone, Eq
    );
    assert_impl_all!(
        EitherT<Identity<Either<String, i32>>>:
            Functor, Applicative, Monad, Bifunctor<String, i32>
    );

    #[rstest]
    fn new_and_run_round_trip() {
        let layered = EitherT::new(Some(Either::Right::<String, i32>(42)));
        assert_eq!(layered.run(), Some(Either::Right(42)));
    }

    #[rstest]
    fn pure_places_value_in_right_arm() {
        let success: OverOption = EitherT::pure(42);
        assert_eq!(success.run(), Some(Either::Right(42)));
    }

    #[rstest]
    fn throw_places_error_in_left_arm() {
        let failure: OverOption = EitherT::throw("boom".to_string());
        assert_eq!(failure.run(), Some(Either::Left("boom".to_string())));
    }

    #[rstest]
    fn lift_wraps_base_computation() {
        let lifted: OverOption = EitherT::lift(Some(42));
        assert_eq!(lifted.run(), Some(Either::Right(42)));

        let absent: OverOption = EitherT::lift(None);
        assert_eq!(absent.run(), None);
    }

    #[rstest]
    fn fmap_touches_only_the_right_arm() {
        let success: OverOption = EitherT::pure(21);
        assert_eq!(success.fmap(|n| n * 2).run(), Some(Either::Right(42)));

        let failure: OverOption = EitherT::throw("keep".to_string());
        assert_eq!(
            failure.fmap(|n| n * 2).run(),
            Some(Either::Left("keep".to_string())),
        );
    }

    #[rstest]
    fn fmap_passes_an_absent_base_through() {
        let absent: OverOption = EitherT::new(None);
        assert_eq!(absent.fmap(|n| n * 2).run(), None);
    }

    #[rstest]
    fn bimap_rewrites_both_arms() {
        let failure: OverOption = EitherT::throw("oops".to_string());
        let annotated = failure.bimap(|error| format!("failed: {error}"), |n| n * 2);
        assert_eq!(annotated.run(), Some(Either::Left("failed: oops".to_string())));

        let success: OverOption = EitherT::pure(21);
        let doubled = success.bimap(|error: String| error, |n| n * 2);
        assert_eq!(doubled.run(), Some(Either::Right(42)));
    }

    #[rstest]
    fn map2_combines_two_rights() {
        let first: OverOption = EitherT::pure(1);
        let second: OverOption = EitherT::pure(2);
        assert_eq!(
            first.map2(second, |a, b| a + b).run(),
            Some(Either::Right(3)),
        );
    }

    #[rstest]
    fn map2_first_left_wins() {
        let first: OverOption = EitherT::throw("first".to_string());
        let second: OverOption = EitherT::throw("second".to_string());
        assert_eq!(
            first.map2(second, |a, b| a + b).run(),
            Some(Either::Left("first".to_string())),
        );
    }

    #[rstest]
    fn flat_map_continues_on_right() {
        let start: OverOption = EitherT::pure(10);
        let result = start.flat_map(|n| EitherT::pure(n / 2));
        assert_eq!(result.run(), Some(Either::Right(5)));
    }

    #[rstest]
    fn flat_map_short_circuits_on_left() {
        let failure: OverOption = EitherT::throw("stop".to_string());
        let result = failure.flat_map(|_| -> OverOption {
            panic!("continuation must not run")
        });
        assert_eq!(result.run(), Some(Either::Left("stop".to_string())));
    }

    #[rstest]
    fn flat_map_propagates_an_absent_base() {
        let absent: OverOption = EitherT::new(None);
        let result = absent.flat_map(|n| -> OverOption { EitherT::pure(n) });
        assert_eq!(result.run(), None);
    }

    #[rstest]
    fn lazy_map2_combines_when_right() {
        let first: OverOption = EitherT::pure(1);
        let combined = first.lazy_map2(
            Lazy::new(|| -> OverOption { EitherT::pure(1) }),
            |a, b| a + b,
        );
        assert_eq!(combined.run(), Some(Either::Right(2)));
    }

    #[rstest]
    fn lazy_map2_never_forces_the_thunk_on_left() {
        let failure: OverOption = EitherT::throw("stop".to_string());
        let combined = failure.lazy_map2(
            Lazy::new(|| -> OverOption { panic!("never forced") }),
            |a, b: i32| a + b,
        );
        assert_eq!(combined.run(), Some(Either::Left("stop".to_string())));
    }

    #[rstest]
    fn lazy_map2_never_forces_the_thunk_on_an_absent_base() {
        let absent: OverOption = EitherT::new(None);
        let combined = absent.lazy_map2(
            Lazy::new(|| -> OverOption { panic!("never forced") }),
            |a, b: i32| a + b,
        );
        assert_eq!(combined.run(), None);
    }

    #[rstest]
    fn lazy_map2_forces_the_thunk_exactly_once() {
        let forced = Cell::new(0);
        let first: OverIdentity = EitherT::pure(20);
        let combined = first.lazy_map2(
            Lazy::new(|| -> OverIdentity {
                forced.set(forced.get() + 1);
                EitherT::pure(22)
            }),
            |a, b| a + b,
        );
        assert_eq!(combined.run(), Identity::new(Either::Right(42)));
        assert_eq!(forced.get(), 1);
    }

    #[rstest]
    fn lazy_map2_first_left_wins_after_forcing() {
        let first: OverIdentity = EitherT::pure(1);
        let combined = first.lazy_map2(
            Lazy::new(|| -> OverIdentity { EitherT::throw("second".to_string()) }),
            |a, b| a + b,
        );
        assert_eq!(combined.run(), Identity::new(Either::Left("second".to_string())));
    }

    #[rstest]
    fn tail_rec_runs_many_iterations_in_constant_stack() {
        let countdown: EitherT<Option<Either<String, u32>>> =
            EitherT::tail_rec(100_000u32, |n| {
                if n == 0 {
                    EitherT::pure(Either::Right(0))
                } else {
                    EitherT::pure(Either::Left(n - 1))
                }
            });
        assert_eq!(countdown.run(), Some(Either::Right(0)));
    }

    #[rstest]
    fn tail_rec_left_short_circuits() {
        let stopped: EitherT<Option<Either<String, u32>>> =
            EitherT::tail_rec(3u32, |n| {
                if n == 0 {
                    EitherT::throw("hit zero".to_string())
                } else {
                    EitherT::pure(Either::Left(n - 1))
                }
            });
        assert_eq!(stopped.run(), Some(Either::Left("hit zero".to_string())));
    }

    #[rstest]
    fn deep_flat_map_chains_via_tail_rec_over_identity() {
        let total: EitherT<Identity<Either<String, u64>>> =
            EitherT::tail_rec((0u64, 0u64), |(i, acc)| {
                if i > 100_000 {
                    EitherT::pure(Either::Right(acc))
                } else {
                    EitherT::pure(Either::Left((i + 1, acc + i)))
                }
            });
        assert_eq!(total.run(), Identity::new(Either::Right(5_000_050_000)));
    }
}
