//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for emulating Higher-Kinded Types
//! (HKT) in Rust using Generic Associated Types (GAT). It is what allows
//! the type class traits (Functor, Applicative, Monad, Traversable) to be
//! written once against an abstract constructor and still hand back the
//! correct concrete type to the caller.
//!
//! # Background
//!
//! Rust cannot abstract over `Option<_>` and `Vec<_>` as bare type
//! constructors. [`TypeConstructor`] works around this: an implementing
//! type records which parameter it is currently applied to (`Inner`) and
//! how to re-apply the same constructor to another parameter
//! (`WithType<B>`). Generic code returning `Self::WithType<B>` is thereby
//! guaranteed, by the compiler, to stay within the constructor identity it
//! started from. A law-violating instance fails to type check instead of
//! failing at runtime.

use crate::control::Either;

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types. It allows abstracting over type constructors like `Option<_>`,
/// `Result<_, E>`, or `Either<L, _>`.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently
///   applied to.
/// - `WithType<B>`: The same type constructor applied to a different
///   type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should
///    be equivalent to `F` (up to type equality).
/// 2. **Identity stability**: `F::WithType<B>::WithType<C>` should be
///    equivalent to `F::WithType<C>`. All instances in this crate satisfy
///    this definitionally; generic code that needs the equality spelled
///    out states it as an associated-type-equality bound.
///
/// # Example
///
/// ```rust
/// use kinded::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
///
/// assert_inner::<Option<i32>>();
/// assert_inner::<Result<i32, String>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Option<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Option<i32>`, `WithType<String>` would be
    /// `Option<String>`. The constraint `TypeConstructor<Inner = B>`
    /// ensures that the resulting type is itself a valid type constructor,
    /// so transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

// =============================================================================
// Either<L, R> Implementation (right-biased)
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}
