//! # kinded
//!
//! A small functional programming library for Rust providing a type class
//! hierarchy over GAT-emulated higher-kinded types, together with two
//! featured instances:
//!
//! - [`control::Sequence`]: a traversable wrapper over an ordered collection
//!   whose applicative combination is the cartesian product
//! - [`transformer::EitherT`]: a monad transformer layering two-armed choice
//!   semantics over an arbitrary base context
//!
//! ## Overview
//!
//! Rust has no native higher-kinded types, so a trait cannot directly range
//! over "a type constructor applied to some parameter". This library encodes
//! that capability with a generic associated type
//! ([`typeclass::TypeConstructor`]): each instance names its own constructor
//! identity, and every generic operation (`fmap`, `map2`, `flat_map`,
//! `traverse`) returns `Self::WithType<_>`, so the compiler enforces that
//! generic algorithms stay within the constructor they started from.
//!
//! On top of that foundation sit the capability traits and their
//! instances:
//!
//! - **Type Classes**: [`typeclass::Functor`], [`typeclass::Applicative`],
//!   [`typeclass::Monad`], [`typeclass::MonadRec`], [`typeclass::Bifunctor`],
//!   [`typeclass::Traversable`]
//! - **Control Structures**: [`control::Either`] for two-armed choice,
//!   [`control::Lazy`] for memoized deferral, [`control::Sequence`] for
//!   ordered traversal
//! - **Transformers**: [`transformer::EitherT`]
//!
//! ## Example
//!
//! ```rust
//! use kinded::prelude::*;
//!
//! // Traverse a sequence with an Option effect: all-or-nothing parsing.
//! let digits = Sequence::wrap(["1", "2", "3"]);
//! let parsed: Option<Sequence<i32>> = digits.traverse(|s| s.parse().ok());
//! assert_eq!(parsed, Some(Sequence::wrap([1, 2, 3])));
//!
//! // Layer failure semantics over Option with EitherT.
//! let start: EitherT<Option<Either<String, i32>>> = EitherT::pure(10);
//! let halved = start.flat_map(|n| {
//!     if n % 2 == 0 {
//!         EitherT::new(Some(Either::Right(n / 2)))
//!     } else {
//!         EitherT::new(Some(Either::Left("odd".to_string())))
//!     }
//! });
//! assert_eq!(halved.run(), Some(Either::Right(5)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kinded::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::transformer::*;
    pub use crate::typeclass::*;
}

pub mod control;
pub mod transformer;
pub mod typeclass;
