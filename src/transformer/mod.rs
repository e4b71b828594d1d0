//! Monad transformers.
//!
//! A transformer layers one effect's semantics over an arbitrary base
//! context, producing a single context that carries both. This module
//! provides [`EitherT`], which layers two-armed choice (the
//! [`Either`](crate::control::Either) semantics) over any base
//! constructor.
//!
//! # Examples
//!
//! ```rust
//! use kinded::control::Either;
//! use kinded::transformer::EitherT;
//! use kinded::typeclass::Monad;
//!
//! // Option as the base context, String as the error arm.
//! let layered: EitherT<Option<Either<String, i32>>> = EitherT::pure(10);
//! let halved = layered.flat_map(|n| {
//!     if n % 2 == 0 {
//!         EitherT::pure(n / 2)
//!     } else {
//!         EitherT::throw("odd".to_string())
//!     }
//! });
//! assert_eq!(halved.run(), Some(Either::Right(5)));
//! ```

mod either_transformer;

pub use either_transformer::EitherT;
