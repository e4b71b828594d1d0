//! Type class traits for functional programming abstractions.
//!
//! This module provides the fundamental type classes (traits) that form
//! the foundation of the library:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent contexts
//! - [`Monad`]: Sequencing computations with dependency
//! - [`MonadRec`]: Stack-safe tail-recursive sequencing
//! - [`Bifunctor`]: Mapping over either of two type parameters
//! - [`Traversable`]: Turning a structure of effects into an effect of
//!   the structure
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior: [`TypeConstructor`] records both the parameter a constructor
//! is currently applied to and the result of re-applying the same
//! constructor to a different parameter. Every generic operation in the
//! hierarchy returns `Self::WithType<_>`, so staying within a constructor
//! identity is checked by the compiler rather than witnessed at runtime.
//!
//! ## Foundation Types
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Identity`]: Identity wrapper type (the no-effect base context)
//!
//! # Examples
//!
//! ```rust
//! use kinded::typeclass::{Applicative, Functor, Monad};
//!
//! // Mapping preserves structure
//! let doubled: Option<i32> = Some(21).fmap(|n| n * 2);
//! assert_eq!(doubled, Some(42));
//!
//! // Combining two independent contexts
//! let sum = Some(1).map2(Some(2), |x, y| x + y);
//! assert_eq!(sum, Some(3));
//!
//! // Dependent sequencing
//! let result = Some(10).flat_map(|n| if n > 5 { Some(n) } else { None });
//! assert_eq!(result, Some(10));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod identity;
mod monad;
mod traversable;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::{Monad, MonadRec};
pub use traversable::Traversable;
