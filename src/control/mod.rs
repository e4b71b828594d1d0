//! Concrete control structures.
//!
//! This module provides the data types the type class hierarchy is
//! exercised with:
//!
//! - [`Either`]: A value that is one of two alternatives
//! - [`Lazy`]: Deferred evaluation with memoization
//! - [`Sequence`]: An ordered, traversable collection wrapper
//!
//! # Examples
//!
//! ```rust
//! use kinded::control::{Either, Lazy, Sequence};
//!
//! let choice: Either<String, i32> = Either::Right(42);
//! assert!(choice.is_right());
//!
//! let deferred = Lazy::new(|| 21 * 2);
//! assert_eq!(deferred.into_value(), 42);
//!
//! let items = Sequence::wrap([1, 2, 3]);
//! assert_eq!(items.len(), 3);
//! ```

mod either;
mod lazy;
mod sequence;

pub use either::Either;
pub use lazy::{Lazy, LazyState};
pub use sequence::Sequence;
