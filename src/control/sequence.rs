//! Sequence type - an ordered, traversable collection wrapper.
//!
//! This module provides `Sequence<A>`, an immutable ordered collection
//! that participates in the type class hierarchy:
//!
//! - `Functor`: per-element mapping, order- and count-preserving
//! - `Applicative`: cartesian-product combination
//! - `Traversable`: walk with an effect, collect the effects into one
//!
//! The applicative combination is the cartesian product with the receiver
//! iterated outermost. For `apply` (functions in the receiver, values in
//! the operand) this yields every function applied to every value, in
//! function-major order:
//!
//! ```rust
//! use kinded::control::Sequence;
//! use kinded::typeclass::Applicative;
//!
//! let functions: Sequence<fn(i32) -> i32> = Sequence::wrap([
//!     (|x| x + 10) as fn(i32) -> i32,
//!     (|x| x * 10) as fn(i32) -> i32,
//! ]);
//! let values = Sequence::wrap([1, 2]);
//! assert_eq!(
//!     functions.apply(values),
//!     Sequence::wrap([11, 12, 10, 20]),
//! );
//! ```

use std::collections::{VecDeque, vec_deque};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::typeclass::{Applicative, Functor, Traversable, TypeConstructor};

/// An immutable ordered collection wrapper.
///
/// All operations return new sequences; a constructed sequence is never
/// mutated. Equality is structural (element-wise, order- and
/// length-sensitive) and `Hash` is derived from the same element order, so
/// equal sequences hash equal regardless of how they were built.
///
/// Backed by a double-ended queue: `prepend`, the building block of the
/// traversal fold, is constant-time.
///
/// # Examples
///
/// ```rust
/// use kinded::control::Sequence;
/// use kinded::typeclass::Functor;
///
/// let items = Sequence::wrap([1, 2, 3]);
/// assert_eq!(items.fmap(|n| n * 2), Sequence::wrap([2, 4, 6]));
/// ```
#[derive(Clone)]
pub struct Sequence<A> {
    items: VecDeque<A>,
}

impl<A> Sequence<A> {
    /// Wraps the elements of any iterable into a sequence, preserving
    /// their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::control::Sequence;
    ///
    /// let from_array = Sequence::wrap([1, 2, 3]);
    /// let from_vec = Sequence::wrap(vec![1, 2, 3]);
    /// assert_eq!(from_array, from_vec);
    /// ```
    #[inline]
    pub fn wrap<I>(items: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Creates an empty sequence.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Returns a new sequence with `value` placed before the existing
    /// elements. Constant-time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::control::Sequence;
    ///
    /// let rest = Sequence::wrap([2, 3]);
    /// assert_eq!(rest.prepend(1), Sequence::wrap([1, 2, 3]));
    /// ```
    #[inline]
    #[must_use]
    pub fn prepend(mut self, value: A) -> Self {
        self.items.push_front(value);
        self
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the elements by reference.
    #[inline]
    pub fn iter(&self) -> vec_deque::Iter<'_, A> {
        self.items.iter()
    }

    /// Unwraps the sequence into a vector of its elements, in order.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<A> {
        self.items.into_iter().collect()
    }
}

impl<A> Default for Sequence<A> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<A> FromIterator<A> for Sequence<A> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = A>>(items: I) -> Self {
        Self::wrap(items)
    }
}

impl<A> IntoIterator for Sequence<A> {
    type Item = A;
    type IntoIter = vec_deque::IntoIter<A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Sequence<A> {
    type Item = &'a A;
    type IntoIter = vec_deque::Iter<'a, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// =============================================================================
// Equality and Hashing
// =============================================================================

/// Element-wise comparison that walks both sides in lockstep and decides
/// as soon as either side is exhausted or an element differs.
impl<A: PartialEq> PartialEq for Sequence<A> {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.items.iter();
        let mut right = other.items.iter();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a == b => {}
                _ => return false,
            }
        }
    }
}

impl<A: Eq> Eq for Sequence<A> {}

/// Hashes the element sequence in order, then the length, so equal
/// sequences hash equal.
impl<A: Hash> Hash for Sequence<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for item in &self.items {
            item.hash(state);
        }
        self.items.len().hash(state);
    }
}

impl<A: fmt::Debug> fmt::Debug for Sequence<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Sequence")?;
        formatter.debug_list().entries(&self.items).finish()
    }
}

// =============================================================================
// Type Class Instances
// =============================================================================

impl<A> TypeConstructor for Sequence<A> {
    type Inner = A;
    type WithType<B> = Sequence<B>;
}

impl<A> Functor for Sequence<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Sequence<B>
    where
        F: FnMut(A) -> B,
    {
        Sequence {
            items: self.items.into_iter().map(function).collect(),
        }
    }
}

/// Cartesian-product applicative. `A: Clone` because each element of the
/// receiver is paired with every element of the operand.
impl<A: Clone> Applicative for Sequence<A> {
    #[inline]
    fn pure<B>(value: B) -> Sequence<B> {
        Sequence {
            items: VecDeque::from([value]),
        }
    }

    fn map2<B, C, F>(self, other: Sequence<B>, mut function: F) -> Sequence<C>
    where
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        let mut items = VecDeque::with_capacity(self.items.len() * other.items.len());
        for a in &self.items {
            for b in &other.items {
                items.push_back(function(a.clone(), b.clone()));
            }
        }
        Sequence { items }
    }
}

/// Right-to-left fold: the rightmost element's effect is the innermost,
/// so the effects combine left to right and the rebuilt sequence keeps
/// the original element order.
impl<A> Traversable for Sequence<A> {
    fn traverse<M, B, F>(self, mut function: F) -> M::WithType<Sequence<B>>
    where
        M: Applicative<Inner = B>,
        B: Clone,
        Sequence<B>: Clone,
        F: FnMut(A) -> M,
    {
        let mut collected: M::WithType<Sequence<B>> = M::pure(Sequence::empty());
        for item in self.items.into_iter().rev() {
            collected = function(item).map2(collected, |head, rest| rest.prepend(head));
        }
        collected
    }
}
