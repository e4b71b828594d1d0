//! Lazy evaluation with memoization.
//!
//! This module provides `Lazy<T, F>`, a deferred computation that runs at
//! most once. Nothing happens at construction; the thunk runs on the first
//! demand and the result is cached. The transformer's short-circuiting
//! combination ([`EitherT::lazy_map2`](crate::transformer::EitherT::lazy_map2))
//! takes its second operand as a `Lazy` precisely so that a short-circuited
//! branch never runs it.
//!
//! # Examples
//!
//! ```rust
//! use kinded::control::Lazy;
//! use std::cell::Cell;
//!
//! let runs = Cell::new(0);
//! let deferred = Lazy::new(|| {
//!     runs.set(runs.get() + 1);
//!     42
//! });
//!
//! assert_eq!(runs.get(), 0); // Not run yet
//!
//! assert_eq!(*deferred.force(), 42);
//! assert_eq!(runs.get(), 1);
//!
//! assert_eq!(*deferred.force(), 42);
//! assert_eq!(runs.get(), 1); // Memoized, not recomputed
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;

/// The internal state of a `Lazy` value.
///
/// Tracks whether the value is still pending, has been computed, or was
/// poisoned by a panic during computation.
#[derive(Debug)]
pub enum LazyState<T, F> {
    /// Not computed yet; holds the thunk.
    Uninit(F),
    /// Computed; holds the value.
    Init(T),
    /// The thunk panicked. The lazy value is unusable.
    Poisoned,
}

/// A deferred computation that runs at most once.
///
/// # Type Parameters
///
/// * `T` - The type of the computed value
/// * `F` - The thunk type (defaults to `fn() -> T`)
///
/// # Thread Safety
///
/// Not thread-safe; for concurrent access use `std::sync::LazyLock`.
///
/// # Examples
///
/// ```rust
/// use kinded::control::Lazy;
///
/// let deferred = Lazy::new(|| 21 * 2);
/// assert!(!deferred.is_initialized());
/// assert_eq!(deferred.into_value(), 42);
/// ```
pub struct Lazy<T, F = fn() -> T> {
    state: RefCell<LazyState<T, F>>,
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Creates a deferred computation. The thunk does not run until the
    /// value is first demanded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::control::Lazy;
    ///
    /// let deferred = Lazy::new(|| 42);
    /// assert!(!deferred.is_initialized());
    /// ```
    #[inline]
    pub fn new(initializer: F) -> Self {
        Self {
            state: RefCell::new(LazyState::Uninit(initializer)),
        }
    }

    /// Forces evaluation and returns a reference to the value.
    ///
    /// The thunk runs on the first call; later calls return the cached
    /// value.
    ///
    /// # Panics
    ///
    /// - If the thunk panics, the value becomes poisoned and this call
    ///   unwinds with the thunk's panic.
    /// - If the value was already poisoned by an earlier panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::control::Lazy;
    ///
    /// let deferred = Lazy::new(|| 42);
    /// assert_eq!(*deferred.force(), 42);
    /// ```
    pub fn force(&self) -> Ref<'_, T> {
        // Check with a short borrow so the borrow is not held while the
        // thunk runs.
        let needs_initialization = {
            let state = self.state.borrow();
            match &*state {
                LazyState::Init(_) => false,
                LazyState::Poisoned => panic!("Lazy instance has been poisoned"),
                LazyState::Uninit(_) => true,
            }
        };

        if needs_initialization {
            self.initialize();
        }

        Ref::map(self.state.borrow(), |state| match state {
            LazyState::Init(value) => value,
            _ => panic!("Lazy should be initialized at this point"),
        })
    }

    /// Consumes the lazy value, forcing it if necessary, and returns the
    /// computed value.
    ///
    /// # Panics
    ///
    /// Panics if the value was poisoned by an earlier panic, or if the
    /// thunk panics now.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::control::Lazy;
    ///
    /// let deferred = Lazy::new(|| 42);
    /// assert_eq!(deferred.into_value(), 42);
    /// ```
    pub fn into_value(self) -> T {
        match self.state.into_inner() {
            LazyState::Init(value) => value,
            LazyState::Uninit(initializer) => initializer(),
            LazyState::Poisoned => panic!("Lazy instance has been poisoned"),
        }
    }

    /// Runs the thunk and transitions to `Init`.
    ///
    /// The state is moved to `Poisoned` before the thunk runs, so a panic
    /// inside it leaves the value poisoned rather than half-initialized.
    fn initialize(&self) {
        let mut state = self.state.borrow_mut();

        match &*state {
            LazyState::Init(_) => return,
            LazyState::Poisoned => panic!("Lazy instance has been poisoned"),
            LazyState::Uninit(_) => {}
        }

        let LazyState::Uninit(initializer) = std::mem::replace(&mut *state, LazyState::Poisoned)
        else {
            unreachable!()
        };

        let value = initializer();

        *state = LazyState::Init(value);
    }
}

impl<T> Lazy<T, fn() -> T> {
    /// Creates an already-computed lazy value.
    ///
    /// Useful when a value is already at hand but the API expects a
    /// deferred one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::control::Lazy;
    ///
    /// let ready = Lazy::new_with_value(42);
    /// assert!(ready.is_initialized());
    /// ```
    #[inline]
    pub fn new_with_value(value: T) -> Self {
        Self {
            state: RefCell::new(LazyState::Init(value)),
        }
    }
}

impl<T, F> Lazy<T, F> {
    /// Returns whether the value has been computed.
    ///
    /// Does not trigger evaluation.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Init(_))
    }

    /// Returns whether the thunk panicked on a previous evaluation.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Poisoned)
    }
}

impl<T: Default> Default for Lazy<T> {
    /// Creates a lazy value that computes `T::default()`.
    fn default() -> Self {
        Self::new(T::default)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        match &*state {
            LazyState::Init(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            LazyState::Uninit(_) => formatter.debug_tuple("Lazy").field(&"<uninit>").finish(),
            LazyState::Poisoned => formatter.debug_tuple("Lazy").field(&"<poisoned>").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn construction_is_deferred() {
        let deferred = Lazy::new(|| 42);
        assert!(!deferred.is_initialized());
    }

    #[rstest]
    fn force_computes_and_memoizes() {
        let runs = Cell::new(0);
        let deferred = Lazy::new(|| {
            runs.set(runs.get() + 1);
            42
        });

        assert_eq!(runs.get(), 0);

        assert_eq!(*deferred.force(), 42);
        assert_eq!(runs.get(), 1);

        assert_eq!(*deferred.force(), 42);
        assert_eq!(runs.get(), 1);
    }

    #[rstest]
    fn into_value_forces_when_pending() {
        let deferred = Lazy::new(|| 21 * 2);
        assert_eq!(deferred.into_value(), 42);
    }

    #[rstest]
    fn into_value_returns_cached_value() {
        let deferred = Lazy::new(|| 42);
        let _ = deferred.force();
        assert_eq!(deferred.into_value(), 42);
    }

    #[rstest]
    fn new_with_value_is_initialized() {
        let ready = Lazy::new_with_value(42);
        assert!(ready.is_initialized());
        assert_eq!(*ready.force(), 42);
    }

    #[rstest]
    fn panicking_thunk_poisons() {
        let deferred: Lazy<i32, _> = Lazy::new(|| panic!("boom"));
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = deferred.force();
        }));
        assert!(result.is_err());
        assert!(deferred.is_poisoned());
    }

    #[rstest]
    fn debug_shows_state() {
        let deferred = Lazy::new(|| 42);
        assert_eq!(format!("{deferred:?}"), "Lazy(\"<uninit>\")");
        let _ = deferred.force();
        assert_eq!(format!("{deferred:?}"), "Lazy(42)");
    }
}
