//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
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
//! use monads::typeclass::{Identity, Monad};
//!
//! let x = <Identity<()>>::pure(5);
//! let y = Monad::flat_map(x, |n| Identity::of(n * 2));
//! assert_eq!(y, Identity::of(10));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for types that support sequencing of computations.
///
/// `pure` lifts a plain value into the context and `flat_map` lets the value
/// produced by one computation decide which computation runs next.
pub trait Monad: Functor {
    /// Lifts a pure value into the monadic context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::typeclass::{Identity, Monad};
    ///
    /// let x: Identity<i32> = <Identity<()>>::pure(42);
    /// assert_eq!(x.unwrap(), 42);
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind).
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        Monad::flat_map(self, function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is a failure (an absent `Maybe`, an `Err` outcome) the
    /// failure propagates and `next` is dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        Monad::flat_map(self, |_| next)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity::of(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        Self::flat_map(self, function)
    }
}
