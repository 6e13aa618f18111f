//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their inner value while preserving the structure.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monads::typeclass::{Functor, Identity};
//!
//! let wrapped = Identity::of(5);
//! let transformed: Identity<String> = wrapped.fmap(|n| n.to_string());
//! assert_eq!(transformed, Identity::of("5".to_string()));
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for types that can have a function mapped over their contents.
///
/// Every container in this crate also exposes an inherent `map`; `fmap` is the
/// same operation reached through the trait, so code generic over `Functor`
/// can be written once for all of them.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::typeclass::{Functor, Identity};
    ///
    /// let y = Identity::of(5).fmap(|n| n * 2);
    /// assert_eq!(y.unwrap(), 10);
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::typeclass::{Functor, Identity};
    ///
    /// let x = Identity::of("hello".to_string());
    /// let y = x.fmap_ref(|s| s.len());
    /// assert_eq!(y.unwrap(), 5);
    /// assert_eq!(x.unwrap(), "hello");
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping only the structure.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity::of(function(self.as_inner()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_fmap_transforms_value() {
        let wrapped = Identity::of(21);
        assert_eq!(wrapped.fmap(|x| x * 2), Identity::of(42));
    }

    #[rstest]
    fn identity_fmap_ref_keeps_original() {
        let wrapped = Identity::of(vec![1, 2, 3]);
        let length = wrapped.fmap_ref(Vec::len);
        assert_eq!(length, Identity::of(3));
        assert_eq!(wrapped.unwrap(), vec![1, 2, 3]);
    }

    #[rstest]
    fn identity_replace() {
        assert_eq!(Identity::of(1).replace("x"), Identity::of("x"));
    }

    #[rstest]
    fn identity_void() {
        assert_eq!(Identity::of(1).void(), Identity::of(()));
    }

    /// Identity law: fa.fmap(|x| x) == fa
    #[rstest]
    fn identity_wrapper_identity_law() {
        let wrapped = Identity::of(42);
        assert_eq!(wrapped.fmap(|x| x), wrapped);
    }

    /// Composition law: fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
    #[rstest]
    fn identity_wrapper_composition_law() {
        let function1 = |n: i32| n + 1;
        let function2 = |n: i32| n * 2;

        let left = Identity::of(5).fmap(function1).fmap(function2);
        let right = Identity::of(5).fmap(move |x| function2(function1(x)));

        assert_eq!(left, right);
        assert_eq!(left, Identity::of(12));
    }
}
