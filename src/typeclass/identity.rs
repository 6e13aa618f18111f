//! Identity wrapper type - the identity monad.
//!
//! `Identity` wraps exactly one value and adds no behavior: `map` and
//! `flat_map` always apply their function, there is no failure state and no
//! side effect. It is the baseline the other containers are measured against.

use std::fmt;

use super::TypeConstructor;
#[cfg(feature = "control")]
use crate::control::{Flow, Routine, ShortCircuit, collect, interpret};
#[cfg(feature = "control")]
use std::convert::Infallible;

/// The identity monad - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use monads::typeclass::Identity;
///
/// let wrapped = Identity::of(1).map(|x| x + 1).map(|x| x + 1);
/// assert_eq!(wrapped.unwrap(), 3);
/// assert_eq!(wrapped.to_string(), "Identity(3)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(A);

impl<A> Identity<A> {
    /// Wraps a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::typeclass::Identity;
    ///
    /// let x = Identity::of(42);
    /// assert_eq!(x.unwrap(), 42);
    /// ```
    #[inline]
    pub const fn of(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn unwrap(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Applies `function` to the wrapped value and rewraps the result.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    /// Applies `function` and returns the `Identity` it produces directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::typeclass::Identity;
    ///
    /// let first = Identity::of(1);
    /// let second = Identity::of(2);
    /// let sum = first.flat_map(|x| second.map(|y| x + y));
    /// assert_eq!(sum.unwrap(), 3);
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

#[cfg(feature = "control")]
impl<A> Identity<A> {
    /// Runs a do-notation routine; every suspension resumes unconditionally.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::prelude::*;
    ///
    /// let result: Identity<i32> = Identity::perform(|| {
    ///     routine! {
    ///         x <= Identity::of(5);
    ///         y <= raw x + 5;
    ///         i <= Identity::of(y + 5);
    ///         t <= raw i + 5;
    ///         pure t
    ///     }
    /// });
    /// assert_eq!(result.unwrap(), 20);
    /// ```
    pub fn perform<F>(routine: F) -> Self
    where
        F: FnOnce() -> Routine<Self>,
    {
        interpret(routine())
    }
}

#[cfg(feature = "control")]
impl<A: 'static> Identity<A> {
    /// Collects the wrapped values in order.
    pub fn sequence<I>(items: I) -> Identity<Vec<A>>
    where
        I: IntoIterator<Item = Self>,
        I::IntoIter: 'static,
    {
        Identity::perform(move || collect(items.into_iter(), Identity::of))
    }
}

#[cfg(feature = "control")]
impl<A> ShortCircuit for Identity<A> {
    type Value = A;
    type Failure = Infallible;
    type Family = Identity<()>;

    #[inline]
    fn inspect(self) -> Flow<Infallible, A> {
        Flow::Continue(self.0)
    }

    #[inline]
    fn succeed(value: A) -> Self {
        Self(value)
    }

    fn fail(failure: Infallible) -> Self {
        match failure {}
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::of(value)
    }
}

impl<A: fmt::Display> fmt::Display for Identity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Identity({})", self.0)
    }
}
