//! Outcome type - a success value or a typed failure.
//!
//! `Outcome<E, T>` is `Ok(T)` or `Err(E)`. Failure short-circuits: `map` and
//! `flat_map` skip their function on `Err` and carry the failure forward
//! unchanged, so the first failure in a chain is the one observed at the end.
//!
//! Faults that surface as panics can be turned into values with
//! [`Outcome::catch_panic`] and [`Outcome::perform_catching`].
//!
//! # Examples
//!
//! ```rust
//! use monads::control::Outcome;
//!
//! let parse = |input: &str| Outcome::try_catch(|| input.parse::<i32>());
//!
//! assert_eq!(parse("21").map(|n| n * 2), Outcome::ok(42));
//! assert!(parse("twenty-one").map(|n| n * 2).is_err());
//! ```

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use super::error::Panic;
use super::routine::{Flow, Routine, ShortCircuit, collect, interpret};
use crate::typeclass::{Functor, Monad, TypeConstructor};

/// Either a success value `T` or a failure `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<E, T> {
    /// A failure.
    Err(E),
    /// A success.
    Ok(T),
}

impl<E, T> Outcome<E, T> {
    /// Wraps a success value.
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Wraps a failure.
    #[inline]
    pub const fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Runs a fallible function and captures its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Outcome;
    ///
    /// let value: Outcome<String, i32> = Outcome::try_catch(|| Err("bad".to_string()));
    /// assert_eq!(value, Outcome::err("bad".to_string()));
    /// ```
    #[inline]
    pub fn try_catch<F>(function: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        function().into()
    }

    /// Returns `true` for a success.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` for a failure.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Applies `function` to a success; a failure passes through untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies `function`, which may itself fail, to a success.
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> Outcome<E, U>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms a failure; a success passes through untouched.
    #[inline]
    pub fn map_err<G, F>(self, function: F) -> Outcome<G, T>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    /// Exhaustive case analysis; exactly one of the two functions runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Outcome;
    ///
    /// let describe = |outcome: Outcome<String, i32>| {
    ///     outcome.match_with(|value| format!("got {value}"), |error| format!("failed: {error}"))
    /// };
    /// assert_eq!(describe(Outcome::ok(1)), "got 1");
    /// assert_eq!(describe(Outcome::err("nope".into())), "failed: nope");
    /// ```
    #[inline]
    pub fn match_with<U, O, R>(self, ok: O, err: R) -> U
    where
        O: FnOnce(T) -> U,
        R: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(value) => ok(value),
            Self::Err(error) => err(error),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.match_with(|value| value, |_| default)
    }

    /// Converts into the standard library `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.match_with(Ok, Err)
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&E, &T> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Runs a do-notation routine that stops at the first failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::prelude::*;
    ///
    /// let divide = |a: i32, b: i32| {
    ///     if b == 0 { Outcome::err("division by zero") } else { Outcome::ok(a / b) }
    /// };
    ///
    /// let result: Outcome<&str, i32> = Outcome::perform(move || {
    ///     routine! {
    ///         x <= divide(10, 2);
    ///         y <= divide(x, 0);
    ///         pure x + y
    ///     }
    /// });
    /// assert_eq!(result, Outcome::err("division by zero"));
    /// ```
    pub fn perform<F>(routine: F) -> Self
    where
        F: FnOnce() -> Routine<Self>,
    {
        interpret(routine())
    }

    /// Runs a do-notation routine, turning a panic raised while it runs into
    /// a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::prelude::*;
    ///
    /// let result: Outcome<Panic, i32> = Outcome::perform_catching(|| {
    ///     routine! {
    ///         x <= Outcome::ok(1);
    ///         let () = if x > 0 { panic!("unexpected") };
    ///         pure x
    ///     }
    /// });
    /// assert_eq!(result.match_with(|_| String::new(), |fault| fault.message().to_string()), "unexpected");
    /// ```
    pub fn perform_catching<F>(routine: F) -> Self
    where
        E: From<Panic>,
        F: FnOnce() -> Routine<Self>,
    {
        panic::catch_unwind(AssertUnwindSafe(|| interpret(routine()))).unwrap_or_else(|payload| {
            let fault = Panic::from_payload(payload.as_ref());
            #[cfg(feature = "tracing")]
            tracing::warn!(panic = fault.message(), "routine panicked");
            Self::Err(E::from(fault))
        })
    }
}

impl<T> Outcome<Panic, T> {
    /// Runs `function`, capturing a panic as a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Outcome;
    ///
    /// let value = Outcome::catch_panic(|| -> i32 { panic!("boom") });
    /// assert!(value.is_err());
    /// assert_eq!(Outcome::catch_panic(|| 5), Outcome::ok(5));
    /// ```
    pub fn catch_panic<F>(function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Ok(value),
            Err(payload) => {
                let fault = Panic::from_payload(payload.as_ref());
                #[cfg(feature = "tracing")]
                tracing::warn!(panic = fault.message(), "panic captured");
                Self::Err(fault)
            }
        }
    }
}

impl<E: 'static, T: 'static> Outcome<E, T> {
    /// Collects successes in order; the first failure becomes the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Outcome;
    ///
    /// let all: Outcome<&str, Vec<i32>> = Outcome::sequence(vec![Outcome::ok(1), Outcome::ok(2)]);
    /// assert_eq!(all, Outcome::ok(vec![1, 2]));
    ///
    /// let first: Outcome<&str, Vec<i32>> =
    ///     Outcome::sequence(vec![Outcome::ok(1), Outcome::err("a"), Outcome::err("b")]);
    /// assert_eq!(first, Outcome::err("a"));
    /// ```
    pub fn sequence<I>(items: I) -> Outcome<E, Vec<T>>
    where
        I: IntoIterator<Item = Self>,
        I::IntoIter: 'static,
    {
        Outcome::perform(move || collect(items.into_iter(), Outcome::ok))
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<E, T> From<Result<T, E>> for Outcome<E, T> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<E, T> From<Outcome<E, T>> for Result<T, E> {
    fn from(value: Outcome<E, T>) -> Self {
        value.into_result()
    }
}

impl<E: fmt::Display, T: fmt::Display> fmt::Display for Outcome<E, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Err(error) => write!(formatter, "Err({error})"),
        }
    }
}

// =============================================================================
// Type Classes
// =============================================================================

impl<E, T> TypeConstructor for Outcome<E, T> {
    type Inner = T;
    type WithType<B> = Outcome<E, B>;
}

impl<E: Clone, T> Functor for Outcome<E, T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error.clone()),
        }
    }
}

impl<E: Clone, T> Monad for Outcome<E, T> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<E, B> {
        Outcome::Ok(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(T) -> Outcome<E, B>,
    {
        Self::flat_map(self, function)
    }
}

// =============================================================================
// Do-notation Policy
// =============================================================================

impl<E, T> ShortCircuit for Outcome<E, T> {
    type Value = T;
    type Failure = E;
    type Family = Outcome<E, ()>;

    #[inline]
    fn inspect(self) -> Flow<E, T> {
        self.match_with(Flow::Continue, Flow::Abort)
    }

    #[inline]
    fn succeed(value: T) -> Self {
        Self::Ok(value)
    }

    #[inline]
    fn fail(failure: E) -> Self {
        Self::Err(failure)
    }
}

/// A fallible value bound inside an `Outcome` routine: `Err` aborts.
impl<T, E> ShortCircuit for Result<T, E> {
    type Value = T;
    type Failure = E;
    type Family = Outcome<E, ()>;

    #[inline]
    fn inspect(self) -> Flow<E, T> {
        match self {
            Ok(value) => Flow::Continue(value),
            Err(error) => Flow::Abort(error),
        }
    }

    #[inline]
    fn succeed(value: T) -> Self {
        Ok(value)
    }

    #[inline]
    fn fail(failure: E) -> Self {
        Err(failure)
    }
}
