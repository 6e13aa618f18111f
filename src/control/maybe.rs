//! Maybe type - a value or its absence.
//!
//! `Maybe<T>` models nullable computation. Absence is contagious: once a
//! chain of `map`/`flat_map` meets `None`, every later step is skipped and
//! the chain stays `None`.
//!
//! Inside a do-notation routine, both `Maybe<T>` and the standard library's
//! `Option<T>` (the null-like raw value) can be bound; an absent one aborts
//! the routine before any later step runs.
//!
//! # Examples
//!
//! ```rust
//! use monads::control::Maybe;
//!
//! let shout = |input: Option<&str>| {
//!     Maybe::of(input)
//!         .map(str::to_uppercase)
//!         .map(|text| text.chars().rev().collect::<String>())
//!         .match_with(|text| text, || "Nothing".to_string())
//! };
//!
//! assert_eq!(shout(Some("hello")), "OLLEH");
//! assert_eq!(shout(None), "Nothing");
//! ```

use std::fmt;

use super::routine::{Flow, Routine, ShortCircuit, collect, interpret};
use crate::typeclass::{Functor, Monad, TypeConstructor};

/// A value of type `T`, or nothing.
///
/// The `None` variant is an ordinary value, not a shared sentinel; two absent
/// `Maybe`s of the same type compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    #[default]
    None,
    /// A present value.
    Some(T),
}

impl<T> Maybe<T> {
    /// Wraps a present value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// The absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Builds a `Maybe` from a nullable value; `Option::None` collapses to absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(Some(1)), Maybe::some(1));
    /// assert_eq!(Maybe::<i32>::of(None), Maybe::none());
    /// ```
    #[inline]
    pub fn of(value: Option<T>) -> Self {
        value.map_or(Self::None, Self::Some)
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if the value is absent.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Applies `function` to a present value; absence stays absent.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Applies a function whose result may be null-like; `None` makes the
    /// result absent.
    ///
    /// `map` keeps whatever `function` returns, so mapping to an `Option`
    /// yields `Maybe<Option<U>>` and `Some(None)` still counts as present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Maybe;
    ///
    /// let first_char = |text: &str| text.chars().next();
    /// assert_eq!(Maybe::some("abc").map_nullable(first_char), Maybe::some('a'));
    /// assert_eq!(Maybe::some("").map_nullable(first_char), Maybe::none());
    /// ```
    #[inline]
    pub fn map_nullable<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.flat_map(|value| Maybe::of(function(value)))
    }

    /// Applies `function`, which itself returns a `Maybe`, to a present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Maybe;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() };
    /// assert_eq!(Maybe::some(8).flat_map(halve).flat_map(halve), Maybe::some(2));
    /// assert_eq!(Maybe::some(6).flat_map(halve).flat_map(halve), Maybe::none());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Exhaustive case analysis; exactly one of the two functions runs.
    #[inline]
    pub fn match_with<U, S, N>(self, some: S, none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => some(value),
            Self::None => none(),
        }
    }

    /// Returns the present value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.match_with(|value| value, || default)
    }

    /// Converts into the standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.match_with(Some, || None)
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Runs a do-notation routine that stops at the first absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::prelude::*;
    ///
    /// let text = "ala ma kota";
    /// let found: Maybe<&str> = Maybe::perform(move || {
    ///     routine! {
    ///         word <= if text.contains("ala") { Maybe::some("ala") } else { Maybe::none() };
    ///         pure word
    ///     }
    /// });
    /// assert_eq!(found.unwrap_or("Nothing"), "ala");
    /// ```
    pub fn perform<F>(routine: F) -> Self
    where
        F: FnOnce() -> Routine<Self>,
    {
        interpret(routine())
    }
}

impl<T: 'static> Maybe<T> {
    /// Collects present values in order; the first absent one makes the whole
    /// result absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Maybe;
    ///
    /// assert_eq!(Maybe::sequence(vec![Maybe::some(1), Maybe::some(2)]), Maybe::some(vec![1, 2]));
    /// assert_eq!(
    ///     Maybe::sequence(vec![Maybe::some(1), Maybe::none(), Maybe::some(2)]),
    ///     Maybe::none()
    /// );
    /// ```
    pub fn sequence<I>(items: I) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
        I::IntoIter: 'static,
    {
        Maybe::perform(move || collect(items.into_iter(), Maybe::some))
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None()"),
        }
    }
}

// =============================================================================
// Type Classes
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

// =============================================================================
// Do-notation Policy
// =============================================================================

impl<T> ShortCircuit for Maybe<T> {
    type Value = T;
    type Failure = ();
    type Family = Maybe<()>;

    #[inline]
    fn inspect(self) -> Flow<(), T> {
        self.match_with(Flow::Continue, || Flow::Abort(()))
    }

    #[inline]
    fn succeed(value: T) -> Self {
        Self::Some(value)
    }

    #[inline]
    fn fail((): ()) -> Self {
        Self::None
    }
}

/// A nullable value bound inside a `Maybe` routine: `None` aborts.
impl<T> ShortCircuit for Option<T> {
    type Value = T;
    type Failure = ();
    type Family = Maybe<()>;

    #[inline]
    fn inspect(self) -> Flow<(), T> {
        self.map_or(Flow::Abort(()), Flow::Continue)
    }

    #[inline]
    fn succeed(value: T) -> Self {
        Some(value)
    }

    #[inline]
    fn fail((): ()) -> Self {
        None
    }
}
