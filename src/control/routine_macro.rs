//! `routine!` macro for do-notation style syntax.
//!
//! The macro turns a flat, imperative-looking block into a [`Routine`]
//! closure chain. Nothing is evaluated when the macro runs; the routine is
//! driven later by a container's `perform` (or [`interpret`]).
//!
//! # Syntax
//!
//! - `pattern <= container;` - suspend on a container (bind)
//! - `pattern <= raw expression;` - suspend on a plain value
//! - `let pattern = expression;` - pure let binding
//! - `pure expression` - final plain value, wrapped as a success
//! - `expression` - final container, returned as is
//!
//! `pattern` is an identifier, `_`, or a parenthesised tuple pattern.
//!
//! # Examples
//!
//! ```rust
//! use monads::prelude::*;
//!
//! struct User {
//!     first_name: String,
//!     last_name: Option<String>,
//! }
//!
//! let user = User { first_name: "John".into(), last_name: None };
//!
//! let full_name: Maybe<String> = Maybe::perform(move || {
//!     routine! {
//!         first <= raw user.first_name;
//!         last <= user.last_name;
//!         pure format!("{first} {last}")
//!     }
//! });
//!
//! assert!(full_name.is_none());
//! ```
//!
//! # Implementation Notes
//!
//! `pattern <= expression; rest` expands into
//! ```rust,ignore
//! Routine::bind(expression, move |pattern| { /* rest */ })
//! ```
//!
//! [`Routine`]: crate::control::Routine
//! [`interpret`]: crate::control::interpret

/// Builds a [`Routine`](crate::control::Routine) from do-notation syntax.
///
/// ```text
/// routine! {
///     pattern <= container;        // Suspend on a container
///     pattern <= raw expression;   // Suspend on a plain value
///     let pattern = expression;    // Pure let binding
///     pure expression              // Final plain value
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use monads::prelude::*;
///
/// let result: Outcome<String, i32> = Outcome::perform(|| {
///     routine! {
///         x <= Outcome::ok(5);
///         let doubled = x * 2;
///         (a, b) <= raw (doubled, 1);
///         pure a + b
///     }
/// });
/// assert_eq!(result, Outcome::ok(11));
/// ```
#[macro_export]
macro_rules! routine {
    // ==========================================================================
    // Terminal cases
    // ==========================================================================

    // Final plain value
    (pure $result:expr) => {
        $crate::control::Routine::pure($result)
    };

    // Final container
    ($result:expr) => {
        $crate::control::Routine::done($result)
    };

    // ==========================================================================
    // Raw suspension: pattern <= raw value; rest
    // ==========================================================================

    ($pattern:ident <= raw $value:expr ; $($rest:tt)+) => {
        $crate::control::Routine::bind_raw($value, move |$pattern| {
            $crate::routine!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= raw $value:expr ; $($rest:tt)+) => {
        $crate::control::Routine::bind_raw($value, move |($($pattern)*)| {
            $crate::routine!($($rest)+)
        })
    };

    (_ <= raw $value:expr ; $($rest:tt)+) => {
        $crate::control::Routine::bind_raw($value, move |_| {
            $crate::routine!($($rest)+)
        })
    };

    // ==========================================================================
    // Bind: pattern <= container; rest
    // ==========================================================================

    ($pattern:ident <= $container:expr ; $($rest:tt)+) => {
        $crate::control::Routine::bind($container, move |$pattern| {
            $crate::routine!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $container:expr ; $($rest:tt)+) => {
        $crate::control::Routine::bind($container, move |($($pattern)*)| {
            $crate::routine!($($rest)+)
        })
    };

    (_ <= $container:expr ; $($rest:tt)+) => {
        $crate::control::Routine::bind($container, move |_| {
            $crate::routine!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::routine!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::routine!($($rest)+)
        }
    };
}
