//! Control structures: short-circuiting containers and do-notation.
//!
//! - [`Maybe`]: A value or its absence
//! - [`Outcome`]: A success value or a typed failure
//! - [`Routine`]: A suspended do-notation computation, driven by [`interpret`]
//! - [`Panic`]: A caught panic turned into a value
//!
//! Each container decides what happens when a routine suspends on it through
//! its [`ShortCircuit`] implementation: continue with the unwrapped value, or
//! abort the whole routine with a failure.
//!
//! # Examples
//!
//! ## Nullable chains
//!
//! ```rust
//! use monads::control::Maybe;
//!
//! let length = Maybe::of(Some("hello")).map(str::len);
//! assert_eq!(length, Maybe::some(5));
//! ```
//!
//! ## Do-notation
//!
//! ```rust
//! use monads::prelude::*;
//!
//! let sum: Outcome<String, i32> = Outcome::perform(|| {
//!     routine! {
//!         a <= Outcome::ok(1);
//!         b <= Ok(2);
//!         pure a + b
//!     }
//! });
//! assert_eq!(sum, Outcome::ok(3));
//! ```

mod error;
mod maybe;
mod outcome;
mod routine;
mod routine_macro;

pub use error::Panic;
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use routine::{Flow, Routine, ShortCircuit, Suspension, Yielded, collect, interpret};
