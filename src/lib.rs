//! # monads
//!
//! Monadic containers with a uniform `map`/`flat_map` interface and a
//! do-notation interpreter that runs imperative-looking routines against
//! each container's bind semantics.
//!
//! ## Overview
//!
//! - **Type Classes**: `TypeConstructor`, `Functor`, `Monad`, and the
//!   `Identity` container
//! - **Control**: `Maybe` (absence), `Outcome` (typed failure), and the
//!   `Routine` suspension sequence driven by [`control::interpret`]
//! - **Effect**: `IO`, a deferred and repeatable effect
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and `Identity`
//! - `control`: `Maybe`, `Outcome`, `Panic` and the do-notation interpreter
//! - `effect`: `IO`
//! - `serde`: Serialize/Deserialize for `Identity`, `Maybe` and `Outcome`
//! - `tracing`: Interpreter events through the `tracing` crate
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monads::prelude::*;
//!
//! let total: Maybe<i32> = Maybe::perform(|| {
//!     routine! {
//!         x <= Maybe::some(5);
//!         y <= Some(x + 5);
//!         z <= raw y * 2;
//!         pure x + z
//!     }
//! });
//! assert_eq!(total, Maybe::some(25));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and macros.
///
/// # Usage
///
/// ```rust
/// use monads::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "control")]
    pub use crate::routine;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
