//! Type class traits shared by every container.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Mapping over container values
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Identity`]: The container that adds no behavior
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing traits like `Functor` and `Monad` to name
//! "the same container holding another type" in their signatures.
//!
//! # Examples
//!
//! ```rust
//! use monads::typeclass::{Functor, Identity, Monad};
//!
//! fn add_one<M>(container: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     container.fmap(|x| x + 1)
//! }
//!
//! assert_eq!(add_one(Identity::of(1)), Identity::of(2));
//! assert_eq!(<Identity<()>>::pure(3).flat_map(|x| Identity::of(x * 2)), Identity::of(6));
//! ```

mod functor;
mod higher;
mod identity;
mod monad;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
