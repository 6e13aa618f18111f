//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] uses a GAT to name "the same container holding a
//! different type", which is what `Functor::fmap` and `Monad::flat_map`
//! need to state their return types.
//!
//! # Example
//!
//! ```rust
//! use monads::typeclass::{Identity, TypeConstructor};
//!
//! fn relabel<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let relabelled: Identity<String> = relabel(Identity::of(42));
//! assert_eq!(relabelled, Identity::of(String::new()));
//! ```

/// A trait representing a type constructor applied to one type argument.
///
/// # Associated Types
///
/// - `Inner`: The type the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Identity<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
