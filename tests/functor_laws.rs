#![cfg(feature = "effect")]
//! Property-based tests for Functor laws.
//!
//! This module verifies that all Functor implementations satisfy the required laws:
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`

use monads::control::{Maybe, Outcome};
use monads::effect::IO;
use monads::typeclass::{Functor, Identity};
use proptest::prelude::*;

// =============================================================================
// Identity<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_identity_law(value: i32) {
        prop_assert_eq!(Identity::of(value).fmap(|x| x), Identity::of(value));
    }

    #[test]
    fn prop_identity_composition_law(value: i32) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = Identity::of(value).fmap(function1).fmap(function2);
        let right = Identity::of(value).fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Maybe<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_identity_law(value in any::<Option<String>>()) {
        let maybe = Maybe::of(value);
        prop_assert_eq!(maybe.clone().fmap(|x| x), maybe);
    }

    #[test]
    fn prop_maybe_composition_law(value in any::<Option<String>>()) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let maybe = Maybe::of(value);
        let left = maybe.clone().fmap(function1).fmap(function2);
        let right = maybe.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_fmap_agrees_with_option(value in any::<Option<i32>>()) {
        let mapped = Maybe::of(value).fmap(|n| n.wrapping_sub(3));
        prop_assert_eq!(mapped.into_option(), value.map(|n| n.wrapping_sub(3)));
    }
}

// =============================================================================
// Outcome<E, A>
// =============================================================================

proptest! {
    #[test]
    fn prop_outcome_identity_law(value in any::<Result<i32, String>>()) {
        let outcome = Outcome::from(value);
        prop_assert_eq!(outcome.clone().fmap(|x| x), outcome);
    }

    #[test]
    fn prop_outcome_composition_law(value in any::<Result<i32, String>>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let outcome = Outcome::from(value);
        let left = outcome.clone().fmap(function1).fmap(function2);
        let right = outcome.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_outcome_failure_is_untouched(error: String) {
        let failure: Outcome<String, i32> = Outcome::err(error.clone());
        prop_assert_eq!(failure.fmap(|n| n + 1), Outcome::err(error));
    }
}

// =============================================================================
// IO<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_io_identity_law(value: i32) {
        prop_assert_eq!(IO::pure(value).map(|x| x).exec(), value);
    }

    #[test]
    fn prop_io_composition_law(value: i32) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = IO::pure(value).map(function1).map(function2).exec();
        let right = IO::pure(value).map(move |x| function2(function1(x))).exec();

        prop_assert_eq!(left, right);
    }
}
