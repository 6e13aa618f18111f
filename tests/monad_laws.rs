#![cfg(feature = "effect")]
//! Property-based tests for Monad laws.
//!
//! Every container must satisfy:
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! `Identity`, `Maybe` and `Outcome` share one generated test set; `IO` is
//! compared by the value `exec` produces.

use monads::control::{Maybe, Outcome};
use monads::effect::IO;
use monads::typeclass::{Identity, Monad};
use proptest::prelude::*;

// =============================================================================
// Generated laws for the comparable containers
// =============================================================================

macro_rules! monad_laws {
    ($name:ident, $container:ty, $strategy:expr, $step:expr, $fallible:expr) => {
        paste::paste! {
            proptest! {
                #[test]
                fn [<prop_ $name _left_identity>](value: i32) {
                    let function = $step;
                    let left = <$container>::pure(value).flat_map(function);
                    prop_assert_eq!(left, function(value));
                }

                #[test]
                fn [<prop_ $name _right_identity>](container in $strategy) {
                    let left = container.clone().flat_map(<$container>::pure);
                    prop_assert_eq!(left, container);
                }

                #[test]
                fn [<prop_ $name _associativity>](container in $strategy) {
                    let first = $step;
                    let second = $fallible;

                    let left = container.clone().flat_map(first).flat_map(second);
                    let right = container.flat_map(move |x| first(x).flat_map(second));
                    prop_assert_eq!(left, right);
                }
            }
        }
    };
}

monad_laws!(
    identity,
    Identity<i32>,
    any::<i32>().prop_map(Identity::of),
    |n: i32| Identity::of(n.wrapping_mul(2)),
    |n: i32| Identity::of(n.wrapping_sub(7))
);

monad_laws!(
    maybe,
    Maybe<i32>,
    any::<Option<i32>>().prop_map(Maybe::of),
    |n: i32| Maybe::some(n.wrapping_mul(2)),
    |n: i32| if n % 3 == 0 { Maybe::none() } else { Maybe::some(n.wrapping_add(1)) }
);

monad_laws!(
    outcome,
    Outcome<String, i32>,
    any::<Result<i32, String>>().prop_map(Outcome::from),
    |n: i32| Outcome::<String, i32>::ok(n.wrapping_mul(2)),
    |n: i32| if n < 0 { Outcome::err(format!("negative: {n}")) } else { Outcome::ok(n / 2) }
);

// =============================================================================
// IO
// =============================================================================

proptest! {
    #[test]
    fn prop_io_left_identity(value: i32) {
        let function = |n: i32| IO::pure(n.wrapping_mul(2));

        let left_result = IO::pure(value).flat_map(function).exec();
        let right_result = function(value).exec();

        prop_assert_eq!(left_result, right_result);
    }

    #[test]
    fn prop_io_right_identity(value: i32) {
        let left_result = IO::pure(value).flat_map(IO::pure).exec();

        prop_assert_eq!(left_result, value);
    }

    #[test]
    fn prop_io_associativity(value: i32) {
        let function1 = |n: i32| IO::pure(n.wrapping_add(1));
        let function2 = |n: i32| IO::pure(n.wrapping_mul(2));

        let left_result = IO::pure(value)
            .flat_map(function1)
            .flat_map(function2)
            .exec();
        let right_result = IO::pure(value)
            .flat_map(move |x| function1(x).flat_map(function2))
            .exec();

        prop_assert_eq!(left_result, right_result);
    }
}
