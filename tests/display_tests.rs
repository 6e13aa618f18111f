//! Integration tests for Display trait implementations.
//!
//! This module tests that all containers render with consistent formatting.

#![cfg(all(feature = "control", feature = "effect"))]

use monads::control::{Maybe, Outcome, Panic};
use monads::effect::IO;
use monads::typeclass::Identity;

// =============================================================================
// Type Classes Module Display Tests
// =============================================================================

#[test]
fn test_identity_display() {
    assert_eq!(format!("{}", Identity::of(1)), "Identity(1)");
}

#[test]
fn test_identity_nested_display() {
    assert_eq!(format!("{}", Identity::of(Identity::of("x"))), "Identity(Identity(x))");
}

// =============================================================================
// Control Module Display Tests
// =============================================================================

#[test]
fn test_maybe_some_display() {
    assert_eq!(format!("{}", Maybe::some(1)), "Some(1)");
}

#[test]
fn test_maybe_none_display() {
    assert_eq!(format!("{}", Maybe::<i32>::none()), "None()");
}

#[test]
fn test_outcome_ok_display() {
    let ok: Outcome<String, i32> = Outcome::ok(42);
    assert_eq!(format!("{}", ok), "Ok(42)");
}

#[test]
fn test_outcome_err_display() {
    let err: Outcome<String, i32> = Outcome::err("wrong value".to_string());
    assert_eq!(format!("{}", err), "Err(wrong value)");
}

#[test]
fn test_outcome_panic_display() {
    let caught: Outcome<Panic, i32> = Outcome::catch_panic(|| panic!("boom"));
    assert_eq!(format!("{}", caught), "Err(panicked: boom)");
}

#[test]
fn test_maybe_of_outcome_display() {
    let nested: Maybe<Outcome<&str, u8>> = Maybe::some(Outcome::ok(1));
    assert_eq!(format!("{}", nested), "Some(Ok(1))");
}

// =============================================================================
// Effect Module Display Tests
// =============================================================================

#[test]
fn test_io_display_does_not_execute() {
    let io = IO::new(|| -> i32 { panic!("must not run") });
    assert_eq!(format!("{}", io), "<IO>");
}
