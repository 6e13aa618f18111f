#![cfg(all(feature = "serde", feature = "control"))]

//! Integration tests for serde support.
//!
//! Containers serialize through serde's derive: `Identity` as its inner
//! value, `Maybe` and `Outcome` as externally tagged enums.

use monads::control::{Maybe, Outcome};
use monads::typeclass::Identity;
use rstest::rstest;

#[rstest]
fn test_identity_is_transparent_newtype() {
    let json = serde_json::to_string(&Identity::of(5)).unwrap();
    assert_eq!(json, "5");

    let restored: Identity<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, Identity::of(5));
}

#[rstest]
#[case(Maybe::some(1), r#"{"Some":1}"#)]
#[case(Maybe::none(), r#""None""#)]
fn test_maybe_json_shape(#[case] value: Maybe<i32>, #[case] expected: &str) {
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, expected);

    let restored: Maybe<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn test_outcome_json_roundtrip() {
    let success: Outcome<String, i32> = Outcome::ok(42);
    let failure: Outcome<String, i32> = Outcome::err("error".to_string());

    let success_json = serde_json::to_string(&success).unwrap();
    let failure_json = serde_json::to_string(&failure).unwrap();
    assert_eq!(success_json, r#"{"Ok":42}"#);
    assert_eq!(failure_json, r#"{"Err":"error"}"#);

    let restored_success: Outcome<String, i32> = serde_json::from_str(&success_json).unwrap();
    let restored_failure: Outcome<String, i32> = serde_json::from_str(&failure_json).unwrap();
    assert_eq!(success, restored_success);
    assert_eq!(failure, restored_failure);
}

#[rstest]
fn test_nested_containers() {
    let nested: Maybe<Outcome<String, Vec<u8>>> = Maybe::some(Outcome::ok(vec![1, 2]));
    let json = serde_json::to_string(&nested).unwrap();
    assert_eq!(json, r#"{"Some":{"Ok":[1,2]}}"#);

    let restored: Maybe<Outcome<String, Vec<u8>>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, nested);
}
