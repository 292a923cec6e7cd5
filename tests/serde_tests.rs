#![cfg(feature = "serde")]

//! Integration tests for serde support in funkit.
//!
//! These tests verify that `Maybe` serializes and deserializes with
//! `serde_json`, alone and nested inside list results.

use funkit::control::Maybe;
use rstest::rstest;

#[rstest]
fn test_maybe_json_roundtrip() {
    let just: Maybe<i32> = Maybe::just(42);
    let nothing: Maybe<i32> = Maybe::nothing();

    let just_json = serde_json::to_string(&just).unwrap();
    let nothing_json = serde_json::to_string(&nothing).unwrap();

    let restored_just: Maybe<i32> = serde_json::from_str(&just_json).unwrap();
    let restored_nothing: Maybe<i32> = serde_json::from_str(&nothing_json).unwrap();

    assert_eq!(just, restored_just);
    assert_eq!(nothing, restored_nothing);
}

#[rstest]
fn test_maybe_uses_externally_tagged_variants() {
    assert_eq!(serde_json::to_string(&Maybe::just(1)).unwrap(), r#"{"Just":1}"#);
    assert_eq!(
        serde_json::to_string(&Maybe::<i32>::nothing()).unwrap(),
        r#""Nothing""#
    );
}

#[cfg(feature = "list")]
#[rstest]
fn test_uncons_result_roundtrip() {
    let decomposed = funkit::list::uncons(&[String::from("a"), String::from("b")]);
    let json = serde_json::to_string(&decomposed).unwrap();
    let restored: Maybe<(String, Vec<String>)> = serde_json::from_str(&json).unwrap();
    assert_eq!(decomposed, restored);
}

#[rstest]
fn test_maybe_rejects_unknown_variant() {
    let result: Result<Maybe<i32>, _> = serde_json::from_str(r#"{"Some":1}"#);
    assert!(result.is_err());
}
