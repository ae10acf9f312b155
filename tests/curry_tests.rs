#![cfg(feature = "compose")]
//! Tests for `curry` and deferred calls.
//!
//! Tests cover:
//! - Full calls and deferred calls agree for every arity
//! - Deferred calls are reusable and never run early
//! - Deferred calls as pipeline stages

use rstest::rstest;
use seqline::compose::curry;
use seqline::list_processing;
use std::cell::Cell;

fn describe(name: &str, age: u32, city: &str) -> String {
    format!("{name} ({age}) from {city}")
}

// =============================================================================
// Full vs Deferred Calls
// =============================================================================

#[rstest]
#[case("Ada", 36, "London")]
#[case("Alan", 41, "Wilmslow")]
fn curried_call_matches_direct_call(#[case] name: &str, #[case] age: u32, #[case] city: &str) {
    let curried = curry(describe);
    let direct = describe(name, age, city);

    assert_eq!(curried.call(name, (age, city)), direct);
    assert_eq!(curried.defer(name).call((age, city)), direct);
    assert_eq!(curried.call(name, ()).call((age, city)), direct);
}

#[rstest]
fn curried_unary_function() {
    let increment = curry(|value: i64| value + 1);
    assert_eq!(increment.defer(41).call(()), 42);
}

#[rstest]
fn curried_function_is_cloneable() {
    let curried = curry(|left: i32, right: i32| left * right);
    let copy = curried.clone();
    assert_eq!(curried.call(6, (7,)), copy.call(6, (7,)));
}

// =============================================================================
// Deferral
// =============================================================================

#[rstest]
fn defer_never_invokes_function() {
    let calls = Cell::new(0);
    let counted = |left: i32, right: i32| {
        calls.set(calls.get() + 1);
        left + right
    };

    let curried = curry(counted);
    let deferred = curried.defer(1);
    assert_eq!(calls.get(), 0);

    assert_eq!(deferred.call((2,)), 3);
    assert_eq!(deferred.call((5,)), 6);
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn deferred_exposes_lead() {
    let deferred = curry(describe).defer("Grace");
    assert_eq!(*deferred.lead(), "Grace");
}

#[rstest]
fn deferred_stage_in_pipeline() {
    let scale = |factor: i32, value: i32| factor * value;
    let triple = curry(scale).defer(3).into_stage::<i32>();
    let double = curry(scale).defer(2).into_stage::<i32>();

    assert_eq!(list_processing!(7, triple, double), 42);
}

#[rstest]
fn deferred_call_once_moves_non_clone_lead() {
    let push = |mut values: Vec<String>, value: String| {
        values.push(value);
        values
    };
    let deferred = curry(push).defer(vec!["first".to_string()]);
    assert_eq!(deferred.call_once(("second".to_string(),)), vec!["first", "second"]);
}
