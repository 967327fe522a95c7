//! Integration tests for Display trait implementations.
//!
//! Containers render as their variant name wrapping the displayed payload.

use flusso::error::{Absent, Fault, UnwrapFailed};
use flusso::maybe::Maybe;
use flusso::outcome::Outcome;

// =============================================================================
// Container Display Tests
// =============================================================================

#[test]
fn test_maybe_some_display() {
    assert_eq!(format!("{}", Maybe::Some(42)), "Some(42)");
}

#[test]
fn test_maybe_nothing_display() {
    let nothing: Maybe<i32> = Maybe::Nothing;
    assert_eq!(format!("{}", nothing), "Nothing");
}

#[test]
fn test_outcome_ok_display() {
    let success: Outcome<String, i32> = Outcome::Ok("hello".to_string());
    assert_eq!(format!("{}", success), "Ok(hello)");
}

#[test]
fn test_outcome_err_display() {
    let failure: Outcome<i32, Absent> = Outcome::Err(Absent);
    assert_eq!(format!("{}", failure), "Err(function returned no value)");
}

#[test]
fn test_nested_display() {
    let nested: Maybe<Outcome<i32, String>> = Maybe::Some(Outcome::Ok(1));
    assert_eq!(format!("{}", nested), "Some(Ok(1))");
}

#[cfg(feature = "async")]
#[test]
fn test_async_outcome_display() {
    use flusso::async_outcome::AsyncOutcome;

    let failure: AsyncOutcome<i32, String> = AsyncOutcome::err("late".to_string());
    assert_eq!(format!("{}", failure), "AsyncOutcome(Err(late))");
}

// =============================================================================
// Error Display Tests
// =============================================================================

#[test]
fn test_unwrap_failed_display_shows_container() {
    let failure = Maybe::<i32>::Nothing.try_unwrap().unwrap_err();
    assert_eq!(
        format!("{}", failure),
        "called unwrap on a halted container: Nothing"
    );
}

#[test]
fn test_unwrap_failed_display_for_outcome() {
    let failure: UnwrapFailed<Outcome<i32, &str>> =
        Outcome::Err("boom").try_unwrap().unwrap_err();
    assert_eq!(
        format!("{}", failure),
        r#"called unwrap on a halted container: Err("boom")"#
    );
}

#[test]
fn test_fault_display() {
    let fault = Fault::Panic {
        message: "overflow".to_string(),
    };
    assert_eq!(format!("{}", fault), "panicked: overflow");
}
