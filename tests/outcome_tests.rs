//! Integration tests for `Outcome`.

use flusso::error::HaltedUnwrap;
use flusso::maybe::Maybe;
use flusso::outcome::Outcome;
use rstest::rstest;
use std::num::ParseIntError;
use std::panic::catch_unwind;

fn fail_on_even(value: i32) -> Outcome<i32, String> {
    if value % 2 == 0 {
        Outcome::Err(format!("{value} is even"))
    } else {
        Outcome::Ok(value)
    }
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
#[case(Outcome::Ok(2), Outcome::Ok(6))]
#[case(Outcome::Err("Error".to_string()), Outcome::Err("Error".to_string()))]
fn test_fmap(#[case] input: Outcome<i32, String>, #[case] expected: Outcome<i32, String>) {
    assert_eq!(input.fmap(|x| x * 3), expected);
}

#[rstest]
fn test_fmap_err_transforms_only_the_error() {
    let failed: Outcome<i32, i32> = Outcome::Err(2);
    assert_eq!(failed.fmap_err(|code| code * 3), Outcome::Err(6));
    let succeeded: Outcome<&str, i32> = Outcome::Ok("Success");
    assert_eq!(succeeded.fmap_err(|code| code * 3), Outcome::Ok("Success"));
}

#[rstest]
fn test_and_then_halts_at_first_error() {
    let mut later_calls = 0;
    let result = Outcome::Ok(4).and_then(fail_on_even).and_then(|x| {
        later_calls += 1;
        Outcome::Ok(x + 1)
    });
    assert_eq!(result, Outcome::Err("4 is even".to_string()));
    assert_eq!(later_calls, 0);
}

#[rstest]
fn test_or_else_recovers() {
    let recovered: Outcome<i32, ()> = fail_on_even(2).or_else(|_| Outcome::Ok(0));
    assert_eq!(recovered, Outcome::Ok(0));
    let kept: Outcome<i32, ()> = fail_on_even(3).or_else(|_| Outcome::Ok(0));
    assert_eq!(kept, Outcome::Ok(3));
}

#[rstest]
fn test_fold_collapses_both_sides() {
    let describe = |outcome: Outcome<i32, String>| outcome.fold(|x| x.to_string(), |e| e);
    assert_eq!(describe(Outcome::Ok(1)), "1");
    assert_eq!(describe(Outcome::Err("bad".to_string())), "bad");
}

#[rstest]
#[case(Outcome::Ok(1), Outcome::Ok(2), Outcome::Ok(1))]
#[case(Outcome::Err("a"), Outcome::Ok(2), Outcome::Ok(2))]
#[case(Outcome::Err("a"), Outcome::Err("b"), Outcome::Err("b"))]
fn test_value_or(
    #[case] left: Outcome<i32, &'static str>,
    #[case] right: Outcome<i32, &'static str>,
    #[case] expected: Outcome<i32, &'static str>,
) {
    assert_eq!(left.value_or(right), expected);
}

#[rstest]
#[case(Outcome::Ok(1), Outcome::Ok(2), Outcome::Ok(2))]
#[case(Outcome::Err("a"), Outcome::Ok(2), Outcome::Err("a"))]
#[case(Outcome::Ok(1), Outcome::Err("b"), Outcome::Err("b"))]
fn test_value_and(
    #[case] left: Outcome<i32, &'static str>,
    #[case] right: Outcome<i32, &'static str>,
    #[case] expected: Outcome<i32, &'static str>,
) {
    assert_eq!(left.value_and(right), expected);
}

#[rstest]
fn test_flatten() {
    let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Ok(Outcome::Err("inner"));
    assert_eq!(nested.flatten(), Outcome::Err("inner"));
    let outer: Outcome<Outcome<i32, &str>, &str> = Outcome::Err("outer");
    assert_eq!(outer.flatten(), Outcome::Err("outer"));
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn test_unwrap_err_on_ok_panics_with_halted_container() {
    let payload = catch_unwind(|| Outcome::<i32, String>::Ok(1).unwrap_err()).unwrap_err();
    let halted = payload
        .downcast::<HaltedUnwrap>()
        .expect("payload should be HaltedUnwrap");
    assert_eq!(halted.message(), "called `Outcome::unwrap_err` on an `Ok` value");
    let failure = halted
        .downcast_ref::<Outcome<i32, String>>()
        .expect("halted container should be Outcome<i32, String>");
    assert_eq!(failure.halted_container(), &Outcome::Ok(1));
}

#[rstest]
fn test_unwrap_on_err_panics_with_halted_container() {
    let payload = catch_unwind(|| fail_on_even(2).unwrap()).unwrap_err();
    let halted = payload
        .downcast::<HaltedUnwrap>()
        .expect("payload should be HaltedUnwrap");
    assert_eq!(halted.message(), "called `Outcome::unwrap` on an `Err` value");
    assert!(halted.downcast_ref::<Outcome<i32, String>>().is_some());
}

#[rstest]
fn test_mapped_value_falls_back_with_unwrap_or() {
    let parsed: Outcome<i32, String> = Outcome::Ok(20);
    assert_eq!(parsed.fmap(|x| x * 2).unwrap_or(0), 40);
    let failed: Outcome<i32, String> = Outcome::Err("not a number".to_string());
    assert_eq!(failed.clone().fmap(|x| x * 2).unwrap_or(0), 0);
    assert_eq!(failed.value_or(Outcome::<i32, &str>::Ok(0)), Outcome::Ok(0));
}

#[rstest]
fn test_borrowed_payload_extracts_without_unwrap() {
    let parsed: Outcome<String, String> = Outcome::Ok("42".to_string());
    assert_eq!(parsed.as_ref().try_unwrap(), Ok(&"42".to_string()));
    assert_eq!(parsed.as_ref().expect("parsed").len(), 2);

    let failed: Outcome<String, String> = Outcome::Err("bad digit".to_string());
    assert_eq!(failed.as_ref().try_unwrap_err(), Ok(&"bad digit".to_string()));
    assert_eq!(
        failed.as_ref().try_unwrap().unwrap_err().into_halted_container(),
        Outcome::Err(&"bad digit".to_string())
    );
}

#[rstest]
fn test_try_unwrap_variants() {
    assert_eq!(fail_on_even(3).try_unwrap(), Ok(3));
    assert_eq!(fail_on_even(2).try_unwrap_err(), Ok("2 is even".to_string()));
    assert!(fail_on_even(2).try_unwrap().is_err());
}

#[rstest]
fn test_channels_as_maybe() {
    assert_eq!(fail_on_even(3).ok(), Maybe::Some(3));
    assert_eq!(fail_on_even(3).err(), Maybe::Nothing);
    assert_eq!(fail_on_even(2).err(), Maybe::Some("2 is even".to_string()));
}

#[rstest]
fn test_result_conversion_both_ways() {
    let parsed: Outcome<i32, ParseIntError> = "12".parse::<i32>().into();
    assert_eq!(parsed.clone().unwrap(), 12);
    let back: Result<i32, ParseIntError> = parsed.into();
    assert_eq!(back, Ok(12));
}
