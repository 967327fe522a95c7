//! Integration tests for `Maybe`.

use flusso::error::{HaltedUnwrap, UnwrapFailed};
use flusso::maybe::Maybe;
use flusso::outcome::Outcome;
use rstest::rstest;
use std::collections::HashMap;
use std::panic::catch_unwind;

// =============================================================================
// Construction and Equality
// =============================================================================

#[rstest]
fn test_nothing_values_are_equal_regardless_of_origin() {
    let table: HashMap<&str, i32> = HashMap::new();
    let looked_up = Maybe::from(table.get("missing").copied());
    let written: Maybe<i32> = Maybe::Nothing;
    assert_eq!(looked_up, written);
}

#[rstest]
fn test_some_values_compare_by_content() {
    assert_eq!(Maybe::Some("a".to_string()), Maybe::Some("a".to_string()));
    assert_ne!(Maybe::Some(1), Maybe::Some(2));
    assert_ne!(Maybe::Some(1), Maybe::Nothing);
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn test_fmap_on_some_and_nothing() {
    assert_eq!(Maybe::Some(42).fmap(|x| x * 2), Maybe::Some(84));
    assert_eq!(Maybe::<i32>::Nothing.fmap(|x| x * 2), Maybe::Nothing);
}

#[rstest]
fn test_fmap_skips_function_on_nothing() {
    let mut calls = 0;
    let _ = Maybe::<i32>::Nothing.fmap(|x| {
        calls += 1;
        x
    });
    assert_eq!(calls, 0);
}

#[rstest]
fn test_and_then_chain() {
    let cube = |x: i32| Maybe::Some(x * x * x);
    let square = |x: i32| Maybe::Some(x * x);
    let fail = |_: i32| Maybe::<i32>::Nothing;

    assert_eq!(Maybe::Some(2).and_then(cube).and_then(square), Maybe::Some(64));
    assert_eq!(Maybe::Some(2).and_then(fail).and_then(square), Maybe::Nothing);
}

#[rstest]
#[case(Maybe::Some(1), Maybe::Some(2), Maybe::Some(1))]
#[case(Maybe::Nothing, Maybe::Some(2), Maybe::Some(2))]
#[case(Maybe::Nothing, Maybe::Nothing, Maybe::Nothing)]
fn test_value_or(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(left.value_or(right), expected);
}

#[rstest]
#[case(Maybe::Some(1), Maybe::Some(2), Maybe::Some(2))]
#[case(Maybe::Nothing, Maybe::Some(2), Maybe::Nothing)]
#[case(Maybe::Some(1), Maybe::Nothing, Maybe::Nothing)]
fn test_value_and(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(left.value_and(right), expected);
}

#[rstest]
fn test_or_else_only_runs_on_nothing() {
    let mut calls = 0;
    let kept = Maybe::Some(1).or_else(|| {
        calls += 1;
        Maybe::Some(0)
    });
    assert_eq!(kept, Maybe::Some(1));
    assert_eq!(calls, 0);
    assert_eq!(Maybe::Nothing.or_else(|| Maybe::Some(0)), Maybe::Some(0));
}

#[rstest]
fn test_filter_by_predicate() {
    let even = |x: &i32| x % 2 == 0;
    assert_eq!(Maybe::Some(4).filter_by_predicate(even), Maybe::Some(4));
    assert_eq!(Maybe::Some(5).filter_by_predicate(even), Maybe::Nothing);
    assert_eq!(Maybe::Nothing.filter_by_predicate(even), Maybe::Nothing);
}

#[rstest]
fn test_flatten_normalizes_nested_nothing() {
    assert_eq!(Maybe::Some(Maybe::Some(1)).flatten(), Maybe::Some(1));
    assert_eq!(Maybe::Some(Maybe::<i32>::Nothing).flatten(), Maybe::Nothing);
    assert_eq!(Maybe::<Maybe<i32>>::Nothing.flatten(), Maybe::Nothing);
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn test_unwrap_returns_value() {
    assert_eq!(Maybe::Some("value").unwrap(), "value");
}

#[rstest]
fn test_unwrap_on_nothing_panics_with_halted_container() {
    let payload = catch_unwind(|| Maybe::<i32>::Nothing.unwrap()).unwrap_err();
    let halted = payload
        .downcast::<HaltedUnwrap>()
        .expect("payload should be HaltedUnwrap");
    assert_eq!(halted.message(), "called `Maybe::unwrap` on a `Nothing` value");
    let failure = halted
        .into_unwrap_failed::<Maybe<i32>>()
        .expect("halted container should be Maybe<i32>");
    assert_eq!(failure.into_halted_container(), Maybe::Nothing);
}

#[rstest]
fn test_borrowed_payload_extracts_without_unwrap() {
    let name = Maybe::Some(String::from("ada"));
    assert_eq!(name.as_ref().try_unwrap(), Ok(&String::from("ada")));
    assert_eq!(name.as_ref().expect("name is set").len(), 3);

    let missing: Maybe<String> = Maybe::Nothing;
    let failure = missing.as_ref().try_unwrap().unwrap_err();
    assert_eq!(failure.into_halted_container(), Maybe::Nothing);
    assert_eq!(name.unwrap(), "ada");
}

#[rstest]
fn test_try_unwrap() {
    assert_eq!(Maybe::Some(3).try_unwrap(), Ok(3));
    assert_eq!(
        Maybe::<i32>::Nothing.try_unwrap(),
        Err(UnwrapFailed::new(Maybe::Nothing))
    );
}

#[rstest]
fn test_defaults() {
    assert_eq!(Maybe::Nothing.unwrap_or(7), 7);
    assert_eq!(Maybe::Nothing.unwrap_or_else(|| 8), 8);
    assert_eq!(Maybe::<String>::Nothing.unwrap_or_default(), String::new());
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn test_ok_or_builds_outcome() {
    assert_eq!(Maybe::Some(1).ok_or("missing"), Outcome::Ok(1));
    assert_eq!(Maybe::<i32>::Nothing.ok_or("missing"), Outcome::Err("missing"));
    assert_eq!(
        Maybe::<i32>::Nothing.ok_or_else(|| "lazy".to_string()),
        Outcome::Err("lazy".to_string())
    );
}

#[rstest]
fn test_iteration() {
    let collected: Vec<i32> = Maybe::Some(5).into_iter().collect();
    assert_eq!(collected, vec![5]);
    assert_eq!(Maybe::<i32>::Nothing.iter().count(), 0);
}

#[rstest]
fn test_option_conversion_both_ways() {
    let option: Option<i32> = Maybe::Some(9).into();
    assert_eq!(option, Some(9));
    assert_eq!(Maybe::Some(9).into_option(), Some(9));
}
