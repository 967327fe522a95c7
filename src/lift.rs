//! Lifting decorators.
//!
//! These functions wrap an ordinary function and return a new function whose
//! return value is a container. Each decorator follows exactly one
//! discipline:
//!
//! | decorator | input function returns | absence / fault becomes |
//! |-----------|------------------------|-------------------------|
//! | [`option`] | `Option<T>` | `None` → `Maybe::Nothing` |
//! | [`result`] | `Option<T>` | `None` → `Outcome::Err(Absent)` |
//! | [`catching`] | `T` | panic → `Outcome::Err(Fault)` |
//!
//! Lifted functions take a single argument; use a tuple for several.
//!
//! # Examples
//!
//! ```rust
//! use flusso::lift;
//! use flusso::maybe::Maybe;
//! use std::collections::HashMap;
//!
//! let table = HashMap::from([("a", "b")]);
//! let lookup = lift::option(|key: &str| table.get(key).copied());
//!
//! assert_eq!(lookup("a"), Maybe::Some("b"));
//! assert_eq!(lookup("c"), Maybe::Nothing);
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::error::{Absent, Fault};
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Lifts a function returning `Option<T>` into one returning `Maybe<T>`.
///
/// The wrapped function is called once per invocation; `None` becomes
/// `Nothing`.
///
/// # Examples
///
/// ```rust
/// use flusso::lift;
/// use flusso::maybe::Maybe;
///
/// let non_zero = lift::option(|x: i32| (x != 0).then_some(x));
/// assert_eq!(non_zero(0), Maybe::Nothing);
/// assert_eq!(non_zero(5), Maybe::Some(5));
/// ```
pub fn option<A, T, F>(function: F) -> impl Fn(A) -> Maybe<T>
where
    F: Fn(A) -> Option<T>,
{
    move |argument| Maybe::from_option(function(argument))
}

/// Lifts a function returning `Option<T>` into one returning
/// `Outcome<T, Absent>`.
///
/// # Examples
///
/// ```rust
/// use flusso::error::Absent;
/// use flusso::lift;
/// use flusso::outcome::Outcome;
///
/// let non_zero = lift::result(|x: i32| (x != 0).then_some(x));
/// assert_eq!(non_zero(0), Outcome::Err(Absent));
/// assert_eq!(non_zero(5), Outcome::Ok(5));
/// ```
pub fn result<A, T, F>(function: F) -> impl Fn(A) -> Outcome<T, Absent>
where
    F: Fn(A) -> Option<T>,
{
    move |argument| Maybe::from_option(function(argument)).ok_or(Absent)
}

/// Lifts a plain function into one that catches panics.
///
/// A normal return becomes `Ok(value)`. A panic raised while the function
/// runs is caught and becomes `Err(Fault::Panic { .. })`, or
/// `Err(Fault::Unwrap { .. })` when it came from unwrapping a container on
/// the wrong variant.
///
/// # Examples
///
/// ```rust
/// use flusso::lift;
/// use flusso::outcome::Outcome;
///
/// let divide = lift::catching(|(x, y): (i32, i32)| x / y);
/// assert_eq!(divide((10, 2)), Outcome::Ok(5));
/// assert!(divide((1, 0)).is_err());
/// ```
pub fn catching<A, T, F>(function: F) -> impl Fn(A) -> Outcome<T, Fault>
where
    F: Fn(A) -> T,
{
    move |argument| match catch_unwind(AssertUnwindSafe(|| function(argument))) {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => Outcome::Err(Fault::from_panic(payload)),
    }
}
