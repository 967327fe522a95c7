//! Scoped do-notation over `Maybe` and `Outcome`.
//!
//! A scope exposes the value of a successful container to a block. When the
//! container is in its failure variant the block is skipped entirely and the
//! failure flows out of the scope unchanged. Nesting scopes makes each step's
//! input depend on the previous step's value; the first failing step skips
//! every nested block.
//!
//! Scopes are a containment boundary. A panic raised inside the block is
//! caught and logged with `tracing`, and the scope yields no bound value:
//! `Nothing` for `Maybe`, and the failure channel built from the [`Fault`]
//! for `Outcome`.
//!
//! # Syntax
//!
//! The [`scope!`](crate::scope!) macro writes nested scopes flat:
//!
//! ```text
//! scope! {
//!     pattern <= container_expression;  // bind: enter a scope
//!     let pattern = expression;          // pure let binding
//!     container_expression               // final expression
//! }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use flusso::maybe::Maybe;
//! use flusso::scope;
//!
//! let double = |x: i32| Maybe::Some(x * 2);
//! let add_one = |x: i32| Maybe::Some(x + 1);
//!
//! let result = scope! {
//!     a <= double(5);
//!     b <= add_one(a);
//!     c <= double(b);
//!     Maybe::Some(c)
//! };
//! assert_eq!(result, Maybe::Some(22));
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::error::Fault;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Runs `body` behind a containment boundary.
///
/// A panic in `body` is caught, logged at `error` level and returned as a
/// [`Fault`].
///
/// # Errors
///
/// Returns the captured [`Fault`] if `body` panics.
///
/// # Examples
///
/// ```rust
/// use flusso::scope::contain;
///
/// assert_eq!(contain(|| 40 + 2), Ok(42));
/// assert!(contain(|| -> i32 { panic!("boom") }).is_err());
/// ```
pub fn contain<R, F>(body: F) -> Result<R, Fault>
where
    F: FnOnce() -> R,
{
    catch_unwind(AssertUnwindSafe(body)).map_err(|payload| {
        let fault = Fault::from_panic(payload);
        tracing::error!(%fault, "fault contained while running a scoped block");
        fault
    })
}

impl<T> Maybe<T> {
    /// Enters a scope with the contained value bound.
    ///
    /// `Nothing` skips `body`. A panic inside `body` is logged and the scope
    /// yields `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::maybe::Maybe;
    ///
    /// let result = Maybe::Some(3).scope(|x| Maybe::Some(x + 1));
    /// assert_eq!(result, Maybe::Some(4));
    ///
    /// let faulted: Maybe<i32> = Maybe::Some(3).scope(|_| panic!("bad input"));
    /// assert_eq!(faulted, Maybe::Nothing);
    /// ```
    pub fn scope<R, F>(self, body: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Maybe<R>,
    {
        match self {
            Self::Some(value) => contain(|| body(value)).unwrap_or(Maybe::Nothing),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// Enters a scope with the success value bound.
    ///
    /// `Err` skips `body` and is returned unchanged. A panic inside `body` is
    /// logged and the scope yields `Err` converted from the [`Fault`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::outcome::Outcome;
    ///
    /// let tripled: Outcome<i32, String> = Outcome::Ok(3).scope(|x| Outcome::Ok(x * 3));
    /// assert_eq!(tripled, Outcome::Ok(9));
    ///
    /// let skipped: Outcome<i32, String> =
    ///     Outcome::Err("even".to_string()).scope(|x: i32| Outcome::Ok(x * 3));
    /// assert_eq!(skipped, Outcome::Err("even".to_string()));
    /// ```
    pub fn scope<R, F>(self, body: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> Outcome<R, E>,
        E: From<Fault>,
    {
        match self {
            Self::Ok(value) => match contain(|| body(value)) {
                Ok(outcome) => outcome,
                Err(fault) => Outcome::Err(E::from(fault)),
            },
            Self::Err(error) => Outcome::Err(error),
        }
    }
}

/// A macro for do-notation over `Maybe` and `Outcome`.
///
/// Every bind opens a nested [`scope`](Maybe::scope). The block halts at the
/// first failing step and yields that step's failure.
///
/// # Syntax
///
/// - `pattern <= container;` - Bind: enters a scope with the value bound
/// - `let pattern = expression;` - Pure let binding
/// - `container` - Final expression (must be a container)
///
/// # Examples
///
/// ```rust
/// use flusso::outcome::Outcome;
/// use flusso::scope;
///
/// fn fail_on_even(x: i32) -> Outcome<i32, String> {
///     if x % 2 == 0 { Outcome::Err(format!("{x} is even")) } else { Outcome::Ok(x) }
/// }
///
/// let result: Outcome<i32, String> = scope! {
///     a <= fail_on_even(4);
///     b <= Outcome::Ok(a * 3);
///     Outcome::Ok(b + 1)
/// };
/// assert_eq!(result, Outcome::Err("4 is even".to_string()));
/// ```
#[macro_export]
macro_rules! scope {
    // ==========================================================================
    // Terminal case
    // ==========================================================================

    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Bind operation: pattern <= container; rest
    // ==========================================================================

    ($pattern:ident <= $container:expr ; $($rest:tt)+) => {
        $container.scope(move |$pattern| {
            $crate::scope!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $container:expr ; $($rest:tt)+) => {
        $container.scope(move |($($pattern)*)| {
            $crate::scope!($($rest)+)
        })
    };

    (_ <= $container:expr ; $($rest:tt)+) => {
        $container.scope(move |_| {
            $crate::scope!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::scope!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::scope!($($rest)+)
        }
    };
}
