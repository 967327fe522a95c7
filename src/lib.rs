//! # flusso
//!
//! Railway-oriented containers for Rust: `Maybe` for optional values,
//! `Outcome` for success-or-failure, and `AsyncOutcome` whose combinators
//! await the functions they are given.
//!
//! ## Overview
//!
//! - **Containers**: [`Maybe`](maybe::Maybe) and [`Outcome`](outcome::Outcome)
//!   with a uniform combinator surface (`fmap`, `and_then`, `value_or`,
//!   `value_and`, `unwrap`, ...).
//! - **Lifting**: [`lift`] turns ordinary functions into container-returning
//!   ones, either by absence (`option`, `result`) or by catching panics
//!   (`catching`).
//! - **Do-notation**: [`scope!`] binds container values in nested scopes that
//!   halt at the first failure and contain panics.
//! - **Async**: [`async_outcome`] provides `AsyncOutcome`, async lifting and
//!   the named step sequencer [`sequence!`].
//!
//! ## Feature Flags
//!
//! - `async` (default): `AsyncOutcome`, async lifting and sequencing
//! - `serde`: `Serialize`/`Deserialize` for `Maybe` and `Outcome`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use flusso::prelude::*;
//!
//! let parsed: Outcome<i32, String> = Outcome::Ok(20);
//! let doubled = parsed.fmap(|x| x * 2).unwrap_or(0);
//! assert_eq!(doubled, 40);
//!
//! let first: Maybe<&str> = Maybe::from(vec!["a", "b"].first().copied());
//! assert_eq!(first, Maybe::Some("a"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use flusso::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Absent, Fault, HaltedUnwrap, UnwrapFailed};
    pub use crate::lift;
    pub use crate::maybe::Maybe;
    pub use crate::outcome::Outcome;
    pub use crate::scope;

    #[cfg(feature = "async")]
    pub use crate::async_outcome::{AsyncOutcome, Record, Steps, async_fallible, async_result};
    #[cfg(feature = "async")]
    pub use crate::sequence;
}

pub mod error;
pub mod lift;
pub mod maybe;
pub mod outcome;
pub mod scope;

#[cfg(feature = "async")]
pub mod async_outcome;
