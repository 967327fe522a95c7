//! Outcome type - a computation that either succeeded or failed.
//!
//! `Outcome<T, E>` is either `Ok(value)` or `Err(error)`, never both and
//! never neither. Combinators work on one channel at a time: `fmap` and
//! `and_then` touch only `Ok`, `fmap_err` and `or_else` touch only `Err`, and
//! the untouched channel is passed through without calling the function.
//!
//! # Examples
//!
//! ```rust
//! use flusso::outcome::Outcome;
//!
//! let chained: Outcome<i32, &str> = Outcome::Ok(10)
//!     .and_then(|x| Outcome::Ok(x + 1))
//!     .and_then(|_| Outcome::Err("bad"));
//! assert_eq!(chained, Outcome::Err("bad"));
//!
//! let untouched: Outcome<i32, &str> = Outcome::Err("boom");
//! assert_eq!(untouched.fmap(|x| x * 2), Outcome::Err("boom"));
//! ```

use std::fmt;

use crate::error::UnwrapFailed;
use crate::maybe::Maybe;

/// The result of a computation: a success value or an error.
///
/// # Examples
///
/// ```rust
/// use flusso::outcome::Outcome;
///
/// fn parse(input: &str) -> Outcome<i32, String> {
///     input.parse::<i32>().map_err(|error| error.to_string()).into()
/// }
///
/// match parse("42").fmap(|x| x * 2) {
///     Outcome::Ok(value) => assert_eq!(value, 84),
///     Outcome::Err(error) => panic!("unexpected error: {error}"),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// A success value.
    Ok(T),
    /// An error value.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Variant Checks
    // =========================================================================

    /// Returns `true` if this is `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    // =========================================================================
    // Channel Conversion
    // =========================================================================

    /// Keeps the success channel as a `Maybe`, discarding any error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::maybe::Maybe;
    /// use flusso::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Ok(1).ok(), Maybe::Some(1));
    /// assert_eq!(Outcome::<i32, &str>::Err("e").ok(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Ok(value) => Maybe::Some(value),
            Self::Err(_) => Maybe::Nothing,
        }
    }

    /// Keeps the error channel as a `Maybe`, discarding any value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::maybe::Maybe;
    /// use flusso::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Err("e").err(), Maybe::Some("e"));
    /// assert_eq!(Outcome::<i32, &str>::Ok(1).err(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::Nothing,
            Self::Err(error) => Maybe::Some(error),
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value, leaving errors untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Ok(2).fmap(|x| x * 3), Outcome::Ok(6));
    /// assert_eq!(Outcome::<i32, &str>::Err("boom").fmap(|x| x * 3), Outcome::Err("boom"));
    /// ```
    #[inline]
    pub fn fmap<A, F>(self, function: F) -> Outcome<A, E>
    where
        F: FnOnce(T) -> A,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies a function to the error, leaving success values untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::outcome::Outcome;
    ///
    /// let error: Outcome<i32, &str> = Outcome::Err("timeout");
    /// assert_eq!(error.fmap_err(str::len), Outcome::Err(7));
    /// ```
    #[inline]
    pub fn fmap_err<A, F>(self, function: F) -> Outcome<T, A>
    where
        F: FnOnce(E) -> A,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    /// Eliminates the outcome by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Err("boom");
    /// let rendered = outcome.fold(|x| x.to_string(), |e| format!("error: {e}"));
    /// assert_eq!(rendered, "error: boom");
    /// ```
    #[inline]
    pub fn fold<A, F, G>(self, on_ok: F, on_err: G) -> A
    where
        F: FnOnce(T) -> A,
        G: FnOnce(E) -> A,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Chains a fallible function on the success value.
    ///
    /// `Err` short-circuits: `function` is not called and the error is
    /// returned unchanged.
    #[inline]
    pub fn and_then<A, F>(self, function: F) -> Outcome<A, E>
    where
        F: FnOnce(T) -> Outcome<A, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Chains a recovery function on the error.
    ///
    /// `Ok` short-circuits: `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::outcome::Outcome;
    ///
    /// let recovered: Outcome<i32, String> =
    ///     Outcome::<i32, i32>::Err(2).or_else(|code| Outcome::Ok(code * 3));
    /// assert_eq!(recovered, Outcome::Ok(6));
    /// ```
    #[inline]
    pub fn or_else<A, F>(self, function: F) -> Outcome<T, A>
    where
        F: FnOnce(E) -> Outcome<T, A>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    /// Returns `self` if it is `Ok`, otherwise `other`.
    #[inline]
    pub fn value_or<A>(self, other: Outcome<T, A>) -> Outcome<T, A> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Returns `other` if `self` is `Ok`, otherwise the error of `self`.
    #[inline]
    pub fn value_and<A>(self, other: Outcome<A, E>) -> Outcome<A, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success value or the halted container.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapFailed`] carrying `self` when it is `Err`.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapFailed<Self>> {
        match self {
            Self::Ok(value) => Ok(value),
            halted @ Self::Err(_) => Err(UnwrapFailed::new(halted)),
        }
    }

    /// Returns the error or the halted container.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapFailed`] carrying `self` when it is `Ok`.
    #[inline]
    pub fn try_unwrap_err(self) -> Result<E, UnwrapFailed<Self>> {
        match self {
            Self::Err(error) => Ok(error),
            halted @ Self::Ok(_) => Err(UnwrapFailed::new(halted)),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on `Err` with a [`HaltedUnwrap`](crate::error::HaltedUnwrap) payload holding an
    /// [`UnwrapFailed<Outcome<T, E>>`](UnwrapFailed) with the original
    /// container.
    ///
    /// The payload must be `Send + 'static`, so `T` and `E` must be too.
    /// Borrowed payloads such as `outcome.as_ref()` cannot call `unwrap`
    /// even on `Ok`; use [`try_unwrap`](Self::try_unwrap) or
    /// [`expect`](Self::expect) for them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::error::HaltedUnwrap;
    /// use flusso::outcome::Outcome;
    ///
    /// let payload = std::panic::catch_unwind(|| Outcome::<i32, &str>::Err("boom").unwrap())
    ///     .unwrap_err();
    /// let halted = *payload.downcast::<HaltedUnwrap>().unwrap();
    /// let failure = halted.into_unwrap_failed::<Outcome<i32, &str>>().unwrap();
    /// assert_eq!(failure.into_halted_container(), Outcome::Err("boom"));
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(failure) => failure.raise("called `Outcome::unwrap` on an `Err` value"),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics on `Ok` with a [`HaltedUnwrap`](crate::error::HaltedUnwrap) payload holding an
    /// [`UnwrapFailed<Outcome<T, E>>`](UnwrapFailed) with the original
    /// container. Like [`unwrap`](Self::unwrap) it needs `T` and `E` to be
    /// `Send + 'static`; use [`try_unwrap_err`](Self::try_unwrap_err) for
    /// borrowed payloads.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(failure) => failure.raise("called `Outcome::unwrap_err` on an `Ok` value"),
        }
    }

    /// Returns the success value, panicking with `message` on `Err`.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Err`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => panic!("{message}"),
        }
    }

    /// Returns the error, panicking with `message` on `Ok`.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Self::Ok(_) => panic!("{message}"),
            Self::Err(error) => error,
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::outcome::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Ok(Outcome::Ok(42));
    /// assert_eq!(nested.flatten(), Outcome::Ok(42));
    ///
    /// let inner_error: Outcome<Outcome<i32, &str>, &str> = Outcome::Ok(Outcome::Err("e"));
    /// assert_eq!(inner_error.flatten(), Outcome::Err("e"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Err(error) => write!(formatter, "Err({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync, Clone);
