//! Maybe type - a value that may be absent.
//!
//! This module provides the `Maybe<T>` type, which is either `Some(value)`
//! or `Nothing`. Every combinator dispatches on the variant alone and never
//! inspects the wrapped value.
//!
//! `Nothing` holds no data, so every `Nothing` is the same value and two of
//! them always compare equal. A `Maybe` built from an absence marker
//! (`std::option::Option::None`) is always `Nothing`.
//!
//! # Examples
//!
//! ```rust
//! use flusso::maybe::Maybe;
//!
//! let doubled = Maybe::Some(42).fmap(|x| x * 2);
//! assert_eq!(doubled, Maybe::Some(84));
//!
//! let nothing: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(nothing.unwrap_or(7), 7);
//! ```

use std::fmt;

use crate::error::UnwrapFailed;
use crate::outcome::Outcome;

/// A value that is either present (`Some`) or absent (`Nothing`).
///
/// # Examples
///
/// ```rust
/// use flusso::maybe::Maybe;
///
/// fn half(value: i32) -> Maybe<i32> {
///     if value % 2 == 0 { Maybe::Some(value / 2) } else { Maybe::Nothing }
/// }
///
/// assert_eq!(Maybe::Some(20).and_then(half).and_then(half), Maybe::Some(5));
/// assert_eq!(Maybe::Some(10).and_then(half).and_then(half), Maybe::Nothing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// The absence of a value.
    #[default]
    Nothing,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds a `Maybe` from a standard `Option`, mapping `None` to `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some(3)), Maybe::Some(3));
    /// assert_eq!(Maybe::<i32>::from_option(None), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::Nothing,
        }
    }

    // =========================================================================
    // Variant Checks
    // =========================================================================

    /// Returns `true` if this is `Some`.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Borrowing Views
    // =========================================================================

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns an iterator over the contained value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::maybe::Maybe;
    ///
    /// let total: i32 = [Maybe::Some(1), Maybe::Nothing, Maybe::Some(2)]
    ///     .iter()
    ///     .flat_map(Maybe::iter)
    ///     .sum();
    /// assert_eq!(total, 3);
    /// ```
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    // =========================================================================
    // Mapping and Chaining
    // =========================================================================

    /// Applies a function to the contained value.
    ///
    /// `Some(v)` becomes `Some(function(v))`; `Nothing` stays `Nothing` and
    /// `function` is not called. A panic inside `function` propagates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Some(42).fmap(|x| x * 2), Maybe::Some(84));
    /// assert_eq!(Maybe::<i32>::Nothing.fmap(|x| x * 2), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn fmap<A, F>(self, function: F) -> Maybe<A>
    where
        F: FnOnce(T) -> A,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Chains a function that itself returns a `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::maybe::Maybe;
    ///
    /// let cube = |x: i32| Maybe::Some(x * x * x);
    /// let square = |x: i32| Maybe::Some(x * x);
    /// assert_eq!(Maybe::Some(2).and_then(cube).and_then(square), Maybe::Some(64));
    /// ```
    #[inline]
    pub fn and_then<A, F>(self, function: F) -> Maybe<A>
    where
        F: FnOnce(T) -> Maybe<A>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Keeps the value only if it satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Some(4).filter_by_predicate(|x| x % 2 == 0), Maybe::Some(4));
    /// assert_eq!(Maybe::Some(3).filter_by_predicate(|x| x % 2 == 0), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn filter_by_predicate<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::Nothing
                }
            }
            Self::Nothing => Self::Nothing,
        }
    }

    // =========================================================================
    // Alternatives
    // =========================================================================

    /// Returns `self` if it holds a value, otherwise `other`.
    #[inline]
    pub fn value_or(self, other: Self) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::Nothing => other,
        }
    }

    /// Returns `self` if it holds a value, otherwise calls `function`.
    ///
    /// `function` is only invoked on `Nothing`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::Nothing => function(),
        }
    }

    /// Returns `other` if `self` holds a value, otherwise `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Some(1).value_and(Maybe::Some("next")), Maybe::Some("next"));
    /// assert_eq!(Maybe::<i32>::Nothing.value_and(Maybe::Some("next")), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn value_and<A>(self, other: Maybe<A>) -> Maybe<A> {
        match self {
            Self::Some(_) => other,
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the contained value or the halted container.
    ///
    /// This is the non-panicking form of [`unwrap`](Self::unwrap).
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapFailed`] carrying `Nothing` when there is no value.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapFailed<Self>> {
        match self {
            Self::Some(value) => Ok(value),
            Self::Nothing => Err(UnwrapFailed::new(Self::Nothing)),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics on `Nothing`. The panic payload is a [`HaltedUnwrap`](crate::error::HaltedUnwrap) holding
    /// an [`UnwrapFailed<Maybe<T>>`](UnwrapFailed) with the halted container.
    /// Containment boundaries turn it into [`Fault::Unwrap`](crate::error::Fault::Unwrap),
    /// which still hands the container back.
    ///
    /// The payload must be `Send + 'static`, so `T` must be too. Borrowed
    /// payloads such as `maybe.as_ref()` cannot call `unwrap` even on
    /// `Some`; use [`try_unwrap`](Self::try_unwrap) or [`expect`](Self::expect)
    /// for them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::error::HaltedUnwrap;
    /// use flusso::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Some(5).unwrap(), 5);
    ///
    /// let payload = std::panic::catch_unwind(|| Maybe::<i32>::Nothing.unwrap()).unwrap_err();
    /// let halted = *payload.downcast::<HaltedUnwrap>().unwrap();
    /// let failure = halted.into_unwrap_failed::<Maybe<i32>>().unwrap();
    /// assert_eq!(failure.into_halted_container(), Maybe::Nothing);
    ///
    /// let name = Maybe::Some(String::from("ada"));
    /// assert_eq!(name.as_ref().try_unwrap().ok(), Some(&String::from("ada")));
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        T: Send + 'static,
    {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(failure) => failure.raise("called `Maybe::unwrap` on a `Nothing` value"),
        }
    }

    /// Returns the contained value, panicking with `message` on `Nothing`.
    ///
    /// # Panics
    ///
    /// Panics with `message` if there is no value.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nothing => panic!("{message}"),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the contained value or computes one from `function`.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::Nothing => function(),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into an `Outcome`, using `error` for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::maybe::Maybe;
    /// use flusso::outcome::Outcome;
    ///
    /// assert_eq!(Maybe::Some(1).ok_or("missing"), Outcome::Ok(1));
    /// assert_eq!(Maybe::<i32>::Nothing.ok_or("missing"), Outcome::Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::Nothing => Outcome::Err(error),
        }
    }

    /// Converts into an `Outcome`, computing the error lazily.
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::Nothing => Outcome::Err(function()),
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::Nothing => None,
        }
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        self.unwrap_or_else(T::default)
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// `Some(Nothing)` flattens to `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Some(Maybe::Some(42)).flatten(), Maybe::Some(42));
    /// assert_eq!(Maybe::Some(Maybe::<i32>::Nothing).flatten(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.and_then(|inner| inner)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::Nothing => write!(formatter, "Nothing"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone);
