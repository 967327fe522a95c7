//! `AsyncOutcome` - an `Outcome` whose combinators await their functions.
//!
//! `AsyncOutcome<T, E>` owns exactly one [`Outcome<T, E>`](Outcome) and has no
//! state of its own beyond the wrapped variant. Its combinators mirror the
//! synchronous ones, except that every transformation returns something that
//! implements [`IntoFuture`], and the combinator always awaits it.
//!
//! # Suspension Contract
//!
//! - The variant (`Ok` or `Err`) is inspected before anything is awaited.
//! - Only the caller-supplied function is awaited; the library never
//!   suspends on its own.
//! - `AsyncOutcome` itself implements `IntoFuture` and resolves immediately,
//!   so `and_then`/`or_else` closures may return one directly.
//!
//! # Examples
//!
//! ```rust,ignore
//! use flusso::async_outcome::AsyncOutcome;
//!
//! #[tokio::main]
//! async fn main() {
//!     let result = AsyncOutcome::<i32, String>::ok(2)
//!         .fmap(|x| async move { x * 3 })
//!         .await
//!         .and_then(|x| AsyncOutcome::ok(x + 1))
//!         .await;
//!     assert_eq!(result, AsyncOutcome::ok(7));
//! }
//! ```
//!
//! # Lifting and Sequencing
//!
//! - [`async_result`] and [`async_fallible`] wrap async functions so that
//!   panics (and, for `async_fallible`, returned errors) land in the failure
//!   channel as a [`Fault`](crate::error::Fault).
//! - [`Steps`] and the [`sequence!`](crate::sequence!) macro run named
//!   computations one after another and stop at the first failure.

mod lift;
mod steps;

pub use lift::{Catching, CatchingFallible, async_fallible, async_result};
pub use steps::{Record, Steps};

use std::fmt;
use std::future::{IntoFuture, Ready, ready};
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::error::UnwrapFailed;
use crate::outcome::Outcome;

/// An [`Outcome`] with suspension-aware combinators.
///
/// # Examples
///
/// ```rust,ignore
/// use flusso::async_outcome::AsyncOutcome;
///
/// #[tokio::main]
/// async fn main() {
///     let failed: AsyncOutcome<i32, &str> = AsyncOutcome::err("Error");
///     let mapped = failed.clone().fmap(|x| async move { x * 3 }).await;
///     assert_eq!(mapped, failed);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AsyncOutcome<T, E> {
    outcome: Outcome<T, E>,
}

impl<T, E> AsyncOutcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps an existing `Outcome`.
    #[inline]
    pub const fn new(outcome: Outcome<T, E>) -> Self {
        Self { outcome }
    }

    /// Creates a successful `AsyncOutcome`.
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self::new(Outcome::Ok(value))
    }

    /// Creates a failed `AsyncOutcome`.
    #[inline]
    pub const fn err(error: E) -> Self {
        Self::new(Outcome::Err(error))
    }

    /// Starts an empty multi-step sequence.
    ///
    /// See [`Steps`].
    pub fn steps<'a>() -> Steps<'a, T, E> {
        Steps::new()
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if the wrapped outcome is `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Returns `true` if the wrapped outcome is `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        self.outcome.is_err()
    }

    /// Returns a reference to the wrapped outcome, for matching on it.
    #[inline]
    pub const fn as_outcome(&self) -> &Outcome<T, E> {
        &self.outcome
    }

    /// Consumes the wrapper and returns the wrapped outcome.
    #[inline]
    pub fn into_outcome(self) -> Outcome<T, E> {
        self.outcome
    }

    // =========================================================================
    // Suspension-aware Combinators
    // =========================================================================

    /// Transforms the success value with an async function.
    ///
    /// On `Err` the function is never called and nothing is awaited.
    pub async fn fmap<A, F, Fut>(self, function: F) -> AsyncOutcome<A, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = A>,
    {
        match self.outcome {
            Outcome::Ok(value) => AsyncOutcome::ok(function(value).await),
            Outcome::Err(error) => AsyncOutcome::err(error),
        }
    }

    /// Transforms the error with an async function.
    ///
    /// On `Ok` the function is never called and nothing is awaited.
    pub async fn fmap_err<A, F, Fut>(self, function: F) -> AsyncOutcome<T, A>
    where
        F: FnOnce(E) -> Fut,
        Fut: IntoFuture<Output = A>,
    {
        match self.outcome {
            Outcome::Ok(value) => AsyncOutcome::ok(value),
            Outcome::Err(error) => AsyncOutcome::err(function(error).await),
        }
    }

    /// Chains an async computation on the success value.
    pub async fn and_then<A, F, Fut>(self, function: F) -> AsyncOutcome<A, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = AsyncOutcome<A, E>>,
    {
        match self.outcome {
            Outcome::Ok(value) => function(value).await,
            Outcome::Err(error) => AsyncOutcome::err(error),
        }
    }

    /// Chains an async recovery on the error.
    pub async fn or_else<A, F, Fut>(self, function: F) -> AsyncOutcome<T, A>
    where
        F: FnOnce(E) -> Fut,
        Fut: IntoFuture<Output = AsyncOutcome<T, A>>,
    {
        match self.outcome {
            Outcome::Ok(value) => AsyncOutcome::ok(value),
            Outcome::Err(error) => function(error).await,
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
    pub fn try_unwrap(self) -> Result<T, UnwrapFailed<Self>> {
        match self.outcome {
            Outcome::Ok(value) => Ok(value),
            halted @ Outcome::Err(_) => Err(UnwrapFailed::new(Self::new(halted))),
        }
    }

    /// Returns the error or the halted container.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapFailed`] carrying `self` when it is `Ok`.
    pub fn try_unwrap_err(self) -> Result<E, UnwrapFailed<Self>> {
        match self.outcome {
            Outcome::Err(error) => Ok(error),
            halted @ Outcome::Ok(_) => Err(UnwrapFailed::new(Self::new(halted))),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on `Err` with a [`HaltedUnwrap`](crate::error::HaltedUnwrap)
    /// payload holding an [`UnwrapFailed<AsyncOutcome<T, E>>`](UnwrapFailed)
    /// with the original container. `T` and `E` must be `Send + 'static`;
    /// use [`try_unwrap`](Self::try_unwrap) for borrowed payloads.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(failure) => failure.raise("called `AsyncOutcome::unwrap` on an `Err` value"),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics on `Ok` with a [`HaltedUnwrap`](crate::error::HaltedUnwrap)
    /// payload holding an [`UnwrapFailed<AsyncOutcome<T, E>>`](UnwrapFailed)
    /// with the original container. `T` and `E` must be `Send + 'static`;
    /// use [`try_unwrap_err`](Self::try_unwrap_err) for borrowed payloads.
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(failure) => failure.raise("called `AsyncOutcome::unwrap_err` on an `Ok` value"),
        }
    }

    // =========================================================================
    // Resource Management
    // =========================================================================

    /// Acquires a resource, uses it, and always releases it.
    ///
    /// If `acquire` fails, neither `use_resource` nor `release` runs and the
    /// error is returned. Otherwise `release` runs after `use_resource`, even
    /// when `use_resource` panics; the panic is resumed once the resource has
    /// been released.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use flusso::async_outcome::AsyncOutcome;
    ///
    /// let result: AsyncOutcome<i32, String> = AsyncOutcome::bracket(
    ///     AsyncOutcome::ok(21),
    ///     |resource| AsyncOutcome::ok(resource * 2),
    ///     |_| async {},
    /// )
    /// .await;
    /// assert_eq!(result, AsyncOutcome::ok(42));
    /// ```
    pub async fn bracket<Resource, Acquire, Use, UseFuture, Release, ReleaseFuture>(
        acquire: Acquire,
        use_resource: Use,
        release: Release,
    ) -> Self
    where
        Acquire: IntoFuture<Output = AsyncOutcome<Resource, E>>,
        Use: FnOnce(Resource) -> UseFuture,
        UseFuture: IntoFuture<Output = Self>,
        Release: FnOnce(Resource) -> ReleaseFuture,
        ReleaseFuture: IntoFuture<Output = ()>,
        Resource: Clone,
    {
        let resource = match acquire.await.into_outcome() {
            Outcome::Ok(resource) => resource,
            Outcome::Err(error) => return Self::err(error),
        };
        let resource_for_release = resource.clone();

        let used = AssertUnwindSafe(async move { use_resource(resource).await })
            .catch_unwind()
            .await;

        release(resource_for_release).await;

        match used {
            Ok(outcome) => outcome,
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }
}

// =============================================================================
// IntoFuture Implementation
// =============================================================================

impl<T, E> IntoFuture for AsyncOutcome<T, E> {
    type Output = Self;
    type IntoFuture = Ready<Self>;

    /// Resolves immediately to `self`.
    fn into_future(self) -> Self::IntoFuture {
        ready(self)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display, E: fmt::Display> fmt::Display for AsyncOutcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "AsyncOutcome({})", self.outcome)
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Outcome<T, E>> for AsyncOutcome<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        Self::new(outcome)
    }
}

impl<T, E> From<AsyncOutcome<T, E>> for Outcome<T, E> {
    fn from(async_outcome: AsyncOutcome<T, E>) -> Self {
        async_outcome.into_outcome()
    }
}

static_assertions::assert_impl_all!(AsyncOutcome<i32, String>: Send, Sync, Clone);
