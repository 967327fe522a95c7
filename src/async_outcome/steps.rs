//! Named multi-step sequencing.
//!
//! [`Steps`] collects named computations and runs them one after another.
//! A computation is a thunk producing a future, so nothing starts until
//! [`Steps::run`] reaches it. The first `Err` stops the sequence and the
//! remaining thunks are never called.

use std::collections::HashMap;
use std::fmt;
use std::future::IntoFuture;
use std::panic::{AssertUnwindSafe, catch_unwind};

use futures::FutureExt;
use futures::future::BoxFuture;

use super::AsyncOutcome;
use crate::error::Fault;
use crate::outcome::Outcome;

/// The values of a completed sequence, keyed by step name.
pub type Record<T> = HashMap<String, T>;

type Thunk<'a, T, E> = Box<dyn FnOnce() -> BoxFuture<'a, AsyncOutcome<T, E>> + Send + 'a>;

/// A sequence of named async computations.
///
/// Steps run in the order they were added. Names are expected to be unique;
/// a repeated name keeps the value of the later step.
///
/// # Examples
///
/// ```rust,ignore
/// use flusso::async_outcome::AsyncOutcome;
///
/// let record = AsyncOutcome::<i32, String>::steps()
///     .step("user", || AsyncOutcome::ok(7))
///     .step("orders", || async { AsyncOutcome::ok(3) })
///     .run()
///     .await
///     .unwrap();
///
/// assert_eq!(record["user"], 7);
/// assert_eq!(record["orders"], 3);
/// ```
pub struct Steps<'a, T, E> {
    steps: Vec<(String, Thunk<'a, T, E>)>,
}

impl<'a, T, E> Steps<'a, T, E> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a named step.
    ///
    /// `computation` is not called here; it runs when the sequence reaches
    /// this step.
    #[must_use]
    pub fn step<F, Fut>(mut self, name: impl Into<String>, computation: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: IntoFuture<Output = AsyncOutcome<T, E>>,
        Fut::IntoFuture: Send + 'a,
    {
        let thunk: Thunk<'a, T, E> = Box::new(move || computation().into_future().boxed());
        self.steps.push((name.into(), thunk));
        self
    }

    /// Returns the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if no steps were added.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs every step in order.
    ///
    /// Returns `Ok` with a [`Record`] of every value when all steps succeed,
    /// or the first `Err` otherwise. A panic in a step is caught and
    /// returned as `Err(E::from(fault))`.
    pub async fn run(self) -> AsyncOutcome<Record<T>, E>
    where
        E: From<Fault>,
    {
        let mut record = Record::with_capacity(self.steps.len());

        for (name, thunk) in self.steps {
            tracing::debug!(step = %name, "running step");

            let future = match catch_unwind(AssertUnwindSafe(thunk)) {
                Ok(future) => future,
                Err(payload) => return faulted(&name, payload),
            };

            let outcome = match AssertUnwindSafe(future).catch_unwind().await {
                Ok(outcome) => outcome.into_outcome(),
                Err(payload) => return faulted(&name, payload),
            };

            match outcome {
                Outcome::Ok(value) => {
                    record.insert(name, value);
                }
                Outcome::Err(error) => {
                    tracing::debug!(step = %name, "step failed, skipping the rest");
                    return AsyncOutcome::err(error);
                }
            }
        }

        AsyncOutcome::ok(record)
    }
}

fn faulted<T, E>(name: &str, payload: Box<dyn std::any::Any + Send>) -> AsyncOutcome<T, E>
where
    E: From<Fault>,
{
    let fault = Fault::from_panic(payload);
    tracing::error!(step = %name, %fault, "step faulted");
    AsyncOutcome::err(E::from(fault))
}

impl<T, E> Default for Steps<'_, T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> fmt::Debug for Steps<'_, T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Steps")
            .field(
                "names",
                &self.steps.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Runs named async computations in order and collects their values.
///
/// Each `name => expression` pair becomes a [`Steps::step`] whose thunk
/// evaluates `expression` (a `move` closure body). The macro evaluates to the
/// future returned by [`Steps::run`].
///
/// Every step owns what its expression captures. Two steps cannot both name
/// the same non-`Copy` local: clone it once per step before the macro, or
/// bind a reference (`let shared = &shared;`), which is `Copy`.
///
/// # Examples
///
/// ```rust,ignore
/// use flusso::async_outcome::AsyncOutcome;
/// use flusso::sequence;
///
/// async fn fetch(id: i32) -> AsyncOutcome<i32, String> {
///     AsyncOutcome::ok(id * 10)
/// }
///
/// let record = sequence! {
///     first => fetch(1),
///     second => fetch(2),
/// }
/// .await
/// .unwrap();
///
/// assert_eq!(record["second"], 20);
/// ```
#[macro_export]
macro_rules! sequence {
    ($($name:ident => $computation:expr),+ $(,)?) => {
        $crate::async_outcome::Steps::new()
            $(.step(stringify!($name), move || $computation))+
            .run()
    };
}
