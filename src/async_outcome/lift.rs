//! Async lifting decorators.
//!
//! [`async_result`] and [`async_fallible`] wrap an async function so that its
//! future resolves to an [`AsyncOutcome`] with a [`Fault`] error channel.
//! Panics are caught both when the future is created and while it is polled.

use std::error::Error;
use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;

use super::AsyncOutcome;
use crate::error::Fault;
use crate::outcome::Outcome;

pin_project! {
    #[project = CatchingStateProj]
    enum CatchingState<Fut> {
        Running {
            #[pin]
            future: Fut,
        },
        Faulted {
            fault: Option<Fault>,
        },
        Completed,
    }
}

pin_project! {
    /// Future returned by functions lifted with [`async_result`].
    ///
    /// Resolves to `Ok` with the wrapped future's output, or to `Err` with the
    /// [`Fault`] raised while creating or polling it.
    #[must_use = "futures do nothing unless polled"]
    pub struct Catching<Fut> {
        #[pin]
        state: CatchingState<Fut>,
    }
}

impl<Fut> Catching<Fut> {
    fn start<F>(create: F) -> Self
    where
        F: FnOnce() -> Fut,
    {
        let state = match catch_unwind(AssertUnwindSafe(create)) {
            Ok(future) => CatchingState::Running { future },
            Err(payload) => CatchingState::Faulted {
                fault: Some(Fault::from_panic(payload)),
            },
        };
        Self { state }
    }
}

impl<Fut> Future for Catching<Fut>
where
    Fut: Future,
{
    type Output = AsyncOutcome<Fut::Output, Fault>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        match this.state.as_mut().project() {
            CatchingStateProj::Running { future } => {
                let polled = catch_unwind(AssertUnwindSafe(|| future.poll(context)));
                match polled {
                    Ok(Poll::Pending) => Poll::Pending,
                    Ok(Poll::Ready(value)) => {
                        this.state.set(CatchingState::Completed);
                        Poll::Ready(AsyncOutcome::ok(value))
                    }
                    Err(payload) => {
                        this.state.set(CatchingState::Completed);
                        Poll::Ready(AsyncOutcome::err(Fault::from_panic(payload)))
                    }
                }
            }
            CatchingStateProj::Faulted { fault } => {
                let fault = fault.take();
                this.state.set(CatchingState::Completed);
                match fault {
                    Some(fault) => Poll::Ready(AsyncOutcome::err(fault)),
                    None => panic!("Catching polled after completion"),
                }
            }
            CatchingStateProj::Completed => panic!("Catching polled after completion"),
        }
    }
}

pin_project! {
    /// Future returned by functions lifted with [`async_fallible`].
    ///
    /// Like [`Catching`], but an `Err` returned by the wrapped future is also
    /// moved into the failure channel as [`Fault::Error`].
    #[must_use = "futures do nothing unless polled"]
    pub struct CatchingFallible<Fut> {
        #[pin]
        inner: Catching<Fut>,
    }
}

impl<Fut, T, E> Future for CatchingFallible<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: Error + Send + Sync + 'static,
{
    type Output = AsyncOutcome<T, Fault>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(context).map(|caught| {
            caught
                .into_outcome()
                .and_then(|returned| Outcome::from(returned).fmap_err(Fault::from_error))
                .into()
        })
    }
}

/// Lifts an async function so that faults land in the error channel.
///
/// Calling the lifted function never panics: a panic while creating the
/// future is deferred to the first poll, and a panic while polling resolves
/// the future to `Err(Fault::Panic { .. })` (`Fault::Unwrap` for a failed
/// container unwrap).
///
/// # Examples
///
/// ```rust,ignore
/// use flusso::async_outcome::{AsyncOutcome, async_result};
///
/// let halve = async_result(|x: i32| async move {
///     assert!(x % 2 == 0, "odd input");
///     x / 2
/// });
///
/// assert_eq!(halve(8).await, AsyncOutcome::ok(4));
/// assert!(halve(3).await.is_err());
/// ```
pub fn async_result<A, F, Fut>(function: F) -> impl Fn(A) -> Catching<Fut>
where
    F: Fn(A) -> Fut,
    Fut: Future,
{
    move |argument| Catching::start(|| function(argument))
}

/// Lifts an async function returning `Result<T, E>`.
///
/// `Ok(value)` becomes `AsyncOutcome::ok(value)`, `Err(error)` becomes
/// `Err(Fault::Error(..))`, and panics are handled as in [`async_result`].
///
/// # Examples
///
/// ```rust,ignore
/// use flusso::async_outcome::async_fallible;
///
/// let parse = async_fallible(|text: &'static str| async move { text.parse::<i32>() });
///
/// assert_eq!(parse("42").await.unwrap(), 42);
/// assert_eq!(parse("x").await.unwrap_err().to_string(), "invalid digit found in string");
/// ```
pub fn async_fallible<A, F, Fut, T, E>(function: F) -> impl Fn(A) -> CatchingFallible<Fut>
where
    F: Fn(A) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Error + Send + Sync + 'static,
{
    move |argument| CatchingFallible {
        inner: Catching::start(|| function(argument)),
    }
}
