//! Error types shared by the containers.
//!
//! - [`UnwrapFailed`]: raised when a container is unwrapped on the wrong
//!   variant. It carries the halted container so callers can recover it.
//! - [`HaltedUnwrap`]: the panic payload of the panicking `unwrap` methods.
//!   It renders a readable message and still holds the `UnwrapFailed`.
//! - [`Fault`]: a panic or foreign error captured at a containment boundary
//!   (`scope`, `catching`, the async decorators and the step sequencer).
//! - [`Absent`]: the error produced by [`lift::result`](crate::lift::result)
//!   when the lifted function returns no value.

use std::any::Any;
use std::error::Error;
use std::sync::Arc;

use parking_lot::Mutex;

/// The fault raised when a container is unwrapped on the wrong variant.
///
/// The container that could not be unwrapped is kept inside the error, so it
/// can be taken back out and used as a regular value.
///
/// # Examples
///
/// ```rust
/// use flusso::maybe::Maybe;
///
/// let nothing: Maybe<i32> = Maybe::Nothing;
/// let failure = nothing.try_unwrap().unwrap_err();
/// assert_eq!(failure.into_halted_container(), Maybe::Nothing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("called unwrap on a halted container: {halted_container:?}")]
pub struct UnwrapFailed<C> {
    halted_container: C,
}

impl<C> UnwrapFailed<C> {
    /// Wraps the container that could not be unwrapped.
    pub const fn new(halted_container: C) -> Self {
        Self { halted_container }
    }

    /// Returns a reference to the halted container.
    pub const fn halted_container(&self) -> &C {
        &self.halted_container
    }

    /// Consumes the error and returns the halted container.
    pub fn into_halted_container(self) -> C {
        self.halted_container
    }
}

impl<C: Send + 'static> UnwrapFailed<C> {
    /// Panics with a [`HaltedUnwrap`] payload wrapping this error.
    #[track_caller]
    pub(crate) fn raise(self, message: &str) -> ! {
        std::panic::panic_any(HaltedUnwrap {
            message: message.to_string(),
            failure: Box::new(self),
        })
    }
}

/// The panic payload raised by `unwrap` and `unwrap_err` on the wrong variant.
///
/// The payload type does not depend on the container, so any containment
/// boundary can recognise it. The [`UnwrapFailed`] it wraps is recovered
/// with [`into_unwrap_failed`](Self::into_unwrap_failed) once the container
/// type is known.
///
/// # Examples
///
/// ```rust
/// use flusso::error::HaltedUnwrap;
/// use flusso::maybe::Maybe;
///
/// let payload = std::panic::catch_unwind(|| Maybe::<i32>::Nothing.unwrap()).unwrap_err();
/// let halted = *payload.downcast::<HaltedUnwrap>().unwrap();
/// assert_eq!(halted.message(), "called `Maybe::unwrap` on a `Nothing` value");
///
/// let failure = halted.into_unwrap_failed::<Maybe<i32>>().unwrap();
/// assert_eq!(failure.into_halted_container(), Maybe::Nothing);
/// ```
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct HaltedUnwrap {
    message: String,
    failure: Box<dyn Any + Send>,
}

impl HaltedUnwrap {
    /// Returns the message describing which unwrap failed.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the wrapped error if the halted container has type `C`.
    pub fn downcast_ref<C: 'static>(&self) -> Option<&UnwrapFailed<C>> {
        self.failure.downcast_ref::<UnwrapFailed<C>>()
    }

    /// Takes out the wrapped error if the halted container has type `C`.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged when the container has another type.
    pub fn into_unwrap_failed<C: 'static>(self) -> Result<UnwrapFailed<C>, Self> {
        let Self { message, failure } = self;
        match failure.downcast::<UnwrapFailed<C>>() {
            Ok(failure) => Ok(*failure),
            Err(failure) => Err(Self { message, failure }),
        }
    }
}

/// A panic or foreign error captured at a containment boundary.
///
/// Faults are what the failure channel holds when a caller-supplied function
/// blows up instead of returning a container.
///
/// # Examples
///
/// ```rust
/// use flusso::error::Fault;
///
/// let payload: Box<dyn std::any::Any + Send> = Box::new("division by zero");
/// let fault = Fault::from_panic(payload);
/// assert_eq!(fault.to_string(), "panicked: division by zero");
/// ```
#[derive(Debug, Clone, thiserror::Error)]
pub enum Fault {
    /// A panic caught while running caller code.
    #[error("panicked: {message}")]
    Panic {
        /// The panic message, or a placeholder for non-string payloads.
        message: String,
    },
    /// A panic raised by unwrapping a container on the wrong variant.
    ///
    /// Clones share the payload; [`Fault::take_unwrap_failed`] hands it out
    /// once.
    #[error("panicked: {message}")]
    Unwrap {
        /// The message of the [`HaltedUnwrap`] payload.
        message: String,
        /// The payload, until it is taken.
        halted: Arc<Mutex<Option<HaltedUnwrap>>>,
    },
    /// An error returned by a lifted fallible function.
    #[error(transparent)]
    Error(Arc<dyn Error + Send + Sync>),
}

impl Fault {
    /// Builds a fault from a panic payload as returned by `catch_unwind`.
    ///
    /// [`HaltedUnwrap`] payloads become [`Fault::Unwrap`] and keep the halted
    /// container. `&str` and `String` payloads keep their message. Anything
    /// else is reported as an unknown panic.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<HaltedUnwrap>() {
            Ok(halted) => {
                return Self::Unwrap {
                    message: halted.message.clone(),
                    halted: Arc::new(Mutex::new(Some(*halted))),
                };
            }
            Err(payload) => payload,
        };
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self::Panic { message }
    }

    /// Wraps a foreign error.
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Error(Arc::new(error))
    }

    /// Returns `true` if this fault came from a panic.
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panic { .. } | Self::Unwrap { .. })
    }

    /// Takes the [`UnwrapFailed`] out of a [`Fault::Unwrap`] whose halted
    /// container has type `C`.
    ///
    /// Returns `None` for other faults, for another container type, or when
    /// the payload was already taken through this fault or one of its clones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flusso::error::Fault;
    /// use flusso::outcome::Outcome;
    ///
    /// let payload = std::panic::catch_unwind(|| Outcome::<i32, String>::Err("late".into()).unwrap())
    ///     .unwrap_err();
    /// let fault = Fault::from_panic(payload);
    /// assert_eq!(fault.to_string(), "panicked: called `Outcome::unwrap` on an `Err` value");
    ///
    /// let failure = fault.take_unwrap_failed::<Outcome<i32, String>>().unwrap();
    /// assert_eq!(failure.into_halted_container(), Outcome::Err("late".to_string()));
    /// assert!(fault.take_unwrap_failed::<Outcome<i32, String>>().is_none());
    /// ```
    pub fn take_unwrap_failed<C: 'static>(&self) -> Option<UnwrapFailed<C>> {
        let Self::Unwrap { halted, .. } = self else {
            return None;
        };
        let mut slot = halted.lock();
        match slot.take()?.into_unwrap_failed::<C>() {
            Ok(failure) => Some(failure),
            Err(other) => {
                *slot = Some(other);
                None
            }
        }
    }
}

impl PartialEq for Fault {
    // Errors have no structural equality; two faults are equal when they
    // render to the same message.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Panic { message: left }, Self::Panic { message: right })
            | (Self::Unwrap { message: left, .. }, Self::Unwrap { message: right, .. }) => {
                left == right
            }
            (Self::Error(left), Self::Error(right)) => left.to_string() == right.to_string(),
            _ => false,
        }
    }
}

impl From<Fault> for String {
    fn from(fault: Fault) -> Self {
        fault.to_string()
    }
}

/// The error produced when a lifted function returns no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("function returned no value")]
pub struct Absent;

static_assertions::assert_impl_all!(Fault: Send, Sync, Clone);
static_assertions::assert_impl_all!(HaltedUnwrap: Send);
