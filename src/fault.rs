//! Capturing panics as `Failure` values.
//!
//! [`catch`] runs a computation inside an unwinding boundary. A normal return
//! becomes `Success`, and a panic becomes `Failure(Fault)` holding the panic
//! payload. Exactly one panic can be captured per call and `catch` never
//! re-raises it; [`Fault::resume`] is available when the caller wants to.
//!
//! Only unwinding panics are intercepted. Builds with `panic = "abort"`,
//! allocation failure and panics raised while already unwinding terminate the
//! process as usual.
//!
//! # Examples
//!
//! ```rust
//! use expected::fault::catch;
//! use expected::Expected;
//!
//! let value = catch(|| 5);
//! assert!(matches!(value, Expected::Success(5)));
//!
//! let items: Vec<i32> = Vec::new();
//! let failure = catch(move || items[3]);
//! assert!(failure.is_failure());
//! assert_eq!(
//!     failure.unwrap_failure().message(),
//!     "index out of bounds: the len is 0 but the index is 3"
//! );
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe, UnwindSafe};

use crate::result::Expected;

/// A panic captured by [`catch`].
///
/// Holds the original payload together with its message. String payloads
/// (the ones produced by `panic!`) provide the message directly; any other
/// payload is described as `Box<dyn Any>`.
pub struct Fault {
    message: String,
    payload: Box<dyn Any + Send>,
}

impl Fault {
    /// Wraps a panic payload, as returned by [`std::panic::catch_unwind`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::fault::Fault;
    ///
    /// let fault = Fault::from_payload(Box::new("boom"));
    /// assert_eq!(fault.message(), "boom");
    /// ```
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = payload_message(&*payload).to_owned();
        Self { message, payload }
    }

    /// Returns the panic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the raw panic payload.
    pub fn payload(&self) -> &(dyn Any + Send) {
        &*self.payload
    }

    /// Returns `true` if the payload is of type `P`.
    pub fn is<P: Any>(&self) -> bool {
        self.payload.is::<P>()
    }

    /// Returns the payload as `P` if it has that type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::fault::catch;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Code(u32);
    ///
    /// let fault = catch(|| -> i32 { std::panic::panic_any(Code(7)) }).unwrap_failure();
    /// assert_eq!(fault.downcast_ref::<Code>(), Some(&Code(7)));
    /// assert_eq!(fault.message(), "Box<dyn Any>");
    /// ```
    pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }

    /// Consumes the fault and returns the raw payload.
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Re-raises the captured panic with its original payload.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

fn payload_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "Box<dyn Any>"
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Fault")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "computation panicked: {}", self.message)
    }
}

impl std::error::Error for Fault {}

impl From<Box<dyn Any + Send>> for Fault {
    fn from(payload: Box<dyn Any + Send>) -> Self {
        Self::from_payload(payload)
    }
}

/// Runs `thunk`, turning a panic into a `Failure(Fault)`.
///
/// `thunk` is called exactly once, synchronously, on the current thread.
///
/// # Examples
///
/// ```rust
/// use expected::fault::catch;
///
/// let result = catch(|| -> i32 { panic!("error") });
/// assert_eq!(result.unwrap_failure().message(), "error");
/// ```
pub fn catch<T, F>(thunk: F) -> Expected<T, Fault>
where
    F: FnOnce() -> T + UnwindSafe,
{
    match panic::catch_unwind(thunk) {
        Ok(value) => Expected::Success(value),
        Err(payload) => Expected::Failure(Fault::from_payload(payload)),
    }
}

/// Like [`catch`], for thunks that are not [`UnwindSafe`].
///
/// The thunk is wrapped in [`AssertUnwindSafe`]. Anything it mutates through
/// captured references may be left half-updated when a `Failure` is returned.
///
/// # Examples
///
/// ```rust
/// use expected::fault::catch_unchecked;
///
/// let mut log = Vec::new();
/// let result = catch_unchecked(|| {
///     log.push("started");
///     if log.len() == 1 {
///         panic!("stopped early");
///     }
///     log.len()
/// });
/// assert!(result.is_failure());
/// assert_eq!(log, vec!["started"]);
/// ```
pub fn catch_unchecked<T, F>(thunk: F) -> Expected<T, Fault>
where
    F: FnOnce() -> T,
{
    catch(AssertUnwindSafe(thunk))
}

impl<T> Expected<T, Fault> {
    /// Associated form of [`catch`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    /// use expected::fault::Fault;
    ///
    /// let value = Expected::<i32, Fault>::catch(|| 5);
    /// assert_eq!(value.unwrap(), 5);
    /// ```
    pub fn catch<F>(thunk: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        catch(thunk)
    }
}

static_assertions::assert_impl_all!(Fault: Send, std::error::Error);
