//! Error types for API misuse.
//!
//! A `Failure` is a modelled outcome and is never represented by these types.
//! The errors here describe a broken contract on the caller's side: unwrapping
//! the wrong variant, or asking for a `Failure` without saying why. The
//! panicking operations use their `Display` output as the panic message, and
//! the `try_*` operations hand them back as ordinary `Err` values.

use std::fmt;

/// The variant an operation required or found.
///
/// # Examples
///
/// ```rust
/// use expected::error::Variant;
///
/// assert_eq!(Variant::Success.to_string(), "Success");
/// assert_eq!(Variant::Failure.to_string(), "Failure");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// The `Success` variant.
    Success,
    /// The `Failure` variant.
    Failure,
}

impl fmt::Display for Variant {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => formatter.write_str("Success"),
            Self::Failure => formatter.write_str("Failure"),
        }
    }
}

/// Raised when an unwrapping operation is called on the wrong variant.
///
/// The `detail` field carries the `Debug` rendering of the payload that was
/// found instead, so the report says *which* failure was unwrapped.
///
/// # Examples
///
/// ```rust
/// use expected::Expected;
///
/// let failure: Expected<i32, &str> = Expected::Failure("disk full");
/// let error = failure.try_unwrap().unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "called `Expected::unwrap()` on a `Failure` value: \"disk full\""
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStateError {
    /// The name of the method that was misused.
    pub method_name: &'static str,
    /// The variant that was actually present.
    pub found: Variant,
    /// `Debug` rendering of the payload that was present.
    pub detail: String,
}

impl InvalidStateError {
    pub(crate) fn new(method_name: &'static str, found: Variant, payload: &dyn fmt::Debug) -> Self {
        Self {
            method_name,
            found,
            detail: format!("{payload:?}"),
        }
    }
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "called `Expected::{}()` on a `{}` value: {}",
            self.method_name, self.found, self.detail
        )
    }
}

impl std::error::Error for InvalidStateError {}

/// Raised when a strict constructor is asked to build a `Failure` without an
/// error payload.
///
/// # Examples
///
/// ```rust
/// use expected::construct::try_expect;
///
/// let error = try_expect::<i32, String>(None, None).unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "try_expect: `error` must be present when `value` is absent"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MisuseError {
    /// The name of the constructor that was misused.
    pub function_name: &'static str,
    /// The name of the argument that was absent.
    pub argument_name: &'static str,
}

impl fmt::Display for MisuseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: `{}` must be present when `value` is absent",
            self.function_name, self.argument_name
        )
    }
}

impl std::error::Error for MisuseError {}
