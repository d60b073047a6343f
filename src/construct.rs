//! Constructors that infer the variant from the presence of a value.
//!
//! Absence is always spelled `None`. A present value is a `Success` no matter
//! what it is, so `Some(0)`, `Some(false)` and `Some("")` all succeed.
//!
//! # Examples
//!
//! ```rust
//! use expected::construct::{ExpectValue, expect};
//! use expected::Expected;
//!
//! assert_eq!(expect(Some(0), "error"), Expected::Success(0));
//! assert_eq!(expect(None::<i32>, "error"), Expected::Failure("error"));
//!
//! let lookup = [("alice", 30), ("bob", 25)]
//!     .iter()
//!     .find(|(name, _)| *name == "carol")
//!     .map(|(_, age)| *age)
//!     .expect_value("no such user");
//! assert_eq!(lookup, Expected::Failure("no such user"));
//! ```

use crate::error::MisuseError;
use crate::result::Expected;

/// Returns `Success(value)` if `value` is present, otherwise `Failure(error)`.
///
/// `error` is a plain `E`, so it can never be absent in this form.
///
/// # Examples
///
/// ```rust
/// use expected::construct::expect;
/// use expected::Expected;
///
/// assert_eq!(expect(Some(""), 404), Expected::Success(""));
/// assert_eq!(expect(None::<&str>, 404), Expected::Failure(404));
/// ```
#[inline]
pub fn expect<T, E>(value: Option<T>, error: E) -> Expected<T, E> {
    match value {
        Some(value) => Expected::Success(value),
        None => Expected::Failure(error),
    }
}

/// Returns `Success(value)` if `value` is present, otherwise a `Failure`
/// holding `E::default()`.
///
/// Only appropriate when the default of `E` is an acceptable sentinel.
///
/// # Examples
///
/// ```rust
/// use expected::construct::expect_or_default;
/// use expected::Expected;
///
/// let missing: Expected<i32, String> = expect_or_default(None);
/// assert_eq!(missing, Expected::Failure(String::new()));
/// ```
#[inline]
pub fn expect_or_default<T, E: Default>(value: Option<T>) -> Expected<T, E> {
    match value {
        Some(value) => Expected::Success(value),
        None => Expected::Failure(E::default()),
    }
}

/// The strict constructor for callers whose error is itself optional.
///
/// A present `value` yields `Success` without looking at `error`. An absent
/// `value` requires a present `error`.
///
/// # Errors
///
/// Returns a [`MisuseError`] if both `value` and `error` are absent.
///
/// # Examples
///
/// ```rust
/// use expected::construct::try_expect;
/// use expected::Expected;
///
/// assert_eq!(try_expect(Some(1), None::<&str>), Ok(Expected::Success(1)));
/// assert_eq!(try_expect(None::<i32>, Some("why")), Ok(Expected::Failure("why")));
/// assert!(try_expect(None::<i32>, None::<&str>).is_err());
/// ```
#[inline]
pub fn try_expect<T, E>(value: Option<T>, error: Option<E>) -> Result<Expected<T, E>, MisuseError> {
    checked("try_expect", value, error)
}

/// Like [`try_expect`], but treats a missing error as a programming fault.
///
/// # Panics
///
/// Panics with the [`MisuseError`] message if both `value` and `error` are
/// absent.
///
/// # Examples
///
/// ```rust
/// use expected::construct::expect_strict;
/// use expected::Expected;
///
/// assert_eq!(expect_strict(Some(5), None::<String>), Expected::Success(5));
/// ```
///
/// ```rust,should_panic
/// use expected::construct::expect_strict;
///
/// let _ = expect_strict(None::<i32>, None::<String>); // panics
/// ```
#[inline]
#[track_caller]
pub fn expect_strict<T, E>(value: Option<T>, error: Option<E>) -> Expected<T, E> {
    match checked("expect_strict", value, error) {
        Ok(expected) => expected,
        Err(misuse) => panic!("{misuse}"),
    }
}

fn checked<T, E>(
    function_name: &'static str,
    value: Option<T>,
    error: Option<E>,
) -> Result<Expected<T, E>, MisuseError> {
    match (value, error) {
        (Some(value), _) => Ok(Expected::Success(value)),
        (None, Some(error)) => Ok(Expected::Failure(error)),
        (None, None) => Err(MisuseError {
            function_name,
            argument_name: "error",
        }),
    }
}

/// Extension methods that turn an `Option<T>` into an [`Expected`].
///
/// # Examples
///
/// ```rust
/// use expected::construct::ExpectValue;
/// use expected::Expected;
///
/// let config_port: Option<u16> = None;
/// let port = config_port.expect_value("port is not configured");
/// assert_eq!(port, Expected::Failure("port is not configured"));
/// ```
pub trait ExpectValue<T>: Sized {
    /// See [`expect`].
    fn expect_value<E>(self, error: E) -> Expected<T, E>;

    /// See [`try_expect`].
    ///
    /// # Errors
    ///
    /// Returns a [`MisuseError`] if both the value and `error` are absent.
    fn try_expect_value<E>(self, error: Option<E>) -> Result<Expected<T, E>, MisuseError>;

    /// See [`expect_or_default`].
    fn expect_value_or_default<E: Default>(self) -> Expected<T, E>;
}

impl<T> ExpectValue<T> for Option<T> {
    #[inline]
    fn expect_value<E>(self, error: E) -> Expected<T, E> {
        expect(self, error)
    }

    #[inline]
    fn try_expect_value<E>(self, error: Option<E>) -> Result<Expected<T, E>, MisuseError> {
        checked("try_expect_value", self, error)
    }

    #[inline]
    fn expect_value_or_default<E: Default>(self) -> Expected<T, E> {
        expect_or_default(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(0))]
    #[case(Some(-1))]
    #[case(Some(i32::MAX))]
    fn expect_treats_every_present_value_as_success(#[case] value: Option<i32>) {
        assert!(expect(value, "error").is_success());
    }

    #[rstest]
    fn expect_with_absent_value_uses_supplied_error() {
        let result: Expected<String, &str> = expect(None, "cats > dogs");
        assert_eq!(result, Expected::Failure("cats > dogs"));
    }

    #[rstest]
    fn expect_or_default_uses_default_error() {
        let result: Expected<i32, i32> = expect_or_default(None);
        assert_eq!(result, Expected::Failure(0));
    }

    #[rstest]
    fn try_expect_present_value_ignores_absent_error() {
        let result = try_expect(Some("value"), None::<String>);
        assert_eq!(result, Ok(Expected::Success("value")));
    }

    #[rstest]
    fn try_expect_rejects_missing_error() {
        let result = try_expect(None::<i32>, None::<String>);
        assert_eq!(
            result,
            Err(MisuseError {
                function_name: "try_expect",
                argument_name: "error",
            })
        );
    }

    #[rstest]
    #[should_panic(expected = "expect_strict: `error` must be present when `value` is absent")]
    fn expect_strict_panics_on_missing_error() {
        let _ = expect_strict(None::<i32>, None::<String>);
    }

    #[rstest]
    fn extension_methods_delegate() {
        assert_eq!(Some(3).expect_value("e"), Expected::Success(3));
        assert_eq!(None::<i32>.expect_value("e"), Expected::Failure("e"));
        assert_eq!(
            None::<i32>.expect_value_or_default::<String>(),
            Expected::Failure(String::new())
        );
        assert_eq!(
            None::<i32>.try_expect_value(None::<&str>).unwrap_err().function_name,
            "try_expect_value"
        );
    }
}
