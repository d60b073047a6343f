//! The `Expected` type - a value that is either a success or a failure.
//!
//! `Expected<T, E>` represents the outcome of a computation that may fail in
//! an anticipated way. It is exactly one of:
//!
//! - `Success(T)`: the computation produced a value
//! - `Failure(E)`: the computation failed with an error payload
//!
//! Every operation takes the value by move (or by shared reference) and
//! returns a fresh `Expected`; there is no way to change the variant or the
//! payload of an existing value through this API.
//!
//! # Examples
//!
//! ```rust
//! use expected::Expected;
//!
//! fn parse_port(input: &str) -> Expected<u16, String> {
//!     input
//!         .parse::<u16>()
//!         .map_err(|error| format!("invalid port {input:?}: {error}"))
//!         .into()
//! }
//!
//! let port = parse_port("8080")
//!     .and_then(|port| {
//!         if port >= 1024 {
//!             Expected::Success(port)
//!         } else {
//!             Expected::Failure(format!("port {port} is privileged"))
//!         }
//!     })
//!     .unwrap_or(3000);
//! assert_eq!(port, 8080);
//!
//! let fallback = parse_port("http").unwrap_or(3000);
//! assert_eq!(fallback, 3000);
//! ```

use std::fmt;

use crate::error::{InvalidStateError, Variant};

/// A value that is either a success carrying `T` or a failure carrying `E`.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure payload
///
/// # Examples
///
/// ```rust
/// use expected::Expected;
///
/// let success: Expected<i32, String> = Expected::Success(21);
/// let failure: Expected<i32, String> = Expected::Failure("no value".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Expected::Success(42));
/// assert!(failure.map(|x| x * 2).is_failure());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Expected` may be a `Failure` variant, which should be handled"]
pub enum Expected<T, E> {
    /// The computation succeeded with a value.
    Success(T),
    /// The computation failed with an error payload.
    Failure(E),
}

impl<T, E> Expected<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Success` holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let value: Expected<i32, String> = Expected::success(5);
    /// assert_eq!(value, Expected::Success(5));
    /// ```
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a `Failure` holding `error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let value: Expected<i32, &str> = Expected::failure("bad input");
    /// assert_eq!(value, Expected::Failure("bad input"));
    /// ```
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let success: Expected<i32, &str> = Expected::Success(0);
    /// assert!(success.is_success());
    ///
    /// let failure: Expected<i32, &str> = Expected::Failure("error");
    /// assert!(!failure.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let failure: Expected<i32, &str> = Expected::Failure("error");
    /// assert!(failure.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if this is a `Success` whose value satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let value: Expected<i32, &str> = Expected::Success(4);
    /// assert!(value.is_success_and(|x| x % 2 == 0));
    /// assert!(!value.is_success_and(|x| *x > 10));
    /// ```
    #[inline]
    pub fn is_success_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` if this is a `Failure` whose payload satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let value: Expected<i32, &str> = Expected::Failure("timeout");
    /// assert!(value.is_failure_and(|error| error.starts_with("time")));
    /// ```
    #[inline]
    pub fn is_failure_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => predicate(error),
        }
    }

    /// Converts into an `Option<T>`, discarding a failure payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let success: Expected<i32, &str> = Expected::Success(7);
    /// assert_eq!(success.success_value(), Some(7));
    ///
    /// let failure: Expected<i32, &str> = Expected::Failure("error");
    /// assert_eq!(failure.success_value(), None);
    /// ```
    #[inline]
    pub fn success_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into an `Option<E>`, discarding a success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let failure: Expected<i32, &str> = Expected::Failure("error");
    /// assert_eq!(failure.failure_value(), Some("error"));
    ///
    /// let success: Expected<i32, &str> = Expected::Success(7);
    /// assert_eq!(success.failure_value(), None);
    /// ```
    #[inline]
    pub fn failure_value(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure payload if present.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows both payloads, producing an `Expected<&T, &E>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let value: Expected<String, String> = Expected::Success("hello".to_string());
    /// let length = value.as_ref().map(|text| text.len());
    /// assert_eq!(length, Expected::Success(5));
    /// // `value` is still usable here
    /// assert!(value.is_success());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Expected<&T, &E> {
        match self {
            Self::Success(value) => Expected::Success(value),
            Self::Failure(error) => Expected::Failure(error),
        }
    }

    // =========================================================================
    // Unwrapping
    // =========================================================================

    /// Returns the success value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics with an [`InvalidStateError`] message if this is a `Failure`.
    /// The message includes the `Debug` rendering of the failure payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let value: Expected<i32, &str> = Expected::Success(0);
    /// assert_eq!(value.unwrap(), 0);
    /// ```
    ///
    /// ```rust,should_panic
    /// use expected::Expected;
    ///
    /// let value: Expected<i32, &str> = Expected::Failure("error");
    /// value.unwrap(); // panics
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("{}", InvalidStateError::new("unwrap", Variant::Failure, &error))
            }
        }
    }

    /// Returns the success value, or an [`InvalidStateError`] describing the
    /// failure payload.
    ///
    /// This is the non-panicking form of [`Expected::unwrap`].
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidStateError`] if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let success: Expected<i32, &str> = Expected::Success(1);
    /// assert_eq!(success.try_unwrap(), Ok(1));
    ///
    /// let failure: Expected<i32, &str> = Expected::Failure("broken");
    /// assert!(failure.try_unwrap().unwrap_err().detail.contains("broken"));
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, InvalidStateError>
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(InvalidStateError::new(
                "unwrap",
                Variant::Failure,
                &error,
            )),
        }
    }

    /// Returns the failure payload, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics with an [`InvalidStateError`] message if this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let value: Expected<i32, &str> = Expected::Failure("error");
    /// assert_eq!(value.unwrap_failure(), "error");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => panic!(
                "{}",
                InvalidStateError::new("unwrap_failure", Variant::Success, &value)
            ),
            Self::Failure(error) => error,
        }
    }

    /// Returns the success value, or `fallback` if this is a `Failure`.
    ///
    /// `fallback` is evaluated eagerly; use [`Expected::unwrap_or_else`] when
    /// producing it is costly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let success: Expected<i32, &str> = Expected::Success(0);
    /// assert_eq!(success.unwrap_or(5), 0);
    ///
    /// let failure: Expected<i32, &str> = Expected::Failure("error");
    /// assert_eq!(failure.unwrap_or(5), 5);
    /// ```
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    /// Returns the success value, or computes one from the failure payload.
    ///
    /// `function` is called at most once and only on the `Failure` path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let failure: Expected<usize, &str> = Expected::Failure("four");
    /// assert_eq!(failure.unwrap_or_else(|error| error.len()), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => function(error),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to a success value, passing a failure through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let success: Expected<i32, &str> = Expected::Success(0);
    /// assert_eq!(success.map(|x| x + 1), Expected::Success(1));
    ///
    /// let failure: Expected<i32, &str> = Expected::Failure("error");
    /// assert_eq!(failure.map(|x| x + 1), Expected::Failure("error"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Expected<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Expected::Success(function(value)),
            Self::Failure(error) => Expected::Failure(error),
        }
    }

    /// Applies `function` to a success value, or returns `default`.
    ///
    /// `default` is an already evaluated value; see [`Expected::map_or_else`]
    /// for the lazy form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let success: Expected<i32, &str> = Expected::Success(0);
    /// assert_eq!(success.map_or(20, |x| x + 5), 5);
    ///
    /// let failure: Expected<i32, &str> = Expected::Failure("error");
    /// assert_eq!(failure.map_or(20, |x| x + 5), 20);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(_) => default,
        }
    }

    /// Applies `function` to a success value, or `default_function` to a
    /// failure payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let success: Expected<i32, &str> = Expected::Success(0);
    /// assert_eq!(success.map_or_else(|_| 1, |_| 2), 2);
    ///
    /// let failure: Expected<i32, &str> = Expected::Failure("error");
    /// assert_eq!(failure.map_or_else(|_| 1, |_| 2), 1);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, default_function: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => default_function(error),
        }
    }

    /// Applies `function` to a failure payload, passing a success through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let failure: Expected<i32, &str> = Expected::Failure("error");
    /// assert_eq!(failure.map_error(str::len), Expected::Failure(5));
    ///
    /// let success: Expected<i32, &str> = Expected::Success(3);
    /// assert_eq!(success.map_error(str::len), Expected::Success(3));
    /// ```
    #[inline]
    pub fn map_error<E2, F>(self, function: F) -> Expected<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Expected::Success(value),
            Self::Failure(error) => Expected::Failure(function(error)),
        }
    }

    /// Calls `function` with a reference to the success value, returning
    /// `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let mut seen = Vec::new();
    /// let value: Expected<i32, &str> = Expected::Success(3);
    /// let value = value.inspect(|x| seen.push(*x));
    /// assert_eq!(value, Expected::Success(3));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` with a reference to the failure payload, returning
    /// `self` unchanged.
    #[inline]
    pub fn inspect_error<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            function(error);
        }
        self
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Returns `other` if this is a `Success`, otherwise propagates the failure.
    ///
    /// The success value of `self` is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let success: Expected<i32, &str> = Expected::Success(0);
    /// assert_eq!(success.and(Expected::<i32, &str>::Success(5)).unwrap(), 5);
    ///
    /// let failure: Expected<i32, &str> = Expected::Failure("e");
    /// assert_eq!(failure.and(Expected::<i32, &str>::Success(5)), Expected::Failure("e"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Expected<U, E>) -> Expected<U, E> {
        match self {
            Self::Success(_) => other,
            Self::Failure(error) => Expected::Failure(error),
        }
    }

    /// Calls `function` with the success value, otherwise propagates the failure.
    ///
    /// This is monadic bind with [`Expected::Success`] as unit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let halve = |x: i32| -> Expected<i32, String> {
    ///     if x % 2 == 0 {
    ///         Expected::Success(x / 2)
    ///     } else {
    ///         Expected::Failure(format!("{x} is odd"))
    ///     }
    /// };
    ///
    /// let value: Expected<i32, String> = Expected::Success(12);
    /// assert_eq!(value.and_then(halve).and_then(halve), Expected::Success(3));
    ///
    /// let value: Expected<i32, String> = Expected::Success(6);
    /// assert_eq!(
    ///     value.and_then(halve).and_then(halve),
    ///     Expected::Failure("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Expected<U, E>
    where
        F: FnOnce(T) -> Expected<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Expected::Failure(error),
        }
    }

    /// Returns `self`'s success value if present, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let failure: Expected<i32, &str> = Expected::Failure("e");
    /// assert_eq!(failure.or(Expected::<i32, ()>::Success(5)).unwrap(), 5);
    ///
    /// let success: Expected<i32, &str> = Expected::Success(0);
    /// assert_eq!(success.or(Expected::<i32, ()>::Success(5)).unwrap(), 0);
    /// ```
    #[inline]
    pub fn or<E2>(self, other: Expected<T, E2>) -> Expected<T, E2> {
        match self {
            Self::Success(value) => Expected::Success(value),
            Self::Failure(_) => other,
        }
    }

    /// Returns `self`'s success value if present, otherwise calls `function`
    /// with the failure payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let failure: Expected<i32, &str> = Expected::Failure("e");
    /// let recovered = failure.or_else(|error| Expected::<i32, ()>::Success(error.len() as i32));
    /// assert_eq!(recovered, Expected::Success(1));
    /// ```
    #[inline]
    pub fn or_else<E2, F>(self, function: F) -> Expected<T, E2>
    where
        F: FnOnce(E) -> Expected<T, E2>,
    {
        match self {
            Self::Success(value) => Expected::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into a standard library `Result`.
    ///
    /// This lets `?` be used on an `Expected` inside functions returning
    /// `Result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// fn double(value: Expected<i32, String>) -> Result<i32, String> {
    ///     Ok(value.into_result()? * 2)
    /// }
    ///
    /// assert_eq!(double(Expected::Success(4)), Ok(8));
    /// assert_eq!(double(Expected::Failure("no".to_string())), Err("no".to_string()));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default, E> Expected<T, E> {
    /// Returns the success value, or `T::default()` if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let failure: Expected<String, i32> = Expected::Failure(1);
    /// assert_eq!(failure.unwrap_or_default(), String::new());
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<T, E> Expected<Expected<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let nested: Expected<Expected<i32, &str>, &str> = Expected::Success(Expected::Success(1));
    /// assert_eq!(nested.flatten(), Expected::Success(1));
    ///
    /// let nested: Expected<Expected<i32, &str>, &str> = Expected::Success(Expected::Failure("inner"));
    /// assert_eq!(nested.flatten(), Expected::Failure("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Expected<T, E> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(error) => Expected::Failure(error),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Expected<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Expected<T, E> {
    /// Converts a `Result`: `Ok(v)` becomes `Success(v)` and `Err(e)` becomes
    /// `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Expected<T, E>> for Result<T, E> {
    /// Converts an `Expected`: `Success(v)` becomes `Ok(v)` and `Failure(e)`
    /// becomes `Err(e)`.
    #[inline]
    fn from(expected: Expected<T, E>) -> Self {
        match expected {
            Expected::Success(value) => Ok(value),
            Expected::Failure(error) => Err(error),
        }
    }
}

// =============================================================================
// FromIterator Implementation
// =============================================================================

impl<A, E, V> FromIterator<Expected<A, E>> for Expected<V, E>
where
    V: FromIterator<A>,
{
    /// Collects success values until the first `Failure`, which is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let all: Expected<Vec<i32>, &str> =
    ///     vec![Expected::Success(1), Expected::Success(2)].into_iter().collect();
    /// assert_eq!(all, Expected::Success(vec![1, 2]));
    ///
    /// let first_failure: Expected<Vec<i32>, &str> = vec![
    ///     Expected::Success(1),
    ///     Expected::Failure("second"),
    ///     Expected::Failure("third"),
    /// ]
    /// .into_iter()
    /// .collect();
    /// assert_eq!(first_failure, Expected::Failure("second"));
    /// ```
    fn from_iter<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = Expected<A, E>>,
    {
        iterable
            .into_iter()
            .map(Result::from)
            .collect::<Result<V, E>>()
            .into()
    }
}

static_assertions::assert_impl_all!(Expected<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Expected<u8, u8>: Copy);
static_assertions::assert_not_impl_any!(Expected<std::rc::Rc<i32>, String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn success_construction() {
        let value: Expected<i32, String> = Expected::success(42);
        assert!(value.is_success());
        assert!(!value.is_failure());
    }

    #[rstest]
    fn failure_construction() {
        let value: Expected<i32, String> = Expected::failure("error".to_string());
        assert!(value.is_failure());
        assert!(!value.is_success());
    }

    #[rstest]
    fn unwrap_or_else_is_lazy_on_success() {
        let calls = Cell::new(0);
        let value: Expected<i32, &str> = Expected::Success(1);
        let result = value.unwrap_or_else(|_| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(result, 1);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn unwrap_or_else_runs_once_on_failure() {
        let calls = Cell::new(0);
        let value: Expected<i32, &str> = Expected::Failure("error");
        let result = value.unwrap_or_else(|_| {
            calls.set(calls.get() + 1);
            56
        });
        assert_eq!(result, 56);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn map_does_not_call_function_on_failure() {
        let calls = Cell::new(0);
        let value: Expected<i32, &str> = Expected::Failure("error");
        let mapped = value.map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        });
        assert_eq!(mapped, Expected::Failure("error"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn or_else_does_not_call_function_on_success() {
        let calls = Cell::new(0);
        let value: Expected<i32, &str> = Expected::Success(0);
        let result = value.or_else(|_| {
            calls.set(calls.get() + 1);
            Expected::<i32, ()>::Success(10)
        });
        assert_eq!(result, Expected::Success(0));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn debug_format() {
        let success: Expected<i32, &str> = Expected::Success(1);
        let failure: Expected<i32, &str> = Expected::Failure("e");
        assert_eq!(format!("{success:?}"), "Success(1)");
        assert_eq!(format!("{failure:?}"), "Failure(\"e\")");
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let expected: Expected<i32, String> = ok.into();
        assert_eq!(expected, Expected::Success(42));
        assert_eq!(expected.into_result(), Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let expected: Expected<i32, String> = err.into();
        assert_eq!(expected, Expected::Failure("error".to_string()));
        let back: Result<i32, String> = expected.into();
        assert_eq!(back, Err("error".to_string()));
    }

    #[rstest]
    #[should_panic(expected = "called `Expected::unwrap()` on a `Failure` value: \"bad\"")]
    fn unwrap_on_failure_panics_with_payload() {
        let value: Expected<i32, &str> = Expected::Failure("bad");
        let _ = value.unwrap();
    }

    #[rstest]
    #[should_panic(expected = "called `Expected::unwrap_failure()` on a `Success` value: 7")]
    fn unwrap_failure_on_success_panics() {
        let value: Expected<i32, &str> = Expected::Success(7);
        let _ = value.unwrap_failure();
    }

    #[rstest]
    fn ordering_places_success_before_failure() {
        let success: Expected<i32, i32> = Expected::Success(100);
        let failure: Expected<i32, i32> = Expected::Failure(0);
        assert!(success < failure);
    }
}
