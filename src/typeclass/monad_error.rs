//! `MonadError` type class - throwing and recovering from failures inside a
//! monad.
//!
//! # Laws
//!
//! ## Throw Short-Circuits
//!
//! ```text
//! Self::throw_error(e).flat_map(f) == Self::throw_error(e)
//! ```
//!
//! ## Catch Recovers Thrown Errors
//!
//! ```text
//! Self::catch_error(Self::throw_error(e), h) == h(e)
//! ```
//!
//! ## Catch Ignores Successes
//!
//! ```text
//! Self::catch_error(Self::pure(a), h) == Self::pure(a)
//! ```

use super::monad::Monad;
use crate::result::Expected;

/// A type class for monads whose failures carry an error of type `E`.
///
/// # Examples
///
/// ```rust
/// use expected::Expected;
/// use expected::typeclass::MonadError;
///
/// fn positive(value: i32) -> Expected<i32, String> {
///     <Expected<i32, String>>::ensure_or(
///         Expected::Success(value),
///         |v| format!("{v} is not positive"),
///         |&v| v > 0,
///     )
/// }
///
/// assert_eq!(positive(4), Expected::Success(4));
/// assert_eq!(positive(-2), Expected::Failure("-2 is not positive".to_string()));
///
/// let recovered = <Expected<i32, String>>::catch_error(positive(-2), |error| {
///     Expected::Success(error.len() as i32)
/// });
/// assert_eq!(recovered, Expected::Success(18));
/// ```
pub trait MonadError<E>: Monad {
    /// Builds a failed computation from an error.
    fn throw_error<A>(error: E) -> Self::WithType<A>;

    /// Runs `handler` on the error of a failed computation. Successes pass
    /// through untouched.
    fn catch_error<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        F: FnOnce(E) -> Self::WithType<A>;

    /// Lifts a standard `Result` into this monad.
    fn from_result<A>(result: Result<A, E>) -> Self::WithType<A>;

    /// Turns a success into a failure when `predicate` rejects its value.
    fn ensure<A, F, P>(computation: Self::WithType<A>, error: F, predicate: P) -> Self::WithType<A>
    where
        F: FnOnce() -> E,
        P: FnOnce(&A) -> bool;

    /// Like [`ensure`](MonadError::ensure), but the error is built from the
    /// rejected value.
    fn ensure_or<A, F, P>(
        computation: Self::WithType<A>,
        error_function: F,
        predicate: P,
    ) -> Self::WithType<A>
    where
        F: FnOnce(&A) -> E,
        P: FnOnce(&A) -> bool;
}

impl<T, E: Clone> MonadError<E> for Expected<T, E> {
    #[inline]
    fn throw_error<A>(error: E) -> Expected<A, E> {
        Expected::Failure(error)
    }

    #[inline]
    fn catch_error<A, F>(computation: Expected<A, E>, handler: F) -> Expected<A, E>
    where
        F: FnOnce(E) -> Expected<A, E>,
    {
        computation.or_else(handler)
    }

    #[inline]
    fn from_result<A>(result: Result<A, E>) -> Expected<A, E> {
        result.into()
    }

    fn ensure<A, F, P>(computation: Expected<A, E>, error: F, predicate: P) -> Expected<A, E>
    where
        F: FnOnce() -> E,
        P: FnOnce(&A) -> bool,
    {
        computation.and_then(|value| {
            if predicate(&value) {
                Expected::Success(value)
            } else {
                Expected::Failure(error())
            }
        })
    }

    fn ensure_or<A, F, P>(
        computation: Expected<A, E>,
        error_function: F,
        predicate: P,
    ) -> Expected<A, E>
    where
        F: FnOnce(&A) -> E,
        P: FnOnce(&A) -> bool,
    {
        computation.and_then(|value| {
            if predicate(&value) {
                Expected::Success(value)
            } else {
                Expected::Failure(error_function(&value))
            }
        })
    }
}
