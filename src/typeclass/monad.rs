//! Monad type class - sequencing computations where each step depends on the
//! previous one.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;
use crate::result::Expected;

/// A type class for applicatives that can sequence dependent computations.
///
/// # Examples
///
/// ```rust
/// use expected::Expected;
/// use expected::typeclass::Monad;
///
/// fn parse(text: &str) -> Expected<i32, String> {
///     text.parse::<i32>().map_err(|error| error.to_string()).into()
/// }
///
/// let total = parse("40").flat_map(|a| parse("2").flat_map(move |b| Expected::Success(a + b)));
/// assert_eq!(total, Expected::Success(42));
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is a failure, the failure propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    /// use expected::typeclass::Monad;
    ///
    /// let first: Expected<i32, &str> = Expected::Success(5);
    /// assert_eq!(first.then(Expected::Success("next")), Expected::Success("next"));
    ///
    /// let first: Expected<i32, &str> = Expected::Failure("stop");
    /// assert_eq!(first.then(Expected::Success("next")), Expected::Failure("stop"));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<T, E: Clone> Monad for Expected<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Expected<B, E>
    where
        F: FnOnce(T) -> Expected<B, E>,
    {
        self.and_then(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn half(value: i32) -> Expected<i32, String> {
        if value % 2 == 0 {
            Expected::Success(value / 2)
        } else {
            Expected::Failure(format!("{value} is odd"))
        }
    }

    fn decrement(value: i32) -> Expected<i32, String> {
        if value > 0 {
            Expected::Success(value - 1)
        } else {
            Expected::Failure("underflow".to_string())
        }
    }

    #[rstest]
    fn left_identity_law() {
        let value = 8;
        let left = <Expected<(), String>>::pure(value).flat_map(half);
        assert_eq!(left, half(value));
    }

    #[rstest]
    #[case(Expected::Success(3))]
    #[case(Expected::Failure("error".to_string()))]
    fn right_identity_law(#[case] monad: Expected<i32, String>) {
        let bound = monad.clone().flat_map(<Expected<(), String>>::pure);
        assert_eq!(bound, monad);
    }

    #[rstest]
    #[case(Expected::Success(8))]
    #[case(Expected::Success(6))]
    #[case(Expected::Success(0))]
    #[case(Expected::Failure("error".to_string()))]
    fn associativity_law(#[case] monad: Expected<i32, String>) {
        let left = monad.clone().flat_map(half).flat_map(decrement);
        let right = monad.flat_map(|x| half(x).flat_map(decrement));
        assert_eq!(left, right);
    }

    #[rstest]
    fn flat_map_short_circuits() {
        let monad: Expected<i32, String> = Expected::Failure("first".to_string());
        let result = monad.flat_map(|_| -> Expected<i32, String> {
            unreachable!("function must not run on a failure")
        });
        assert_eq!(result, Expected::Failure("first".to_string()));
    }
}
