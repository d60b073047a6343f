//! Applicative type class - lifting values and combining independent results.
//!
//! For `Expected`, combining computations keeps the first `Failure` in
//! argument order; the function only runs when every input is a `Success`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```

use super::functor::Functor;
use crate::result::Expected;

/// A type class for functors that can lift values and combine independent
/// computations.
///
/// # Examples
///
/// ```rust
/// use expected::Expected;
/// use expected::typeclass::Applicative;
///
/// let x: Expected<i32, String> = <Expected<(), String>>::pure(42);
/// assert_eq!(x, Expected::Success(42));
///
/// let a: Expected<i32, String> = Expected::Success(3);
/// let b: Expected<i32, String> = Expected::Success(4);
/// assert_eq!(a.map2(b, |x, y| x + y), Expected::Success(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    /// use expected::typeclass::Applicative;
    ///
    /// let a: Expected<i32, &str> = Expected::Failure("first");
    /// let b: Expected<i32, &str> = Expected::Failure("second");
    /// assert_eq!(a.map2(b, |x, y| x + y), Expected::Failure("first"));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates two applicatives and returns the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates two applicatives and returns the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    /// use expected::typeclass::Applicative;
    ///
    /// let function: Expected<fn(i32) -> i32, ()> = Expected::Success(|x| x + 1);
    /// assert_eq!(function.apply(Expected::Success(1)), Expected::Success(2));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<T, E: Clone> Applicative for Expected<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Expected<B, E> {
        Expected::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Expected<B, E>, function: F) -> Expected<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Expected::Success(b)) => Expected::Success(function(a, b)),
            (Self::Failure(error), _) | (_, Expected::Failure(error)) => Expected::Failure(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Expected<B, E>,
        third: Expected<C, E>,
        function: F,
    ) -> Expected<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Success(a), Expected::Success(b), Expected::Success(c)) => {
                Expected::Success(function(a, b, c))
            }
            (Self::Failure(error), _, _)
            | (_, Expected::Failure(error), _)
            | (_, _, Expected::Failure(error)) => Expected::Failure(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Expected<B, E>) -> Expected<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}
