//! Functor type class - mapping over the success value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```

use super::higher::TypeConstructor;
use crate::result::Expected;

/// A type class for types that can have a function mapped over their contents.
///
/// # Examples
///
/// ```rust
/// use expected::Expected;
/// use expected::typeclass::Functor;
///
/// let x: Expected<i32, String> = Expected::Success(5);
/// let y: Expected<String, String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Expected::Success("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    /// use expected::typeclass::Functor;
    ///
    /// let x: Expected<String, String> = Expected::Success("hello".to_string());
    /// let y: Expected<usize, String> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Expected::Success(5));
    /// // x is still available here
    /// assert!(x.is_success());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    /// use expected::typeclass::Functor;
    ///
    /// let x: Expected<i32, ()> = Expected::Success(5);
    /// assert_eq!(x.replace("replaced"), Expected::Success("replaced"));
    ///
    /// let y: Expected<i32, ()> = Expected::Failure(());
    /// assert_eq!(y.replace("replaced"), Expected::Failure(()));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<T, E: Clone> Functor for Expected<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Expected<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Expected<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Success(value) => Expected::Success(function(value)),
            Self::Failure(error) => Expected::Failure(error.clone()),
        }
    }
}
