//! Bifunctor type class - mapping over both sides of a two-parameter type.
//!
//! `Expected<T, E>` is a `Bifunctor<E, T>`: `first` transforms the failure
//! payload and `second` transforms the success value, so `second` agrees with
//! [`Functor::fmap`](super::Functor::fmap).
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```

use crate::result::Expected;

/// A type class for types with two type parameters that can have functions
/// mapped over both.
///
/// # Examples
///
/// ```rust
/// use expected::Expected;
/// use expected::typeclass::Bifunctor;
///
/// let failure: Expected<i32, String> = Expected::Failure("broken".to_string());
/// let mapped = failure.bimap(|error| error.len(), |value| value * 2);
/// assert_eq!(mapped, Expected::Failure(6));
/// ```
pub trait Bifunctor<A, B> {
    /// The resulting type constructor after applying the transformation.
    ///
    /// For `Expected<T, E>` (implemented as `Bifunctor<E, T>`),
    /// `Target<C, D> = Expected<D, C>`.
    type Target<C, D>;

    /// Applies two functions to both type parameters simultaneously.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Applies two functions to references of both type parameters without
    /// consuming `self`.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;

    /// Applies a function to a reference of the first type parameter.
    ///
    /// Requires `B: Clone` because the untransformed value must be cloned.
    #[inline]
    fn first_ref<C, F>(&self, function: F) -> Self::Target<C, B>
    where
        B: Clone,
        F: FnOnce(&A) -> C,
        Self: Sized,
    {
        self.bimap_ref(function, |b| b.clone())
    }

    /// Applies a function to a reference of the second type parameter.
    ///
    /// Requires `A: Clone` because the untransformed value must be cloned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use expected::Expected;
    /// use expected::typeclass::Bifunctor;
    ///
    /// let value: Expected<i32, String> = Expected::Success(21);
    /// let result = value.second_ref(|n| n * 2);
    /// assert!(value.is_success()); // value is still available
    /// assert_eq!(result, Expected::Success(42));
    /// ```
    #[inline]
    fn second_ref<D, G>(&self, function: G) -> Self::Target<A, D>
    where
        A: Clone,
        G: FnOnce(&B) -> D,
        Self: Sized,
    {
        self.bimap_ref(|a| a.clone(), function)
    }
}

impl<T, E> Bifunctor<E, T> for Expected<T, E> {
    type Target<C, D> = Expected<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Expected<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Self::Success(value) => Expected::Success(second_function(value)),
            Self::Failure(error) => Expected::Failure(first_function(error)),
        }
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Expected<T, C>
    where
        F: FnOnce(E) -> C,
    {
        self.map_error(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Expected<D, E>
    where
        G: FnOnce(T) -> D,
    {
        self.map(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Expected<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        match self {
            Self::Success(value) => Expected::Success(second_function(value)),
            Self::Failure(error) => Expected::Failure(first_function(error)),
        }
    }
}
