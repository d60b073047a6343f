//! Foldable type class - reducing a structure to a summary value.
//!
//! An `Expected` folds like a container of at most one element: a `Success`
//! contributes its value and a `Failure` contributes nothing.

use super::higher::TypeConstructor;
use crate::result::Expected;

/// A type class for structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// # Examples
///
/// ```rust
/// use expected::Expected;
/// use expected::typeclass::Foldable;
///
/// let success: Expected<i32, String> = Expected::Success(5);
/// assert_eq!(success.fold_left(10, |accumulator, x| accumulator + x), 15);
///
/// let failure: Expected<i32, String> = Expected::Failure("error".to_string());
/// assert_eq!(failure.fold_left(10, |accumulator, x| accumulator + x), 10);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns `true` if the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec` containing all elements.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Checks if any element satisfies the predicate.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone()
            .fold_left(false, |found, element| found || predicate(&element))
    }

    /// Checks if all elements satisfy the predicate.
    ///
    /// A structure with no elements satisfies every predicate.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

impl<T, E> Foldable for Expected<T, E> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Self::Success(value) => function(init, value),
            Self::Failure(_) => init,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Self::Success(value) => function(value, init),
            Self::Failure(_) => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_failure()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Expected::Success(3), 1, false)]
    #[case(Expected::Failure("e"), 0, true)]
    fn length_and_emptiness(
        #[case] value: Expected<i32, &'static str>,
        #[case] length: usize,
        #[case] empty: bool,
    ) {
        assert_eq!(value.length(), length);
        assert_eq!(value.is_empty(), empty);
    }

    #[rstest]
    fn to_list_of_success_has_one_element() {
        let value: Expected<i32, String> = Expected::Success(7);
        assert_eq!(value.to_list(), vec![7]);
    }

    #[rstest]
    fn for_all_on_failure_is_vacuously_true() {
        let value: Expected<i32, &str> = Expected::Failure("e");
        assert!(value.for_all(|x| *x > 100));
        assert!(!value.exists(|x| *x > 100));
    }

    #[rstest]
    fn fold_right_on_success() {
        let value: Expected<&str, ()> = Expected::Success("a");
        assert_eq!(
            value.fold_right(String::from("b"), |element, accumulator| format!(
                "{element}{accumulator}"
            )),
            "ab"
        );
    }
}
