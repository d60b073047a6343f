//! Higher-Kinded Type emulation through Generic Associated Types.

use crate::result::Expected;

/// A trait representing a type constructor.
///
/// Implemented by a type constructor applied to some type `A` (here
/// `Expected<A, E>`), it names the same constructor applied to another type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
///
/// # Examples
///
/// ```rust
/// use expected::Expected;
/// use expected::typeclass::TypeConstructor;
///
/// fn assert_with_type<F>()
/// where
///     F: TypeConstructor<Inner = i32, WithType<String> = Expected<String, bool>>,
/// {
/// }
///
/// assert_with_type::<Expected<i32, bool>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T, E> TypeConstructor for Expected<T, E> {
    type Inner = T;
    type WithType<B> = Expected<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_inner_type_is_success_type() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Expected<i32, String>>();
    }

    #[test]
    fn expected_with_type_preserves_failure_type() {
        fn assert_with_type<T, E, B>()
        where
            Expected<T, E>: TypeConstructor<Inner = T, WithType<B> = Expected<B, E>>,
        {
        }

        assert_with_type::<i32, String, bool>();
        assert_with_type::<String, (), i32>();
        assert_with_type::<Vec<u8>, std::io::Error, String>();
    }
}
