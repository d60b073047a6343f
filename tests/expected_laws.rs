#![cfg(feature = "typeclass")]
//! Property-based tests for the algebraic laws of Expected.
//!
//! - **Functor**: identity and composition
//! - **Monad**: left identity, right identity and associativity
//! - **Bifunctor**: identity, composition and first/second consistency
//! - **MonadError**: throw short-circuits, catch recovers only failures
//! - **Combinators**: unwrap/map/and/or behave as the variant dictates

use expected::Expected;
use expected::construct::expect;
use expected::typeclass::{Applicative, Bifunctor, Foldable, Functor, Monad, MonadError};
use proptest::prelude::*;

fn expected_strategy() -> impl Strategy<Value = Expected<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Expected::Success),
        any::<String>().prop_map(Expected::Failure),
    ]
}

fn checked_half(value: i32) -> Expected<i32, String> {
    if value % 2 == 0 {
        Expected::Success(value / 2)
    } else {
        Expected::Failure(format!("{value} is odd"))
    }
}

fn checked_negate(value: i32) -> Expected<i32, String> {
    value
        .checked_neg()
        .map_or_else(|| Expected::Failure("overflow".to_string()), Expected::Success)
}

proptest! {
    // =========================================================================
    // Functor Laws
    // =========================================================================

    #[test]
    fn prop_functor_identity_law(value in expected_strategy()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }

    #[test]
    fn prop_functor_composition_law(value in expected_strategy()) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    // =========================================================================
    // Monad Laws
    // =========================================================================

    #[test]
    fn prop_monad_left_identity_law(value in any::<i32>()) {
        let left = Expected::<i32, String>::Success(value).and_then(checked_half);
        prop_assert_eq!(left, checked_half(value));
    }

    #[test]
    fn prop_monad_right_identity_law(value in expected_strategy()) {
        prop_assert_eq!(value.clone().and_then(Expected::Success), value.clone());
        prop_assert_eq!(value.clone().flat_map(<Expected<(), String>>::pure), value);
    }

    #[test]
    fn prop_monad_associativity_law(value in expected_strategy()) {
        let left = value.clone().and_then(checked_half).and_then(checked_negate);
        let right = value.and_then(|x| checked_half(x).and_then(checked_negate));
        prop_assert_eq!(left, right);
    }

    // =========================================================================
    // Bifunctor Laws
    // =========================================================================

    #[test]
    fn prop_bifunctor_identity_law(value in expected_strategy()) {
        prop_assert_eq!(value.clone().bimap(|e| e, |x| x), value);
    }

    #[test]
    fn prop_bifunctor_composition_law(value in expected_strategy()) {
        let first1 = |e: String| e.len();
        let first2 = |n: usize| n.wrapping_add(100);
        let second1 = |x: i32| x.wrapping_add(1);
        let second2 = |x: i32| x.wrapping_mul(2);

        let left = value.clone().bimap(|e| first2(first1(e)), |x| second2(second1(x)));
        let right = value.bimap(first1, second1).bimap(first2, second2);

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_bifunctor_first_second_consistency(value in expected_strategy()) {
        let first = |e: String| e.len();
        let second = |x: i32| x.wrapping_mul(2);

        let by_bimap = value.clone().bimap(first, second);
        let by_first_second = value.clone().first(first).second(second);
        let by_second_first = value.second(second).first(first);

        prop_assert_eq!(by_bimap.clone(), by_first_second);
        prop_assert_eq!(by_bimap, by_second_first);
    }

    // =========================================================================
    // MonadError Laws
    // =========================================================================

    #[test]
    fn prop_throw_error_short_circuits(error in any::<String>()) {
        let thrown = <Expected<i32, String>>::throw_error::<i32>(error.clone());
        prop_assert_eq!(thrown.flat_map(checked_half), Expected::Failure(error));
    }

    #[test]
    fn prop_catch_error_matches_handler(error in any::<String>()) {
        let handler = |e: String| checked_half(i32::try_from(e.len()).unwrap_or(0));
        let thrown = <Expected<i32, String>>::throw_error::<i32>(error.clone());
        prop_assert_eq!(<Expected<i32, String>>::catch_error(thrown, handler), handler(error));
    }

    #[test]
    fn prop_catch_error_ignores_success(value in any::<i32>()) {
        let caught = <Expected<i32, String>>::catch_error(Expected::Success(value), |_| Expected::Success(0));
        prop_assert_eq!(caught, Expected::Success(value));
    }

    // =========================================================================
    // Combinator Properties
    // =========================================================================

    #[test]
    fn prop_success_predicates(value in any::<i32>()) {
        let success: Expected<i32, String> = Expected::Success(value);
        prop_assert!(success.is_success());
        prop_assert!(!success.is_failure());
    }

    #[test]
    fn prop_failure_predicates(error in any::<String>()) {
        let failure: Expected<i32, String> = Expected::Failure(error);
        prop_assert!(failure.is_failure());
        prop_assert!(!failure.is_success());
    }

    #[test]
    fn prop_unwrap_returns_success_value(value in any::<i32>()) {
        prop_assert_eq!(Expected::<i32, String>::Success(value).unwrap(), value);
    }

    #[test]
    fn prop_unwrap_or(value in any::<i32>(), error in any::<String>(), default in any::<i32>()) {
        prop_assert_eq!(Expected::<i32, String>::Success(value).unwrap_or(default), value);
        prop_assert_eq!(Expected::<i32, String>::Failure(error).unwrap_or(default), default);
    }

    #[test]
    fn prop_map_on_failure_keeps_error(error in any::<String>()) {
        let mapped = Expected::<i32, String>::Failure(error.clone()).map(|x| x.wrapping_add(1));
        prop_assert_eq!(mapped, Expected::Failure(error));
    }

    #[test]
    fn prop_expect_follows_presence(value in proptest::option::of(any::<i32>()), error in any::<String>()) {
        let result = expect(value, error.clone());
        match value {
            Some(present) => prop_assert_eq!(result, Expected::Success(present)),
            None => prop_assert_eq!(result, Expected::Failure(error)),
        }
    }

    #[test]
    fn prop_and_or_select_by_variant(value in expected_strategy(), other in any::<i32>()) {
        let anded = value.clone().and(Expected::<i32, String>::Success(other));
        let ored = value.clone().or(Expected::<i32, String>::Success(other));
        match value {
            Expected::Success(own) => {
                prop_assert_eq!(anded, Expected::Success(other));
                prop_assert_eq!(ored, Expected::Success(own));
            }
            Expected::Failure(error) => {
                prop_assert_eq!(anded, Expected::Failure(error));
                prop_assert_eq!(ored, Expected::Success(other));
            }
        }
    }

    #[test]
    fn prop_map2_agrees_with_and_then(first in expected_strategy(), second in expected_strategy()) {
        let by_map2 = first.clone().map2(second.clone(), i32::wrapping_add);
        let by_bind = first.and_then(|a| second.map(|b| a.wrapping_add(b)));
        prop_assert_eq!(by_map2, by_bind);
    }

    #[test]
    fn prop_to_list_matches_success_value(value in expected_strategy()) {
        prop_assert_eq!(value.clone().to_list(), value.success_value().into_iter().collect::<Vec<_>>());
    }
}
