//! Unit tests for the binding combinators.
//!
//! Tests for fixing arguments of unary and binary functions, the
//! `Result`-forwarding variants, and the assert-success adapters.

#![cfg(feature = "compose")]

// =============================================================================
// Infallible binders
// =============================================================================

mod infallible_binders {
    use funkit::compose::{curry, curry_both, curry_first, curry_only, curry_second, flip};
    use rstest::rstest;

    fn show(text: &str, number: i32) -> String {
        format!("{text}{number}")
    }

    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    #[rstest]
    fn test_curry_binds_first_argument() {
        let greet = curry(show, "hi");
        assert_eq!(greet(5), "hi5");
    }

    #[rstest]
    fn test_curry_first_binds_first_argument() {
        let greet = curry_first(show, "hi");
        assert_eq!(greet(5), "hi5");
        assert_eq!(greet(6), "hi6");
    }

    #[rstest]
    fn test_curry_second_binds_second_argument() {
        let five = curry_second(show, 5);
        assert_eq!(five("hi"), "hi5");
    }

    #[rstest]
    fn test_curry_both_produces_thunk() {
        let add_three_and_four = curry_both(add, 3, 4);
        assert_eq!(add_three_and_four(), 7);
        assert_eq!(add_three_and_four(), 7);
    }

    #[rstest]
    fn test_curry_only_produces_thunk() {
        let double = |value: i32| value * 2;
        let double_five = curry_only(double, 5);
        assert_eq!(double_five(), 10);
    }

    #[rstest]
    fn test_bound_closures_capture_environment() {
        let offset = 100;
        let shifted = curry_second(move |value: i32, step: i32| value + step + offset, 1);
        assert_eq!(shifted(1), 102);
    }

    #[rstest]
    fn test_double_flip_is_identity() {
        let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
        let restored = flip(flip(subtract));
        assert_eq!(restored(10, 3), subtract(10, 3));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(-4, 9)]
    #[case(17, 25)]
    fn test_every_binder_agrees_with_direct_call(#[case] first: i32, #[case] second: i32) {
        let expected = add(first, second);
        assert_eq!(curry_first(add, first)(second), expected);
        assert_eq!(curry_second(add, second)(first), expected);
        assert_eq!(curry_both(add, first, second)(), expected);
        assert_eq!(curry_only(|pair: (i32, i32)| add(pair.0, pair.1), (first, second))(), expected);
    }
}

// =============================================================================
// Fallible binders
// =============================================================================

mod fallible_binders {
    use funkit::compose::{
        try_curry_both, try_curry_first, try_curry_only, try_curry_second, unwrap_ok,
    };
    use rstest::rstest;

    #[derive(Debug, PartialEq, Eq)]
    struct DivisionByZero;

    fn divide(numerator: i32, denominator: i32) -> Result<i32, DivisionByZero> {
        if denominator == 0 {
            Err(DivisionByZero)
        } else {
            Ok(numerator / denominator)
        }
    }

    #[rstest]
    fn test_try_curry_second_success() {
        let halve = try_curry_second(divide, 2);
        assert_eq!(halve(10), Ok(5));
    }

    #[rstest]
    fn test_try_curry_second_forwards_error() {
        let broken = try_curry_second(divide, 0);
        assert_eq!(broken(10), Err(DivisionByZero));
    }

    #[rstest]
    fn test_try_curry_first_forwards_error() {
        let hundred_over = try_curry_first(divide, 100);
        assert_eq!(hundred_over(4), Ok(25));
        assert_eq!(hundred_over(0), Err(DivisionByZero));
    }

    #[rstest]
    fn test_try_curry_both_defers_the_call() {
        let thunk = try_curry_both(divide, 1, 0);
        assert_eq!(thunk(), Err(DivisionByZero));
        assert_eq!(try_curry_both(divide, 9, 3)(), Ok(3));
    }

    #[rstest]
    fn test_try_curry_only_forwards_error() {
        let reciprocal = |value: i32| divide(1, value);
        assert_eq!(try_curry_only(reciprocal, 0)(), Err(DivisionByZero));
        assert_eq!(try_curry_only(reciprocal, 1)(), Ok(1));
    }

    #[rstest]
    fn test_unwrap_ok_returns_value() {
        let show = |text: &str, number: i32| -> Result<String, String> {
            if number == 6 {
                Err(String::from("baad"))
            } else {
                Ok(format!("{text}{number}"))
            }
        };
        assert_eq!(unwrap_ok(try_curry_both(show, "hi", 5)), "hi5");
    }

    #[rstest]
    #[should_panic(expected = "compose::unwrap_ok: fallible call failed: \"baad\"")]
    fn test_unwrap_ok_panics_on_error() {
        let fail = || -> Result<(), String> { Err(String::from("baad")) };
        unwrap_ok(fail);
    }
}

// =============================================================================
// Assert-success adapter
// =============================================================================

mod assert_success {
    use funkit::compose::{assert_ok, try_curry_both};
    use rstest::rstest;

    fn checked_multiply(first: u8, second: u8) -> Result<u8, &'static str> {
        first.checked_mul(second).ok_or("overflow")
    }

    #[rstest]
    fn test_assert_ok_returns_value() {
        let product = assert_ok(try_curry_both(checked_multiply, 12, 12));
        assert_eq!(product(), 144);
    }

    #[rstest]
    #[should_panic(expected = "compose::assert_ok: fallible call failed: \"overflow\"")]
    fn test_assert_ok_panics_on_error() {
        let product = assert_ok(try_curry_both(checked_multiply, 16, 16));
        let _ = product();
    }
}
