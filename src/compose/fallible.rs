//! Binding for functions that return `Result`.
//!
//! The `try_curry_*` binders have the same arity reduction as their
//! infallible counterparts and return the underlying `Result` untouched: an
//! `Err` from the bound function reaches the caller exactly as produced.
//!
//! [`assert_ok`] and [`unwrap_ok`] are the escape hatch for call sites that
//! have already established that a fallible call cannot fail. A failure there
//! is a broken precondition and panics.

use std::fmt;

use super::bind::{curry_both, curry_first, curry_only, curry_second};
use crate::precondition::violated;

/// Fixes the first argument of a fallible binary function.
#[inline]
pub fn try_curry_first<A, B, T, E, F>(function: F, first: A) -> impl Fn(B) -> Result<T, E>
where
    F: Fn(A, B) -> Result<T, E>,
    A: Clone,
{
    curry_first(function, first)
}

/// Fixes the second argument of a fallible binary function.
///
/// # Examples
///
/// ```
/// use funkit::compose::try_curry_second;
///
/// let checked_divide = |numerator: i32, denominator: i32| {
///     numerator.checked_div(denominator).ok_or("division by zero")
/// };
///
/// let half = try_curry_second(checked_divide, 2);
/// assert_eq!(half(10), Ok(5));
///
/// let broken = try_curry_second(checked_divide, 0);
/// assert_eq!(broken(10), Err("division by zero"));
/// ```
#[inline]
pub fn try_curry_second<A, B, T, E, F>(function: F, second: B) -> impl Fn(A) -> Result<T, E>
where
    F: Fn(A, B) -> Result<T, E>,
    B: Clone,
{
    curry_second(function, second)
}

/// Fixes both arguments of a fallible binary function, leaving a thunk.
///
/// # Examples
///
/// ```
/// use funkit::compose::{try_curry_both, unwrap_ok};
///
/// let parse_sum = |left: &str, right: &str| -> Result<i32, std::num::ParseIntError> {
///     Ok(left.parse::<i32>()? + right.parse::<i32>()?)
/// };
///
/// let thunk = try_curry_both(parse_sum, "3", "4");
/// assert_eq!(unwrap_ok(thunk), 7);
/// ```
#[inline]
pub fn try_curry_both<A, B, T, E, F>(function: F, first: A, second: B) -> impl Fn() -> Result<T, E>
where
    F: Fn(A, B) -> Result<T, E>,
    A: Clone,
    B: Clone,
{
    curry_both(function, first, second)
}

/// Fixes the only argument of a fallible unary function, leaving a thunk.
#[inline]
pub fn try_curry_only<A, T, E, F>(function: F, argument: A) -> impl Fn() -> Result<T, E>
where
    F: Fn(A) -> Result<T, E>,
    A: Clone,
{
    curry_only(function, argument)
}

/// Turns a fallible thunk into one that returns the value directly.
///
/// The returned thunk panics if the underlying call fails.
///
/// # Examples
///
/// ```
/// use funkit::compose::{assert_ok, try_curry_both};
///
/// let checked_add = |left: u8, right: u8| left.checked_add(right).ok_or("overflow");
/// let total = assert_ok(try_curry_both(checked_add, 200, 50));
/// assert_eq!(total(), 250);
/// ```
///
/// ```should_panic
/// use funkit::compose::{assert_ok, try_curry_both};
///
/// let checked_add = |left: u8, right: u8| left.checked_add(right).ok_or("overflow");
/// let total = assert_ok(try_curry_both(checked_add, 200, 100));
/// total();
/// ```
#[inline]
pub fn assert_ok<T, E, F>(thunk: F) -> impl Fn() -> T
where
    F: Fn() -> Result<T, E>,
    E: fmt::Debug,
{
    move || expect_success("compose::assert_ok", thunk())
}

/// Runs a fallible thunk and returns its value.
///
/// # Panics
///
/// Panics with the `Debug` rendering of the error if the call fails.
#[inline]
#[track_caller]
pub fn unwrap_ok<T, E, F>(thunk: F) -> T
where
    F: FnOnce() -> Result<T, E>,
    E: fmt::Debug,
{
    expect_success("compose::unwrap_ok", thunk())
}

#[track_caller]
fn expect_success<T, E: fmt::Debug>(operation: &'static str, result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => violated(operation, &format!("fallible call failed: {error:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn checked_subtract(minuend: u32, subtrahend: u32) -> Result<u32, String> {
        minuend
            .checked_sub(subtrahend)
            .ok_or_else(|| format!("{minuend} - {subtrahend} underflows"))
    }

    #[rstest]
    fn test_try_curry_first_forwards_error() {
        let from_three = try_curry_first(checked_subtract, 3);
        assert_eq!(from_three(1), Ok(2));
        assert_eq!(from_three(5), Err("3 - 5 underflows".to_string()));
    }

    #[rstest]
    fn test_try_curry_only_forwards_error() {
        let parse = |text: &str| text.parse::<u8>();
        assert_eq!(try_curry_only(parse, "12")(), Ok(12));
        assert!(try_curry_only(parse, "300")().is_err());
    }

    #[rstest]
    #[should_panic(expected = "compose::unwrap_ok: fallible call failed: \"1 - 2 underflows\"")]
    fn test_unwrap_ok_panics_with_error() {
        let _ = unwrap_ok(try_curry_both(checked_subtract, 1, 2));
    }

    #[rstest]
    #[should_panic(expected = "compose::assert_ok: fallible call failed")]
    fn test_assert_ok_panics_when_called() {
        let thunk = assert_ok(try_curry_both(checked_subtract, 0, 1));
        let _ = thunk();
    }

    #[rstest]
    fn test_assert_ok_is_lazy() {
        // Building the adapter must not run the call.
        let _thunk = assert_ok(try_curry_both(checked_subtract, 0, 1));
    }
}
