//! Argument binding (currying) combinators.
//!
//! These functions fix one or more arguments of a unary or binary function
//! and return a closure of lower arity:
//!
//! | Binder            | Input              | Output          |
//! |-------------------|--------------------|-----------------|
//! | [`curry_first`]   | `f(a, b)`, `a`     | `\|b\| f(a, b)`  |
//! | [`curry_second`]  | `f(a, b)`, `b`     | `\|a\| f(a, b)`  |
//! | [`curry_both`]    | `f(a, b)`, `a`, `b`| `\|\| f(a, b)`   |
//! | [`curry_only`]    | `f(a)`, `a`        | `\|\| f(a)`      |
//!
//! [`curry`] is a shorthand for [`curry_first`], and [`flip`] swaps the
//! arguments of a binary function.
//!
//! The `try_curry_*` variants are for functions returning `Result`. They
//! forward every `Err` unchanged. [`assert_ok`] and [`unwrap_ok`] convert a
//! fallible thunk into a value, panicking if the call fails; use them only
//! where the call is already known to succeed.
//!
//! # Examples
//!
//! ```
//! use funkit::compose::{curry_first, curry_second};
//! use funkit::list::map;
//!
//! let scale = |factor: i32, value: i32| factor * value;
//! let triple = curry_first(scale, 3);
//! assert_eq!(map(|value| triple(*value), &[1, 2, 3]), vec![3, 6, 9]);
//!
//! let power = |base: u32, exponent: u32| base.pow(exponent);
//! let square = curry_second(power, 2);
//! assert_eq!(square(7), 49);
//! ```
//!
//! # Laws
//!
//! - `curry_first(f, a)(b) == f(a, b)`
//! - `curry_second(f, b)(a) == f(a, b)`
//! - `curry_both(f, a, b)() == f(a, b)`
//! - `flip(flip(f))(a, b) == f(a, b)`

mod bind;
mod fallible;

pub use bind::{curry, curry_both, curry_first, curry_only, curry_second, flip};
pub use fallible::{
    assert_ok, try_curry_both, try_curry_first, try_curry_only, try_curry_second, unwrap_ok,
};
