//! Positional access to fixed-arity heterogeneous tuples.
//!
//! Couples, triples and quadruples are Rust's native tuples. This module
//! names them ([`Couple`], [`Triple`], [`Quadruple`]) and gives them the
//! positional accessors `e1` through `e4`:
//!
//! | Trait      | Borrowing | Consuming  | Implemented for         |
//! |------------|-----------|------------|-------------------------|
//! | [`First`]  | `e1`      | `into_e1`  | couples, triples, quads |
//! | [`Second`] | `e2`      | `into_e2`  | couples, triples, quads |
//! | [`Third`]  | `e3`      | `into_e3`  | triples, quads          |
//! | [`Fourth`] | `e4`      | `into_e4`  | quads                   |
//!
//! Arity is a static property: asking a couple for `e3` does not compile.
//!
//! # Examples
//!
//! ```rust
//! use funkit::tuple::{First, Second, Third, triple};
//!
//! let record = triple(1, "two", 3.0);
//! assert_eq!(*record.e1(), 1);
//! assert_eq!(*record.e2(), "two");
//! assert_eq!(record.into_e3(), 3.0);
//! ```

mod accessor;

pub use accessor::{First, Fourth, Second, Third};

/// A two-element tuple.
pub type Couple<A, B> = (A, B);

/// A three-element tuple.
pub type Triple<A, B, C> = (A, B, C);

/// A four-element tuple.
pub type Quadruple<A, B, C, D> = (A, B, C, D);

/// Builds a [`Couple`].
#[inline]
pub const fn couple<A, B>(first: A, second: B) -> Couple<A, B> {
    (first, second)
}

/// Builds a [`Triple`].
#[inline]
pub const fn triple<A, B, C>(first: A, second: B, third: C) -> Triple<A, B, C> {
    (first, second, third)
}

/// Builds a [`Quadruple`].
#[inline]
pub const fn quadruple<A, B, C, D>(
    first: A,
    second: B,
    third: C,
    fourth: D,
) -> Quadruple<A, B, C, D> {
    (first, second, third, fourth)
}

/// Exchanges the two elements of a couple.
///
/// # Examples
///
/// ```rust
/// use funkit::tuple::{couple, swap};
///
/// assert_eq!(swap(couple(1, "one")), ("one", 1));
/// ```
#[inline]
pub fn swap<A, B>((first, second): Couple<A, B>) -> Couple<B, A> {
    (second, first)
}
