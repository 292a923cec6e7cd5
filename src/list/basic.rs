//! Construction and decomposition.
//!
//! `head`, `last`, `init` and `tail` are partial: they require a non-empty
//! slice and panic otherwise. [`uncons`] is the total alternative.

use crate::control::Maybe;
use crate::precondition::{EMPTY_LIST, violated};
use crate::tuple::{Couple, couple};

/// Returns `first` followed by `second` in a new vector.
///
/// Neither operand is modified.
///
/// # Examples
///
/// ```rust
/// use funkit::list::append;
///
/// assert_eq!(append(&[1, 2], &[3, 4]), vec![1, 2, 3, 4]);
/// ```
pub fn append<A: Clone>(first: &[A], second: &[A]) -> Vec<A> {
    let mut result = Vec::with_capacity(first.len() + second.len());
    result.extend_from_slice(first);
    result.extend_from_slice(second);
    result
}

/// Returns the first element.
///
/// # Panics
///
/// Panics if `elements` is empty.
///
/// # Examples
///
/// ```rust
/// use funkit::list::head;
///
/// assert_eq!(head(&[1, 2, 3]), 1);
/// ```
#[track_caller]
pub fn head<A: Clone>(elements: &[A]) -> A {
    match elements.first() {
        Some(element) => element.clone(),
        None => violated("list::head", EMPTY_LIST),
    }
}

/// Returns the last element.
///
/// # Panics
///
/// Panics if `elements` is empty.
#[track_caller]
pub fn last<A: Clone>(elements: &[A]) -> A {
    match elements.last() {
        Some(element) => element.clone(),
        None => violated("list::last", EMPTY_LIST),
    }
}

/// Returns every element except the last, in order.
///
/// # Panics
///
/// Panics if `elements` is empty.
///
/// # Examples
///
/// ```rust
/// use funkit::list::init;
///
/// assert_eq!(init(&[1, 2, 3]), vec![1, 2]);
/// assert_eq!(init(&[1]), Vec::<i32>::new());
/// ```
#[track_caller]
pub fn init<A: Clone>(elements: &[A]) -> Vec<A> {
    match elements.split_last() {
        Some((_, rest)) => rest.to_vec(),
        None => violated("list::init", EMPTY_LIST),
    }
}

/// Returns every element after the first, in order.
///
/// # Panics
///
/// Panics if `elements` is empty.
///
/// # Examples
///
/// ```rust
/// use funkit::list::tail;
///
/// assert_eq!(tail(&[1, 2, 3]), vec![2, 3]);
/// assert_eq!(tail(&[1]), Vec::<i32>::new());
/// ```
#[track_caller]
pub fn tail<A: Clone>(elements: &[A]) -> Vec<A> {
    match elements.split_first() {
        Some((_, rest)) => rest.to_vec(),
        None => violated("list::tail", EMPTY_LIST),
    }
}

/// Decomposes a slice into its head and the remaining elements.
///
/// Returns `Nothing` for an empty slice. This never panics.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
/// use funkit::list::uncons;
///
/// assert_eq!(uncons(&[1, 2, 3]), Maybe::just((1, vec![2, 3])));
/// assert_eq!(uncons::<i32>(&[]), Maybe::nothing());
/// ```
pub fn uncons<A: Clone>(elements: &[A]) -> Maybe<Couple<A, Vec<A>>> {
    match elements.split_first() {
        Some((first, rest)) => Maybe::just(couple(first.clone(), rest.to_vec())),
        None => Maybe::nothing(),
    }
}

/// Builds a one-element vector.
#[inline]
pub fn singleton<A>(element: A) -> Vec<A> {
    vec![element]
}
