//! Structural algorithms over ordered sequences.
//!
//! Every function takes its input as a slice and returns freshly allocated
//! output; inputs are never modified. Elements copied into the output must be
//! [`Clone`].
//!
//! # Overview
//!
//! | Group            | Functions                                                        |
//! |------------------|------------------------------------------------------------------|
//! | Basic            | [`append`], [`head`], [`last`], [`init`], [`tail`], [`uncons`], [`singleton`] |
//! | Transformations  | [`map`], [`try_map`], [`reverse`], [`intersperse`], [`intercalate`], [`transpose`], [`subsequences`], [`permutations`] |
//! | Folds            | [`concat`], [`concat_map`]                                       |
//! | Sublists         | [`strip_prefix`], [`is_prefix_of`]                               |
//!
//! # Partial functions
//!
//! [`head`], [`last`], [`init`] and [`tail`] require a non-empty input and
//! panic with `"list::<name>: empty list argument"` otherwise. They are not
//! meant to be used speculatively: use [`uncons`], which returns a
//! [`Maybe`](crate::control::Maybe), when the input may be empty.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::Maybe;
//! use funkit::list::{append, strip_prefix, uncons};
//!
//! let path = append(&["usr", "local"], &["bin"]);
//! assert_eq!(strip_prefix(&["usr"], &path), Maybe::just(vec!["local", "bin"]));
//!
//! match uncons(&path) {
//!     Maybe::Just((first, rest)) => {
//!         assert_eq!(first, "usr");
//!         assert_eq!(rest.len(), 2);
//!     }
//!     Maybe::Nothing => unreachable!(),
//! }
//! ```

mod basic;
mod fold;
mod sublist;
mod transform;

pub use basic::{append, head, init, last, singleton, tail, uncons};
pub use fold::{concat, concat_map};
pub use sublist::{is_prefix_of, strip_prefix};
pub use transform::{
    intercalate, intersperse, map, permutations, reverse, subsequences, transpose, try_map,
};
