//! # funkit
//!
//! Haskell-style building blocks for Rust.
//!
//! ## Overview
//!
//! This library provides four small, composable pieces that typed functional
//! languages take for granted:
//!
//! - **Maybe**: An optional value (`Just` / `Nothing`) with an explicit
//!   partial accessor and total eliminators
//! - **Tuples**: Positional accessors `e1`..`e4` on native 2-, 3- and 4-tuples
//! - **Lists**: Structural algorithms over slices (`uncons`, `transpose`,
//!   `permutations`, `strip_prefix`, ...)
//! - **Binding**: Currying combinators that fix arguments of unary and binary
//!   functions, with `Result`-forwarding variants
//!
//! Everything is a pure function over values. Inputs are never mutated.
//!
//! ## Failure model
//!
//! There are two kinds of failure and they never mix:
//!
//! - A broken precondition (`list::head` of an empty slice, `Maybe::get` on
//!   `Nothing`) is a programmer error and panics.
//! - A missing answer (`list::uncons` of an empty slice, `list::strip_prefix`
//!   without a match) is an ordinary [`control::Maybe`] value.
//!
//! ## Feature Flags
//!
//! - `control`: The `Maybe` type
//! - `tuple`: Tuple accessors
//! - `list`: List algorithms (enables `control` and `tuple`)
//! - `compose`: Binding combinators
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`
//! - `tracing`: Emit a `tracing` error event before every precondition panic
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use funkit::prelude::*;
//!
//! let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
//! let columns = transpose(&rows);
//! assert_eq!(columns, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
//!
//! let first_column = uncons(&columns).map(|pair| pair.into_e1());
//! assert_eq!(first_column, Maybe::just(vec![1, 4]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled module's public items.
///
/// # Usage
///
/// ```rust
/// use funkit::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "tuple")]
    pub use crate::tuple::*;

    #[cfg(feature = "list")]
    pub use crate::list::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

mod precondition;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "tuple")]
pub mod tuple;

#[cfg(feature = "list")]
pub mod list;

#[cfg(feature = "compose")]
pub mod compose;
