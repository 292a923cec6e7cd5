//! Control structures for representing optional results.
//!
//! This module provides:
//!
//! - [`Maybe`]: A value that may be absent (`Just(T)` or `Nothing`)
//! - [`cat_maybes`], [`map_maybe`], [`maybe_to_list`], [`list_to_maybe`]:
//!   helpers for moving between `Maybe` values and sequences
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::{Maybe, cat_maybes};
//!
//! let parsed: Vec<Maybe<i32>> = ["1", "x", "3"]
//!     .iter()
//!     .map(|text| Maybe::from(text.parse::<i32>().ok()))
//!     .collect();
//!
//! assert_eq!(cat_maybes(parsed), vec![1, 3]);
//! ```

mod maybe;

pub use maybe::{Maybe, cat_maybes, list_to_maybe, map_maybe, maybe_to_list};
