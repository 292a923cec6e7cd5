//! The single fatal path for precondition violations.
//!
//! Partial operations (`list::head` on an empty slice, `Maybe::get` on
//! `Nothing`, a failed `compose::assert_ok`) all end here. A violation is a
//! programmer error: it panics and is never turned into a value.
//!
//! With the `tracing` feature an `error` event is emitted before the panic.

/// Aborts the current operation with a precondition violation.
///
/// The panic message has the shape `"{operation}: {reason}"`.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn violated(operation: &'static str, reason: &str) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(operation, reason, "precondition violated");

    panic!("{operation}: {reason}")
}

/// Message used by every list operation that requires a non-empty input.
#[cfg_attr(not(feature = "list"), allow(dead_code))]
pub(crate) const EMPTY_LIST: &str = "empty list argument";
