//! Maybe type - a value that may be absent.
//!
//! This module provides the `Maybe<T>` type, which is either `Just(T)` or
//! `Nothing`. It is the return type of every operation in this crate whose
//! answer may legitimately be "no answer", such as [`crate::list::uncons`]
//! and [`crate::list::strip_prefix`].
//!
//! Absence is an ordinary value: callers branch on [`Maybe::is_just`] (or use
//! [`Maybe::maybe`] / [`Maybe::from_maybe`]) before extracting. Calling
//! [`Maybe::get`] on `Nothing` is a programmer error and panics.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::Maybe;
//!
//! let present = Maybe::just(42);
//! let absent: Maybe<i32> = Maybe::nothing();
//!
//! assert!(present.is_just());
//! assert!(!absent.is_just());
//!
//! // Supply a default instead of extracting blindly.
//! assert_eq!(present.maybe(0, |value| value * 2), 84);
//! assert_eq!(absent.maybe(0, |value| value * 2), 0);
//! ```

use crate::precondition::violated;

/// A value of type `T`, or nothing.
///
/// Exactly one variant is active. `Just` always carries a materialized value.
/// Equality is structural: two `Just` values are equal iff their payloads are
/// equal, and every `Nothing` of the same `T` is equal to every other.
///
/// Ordering follows [`Option`]: `Nothing` sorts before any `Just`.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
///
/// assert_eq!(Maybe::just("a"), Maybe::Just("a"));
/// assert_eq!(Maybe::<i32>::nothing(), Maybe::Nothing);
/// assert!(Maybe::Nothing < Maybe::Just(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    Nothing,
    /// A present value.
    Just(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value. Never fails.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// The empty value. Never fails.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// assert!(Maybe::just(1).is_just());
    /// assert!(!Maybe::<i32>::nothing().is_just());
    /// ```
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the payload, consuming the `Maybe`.
    ///
    /// Callers must establish presence first, with [`Maybe::is_just`], or use
    /// [`Maybe::maybe`] / [`Maybe::from_maybe`] which supply a default.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nothing`. This is a precondition violation, not a
    /// recoverable condition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(42).get(), 42);
    /// ```
    ///
    /// ```rust,should_panic
    /// use funkit::control::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// absent.get();
    /// ```
    #[inline]
    #[track_caller]
    pub fn get(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => violated("Maybe::get", "called on a `Nothing` value"),
        }
    }

    /// Returns a reference to the payload.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nothing`, like [`Maybe::get`].
    #[inline]
    #[track_caller]
    pub fn get_ref(&self) -> &T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => violated("Maybe::get_ref", "called on a `Nothing` value"),
        }
    }

    /// Converts `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Eliminators
    // =========================================================================

    /// Applies `function` to the payload, or returns `default` when absent.
    ///
    /// This is the total way to consume a `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// let length = |text: &str| text.len();
    /// assert_eq!(Maybe::just("four").maybe(0, length), 4);
    /// assert_eq!(Maybe::nothing().maybe(0, length), 0);
    /// ```
    #[inline]
    pub fn maybe<B, F>(self, default: B, function: F) -> B
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => default,
        }
    }

    /// Returns the payload, or `default` when absent.
    #[inline]
    pub fn from_maybe(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Applies `function` to the payload, keeping `Nothing` as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(2).map(|value| value + 1), Maybe::just(3));
    /// assert_eq!(Maybe::<i32>::nothing().map(|value| value + 1), Maybe::nothing());
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy, Eq, Ord, std::hash::Hash);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(Maybe<String>: Copy);

// =============================================================================
// Free functions over collections of Maybe
// =============================================================================

/// Collects the payloads of every `Just`, dropping the `Nothing`s.
///
/// # Examples
///
/// ```rust
/// use funkit::control::{Maybe, cat_maybes};
///
/// let values = vec![Maybe::just(1), Maybe::nothing(), Maybe::just(3)];
/// assert_eq!(cat_maybes(values), vec![1, 3]);
/// ```
pub fn cat_maybes<T, I>(maybes: I) -> Vec<T>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    maybes.into_iter().flatten().collect()
}

/// Applies `function` to every element and keeps the `Just` results in order.
///
/// # Examples
///
/// ```rust
/// use funkit::control::{Maybe, map_maybe};
///
/// let halve_even = |value: &i32| {
///     if value % 2 == 0 { Maybe::just(value / 2) } else { Maybe::nothing() }
/// };
/// assert_eq!(map_maybe(halve_even, &[1, 2, 3, 4]), vec![1, 2]);
/// ```
pub fn map_maybe<A, B, F>(mut function: F, elements: &[A]) -> Vec<B>
where
    F: FnMut(&A) -> Maybe<B>,
{
    elements
        .iter()
        .filter_map(|element| function(element).into_option())
        .collect()
}

/// Returns an empty vector for `Nothing`, a one-element vector for `Just`.
pub fn maybe_to_list<T>(maybe: Maybe<T>) -> Vec<T> {
    maybe.into_iter().collect()
}

/// Returns the first element of `elements`, or `Nothing` when empty.
pub fn list_to_maybe<A: Clone>(elements: &[A]) -> Maybe<A> {
    elements.first().cloned().into()
}
