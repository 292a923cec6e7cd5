//! Argument binding for unary and binary functions.
//!
//! Each binder moves the fixed arguments into the returned closure and clones
//! them on every call, so the result is an [`Fn`] that can be called any
//! number of times.

/// Fixes the first argument of a binary function.
///
/// `curry_first(f, a)(b) == f(a, b)`
///
/// # Examples
///
/// ```
/// use funkit::compose::curry_first;
///
/// let greet = |greeting: &str, count: i32| format!("{greeting}{count}");
/// let hi = curry_first(greet, "hi");
/// assert_eq!(hi(5), "hi5");
/// assert_eq!(hi(6), "hi6");
/// ```
#[inline]
pub fn curry_first<A, B, C, F>(function: F, first: A) -> impl Fn(B) -> C
where
    F: Fn(A, B) -> C,
    A: Clone,
{
    move |second| function(first.clone(), second)
}

/// Same as [`curry_first`].
#[inline]
pub fn curry<A, B, C, F>(function: F, first: A) -> impl Fn(B) -> C
where
    F: Fn(A, B) -> C,
    A: Clone,
{
    curry_first(function, first)
}

/// Fixes the second argument of a binary function.
///
/// `curry_second(f, b)(a) == f(a, b)`
///
/// # Examples
///
/// ```
/// use funkit::compose::curry_second;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let half = curry_second(divide, 2.0);
/// assert!((half(10.0) - 5.0).abs() < f64::EPSILON);
/// ```
#[inline]
pub fn curry_second<A, B, C, F>(function: F, second: B) -> impl Fn(A) -> C
where
    F: Fn(A, B) -> C,
    B: Clone,
{
    move |first| function(first, second.clone())
}

/// Fixes both arguments of a binary function, leaving a thunk.
///
/// # Examples
///
/// ```
/// use funkit::compose::curry_both;
///
/// let add = |first: i32, second: i32| first + second;
/// let seven = curry_both(add, 3, 4);
/// assert_eq!(seven(), 7);
/// ```
#[inline]
pub fn curry_both<A, B, C, F>(function: F, first: A, second: B) -> impl Fn() -> C
where
    F: Fn(A, B) -> C,
    A: Clone,
    B: Clone,
{
    move || function(first.clone(), second.clone())
}

/// Fixes the only argument of a unary function, leaving a thunk.
///
/// # Examples
///
/// ```
/// use funkit::compose::curry_only;
///
/// let double = |value: i32| value * 2;
/// let ten = curry_only(double, 5);
/// assert_eq!(ten(), 10);
/// ```
#[inline]
pub fn curry_only<A, B, F>(function: F, argument: A) -> impl Fn() -> B
where
    F: Fn(A) -> B,
    A: Clone,
{
    move || function(argument.clone())
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(b, a) == f(a, b)`. Together with [`curry_first`] this binds the
/// second argument of `f`.
///
/// # Examples
///
/// ```
/// use funkit::compose::flip;
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// let subtract_from = flip(subtract);
/// assert_eq!(subtract_from(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
