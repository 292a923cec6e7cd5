//! Prefix matching.
//!
//! Elements are compared with `PartialEq`, i.e. by value. Nested containers
//! are compared structurally all the way down.

use crate::control::Maybe;

/// Returns `true` if `elements` starts with `prefix`.
///
/// The empty prefix matches everything.
#[inline]
pub fn is_prefix_of<A: PartialEq>(prefix: &[A], elements: &[A]) -> bool {
    elements.starts_with(prefix)
}

/// Drops `prefix` from the front of `elements`.
///
/// Returns `Just` the remaining suffix if `elements` starts with `prefix`,
/// otherwise `Nothing`. An input shorter than the prefix never matches.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
/// use funkit::list::strip_prefix;
///
/// let foobar = ["f", "o", "o", "b", "a", "r"];
/// assert_eq!(strip_prefix(&["f", "o", "o"], &foobar), Maybe::just(vec!["b", "a", "r"]));
/// assert_eq!(strip_prefix(&["f", "o", "o"], &["b", "a", "r"]), Maybe::nothing());
/// ```
pub fn strip_prefix<A>(prefix: &[A], elements: &[A]) -> Maybe<Vec<A>>
where
    A: PartialEq + Clone,
{
    elements.strip_prefix(prefix).map(<[A]>::to_vec).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["f", "o", "o"], &["f", "o", "o"], Maybe::just(vec![]))]
    #[case(&["f", "o", "o"], &["b", "a", "r", "f", "o", "o"], Maybe::nothing())]
    #[case(&["f", "o", "o"], &["b", "a", "r", "f", "o", "o", "b", "a", "z"], Maybe::nothing())]
    #[case(&["f", "o", "o"], &["f", "o"], Maybe::nothing())]
    #[case(&[], &["x"], Maybe::just(vec!["x"]))]
    fn test_strip_prefix(
        #[case] prefix: &[&str],
        #[case] elements: &[&str],
        #[case] expected: Maybe<Vec<&str>>,
    ) {
        assert_eq!(strip_prefix(prefix, elements), expected);
    }

    #[rstest]
    fn test_strip_prefix_compares_nested_values() {
        let prefix = vec![vec![1, 2], vec![3]];
        let elements = vec![vec![1, 2], vec![3], vec![4, 5]];
        assert_eq!(strip_prefix(&prefix, &elements), Maybe::just(vec![vec![4, 5]]));
        assert!(!is_prefix_of(&[vec![1]], &elements));
    }
}
