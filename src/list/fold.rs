//! Flattening folds.

/// Flattens rows into one vector, keeping row order and order within rows.
///
/// # Examples
///
/// ```rust
/// use funkit::list::concat;
///
/// assert_eq!(
///     concat(&[vec![1, 2, 3], vec![4, 5], vec![6], vec![]]),
///     vec![1, 2, 3, 4, 5, 6]
/// );
/// ```
pub fn concat<A: Clone>(rows: &[Vec<A>]) -> Vec<A> {
    let length = rows.iter().map(Vec::len).sum();
    let mut result = Vec::with_capacity(length);
    for row in rows {
        result.extend_from_slice(row);
    }
    result
}

/// Maps every element to a vector and flattens the results.
///
/// # Examples
///
/// ```rust
/// use funkit::list::concat_map;
///
/// assert_eq!(
///     concat_map(|value: &i32| vec![*value; *value as usize], &[1, 2, 3]),
///     vec![1, 2, 2, 3, 3, 3]
/// );
/// ```
pub fn concat_map<A, B, F>(function: F, elements: &[A]) -> Vec<B>
where
    F: FnMut(&A) -> Vec<B>,
{
    elements.iter().flat_map(function).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_concat_of_nothing() {
        let rows: Vec<Vec<char>> = Vec::new();
        assert!(concat(&rows).is_empty());
    }

    #[rstest]
    fn test_concat_map_can_drop_elements() {
        let evens = concat_map(
            |value: &u32| if value % 2 == 0 { vec![*value] } else { vec![] },
            &[1, 2, 3, 4],
        );
        assert_eq!(evens, vec![2, 4]);
    }
}
