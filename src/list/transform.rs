//! List transformations.
//!
//! Every function here allocates its result and leaves its input untouched.

/// Applies `function` to every element, preserving length and order.
///
/// # Examples
///
/// ```rust
/// use funkit::list::map;
///
/// assert_eq!(map(|value| value * 2, &[1, 2, 3]), vec![2, 4, 6]);
/// ```
pub fn map<A, B, F>(function: F, elements: &[A]) -> Vec<B>
where
    F: FnMut(&A) -> B,
{
    elements.iter().map(function).collect()
}

/// Applies a fallible `function` to every element.
///
/// Stops at the first `Err` and returns it; later elements are not visited.
///
/// # Examples
///
/// ```rust
/// use funkit::list::try_map;
///
/// let parse = |text: &&str| text.parse::<i32>();
///
/// assert_eq!(try_map(parse, &["1", "2"]), Ok(vec![1, 2]));
/// assert!(try_map(parse, &["1", "x", "3"]).is_err());
/// ```
pub fn try_map<A, B, E, F>(function: F, elements: &[A]) -> Result<Vec<B>, E>
where
    F: FnMut(&A) -> Result<B, E>,
{
    elements.iter().map(function).collect()
}

/// Returns the elements in reverse order.
///
/// # Examples
///
/// ```rust
/// use funkit::list::reverse;
///
/// assert_eq!(reverse(&[2, 5, 7]), vec![7, 5, 2]);
/// ```
pub fn reverse<A: Clone>(elements: &[A]) -> Vec<A> {
    elements.iter().rev().cloned().collect()
}

/// Inserts `separator` between every pair of adjacent elements.
///
/// An empty input gives an empty result; otherwise the result has
/// `2 * len - 1` elements.
///
/// # Examples
///
/// ```rust
/// use funkit::list::intersperse;
///
/// assert_eq!(
///     intersperse("-", &["h", "e", "y"]),
///     vec!["h", "-", "e", "-", "y"]
/// );
/// ```
pub fn intersperse<A: Clone>(separator: A, elements: &[A]) -> Vec<A> {
    let mut result = Vec::with_capacity((elements.len() * 2).saturating_sub(1));
    for (index, element) in elements.iter().enumerate() {
        if index > 0 {
            result.push(separator.clone());
        }
        result.push(element.clone());
    }
    result
}

/// Inserts `separator` between the rows and flattens the result.
///
/// # Examples
///
/// ```rust
/// use funkit::list::intercalate;
///
/// let words = vec![vec!['a', 'b'], vec!['c'], vec!['d', 'e']];
/// assert_eq!(
///     intercalate(&[',', ' '], &words),
///     vec!['a', 'b', ',', ' ', 'c', ',', ' ', 'd', 'e']
/// );
/// ```
pub fn intercalate<A: Clone>(separator: &[A], rows: &[Vec<A>]) -> Vec<A> {
    let mut result = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        if index > 0 {
            result.extend_from_slice(separator);
        }
        result.extend_from_slice(row);
    }
    result
}

/// Regroups rows into columns.
///
/// Output row `i` holds, in input order, the `i`-th element of every input
/// row long enough to have one. Ragged inputs produce shrinking columns; the
/// result is never padded. The number of output rows equals the length of the
/// longest input row.
///
/// # Examples
///
/// ```rust
/// use funkit::list::transpose;
///
/// assert_eq!(
///     transpose(&[vec![1, 2, 3], vec![4, 5, 6]]),
///     vec![vec![1, 4], vec![2, 5], vec![3, 6]]
/// );
/// assert_eq!(
///     transpose(&[vec![10, 11], vec![20], vec![], vec![30, 31, 32]]),
///     vec![vec![10, 20, 30], vec![11, 31], vec![32]]
/// );
/// ```
pub fn transpose<A: Clone>(rows: &[Vec<A>]) -> Vec<Vec<A>> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    (0..width)
        .map(|column| {
            rows.iter()
                .filter_map(|row| row.get(column).cloned())
                .collect()
        })
        .collect()
}

/// Returns all `2^n` subsequences, shortest prefixes of the input first.
///
/// # Examples
///
/// ```rust
/// use funkit::list::subsequences;
///
/// assert_eq!(
///     subsequences(&['a', 'b', 'c']),
///     vec![
///         vec![],
///         vec!['a'],
///         vec!['b'],
///         vec!['a', 'b'],
///         vec!['c'],
///         vec!['a', 'c'],
///         vec!['b', 'c'],
///         vec!['a', 'b', 'c'],
///     ]
/// );
/// ```
pub fn subsequences<A: Clone>(elements: &[A]) -> Vec<Vec<A>> {
    let mut result = vec![Vec::new()];
    for element in elements {
        let extended: Vec<Vec<A>> = result
            .iter()
            .map(|subsequence| {
                let mut longer = subsequence.clone();
                longer.push(element.clone());
                longer
            })
            .collect();
        result.extend(extended);
    }
    result
}

/// Returns all `n!` orderings of the input.
///
/// The order is the one produced by the iterative form of Heap's algorithm:
/// each permutation differs from the previous one by a single swap. It is
/// deterministic but not lexicographic. An empty input has exactly one
/// permutation, the empty one.
///
/// Runs in `O(n * n!)`; intended for small inputs.
///
/// # Examples
///
/// ```rust
/// use funkit::list::permutations;
///
/// assert_eq!(
///     permutations(&["a", "b", "c"]),
///     vec![
///         vec!["a", "b", "c"],
///         vec!["b", "a", "c"],
///         vec!["c", "a", "b"],
///         vec!["a", "c", "b"],
///         vec!["b", "c", "a"],
///         vec!["c", "b", "a"],
///     ]
/// );
/// ```
pub fn permutations<A: Clone>(elements: &[A]) -> Vec<Vec<A>> {
    let mut working = elements.to_vec();
    // counters[k] counts the swaps already done at level k
    let mut counters = vec![0_usize; working.len()];
    let mut result = vec![working.clone()];

    let mut level = 1;
    while level < working.len() {
        if counters[level] < level {
            if level % 2 == 0 {
                working.swap(0, level);
            } else {
                working.swap(counters[level], level);
            }
            result.push(working.clone());
            counters[level] += 1;
            level = 1;
        } else {
            counters[level] = 0;
            level += 1;
        }
    }

    result
}
