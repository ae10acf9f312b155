//! Short-circuiting search.

use super::take::{max, try_max};
use crate::compose::curry;
use crate::lazy;
use crate::sequence::IntoSequence;

/// Returns the first value satisfying `predicate`, or `None`.
///
/// Defined as a lazy filter bounded to one element: pulling stops as soon
/// as a match is found, so at most `index_of_first_match + 1` values are
/// pulled.
///
/// # Examples
///
/// ```rust
/// use seqline::{lazy, terminate};
///
/// let first_square_above_50 = terminate::find(
///     |value: &u32| *value > 50,
///     lazy::map(|value: u32| value * value, 1..),
/// );
/// assert_eq!(first_square_above_50, Some(64));
/// assert_eq!(terminate::find(|value: &i32| *value > 9, vec![1, 2]), None);
/// ```
pub fn find<P, I>(predicate: P, sequence: I) -> Option<I::Item>
where
    I: IntoSequence,
    P: FnMut(&I::Item) -> bool,
{
    max(1, lazy::filter(predicate, sequence)).pop()
}

/// Curried [`find`]: binds the predicate, awaits the sequence.
pub fn find_with<P, I>(predicate: P) -> impl FnOnce(I) -> Option<I::Item>
where
    I: IntoSequence,
    P: FnMut(&I::Item) -> bool,
{
    curry(find::<P, I>).defer(predicate).into_stage::<I>()
}

/// Fallible [`find`] over a sequence of results.
///
/// # Errors
///
/// Returns the first `Err` pulled before a match is found.
///
/// # Examples
///
/// ```rust
/// use seqline::terminate;
///
/// let results = vec![Ok(1), Ok(8), Err("late")];
/// assert_eq!(terminate::try_find(|value: &i32| *value > 5, results), Ok(Some(8)));
///
/// let results = vec![Ok(1), Err("early"), Ok(8)];
/// assert_eq!(terminate::try_find(|value: &i32| *value > 5, results), Err("early"));
/// ```
pub fn try_find<A, E, P, I>(mut predicate: P, sequence: I) -> Result<Option<A>, E>
where
    I: IntoSequence<Item = Result<A, E>>,
    P: FnMut(&A) -> bool,
{
    let matches = lazy::filter(
        |result: &Result<A, E>| match result {
            Ok(value) => predicate(value),
            Err(_) => true,
        },
        sequence,
    );
    try_max(1, matches).map(|mut found| found.pop())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_find_pull_count_bounded_by_match_index() {
        let pulls = Cell::new(0);
        let source = (0..100).inspect(|_| pulls.set(pulls.get() + 1));
        assert_eq!(find(|value: &i32| *value == 7, source), Some(7));
        assert_eq!(pulls.get(), 8);
    }

    #[test]
    fn test_find_returns_first_of_several_matches() {
        assert_eq!(find(|word: &&str| word.len() == 2, ["a", "bb", "cc"]), Some("bb"));
    }

    #[test]
    fn test_try_find_not_found() {
        let results: Vec<Result<i32, ()>> = vec![Ok(1), Ok(2)];
        assert_eq!(try_find(|value: &i32| *value > 2, results), Ok(None));
    }
}
