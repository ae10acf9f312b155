//! Lazy `map` and `filter`.

use std::fmt;
use std::iter::FusedIterator;

use crate::compose::curry;
use crate::sequence::{IntoSequence, Pull, Sequence};

// =============================================================================
// Map
// =============================================================================

/// A sequence that applies a function to each upstream value as it is pulled.
///
/// Created by [`map`].
#[derive(Clone)]
#[must_use = "lazy sequences do nothing unless pulled"]
pub struct Map<I, F> {
    upstream: I,
    function: F,
}

impl<I, F> Map<I, F> {
    /// Consumes the adapter, returning the upstream sequence.
    pub fn into_inner(self) -> I {
        self.upstream
    }
}

impl<B, I, F> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        match self.upstream.pull() {
            Pull::Value(value) => Some((self.function)(value)),
            Pull::Exhausted => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

impl<B, I, F> FusedIterator for Map<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> B,
{
}

impl<I: fmt::Debug, F> fmt::Debug for Map<I, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

/// Lazily applies `function` to each value of `sequence`.
///
/// Each pull on the result pulls exactly one upstream value; nothing runs
/// ahead.
///
/// # Examples
///
/// ```rust
/// use seqline::lazy;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let mut squares = lazy::map(
///     |value: i32| {
///         calls.set(calls.get() + 1);
///         value * value
///     },
///     vec![1, 2, 3],
/// );
/// assert_eq!(calls.get(), 0);
/// assert_eq!(squares.next(), Some(1));
/// assert_eq!(calls.get(), 1);
/// ```
pub fn map<B, F, I>(function: F, sequence: I) -> Map<I::IntoSeq, F>
where
    I: IntoSequence,
    F: FnMut(I::Item) -> B,
{
    Map {
        upstream: sequence.into_sequence(),
        function,
    }
}

/// Curried [`map`]: binds the function, awaits the sequence.
pub fn map_with<B, F, I>(function: F) -> impl FnOnce(I) -> Map<I::IntoSeq, F>
where
    I: IntoSequence,
    F: FnMut(I::Item) -> B,
{
    curry(map::<B, F, I>).defer(function).into_stage::<I>()
}

// =============================================================================
// Filter
// =============================================================================

/// A sequence that skips upstream values rejected by a predicate.
///
/// Created by [`filter`].
#[derive(Clone)]
#[must_use = "lazy sequences do nothing unless pulled"]
pub struct Filter<I, P> {
    upstream: I,
    predicate: P,
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        while let Pull::Value(value) = self.upstream.pull() {
            if (self.predicate)(&value) {
                return Some(value);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.upstream.size_hint().1)
    }
}

impl<I, P> FusedIterator for Filter<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

impl<I: fmt::Debug, P> fmt::Debug for Filter<I, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filter")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

/// Lazily keeps the values of `sequence` for which `predicate` is `true`.
///
/// Each pull on the result pulls upstream until a value passes (and yields
/// that value) or upstream is exhausted.
///
/// # Examples
///
/// ```rust
/// use seqline::lazy;
///
/// let mut odd = lazy::filter(|value: &u32| value % 2 == 1, 1..);
/// assert_eq!(odd.next(), Some(1));
/// assert_eq!(odd.next(), Some(3));
/// ```
pub fn filter<P, I>(predicate: P, sequence: I) -> Filter<I::IntoSeq, P>
where
    I: IntoSequence,
    P: FnMut(&I::Item) -> bool,
{
    Filter {
        upstream: sequence.into_sequence(),
        predicate,
    }
}

/// Curried [`filter`]: binds the predicate, awaits the sequence.
pub fn filter_with<P, I>(predicate: P) -> impl FnOnce(I) -> Filter<I::IntoSeq, P>
where
    I: IntoSequence,
    P: FnMut(&I::Item) -> bool,
{
    curry(filter::<P, I>).defer(predicate).into_stage::<I>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_map_pulls_one_upstream_per_pull() {
        let pulls = Cell::new(0);
        let source = (0..).inspect(|_| pulls.set(pulls.get() + 1));
        let mut doubled = map(|value: u64| value * 2, source);
        assert_eq!(pulls.get(), 0);
        assert_eq!(doubled.next(), Some(0));
        assert_eq!(doubled.next(), Some(2));
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn test_filter_yields_passing_value() {
        let words = filter(|word: &&str| word.starts_with('b'), ["apple", "banana", "berry"]);
        assert_eq!(words.collect::<Vec<_>>(), vec!["banana", "berry"]);
    }

    #[test]
    fn test_filter_exhausts_when_nothing_passes() {
        let mut nothing = filter(|_: &i32| false, vec![1, 2, 3]);
        assert_eq!(nothing.next(), None);
        assert_eq!(nothing.next(), None);
    }

    #[test]
    fn test_map_size_hint_follows_upstream() {
        let mapped = map(|value: i32| value, vec![1, 2, 3]);
        assert_eq!(mapped.size_hint(), (3, Some(3)));
    }

    #[test]
    fn test_into_inner_returns_remaining_upstream() {
        let mut mapped = map(|value: i32| value + 1, vec![1, 2, 3]);
        mapped.next();
        assert_eq!(mapped.into_inner().collect::<Vec<_>>(), vec![2, 3]);
    }
}
