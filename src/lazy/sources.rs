//! Generated sequences: values computed on pull rather than stored.

use std::fmt;
use std::iter::FusedIterator;

use crate::sequence::{IntoSequence, Sequence};

// =============================================================================
// Range
// =============================================================================

/// The integers `0..limit`, produced one per pull.
///
/// Created by [`range`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "lazy sequences do nothing unless pulled"]
pub struct Range {
    next: usize,
    limit: usize,
}

impl Iterator for Range {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.next < self.limit {
            let value = self.next;
            self.next += 1;
            Some(value)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.limit - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Range {}

impl FusedIterator for Range {}

/// Lazily produces `0, 1, ..., limit - 1`.
///
/// # Examples
///
/// ```rust
/// use seqline::lazy;
///
/// assert_eq!(lazy::range(4).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
/// assert_eq!(lazy::range(0).next(), None);
/// ```
pub const fn range(limit: usize) -> Range {
    Range { next: 0, limit }
}

// =============================================================================
// Entries
// =============================================================================

/// Key/value pairs of a keyed collection, produced one per pull.
///
/// Created by [`entries`].
#[derive(Debug, Clone)]
#[must_use = "lazy sequences do nothing unless pulled"]
pub struct Entries<I> {
    pairs: I,
}

impl<K, V, I> Iterator for Entries<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<(K, V)> {
        self.pairs.pull().into_option()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

impl<K, V, I> FusedIterator for Entries<I> where I: FusedIterator<Item = (K, V)> {}

/// Lazily produces the `(key, value)` pairs of `object`.
///
/// Accepts any keyed collection: `HashMap`, `BTreeMap`, references to them,
/// or any sequence of pairs. Pairs come out in the collection's own order.
///
/// # Examples
///
/// ```rust
/// use seqline::lazy;
/// use std::collections::BTreeMap;
///
/// let object = BTreeMap::from([("a", 1), ("b", 2)]);
/// let pairs: Vec<_> = lazy::entries(&object).collect();
/// assert_eq!(pairs, vec![(&"a", &1), (&"b", &2)]);
/// ```
pub fn entries<K, V, M>(object: M) -> Entries<M::IntoSeq>
where
    M: IntoSequence<Item = (K, V)>,
{
    Entries {
        pairs: object.into_sequence(),
    }
}

// =============================================================================
// Generate
// =============================================================================

/// A sequence computed by a closure, one call per pull.
///
/// Created by [`generate`].
#[derive(Clone)]
#[must_use = "lazy sequences do nothing unless pulled"]
pub struct Generate<F> {
    producer: Option<F>,
}

impl<T, F> Iterator for Generate<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let value = (self.producer.as_mut()?)();
        if value.is_none() {
            self.producer = None;
        }
        value
    }
}

impl<T, F> FusedIterator for Generate<F> where F: FnMut() -> Option<T> {}

impl<F> fmt::Debug for Generate<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Generate")
            .field("exhausted", &self.producer.is_none())
            .finish_non_exhaustive()
    }
}

/// Builds a sequence from a state-carrying closure.
///
/// The closure is called once per pull; the first `None` ends the sequence
/// and the closure is never called again.
///
/// # Examples
///
/// ```rust
/// use seqline::lazy;
///
/// let mut countdown = 3;
/// let values: Vec<i32> = lazy::generate(|| {
///     if countdown == 0 {
///         None
///     } else {
///         countdown -= 1;
///         Some(countdown + 1)
///     }
/// })
/// .collect();
/// assert_eq!(values, vec![3, 2, 1]);
/// ```
pub const fn generate<T, F>(producer: F) -> Generate<F>
where
    F: FnMut() -> Option<T>,
{
    Generate {
        producer: Some(producer),
    }
}

// =============================================================================
// Iterate
// =============================================================================

/// The infinite sequence `seed, step(seed), step(step(seed)), ...`.
///
/// Created by [`iterate`].
#[derive(Clone)]
#[must_use = "lazy sequences do nothing unless pulled"]
pub struct Iterate<T, F> {
    state: IterateState<T>,
    step: F,
}

#[derive(Clone)]
enum IterateState<T> {
    Seed(T),
    Last(T),
    Spent,
}

impl<T, F> Iterator for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let value = match std::mem::replace(&mut self.state, IterateState::Spent) {
            IterateState::Seed(seed) => seed,
            IterateState::Last(last) => (self.step)(&last),
            IterateState::Spent => return None,
        };
        self.state = IterateState::Last(value.clone());
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T, F> FusedIterator for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
}

impl<T: fmt::Debug, F> fmt::Debug for Iterate<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("Iterate");
        match &self.state {
            IterateState::Seed(seed) => debug.field("seed", seed),
            IterateState::Last(last) => debug.field("last", last),
            IterateState::Spent => debug.field("spent", &true),
        };
        debug.finish_non_exhaustive()
    }
}

/// Builds the infinite sequence `seed, step(seed), step(step(seed)), ...`.
///
/// `step` runs only when a pull needs its result, never ahead of demand.
/// The sequence never ends, so it must be bounded by a terminal combinator
/// such as `terminate::max` or `terminate::find`.
///
/// # Examples
///
/// ```rust
/// use seqline::lazy;
///
/// let mut powers = lazy::iterate(1_u64, |value: &u64| value * 2);
/// assert_eq!(powers.next(), Some(1));
/// assert_eq!(powers.next(), Some(2));
/// assert_eq!(powers.next(), Some(4));
/// ```
pub const fn iterate<T, F>(seed: T, step: F) -> Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    Iterate {
        state: IterateState::Seed(seed),
        step,
    }
}
