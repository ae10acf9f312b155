//! Pull-based access to single-pass sequences.

use std::str::Chars;

/// Outcome of pulling once from a [`Sequence`].
///
/// `Value` carries the produced element and means more may follow;
/// `Exhausted` means the sequence has nothing left. An exhausted sequence
/// need not be resumable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pull<T> {
    /// The sequence produced a value.
    Value(T),
    /// The sequence is exhausted.
    Exhausted,
}

impl<T> Pull<T> {
    /// Returns `true` if this pull produced a value.
    #[inline]
    pub const fn has_more(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Converts into an [`Option`], dropping the exhaustion marker.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Exhausted => None,
        }
    }
}

impl<T> From<Option<T>> for Pull<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Exhausted, Self::Value)
    }
}

/// A single-pass, pull-based producer of values, possibly infinite.
///
/// Every [`Iterator`] is a `Sequence`. The trait adds the protocol's own
/// vocabulary: [`pull`](Sequence::pull) advances the cursor by exactly one
/// element, and [`as_sequence`](Sequence::as_sequence) returns the sequence
/// itself, so a consumer can treat raw sources and derived lazy views
/// uniformly.
///
/// # Examples
///
/// ```rust
/// use seqline::sequence::{Pull, Sequence};
///
/// let mut letters = "ab".chars();
/// assert_eq!(letters.pull(), Pull::Value('a'));
/// assert!(letters.as_sequence().pull().has_more());
/// assert!(!letters.pull().has_more());
/// ```
pub trait Sequence: Iterator {
    /// Pulls the next value.
    #[inline]
    fn pull(&mut self) -> Pull<Self::Item> {
        self.next().into()
    }

    /// Returns this sequence as its own sequence view.
    #[inline]
    fn as_sequence(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }
}

impl<I: Iterator + ?Sized> Sequence for I {}

/// Conversion into a [`Sequence`].
///
/// Implemented for everything that implements [`IntoIterator`]: collections
/// produce a materialized sequence, and a sequence converts into itself.
///
/// # Examples
///
/// ```rust
/// use seqline::sequence::{IntoSequence, Sequence};
///
/// let mut generated = (0..3).map(|value| value * 10);
/// generated.pull();
///
/// // A sequence handed back to `into_sequence` is the same cursor.
/// let rest: Vec<i32> = generated.into_sequence().collect();
/// assert_eq!(rest, vec![10, 20]);
/// ```
pub trait IntoSequence {
    /// The type of the values produced.
    type Item;
    /// The sequence this value turns into.
    type IntoSeq: Sequence<Item = Self::Item>;

    /// Turns this value into a sequence.
    fn into_sequence(self) -> Self::IntoSeq;
}

impl<T: IntoIterator> IntoSequence for T {
    type Item = T::Item;
    type IntoSeq = T::IntoIter;

    #[inline]
    fn into_sequence(self) -> Self::IntoSeq {
        self.into_iter()
    }
}

/// Capacity to reserve before draining `sequence`.
///
/// Only an exact size hint is trusted; unbounded sources such as
/// `lazy::iterate` report a lower bound of `usize::MAX`.
#[cfg(feature = "eager")]
pub(crate) fn capacity_hint<S: Iterator>(sequence: &S) -> usize {
    match sequence.size_hint() {
        (lower, Some(upper)) if lower == upper => lower,
        _ => 0,
    }
}

/// Treats text as a sequence of characters.
///
/// # Examples
///
/// ```rust
/// use seqline::sequence::text;
///
/// let characters: Vec<char> = text("héllo").collect();
/// assert_eq!(characters, vec!['h', 'é', 'l', 'l', 'o']);
/// ```
#[inline]
pub fn text(value: &str) -> Chars<'_> {
    value.chars()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_from_option() {
        assert_eq!(Pull::from(Some(3)), Pull::Value(3));
        assert_eq!(Pull::<i32>::from(None), Pull::Exhausted);
    }

    #[test]
    fn test_pull_exhausted_stays_exhausted() {
        let mut empty = std::iter::empty::<i32>();
        assert_eq!(empty.pull(), Pull::Exhausted);
        assert_eq!(empty.pull(), Pull::Exhausted);
    }

    #[test]
    fn test_into_option() {
        assert_eq!(Pull::Value("a").into_option(), Some("a"));
        assert_eq!(Pull::<&str>::Exhausted.into_option(), None);
    }

    #[cfg(feature = "eager")]
    #[test]
    fn test_capacity_hint_ignores_unbounded_sources() {
        assert_eq!(capacity_hint(&[1, 2, 3].into_iter()), 3);
        assert_eq!(capacity_hint(&(0_u64..)), 0);
        assert_eq!(capacity_hint(&std::iter::repeat(1).take(4).filter(|_| true)), 0);
    }

    #[test]
    fn test_text_is_empty_for_empty_string() {
        assert_eq!(text("").count(), 0);
    }
}
