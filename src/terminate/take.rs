//! Bounded materialization: `max`, `take_all` and their fallible forms.

use tracing::trace;

use crate::compose::curry;
use crate::sequence::{IntoSequence, Pull, Sequence, capacity_hint};

/// Pulls at most `limit` values (all of them when `None`).
fn take_bounded<I>(limit: Option<usize>, sequence: I) -> Vec<I::Item>
where
    I: IntoSequence,
{
    let mut sequence = sequence.into_sequence();
    let hint = capacity_hint(&sequence);
    let mut response = Vec::with_capacity(limit.map_or(hint, |limit| limit.min(hint)));
    while limit.is_none_or(|limit| response.len() < limit) {
        match sequence.pull() {
            Pull::Value(value) => response.push(value),
            Pull::Exhausted => {
                trace!(pulled = response.len(), "sequence exhausted");
                return response;
            }
        }
    }
    trace!(pulled = response.len(), "limit reached");
    response
}

/// Collects at most `limit` values, then stops pulling.
///
/// Returns fewer than `limit` values if the sequence ends first. The
/// upstream sequence is never pulled more than `limit` times, which makes
/// this safe on infinite lazy sources.
///
/// # Examples
///
/// ```rust
/// use seqline::{lazy, terminate};
///
/// assert_eq!(terminate::max(3, lazy::iterate(10, |value: &i32| value + 1)), vec![10, 11, 12]);
/// assert_eq!(terminate::max(5, vec!['a', 'b']), vec!['a', 'b']);
/// assert!(terminate::max(0, vec![1]).is_empty());
/// ```
pub fn max<I>(limit: usize, sequence: I) -> Vec<I::Item>
where
    I: IntoSequence,
{
    take_bounded(Some(limit), sequence)
}

/// Collects every value of the sequence.
///
/// The unbounded form of [`max`], for materializing lazy sequences that are
/// known to be finite.
///
/// # Examples
///
/// ```rust
/// use seqline::{lazy, terminate};
///
/// let evens = lazy::filter(|value: &usize| value % 2 == 0, lazy::range(7));
/// assert_eq!(terminate::take_all(evens), vec![0, 2, 4, 6]);
/// ```
pub fn take_all<I>(sequence: I) -> Vec<I::Item>
where
    I: IntoSequence,
{
    take_bounded(None, sequence)
}

/// Curried [`max`]: binds the limit, awaits the sequence.
pub fn max_with<I>(limit: usize) -> impl FnOnce(I) -> Vec<I::Item>
where
    I: IntoSequence,
{
    curry(max::<I>).defer(limit).into_stage::<I>()
}

/// Fallible [`max`] over a sequence of results.
///
/// # Errors
///
/// Returns the first `Err` pulled within the limit. Nothing is pulled after
/// it, and the values collected so far are discarded.
///
/// # Examples
///
/// ```rust
/// use seqline::terminate;
///
/// let results = vec![Ok(1), Ok(2), Err("broken"), Ok(4)];
/// assert_eq!(terminate::try_max(2, results.clone()), Ok(vec![1, 2]));
/// assert_eq!(terminate::try_max(3, results), Err("broken"));
/// ```
pub fn try_max<A, E, I>(limit: usize, sequence: I) -> Result<Vec<A>, E>
where
    I: IntoSequence<Item = Result<A, E>>,
{
    try_take_bounded(Some(limit), sequence)
}

/// Fallible [`take_all`] over a sequence of results.
///
/// # Errors
///
/// Returns the first `Err` in the sequence.
pub fn try_take_all<A, E, I>(sequence: I) -> Result<Vec<A>, E>
where
    I: IntoSequence<Item = Result<A, E>>,
{
    try_take_bounded(None, sequence)
}

fn try_take_bounded<A, E, I>(limit: Option<usize>, sequence: I) -> Result<Vec<A>, E>
where
    I: IntoSequence<Item = Result<A, E>>,
{
    let mut sequence = sequence.into_sequence();
    let mut response = Vec::new();
    while limit.is_none_or(|limit| response.len() < limit) {
        match sequence.pull() {
            Pull::Value(Ok(value)) => response.push(value),
            Pull::Value(Err(error)) => {
                trace!(pulled = response.len() + 1, "sequence failed");
                return Err(error);
            }
            Pull::Exhausted => break,
        }
    }
    Ok(response)
}
