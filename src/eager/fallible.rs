//! Eager combinators with fallible callbacks.
//!
//! The first error stops the drain and is returned as is; no partial result
//! is produced.

use tracing::trace;

use crate::sequence::{IntoSequence, Pull, Sequence, capacity_hint};

/// Applies a fallible `function` to every element.
///
/// # Errors
///
/// Returns the first error produced by `function`. Elements after the
/// failing one are never pulled.
///
/// # Examples
///
/// ```rust
/// use seqline::eager;
///
/// let parsed: Result<Vec<i32>, _> = eager::try_map(|text: &str| text.parse::<i32>(), ["1", "2"]);
/// assert_eq!(parsed, Ok(vec![1, 2]));
///
/// let failed = eager::try_map(|text: &str| text.parse::<i32>(), ["1", "x", "3"]);
/// assert!(failed.is_err());
/// ```
pub fn try_map<B, E, F, I>(mut function: F, sequence: I) -> Result<Vec<B>, E>
where
    I: IntoSequence,
    F: FnMut(I::Item) -> Result<B, E>,
{
    let mut sequence = sequence.into_sequence();
    let mut response = Vec::with_capacity(capacity_hint(&sequence));
    while let Pull::Value(value) = sequence.pull() {
        match function(value) {
            Ok(mapped) => response.push(mapped),
            Err(error) => {
                trace!(completed = response.len(), "try_map stopped on error");
                return Err(error);
            }
        }
    }
    Ok(response)
}

/// Folds the sequence from `seed` with a fallible `function`.
///
/// # Errors
///
/// Returns the first error produced by `function`.
///
/// # Examples
///
/// ```rust
/// use seqline::eager;
///
/// let checked_sum = |sum: u8, value: u8| sum.checked_add(value).ok_or("overflow");
/// assert_eq!(eager::try_fold(checked_sum, 0, [100, 100]), Ok(200));
/// assert_eq!(eager::try_fold(checked_sum, 0, [200, 100]), Err("overflow"));
/// ```
pub fn try_fold<B, E, F, I>(mut function: F, seed: B, sequence: I) -> Result<B, E>
where
    I: IntoSequence,
    F: FnMut(B, I::Item) -> Result<B, E>,
{
    let mut sequence = sequence.into_sequence();
    let mut accumulator = seed;
    while let Pull::Value(value) = sequence.pull() {
        accumulator = function(accumulator, value)?;
    }
    Ok(accumulator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_try_map_stops_pulling_at_first_error() {
        let pulls = Cell::new(0);
        let source = (1..=10).inspect(|_| pulls.set(pulls.get() + 1));
        let result = try_map(
            |value: i32| if value == 3 { Err(value) } else { Ok(value) },
            source,
        );
        assert_eq!(result, Err(3));
        assert_eq!(pulls.get(), 3);
    }

    #[cfg(feature = "lazy")]
    #[test]
    fn test_try_map_over_infinite_source_returns_error() {
        let naturals = crate::lazy::iterate(0_u32, |value: &u32| value + 1);
        let result = try_map(|value: u32| if value > 3 { Err(value) } else { Ok(value) }, naturals);
        assert_eq!(result, Err(4));
    }

    #[cfg(feature = "lazy")]
    #[test]
    fn test_try_fold_over_infinite_source_returns_error() {
        let naturals = crate::lazy::iterate(1_u8, |value: &u8| value + 1);
        let result = try_fold(|sum: u8, value: u8| sum.checked_add(value).ok_or(sum), 0, naturals);
        assert_eq!(result, Err(253));
    }

    #[test]
    fn test_try_fold_empty_returns_seed() {
        let result: Result<i32, ()> = try_fold(|sum, value: i32| Ok(sum + value), 7, Vec::<i32>::new());
        assert_eq!(result, Ok(7));
    }
}
