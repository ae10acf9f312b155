//! The `list_processing!` macro for left-to-right stage application.
//!
//! This module provides the [`list_processing!`] macro which threads a seed
//! value through a series of stages, the statically typed form of
//! [`list_processing`](crate::compose::list_processing).

/// Threads a seed through a series of stages from left to right.
///
/// `list_processing!(seed, f, g, h)` is equivalent to `h(g(f(seed)))`.
///
/// Each stage receives exactly the output of the previous stage (or the seed
/// for the first one). Stages may change the type of the running value, so
/// sequences can flow into lazy views, materialized collections, and finally
/// scalars.
///
/// # Syntax
///
/// - `list_processing!(seed)` - Returns `seed` unchanged
/// - `list_processing!(seed, f)` - Returns `f(seed)`
/// - `list_processing!(seed, f, g, ...)` - Returns `...g(f(seed))`
///
/// # Type Requirements
///
/// Each stage only needs to implement [`FnOnce`], since each stage is called
/// exactly once. The curried `*_with` combinators produce such stages.
///
/// # Examples
///
/// ## Eager pipeline
///
/// ```
/// use seqline::{eager, list_processing};
///
/// // mapped: [2, 3, 4, 5, 6], filtered: [2, 4, 6], summed: 12
/// let total = list_processing!(
///     vec![1, 2, 3, 4, 5],
///     eager::map_with(|value: i32| value + 1),
///     eager::filter_with(|value: &i32| value % 2 == 0),
///     eager::reduce_with(|sum: i32, value: i32| sum + value),
/// );
/// assert_eq!(total, Ok(12));
/// ```
///
/// ## Lazy pipeline over an infinite source
///
/// ```
/// use seqline::{lazy, list_processing, terminate};
///
/// let first_multiples_of_seven = list_processing!(
///     lazy::iterate(1_u32, |value: &u32| value + 1),
///     lazy::filter_with(|value: &u32| value % 7 == 0),
///     terminate::max_with(3),
/// );
/// assert_eq!(first_multiples_of_seven, vec![7, 14, 21]);
/// ```
///
/// ## Scalar stages
///
/// ```
/// use seqline::list_processing;
///
/// let result = list_processing!(0, |value: i32| value + 1, |value: i32| value + 10);
/// assert_eq!(result, 11);
/// ```
#[macro_export]
macro_rules! list_processing {
    // Seed only: return as is
    ($seed:expr $(,)?) => {
        $seed
    };

    // Single stage: apply it
    ($seed:expr, $stage:expr $(,)?) => {
        $stage($seed)
    };

    // Multiple stages: apply left to right recursively
    ($seed:expr, $stage:expr, $($remaining_stages:expr),+ $(,)?) => {
        $crate::list_processing!($stage($seed), $($remaining_stages),+)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_list_processing_seed_only() {
        let result = list_processing!(42);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_list_processing_single() {
        let double = |value: i32| value * 2;
        assert_eq!(list_processing!(5, double), 10);
    }

    #[test]
    fn test_list_processing_changes_types() {
        let to_text = |value: i32| value.to_string();
        let length = |text: String| text.len();
        assert_eq!(list_processing!(12345, to_text, length), 5);
    }

    #[test]
    fn test_list_processing_trailing_comma() {
        let add_one = |value: i32| value + 1;
        let add_hundred = |value: i32| value + 100;
        assert_eq!(list_processing!(0, add_one, add_hundred,), 101);
    }
}
