//! Eager combinators.
//!
//! Each combinator here drains its input sequence completely before
//! returning a materialized collection or a scalar:
//!
//! - [`map`]: apply a function to every element
//! - [`filter`]: keep elements matching a predicate
//! - [`reduce`]: fold using the first element as the seed
//! - [`fold`]: fold from an explicit seed
//! - [`try_map`] / [`try_fold`]: the same with fallible callbacks
//!
//! Every combinator has a curried `*_with` form taking the callback only and
//! returning a stage that awaits the sequence, for use with
//! [`list_processing!`](crate::list_processing).
//!
//! # Examples
//!
//! ```rust
//! use seqline::eager;
//!
//! let doubled = eager::map(|value: i32| value * 2, vec![1, 2, 3]);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let total = eager::reduce(|sum: i32, value: i32| sum + value, doubled);
//! assert_eq!(total, Ok(12));
//! ```

mod combinators;
mod fallible;

pub use combinators::{
    filter, filter_with, fold, fold_with, map, map_with, reduce, reduce_with,
};
pub use fallible::{try_fold, try_map};
