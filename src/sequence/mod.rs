//! The sequence protocol.
//!
//! Every source and consumer in this crate speaks one contract: a sequence
//! produces values one at a time, on demand, and is walked exactly once.
//!
//! - [`Sequence`]: pull-based view of any [`Iterator`]
//! - [`IntoSequence`]: anything that can hand out a [`Sequence`], including a
//!   sequence itself
//! - [`Pull`]: the result of a single pull
//! - [`Nested`] / [`Unnest`]: values that may themselves be sequences, for
//!   recursive flattening
//! - [`SequenceError`]: errors raised by the combinators
//!
//! # Examples
//!
//! ```rust
//! use seqline::sequence::{IntoSequence, Pull, Sequence};
//!
//! let mut numbers = vec![1, 2].into_sequence();
//! assert_eq!(numbers.pull(), Pull::Value(1));
//! assert_eq!(numbers.pull(), Pull::Value(2));
//! assert_eq!(numbers.pull(), Pull::Exhausted);
//! ```

mod error;
mod nested;
mod protocol;

pub use error::{Result, SequenceError};
pub use nested::{Nested, Unnest, Unnested};
pub use protocol::{IntoSequence, Pull, Sequence, text};
#[cfg(feature = "eager")]
pub(crate) use protocol::capacity_hint;
