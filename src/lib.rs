//! # seqline
//!
//! Eager and lazy sequence combinators with curried, composable pipeline
//! stages.
//!
//! ## Overview
//!
//! Anything that can be iterated once, front to back, is a *sequence*. This
//! library processes sequences through ordered stages:
//!
//! - **Sequence Protocol**: [`Sequence`](sequence::Sequence), pull-based
//!   access shared by every source and consumer
//! - **Eager Combinators**: `map`, `filter`, `reduce`, `fold` that drain their
//!   input and materialize the result
//! - **Lazy Combinators**: `map`, `filter`, `range`, `entries`, `deep_flat`
//!   that compute one element per pull
//! - **Termination**: `max`, `take_all`, `find`, `join` that stop pulling as
//!   soon as they have what they need
//! - **Composition**: `curry`, `list_processing!`, `compound_functions!`
//!
//! ## Feature Flags
//!
//! - `compose`: Currying and pipeline runners
//! - `eager`: Eager combinators
//! - `lazy`: Lazy combinators
//! - `terminate`: Termination combinators
//! - `query`: Query-string helper built from the other modules
//! - `serde`: `Serialize`/`Deserialize` for [`Nested`](sequence::Nested)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqline::prelude::*;
//! use seqline::{eager, lazy, list_processing, terminate};
//!
//! let total = list_processing!(
//!     vec![1, 2, 3, 4, 5],
//!     eager::map_with(|value: i32| value + 1),
//!     eager::filter_with(|value: &i32| value % 2 == 0),
//!     eager::reduce_with(|sum: i32, value: i32| sum + value),
//! );
//! assert_eq!(total, Ok(12));
//!
//! let odd_squares = list_processing!(
//!     lazy::iterate(1_u64, |value: &u64| value + 1),
//!     lazy::map_with(|value: u64| value * value),
//!     lazy::filter_with(|value: &u64| value % 2 == 1),
//!     terminate::max_with(3),
//! );
//! assert_eq!(odd_squares, vec![1, 9, 25]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the protocol traits and the composition helpers. Combinators
/// stay behind their module names (`eager::map` vs `lazy::map`).
///
/// # Usage
///
/// ```rust
/// use seqline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sequence::{IntoSequence, Nested, Pull, Sequence, SequenceError, Unnest};

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod sequence;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "eager")]
pub mod eager;

#[cfg(feature = "lazy")]
pub mod lazy;

#[cfg(feature = "terminate")]
pub mod terminate;

#[cfg(feature = "query")]
pub mod query;
