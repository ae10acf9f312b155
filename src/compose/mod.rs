//! Partial application and pipeline composition.
//!
//! This module lets pipeline stages be declared independently of the data
//! they will eventually run over.
//!
//! # Overview
//!
//! - [`curry`]: Call a function in full, or with its leading argument only
//!   and defer the rest
//! - [`list_processing!`]: Thread a seed through stages, left to right
//! - [`list_processing`]: The same over a runtime list of stages
//! - [`Pipeline`]: A reusable, incrementally built stage list
//! - [`compound_functions!`]: Declare a pipeline whose first stage takes
//!   several arguments, run it later
//! - [`identity`]: The unit stage
//!
//! # Examples
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use seqline::list_processing;
//!
//! let result = list_processing!(0, |value: i32| value + 1, |value: i32| value * 10);
//! assert_eq!(result, 10);
//! ```
//!
//! ## Partial Application
//!
//! ```
//! use seqline::compose::curry;
//!
//! fn clamp(low: i32, high: i32, value: i32) -> i32 { value.clamp(low, high) }
//!
//! let curried = curry(clamp);
//! assert_eq!(curried.call(0, (10, 42)), 10);
//!
//! let from_zero = curried.defer(0);
//! assert_eq!(from_zero.call((5, -3)), 0);
//! ```
//!
//! ## Deferred pipeline
//!
//! ```
//! use seqline::{compound_functions, eager};
//!
//! let word_lengths = compound_functions!(
//!     |text: &str, separator: char| text.split(separator).map(str::to_owned).collect::<Vec<_>>(),
//!     |words: Vec<String>| eager::map(|word: String| word.len(), words),
//! );
//! assert_eq!(word_lengths.call(("a,bb,ccc", ',')), vec![1, 2, 3]);
//! ```
//!
//! # Laws
//!
//! - **Curry equivalence**: `curry(f).defer(a).call((b, c)) == curry(f).call(a, (b, c)) == f(a, b, c)`
//! - **Pipeline identity**: `list_processing!(x, identity) == x`
//! - **Pipeline associativity**: `list_processing!(x, f, g) == list_processing!(x, |v| g(f(v)))`

mod list_processing_macro;

mod compound_macro;
mod curry;
mod pipeline;
mod utils;

pub use compound_macro::{Compound, compound_functions};
pub use curry::{Apply, Curried, Deferred, Invoke, Remainder, curry};
pub use pipeline::{Pipeline, list_processing};
pub use utils::identity;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compound_functions;
pub use crate::list_processing;
