//! Lazy combinators.
//!
//! Every combinator here returns a new sequence whose cursor advances only
//! when it is pulled. Nothing upstream is consumed ahead of demand, which is
//! what lets terminal combinators stop early on infinite sources.
//!
//! - [`map`] / [`filter`]: per-pull transformation and selection
//! - [`range`]: `0..limit`
//! - [`entries`]: `(key, value)` pairs of a keyed collection
//! - [`deep_flat`] / [`deep_flat_map`]: recursive flattening of nested
//!   sequences, one leaf per pull
//! - [`generate`] / [`iterate`]: sequences computed by closures, possibly
//!   infinite
//!
//! # Examples
//!
//! ```rust
//! use seqline::{lazy, terminate};
//! use std::cell::Cell;
//!
//! let pulls = Cell::new(0);
//! let naturals = lazy::iterate(0_u64, |value: &u64| value + 1)
//!     .inspect(|_| pulls.set(pulls.get() + 1));
//! let squares = lazy::map(|value: u64| value * value, naturals);
//!
//! assert_eq!(terminate::max(3, squares), vec![0, 1, 4]);
//! assert_eq!(pulls.get(), 3);
//! ```

mod adapters;
mod deep_flat;
mod sources;

pub use adapters::{Filter, Map, filter, filter_with, map, map_with};
pub use deep_flat::{DeepFlat, deep_flat, deep_flat_map, deep_flat_map_with};
pub use sources::{Entries, Generate, Iterate, Range, entries, generate, iterate, range};
