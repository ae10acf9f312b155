//! Termination combinators.
//!
//! These end a pipeline: they pull from a (typically lazy) sequence until
//! they have what they need, then stop. None of them pulls beyond what its
//! result requires, so they are safe on infinite sources as long as the
//! result itself is finite.
//!
//! | Combinator | Stops after |
//! |------------|-------------|
//! | [`max`] | `limit` pulls or exhaustion |
//! | [`take_all`] | exhaustion |
//! | [`find`] | the first match |
//! | [`join`] | exhaustion |
//!
//! The `try_*` forms accept sequences of `Result` and stop at the first
//! `Err`.

mod find;
mod join;
mod take;

pub use find::{find, find_with, try_find};
pub use join::{join, join_with};
pub use take::{max, max_with, take_all, try_max, try_take_all};
