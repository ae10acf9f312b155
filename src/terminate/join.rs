//! Joining a sequence into delimited text.

use std::fmt::Display;

use crate::compose::curry;
use crate::eager;
use crate::lazy;
use crate::sequence::IntoSequence;

/// Joins the values of a sequence into one string, `separator` in between.
///
/// A sequence of one value returns that value's text; an empty sequence
/// returns an empty string. The separator never appears at either end.
///
/// # Examples
///
/// ```rust
/// use seqline::terminate;
///
/// assert_eq!(terminate::join("&", ["a=1", "b=2"]), "a=1&b=2");
/// assert_eq!(terminate::join(", ", [1, 2, 3]), "1, 2, 3");
/// assert_eq!(terminate::join("&", ["alone"]), "alone");
/// assert_eq!(terminate::join("&", Vec::<&str>::new()), "");
/// ```
pub fn join<I>(separator: &str, sequence: I) -> String
where
    I: IntoSequence,
    I::Item: Display,
{
    let texts = lazy::map(|value: I::Item| value.to_string(), sequence);
    eager::reduce(
        |mut joined: String, text: String| {
            joined.push_str(separator);
            joined.push_str(&text);
            joined
        },
        texts,
    )
    .unwrap_or_default()
}

/// Curried [`join`]: binds the separator, awaits the sequence.
///
/// # Examples
///
/// ```rust
/// use seqline::{list_processing, terminate};
///
/// let path = list_processing!(vec!["usr", "local", "bin"], terminate::join_with("/"));
/// assert_eq!(path, "usr/local/bin");
/// ```
pub fn join_with<'a, I>(separator: &'a str) -> impl FnOnce(I) -> String + 'a
where
    I: IntoSequence + 'a,
    I::Item: Display,
{
    curry(join::<I>).defer(separator).into_stage::<I>()
}
