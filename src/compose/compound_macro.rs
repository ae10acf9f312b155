//! The `compound_functions!` macro for building deferred pipelines.
//!
//! This module provides [`Compound`] and the [`compound_functions!`] macro,
//! which declare a pipeline once and run it later on any input. The first
//! stage may take several arguments; the remaining stages are unary.

use std::fmt;

use super::curry::Apply;

/// A pipeline declared ahead of its input.
///
/// Calling it with an argument tuple `args` computes `first(args...)` and
/// threads the result through the remaining stages, left to right.
///
/// Created by [`compound_functions`] or [`compound_functions!`].
#[derive(Clone)]
pub struct Compound<First, Rest> {
    first: First,
    rest: Rest,
}

/// Builds a [`Compound`] from a first stage and the function made of the
/// remaining stages.
///
/// # Examples
///
/// ```
/// use seqline::compose::{Pipeline, compound_functions};
///
/// let rest = Pipeline::new()
///     .stage(|value: i32| value * 2)
///     .stage(|value: i32| value - 1)
///     .into_fn();
/// let compound = compound_functions(|left: i32, right: i32| left + right, rest);
///
/// assert_eq!(compound.call((3, 4)), 13);
/// ```
#[inline]
pub const fn compound_functions<First, Rest>(first: First, rest: Rest) -> Compound<First, Rest> {
    Compound { first, rest }
}

impl<First, Rest> Compound<First, Rest> {
    /// Runs the pipeline on `args`, keeping it reusable.
    #[inline]
    pub fn call<Args, Output>(&self, args: Args) -> Output
    where
        First: Apply<Args>,
        Rest: Fn(First::Output) -> Output,
    {
        (self.rest)(self.first.apply(args))
    }
}

impl<First, Rest> fmt::Debug for Compound<First, Rest> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Compound").finish_non_exhaustive()
    }
}

/// Declares a pipeline whose first stage may take several arguments.
///
/// `compound_functions!(f, g, h).call((a, b))` is equivalent to
/// `h(g(f(a, b)))`.
///
/// The first stage takes its arguments as a tuple, from `()` up to six
/// elements. Every other stage is unary. Nothing runs until
/// [`Compound::call`] is invoked, and the compound can be called any number
/// of times.
///
/// # Syntax
///
/// - `compound_functions!(f)` - Calls `f` only
/// - `compound_functions!(f, g)` - Returns `g(f(args...))`
/// - `compound_functions!(f, g, h, ...)` - Any number of unary stages
///
/// # Type Requirements
///
/// All stages must implement [`Fn`]. The output type of each stage must
/// match the input type of the next.
///
/// # Examples
///
/// ## Multi-argument first stage
///
/// ```
/// use seqline::{compound_functions, eager};
///
/// let sum_of_even_squares = compound_functions!(
///     |start: usize, end: usize| (start..end).collect::<Vec<_>>(),
///     |values: Vec<usize>| eager::filter(|value: &usize| value % 2 == 0, values),
///     |values: Vec<usize>| eager::fold(|sum, value| sum + value * value, 0_usize, values),
/// );
///
/// assert_eq!(sum_of_even_squares.call((0, 5)), 20); // 0 + 4 + 16
/// assert_eq!(sum_of_even_squares.call((5, 7)), 36);
/// ```
///
/// ## Single stage
///
/// ```
/// use seqline::compound_functions;
///
/// let pair = compound_functions!(|left: char, right: char| format!("{left}{right}"));
/// assert_eq!(pair.call(('o', 'k')), "ok");
/// ```
#[macro_export]
macro_rules! compound_functions {
    // First stage only: the remainder is the identity
    ($first:expr $(,)?) => {
        $crate::compose::compound_functions($first, $crate::compose::identity)
    };

    // First stage followed by unary stages, chained left to right
    ($first:expr, $($stages:expr),+ $(,)?) => {
        $crate::compose::compound_functions($first, $crate::__compound_chain!($($stages),+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __compound_chain {
    ($stage:expr) => {
        $stage
    };

    ($stage:expr, $($remaining_stages:expr),+) => {{
        let stage = $stage;
        let remaining = $crate::__compound_chain!($($remaining_stages),+);
        move |value| remaining(stage(value))
    }};
}
