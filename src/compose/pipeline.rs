//! Runtime pipelines over a homogeneous list of stages.
//!
//! [`list_processing!`](crate::list_processing) checks stage types at compile
//! time but needs every stage written at the call site. The items here keep
//! the stages as data instead, so a pipeline can be assembled incrementally
//! and run many times.

use std::fmt;

use tracing::debug;

use crate::sequence::{IntoSequence, Pull, Sequence};

/// Folds a list of stages onto a seed, left to right.
///
/// Equivalent to folding `(value, stage) => stage(value)` over the stages
/// with `seed` as the initial accumulator. No stage is skipped; a panicking
/// stage stops the run before any later stage executes.
///
/// # Examples
///
/// ```
/// use seqline::compose::list_processing;
///
/// let stages: Vec<Box<dyn FnOnce(i32) -> i32>> = vec![
///     Box::new(|value: i32| value + 1),
///     Box::new(|value: i32| value + 10),
///     Box::new(|value: i32| value + 100),
/// ];
/// assert_eq!(list_processing(0, stages), 111);
/// ```
pub fn list_processing<T, S>(seed: T, stages: S) -> T
where
    S: IntoSequence,
    S::Item: FnOnce(T) -> T,
{
    let mut stages = stages.into_sequence();
    let mut value = seed;
    while let Pull::Value(stage) = stages.pull() {
        value = stage(value);
    }
    value
}

/// A reusable pipeline of stages from `T` to `T`.
///
/// # Examples
///
/// ```
/// use seqline::compose::Pipeline;
/// use seqline::eager;
///
/// let normalize = Pipeline::new()
///     .stage(|values: Vec<i32>| eager::filter(|value: &i32| *value >= 0, values))
///     .stage(|values: Vec<i32>| eager::map(|value: i32| value * 10, values));
///
/// assert_eq!(normalize.run(vec![3, -1, 2]), vec![30, 20]);
/// assert_eq!(normalize.run(vec![-5]), Vec::<i32>::new());
/// assert_eq!(normalize.len(), 2);
/// ```
pub struct Pipeline<'a, T> {
    stages: Vec<Box<dyn Fn(T) -> T + 'a>>,
}

impl<'a, T> Pipeline<'a, T> {
    /// Creates an empty pipeline, which returns its seed unchanged.
    #[inline]
    pub const fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage.
    #[must_use]
    pub fn stage<F>(mut self, stage: F) -> Self
    where
        F: Fn(T) -> T + 'a,
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// Returns the number of stages.
    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the pipeline has no stages.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs every stage on `seed`, in order.
    pub fn run(&self, seed: T) -> T {
        debug!(stages = self.stages.len(), "running pipeline");
        list_processing(seed, self.stages.iter())
    }

    /// Turns the pipeline into a plain function.
    pub fn into_fn(self) -> impl Fn(T) -> T + 'a
    where
        T: 'a,
    {
        move |seed| self.run(seed)
    }
}

impl<T> Default for Pipeline<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Pipeline<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}
