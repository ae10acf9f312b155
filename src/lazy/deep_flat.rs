//! Recursive, on-demand flattening of nested sequences.

use std::fmt;
use std::iter::FusedIterator;

use smallvec::SmallVec;
use tracing::trace;

use super::adapters::{Map, map};
use crate::compose::curry;
use crate::sequence::{IntoSequence, Pull, Sequence, Unnest, Unnested};

/// Nesting depth kept inline before the cursor stack spills to the heap.
const INLINE_DEPTH: usize = 8;

/// A sequence yielding the leaves of arbitrarily nested sequences.
///
/// Holds a stack of child cursors, one per level of nesting currently being
/// walked. Each pull descends into nested sequences and climbs out of
/// exhausted ones until it reaches a leaf or the outer sequence ends; no
/// intermediate flattened collection is ever built.
///
/// Created by [`deep_flat`].
#[must_use = "lazy sequences do nothing unless pulled"]
pub struct DeepFlat<I>
where
    I: Iterator,
    I::Item: Unnest,
{
    outer: I,
    stack: SmallVec<[<I::Item as Unnest>::Children; INLINE_DEPTH]>,
}

impl<I> DeepFlat<I>
where
    I: Iterator,
    I::Item: Unnest,
{
    /// Returns how many nested sequences are currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn pull_node(&mut self) -> Option<I::Item> {
        while let Some(children) = self.stack.last_mut() {
            match children.pull() {
                Pull::Value(node) => return Some(node),
                Pull::Exhausted => {
                    self.stack.pop();
                }
            }
        }
        self.outer.pull().into_option()
    }
}

impl<I> Iterator for DeepFlat<I>
where
    I: Iterator,
    I::Item: Unnest,
{
    type Item = <I::Item as Unnest>::Leaf;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.pull_node()?.unnest() {
                Unnested::Leaf(leaf) => return Some(leaf),
                Unnested::Children(children) => {
                    self.stack.push(children);
                    trace!(depth = self.stack.len(), "descending into nested sequence");
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stack.is_empty() && self.outer.size_hint().1 == Some(0) {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl<I> FusedIterator for DeepFlat<I>
where
    I: FusedIterator,
    I::Item: Unnest,
{
}

impl<I> fmt::Debug for DeepFlat<I>
where
    I: Iterator + fmt::Debug,
    I::Item: Unnest,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DeepFlat")
            .field("outer", &self.outer)
            .field("depth", &self.stack.len())
            .finish()
    }
}

/// Lazily flattens nested sequences down to their leaves.
///
/// Every pulled value that is itself a sequence is descended into on the
/// spot, so each external pull returns exactly one leaf (or exhaustion) and
/// nested sequences are pulled no further than needed. Terminates on any
/// finite nesting; cyclic structures are not supported.
///
/// # Examples
///
/// ```rust
/// use seqline::{lazy, nested};
///
/// let leaves: Vec<i32> = lazy::deep_flat(nested![1, 2, [3, [4], 5], 6]).collect();
/// assert_eq!(leaves, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn deep_flat<I>(sequence: I) -> DeepFlat<I::IntoSeq>
where
    I: IntoSequence,
    I::Item: Unnest,
{
    DeepFlat {
        outer: sequence.into_sequence(),
        stack: SmallVec::new(),
    }
}

/// Lazily flattens nested sequences, then applies `function` to each leaf.
///
/// Flattening comes first, so `function` only ever sees leaves, never the
/// nested containers.
///
/// # Examples
///
/// ```rust
/// use seqline::{lazy, nested};
///
/// let squares: Vec<i32> = lazy::deep_flat_map(|value: i32| value * value, nested![1, [2, 3]]).collect();
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
pub fn deep_flat_map<B, F, I>(function: F, sequence: I) -> Map<DeepFlat<I::IntoSeq>, F>
where
    I: IntoSequence,
    I::Item: Unnest,
    F: FnMut(<I::Item as Unnest>::Leaf) -> B,
{
    map(function, deep_flat(sequence))
}

/// Curried [`deep_flat_map`]: binds the function, awaits the sequence.
pub fn deep_flat_map_with<B, F, I>(function: F) -> impl FnOnce(I) -> Map<DeepFlat<I::IntoSeq>, F>
where
    I: IntoSequence,
    I::Item: Unnest,
    F: FnMut(<I::Item as Unnest>::Leaf) -> B,
{
    curry(deep_flat_map::<B, F, I>).defer(function).into_stage::<I>()
}
