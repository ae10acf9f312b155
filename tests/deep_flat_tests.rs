#![cfg(all(feature = "lazy", feature = "terminate"))]
//! Tests for recursive flattening.
//!
//! Tests cover:
//! - Flattening `Nested` trees of any depth
//! - One leaf per external pull, with no look-ahead into later siblings
//! - Custom `Unnest` implementations
//! - deep_flat_map applying only to leaves

use rstest::rstest;
use seqline::nested;
use seqline::{lazy, terminate};
use seqline::sequence::{Nested, Unnest, Unnested};
use std::cell::Cell;

// =============================================================================
// Nested Trees
// =============================================================================

#[rstest]
fn deep_flat_mixed_nesting() {
    let leaves = terminate::take_all(lazy::deep_flat(nested![1, 2, [3, [4], 5], 6]));
    assert_eq!(leaves, vec![1, 2, 3, 4, 5, 6]);
}

#[rstest]
fn deep_flat_map_squares_leaves() {
    let squares = terminate::take_all(lazy::deep_flat_map(|value: i32| value * value, nested![1, [2, 3]]));
    assert_eq!(squares, vec![1, 4, 9]);
}

#[rstest]
#[case(nested![], vec![])]
#[case(nested![[]], vec![])]
#[case(nested![[[[7]]]], vec![7])]
#[case(nested![[1, 2], [], [3]], vec![1, 2, 3])]
fn deep_flat_shapes(#[case] tree: Vec<Nested<i32>>, #[case] expected: Vec<i32>) {
    assert_eq!(terminate::take_all(lazy::deep_flat(tree)), expected);
}

#[rstest]
fn deep_flat_map_with_in_pipeline() {
    let labels = seqline::list_processing!(
        nested!["x", ["y", ["z"]]],
        lazy::deep_flat_map_with(|leaf: &str| leaf.to_uppercase()),
        terminate::take_all,
    );
    assert_eq!(labels, vec!["X", "Y", "Z"]);
}

// =============================================================================
// Custom Trees
// =============================================================================

/// A tree whose children are produced lazily and counted when unnested.
enum Counted<'a> {
    Leaf(u32),
    Branch(u32, &'a Cell<usize>),
}

impl<'a> Unnest for Counted<'a> {
    type Leaf = u32;
    type Children = std::vec::IntoIter<Counted<'a>>;

    fn unnest(self) -> Unnested<u32, Self::Children> {
        match self {
            Self::Leaf(value) => Unnested::Leaf(value),
            Self::Branch(base, opened) => {
                opened.set(opened.get() + 1);
                Unnested::Children(vec![Self::Leaf(base), Self::Leaf(base + 1)].into_iter())
            }
        }
    }
}

#[rstest]
fn deep_flat_opens_branches_on_demand() {
    let opened = Cell::new(0);
    let mut leaves = lazy::deep_flat(vec![
        Counted::Branch(10, &opened),
        Counted::Branch(20, &opened),
    ]);

    assert_eq!(opened.get(), 0);
    assert_eq!(leaves.next(), Some(10));
    assert_eq!(leaves.next(), Some(11));
    assert_eq!(opened.get(), 1);
    assert_eq!(leaves.next(), Some(20));
    assert_eq!(opened.get(), 2);
}

#[rstest]
fn deep_flat_pulls_outer_one_at_a_time() {
    let pulls = Cell::new(0);
    let outer = nested![[1, 2], [3]]
        .into_iter()
        .inspect(|_| pulls.set(pulls.get() + 1));
    let mut leaves = lazy::deep_flat(outer);

    assert_eq!(leaves.next(), Some(1));
    assert_eq!(leaves.next(), Some(2));
    assert_eq!(pulls.get(), 1);
    assert_eq!(leaves.next(), Some(3));
    assert_eq!(pulls.get(), 2);
    assert_eq!(leaves.next(), None);
}
