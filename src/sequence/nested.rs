//! Values that may themselves be sequences.
//!
//! Recursive flattening needs to ask each pulled value one question: "are you
//! a leaf, or a sequence of more values like you?" [`Unnest`] is that
//! question; [`Nested`] is the ready-made tree that answers it.

use std::vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The answer of [`Unnest::unnest`]: a leaf, or the children to descend into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unnested<L, C> {
    /// A plain value, yielded as is.
    Leaf(L),
    /// A nested sequence of values of the same shape.
    Children(C),
}

/// A value that is either a leaf or a nested sequence of values of its own
/// type.
///
/// Implement this for custom trees to make them flattenable by
/// `lazy::deep_flat`. The children are returned as a sequence, so they may be
/// computed lazily.
///
/// # Examples
///
/// ```rust
/// use seqline::sequence::{Unnest, Unnested};
///
/// enum Directory {
///     File(&'static str),
///     Folder(Vec<Directory>),
/// }
///
/// impl Unnest for Directory {
///     type Leaf = &'static str;
///     type Children = std::vec::IntoIter<Directory>;
///
///     fn unnest(self) -> Unnested<Self::Leaf, Self::Children> {
///         match self {
///             Self::File(name) => Unnested::Leaf(name),
///             Self::Folder(entries) => Unnested::Children(entries.into_iter()),
///         }
///     }
/// }
///
/// assert!(matches!(Directory::File("a.txt").unnest(), Unnested::Leaf("a.txt")));
/// ```
pub trait Unnest: Sized {
    /// The type of the leaf values.
    type Leaf;
    /// The sequence of children of a nested value.
    type Children: Iterator<Item = Self>;

    /// Splits this value into a leaf or its children.
    fn unnest(self) -> Unnested<Self::Leaf, Self::Children>;
}

/// An arbitrarily deep, finite nesting of values.
///
/// Build one with the [`nested!`](crate::nested) macro, which mirrors array
/// literal syntax.
///
/// With the `serde` feature the representation is untagged: a JSON array
/// deserializes into [`Nested::Sequence`], anything else into
/// [`Nested::Value`].
///
/// # Examples
///
/// ```rust
/// use seqline::nested;
/// use seqline::sequence::Nested;
///
/// let tree = nested![1, [2, 3]];
/// assert_eq!(
///     tree,
///     vec![
///         Nested::Value(1),
///         Nested::Sequence(vec![Nested::Value(2), Nested::Value(3)]),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Nested<T> {
    /// A leaf value.
    Value(T),
    /// A nested sequence.
    Sequence(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Creates a leaf.
    #[inline]
    pub const fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// Creates a nested sequence from any sequence of nested values.
    #[inline]
    pub fn sequence<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Sequence(values.into_iter().collect())
    }

    /// Returns `true` if this is a leaf.
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns the nesting depth: 0 for a leaf, 1 + the deepest child for a
    /// sequence.
    pub fn depth(&self) -> usize {
        match self {
            Self::Value(_) => 0,
            Self::Sequence(children) => 1 + children.iter().map(Self::depth).max().unwrap_or(0),
        }
    }
}

impl<T> FromIterator<Self> for Nested<T> {
    fn from_iter<I: IntoIterator<Item = Self>>(iterator: I) -> Self {
        Self::sequence(iterator)
    }
}

impl<T> Unnest for Nested<T> {
    type Leaf = T;
    type Children = vec::IntoIter<Self>;

    #[inline]
    fn unnest(self) -> Unnested<T, Self::Children> {
        match self {
            Self::Value(value) => Unnested::Leaf(value),
            Self::Sequence(children) => Unnested::Children(children.into_iter()),
        }
    }
}

/// Builds a `Vec<Nested<_>>` from array-like syntax.
///
/// Bracketed groups become [`Nested::Sequence`]; every other element becomes a
/// [`Nested::Value`]. Leaves are single token trees: literals, identifiers, or
/// parenthesized expressions.
///
/// # Examples
///
/// ```rust
/// use seqline::nested;
///
/// let offset = 10;
/// let tree = nested![1, [2, [(offset + 3)]], []];
/// assert_eq!(tree.len(), 3);
/// ```
#[macro_export]
macro_rules! nested {
    () => {
        ::std::vec::Vec::new()
    };

    ($($element:tt),+ $(,)?) => {
        ::std::vec![$($crate::__nested_node!($element)),+]
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __nested_node {
    ([$($inner:tt),* $(,)?]) => {
        $crate::sequence::Nested::Sequence(::std::vec![$($crate::__nested_node!($inner)),*])
    };

    ($leaf:expr) => {
        $crate::sequence::Nested::Value($leaf)
    };
}

static_assertions::assert_impl_all!(Nested<i32>: Send, Sync, Clone);
