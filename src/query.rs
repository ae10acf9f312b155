//! Query-string rendering built from the sequence combinators.
//!
//! [`to_query_string`] is a three-stage pipeline: read the entries of a keyed
//! collection, render each as `key=value`, join them with `&`.

use std::fmt::Display;

use crate::sequence::IntoSequence;
use crate::{lazy, list_processing, terminate};

/// Renders the `(key, value)` pairs of `object` as `key1=value1&key2=value2`.
///
/// Pairs appear in the collection's own order: sorted for a `BTreeMap`,
/// unspecified for a `HashMap`. Keys and values are written with their
/// [`Display`] form and are not percent-encoded. An empty collection renders
/// as an empty string.
///
/// # Examples
///
/// ```rust
/// use seqline::query::to_query_string;
/// use std::collections::BTreeMap;
///
/// let params = BTreeMap::from([("page", "2"), ("sort", "name")]);
/// assert_eq!(to_query_string(&params), "page=2&sort=name");
///
/// assert_eq!(to_query_string([("limit", 10)]), "limit=10");
/// assert_eq!(to_query_string(BTreeMap::<String, u32>::new()), "");
/// ```
pub fn to_query_string<K, V, M>(object: M) -> String
where
    M: IntoSequence<Item = (K, V)>,
    K: Display,
    V: Display,
{
    list_processing!(
        lazy::entries(object),
        lazy::map_with(|(key, value): (K, V)| format!("{key}={value}")),
        terminate::join_with("&"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_single_pair_has_no_separator() {
        assert_eq!(to_query_string(vec![("q", "rust")]), "q=rust");
    }

    #[test]
    fn test_hash_map_contains_every_pair() {
        let params = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
        let rendered = to_query_string(&params);
        let mut pairs: Vec<&str> = rendered.split('&').collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec!["a=1", "b=2", "c=3"]);
    }

    #[test]
    fn test_values_are_not_encoded() {
        assert_eq!(to_query_string([("name", "a b")]), "name=a b");
    }
}
