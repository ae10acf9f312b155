#![cfg(all(feature = "lazy", feature = "eager", feature = "terminate"))]
//! Property-based tests relating lazy and eager combinators.
//!
//! ## Equivalence Laws
//! - **Map**: `take_all(lazy::map(f, xs)) == eager::map(f, xs)`
//! - **Filter**: `take_all(lazy::filter(p, xs)) == eager::filter(p, xs)`
//!
//! ## Bounded Pull Laws
//! - **Max**: `max(k, naturals)` returns `k` values after exactly `k` pulls
//! - **Find**: `find(p, xs)` pulls at most `index_of_first_match + 1` values

use proptest::prelude::*;
use seqline::{eager, lazy, terminate};
use std::cell::Cell;

proptest! {
    /// Map Equivalence: lazy map pulled fully equals eager map
    #[test]
    fn prop_lazy_map_equals_eager_map(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let function = |value: i32| value.wrapping_mul(3).wrapping_sub(1);

        let lazy_result = terminate::take_all(lazy::map(function, values.clone()));
        let eager_result = eager::map(function, values);

        prop_assert_eq!(lazy_result, eager_result);
    }

    /// Filter Equivalence: lazy filter pulled fully equals eager filter
    #[test]
    fn prop_lazy_filter_equals_eager_filter(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let predicate = |value: &i32| value.rem_euclid(3) == 0;

        let lazy_result = terminate::take_all(lazy::filter(predicate, values.clone()));
        let eager_result = eager::filter(predicate, values);

        prop_assert_eq!(lazy_result, eager_result);
    }

    /// Max Bound: exactly `limit` pulls on an infinite source
    #[test]
    fn prop_max_pulls_exactly_limit(limit in 0_usize..200) {
        let pulls = Cell::new(0_usize);
        let naturals = lazy::iterate(0_usize, |value: &usize| value + 1)
            .inspect(|_| pulls.set(pulls.get() + 1));

        let taken = terminate::max(limit, naturals);

        prop_assert_eq!(taken, (0..limit).collect::<Vec<_>>());
        prop_assert_eq!(pulls.get(), limit);
    }

    /// Find Bound: no pull beyond the first match
    #[test]
    fn prop_find_pull_count(values in prop::collection::vec(0_u8..20, 0..64), target in 0_u8..20) {
        let pulls = Cell::new(0_usize);
        let source = values.iter().copied().inspect(|_| pulls.set(pulls.get() + 1));

        let found = terminate::find(|value: &u8| *value == target, source);

        match values.iter().position(|value| *value == target) {
            Some(index) => {
                prop_assert_eq!(found, Some(target));
                prop_assert_eq!(pulls.get(), index + 1);
            }
            None => {
                prop_assert_eq!(found, None);
                prop_assert_eq!(pulls.get(), values.len());
            }
        }
    }
}
