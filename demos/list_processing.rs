//! Demonstration of seqline pipelines.
//!
//! Runs a few eager and lazy pipelines and prints their results. Set
//! `RUST_LOG=seqline=trace` to watch the pulls issued by each terminal stage.
//!
//! ```text
//! cargo run --example list_processing --features query
//! ```

use std::collections::BTreeMap;

use seqline::query::to_query_string;
use seqline::sequence::SequenceError;
use seqline::{eager, lazy, list_processing, nested, terminate};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), SequenceError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,seqline=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Eager: every stage drains its input before the next one starts.
    let total = list_processing!(
        vec![1, 2, 3, 4, 5],
        eager::map_with(|value: i32| value + 1),
        eager::filter_with(|value: &i32| value % 2 == 0),
        eager::reduce_with(|sum: i32, value: i32| sum + value),
    )?;
    tracing::info!(total, "sum of even successors");

    // Sum of the squares of the odd values
    let odd_square_sum = list_processing!(
        vec![1, 2, 3, 4, 5],
        lazy::filter_with(|value: &i32| value % 2 == 1),
        lazy::map_with(|value: i32| value * value),
        eager::reduce_with(|sum: i32, value: i32| sum + value),
    )?;
    tracing::info!(odd_square_sum, "sum of odd squares");

    // Lazy: only the pulls needed for three results ever happen.
    let first_multiples = list_processing!(
        lazy::iterate(1_u64, |value: &u64| value + 1),
        lazy::map_with(|value: u64| value * 3),
        lazy::filter_with(|value: &u64| value % 2 == 0),
        terminate::max_with(3),
    );
    tracing::info!(?first_multiples, "first even multiples of three");

    let leaves = list_processing!(
        nested![1, 2, [3, [4], 5], 6],
        lazy::deep_flat_map_with(|value: i32| value * value),
        terminate::join_with(", "),
    );
    tracing::info!(%leaves, "squared leaves of a nested sequence");

    let first_long_word = terminate::find(
        |word: &&str| word.len() > 4,
        ["map", "filter", "reduce"],
    );
    tracing::info!(?first_long_word, "first word longer than four letters");

    let params = BTreeMap::from([("page", "2"), ("per_page", "50"), ("sort", "name")]);
    let query = to_query_string(&params);
    tracing::info!(%query, "query string");

    Ok(())
}
