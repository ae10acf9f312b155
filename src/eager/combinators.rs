use crate::compose::curry;
use crate::sequence::{IntoSequence, Pull, Result, Sequence, SequenceError, capacity_hint};

/// Applies `function` to every element, collecting the results in encounter
/// order.
///
/// # Examples
///
/// ```rust
/// use seqline::eager;
/// use seqline::sequence::text;
///
/// assert_eq!(eager::map(|value: i32| value + 1, [1, 2, 3]), vec![2, 3, 4]);
/// assert_eq!(
///     eager::map(|character: char| character.to_ascii_uppercase(), text("abc")),
///     vec!['A', 'B', 'C']
/// );
/// ```
pub fn map<B, F, I>(mut function: F, sequence: I) -> Vec<B>
where
    I: IntoSequence,
    F: FnMut(I::Item) -> B,
{
    let mut sequence = sequence.into_sequence();
    let mut response = Vec::with_capacity(capacity_hint(&sequence));
    while let Pull::Value(value) = sequence.pull() {
        response.push(function(value));
    }
    response
}

/// Keeps the elements for which `predicate` returns `true`, in order.
///
/// # Examples
///
/// ```rust
/// use seqline::eager;
///
/// let pairs = vec![(1, 2), (3, 4), (5, 6)];
/// assert_eq!(eager::filter(|(left, _): &(i32, i32)| *left < 5, pairs), vec![(1, 2), (3, 4)]);
/// ```
pub fn filter<F, I>(mut predicate: F, sequence: I) -> Vec<I::Item>
where
    I: IntoSequence,
    F: FnMut(&I::Item) -> bool,
{
    let mut sequence = sequence.into_sequence();
    let mut response = Vec::new();
    while let Pull::Value(value) = sequence.pull() {
        if predicate(&value) {
            response.push(value);
        }
    }
    response
}

/// Folds the sequence left to right, starting from `seed`.
///
/// `function(accumulator, value)` is applied to every element in turn and
/// the final accumulator is returned. An empty sequence returns `seed`.
///
/// # Examples
///
/// ```rust
/// use seqline::eager;
///
/// let digits = eager::fold(|number, digit: u32| number * 10 + digit, 0_u32, [4, 2, 7]);
/// assert_eq!(digits, 427);
/// ```
pub fn fold<B, F, I>(mut function: F, seed: B, sequence: I) -> B
where
    I: IntoSequence,
    F: FnMut(B, I::Item) -> B,
{
    let mut sequence = sequence.into_sequence();
    let mut accumulator = seed;
    while let Pull::Value(value) = sequence.pull() {
        accumulator = function(accumulator, value);
    }
    accumulator
}

/// Folds the sequence left to right, using its first element as the seed.
///
/// `reduce(f, xs)` is `fold(f, first, rest)` where `first` is the first
/// element pulled from `xs` and `rest` the remainder of the same cursor.
///
/// # Errors
///
/// Returns [`SequenceError::EmptyWithoutSeed`] if the sequence produces no
/// element.
///
/// # Examples
///
/// ```rust
/// use seqline::eager;
/// use seqline::sequence::SequenceError;
///
/// assert_eq!(eager::reduce(|left: i32, right: i32| left.max(right), [3, 9, 4]), Ok(9));
/// assert_eq!(
///     eager::reduce(|left: i32, right: i32| left + right, Vec::<i32>::new()),
///     Err(SequenceError::EmptyWithoutSeed)
/// );
/// ```
pub fn reduce<F, I>(function: F, sequence: I) -> Result<I::Item>
where
    I: IntoSequence,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    let mut sequence = sequence.into_sequence();
    match sequence.pull() {
        Pull::Value(seed) => Ok(fold(function, seed, sequence)),
        Pull::Exhausted => Err(SequenceError::EmptyWithoutSeed),
    }
}

/// Curried [`map`]: binds the function, awaits the sequence.
///
/// # Examples
///
/// ```rust
/// use seqline::eager;
///
/// let lengths = eager::map_with(|word: &str| word.len());
/// assert_eq!(lengths(vec!["a", "abc"]), vec![1, 3]);
/// ```
pub fn map_with<B, F, I>(function: F) -> impl FnOnce(I) -> Vec<B>
where
    I: IntoSequence,
    F: FnMut(I::Item) -> B,
{
    curry(map::<B, F, I>).defer(function).into_stage::<I>()
}

/// Curried [`filter`]: binds the predicate, awaits the sequence.
pub fn filter_with<F, I>(predicate: F) -> impl FnOnce(I) -> Vec<I::Item>
where
    I: IntoSequence,
    F: FnMut(&I::Item) -> bool,
{
    curry(filter::<F, I>).defer(predicate).into_stage::<I>()
}

/// Curried [`reduce`]: binds the function, awaits the sequence.
pub fn reduce_with<F, I>(function: F) -> impl FnOnce(I) -> Result<I::Item>
where
    I: IntoSequence,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    curry(reduce::<F, I>).defer(function).into_stage::<I>()
}

/// Curried [`fold`]: binds the function and the seed, awaits the sequence.
///
/// # Examples
///
/// ```rust
/// use seqline::{eager, list_processing};
///
/// let sentence = list_processing!(
///     vec!["lazy", "eager"],
///     eager::fold_with(|text: String, word: &str| text + word + ";", String::new()),
/// );
/// assert_eq!(sentence, "lazy;eager;");
/// ```
pub fn fold_with<B, F, I>(function: F, seed: B) -> impl FnOnce(I) -> B
where
    I: IntoSequence,
    F: FnMut(B, I::Item) -> B,
{
    let deferred = curry(fold::<B, F, I>).defer(function);
    move |sequence: I| deferred.call_once((seed, sequence))
}
