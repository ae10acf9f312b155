//! Error types for the sequence combinators.

use thiserror::Error;

/// Errors raised by the sequence combinators themselves.
///
/// Failures of caller-supplied callbacks are not wrapped here: they propagate
/// unchanged through the `try_*` combinators.
///
/// # Examples
///
/// ```rust
/// use seqline::sequence::SequenceError;
///
/// let error = SequenceError::EmptyWithoutSeed;
/// assert_eq!(error.to_string(), "cannot reduce empty sequence without seed");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum SequenceError {
    /// A seedless reduction was asked to fold a sequence with no elements.
    #[error("cannot reduce empty sequence without seed")]
    EmptyWithoutSeed,
}

/// Result alias for operations that can fail with a [`SequenceError`].
pub type Result<T> = std::result::Result<T, SequenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_without_seed_display() {
        assert_eq!(
            format!("{}", SequenceError::EmptyWithoutSeed),
            "cannot reduce empty sequence without seed"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&SequenceError::EmptyWithoutSeed);
    }
}
