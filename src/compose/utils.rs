//! Helper functions (combinators) for pipeline composition.

/// Returns the value unchanged.
///
/// The identity function is the unit element of pipeline composition:
/// - `list_processing!(x, identity)` is `x`
/// - `lazy::deep_flat_map(identity, s)` yields the same leaves as
///   `lazy::deep_flat(s)`
///
/// It is also the remainder of a [`compound_functions!`](crate::compound_functions)
/// that has only a first stage.
///
/// # Examples
///
/// ```
/// use seqline::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_keeps_ownership() {
        let text = String::from("owned");
        let pointer = text.as_ptr();
        assert_eq!(identity(text).as_ptr(), pointer);
    }

    #[test]
    fn test_identity_as_stage() {
        assert_eq!(crate::list_processing!("seed", identity), "seed");
    }
}
