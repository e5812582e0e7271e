//! Validation type for accumulating failures
//!
//! `Validation` is the value-carrying counterpart of
//! [`ValidationResults`](crate::ValidationResults): it either holds a value
//! that passed every check, or every failure that was found. Unlike `Result`,
//! combining two validations keeps the errors of both sides.
//!
//! # Examples
//!
//! ```
//! use cohort::{CollectionValidator, Validation};
//!
//! let mut ids = CollectionValidator::<u32>::new();
//! ids.unique(None);
//!
//! let mut names = CollectionValidator::<&str>::new();
//! names.count_greater_than(0, None);
//!
//! let ids_checked = ids.validate(&[1, 2, 2]).unwrap().into_validation(());
//! let names_checked = names.validate(&[]).unwrap().into_validation(());
//!
//! match ids_checked.and(names_checked) {
//!     Validation::Failure(failures) => assert_eq!(failures.len(), 2),
//!     Validation::Success(_) => panic!("both inputs are invalid"),
//! }
//! ```

use crate::Semigroup;

/// The outcome of a validation: the checked value, or every failure found.
///
/// `E` is usually `Vec<Failure>`; combining two failed validations keeps the
/// failures of both, left side first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Every check passed.
    Success(T),
    /// At least one check failed.
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Wrap a value that passed validation.
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Wrap the failures of a validation.
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// True for `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// True for `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Pair two validations, keeping the failures of both.
    ///
    /// Errors from `self` come before errors from `other`.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) | (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Failure;

    #[test]
    fn test_success_and_failure() {
        assert!(Validation::<_, Vec<Failure>>::success(3).is_success());
        assert!(Validation::<u8, _>::failure(vec![Failure::new("empty")]).is_failure());
    }

    #[test]
    fn test_and_pairs_successes() {
        let ids = Validation::<_, Vec<Failure>>::success("ids");
        let names = Validation::success("names");
        assert_eq!(ids.and(names), Validation::Success(("ids", "names")));
    }

    #[test]
    fn test_and_accumulates_failures_in_order() {
        let left = Validation::<u8, _>::failure(vec![Failure::new("duplicate").at_index(2)]);
        let right = Validation::<u8, _>::failure(vec![Failure::new("too few")]);
        assert_eq!(
            left.and(right),
            Validation::Failure(vec![Failure::new("duplicate").at_index(2), Failure::new("too few")])
        );
    }

    #[test]
    fn test_and_with_one_failed_side() {
        let ok = Validation::<_, Vec<Failure>>::success(1);
        let bad = Validation::<u8, _>::failure(vec![Failure::new("too few")]);
        assert_eq!(ok.and(bad), Validation::Failure(vec![Failure::new("too few")]));
    }
}
