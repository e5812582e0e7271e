//! Testing utilities
//!
//! Assertion macros for [`ValidationResults`](crate::ValidationResults) and,
//! with the `proptest` feature, [`Arbitrary`](proptest::arbitrary::Arbitrary)
//! implementations for property-based tests of code that consumes failures.
//!
//! # Examples
//!
//! ```rust
//! use cohort::{assert_failure_messages, assert_invalid, assert_valid, CollectionValidator};
//!
//! let mut validator = CollectionValidator::new();
//! validator.unique(None);
//!
//! assert_valid!(validator.validate(&[1, 2, 3]).unwrap());
//! assert_invalid!(validator.validate(&[1, 1]).unwrap(), 1);
//! assert_failure_messages!(
//!     validator.validate(&[4, 4]).unwrap(),
//!     ["Collection contains a duplicate item at index 1."]
//! );
//! ```

/// Assert that a validation run reported no failure.
///
/// # Example
///
/// ```rust
/// use cohort::{assert_valid, ValidationResults};
///
/// assert_valid!(ValidationResults::default());
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($results:expr) => {{
        let results: &$crate::ValidationResults = &$results;
        if !results.is_valid() {
            panic!("Expected valid collection, got failures:\n{}", results);
        }
    }};
}

/// Assert that a validation run reported failures, optionally how many.
///
/// # Example
///
/// ```rust
/// use cohort::{assert_invalid, Failure, ValidationResults};
///
/// let results = ValidationResults::new(vec![Failure::new("too short")]);
/// assert_invalid!(results);
/// assert_invalid!(results, 1);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($results:expr) => {{
        let results: &$crate::ValidationResults = &$results;
        if results.is_valid() {
            panic!("Expected failures, got a valid collection");
        }
    }};
    ($results:expr, $count:expr) => {{
        let results: &$crate::ValidationResults = &$results;
        if results.len() != $count {
            panic!(
                "Expected {} failure(s), got {}:\n{}",
                $count,
                results.len(),
                results
            );
        }
    }};
}

/// Assert the exact failure messages of a validation run, in order.
///
/// # Example
///
/// ```rust
/// use cohort::{assert_failure_messages, Failure, ValidationResults};
///
/// let results = ValidationResults::new(vec![Failure::new("a"), Failure::new("b")]);
/// assert_failure_messages!(results, ["a", "b"]);
/// ```
#[macro_export]
macro_rules! assert_failure_messages {
    ($results:expr, [$($message:expr),* $(,)?]) => {{
        let results: &$crate::ValidationResults = &$results;
        let expected: ::std::vec::Vec<&str> = ::std::vec![$($message),*];
        assert_eq!(results.messages(), expected);
    }};
}

#[cfg(feature = "proptest")]
use crate::{Failure, Validation, ValidationResults};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Failure {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            "[ -~]{0,40}",
            proptest::option::of(0usize..1_000),
            proptest::option::of("[a-z][a-z_]{0,11}"),
        )
            .prop_map(|(message, index, property)| {
                let failure = Failure::new(message);
                let failure = match index {
                    Some(index) => failure.at_index(index),
                    None => failure,
                };
                match property {
                    Some(property) => failure.for_property(property),
                    None => failure,
                }
            })
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for ValidationResults {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::collection::vec(any::<Failure>(), 0..8)
            .prop_map(ValidationResults::new)
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Validation<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
    T::Strategy: 'static,
    E::Strategy: 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Validation::success),
            any_with::<E>(e_params).prop_map(Validation::failure),
        ]
        .boxed()
    }
}
