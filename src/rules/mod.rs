//! Rule kinds evaluated by a [`CollectionValidator`](crate::CollectionValidator)
//!
//! Every rule implements [`CollectionRule`]: it reads the whole collection
//! and reports zero or more [`Failure`]s. The validator holds rules only
//! through this trait, so new rule kinds plug in next to the built-in ones:
//!
//! - [`UniqueRule`]: duplicates by value or by derived keys
//! - [`CountRule`]: a condition on the number of elements
//! - [`ElementRule`]: per-element checks
//!
//! # Custom rules
//!
//! ```
//! use cohort::{CollectionValidator, Failure};
//!
//! let mut validator = CollectionValidator::<i64>::new();
//! validator.rule(|items: &[i64]| {
//!     items
//!         .windows(2)
//!         .enumerate()
//!         .filter(|(_, pair)| pair[0] > pair[1])
//!         .map(|(i, _)| Failure::new("not sorted").at_index(i + 1))
//!         .collect::<Vec<_>>()
//! });
//!
//! let results = validator.validate(&[1, 3, 2]).unwrap();
//! assert_eq!(results.failures()[0].index(), Some(2));
//! ```

mod count;
mod element;
mod unique;

pub use count::CountRule;
pub use element::{ContextRule, ElementContext, ElementRule, PropertyRule, RuleSet};
pub use unique::{key, KeySelector, UniqueRule};

use crate::Failure;

/// A check over a whole collection.
///
/// `evaluate` must only read `items`; the same rule is evaluated against many
/// collections and possibly from several threads at once.
pub trait CollectionRule<T>: Send + Sync {
    /// Inspect the collection and report every violation found.
    fn evaluate(&self, items: &[T]) -> Vec<Failure>;
}

impl<T, F> CollectionRule<T> for F
where
    F: Fn(&[T]) -> Vec<Failure> + Send + Sync,
{
    fn evaluate(&self, items: &[T]) -> Vec<Failure> {
        self(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_rule() {
        let non_zero = |items: &[u8]| {
            items
                .iter()
                .position(|n| *n == 0)
                .map(|i| vec![Failure::new("zero").at_index(i)])
                .unwrap_or_default()
        };
        let clean: &[u8] = &[1, 2];
        let dirty: &[u8] = &[1, 0];
        assert!(non_zero.evaluate(clean).is_empty());
        assert_eq!(non_zero.evaluate(dirty), vec![Failure::new("zero").at_index(1)]);
    }

    #[test]
    fn test_rules_as_trait_objects() {
        let rules: Vec<Box<dyn CollectionRule<u8>>> = vec![
            Box::new(CountRule::greater_than(1, None)),
            Box::new(UniqueRule::<u8>::by_value(None)),
        ];
        let found: Vec<Failure> = rules.iter().flat_map(|rule| rule.evaluate(&[7])).collect();
        assert_eq!(found.len(), 1);
    }
}
