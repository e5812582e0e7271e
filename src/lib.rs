//! # Cohort
//!
//! Declarative validation for whole collections.
//!
//! Most validation libraries check one object at a time. Cohort checks the
//! collection as a unit: no duplicates, the right number of elements, and
//! per-element rules that may look at an element's neighbours. Every rule
//! runs, and every failure is reported together, in a stable order.
//!
//! ## Quick Example
//!
//! ```rust
//! use cohort::predicate::gt;
//! use cohort::{key, CollectionValidator, Validation};
//!
//! #[derive(Debug)]
//! struct Line {
//!     sku: &'static str,
//!     qty: u32,
//! }
//!
//! let mut order = CollectionValidator::<Line>::new();
//! order
//!     .count_greater_than(0, Some("an order needs at least one line"))
//!     .count_less_or_equal_to(50, None)
//!     .unique_by_key(Some("SKU {index} is already on the order"), key("sku", |l: &Line| l.sku))
//!     .element_property("qty", |l: &Line| l.qty, |rule| rule.must(gt(0)));
//!
//! let lines = [
//!     Line { sku: "A-1", qty: 2 },
//!     Line { sku: "B-7", qty: 0 },
//!     Line { sku: "A-1", qty: 1 },
//! ];
//!
//! let results = order.validate(&lines).unwrap();
//! assert_eq!(
//!     results.messages(),
//!     vec!["'qty' is not valid.", "SKU 2 is already on the order"]
//! );
//!
//! // Results convert into an accumulating `Validation`.
//! match results.into_validation(&lines) {
//!     Validation::Success(_) => unreachable!(),
//!     Validation::Failure(failures) => assert_eq!(failures[1].index(), Some(2)),
//! }
//! ```
//!
//! ## Rules
//!
//! - **Uniqueness**: [`unique`](CollectionValidator::unique) by value, or
//!   [`unique_by`](CollectionValidator::unique_by) a set of derived keys.
//! - **Cardinality**: `count_*` comparisons, [`single`](CollectionValidator::single)
//!   and arbitrary [`count_condition`](CollectionValidator::count_condition)s.
//! - **Element**: a [`RuleSet`](rules::RuleSet) per element, predicates over a
//!   selected property, or checks over an [`ElementContext`](rules::ElementContext).
//! - **Custom**: anything implementing [`CollectionRule`](rules::CollectionRule).
//!
//! ## Features
//!
//! - `serde`: serialize [`Failure`] and [`ValidationResults`]
//! - `tracing`: emit events while validating
//! - `proptest`: `Arbitrary` implementations for property testing

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod failure;
pub mod message;
pub mod nonempty;
pub mod predicate;
pub mod rules;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod validator;

// Re-exports
pub use error::ConfigError;
pub use failure::{Failure, ValidationResults};
pub use nonempty::NonEmptyVec;
pub use rules::{key, CollectionRule, ElementContext, KeySelector, RuleSet};
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use validator::CollectionValidator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::ConfigError;
    pub use crate::failure::{Failure, ValidationResults};
    pub use crate::nonempty::NonEmptyVec;
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::rules::{key, CollectionRule, ElementContext, RuleSet};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
    pub use crate::validator::CollectionValidator;
}
