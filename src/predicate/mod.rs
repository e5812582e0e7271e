//! Predicate combinators
//!
//! Predicates are the small reusable conditions rules are built from: a
//! cardinality rule checks a `Predicate<usize>` against the element count,
//! and element rules check predicates against selected property values.
//!
//! # Example
//!
//! ```rust
//! use cohort::predicate::*;
//!
//! let batch_size = between(1usize, 100usize);
//! assert!(batch_size.check(&42));
//! assert_eq!(batch_size.to_string(), "between 1 and 100");
//!
//! // String predicates accept both `str` and `String`; pick one when chaining.
//! let name_ok = PredicateExt::<str>::and(len_min(1), len_max(32));
//! assert!(name_ok.check("ada"));
//! ```

mod combinators;
mod number;
mod string;

pub use combinators::{And, Not, Or, Predicate, PredicateExt};

pub use number::{between, eq, ge, gt, le, lt, ne, Between, Eq, Ge, Gt, Le, Lt, Ne};

pub use string::{len_between, len_max, len_min, not_empty, LenBetween, NotEmpty};
