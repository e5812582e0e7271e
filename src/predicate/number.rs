//! Comparison predicates
//!
//! Each predicate also describes itself through `Display`; cardinality rules
//! use that description in their default failure message.

use super::combinators::Predicate;
use std::fmt;

macro_rules! comparison {
    ($(#[$meta:meta])* $name:ident, $ctor:ident, $bound:ident, $op:tt, $text:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name<T>(pub T);

        impl<T: $bound + Send + Sync> Predicate<T> for $name<T> {
            #[inline]
            fn check(&self, value: &T) -> bool {
                *value $op self.0
            }
        }

        impl<T: fmt::Display> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($text, " {}"), self.0)
            }
        }

        #[doc = concat!("Create a predicate that checks the value is ", $text, " `value`.")]
        pub fn $ctor<T: $bound + Send + Sync>(value: T) -> $name<T> {
            $name(value)
        }
    };
}

comparison!(
    /// Predicate for equality.
    Eq, eq, PartialEq, ==, "equal to"
);
comparison!(
    /// Predicate for inequality.
    Ne, ne, PartialEq, !=, "not equal to"
);
comparison!(
    /// Predicate for greater than.
    Gt, gt, PartialOrd, >, "greater than"
);
comparison!(
    /// Predicate for greater than or equal.
    Ge, ge, PartialOrd, >=, "greater than or equal to"
);
comparison!(
    /// Predicate for less than.
    Lt, lt, PartialOrd, <, "less than"
);
comparison!(
    /// Predicate for less than or equal.
    Le, le, PartialOrd, <=, "less than or equal to"
);

/// Predicate for an inclusive range.
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

impl<T: fmt::Display> fmt::Display for Between<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "between {} and {}", self.min, self.max)
    }
}

/// Create a predicate that checks `min <= value <= max`.
///
/// # Example
///
/// ```rust
/// use cohort::predicate::*;
///
/// assert!(between(2usize, 4usize).check(&2));
/// assert!(!between(2usize, 4usize).check(&5));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}
