//! Semigroup trait for order-preserving accumulation
//!
//! Failure lists merge by concatenation, an associative operation. Both
//! `Vec` and [`ValidationResults`](crate::ValidationResults) implement
//! `Semigroup`, and [`Validation::and`](crate::Validation::and) uses it to
//! keep the failures of independent validations together.
//!
//! # Examples
//!
//! ```
//! use cohort::Semigroup;
//!
//! let first = vec!["duplicate at 2"];
//! let second = vec!["count must be 1"];
//! assert_eq!(first.combine(second), vec!["duplicate at 2", "count must be 1"]);
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// Order matters: `combine` keeps the left operand's contents ahead of the
/// right operand's, which is what keeps failures in rule-registration order.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use cohort::Semigroup;
    ///
    /// let merged = vec![1, 2].combine(vec![3]);
    /// assert_eq!(merged, vec![1, 2, 3]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
