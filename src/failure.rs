//! Failure records and the aggregate returned by a validation run
//!
//! Every rule reports what it found as [`Failure`] values. A validation run
//! collects them, in rule order, into a [`ValidationResults`]. Both types are
//! immutable once built.
//!
//! # Examples
//!
//! ```
//! use cohort::{Failure, ValidationResults};
//!
//! let results = ValidationResults::new(vec![
//!     Failure::new("duplicate item").at_index(2),
//!     Failure::new("name is empty").at_index(0).for_property("name"),
//! ]);
//!
//! assert!(!results.is_valid());
//! assert_eq!(results.messages(), vec!["duplicate item", "name is empty"]);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Semigroup, Validation};

/// One reported violation.
///
/// Carries a human-readable message, and when the rule can tell, the index of
/// the offending element and the property the check was about.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Failure {
    message: String,
    index: Option<usize>,
    property: Option<String>,
}

impl Failure {
    /// Create a failure with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            index: None,
            property: None,
        }
    }

    /// Attach the index of the offending element.
    #[must_use]
    pub fn at_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Attach the property (or key basis) the failure concerns.
    #[must_use]
    pub fn for_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Index of the offending element, if known.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Property name, if the failure is property-scoped.
    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    pub(crate) fn with_message(mut self, message: String) -> Self {
        self.message = message;
        self
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.index, &self.property) {
            (Some(index), Some(property)) => write!(f, "[{}].{}: {}", index, property, self.message),
            (Some(index), None) => write!(f, "[{}]: {}", index, self.message),
            (None, Some(property)) => write!(f, "{}: {}", property, self.message),
            (None, None) => write!(f, "{}", self.message),
        }
    }
}

/// Ordered failures from one validation run.
///
/// An empty result set means the collection is valid.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResults {
    failures: Vec<Failure>,
}

impl ValidationResults {
    /// Wrap an ordered list of failures.
    pub fn new(failures: Vec<Failure>) -> Self {
        Self { failures }
    }

    /// True when no failure was reported.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of failures.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Same as [`is_valid`](Self::is_valid).
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// All failures, in the order they were reported.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Iterate over the failures.
    pub fn iter(&self) -> std::slice::Iter<'_, Failure> {
        self.failures.iter()
    }

    /// Failure messages, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.failures.iter().map(Failure::message).collect()
    }

    /// Consume the results, returning the failures.
    pub fn into_failures(self) -> Vec<Failure> {
        self.failures
    }

    /// Turn the results into a [`Validation`] carrying `value` on success.
    ///
    /// # Examples
    ///
    /// ```
    /// use cohort::{Failure, Validation, ValidationResults};
    ///
    /// let ok = ValidationResults::default().into_validation("batch-7");
    /// assert_eq!(ok, Validation::Success("batch-7"));
    ///
    /// let bad = ValidationResults::new(vec![Failure::new("empty")]).into_validation("batch-8");
    /// assert!(bad.is_failure());
    /// ```
    pub fn into_validation<V>(self, value: V) -> Validation<V, Vec<Failure>> {
        if self.failures.is_empty() {
            Validation::success(value)
        } else {
            Validation::failure(self.failures)
        }
    }
}

impl Semigroup for ValidationResults {
    fn combine(self, other: Self) -> Self {
        Self {
            failures: self.failures.combine(other.failures),
        }
    }
}

impl From<Vec<Failure>> for ValidationResults {
    fn from(failures: Vec<Failure>) -> Self {
        Self::new(failures)
    }
}

impl FromIterator<Failure> for ValidationResults {
    fn from_iter<I: IntoIterator<Item = Failure>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ValidationResults {
    type Item = Failure;
    type IntoIter = std::vec::IntoIter<Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationResults {
    type Item = &'a Failure;
    type IntoIter = std::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

impl fmt::Display for ValidationResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}
