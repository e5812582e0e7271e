//! Cardinality rule
//!
//! Checks a condition against the number of elements and reports at most one
//! failure. An empty collection simply has count 0.

use std::fmt;

use super::CollectionRule;
use crate::message::render;
use crate::predicate::{eq, ge, gt, le, lt, Predicate};
use crate::Failure;

const DEFAULT_MESSAGE: &str = "Collection count must be {condition} but was {count}.";

/// Asserts a condition over the element count.
///
/// # Examples
///
/// ```
/// use cohort::rules::{CollectionRule, CountRule};
///
/// let rule = CountRule::greater_than(0, None);
/// let empty: &[u8] = &[];
/// let failures = rule.evaluate(empty);
/// assert_eq!(failures[0].message(), "Collection count must be greater than 0 but was 0.");
/// ```
pub struct CountRule {
    condition: Box<dyn Predicate<usize>>,
    description: String,
    message: Option<String>,
}

impl CountRule {
    /// Build a rule from any count predicate.
    ///
    /// `description` completes the sentence "Collection count must be ..." in
    /// the default message, and fills `{condition}` in custom ones.
    pub fn new<P>(condition: P, description: impl Into<String>, message: Option<&str>) -> Self
    where
        P: Predicate<usize> + 'static,
    {
        Self {
            condition: Box::new(condition),
            description: description.into(),
            message: message.map(str::to_owned),
        }
    }

    /// Build a rule from a predicate that describes itself.
    ///
    /// ```
    /// use cohort::predicate::between;
    /// use cohort::rules::CountRule;
    ///
    /// let rule = CountRule::described(between(2, 5), None);
    /// assert_eq!(rule.description(), "between 2 and 5");
    /// ```
    pub fn described<P>(condition: P, message: Option<&str>) -> Self
    where
        P: Predicate<usize> + fmt::Display + 'static,
    {
        let description = condition.to_string();
        Self::new(condition, description, message)
    }

    /// `count > threshold`
    pub fn greater_than(threshold: usize, message: Option<&str>) -> Self {
        Self::described(gt(threshold), message)
    }

    /// `count < threshold`
    pub fn less_than(threshold: usize, message: Option<&str>) -> Self {
        Self::described(lt(threshold), message)
    }

    /// `count >= threshold`
    pub fn greater_or_equal_to(threshold: usize, message: Option<&str>) -> Self {
        Self::described(ge(threshold), message)
    }

    /// `count <= threshold`
    pub fn less_or_equal_to(threshold: usize, message: Option<&str>) -> Self {
        Self::described(le(threshold), message)
    }

    /// `count == 1`
    pub fn exactly_one() -> Self {
        Self::described(eq(1), None)
    }

    /// Human-readable form of the condition.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether `count` satisfies the condition.
    pub fn accepts(&self, count: usize) -> bool {
        self.condition.check(&count)
    }
}

impl<T> CollectionRule<T> for CountRule {
    fn evaluate(&self, items: &[T]) -> Vec<Failure> {
        let count = items.len();
        if self.accepts(count) {
            return Vec::new();
        }

        let template = self.message.as_deref().unwrap_or(DEFAULT_MESSAGE);
        vec![Failure::new(render(
            template,
            &[("count", &count), ("condition", &self.description)],
        ))]
    }
}

impl fmt::Debug for CountRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountRule")
            .field("description", &self.description)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
