//! The collection validator
//!
//! A [`CollectionValidator`] is configured once through `&mut self` methods,
//! then evaluated any number of times through `&self`. Evaluation runs the
//! element rule first, followed by the structural rules in the order they
//! were added. Every rule runs, and the failures of all rules are
//! concatenated in that order.
//!
//! # Example
//!
//! ```
//! use cohort::predicate::not_empty;
//! use cohort::{key, CollectionValidator};
//!
//! #[derive(Debug)]
//! struct Member {
//!     id: u32,
//!     name: String,
//! }
//!
//! let mut validator = CollectionValidator::<Member>::new();
//! validator
//!     .count_greater_than(0, Some("a team needs members"))
//!     .unique_by_key(None, key("id", |m: &Member| m.id))
//!     .element_property("name", |m: &Member| m.name.clone(), |rule| rule.must(not_empty()));
//!
//! let team = vec![
//!     Member { id: 1, name: "Ada".into() },
//!     Member { id: 1, name: String::new() },
//! ];
//!
//! let results = validator.validate(&team).unwrap();
//! assert_eq!(
//!     results.messages(),
//!     vec![
//!         "'name' is not valid.",
//!         "Collection contains a duplicate item at index 1 by key(s) id.",
//!     ]
//! );
//! ```
//!
//! # Messages
//!
//! Every `message` argument is a template rendered by
//! [`message::render`](crate::message::render), custom messages included.
//! Placeholders such as `{index}` are filled in, and a literal brace must be
//! written `{{` or `}}`.

use std::fmt;
use std::hash::Hash;

use crate::error::ConfigError;
use crate::predicate::Predicate;
use crate::rules::{
    CollectionRule, ContextRule, CountRule, ElementRule, KeySelector, PropertyRule, RuleSet,
    UniqueRule,
};
use crate::{NonEmptyVec, ValidationResults};

/// Validates a collection against an ordered list of rules.
///
/// `CollectionValidator<T>` is `Send + Sync`, so a configured validator can be
/// shared and used from several threads at once.
pub struct CollectionValidator<T> {
    element: Option<ElementRule<T>>,
    rules: Vec<Box<dyn CollectionRule<T>>>,
}

impl<T> CollectionValidator<T> {
    /// A validator holding only the per-element rule, which reports nothing
    /// until checks are attached to it.
    pub fn new() -> Self {
        Self {
            element: Some(ElementRule::new()),
            rules: Vec::new(),
        }
    }

    /// A validator with no rules at all.
    ///
    /// Validating with it fails with [`ConfigError::NotConfigured`] until a
    /// rule is added.
    pub fn empty() -> Self {
        Self {
            element: None,
            rules: Vec::new(),
        }
    }

    /// Number of registered rules, the element rule included.
    pub fn rule_count(&self) -> usize {
        self.rules.len() + usize::from(self.element.is_some())
    }

    fn element_rule(&mut self) -> &mut ElementRule<T> {
        self.element.get_or_insert_with(ElementRule::new)
    }

    /// Set the default message for element checks that carry none.
    ///
    /// The message may use `{index}`, and for property checks `{property}`.
    pub fn element_validation_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.element_rule().set_message(message);
        self
    }

    /// Fail unless `count > threshold`.
    pub fn count_greater_than(&mut self, threshold: usize, message: Option<&str>) -> &mut Self {
        self.push(CountRule::greater_than(threshold, message))
    }

    /// Fail unless `count < threshold`.
    pub fn count_less_than(&mut self, threshold: usize, message: Option<&str>) -> &mut Self {
        self.push(CountRule::less_than(threshold, message))
    }

    /// Fail unless `count >= threshold`.
    pub fn count_greater_or_equal_to(
        &mut self,
        threshold: usize,
        message: Option<&str>,
    ) -> &mut Self {
        self.push(CountRule::greater_or_equal_to(threshold, message))
    }

    /// Fail unless `count <= threshold`.
    pub fn count_less_or_equal_to(&mut self, threshold: usize, message: Option<&str>) -> &mut Self {
        self.push(CountRule::less_or_equal_to(threshold, message))
    }

    /// Fail unless the count satisfies `condition`.
    ///
    /// `description` fills `{condition}` in the message.
    ///
    /// ```
    /// use cohort::CollectionValidator;
    ///
    /// let mut pairs = CollectionValidator::<char>::new();
    /// pairs.count_condition(|n: &usize| n % 2 == 0, "even", None);
    ///
    /// let results = pairs.validate(&['a', 'b', 'c']).unwrap();
    /// assert_eq!(results.messages(), vec!["Collection count must be even but was 3."]);
    /// ```
    pub fn count_condition<P>(
        &mut self,
        condition: P,
        description: impl Into<String>,
        message: Option<&str>,
    ) -> &mut Self
    where
        P: Predicate<usize> + 'static,
    {
        self.push(CountRule::new(condition, description, message))
    }

    /// Fail unless the collection holds exactly one element.
    pub fn single(&mut self) -> &mut Self {
        self.push(CountRule::exactly_one())
    }

    fn push<R>(&mut self, rule: R) -> &mut Self
    where
        R: CollectionRule<T> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Run every rule against `items`.
    ///
    /// Returns [`ConfigError::NotConfigured`] when the validator holds no
    /// rule. Validation failures are never errors; they are reported in the
    /// returned [`ValidationResults`].
    pub fn validate(&self, items: &[T]) -> Result<ValidationResults, ConfigError> {
        if self.element.is_none() && self.rules.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!("collection validator has no rules");
            return Err(ConfigError::NotConfigured);
        }

        let mut rules: Vec<&dyn CollectionRule<T>> = Vec::with_capacity(self.rule_count());
        if let Some(element) = &self.element {
            rules.push(element);
        }
        for rule in &self.rules {
            rules.push(rule.as_ref());
        }

        let mut failures = Vec::new();
        for rule in rules {
            let found = rule.evaluate(items);
            #[cfg(feature = "tracing")]
            tracing::trace!(failures = found.len(), "evaluated rule");
            failures.extend(found);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            rules = self.rule_count(),
            items = items.len(),
            failures = failures.len(),
            "validated collection"
        );

        Ok(ValidationResults::new(failures))
    }
}

impl<T: 'static> CollectionValidator<T> {
    /// Append a caller-defined rule.
    pub fn rule<R>(&mut self, rule: R) -> &mut Self
    where
        R: CollectionRule<T> + 'static,
    {
        self.push(rule)
    }

    /// Fail for every element whose keys all equal those of an earlier one.
    pub fn unique_by(&mut self, message: Option<&str>, keys: NonEmptyVec<KeySelector<T>>) -> &mut Self {
        self.push(UniqueRule::by_keys(keys, message))
    }

    /// [`unique_by`](Self::unique_by) with a single key.
    pub fn unique_by_key(&mut self, message: Option<&str>, key: KeySelector<T>) -> &mut Self {
        self.unique_by(message, NonEmptyVec::singleton(key))
    }

    /// Validate every element with `rule_set`.
    pub fn element_validation<R>(&mut self, rule_set: R) -> &mut Self
    where
        R: RuleSet<T> + 'static,
    {
        self.element_rule().add_rule_set(rule_set);
        self
    }

    /// Check a selected property of every element.
    ///
    /// `build` receives an empty [`PropertyRule`] and adds checks to it.
    pub fn element_property<P, S, B>(
        &mut self,
        property: impl Into<String>,
        selector: S,
        build: B,
    ) -> &mut Self
    where
        P: 'static,
        S: Fn(&T) -> P + Send + Sync + 'static,
        B: FnOnce(PropertyRule<T, P>) -> PropertyRule<T, P>,
    {
        self.element_rule().add_property_rule(property, selector, build);
        self
    }

    /// Check every element together with its index and the full collection.
    ///
    /// `build` receives an empty [`ContextRule`] and adds checks to it.
    pub fn element_context<B>(&mut self, build: B) -> &mut Self
    where
        B: FnOnce(ContextRule<T>) -> ContextRule<T>,
    {
        self.element_rule().add_context_rule(build);
        self
    }
}

impl<T: Eq + Hash + 'static> CollectionValidator<T> {
    /// Fail for every element equal to an earlier one.
    pub fn unique(&mut self, message: Option<&str>) -> &mut Self {
        self.push(UniqueRule::by_value(message))
    }
}

impl<T> Default for CollectionValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for CollectionValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionValidator")
            .field("element", &self.element)
            .field("rules", &self.rules.len())
            .finish()
    }
}
