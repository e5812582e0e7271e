//! Per-element rule
//!
//! The element rule runs a list of single-element checks against every item
//! of the collection. Checks come in three forms:
//!
//! - a [`RuleSet`]: any single-object validator, used as a whole
//! - a [`PropertyRule`]: predicates over one value selected from the element
//! - a [`ContextRule`]: predicates over an [`ElementContext`], which also
//!   exposes the element's index and the full collection
//!
//! Failures come out element by element, and for each element in check
//! registration order. Failures that do not name an index get the index of
//! the element they were produced for.
//!
//! # Message resolution
//!
//! For property and context checks the message is the first of: the check's
//! own message ([`PropertyRule::with_message`]), the element rule's default
//! message ([`ElementRule::set_message`]), a built-in default. Messages may use
//! `{index}`, and property checks may also use `{property}`.
//!
//! Failures returned by a `RuleSet` keep their message, with two exceptions:
//! an empty message is replaced by the element rule's default message when
//! one is set, and a message containing `{index}` gets the element's index
//! filled in.

use std::fmt;

use super::CollectionRule;
use crate::message::render;
use crate::predicate::Predicate;
use crate::Failure;

const PROPERTY_MESSAGE: &str = "'{property}' is not valid.";
const CONTEXT_MESSAGE: &str = "Element at index {index} is not valid.";

/// A validator for single elements.
///
/// This is the seam for an external single-object validation engine.
/// Closures `Fn(&T) -> Vec<Failure>` implement it, as does [`PropertyRule`].
///
/// # Example
///
/// ```
/// use cohort::rules::RuleSet;
/// use cohort::Failure;
///
/// struct Order {
///     quantity: u32,
/// }
///
/// struct OrderRules;
///
/// impl RuleSet<Order> for OrderRules {
///     fn validate(&self, order: &Order) -> Vec<Failure> {
///         if order.quantity == 0 {
///             vec![Failure::new("quantity must be positive").for_property("quantity")]
///         } else {
///             Vec::new()
///         }
///     }
/// }
///
/// assert_eq!(OrderRules.validate(&Order { quantity: 0 }).len(), 1);
/// ```
pub trait RuleSet<T: ?Sized>: Send + Sync {
    /// Validate one element.
    fn validate(&self, element: &T) -> Vec<Failure>;
}

impl<T: ?Sized, F> RuleSet<T> for F
where
    F: Fn(&T) -> Vec<Failure> + Send + Sync,
{
    fn validate(&self, element: &T) -> Vec<Failure> {
        self(element)
    }
}

/// An element together with its position in the collection.
pub struct ElementContext<'a, T> {
    element: &'a T,
    index: usize,
    collection: &'a [T],
}

impl<'a, T> ElementContext<'a, T> {
    /// Context for `collection[index]`.
    ///
    /// Returns `None` when `index` is out of bounds.
    pub fn new(collection: &'a [T], index: usize) -> Option<Self> {
        collection.get(index).map(|element| Self {
            element,
            index,
            collection,
        })
    }

    /// The element under validation.
    pub fn element(&self) -> &'a T {
        self.element
    }

    /// Position of the element.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The whole collection being validated.
    pub fn collection(&self) -> &'a [T] {
        self.collection
    }

    /// The element before this one, if any.
    pub fn previous(&self) -> Option<&'a T> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.collection.get(i))
    }

    /// The element after this one, if any.
    pub fn next(&self) -> Option<&'a T> {
        self.collection.get(self.index + 1)
    }

    /// True for the first element.
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// True for the last element.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.collection.len()
    }
}

impl<T> Clone for ElementContext<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ElementContext<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for ElementContext<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementContext")
            .field("element", self.element)
            .field("index", &self.index)
            .field("len", &self.collection.len())
            .finish()
    }
}

/// One check the element rule runs against each element.
trait ElementCheck<T>: Send + Sync {
    fn run(&self, context: &ElementContext<'_, T>, fallback: Option<&str>) -> Vec<Failure>;
}

struct Check<F> {
    test: F,
    message: Option<String>,
}

type PropertyTest<T, P> = Box<dyn Fn(&T, &P) -> bool + Send + Sync>;

/// Predicates over a value selected from each element.
///
/// Built inside the callback passed to
/// [`CollectionValidator::element_property`](crate::CollectionValidator::element_property):
///
/// ```
/// use cohort::predicate::{len_max, not_empty};
/// use cohort::CollectionValidator;
///
/// struct Tag {
///     label: String,
/// }
///
/// let mut validator = CollectionValidator::<Tag>::new();
/// validator.element_property("label", |t: &Tag| t.label.clone(), |rule| {
///     rule.must(not_empty())
///         .with_message("label is required")
///         .must(len_max(8))
/// });
///
/// let tags = [Tag { label: String::new() }, Tag { label: "much too long".into() }];
/// let results = validator.validate(&tags).unwrap();
/// assert_eq!(results.messages(), vec!["label is required", "'label' is not valid."]);
/// ```
pub struct PropertyRule<T, P> {
    property: String,
    selector: Box<dyn Fn(&T) -> P + Send + Sync>,
    checks: Vec<Check<PropertyTest<T, P>>>,
}

impl<T, P> PropertyRule<T, P> {
    /// A property rule with no checks yet.
    pub fn new<S>(property: impl Into<String>, selector: S) -> Self
    where
        S: Fn(&T) -> P + Send + Sync + 'static,
    {
        Self {
            property: property.into(),
            selector: Box::new(selector),
            checks: Vec::new(),
        }
    }

    /// Require the selected value to satisfy `predicate`.
    #[must_use]
    pub fn must<Q>(self, predicate: Q) -> Self
    where
        Q: Predicate<P> + 'static,
    {
        self.must_with(move |_: &T, value: &P| predicate.check(value))
    }

    /// Require `test(element, value)` to hold, for checks that need the
    /// whole element as well as the selected value.
    #[must_use]
    pub fn must_with<F>(mut self, test: F) -> Self
    where
        F: Fn(&T, &P) -> bool + Send + Sync + 'static,
    {
        self.checks.push(Check {
            test: Box::new(test),
            message: None,
        });
        self
    }

    /// Set the message of the most recently added check.
    ///
    /// Has no effect before the first [`must`](Self::must).
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        if let Some(last) = self.checks.last_mut() {
            last.message = Some(message.into());
        }
        self
    }

    /// Name of the selected property.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Number of checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// True when no check has been added.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    fn failures_for(&self, element: &T, index: Option<usize>, fallback: Option<&str>) -> Vec<Failure> {
        if self.checks.is_empty() {
            return Vec::new();
        }

        let value = (self.selector)(element);
        self.checks
            .iter()
            .filter(|check| !(check.test)(element, &value))
            .map(|check| {
                let template = check
                    .message
                    .as_deref()
                    .or(fallback)
                    .unwrap_or(PROPERTY_MESSAGE);
                let text = match index {
                    Some(index) => {
                        render(template, &[("property", &self.property), ("index", &index)])
                    }
                    None => render(template, &[("property", &self.property)]),
                };
                Failure::new(text).for_property(self.property.as_str())
            })
            .collect()
    }
}

impl<T, P> RuleSet<T> for PropertyRule<T, P> {
    fn validate(&self, element: &T) -> Vec<Failure> {
        self.failures_for(element, None, None)
    }
}

impl<T, P> ElementCheck<T> for PropertyRule<T, P> {
    fn run(&self, context: &ElementContext<'_, T>, fallback: Option<&str>) -> Vec<Failure> {
        self.failures_for(context.element(), Some(context.index()), fallback)
    }
}

impl<T, P> fmt::Debug for PropertyRule<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyRule")
            .field("property", &self.property)
            .field("checks", &self.checks.len())
            .finish_non_exhaustive()
    }
}

type ContextTest<T> = Box<dyn Fn(&ElementContext<'_, T>) -> bool + Send + Sync>;

/// Predicates over an element and its position in the collection.
///
/// ```
/// use cohort::CollectionValidator;
///
/// let mut validator = CollectionValidator::<u32>::new();
/// validator.element_context(|rule| {
///     rule.must(|ctx| ctx.previous().map_or(true, |prev| prev < ctx.element()))
///         .with_message("item {index} breaks ascending order")
/// });
///
/// let results = validator.validate(&[1, 4, 3, 5]).unwrap();
/// assert_eq!(results.messages(), vec!["item 2 breaks ascending order"]);
/// ```
pub struct ContextRule<T> {
    checks: Vec<Check<ContextTest<T>>>,
}

impl<T> ContextRule<T> {
    /// A context rule with no checks yet.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Require every element's context to satisfy `test`.
    #[must_use]
    pub fn must<F>(mut self, test: F) -> Self
    where
        F: Fn(&ElementContext<'_, T>) -> bool + Send + Sync + 'static,
    {
        self.checks.push(Check {
            test: Box::new(test),
            message: None,
        });
        self
    }

    /// Set the message of the most recently added check.
    ///
    /// Has no effect before the first [`must`](Self::must).
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        if let Some(last) = self.checks.last_mut() {
            last.message = Some(message.into());
        }
        self
    }

    /// Number of checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// True when no check has been added.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl<T> Default for ContextRule<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ElementCheck<T> for ContextRule<T> {
    fn run(&self, context: &ElementContext<'_, T>, fallback: Option<&str>) -> Vec<Failure> {
        self.checks
            .iter()
            .filter(|check| !(check.test)(context))
            .map(|check| {
                let template = check
                    .message
                    .as_deref()
                    .or(fallback)
                    .unwrap_or(CONTEXT_MESSAGE);
                Failure::new(render(template, &[("index", &context.index())]))
            })
            .collect()
    }
}

impl<T> fmt::Debug for ContextRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextRule")
            .field("checks", &self.checks.len())
            .finish()
    }
}

struct RuleSetCheck<R>(R);

impl<T, R: RuleSet<T>> ElementCheck<T> for RuleSetCheck<R> {
    fn run(&self, context: &ElementContext<'_, T>, fallback: Option<&str>) -> Vec<Failure> {
        let index = context.index();
        self.0
            .validate(context.element())
            .into_iter()
            .map(|failure| {
                let text = match fallback {
                    Some(message) if failure.message().is_empty() => {
                        render(message, &[("index", &index)])
                    }
                    _ if failure.message().contains("{index}") => {
                        render(failure.message(), &[("index", &index)])
                    }
                    _ => return failure,
                };
                failure.with_message(text)
            })
            .collect()
    }
}

/// Runs every attached single-element check against each element.
///
/// With no checks attached the rule reports nothing.
pub struct ElementRule<T> {
    checks: Vec<Box<dyn ElementCheck<T>>>,
    message: Option<String>,
}

impl<T> ElementRule<T> {
    /// An element rule with no checks.
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            message: None,
        }
    }

    /// Number of attached checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// True when no check is attached.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// The default message, if one was set.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Set the default message for checks that do not carry their own.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }
}

impl<T: 'static> ElementRule<T> {
    /// Attach a whole-element rule set.
    pub fn add_rule_set<R>(&mut self, rule_set: R)
    where
        R: RuleSet<T> + 'static,
    {
        self.checks.push(Box::new(RuleSetCheck(rule_set)));
    }

    /// Attach a property rule built by `build`.
    pub fn add_property_rule<P, S, B>(&mut self, property: impl Into<String>, selector: S, build: B)
    where
        P: 'static,
        S: Fn(&T) -> P + Send + Sync + 'static,
        B: FnOnce(PropertyRule<T, P>) -> PropertyRule<T, P>,
    {
        let rule = build(PropertyRule::new(property, selector));
        self.checks.push(Box::new(rule));
    }

    /// Attach a context rule built by `build`.
    pub fn add_context_rule<B>(&mut self, build: B)
    where
        B: FnOnce(ContextRule<T>) -> ContextRule<T>,
    {
        let rule = build(ContextRule::new());
        self.checks.push(Box::new(rule));
    }
}

impl<T> Default for ElementRule<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectionRule<T> for ElementRule<T> {
    fn evaluate(&self, items: &[T]) -> Vec<Failure> {
        let mut failures = Vec::new();
        if self.checks.is_empty() {
            return failures;
        }

        let fallback = self.message.as_deref();
        for (index, element) in items.iter().enumerate() {
            let context = ElementContext {
                element,
                index,
                collection: items,
            };
            for check in &self.checks {
                failures.extend(check.run(&context, fallback).into_iter().map(|failure| {
                    if failure.index().is_some() {
                        failure
                    } else {
                        failure.at_index(index)
                    }
                }));
            }
        }
        failures
    }
}

impl<T> fmt::Debug for ElementRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRule")
            .field("checks", &self.checks.len())
            .field("message", &self.message)
            .finish()
    }
}
