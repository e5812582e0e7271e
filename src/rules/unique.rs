//! Uniqueness rule
//!
//! Elements are partitioned into equivalence classes, either by full value
//! equality or by a set of derived keys. Every element after the first in
//! its class is reported, so a value occurring `n` times yields `n - 1`
//! failures. Failures come out in collection order and carry the index of
//! the repeated element.
//!
//! # Examples
//!
//! ```
//! use cohort::rules::{key, CollectionRule, UniqueRule};
//! use cohort::NonEmptyVec;
//!
//! struct Row {
//!     id: u32,
//!     name: &'static str,
//! }
//!
//! let rows = [Row { id: 1, name: "a" }, Row { id: 2, name: "a" }];
//!
//! let by_name = UniqueRule::by_keys(NonEmptyVec::singleton(key("name", |r: &Row| r.name)), None);
//! let by_id = UniqueRule::by_keys(NonEmptyVec::singleton(key("id", |r: &Row| r.id)), None);
//!
//! assert_eq!(by_name.evaluate(&rows).len(), 1);
//! assert!(by_id.evaluate(&rows).is_empty());
//! ```

use std::any::Any;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::CollectionRule;
use crate::message::render;
use crate::{Failure, NonEmptyVec};

const VALUE_MESSAGE: &str = "Collection contains a duplicate item at index {index}.";
const KEYS_MESSAGE: &str = "Collection contains a duplicate item at index {index} by key(s) {keys}.";

/// A named function deriving one uniqueness key from an element.
///
/// Build one with [`key`].
pub struct KeySelector<T> {
    name: String,
    extract: Box<dyn Fn(&T) -> Box<dyn DynKey> + Send + Sync>,
}

impl<T> KeySelector<T> {
    /// The name used in failure messages.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> fmt::Debug for KeySelector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySelector")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Create a key selector.
///
/// Key types may differ between selectors of the same rule. `Option` keys
/// work as expected: two `None`s are equal.
///
/// # Example
///
/// ```
/// use cohort::rules::key;
///
/// struct User {
///     email: Option<String>,
/// }
///
/// let by_email = key("email", |u: &User| u.email.clone());
/// assert_eq!(by_email.name(), "email");
/// ```
pub fn key<T, K, F>(name: impl Into<String>, selector: F) -> KeySelector<T>
where
    T: 'static,
    K: Eq + Hash + Send + Sync + 'static,
    F: Fn(&T) -> K + Send + Sync + 'static,
{
    KeySelector {
        name: name.into(),
        extract: Box::new(move |item: &T| -> Box<dyn DynKey> { Box::new(selector(item)) }),
    }
}

/// Object-safe view of an `Eq + Hash` key.
trait DynKey: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn dyn_eq(&self, other: &dyn DynKey) -> bool;
    fn dyn_hash(&self, state: &mut dyn Hasher);
}

impl<K> DynKey for K
where
    K: Eq + Hash + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn DynKey) -> bool {
        other.as_any().downcast_ref::<K>() == Some(self)
    }

    fn dyn_hash(&self, mut state: &mut dyn Hasher) {
        self.hash(&mut state);
    }
}

/// The tuple of all selected keys for one element.
struct CompositeKey(Vec<Box<dyn DynKey>>);

impl PartialEq for CompositeKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self.0.iter().zip(&other.0).all(|(a, b)| a.dyn_eq(&**b))
    }
}

impl Eq for CompositeKey {}

impl Hash for CompositeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for part in &self.0 {
            part.dyn_hash(state);
        }
    }
}

enum Equivalence<T> {
    Value(fn(&[T]) -> Vec<usize>),
    Keys(NonEmptyVec<KeySelector<T>>),
}

/// Reports repeated elements.
pub struct UniqueRule<T> {
    equivalence: Equivalence<T>,
    message: Option<String>,
}

impl<T: Eq + Hash> UniqueRule<T> {
    /// Duplicates are elements equal to an earlier element.
    pub fn by_value(message: Option<&str>) -> Self {
        Self {
            equivalence: Equivalence::Value(duplicates_by_value::<T>),
            message: message.map(str::to_owned),
        }
    }
}

impl<T> UniqueRule<T> {
    /// Duplicates are elements whose keys all equal those of an earlier element.
    pub fn by_keys(keys: NonEmptyVec<KeySelector<T>>, message: Option<&str>) -> Self {
        Self {
            equivalence: Equivalence::Keys(keys),
            message: message.map(str::to_owned),
        }
    }

    /// Comma-separated key names, or `None` for value equality.
    pub fn key_names(&self) -> Option<String> {
        match &self.equivalence {
            Equivalence::Value(_) => None,
            Equivalence::Keys(keys) => Some(
                keys.iter()
                    .map(KeySelector::name)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }

    fn duplicates(&self, items: &[T]) -> Vec<usize> {
        match &self.equivalence {
            Equivalence::Value(scan) => scan(items),
            Equivalence::Keys(keys) => duplicate_indices(items, |item| {
                CompositeKey(keys.iter().map(|k| (k.extract)(item)).collect())
            }),
        }
    }
}

impl<T> CollectionRule<T> for UniqueRule<T> {
    fn evaluate(&self, items: &[T]) -> Vec<Failure> {
        let keys = self.key_names();
        let template = match (&self.message, &keys) {
            (Some(custom), _) => custom.as_str(),
            (None, None) => VALUE_MESSAGE,
            (None, Some(_)) => KEYS_MESSAGE,
        };
        let key_text = keys.as_deref().unwrap_or("value");

        self.duplicates(items)
            .into_iter()
            .map(|index| {
                let failure =
                    Failure::new(render(template, &[("index", &index), ("keys", &key_text)]))
                        .at_index(index);
                match &keys {
                    Some(names) => failure.for_property(names.as_str()),
                    None => failure,
                }
            })
            .collect()
    }
}

impl<T> fmt::Debug for UniqueRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueRule")
            .field("keys", &self.key_names())
            .field("message", &self.message)
            .finish()
    }
}

fn duplicates_by_value<T: Eq + Hash>(items: &[T]) -> Vec<usize> {
    duplicate_indices(items, |item| item)
}

/// Indices of elements whose key was already produced by an earlier element.
fn duplicate_indices<'a, T, K, F>(items: &'a [T], key_of: F) -> Vec<usize>
where
    K: Eq + Hash,
    F: Fn(&'a T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| (!seen.insert(key_of(item))).then_some(index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Person {
        id: u32,
        name: &'static str,
        team: Option<&'static str>,
    }

    fn person(id: u32, name: &'static str) -> Person {
        Person {
            id,
            name,
            team: None,
        }
    }

    fn indices(failures: &[Failure]) -> Vec<Option<usize>> {
        failures.iter().map(Failure::index).collect()
    }

    #[test]
    fn test_value_duplicates_reported_once_per_extra() {
        let rule = UniqueRule::by_value(None);
        let failures = rule.evaluate(&[1, 2, 2, 3]);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].index(), Some(2));
        assert_eq!(
            failures[0].message(),
            "Collection contains a duplicate item at index 2."
        );
        assert_eq!(failures[0].property(), None);
    }

    #[test]
    fn test_n_occurrences_yield_n_minus_one() {
        let rule = UniqueRule::by_value(None);
        assert_eq!(rule.evaluate(&["x", "x", "x", "x"]).len(), 3);
    }

    #[test]
    fn test_failures_follow_collection_order() {
        let rule = UniqueRule::by_value(None);
        let failures = rule.evaluate(&[5, 7, 7, 5, 9, 5]);
        assert_eq!(indices(&failures), vec![Some(2), Some(3), Some(5)]);
    }

    #[test]
    fn test_empty_and_single() {
        let rule = UniqueRule::<i32>::by_value(None);
        assert!(rule.evaluate(&[]).is_empty());
        assert!(rule.evaluate(&[1]).is_empty());
    }

    #[test]
    fn test_by_single_key() {
        let people = [person(1, "a"), person(2, "a")];
        let by_name = UniqueRule::by_keys(NonEmptyVec::singleton(key("name", |p: &Person| p.name)), None);
        let by_id = UniqueRule::by_keys(NonEmptyVec::singleton(key("id", |p: &Person| p.id)), None);

        let failures = by_name.evaluate(&people);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].property(), Some("name"));
        assert_eq!(
            failures[0].message(),
            "Collection contains a duplicate item at index 1 by key(s) name."
        );
        assert!(by_id.evaluate(&people).is_empty());
    }

    #[test]
    fn test_all_keys_must_match() {
        let people = [person(1, "a"), person(2, "a"), person(1, "b"), person(1, "a")];
        let rule = UniqueRule::by_keys(
            NonEmptyVec::new(
                key("id", |p: &Person| p.id),
                vec![key("name", |p: &Person| p.name.to_string())],
            ),
            None,
        );
        let failures = rule.evaluate(&people);
        assert_eq!(indices(&failures), vec![Some(3)]);
        assert_eq!(failures[0].property(), Some("id, name"));
    }

    #[test]
    fn test_absent_keys_form_a_class() {
        let mut people = vec![person(1, "a"), person(2, "b"), person(3, "c")];
        people[2].team = Some("red");
        let rule = UniqueRule::by_keys(NonEmptyVec::singleton(key("team", |p: &Person| p.team)), None);
        assert_eq!(indices(&rule.evaluate(&people)), vec![Some(1)]);
    }

    #[test]
    fn test_different_key_types_never_collide() {
        let rule = UniqueRule::by_keys(
            NonEmptyVec::new(
                key("as_u32", |n: &u32| *n),
                vec![key("as_i64", |n: &u32| i64::from(*n))],
            ),
            None,
        );
        assert_eq!(indices(&rule.evaluate(&[1, 2, 1])), vec![Some(2)]);
    }

    #[test]
    fn test_custom_message_with_placeholders() {
        let rule = UniqueRule::by_keys(
            NonEmptyVec::singleton(key("name", |p: &Person| p.name)),
            Some("{keys} repeated at row {index}"),
        );
        let failures = rule.evaluate(&[person(1, "a"), person(2, "a")]);
        assert_eq!(failures[0].message(), "name repeated at row 1");
    }

    #[test]
    fn test_plain_custom_message() {
        let rule = UniqueRule::by_value(Some("no repeats"));
        assert_eq!(rule.evaluate(&['a', 'a'])[0].message(), "no repeats");
    }

    #[test]
    fn test_key_names() {
        assert_eq!(UniqueRule::<u8>::by_value(None).key_names(), None);
        let keyed = UniqueRule::by_keys(NonEmptyVec::singleton(key("id", |p: &Person| p.id)), None);
        assert_eq!(keyed.key_names().as_deref(), Some("id"));
        assert!(format!("{:?}", keyed).contains("id"));
    }
}
