//! Integration tests for collection validation through the public API

use cohort::predicate::{gt, len_between, not_empty, PredicateExt};
use cohort::prelude::*;
use cohort::{assert_failure_messages, assert_invalid, assert_valid};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Person {
    id: u32,
    name: String,
    email: Option<String>,
}

fn person(id: u32, name: &str) -> Person {
    Person {
        id,
        name: name.to_string(),
        email: None,
    }
}

#[test]
fn duplicate_value_in_integers() {
    let mut validator = CollectionValidator::new();
    validator.unique(None);

    let results = validator.validate(&[1, 2, 2, 3]).unwrap();
    assert_invalid!(results, 1);
    assert_eq!(results.failures()[0].index(), Some(2));
}

#[test]
fn count_limits_on_empty_collection() {
    let empty: Vec<Person> = Vec::new();

    let mut required = CollectionValidator::new();
    required.count_greater_than(0, None);
    assert_failure_messages!(
        required.validate(&empty).unwrap(),
        ["Collection count must be greater than 0 but was 0."]
    );

    let mut optional = CollectionValidator::new();
    optional.count_greater_or_equal_to(0, None);
    assert_valid!(optional.validate(&empty).unwrap());
}

#[test]
fn single_rejects_three_elements() {
    let mut validator = CollectionValidator::new();
    validator.single();

    let results = validator
        .validate(&[person(1, "a"), person(2, "b"), person(3, "c")])
        .unwrap();
    assert_failure_messages!(results, ["Collection count must be equal to 1 but was 3."]);
    assert_eq!(results.failures()[0].index(), None);
}

#[test]
fn unique_by_name_but_not_by_id() {
    let people = [person(1, "a"), person(2, "a")];

    let mut by_name = CollectionValidator::new();
    by_name.unique_by_key(None, key("name", |p: &Person| p.name.clone()));
    let results = by_name.validate(&people).unwrap();
    assert_invalid!(results, 1);
    assert_eq!(results.failures()[0].property(), Some("name"));

    let mut by_id = CollectionValidator::new();
    by_id.unique_by_key(None, key("id", |p: &Person| p.id));
    assert_valid!(by_id.validate(&people).unwrap());
}

#[test]
fn composite_key_requires_every_key_to_match() {
    let people = [
        person(1, "a"),
        person(1, "b"),
        person(2, "a"),
        person(1, "a"),
    ];

    let mut validator = CollectionValidator::new();
    validator.unique_by(
        Some("row {index} repeats ({keys})"),
        NonEmptyVec::new(
            key("id", |p: &Person| p.id),
            vec![key("name", |p: &Person| p.name.clone())],
        ),
    );

    assert_failure_messages!(
        validator.validate(&people).unwrap(),
        ["row 3 repeats (id, name)"]
    );
}

#[test]
fn missing_optional_keys_count_as_equal() {
    let mut with_email = person(3, "c");
    with_email.email = Some("c@example.com".to_string());
    let people = [person(1, "a"), person(2, "b"), with_email];

    let mut validator = CollectionValidator::new();
    validator.unique_by_key(None, key("email", |p: &Person| p.email.clone()));

    let results = validator.validate(&people).unwrap();
    assert_invalid!(results, 1);
    assert_eq!(results.failures()[0].index(), Some(1));
}

#[test]
fn every_rule_kind_together_in_registration_order() {
    let mut validator = CollectionValidator::new();
    validator
        .count_less_than(3, Some("at most two people"))
        .unique_by_key(Some("duplicate id at {index}"), key("id", |p: &Person| p.id))
        .element_property("name", |p: &Person| p.name.clone(), |rule| {
            rule.must(not_empty())
                .with_message("person {index} needs a name")
                .must(len_between(0, 10))
        })
        .element_property("id", |p: &Person| p.id, |rule| rule.must(gt(0)));

    let people = [person(0, ""), person(0, "b"), person(5, "c")];
    let results = validator.validate(&people).unwrap();

    assert_failure_messages!(
        results,
        [
            "person 0 needs a name",
            "'id' is not valid.",
            "'id' is not valid.",
            "at most two people",
            "duplicate id at 1",
        ]
    );
}

#[test]
fn element_rule_set_and_default_message() {
    let mut validator = CollectionValidator::new();
    validator
        .element_validation(|p: &Person| {
            let mut failures = Vec::new();
            if p.name.is_empty() {
                failures.push(Failure::new("").for_property("name"));
            }
            if p.email.as_deref().is_some_and(|e| !e.contains('@')) {
                failures.push(Failure::new("email is malformed").for_property("email"));
            }
            failures
        })
        .element_validation_message("person {index} is incomplete");

    let mut bad_email = person(2, "b");
    bad_email.email = Some("nope".to_string());
    let results = validator
        .validate(&[person(1, ""), bad_email, person(3, "c")])
        .unwrap();

    assert_eq!(
        results.failures(),
        &[
            Failure::new("person 0 is incomplete")
                .at_index(0)
                .for_property("name"),
            Failure::new("email is malformed")
                .at_index(1)
                .for_property("email"),
        ]
    );
}

#[test]
fn context_rule_compares_with_neighbours() {
    let mut validator = CollectionValidator::<Person>::new();
    validator.element_context(|rule| {
        rule.must(|ctx| ctx.next().map_or(true, |next| next.id > ctx.element().id))
            .with_message("ids must increase after index {index}")
    });

    let results = validator
        .validate(&[person(1, "a"), person(4, "b"), person(2, "c"), person(9, "d")])
        .unwrap();
    assert_failure_messages!(results, ["ids must increase after index 1"]);
}

#[test]
fn count_condition_with_combined_predicate() {
    let mut validator = CollectionValidator::new();
    validator.count_condition(gt(1usize).and(|n: &usize| n % 2 == 0), "an even number above 1", None);

    assert_valid!(validator.validate(&[1, 2]).unwrap());
    assert_failure_messages!(
        validator.validate(&[1, 2, 3]).unwrap(),
        ["Collection count must be an even number above 1 but was 3."]
    );
}

#[test]
fn empty_validator_reports_configuration_error() {
    let validator = CollectionValidator::<Person>::empty();
    let err = validator.validate(&[]).unwrap_err();
    assert_eq!(err, ConfigError::NotConfigured);
    assert_eq!(err.to_string(), "Collection validator not configured.");
}

#[test]
fn results_feed_validation_accumulation() {
    let mut ids = CollectionValidator::new();
    ids.unique(None);
    let mut names = CollectionValidator::new();
    names.count_greater_than(0, None);

    let combined = ids
        .validate(&[7, 7])
        .unwrap()
        .into_validation(())
        .and(names.validate(&Vec::<String>::new()).unwrap().into_validation(()));

    match combined {
        Validation::Failure(failures) => assert_eq!(failures.len(), 2),
        Validation::Success(_) => panic!("expected both failures to be kept"),
    }
}

#[test]
fn results_display_one_failure_per_line() {
    let mut validator = CollectionValidator::new();
    validator.unique(Some("dup")).count_less_than(2, Some("too many"));

    let text = validator.validate(&["x", "x"]).unwrap().to_string();
    assert_eq!(text.lines().collect::<Vec<_>>(), vec!["[1]: dup", "too many"]);
}

#[cfg(feature = "serde")]
#[test]
fn results_serialize_as_failure_list() {
    let mut validator = CollectionValidator::new();
    validator.unique(None);
    let results = validator.validate(&[1, 1]).unwrap();

    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "message": "Collection contains a duplicate item at index 1.",
            "index": 1,
            "property": null
        }])
    );
}
