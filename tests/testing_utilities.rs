//! Tests for the testing utilities as a downstream crate would use them.

use cohort::prelude::*;
use cohort::{assert_failure_messages, assert_invalid, assert_valid};

#[derive(Debug, Clone, PartialEq)]
struct Shipment {
    tracking: String,
    weight_kg: u32,
}

fn shipment(tracking: &str, weight_kg: u32) -> Shipment {
    Shipment {
        tracking: tracking.to_string(),
        weight_kg,
    }
}

fn manifest_validator() -> CollectionValidator<Shipment> {
    let mut validator = CollectionValidator::new();
    validator
        .count_less_or_equal_to(3, Some("a manifest holds at most {condition}"))
        .unique_by_key(None, key("tracking", |s: &Shipment| s.tracking.clone()))
        .element_property("weight_kg", |s: &Shipment| s.weight_kg, |rule| {
            rule.must(|w: &u32| *w <= 1_000)
                .with_message("shipment {index} is over the weight limit")
        });
    validator
}

#[test]
fn valid_manifest() {
    let results = manifest_validator()
        .validate(&[shipment("T1", 10), shipment("T2", 900)])
        .unwrap();
    assert_valid!(results);
}

#[test]
fn invalid_manifest_counts_every_failure() {
    let results = manifest_validator()
        .validate(&[
            shipment("T1", 10),
            shipment("T1", 2_000),
            shipment("T3", 1),
            shipment("T4", 1),
        ])
        .unwrap();

    assert_invalid!(results);
    assert_invalid!(results, 3);
    assert_failure_messages!(
        results,
        [
            "shipment 1 is over the weight limit",
            "a manifest holds at most less than or equal to 3",
            "Collection contains a duplicate item at index 1 by key(s) tracking.",
        ]
    );
}

#[test]
#[should_panic(expected = "Expected valid collection")]
fn assert_valid_reports_failures() {
    let results = manifest_validator()
        .validate(&[shipment("T1", 1), shipment("T1", 1)])
        .unwrap();
    assert_valid!(results);
}

#[test]
fn results_as_validation() {
    let batch = [shipment("T9", 5)];
    let validated = manifest_validator()
        .validate(&batch)
        .unwrap()
        .into_validation(batch.len());
    assert_eq!(validated, Validation::Success(1));
}
