//! Per-element validation of list fields.

use pretty_assertions::assert_eq;
use serde_json::json;
use verity_validator::prelude::*;

use crate::fixtures::{keys, names};

#[derive(Debug, Clone)]
struct Item {
    sku: String,
    quantity: u32,
}

#[derive(Debug, Clone)]
struct Order {
    id: String,
    items: Vec<Item>,
    notes: Option<Vec<String>>,
}

fn item_validator() -> Validator<Item> {
    ValidatorBuilder::<Item>::new()
        .constraint("sku", |i| &i.sku, |c| c.not_blank())
        .constraint("quantity", |i| &i.quantity, |c| c.greater_than(0))
        .build()
}

fn line(sku: &str, quantity: u32) -> Item {
    Item {
        sku: sku.into(),
        quantity,
    }
}

#[test]
fn element_violations_carry_indexed_paths() {
    let validator = ValidatorBuilder::<Order>::new()
        .constraint("id", |o| &o.id, |c| c.not_blank())
        .for_each("items", |o| o.items.as_slice(), item_validator())
        .build();

    let order = Order {
        id: "A-1".into(),
        items: vec![line("X", 1), line("", 2), line("Y", 0)],
        notes: None,
    };

    let violations = validator.validate(&order);
    assert_eq!(
        names(&violations),
        ["items[1].sku", "items[2].quantity"]
    );
    assert_eq!(
        violations.messages(),
        [
            "\"items[1].sku\" must not be blank",
            "\"items[2].quantity\" must be greater than 0",
        ]
    );
}

#[test]
fn list_rules_run_before_element_rules() {
    // Field rules come first even when declared after the collection.
    let validator = ValidatorBuilder::<Order>::new()
        .for_each("items", |o| o.items.as_slice(), item_validator())
        .constraint("items", |o| &o.items, |c| c.max_size(1))
        .build();

    let order = Order {
        id: "A-2".into(),
        items: vec![line("", 1), line("Z", 1)],
        notes: None,
    };

    let violations = validator.validate(&order);
    assert_eq!(names(&violations), ["items", "items[0].sku"]);
    assert_eq!(
        keys(&violations),
        ["container.lessThanOrEqual", "charSequence.notBlank"]
    );
    assert_eq!(violations.violations()[0].args(), &[json!(2), json!(1)]);
}

#[test]
fn empty_and_absent_lists_produce_nothing() {
    let notes = ValidatorBuilder::<String>::new()
        .constraint_on_target("value", "note.short", "\"{0}\" is too long", |s| s.len() <= 5)
        .build();

    let validator = ValidatorBuilder::<Order>::new()
        .for_each("items", |o| o.items.as_slice(), item_validator())
        .for_each_if_present("notes", |o| o.notes.as_deref(), notes)
        .build();

    let mut order = Order {
        id: "A-3".into(),
        items: Vec::new(),
        notes: None,
    };
    assert!(validator.validate(&order).is_valid());

    order.notes = Some(vec!["ok".into(), "much too long".into()]);
    let violations = validator.validate(&order);
    assert_eq!(names(&violations), ["notes[1].value"]);
    assert_eq!(keys(&violations), ["note.short"]);
}

#[test]
fn fail_fast_stops_after_first_failing_element() {
    let validator = ValidatorBuilder::<Order>::new()
        .for_each("items", |o| o.items.as_slice(), item_validator())
        .fail_fast(true)
        .build();

    let order = Order {
        id: "A-4".into(),
        items: vec![line("ok", 1), line("", 0), line("", 0)],
        notes: None,
    };

    let violations = validator.validate(&order);
    assert_eq!(names(&violations), ["items[1].sku"]);
}

#[test]
fn unique_reports_the_duplicates() {
    struct Tags {
        tags: Vec<String>,
    }

    let validator = ValidatorBuilder::<Tags>::new()
        .constraint("tags", |t| &t.tags, |c| c.unique())
        .build();

    let violations = validator.validate(&Tags {
        tags: vec!["a".into(), "b".into(), "a".into()],
    });
    assert_eq!(keys(&violations), ["collection.unique"]);
    assert_eq!(violations.violations()[0].args(), &[json!(["\"a\""])]);
}

#[test]
fn scalar_elements_are_named_by_index() {
    struct Scores {
        scores: Vec<i32>,
    }

    let score = ValidatorBuilder::<i32>::new()
        .constraint("", |s| s, |c| c.positive())
        .build();
    let validator = ValidatorBuilder::<Scores>::new()
        .for_each("scores", |s| s.scores.as_slice(), score)
        .build();

    let violations = validator.validate(&Scores {
        scores: vec![3, 0, -1],
    });
    assert_eq!(names(&violations), ["scores[1]", "scores[2]"]);
    assert_eq!(violations.messages()[0], "\"scores[1]\" must be positive");
}
