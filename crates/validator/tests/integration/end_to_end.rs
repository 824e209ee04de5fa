//! Full passes over a small domain model.

use pretty_assertions::assert_eq;
use serde_json::json;
use verity_validator::prelude::*;

use crate::fixtures::{Address, Person, keys, names, person_validator};

// ============================================================================
// SINGLE FIELD
// ============================================================================

#[test]
fn negative_age_reports_field_key_and_args() {
    struct Adult {
        age: i32,
    }

    let validator = ValidatorBuilder::<Adult>::new()
        .constraint("age", |a| &a.age, |c| c.greater_than_or_equal(0))
        .build();

    let violations = validator.validate(&Adult { age: -1 });

    assert!(!violations.is_valid());
    assert_eq!(violations.len(), 1);
    let violation = &violations.violations()[0];
    assert_eq!(violation.name(), "age");
    assert_eq!(violation.message_key(), "number.greaterThanOrEqual");
    assert_eq!(violation.args(), &[json!(-1), json!(0)]);
    assert_eq!(
        violations.messages(),
        ["\"age\" must be greater than or equal to 0"]
    );
}

#[test]
fn valid_person_has_no_violations() {
    let violations = person_validator().validate(&Person::valid());
    assert!(violations.is_valid());
    assert!(violations.is_empty());
}

// ============================================================================
// ACCUMULATION
// ============================================================================

#[test]
fn every_violation_is_reported_in_declaration_order() {
    let person = Person {
        name: " ".into(),
        email: Some("nope".into()),
        age: 200,
        address: Some(Address {
            city: String::new(),
            zip: "1".into(),
        }),
    };

    let violations = person_validator().validate(&person);

    assert_eq!(
        names(&violations),
        ["name", "email", "age", "address.city", "address.zip"]
    );
    assert_eq!(
        keys(&violations),
        [
            "charSequence.notBlank",
            "charSequence.email",
            "number.lessThan",
            "charSequence.notBlank",
            "container.fixedSize",
        ]
    );
}

#[test]
fn predicates_on_one_field_do_not_short_circuit() {
    struct Code {
        value: String,
    }

    let validator = ValidatorBuilder::<Code>::new()
        .constraint(
            "value",
            |c| &c.value,
            |c| c.not_empty().min_length(4).starts_with("X"),
        )
        .build();

    let violations = validator.validate(&Code {
        value: String::new(),
    });
    assert_eq!(
        keys(&violations),
        [
            "charSequence.notEmpty",
            "container.greaterThanOrEqual",
            "charSequence.startsWith",
        ]
    );
}

#[test]
fn absent_optional_fields_are_skipped_unless_required() {
    let person = Person {
        email: None,
        address: None,
        ..Person::valid()
    };
    assert!(person_validator().validate(&person).is_valid());

    let strict = ValidatorBuilder::<Person>::new()
        .constraint_opt("email", |p| p.email.as_ref(), |c| c.not_null().email())
        .build();
    let violations = strict.validate(&person);
    assert_eq!(keys(&violations), ["object.notNull"]);
    assert_eq!(violations.violations()[0].args(), &[json!(null)]);
}

// ============================================================================
// FAIL FAST
// ============================================================================

#[test]
fn fail_fast_stops_at_first_violation() {
    struct Pair {
        a: i32,
        b: i32,
    }

    let validator = ValidatorBuilder::<Pair>::new()
        .constraint("a", |p| &p.a, |c| c.positive().greater_than(10))
        .constraint("b", |p| &p.b, |c| c.positive())
        .fail_fast(true)
        .build();

    let violations = validator.validate(&Pair { a: -1, b: -1 });
    assert_eq!(names(&violations), ["a"]);
    assert_eq!(keys(&violations), ["number.positive"]);
}

// ============================================================================
// OUTPUT
// ============================================================================

#[test]
fn details_and_json_output() {
    let mut person = Person::valid();
    person.age = -3;
    let violations = person_validator().validate(&person);

    let details = violations.details();
    assert_eq!(details[0].key, "number.greaterThanOrEqual");
    assert_eq!(details[0].args, vec![json!("age"), json!(-3), json!(0)]);

    let value = serde_json::to_value(&violations).unwrap();
    assert_eq!(value[0]["name"], json!("age"));
    assert_eq!(value[0]["args"], json!([-3, 0]));
}

#[test]
fn validated_returns_value_or_error() {
    let validator = person_validator();
    assert_eq!(validator.validated(Person::valid()).unwrap(), Person::valid());

    let mut person = Person::valid();
    person.name = String::new();
    let error = validator.validated(person).unwrap_err();
    assert_eq!(error.violations().len(), 1);
    assert!(error.to_string().contains("\"name\" must not be blank"));
}

#[test]
fn validate_to_either_returns_target_reference() {
    let validator = person_validator();
    let person = Person::valid();
    let either = validator.validate_to_either(&person, &Locale::ROOT, &ConstraintGroup::DEFAULT);
    assert!(std::ptr::eq(either.right().copied().unwrap(), &person));

    let mut invalid = Person::valid();
    invalid.age = -1;
    let either = validator.validate_to_either(&invalid, &Locale::ENGLISH, &ConstraintGroup::DEFAULT);
    let violations = either.left().unwrap();
    assert_eq!(violations.locale(), &Locale::ENGLISH);
}

// ============================================================================
// PROGRAMMER ERRORS
// ============================================================================

#[test]
#[should_panic(expected = "Parameter 'rangeFrom' has to be before 'rangeTo'")]
fn inverted_between_panics_while_building() {
    let _ = ValidatorBuilder::<Person>::new()
        .constraint("age", |p| &p.age, |c| c.between(10, 1))
        .build();
}

#[test]
fn try_between_reports_programmer_error() {
    let error = NumericConstraint::<i32>::default()
        .try_between(5, 5)
        .unwrap_err();
    assert!(matches!(error, ConstraintError::InvalidRange { .. }));
}
