//! `Either` laws and `Validated` accumulation through real validators.

use pretty_assertions::assert_eq;
use rstest::rstest;
use verity_validator::prelude::*;

use crate::fixtures::{Person, names, person_validator};

// ============================================================================
// EITHER
// ============================================================================

fn half(n: i32) -> Either<String, i32> {
    if n % 2 == 0 {
        Either::Right(n / 2)
    } else {
        Either::Left(format!("{n} is odd"))
    }
}

fn describe(n: i32) -> Either<String, String> {
    Either::Right(n.to_string())
}

#[rstest]
#[case::even(8)]
#[case::odd(3)]
fn either_left_identity(#[case] n: i32) {
    let unit: Either<String, i32> = Either::Right(n);
    assert_eq!(unit.right_flat_map(half), half(n));
}

#[rstest]
#[case::right(Either::Right(4))]
#[case::left(Either::Left("boom".to_string()))]
fn either_right_identity(#[case] m: Either<String, i32>) {
    assert_eq!(m.clone().right_flat_map(Either::Right), m);
}

#[rstest]
#[case::right(Either::Right(12))]
#[case::right_odd_after_half(Either::Right(6))]
#[case::left(Either::Left("boom".to_string()))]
fn either_associativity(#[case] m: Either<String, i32>) {
    let lhs = m.clone().right_flat_map(half).right_flat_map(describe);
    let rhs = m.right_flat_map(|x| half(x).right_flat_map(describe));
    assert_eq!(lhs, rhs);
}

#[test]
fn either_has_exactly_one_side() {
    let right: Either<&str, i32> = Either::Right(1);
    assert!(right.is_right() && !right.is_left());
    assert_eq!(right.left(), None);

    let left: Either<&str, i32> = Either::Left("x");
    assert!(left.is_left() && !left.is_right());
    assert_eq!(left.right(), None);
}

#[test]
fn right_or_else_throw_uses_factory() {
    let left: Either<&str, i32> = Either::Left("missing");
    let error = left
        .right_or_else_throw(|reason| format!("failed: {reason}"))
        .unwrap_err();
    assert_eq!(error, "failed: missing");
}

// ============================================================================
// VALIDATED
// ============================================================================

#[test]
fn applicative_validator_yields_validated() {
    let applicative = person_validator().applicative();

    let valid = applicative.validate(Person::valid());
    assert!(valid.is_valid());
    assert_eq!(valid.value().map(|p| p.age), Some(30));

    let mut person = Person::valid();
    person.age = -5;
    let invalid = applicative.validate(person);
    assert_eq!(invalid.errors().map(names), Some(vec!["age".to_string()]));
}

#[test]
fn combine_accumulates_across_independent_validators() {
    let age = ValidatorBuilder::<i32>::new()
        .constraint("age", |n| n, |c| c.positive())
        .build()
        .applicative();
    let name = ValidatorBuilder::<String>::new()
        .constraint("name", |s| s, |c| c.not_empty())
        .build()
        .applicative();

    let combined = Validated::combine((age.validate(-1), name.validate(String::new())));
    assert_eq!(combined.errors().map(names), Some(vec!["age".into(), "name".into()]));

    let combined = Validated::combine((age.validate(40), name.validate("Ann".into())))
        .apply(|age: i32, name: String| format!("{name} ({age})"));
    assert_eq!(combined.value().map(String::as_str), Some("Ann (40)"));
}

#[test]
fn validated_converts_to_either_and_back() {
    let mut person = Person::valid();
    person.name = String::new();
    let invalid = person_validator().applicative().validate(person);

    let either: Either<ConstraintViolations, Person> = invalid.clone().into();
    assert!(either.is_left());

    let back: Validated<Person> = either.into();
    assert_eq!(back, invalid);
    assert_eq!(
        back.fold(|violations| violations.len(), |_| 0),
        1
    );
}
