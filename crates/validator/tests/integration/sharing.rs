//! Built validators are immutable and shareable across threads.

use std::thread;

use pretty_assertions::assert_eq;
use verity_validator::prelude::*;

use crate::fixtures::{Person, person_validator};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn validator_is_send_and_sync() {
    assert_send_sync::<Validator<Person>>();
    assert_send_sync::<ApplicativeValidator<Person>>();
    assert_send_sync::<ConstraintViolations>();
}

#[test]
fn concurrent_passes_do_not_interfere() {
    let validator = person_validator();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let validator = validator.clone();
            thread::spawn(move || {
                let mut person = Person::valid();
                person.age = if i % 2 == 0 { -i } else { i };
                validator.validate(&person).len()
            })
        })
        .collect();

    let counts: Vec<usize> = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();
    // i = 0 gives age 0, which is valid.
    assert_eq!(counts, [0, 0, 1, 0, 1, 0, 1, 0]);
}

#[test]
fn repeated_passes_are_identical() {
    let validator = person_validator();
    let mut person = Person::valid();
    person.name = String::new();
    person.age = 999;

    let first = validator.validate(&person);
    let second = validator.validate(&person);
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}
