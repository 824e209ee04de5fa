//! Basic usage example for verity-validator

use verity_validator::prelude::*;

#[derive(Debug)]
struct Address {
    city: String,
}

#[derive(Debug)]
struct Person {
    name: String,
    age: i32,
    address: Option<Address>,
    hobbies: Vec<String>,
}

fn main() {
    let address = ValidatorBuilder::<Address>::new()
        .constraint("city", |a| &a.city, |c| c.not_blank())
        .build();

    let validator = ValidatorBuilder::<Person>::new()
        .constraint("name", |p| &p.name, |c| c.not_blank().max_length(20))
        .constraint("age", |p| &p.age, |c| c.greater_than_or_equal(0))
        .nest_if_present("address", |p| p.address.as_ref(), address)
        .constraint("hobbies", |p| &p.hobbies, |c| c.max_size(3).unique())
        .build();

    let alice = Person {
        name: "Alice".into(),
        age: 30,
        address: Some(Address {
            city: "Osaka".into(),
        }),
        hobbies: vec!["go".into()],
    };
    match validator.validated(alice) {
        Ok(person) => println!("✓ {} is valid", person.name),
        Err(e) => println!("✗ Error: {e}"),
    }

    let broken = Person {
        name: String::new(),
        age: -1,
        address: Some(Address {
            city: " ".into(),
        }),
        hobbies: vec!["go".into(), "go".into()],
    };
    let violations = validator.validate_with(&broken, &Locale::ENGLISH, &ConstraintGroup::DEFAULT);
    println!("✗ {} violation(s):", violations.len());
    for (violation, message) in violations.iter().zip(violations.messages()) {
        println!("  [{}] {} ({})", violation.name(), message, violation.message_key());
    }

    match serde_json::to_string_pretty(&violations) {
        Ok(json) => println!("\n{json}"),
        Err(e) => println!("✗ could not serialize: {e}"),
    }
}
