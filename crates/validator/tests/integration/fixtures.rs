//! Shared domain types.

use verity_validator::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub city: String,
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub email: Option<String>,
    pub age: i32,
    pub address: Option<Address>,
}

impl Person {
    pub fn valid() -> Self {
        Self {
            name: "Ann".into(),
            email: Some("ann@example.com".into()),
            age: 30,
            address: Some(Address {
                city: "Tokyo".into(),
                zip: "100-0001".into(),
            }),
        }
    }
}

pub fn address_validator() -> Validator<Address> {
    ValidatorBuilder::<Address>::new()
        .constraint("city", |a| &a.city, |c| c.not_blank())
        .constraint("zip", |a| &a.zip, |c| c.fixed_length(8))
        .build()
}

pub fn person_validator() -> Validator<Person> {
    ValidatorBuilder::<Person>::new()
        .constraint("name", |p| &p.name, |c| c.not_blank().max_length(20))
        .constraint_opt("email", |p| p.email.as_ref(), |c| c.email())
        .constraint("age", |p| &p.age, |c| c.greater_than_or_equal(0).less_than(150))
        .nest_if_present("address", |p| p.address.as_ref(), address_validator())
        .build()
}

pub fn names(violations: &ConstraintViolations) -> Vec<String> {
    violations.iter().map(|v| v.name().to_owned()).collect()
}

pub fn keys(violations: &ConstraintViolations) -> Vec<String> {
    violations
        .iter()
        .map(|v| v.message_key().to_owned())
        .collect()
}
