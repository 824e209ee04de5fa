//! # verity-validator
//!
//! Declarative validation: compose per-field constraints into a
//! [`Validator`] for a type, then validate instances and get back every
//! violation at once, or a typed, validated value.
//!
//! ## Quick Start
//!
//! ```
//! use verity_validator::prelude::*;
//!
//! struct Signup {
//!     username: String,
//!     age: u8,
//!     tags: Vec<String>,
//! }
//!
//! let validator = ValidatorBuilder::<Signup>::new()
//!     .constraint("username", |s| &s.username, |c| c.not_blank().length_between(3, 20))
//!     .constraint("age", |s| &s.age, |c| c.greater_than_or_equal(18))
//!     .constraint("tags", |s| &s.tags, |c| c.max_size(5).unique())
//!     .build();
//!
//! let violations = validator.validate(&Signup {
//!     username: "al".into(),
//!     age: 17,
//!     tags: vec!["a".into(), "a".into()],
//! });
//!
//! assert_eq!(violations.len(), 3);
//! assert_eq!(
//!     violations.messages()[1],
//!     "\"age\" must be greater than or equal to 18"
//! );
//! ```
//!
//! ## Layout
//!
//! - [`foundation`]: violations, groups, locales, formatter contract, errors
//! - [`constraints`]: per-type constraint builders
//! - [`combinators`]: field, nested, collection and conditional rule sets
//! - [`Validator`] / [`ValidatorBuilder`]: the orchestrator and its builder
//! - [`outcome`]: [`Either`](outcome::Either) and [`Validated`](outcome::Validated)
//! - [`arguments`]: validating argument tuples before calling a constructor
//!
//! ## Features
//!
//! - `temporal` (default): chrono-backed temporal constraints
//! - `pattern` (default): regex-backed `pattern` and `email`

// Rule sets are stored as boxed trait objects over higher-ranked accessors.
#![allow(clippy::type_complexity)]

mod macros;

pub mod arguments;
pub mod builder;
pub mod combinators;
pub mod constraints;
pub mod foundation;
pub mod outcome;
pub mod prelude;
pub mod validator;

pub use builder::ValidatorBuilder;
pub use validator::{ApplicativeValidator, Validator};
