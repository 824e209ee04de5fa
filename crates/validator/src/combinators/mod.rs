//! Rule sets a [`Validator`](crate::Validator) is assembled from
//!
//! Each rule set implements [`ValidatorSubset`](crate::foundation::ValidatorSubset):
//!
//! - [`ConstraintPredicates`]: predicates bound to one field
//! - [`NestedValidator`]: a validator of a sub-object, names prefixed `name.`
//! - [`CollectionValidator`]: an element validator over a list, names
//!   prefixed `name[i].`
//! - [`ConditionalValidator`]: a rule set guarded by a condition or group

pub mod collection;
pub mod conditional;
pub mod nested;
pub mod predicates;

pub use collection::{CollectionValidator, SliceExtractor};
pub use conditional::ConditionalValidator;
pub use nested::NestedValidator;
pub use predicates::{ConstraintPredicates, Extractor};
