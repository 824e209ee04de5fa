//! Foundation types shared by every part of the engine
//!
//! - **Context**: [`ConstraintGroup`], [`Locale`], [`ValidationContext`]
//! - **Results**: [`ConstraintViolation`], [`ConstraintViolations`]
//! - **Messages**: [`MessageFormatter`], [`SimpleMessageFormatter`]
//! - **Errors**: [`ConstraintError`], [`ConstraintViolationsError`]
//! - **Traits**: [`ValidatorSubset`], [`ConstraintCondition`]

pub mod context;
pub mod error;
pub mod message;
pub mod traits;
pub mod violation;

pub use context::{ConstraintGroup, Locale, ValidationContext};
pub use error::{ConstraintError, ConstraintViolationsError};
pub use message::{MessageFormatter, SimpleMessageFormatter};
pub use traits::{BoxedSubset, ConstraintCondition, ValidatorSubset};
pub use violation::{Args, ConstraintViolation, ConstraintViolations, ViolationDetail};
