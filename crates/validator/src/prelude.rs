//! Prelude module for convenient imports.
//!
//! `use verity_validator::prelude::*;` brings in the validator and its
//! builder, the result types, and the constraint traits whose methods the
//! builders rely on (`not_null`, `predicate`, `message`, ...).

// ============================================================================
// CORE
// ============================================================================

pub use crate::builder::ValidatorBuilder;
pub use crate::validator::{ApplicativeValidator, Validator};

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{
    ConstraintCondition, ConstraintError, ConstraintGroup, ConstraintViolation,
    ConstraintViolations, ConstraintViolationsError, Locale, MessageFormatter,
    SimpleMessageFormatter, ValidatorSubset,
};

// ============================================================================
// CONSTRAINTS
// ============================================================================

pub use crate::constraints::{
    BooleanConstraint, CharSequenceConstraint, CollectionConstraint, Constrainable, Constraint,
    CustomConstraint, NullAs, NumericConstraint, ObjectConstraint,
};

#[cfg(feature = "temporal")]
pub use crate::constraints::TemporalConstraint;

// ============================================================================
// OUTCOME AND ARGUMENTS
// ============================================================================

pub use crate::arguments::{ArgumentsMapper, ArgumentsValidator, Combine};
pub use crate::outcome::{Either, Validated};
