//! Error types.
//!
//! Two categories never share a type:
//!
//! - [`ConstraintError`]: the constraint itself is malformed (inverted range,
//!   bad pattern). This is a programming mistake, raised while building rules.
//! - [`ConstraintViolationsError`]: input failed validation and the caller
//!   explicitly asked for an error instead of a value
//!   ([`Validator::validated`](crate::Validator::validated),
//!   [`Validated::or_else_throw`](crate::outcome::Validated::or_else_throw)).
//!
//! Ordinary validation failures are never errors; they are
//! [`ConstraintViolations`] values.

use crate::foundation::ConstraintViolations;

/// A constraint could not be constructed from the given arguments.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ConstraintError {
    /// Range bounds are equal or inverted.
    #[error("Parameter 'rangeFrom' has to be before 'rangeTo' (rangeFrom: {from}, rangeTo: {to})")]
    InvalidRange {
        /// Rendered lower bound.
        from: String,
        /// Rendered upper bound.
        to: String,
    },

    /// A regular expression failed to compile.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending expression.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },
}

impl ConstraintError {
    /// Creates an [`InvalidRange`](Self::InvalidRange) error.
    pub fn invalid_range(from: impl ToString, to: impl ToString) -> Self {
        Self::InvalidRange {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Validation failed and the caller opted into an error.
///
/// Carries the complete, ordered [`ConstraintViolations`] of the pass.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{violations}")]
pub struct ConstraintViolationsError {
    violations: ConstraintViolations,
}

impl ConstraintViolationsError {
    /// Wraps the violations of a failed pass.
    #[must_use]
    pub fn new(violations: ConstraintViolations) -> Self {
        Self { violations }
    }

    /// Returns the violations.
    #[must_use]
    pub fn violations(&self) -> &ConstraintViolations {
        &self.violations
    }

    /// Consumes the error and returns the violations.
    #[must_use]
    pub fn into_violations(self) -> ConstraintViolations {
        self.violations
    }
}

impl From<ConstraintViolations> for ConstraintViolationsError {
    fn from(violations: ConstraintViolations) -> Self {
        Self::new(violations)
    }
}
