//! The validator orchestrator
//!
//! A [`Validator`] owns three ordered lists of rule sets for one target type
//! and evaluates them on every pass:
//!
//! 1. field rule sets and nested validators, in declaration order,
//! 2. collection validators,
//! 3. conditional validators whose condition accepts the target and group.
//!
//! The violations of all three are concatenated in that order. A validator
//! is immutable once built and holds no per-call state, so one instance can
//! be shared (it is `Clone`, `Send` and `Sync`) and used from many threads.

use std::fmt;
use std::sync::Arc;

use crate::builder::ValidatorBuilder;
use crate::combinators::ConditionalValidator;
use crate::foundation::{
    BoxedSubset, ConstraintGroup, ConstraintViolation, ConstraintViolations,
    ConstraintViolationsError, Locale, MessageFormatter, ValidationContext, ValidatorSubset,
};
use crate::outcome::{Either, Validated};

pub(crate) struct Inner<T> {
    pub(crate) predicates: Vec<BoxedSubset<T>>,
    pub(crate) collection_validators: Vec<BoxedSubset<T>>,
    pub(crate) conditional_validators: Vec<ConditionalValidator<T>>,
    pub(crate) message_formatter: Arc<dyn MessageFormatter>,
    pub(crate) fail_fast: bool,
}

/// Validates instances of `T` against a fixed set of rules.
///
/// Build one with [`ValidatorBuilder`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use verity_validator::prelude::*;
///
/// struct Person {
///     age: i32,
/// }
///
/// let validator = ValidatorBuilder::<Person>::new()
///     .constraint("age", |p| &p.age, |c| c.greater_than_or_equal(0))
///     .build();
///
/// let violations = validator.validate(&Person { age: -1 });
/// assert!(!violations.is_valid());
///
/// let violation = &violations.violations()[0];
/// assert_eq!(violation.name(), "age");
/// assert_eq!(violation.message_key(), "number.greaterThanOrEqual");
/// assert_eq!(violation.args(), &[json!(-1), json!(0)]);
/// ```
pub struct Validator<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Validator<T> {
    pub(crate) fn from_inner(inner: Inner<T>) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Starts building a validator for `T`.
    pub fn builder() -> ValidatorBuilder<T> {
        ValidatorBuilder::new()
    }

    /// Returns true if the validator stops at the first violation.
    pub fn is_fail_fast(&self) -> bool {
        self.inner.fail_fast
    }

    /// Validates under the root locale and [`ConstraintGroup::DEFAULT`].
    pub fn validate(&self, target: &T) -> ConstraintViolations {
        self.validate_with(target, &Locale::ROOT, &ConstraintGroup::DEFAULT)
    }

    /// Validates under the given locale and group.
    ///
    /// Each call accumulates into a fresh sequence; nothing is shared between
    /// calls.
    #[tracing::instrument(
        level = "trace",
        name = "validate",
        skip_all,
        fields(target_type = std::any::type_name::<T>(), group = %group)
    )]
    pub fn validate_with(
        &self,
        target: &T,
        locale: &Locale,
        group: &ConstraintGroup,
    ) -> ConstraintViolations {
        let ctx = ValidationContext::new(group);
        let mut violations = Vec::new();
        self.validate_into(target, &ctx, &mut violations);

        if !violations.is_empty() {
            tracing::debug!(
                violations = violations.len(),
                locale = %locale,
                "validation failed"
            );
        }

        ConstraintViolations::new(
            violations,
            locale.clone(),
            Arc::clone(&self.inner.message_formatter),
        )
    }

    /// Validates and returns the target itself on success.
    pub fn validate_to_either<'t>(
        &self,
        target: &'t T,
        locale: &Locale,
        group: &ConstraintGroup,
    ) -> Either<ConstraintViolations, &'t T> {
        let violations = self.validate_with(target, locale, group);
        if violations.is_valid() {
            Either::Right(target)
        } else {
            Either::Left(violations)
        }
    }

    /// Validates an owned value, handing it back on success.
    ///
    /// # Errors
    ///
    /// [`ConstraintViolationsError`] carrying every violation found.
    pub fn validated(&self, target: T) -> Result<T, ConstraintViolationsError> {
        self.applicative().validate(target).or_else_throw()
    }

    /// Returns a view of this validator that yields [`Validated`] values.
    pub fn applicative(&self) -> ApplicativeValidator<T> {
        ApplicativeValidator {
            validator: self.clone(),
        }
    }
}

impl<T> ValidatorSubset for Validator<T> {
    type Target = T;

    fn validate_into(
        &self,
        target: &T,
        ctx: &ValidationContext<'_>,
        out: &mut Vec<ConstraintViolation>,
    ) {
        let ctx = ctx.with_fail_fast(self.inner.fail_fast);
        let start = out.len();
        let stop = |len: usize| ctx.is_fail_fast() && len > start;

        for rule_set in &self.inner.predicates {
            rule_set.validate_into(target, &ctx, out);
            if stop(out.len()) {
                return;
            }
        }
        for rule_set in &self.inner.collection_validators {
            rule_set.validate_into(target, &ctx, out);
            if stop(out.len()) {
                return;
            }
        }
        for conditional in &self.inner.conditional_validators {
            conditional.validate_into(target, &ctx, out);
            if stop(out.len()) {
                return;
            }
        }
    }
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("predicates", &self.inner.predicates.len())
            .field(
                "collection_validators",
                &self.inner.collection_validators.len(),
            )
            .field(
                "conditional_validators",
                &self.inner.conditional_validators.len(),
            )
            .field("fail_fast", &self.inner.fail_fast)
            .finish()
    }
}

// ============================================================================
// APPLICATIVE VALIDATOR
// ============================================================================

/// A [`Validator`] that consumes the target and yields [`Validated`].
///
/// Obtained from [`Validator::applicative`].
#[derive(Debug)]
pub struct ApplicativeValidator<T> {
    validator: Validator<T>,
}

impl<T> Clone for ApplicativeValidator<T> {
    fn clone(&self) -> Self {
        Self {
            validator: self.validator.clone(),
        }
    }
}

impl<T> ApplicativeValidator<T> {
    /// Validates under the root locale and default group.
    pub fn validate(&self, target: T) -> Validated<T> {
        self.validate_with(target, &Locale::ROOT, &ConstraintGroup::DEFAULT)
    }

    /// Validates under the given locale and group.
    pub fn validate_with(
        &self,
        target: T,
        locale: &Locale,
        group: &ConstraintGroup,
    ) -> Validated<T> {
        let violations = self.validator.validate_with(&target, locale, group);
        if violations.is_valid() {
            Validated::Valid(target)
        } else {
            Validated::Invalid(violations)
        }
    }

    /// Returns the underlying validator.
    pub fn validator(&self) -> &Validator<T> {
        &self.validator
    }
}
