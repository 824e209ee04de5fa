//! Guarded rule sets.

use crate::foundation::{
    BoxedSubset, ConstraintCondition, ConstraintViolation, ValidationContext, ValidatorSubset,
};

/// A rule set that only runs when its condition accepts the target and the
/// active group.
///
/// When the condition rejects, the nested validator is not evaluated at all.
pub struct ConditionalValidator<T> {
    condition: Box<dyn ConstraintCondition<T>>,
    validator: BoxedSubset<T>,
}

impl<T> ConditionalValidator<T> {
    /// Pairs a condition with the validator it guards.
    pub fn new(condition: Box<dyn ConstraintCondition<T>>, validator: BoxedSubset<T>) -> Self {
        Self {
            condition,
            validator,
        }
    }

    /// Returns true if the guarded validator applies to `target` under `ctx`.
    pub fn applies(&self, target: &T, ctx: &ValidationContext<'_>) -> bool {
        self.condition.test(target, ctx.group())
    }
}

impl<T> ValidatorSubset for ConditionalValidator<T> {
    type Target = T;

    fn validate_into(
        &self,
        target: &T,
        ctx: &ValidationContext<'_>,
        out: &mut Vec<ConstraintViolation>,
    ) {
        if self.applies(target, ctx) {
            self.validator.validate_into(target, ctx, out);
        } else {
            tracing::trace!(group = %ctx.group(), "conditional validator skipped");
        }
    }
}

impl<T> std::fmt::Debug for ConditionalValidator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConditionalValidator").finish_non_exhaustive()
    }
}
