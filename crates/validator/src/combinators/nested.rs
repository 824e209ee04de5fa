//! Nested validators for sub-objects.

use crate::combinators::predicates::Extractor;
use crate::foundation::{BoxedSubset, ConstraintViolation, ValidationContext, ValidatorSubset};

/// Runs a validator of `N` against a field of `T`, prefixing every violation
/// name with `"<name>."`.
///
/// An absent sub-object is skipped.
pub struct NestedValidator<T, N> {
    prefix: String,
    extractor: Extractor<T, N>,
    validator: BoxedSubset<N>,
}

impl<T, N> NestedValidator<T, N> {
    /// Creates a nested validator for the field `name`.
    pub fn new<F>(name: impl Into<String>, extractor: F, validator: BoxedSubset<N>) -> Self
    where
        F: for<'a> Fn(&'a T) -> Option<&'a N> + Send + Sync + 'static,
    {
        let mut prefix = name.into();
        prefix.push('.');
        Self {
            prefix,
            extractor: Box::new(extractor),
            validator,
        }
    }
}

impl<T, N> ValidatorSubset for NestedValidator<T, N> {
    type Target = T;

    fn validate_into(
        &self,
        target: &T,
        ctx: &ValidationContext<'_>,
        out: &mut Vec<ConstraintViolation>,
    ) {
        let Some(value) = (self.extractor)(target) else {
            return;
        };
        let mut nested = Vec::new();
        self.validator.validate_into(value, ctx, &mut nested);
        out.extend(nested.into_iter().map(|v| v.with_prefix(&self.prefix)));
    }
}

impl<T, N> std::fmt::Debug for NestedValidator<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NestedValidator")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}
