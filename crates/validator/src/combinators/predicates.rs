//! Field rule sets: one accessor, many predicates.

use std::fmt;

use crate::constraints::ConstraintPredicate;
use crate::foundation::{ConstraintViolation, ValidationContext, ValidatorSubset};

/// Borrowing accessor from a target to one of its fields, `None` when absent.
pub type Extractor<T, V> = Box<dyn for<'a> Fn(&'a T) -> Option<&'a V> + Send + Sync>;

/// Binds a named field accessor to the ordered predicates of that field.
///
/// Every predicate runs on every pass, even after a sibling failed, and
/// each failing predicate yields exactly one violation named after the field.
pub struct ConstraintPredicates<T, V> {
    name: String,
    extractor: Extractor<T, V>,
    predicates: Vec<ConstraintPredicate<V>>,
}

impl<T, V> ConstraintPredicates<T, V> {
    /// Creates a field rule set.
    pub fn new<F>(
        name: impl Into<String>,
        extractor: F,
        predicates: Vec<ConstraintPredicate<V>>,
    ) -> Self
    where
        F: for<'a> Fn(&'a T) -> Option<&'a V> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            extractor: Box::new(extractor),
            predicates,
        }
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the predicates in declaration order.
    pub fn predicates(&self) -> &[ConstraintPredicate<V>] {
        &self.predicates
    }
}

impl<T, V> ValidatorSubset for ConstraintPredicates<T, V> {
    type Target = T;

    fn validate_into(
        &self,
        target: &T,
        ctx: &ValidationContext<'_>,
        out: &mut Vec<ConstraintViolation>,
    ) {
        let value = (self.extractor)(target);
        for predicate in &self.predicates {
            if let Some(args) = predicate.check(value) {
                out.push(predicate.violation(&self.name, args));
                if ctx.is_fail_fast() {
                    return;
                }
            }
        }
    }
}

impl<T, V> fmt::Debug for ConstraintPredicates<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintPredicates")
            .field("name", &self.name)
            .field("extractor", &"<function>")
            .field("predicates", &self.predicates)
            .finish()
    }
}
