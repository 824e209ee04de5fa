//! Boolean constraints.

use serde_json::Value;
use smallvec::smallvec;

use crate::constraints::predicate::{
    Constrainable, Constraint, ConstraintPredicate, violated_unless,
};

/// Constraint builder for `bool` fields.
#[derive(Debug, Default)]
pub struct BooleanConstraint {
    predicates: Vec<ConstraintPredicate<bool>>,
}

impl Constraint for BooleanConstraint {
    type Value = bool;

    fn predicates(&self) -> &[ConstraintPredicate<bool>] {
        &self.predicates
    }

    fn predicates_mut(&mut self) -> &mut Vec<ConstraintPredicate<bool>> {
        &mut self.predicates
    }

    fn into_predicates(self) -> Vec<ConstraintPredicate<bool>> {
        self.predicates
    }

    fn to_arg(value: &bool) -> Value {
        Value::Bool(*value)
    }
}

impl BooleanConstraint {
    /// Requires `true`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_true(self) -> Self {
        self.push(ConstraintPredicate::new(
            "boolean.isTrue",
            "\"{0}\" must be true",
            |value: &bool| violated_unless(*value, || smallvec![Value::Bool(*value)]),
        ))
    }

    /// Requires `false`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_false(self) -> Self {
        self.push(ConstraintPredicate::new(
            "boolean.isFalse",
            "\"{0}\" must be false",
            |value: &bool| violated_unless(!*value, || smallvec![Value::Bool(*value)]),
        ))
    }
}

impl Constrainable for bool {
    type Constraint = BooleanConstraint;
}
