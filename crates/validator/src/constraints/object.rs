//! Constraints for arbitrary comparable values.
//!
//! [`ObjectConstraint`] is the fallback builder for field types without a
//! dedicated one (enums, newtypes, ids). Values are rendered into violation
//! arguments through their `Debug` representation.

use std::fmt::Debug;
use std::marker::PhantomData;

use serde_json::Value;
use smallvec::smallvec;

use crate::constraints::predicate::{Constraint, ConstraintPredicate, violated_unless};

/// Constraint builder for any `Debug + PartialEq` value.
///
/// # Examples
///
/// ```
/// use verity_validator::constraints::{Constraint, ObjectConstraint};
///
/// #[derive(Debug, PartialEq)]
/// enum Plan {
///     Free,
///     Pro,
///     Enterprise,
/// }
///
/// let paid = ObjectConstraint::default().one_of([Plan::Pro, Plan::Enterprise]);
/// assert!(paid.predicates()[0].test(&Plan::Pro));
/// assert!(!paid.predicates()[0].test(&Plan::Free));
/// ```
pub struct ObjectConstraint<V> {
    predicates: Vec<ConstraintPredicate<V>>,
    _marker: PhantomData<fn(&V)>,
}

impl<V> Default for ObjectConstraint<V> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
            _marker: PhantomData,
        }
    }
}

impl<V> Debug for ObjectConstraint<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectConstraint")
            .field("predicates", &self.predicates)
            .finish()
    }
}

pub(crate) fn debug_arg<V: Debug + ?Sized>(value: &V) -> Value {
    Value::String(format!("{value:?}"))
}

impl<V> Constraint for ObjectConstraint<V>
where
    V: Debug + PartialEq + Send + Sync + 'static,
{
    type Value = V;

    fn predicates(&self) -> &[ConstraintPredicate<V>] {
        &self.predicates
    }

    fn predicates_mut(&mut self) -> &mut Vec<ConstraintPredicate<V>> {
        &mut self.predicates
    }

    fn into_predicates(self) -> Vec<ConstraintPredicate<V>> {
        self.predicates
    }

    fn to_arg(value: &V) -> Value {
        debug_arg(value)
    }
}

impl<V> ObjectConstraint<V>
where
    V: Debug + PartialEq + Send + Sync + 'static,
{
    /// Requires the value to equal `expected`.
    #[must_use = "builder methods must be chained or built"]
    pub fn equal_to(self, expected: V) -> Self {
        self.push(ConstraintPredicate::new(
            "object.equalTo",
            "\"{0}\" must be equal to {2}",
            move |value: &V| {
                violated_unless(*value == expected, || {
                    smallvec![debug_arg(value), debug_arg(&expected)]
                })
            },
        ))
    }

    /// Requires the value to be one of `allowed`.
    #[must_use = "builder methods must be chained or built"]
    pub fn one_of(self, allowed: impl IntoIterator<Item = V>) -> Self {
        let allowed: Vec<V> = allowed.into_iter().collect();
        self.push(ConstraintPredicate::new(
            "object.oneOf",
            "\"{0}\" must be one of the following values: {2}",
            move |value: &V| {
                violated_unless(allowed.contains(value), || {
                    smallvec![
                        debug_arg(value),
                        Value::Array(allowed.iter().map(debug_arg).collect()),
                    ]
                })
            },
        ))
    }
}
