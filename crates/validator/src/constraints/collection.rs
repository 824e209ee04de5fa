//! Constraints on the shape of a `Vec<E>` field.
//!
//! These look at the collection as a whole. Validating each element is the
//! job of [`ValidatorBuilder::for_each`](crate::ValidatorBuilder::for_each).

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use serde_json::Value;
use smallvec::smallvec;

use crate::constraints::object::debug_arg;
use crate::constraints::predicate::{
    Constrainable, Constraint, ConstraintPredicate, violated_unless,
};

/// Constraint builder for `Vec<E>` fields.
pub struct CollectionConstraint<E> {
    predicates: Vec<ConstraintPredicate<Vec<E>>>,
    _marker: PhantomData<fn(&E)>,
}

impl<E> Default for CollectionConstraint<E> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
            _marker: PhantomData,
        }
    }
}

impl<E> Debug for CollectionConstraint<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionConstraint")
            .field("predicates", &self.predicates)
            .finish()
    }
}

impl<E> Constraint for CollectionConstraint<E>
where
    E: Debug + Send + Sync + 'static,
{
    type Value = Vec<E>;

    fn predicates(&self) -> &[ConstraintPredicate<Vec<E>>] {
        &self.predicates
    }

    fn predicates_mut(&mut self) -> &mut Vec<ConstraintPredicate<Vec<E>>> {
        &mut self.predicates
    }

    fn into_predicates(self) -> Vec<ConstraintPredicate<Vec<E>>> {
        self.predicates
    }

    fn to_arg(value: &Vec<E>) -> Value {
        debug_arg(value)
    }
}

impl<E> CollectionConstraint<E>
where
    E: Debug + Send + Sync + 'static,
{
    fn size(
        self,
        message_key: &'static str,
        default_message: &'static str,
        bound: usize,
        holds: fn(usize, usize) -> bool,
    ) -> Self {
        self.push(ConstraintPredicate::new(
            message_key,
            default_message,
            move |value: &Vec<E>| {
                violated_unless(holds(value.len(), bound), || {
                    smallvec![value.len().into(), bound.into()]
                })
            },
        ))
    }

    /// Requires at least one element.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_empty(self) -> Self {
        self.push(ConstraintPredicate::new(
            "container.notEmpty",
            "\"{0}\" must not be empty",
            |value: &Vec<E>| violated_unless(!value.is_empty(), || smallvec![debug_arg(value)]),
        ))
    }

    /// Requires at least `min` elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_size(self, min: usize) -> Self {
        self.size(
            "container.greaterThanOrEqual",
            "The size of \"{0}\" must be greater than or equal to {2}. The given size is {1}",
            min,
            |len, min| len >= min,
        )
    }

    /// Requires at most `max` elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_size(self, max: usize) -> Self {
        self.size(
            "container.lessThanOrEqual",
            "The size of \"{0}\" must be less than or equal to {2}. The given size is {1}",
            max,
            |len, max| len <= max,
        )
    }

    /// Requires exactly `size` elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn fixed_size(self, size: usize) -> Self {
        self.size(
            "container.fixedSize",
            "The size of \"{0}\" must be {2}. The given size is {1}",
            size,
            |len, size| len == size,
        )
    }
}

impl<E> CollectionConstraint<E>
where
    E: Debug + PartialEq + Send + Sync + 'static,
{
    /// Requires `element` to be present.
    #[must_use = "builder methods must be chained or built"]
    pub fn contains(self, element: E) -> Self {
        self.push(ConstraintPredicate::new(
            "collection.contains",
            "\"{0}\" must contain {2}",
            move |value: &Vec<E>| {
                violated_unless(value.contains(&element), || {
                    smallvec![debug_arg(value), debug_arg(&element)]
                })
            },
        ))
    }
}

impl<E> CollectionConstraint<E>
where
    E: Debug + Eq + Hash + Send + Sync + 'static,
{
    /// Requires all elements to be distinct. The violation lists the
    /// duplicates in order of their second occurrence.
    #[must_use = "builder methods must be chained or built"]
    pub fn unique(self) -> Self {
        self.push(ConstraintPredicate::new(
            "collection.unique",
            "\"{0}\" must be unique. {1} is/are duplicated",
            |value: &Vec<E>| {
                let mut seen = HashSet::with_capacity(value.len());
                let duplicates: Vec<Value> = value
                    .iter()
                    .filter(|element| !seen.insert(*element))
                    .map(debug_arg)
                    .collect();
                violated_unless(duplicates.is_empty(), || {
                    smallvec![Value::Array(duplicates)]
                })
            },
        ))
    }
}

impl<E> Constrainable for Vec<E>
where
    E: Debug + Send + Sync + 'static,
{
    type Constraint = CollectionConstraint<E>;
}
