//! Core traits of the evaluation engine.

use std::sync::Arc;

use crate::foundation::{ConstraintGroup, ConstraintViolation, ValidationContext};

// ============================================================================
// VALIDATOR SUBSET
// ============================================================================

/// A rule set that can check a target and report violations.
///
/// Implemented by [`Validator`](crate::Validator) itself and by every rule
/// set it is assembled from (field predicates, nested, collection and
/// conditional validators), which is what lets validators nest.
///
/// Implementations append to `out` and never remove from it. When
/// `ctx.is_fail_fast()` is set they stop after appending their first
/// violation.
///
/// # Examples
///
/// ```
/// use verity_validator::foundation::{
///     ConstraintGroup, ConstraintViolation, ValidationContext, ValidatorSubset,
/// };
///
/// struct NonZero;
///
/// impl ValidatorSubset for NonZero {
///     type Target = i64;
///
///     fn validate_into(
///         &self,
///         target: &i64,
///         _ctx: &ValidationContext<'_>,
///         out: &mut Vec<ConstraintViolation>,
///     ) {
///         if *target == 0 {
///             out.push(ConstraintViolation::new("value", "nonZero", "must not be 0", []));
///         }
///     }
/// }
///
/// let group = ConstraintGroup::DEFAULT;
/// let mut out = Vec::new();
/// NonZero.validate_into(&0, &ValidationContext::new(&group), &mut out);
/// assert_eq!(out.len(), 1);
/// ```
pub trait ValidatorSubset: Send + Sync {
    /// The type being validated.
    type Target;

    /// Checks `target` and appends every violation found to `out`.
    fn validate_into(
        &self,
        target: &Self::Target,
        ctx: &ValidationContext<'_>,
        out: &mut Vec<ConstraintViolation>,
    );
}

impl<V> ValidatorSubset for Arc<V>
where
    V: ValidatorSubset + ?Sized,
{
    type Target = V::Target;

    fn validate_into(
        &self,
        target: &Self::Target,
        ctx: &ValidationContext<'_>,
        out: &mut Vec<ConstraintViolation>,
    ) {
        (**self).validate_into(target, ctx, out);
    }
}

impl<V> ValidatorSubset for Box<V>
where
    V: ValidatorSubset + ?Sized,
{
    type Target = V::Target;

    fn validate_into(
        &self,
        target: &Self::Target,
        ctx: &ValidationContext<'_>,
        out: &mut Vec<ConstraintViolation>,
    ) {
        (**self).validate_into(target, ctx, out);
    }
}

/// Type-erased rule set over `T`.
pub type BoxedSubset<T> = Box<dyn ValidatorSubset<Target = T>>;

// ============================================================================
// CONSTRAINT CONDITION
// ============================================================================

/// Guard deciding whether a conditional rule set applies.
///
/// Implemented for closures `Fn(&T, &ConstraintGroup) -> bool` and for
/// [`ConstraintGroup`], which accepts exactly the passes run under itself.
///
/// # Examples
///
/// ```
/// use verity_validator::foundation::{ConstraintCondition, ConstraintGroup};
///
/// const UPDATE: ConstraintGroup = ConstraintGroup::new("UPDATE");
///
/// assert!(ConstraintCondition::<u8>::test(&UPDATE, &0, &UPDATE));
/// assert!(!ConstraintCondition::<u8>::test(&UPDATE, &0, &ConstraintGroup::DEFAULT));
///
/// let only_large = |n: &u32, _: &ConstraintGroup| *n > 100;
/// assert!(only_large.test(&101, &ConstraintGroup::DEFAULT));
/// ```
pub trait ConstraintCondition<T>: Send + Sync {
    /// Returns true if the guarded rule set should run.
    fn test(&self, target: &T, group: &ConstraintGroup) -> bool;
}

impl<T, F> ConstraintCondition<T> for F
where
    F: Fn(&T, &ConstraintGroup) -> bool + Send + Sync,
{
    fn test(&self, target: &T, group: &ConstraintGroup) -> bool {
        self(target, group)
    }
}

impl<T> ConstraintCondition<T> for ConstraintGroup {
    fn test(&self, _target: &T, group: &ConstraintGroup) -> bool {
        self == group
    }
}
