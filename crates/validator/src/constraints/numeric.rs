//! Numeric constraints
//!
//! One builder, [`NumericConstraint`], covers every primitive integer and
//! float through the sealed [`Number`] trait.

use std::fmt::Display;

use serde_json::Value;
use smallvec::smallvec;

use crate::constraints::predicate::{
    Constrainable, Constraint, ConstraintPredicate, violated_unless,
};
use crate::constraints::ensure_range;
use crate::foundation::ConstraintError;

mod sealed {
    pub trait Sealed {}
}

/// Primitive numbers usable with [`NumericConstraint`].
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Number:
    sealed::Sealed + PartialOrd + Copy + Display + Into<Value> + Send + Sync + 'static
{
    /// Additive identity.
    const ZERO: Self;
}

macro_rules! impl_number {
    ($($ty:ty => $zero:expr),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Number for $ty {
                const ZERO: Self = $zero;
            }

            impl Constrainable for $ty {
                type Constraint = NumericConstraint<$ty>;
            }
        )+
    };
}

impl_number! {
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, usize => 0,
    f32 => 0.0, f64 => 0.0,
}

/// Constraint builder for numbers.
///
/// # Examples
///
/// ```
/// use verity_validator::constraints::{Constraint, NumericConstraint};
///
/// let age = NumericConstraint::<i32>::default()
///     .greater_than_or_equal(0)
///     .less_than(150);
///
/// assert!(age.predicates().iter().all(|p| p.test(&42)));
/// assert!(!age.predicates()[0].test(&-1));
/// ```
#[derive(Debug)]
pub struct NumericConstraint<N> {
    predicates: Vec<ConstraintPredicate<N>>,
}

impl<N> Default for NumericConstraint<N> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }
}

impl<N: Number> Constraint for NumericConstraint<N> {
    type Value = N;

    fn predicates(&self) -> &[ConstraintPredicate<N>] {
        &self.predicates
    }

    fn predicates_mut(&mut self) -> &mut Vec<ConstraintPredicate<N>> {
        &mut self.predicates
    }

    fn into_predicates(self) -> Vec<ConstraintPredicate<N>> {
        self.predicates
    }

    fn to_arg(value: &N) -> Value {
        (*value).into()
    }
}

impl<N: Number> NumericConstraint<N> {
    fn compare(
        self,
        message_key: &'static str,
        default_message: &'static str,
        bound: N,
        holds: fn(&N, &N) -> bool,
    ) -> Self {
        self.push(ConstraintPredicate::new(
            message_key,
            default_message,
            move |value: &N| {
                violated_unless(holds(value, &bound), || {
                    smallvec![(*value).into(), bound.into()]
                })
            },
        ))
    }

    /// Requires `value > min`.
    #[must_use = "builder methods must be chained or built"]
    pub fn greater_than(self, min: N) -> Self {
        self.compare(
            "number.greaterThan",
            "\"{0}\" must be greater than {2}",
            min,
            |v, b| v > b,
        )
    }

    /// Requires `value >= min`.
    #[must_use = "builder methods must be chained or built"]
    pub fn greater_than_or_equal(self, min: N) -> Self {
        self.compare(
            "number.greaterThanOrEqual",
            "\"{0}\" must be greater than or equal to {2}",
            min,
            |v, b| v >= b,
        )
    }

    /// Requires `value < max`.
    #[must_use = "builder methods must be chained or built"]
    pub fn less_than(self, max: N) -> Self {
        self.compare(
            "number.lessThan",
            "\"{0}\" must be less than {2}",
            max,
            |v, b| v < b,
        )
    }

    /// Requires `value <= max`.
    #[must_use = "builder methods must be chained or built"]
    pub fn less_than_or_equal(self, max: N) -> Self {
        self.compare(
            "number.lessThanOrEqual",
            "\"{0}\" must be less than or equal to {2}",
            max,
            |v, b| v <= b,
        )
    }

    /// Requires `min <= value <= max`.
    ///
    /// # Errors
    ///
    /// [`ConstraintError::InvalidRange`] unless `min < max`.
    pub fn try_between(self, min: N, max: N) -> Result<Self, ConstraintError> {
        ensure_range(&min, &max)?;
        Ok(self.push(ConstraintPredicate::new(
            "number.between",
            "\"{0}\" must be between {2} and {3}",
            move |value: &N| {
                violated_unless(*value >= min && *value <= max, || {
                    smallvec![(*value).into(), min.into(), max.into()]
                })
            },
        )))
    }

    /// Requires `min <= value <= max`.
    ///
    /// # Panics
    ///
    /// Panics unless `min < max`; see [`try_between`](Self::try_between).
    #[must_use = "builder methods must be chained or built"]
    pub fn between(self, min: N, max: N) -> Self {
        match self.try_between(min, max) {
            Ok(constraint) => constraint,
            Err(error) => panic!("{error}"),
        }
    }

    fn sign(
        self,
        message_key: &'static str,
        default_message: &'static str,
        holds: fn(&N, &N) -> bool,
    ) -> Self {
        self.push(ConstraintPredicate::new(
            message_key,
            default_message,
            move |value: &N| violated_unless(holds(value, &N::ZERO), || smallvec![(*value).into()]),
        ))
    }

    /// Requires `value > 0`.
    #[must_use = "builder methods must be chained or built"]
    pub fn positive(self) -> Self {
        self.sign("number.positive", "\"{0}\" must be positive", |v, z| v > z)
    }

    /// Requires `value >= 0`.
    #[must_use = "builder methods must be chained or built"]
    pub fn positive_or_zero(self) -> Self {
        self.sign(
            "number.positiveOrZero",
            "\"{0}\" must be positive or 0",
            |v, z| v >= z,
        )
    }

    /// Requires `value < 0`.
    #[must_use = "builder methods must be chained or built"]
    pub fn negative(self) -> Self {
        self.sign("number.negative", "\"{0}\" must be negative", |v, z| v < z)
    }

    /// Requires `value <= 0`.
    #[must_use = "builder methods must be chained or built"]
    pub fn negative_or_zero(self) -> Self {
        self.sign(
            "number.negativeOrZero",
            "\"{0}\" must be negative or 0",
            |v, z| v <= z,
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
