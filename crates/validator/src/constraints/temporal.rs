//! Temporal constraints backed by `chrono`.
//!
//! `past`/`future` and friends compare against the clock of the value type:
//! local wall-clock for naive types and [`DateTime<Local>`], UTC for
//! [`DateTime<Utc>`]. The clock is read at evaluation time, not at build
//! time.

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value;
use smallvec::smallvec;

use crate::constraints::ensure_range;
use crate::constraints::predicate::{
    Constrainable, Constraint, ConstraintPredicate, violated_unless,
};
use crate::foundation::ConstraintError;

mod sealed {
    pub trait Sealed {}
}

/// Date and time types usable with [`TemporalConstraint`].
pub trait Temporal: sealed::Sealed + Copy + PartialOrd + Display + Send + Sync + 'static {
    /// Current instant on this type's clock.
    fn now() -> Self;
}

macro_rules! impl_temporal {
    ($($ty:ty => $now:expr),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Temporal for $ty {
                fn now() -> Self {
                    $now
                }
            }

            impl Constrainable for $ty {
                type Constraint = TemporalConstraint<$ty>;
            }
        )+
    };
}

impl_temporal! {
    NaiveDate => Local::now().date_naive(),
    NaiveTime => Local::now().time(),
    NaiveDateTime => Local::now().naive_local(),
    DateTime<Utc> => Utc::now(),
    DateTime<Local> => Local::now(),
}

fn arg<T: Display>(value: &T) -> Value {
    Value::String(value.to_string())
}

/// Constraint builder for dates, times and timestamps.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use verity_validator::constraints::{Constraint, TemporalConstraint};
///
/// let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
/// let in_2024 = TemporalConstraint::default().between(from, to);
///
/// let mid_year = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// assert!(in_2024.predicates()[0].test(&mid_year));
/// assert!(!in_2024.predicates()[0].test(&from));
/// ```
#[derive(Debug)]
pub struct TemporalConstraint<T> {
    predicates: Vec<ConstraintPredicate<T>>,
}

impl<T> Default for TemporalConstraint<T> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }
}

impl<T: Temporal> Constraint for TemporalConstraint<T> {
    type Value = T;

    fn predicates(&self) -> &[ConstraintPredicate<T>] {
        &self.predicates
    }

    fn predicates_mut(&mut self) -> &mut Vec<ConstraintPredicate<T>> {
        &mut self.predicates
    }

    fn into_predicates(self) -> Vec<ConstraintPredicate<T>> {
        self.predicates
    }

    fn to_arg(value: &T) -> Value {
        arg(value)
    }
}

impl<T: Temporal> TemporalConstraint<T> {
    fn against<S>(
        self,
        message_key: &'static str,
        default_message: &'static str,
        bound: S,
        holds: fn(&T, &T) -> bool,
    ) -> Self
    where
        S: Fn() -> T + Send + Sync + 'static,
    {
        self.push(ConstraintPredicate::new(
            message_key,
            default_message,
            move |value: &T| {
                let bound = bound();
                violated_unless(holds(value, &bound), || smallvec![arg(value), arg(&bound)])
            },
        ))
    }

    /// Requires the value to be strictly before `end`.
    #[must_use = "builder methods must be chained or built"]
    pub fn before(self, end: T) -> Self {
        self.before_with(move || end)
    }

    /// Like [`before`](Self::before), with the bound supplied at evaluation time.
    #[must_use = "builder methods must be chained or built"]
    pub fn before_with(self, end: impl Fn() -> T + Send + Sync + 'static) -> Self {
        self.against("temporal.before", "\"{0}\" has to be before {2}", end, |v, b| v < b)
    }

    /// Requires the value to be before or equal to `end`.
    #[must_use = "builder methods must be chained or built"]
    pub fn before_or_equal(self, end: T) -> Self {
        self.before_or_equal_with(move || end)
    }

    /// Like [`before_or_equal`](Self::before_or_equal), with the bound supplied
    /// at evaluation time.
    #[must_use = "builder methods must be chained or built"]
    pub fn before_or_equal_with(self, end: impl Fn() -> T + Send + Sync + 'static) -> Self {
        self.against(
            "temporal.beforeOrEqual",
            "\"{0}\" has to be before or equal to {2}",
            end,
            |v, b| v <= b,
        )
    }

    /// Requires the value to be strictly after `start`.
    #[must_use = "builder methods must be chained or built"]
    pub fn after(self, start: T) -> Self {
        self.after_with(move || start)
    }

    /// Like [`after`](Self::after), with the bound supplied at evaluation time.
    #[must_use = "builder methods must be chained or built"]
    pub fn after_with(self, start: impl Fn() -> T + Send + Sync + 'static) -> Self {
        self.against("temporal.after", "\"{0}\" has to be after {2}", start, |v, b| v > b)
    }

    /// Requires the value to be after or equal to `start`.
    #[must_use = "builder methods must be chained or built"]
    pub fn after_or_equal(self, start: T) -> Self {
        self.after_or_equal_with(move || start)
    }

    /// Like [`after_or_equal`](Self::after_or_equal), with the bound supplied
    /// at evaluation time.
    #[must_use = "builder methods must be chained or built"]
    pub fn after_or_equal_with(self, start: impl Fn() -> T + Send + Sync + 'static) -> Self {
        self.against(
            "temporal.afterOrEqual",
            "\"{0}\" has to be after or equal to {2}",
            start,
            |v, b| v >= b,
        )
    }

    /// Requires `start < value < end`.
    ///
    /// # Errors
    ///
    /// [`ConstraintError::InvalidRange`] unless `start` is strictly before `end`.
    pub fn try_between(self, start: T, end: T) -> Result<Self, ConstraintError> {
        ensure_range(&start, &end)?;
        Ok(self.push(ConstraintPredicate::new(
            "temporal.between",
            "\"{0}\" has to be between {2} and {3}",
            move |value: &T| {
                violated_unless(*value > start && *value < end, || {
                    smallvec![arg(value), arg(&start), arg(&end)]
                })
            },
        )))
    }

    /// Requires `start < value < end`.
    ///
    /// # Panics
    ///
    /// Panics unless `start` is strictly before `end`.
    #[must_use = "builder methods must be chained or built"]
    pub fn between(self, start: T, end: T) -> Self {
        match self.try_between(start, end) {
            Ok(constraint) => constraint,
            Err(error) => panic!("{error}"),
        }
    }

    /// Like [`between`](Self::between), with both bounds supplied at
    /// evaluation time.
    ///
    /// # Panics
    ///
    /// Evaluation panics unless the supplied `start` is strictly before the
    /// supplied `end`.
    #[must_use = "builder methods must be chained or built"]
    pub fn between_with<S, E>(self, start: S, end: E) -> Self
    where
        S: Fn() -> T + Send + Sync + 'static,
        E: Fn() -> T + Send + Sync + 'static,
    {
        self.push(ConstraintPredicate::new(
            "temporal.between",
            "\"{0}\" has to be between {2} and {3}",
            move |value: &T| {
                let (start, end) = (start(), end());
                if let Err(error) = ensure_range(&start, &end) {
                    panic!("{error}");
                }
                violated_unless(*value > start && *value < end, || {
                    smallvec![arg(value), arg(&start), arg(&end)]
                })
            },
        ))
    }

    /// Requires the value to lie strictly in the past.
    #[must_use = "builder methods must be chained or built"]
    pub fn past(self) -> Self {
        self.against("temporal.past", "\"{0}\" must be a past date", T::now, |v, now| {
            v < now
        })
    }

    /// Requires the value to lie in the past or be now.
    #[must_use = "builder methods must be chained or built"]
    pub fn past_or_present(self) -> Self {
        self.against(
            "temporal.pastOrPresent",
            "\"{0}\" must be a date in the past or in the present",
            T::now,
            |v, now| v <= now,
        )
    }

    /// Requires the value to lie strictly in the future.
    #[must_use = "builder methods must be chained or built"]
    pub fn future(self) -> Self {
        self.against("temporal.future", "\"{0}\" must be a future date", T::now, |v, now| {
            v > now
        })
    }

    /// Requires the value to lie in the future or be now.
    #[must_use = "builder methods must be chained or built"]
    pub fn future_or_present(self) -> Self {
        self.against(
            "temporal.futureOrPresent",
            "\"{0}\" must be a date in the present or in the future",
            T::now,
            |v, now| v >= now,
        )
    }
}
