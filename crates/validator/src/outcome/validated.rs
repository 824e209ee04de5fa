//! Accumulating validation outcome.

use crate::arguments::{ArgumentsMapper, Combine};
use crate::foundation::{ConstraintViolations, ConstraintViolationsError};
use crate::outcome::Either;

/// The outcome of validating a value: the value itself, or every violation
/// found.
///
/// Unlike `Result`, several `Validated` values can be merged with
/// [`combine`](Self::combine) so that the violations of all of them are
/// reported together.
///
/// # Examples
///
/// ```
/// use verity_validator::prelude::*;
///
/// let age = ValidatorBuilder::<i32>::new()
///     .constraint("age", |n| n, |c| c.positive())
///     .build();
/// let name = ValidatorBuilder::<String>::new()
///     .constraint("name", |s| s, |c| c.not_blank())
///     .build();
///
/// let combined = Validated::combine((
///     age.applicative().validate(-1),
///     name.applicative().validate(String::new()),
/// ));
/// assert_eq!(combined.errors().map(ConstraintViolations::len), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Validated<T> {
    /// Every constraint held.
    Valid(T),
    /// At least one constraint was violated.
    Invalid(ConstraintViolations),
}

impl<T> Validated<T> {
    /// Wraps a valid value.
    pub const fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Wraps the violations of a failed pass.
    pub const fn invalid(violations: ConstraintViolations) -> Self {
        Self::Invalid(violations)
    }

    /// Returns true for `Valid`.
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns the value, if valid.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Returns the violations, if invalid.
    pub const fn errors(&self) -> Option<&ConstraintViolations> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(violations) => Some(violations),
        }
    }

    /// Transforms the value, leaving `Invalid` untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validated<U> {
        match self {
            Self::Valid(value) => Validated::Valid(f(value)),
            Self::Invalid(violations) => Validated::Invalid(violations),
        }
    }

    /// Chains a further validation on the value.
    pub fn flat_map<U>(self, f: impl FnOnce(T) -> Validated<U>) -> Validated<U> {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(violations) => Validated::Invalid(violations),
        }
    }

    /// Collapses both states into one value.
    pub fn fold<U>(
        self,
        on_invalid: impl FnOnce(ConstraintViolations) -> U,
        on_valid: impl FnOnce(T) -> U,
    ) -> U {
        match self {
            Self::Valid(value) => on_valid(value),
            Self::Invalid(violations) => on_invalid(violations),
        }
    }

    /// Returns the value, or one derived from the violations.
    pub fn or_else_get(self, f: impl FnOnce(ConstraintViolations) -> T) -> T {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(violations) => f(violations),
        }
    }

    /// Returns the value, or the violations as an error.
    ///
    /// # Errors
    ///
    /// [`ConstraintViolationsError`] carrying every violation when invalid.
    pub fn or_else_throw(self) -> Result<T, ConstraintViolationsError> {
        self.into_result().map_err(ConstraintViolationsError::new)
    }

    /// Converts into an [`Either`] with the violations on the left.
    pub fn into_either(self) -> Either<ConstraintViolations, T> {
        match self {
            Self::Valid(value) => Either::Right(value),
            Self::Invalid(violations) => Either::Left(violations),
        }
    }

    /// Converts into a `Result`.
    ///
    /// # Errors
    ///
    /// The violations when invalid.
    pub fn into_result(self) -> Result<T, ConstraintViolations> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(violations) => Err(violations),
        }
    }

    /// Feeds a valid tuple into a mapper of matching arity.
    ///
    /// ```
    /// use verity_validator::outcome::Validated;
    ///
    /// let point = Validated::valid((3, 4)).apply(|x: i32, y: i32| x * x + y * y);
    /// assert_eq!(point.value(), Some(&25));
    /// ```
    pub fn apply<M>(self, mapper: M) -> Validated<M::Output>
    where
        M: ArgumentsMapper<T>,
    {
        self.map(|args| mapper.apply(args))
    }

    /// Merges a tuple of `Validated` values into one.
    ///
    /// The result is valid only if every input is; otherwise it carries the
    /// violations of all invalid inputs, in tuple order.
    pub fn combine<C>(validated: C) -> Self
    where
        C: Combine<Output = T>,
    {
        validated.combine()
    }
}

impl<T> From<Validated<T>> for Either<ConstraintViolations, T> {
    fn from(validated: Validated<T>) -> Self {
        validated.into_either()
    }
}

impl<T> From<Either<ConstraintViolations, T>> for Validated<T> {
    fn from(either: Either<ConstraintViolations, T>) -> Self {
        either.fold(Validated::Invalid, Validated::Valid)
    }
}
