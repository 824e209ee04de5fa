//! Validating argument tuples before handing them to a constructor.

use std::sync::Arc;

use crate::arguments::ArgumentsMapper;
use crate::foundation::{
    ConstraintGroup, ConstraintViolations, ConstraintViolationsError, Locale,
};
use crate::outcome::{Either, Validated};
use crate::validator::Validator;

/// Validates an argument tuple `A` and, when every constraint holds, maps it
/// to an `X`.
///
/// The mapper only ever sees valid arguments.
///
/// # Examples
///
/// ```
/// use verity_validator::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl Money {
///     fn new(amount: i64, currency: String) -> Self {
///         Self { amount, currency }
///     }
/// }
///
/// let money = ArgumentsValidator::new(
///     ValidatorBuilder::<(i64, String)>::new()
///         .constraint("amount", |a| &a.0, |c| c.positive_or_zero())
///         .constraint("currency", |a| &a.1, |c| c.fixed_length(3))
///         .build(),
///     Money::new,
/// );
///
/// let ok = money.validate((100, "EUR".to_string()));
/// assert_eq!(ok.value(), Some(&Money::new(100, "EUR".to_string())));
///
/// let bad = money.validate((-1, "EURO".to_string()));
/// assert_eq!(bad.errors().map(ConstraintViolations::len), Some(2));
/// ```
pub struct ArgumentsValidator<A, X> {
    validator: Validator<A>,
    mapper: Arc<dyn Fn(A) -> X + Send + Sync>,
}

impl<A, X> Clone for ArgumentsValidator<A, X> {
    fn clone(&self) -> Self {
        Self {
            validator: self.validator.clone(),
            mapper: Arc::clone(&self.mapper),
        }
    }
}

impl<A: 'static, X: 'static> ArgumentsValidator<A, X> {
    /// Pairs a validator of the argument tuple with a mapper of matching
    /// arity.
    pub fn new<M>(validator: Validator<A>, mapper: M) -> Self
    where
        M: ArgumentsMapper<A, Output = X> + 'static,
    {
        Self {
            validator,
            mapper: Arc::new(move |args: A| mapper.apply(args)),
        }
    }

    /// Returns the validator of the argument tuple.
    pub fn validator(&self) -> &Validator<A> {
        &self.validator
    }

    /// Validates under the root locale and default group.
    pub fn validate(&self, args: A) -> Validated<X> {
        self.validate_with(args, &Locale::ROOT, &ConstraintGroup::DEFAULT)
    }

    /// Validates under the given locale and group.
    pub fn validate_with(&self, args: A, locale: &Locale, group: &ConstraintGroup) -> Validated<X> {
        let violations = self.validator.validate_with(&args, locale, group);
        if violations.is_valid() {
            Validated::Valid((self.mapper)(args))
        } else {
            Validated::Invalid(violations)
        }
    }

    /// Validates, yielding the violations on the left or the mapped value on
    /// the right.
    pub fn validate_args(&self, args: A) -> Either<ConstraintViolations, X> {
        self.validate(args).into_either()
    }

    /// Validates and maps, or fails with every violation.
    ///
    /// # Errors
    ///
    /// [`ConstraintViolationsError`] when any constraint is violated.
    pub fn validated(&self, args: A) -> Result<X, ConstraintViolationsError> {
        self.validate(args).or_else_throw()
    }

    /// Chains a further transformation after the mapper.
    pub fn and_then<Y, F>(self, f: F) -> ArgumentsValidator<A, Y>
    where
        F: Fn(X) -> Y + Send + Sync + 'static,
    {
        let mapper = self.mapper;
        ArgumentsValidator {
            validator: self.validator,
            mapper: Arc::new(move |args: A| f(mapper(args))),
        }
    }
}

impl<A, X> ArgumentsValidator<A, X>
where
    A: Send + 'static,
    X: 'static,
{
    /// Defers the mapper: a successful pass yields a closure that builds the
    /// value when called.
    pub fn lazy(self) -> ArgumentsValidator<A, Box<dyn FnOnce() -> X + Send>> {
        let mapper = self.mapper;
        ArgumentsValidator {
            validator: self.validator,
            mapper: Arc::new(move |args: A| {
                let mapper = Arc::clone(&mapper);
                Box::new(move || mapper(args)) as Box<dyn FnOnce() -> X + Send>
            }),
        }
    }
}

impl<A, X> std::fmt::Debug for ArgumentsValidator<A, X> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentsValidator")
            .field("validator", &self.validator)
            .field("mapper", &"<function>")
            .finish()
    }
}
