//! Named predicates and the shared constraint-builder behaviour.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;
use smallvec::smallvec;

use crate::foundation::{Args, ConstraintViolation};

// ============================================================================
// CONSTRAINT PREDICATE
// ============================================================================

/// How a predicate treats an absent field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullAs {
    /// Absence satisfies the predicate.
    #[default]
    Valid,
    /// Absence violates the predicate with arguments `[null]`.
    Invalid,
}

/// A named test over one field value that yields its violated arguments on
/// failure.
///
/// The test itself only ever sees present values; what an absent value means
/// is decided by the predicate's [`NullAs`] policy.
pub struct ConstraintPredicate<V> {
    message_key: Cow<'static, str>,
    default_message: Cow<'static, str>,
    null_as: NullAs,
    check: Box<dyn Fn(&V) -> Option<Args> + Send + Sync>,
}

impl<V> ConstraintPredicate<V> {
    /// Creates a predicate that treats an absent value as satisfied.
    ///
    /// `check` returns `None` when `value` satisfies the constraint and the
    /// violated arguments otherwise.
    pub fn new<F>(
        message_key: impl Into<Cow<'static, str>>,
        default_message: impl Into<Cow<'static, str>>,
        check: F,
    ) -> Self
    where
        F: Fn(&V) -> Option<Args> + Send + Sync + 'static,
    {
        Self::with_null_as(message_key, default_message, NullAs::Valid, check)
    }

    /// Creates a predicate with an explicit policy for absent values.
    pub fn with_null_as<F>(
        message_key: impl Into<Cow<'static, str>>,
        default_message: impl Into<Cow<'static, str>>,
        null_as: NullAs,
        check: F,
    ) -> Self
    where
        F: Fn(&V) -> Option<Args> + Send + Sync + 'static,
    {
        Self {
            message_key: message_key.into(),
            default_message: default_message.into(),
            null_as,
            check: Box::new(check),
        }
    }

    /// Returns the message key.
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Returns the fallback message template.
    pub fn default_message(&self) -> &str {
        &self.default_message
    }

    /// Returns the policy for absent values.
    pub fn null_as(&self) -> NullAs {
        self.null_as
    }

    /// Returns true if `value` satisfies the predicate.
    pub fn test(&self, value: &V) -> bool {
        (self.check)(value).is_none()
    }

    /// Evaluates the predicate, returning the violated arguments on failure.
    pub fn check(&self, value: Option<&V>) -> Option<Args> {
        match (value, self.null_as) {
            (Some(value), _) => (self.check)(value),
            (None, NullAs::Valid) => None,
            (None, NullAs::Invalid) => Some(smallvec![Value::Null]),
        }
    }

    /// Builds the violation reported for field `name` when this predicate fails.
    pub(crate) fn violation(&self, name: &str, args: Args) -> ConstraintViolation {
        ConstraintViolation::new(
            name,
            self.message_key.clone(),
            self.default_message.clone(),
            args,
        )
    }

    pub(crate) fn set_message(
        &mut self,
        message_key: Option<Cow<'static, str>>,
        default_message: Cow<'static, str>,
    ) {
        if let Some(key) = message_key {
            self.message_key = key;
        }
        self.default_message = default_message;
    }
}

impl<V> fmt::Debug for ConstraintPredicate<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintPredicate")
            .field("message_key", &self.message_key)
            .field("default_message", &self.default_message)
            .field("null_as", &self.null_as)
            .field("check", &"<function>")
            .finish()
    }
}

/// Returns `None` when `satisfied`, otherwise the arguments built by `args`.
pub(crate) fn violated_unless(satisfied: bool, args: impl FnOnce() -> Args) -> Option<Args> {
    if satisfied { None } else { Some(args()) }
}

// ============================================================================
// CUSTOM CONSTRAINT
// ============================================================================

/// A reusable, user-defined rule.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use verity_validator::constraints::{CharSequenceConstraint, Constraint, CustomConstraint};
///
/// struct IsbnLength;
///
/// impl CustomConstraint<String> for IsbnLength {
///     fn message_key(&self) -> Cow<'static, str> {
///         "isbn.length".into()
///     }
///
///     fn default_message(&self) -> Cow<'static, str> {
///         "\"{0}\" must have 10 or 13 digits".into()
///     }
///
///     fn test(&self, value: &String) -> bool {
///         matches!(value.chars().filter(char::is_ascii_digit).count(), 10 | 13)
///     }
/// }
///
/// let constraint = CharSequenceConstraint::default().custom(IsbnLength);
/// assert_eq!(constraint.predicates()[0].message_key(), "isbn.length");
/// ```
pub trait CustomConstraint<V>: Send + Sync + 'static {
    /// Message key of the violation.
    fn message_key(&self) -> Cow<'static, str>;

    /// Fallback message template of the violation.
    fn default_message(&self) -> Cow<'static, str>;

    /// Returns true if `value` is acceptable.
    fn test(&self, value: &V) -> bool;

    /// Extra violated arguments appended after the actual value.
    fn arguments(&self, _value: &V) -> Args {
        Args::new()
    }
}

// ============================================================================
// CONSTRAINT BUILDER TRAIT
// ============================================================================

/// Behaviour shared by every constraint builder.
///
/// A constraint builder accumulates [`ConstraintPredicate`]s for one value
/// type; the validator builder later binds them to a field.
pub trait Constraint: Sized {
    /// The field value type.
    type Value: 'static;

    /// Returns the predicates collected so far.
    fn predicates(&self) -> &[ConstraintPredicate<Self::Value>];

    /// Mutable access to the collected predicates.
    fn predicates_mut(&mut self) -> &mut Vec<ConstraintPredicate<Self::Value>>;

    /// Consumes the builder and returns its predicates.
    fn into_predicates(self) -> Vec<ConstraintPredicate<Self::Value>>;

    /// Renders a value as a violation argument.
    fn to_arg(value: &Self::Value) -> Value;

    /// Appends a predicate.
    #[must_use = "builder methods must be chained or built"]
    fn push(mut self, predicate: ConstraintPredicate<Self::Value>) -> Self {
        self.predicates_mut().push(predicate);
        self
    }

    /// Requires the value to be present.
    #[must_use = "builder methods must be chained or built"]
    fn not_null(self) -> Self {
        self.push(ConstraintPredicate::with_null_as(
            "object.notNull",
            "\"{0}\" must not be null",
            NullAs::Invalid,
            |_: &Self::Value| None,
        ))
    }

    /// Requires the value to be absent.
    #[must_use = "builder methods must be chained or built"]
    fn is_null(self) -> Self {
        let to_arg: fn(&Self::Value) -> Value = Self::to_arg;
        self.push(ConstraintPredicate::new(
            "object.isNull",
            "\"{0}\" must be null",
            move |value: &Self::Value| Some(smallvec![to_arg(value)]),
        ))
    }

    /// Adds an ad-hoc rule. Absent values pass.
    #[must_use = "builder methods must be chained or built"]
    fn predicate<F>(
        self,
        message_key: impl Into<Cow<'static, str>>,
        default_message: impl Into<Cow<'static, str>>,
        test: F,
    ) -> Self
    where
        F: Fn(&Self::Value) -> bool + Send + Sync + 'static,
    {
        let to_arg: fn(&Self::Value) -> Value = Self::to_arg;
        self.push(ConstraintPredicate::new(
            message_key,
            default_message,
            move |value: &Self::Value| violated_unless(test(value), || smallvec![to_arg(value)]),
        ))
    }

    /// Adds an ad-hoc rule that an absent value violates.
    #[must_use = "builder methods must be chained or built"]
    fn predicate_nullable<F>(
        self,
        message_key: impl Into<Cow<'static, str>>,
        default_message: impl Into<Cow<'static, str>>,
        test: F,
    ) -> Self
    where
        F: Fn(&Self::Value) -> bool + Send + Sync + 'static,
    {
        let to_arg: fn(&Self::Value) -> Value = Self::to_arg;
        self.push(ConstraintPredicate::with_null_as(
            message_key,
            default_message,
            NullAs::Invalid,
            move |value: &Self::Value| violated_unless(test(value), || smallvec![to_arg(value)]),
        ))
    }

    /// Adds a [`CustomConstraint`].
    #[must_use = "builder methods must be chained or built"]
    fn custom<C>(self, constraint: C) -> Self
    where
        C: CustomConstraint<Self::Value>,
    {
        let to_arg: fn(&Self::Value) -> Value = Self::to_arg;
        let message_key = constraint.message_key();
        let default_message = constraint.default_message();
        self.push(ConstraintPredicate::new(
            message_key,
            default_message,
            move |value: &Self::Value| {
                violated_unless(constraint.test(value), || {
                    let mut args: Args = smallvec![to_arg(value)];
                    args.extend(constraint.arguments(value));
                    args
                })
            },
        ))
    }

    /// Replaces the fallback message of the most recently added predicate.
    #[must_use = "builder methods must be chained or built"]
    fn message(mut self, default_message: impl Into<Cow<'static, str>>) -> Self {
        if let Some(last) = self.predicates_mut().last_mut() {
            last.set_message(None, default_message.into());
        }
        self
    }

    /// Replaces key and fallback message of the most recently added predicate.
    #[must_use = "builder methods must be chained or built"]
    fn message_with(
        mut self,
        message_key: impl Into<Cow<'static, str>>,
        default_message: impl Into<Cow<'static, str>>,
    ) -> Self {
        if let Some(last) = self.predicates_mut().last_mut() {
            last.set_message(Some(message_key.into()), default_message.into());
        }
        self
    }
}

/// Value types with a dedicated constraint builder.
///
/// This is what lets [`ValidatorBuilder::constraint`](crate::ValidatorBuilder::constraint)
/// infer the builder from the field type.
pub trait Constrainable: Sized + 'static {
    /// The builder used for fields of this type.
    type Constraint: Constraint<Value = Self> + Default;
}
