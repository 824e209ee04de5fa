//! Fluent construction of [`Validator`]s.

use std::borrow::Cow;
use std::sync::Arc;

use crate::combinators::{
    CollectionValidator, ConditionalValidator, ConstraintPredicates, NestedValidator,
};
use crate::constraints::predicate::violated_unless;
use crate::constraints::{Constrainable, Constraint, ConstraintPredicate};
use crate::foundation::{
    Args, BoxedSubset, ConstraintCondition, ConstraintGroup, MessageFormatter,
    SimpleMessageFormatter, ValidatorSubset,
};
use crate::validator::{Inner, Validator};

/// Collects rule sets for `T` and freezes them into a [`Validator`].
///
/// Rules are evaluated in the order they are added, within three phases:
/// field and nested rules first, then [`for_each`](Self::for_each)
/// collection rules, then conditional rules.
///
/// # Examples
///
/// ```
/// use verity_validator::prelude::*;
///
/// struct Address {
///     city: String,
/// }
///
/// struct Customer {
///     name: String,
///     email: Option<String>,
///     address: Address,
/// }
///
/// let address = ValidatorBuilder::<Address>::new()
///     .constraint("city", |a| &a.city, |c| c.not_blank())
///     .build();
///
/// let customer = ValidatorBuilder::<Customer>::new()
///     .constraint("name", |c| &c.name, |c| c.not_blank().max_length(50))
///     .constraint_opt("email", |c| c.email.as_ref(), |c| c.not_null().email())
///     .nest("address", |c| &c.address, address)
///     .build();
///
/// let violations = customer.validate(&Customer {
///     name: "Ann".into(),
///     email: None,
///     address: Address { city: " ".into() },
/// });
/// let names: Vec<_> = violations.iter().map(|v| v.name()).collect();
/// assert_eq!(names, ["email", "address.city"]);
/// ```
pub struct ValidatorBuilder<T> {
    predicates: Vec<BoxedSubset<T>>,
    collection_validators: Vec<BoxedSubset<T>>,
    conditional_validators: Vec<ConditionalValidator<T>>,
    message_formatter: Option<Arc<dyn MessageFormatter>>,
    fail_fast: bool,
}

impl<T> Default for ValidatorBuilder<T> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
            collection_validators: Vec::new(),
            conditional_validators: Vec::new(),
            message_formatter: None,
            fail_fast: false,
        }
    }
}

impl<T> ValidatorBuilder<T> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: 'static> ValidatorBuilder<T> {
    // ------------------------------------------------------------------------
    // Field rules
    // ------------------------------------------------------------------------

    /// Adds rules for a field whose type has a dedicated constraint builder.
    ///
    /// `rules` receives an empty builder for the field type and returns it
    /// with the desired predicates added.
    #[must_use = "builder methods must be chained or built"]
    pub fn constraint<V, F, R>(self, name: impl Into<String>, accessor: F, rules: R) -> Self
    where
        V: Constrainable,
        F: for<'a> Fn(&'a T) -> &'a V + Send + Sync + 'static,
        R: FnOnce(V::Constraint) -> V::Constraint,
    {
        self.constraint_opt(name, move |target| Some(accessor(target)), rules)
    }

    /// Adds rules for an optional field. An absent value only violates
    /// predicates that reject absence, such as `not_null`.
    #[must_use = "builder methods must be chained or built"]
    pub fn constraint_opt<V, F, R>(self, name: impl Into<String>, accessor: F, rules: R) -> Self
    where
        V: Constrainable,
        F: for<'a> Fn(&'a T) -> Option<&'a V> + Send + Sync + 'static,
        R: FnOnce(V::Constraint) -> V::Constraint,
    {
        let constraint = rules(V::Constraint::default());
        self.field(name, accessor, constraint.into_predicates())
    }

    /// Adds an already configured constraint builder for a field, for types
    /// without a dedicated builder (e.g. with [`ObjectConstraint`](crate::constraints::ObjectConstraint)).
    #[must_use = "builder methods must be chained or built"]
    pub fn constraint_using<C, F>(self, name: impl Into<String>, accessor: F, constraint: C) -> Self
    where
        C: Constraint,
        F: for<'a> Fn(&'a T) -> &'a C::Value + Send + Sync + 'static,
    {
        self.field(
            name,
            move |target| Some(accessor(target)),
            constraint.into_predicates(),
        )
    }

    /// Adds a rule over the whole target, reported under `name`.
    #[must_use = "builder methods must be chained or built"]
    pub fn constraint_on_target<F>(
        self,
        name: impl Into<String>,
        message_key: impl Into<Cow<'static, str>>,
        default_message: impl Into<Cow<'static, str>>,
        test: F,
    ) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let predicate = ConstraintPredicate::new(message_key, default_message, move |target: &T| {
            violated_unless(test(target), Args::new)
        });
        self.field(name, |target: &T| Some(target), vec![predicate])
    }

    fn field<V, F>(
        mut self,
        name: impl Into<String>,
        accessor: F,
        predicates: Vec<ConstraintPredicate<V>>,
    ) -> Self
    where
        V: 'static,
        F: for<'a> Fn(&'a T) -> Option<&'a V> + Send + Sync + 'static,
    {
        self.predicates
            .push(Box::new(ConstraintPredicates::new(name, accessor, predicates)));
        self
    }

    // ------------------------------------------------------------------------
    // Nested objects
    // ------------------------------------------------------------------------

    /// Validates a sub-object with its own validator; violation names are
    /// prefixed with `"<name>."`.
    #[must_use = "builder methods must be chained or built"]
    pub fn nest<N, F, V>(self, name: impl Into<String>, accessor: F, validator: V) -> Self
    where
        N: 'static,
        F: for<'a> Fn(&'a T) -> &'a N + Send + Sync + 'static,
        V: ValidatorSubset<Target = N> + 'static,
    {
        self.nest_if_present(name, move |target| Some(accessor(target)), validator)
    }

    /// Like [`nest`](Self::nest), skipping the sub-object when absent.
    #[must_use = "builder methods must be chained or built"]
    pub fn nest_if_present<N, F, V>(
        mut self,
        name: impl Into<String>,
        accessor: F,
        validator: V,
    ) -> Self
    where
        N: 'static,
        F: for<'a> Fn(&'a T) -> Option<&'a N> + Send + Sync + 'static,
        V: ValidatorSubset<Target = N> + 'static,
    {
        self.predicates.push(Box::new(NestedValidator::new(
            name,
            accessor,
            Box::new(validator),
        )));
        self
    }

    // ------------------------------------------------------------------------
    // Collections
    // ------------------------------------------------------------------------

    /// Validates every element of a list field; violation names are prefixed
    /// with `"<name>[i]."`.
    #[must_use = "builder methods must be chained or built"]
    pub fn for_each<E, F, V>(self, name: impl Into<String>, accessor: F, validator: V) -> Self
    where
        E: 'static,
        F: for<'a> Fn(&'a T) -> &'a [E] + Send + Sync + 'static,
        V: ValidatorSubset<Target = E> + 'static,
    {
        self.for_each_if_present(name, move |target| Some(accessor(target)), validator)
    }

    /// Like [`for_each`](Self::for_each), skipping an absent list.
    #[must_use = "builder methods must be chained or built"]
    pub fn for_each_if_present<E, F, V>(
        mut self,
        name: impl Into<String>,
        accessor: F,
        validator: V,
    ) -> Self
    where
        E: 'static,
        F: for<'a> Fn(&'a T) -> Option<&'a [E]> + Send + Sync + 'static,
        V: ValidatorSubset<Target = E> + 'static,
    {
        self.collection_validators
            .push(Box::new(CollectionValidator::new(
                name,
                accessor,
                Box::new(validator),
            )));
        self
    }

    // ------------------------------------------------------------------------
    // Conditions
    // ------------------------------------------------------------------------

    /// Runs `validator` only when `condition` accepts the target and group.
    #[must_use = "builder methods must be chained or built"]
    pub fn constraint_on_condition<C, V>(mut self, condition: C, validator: V) -> Self
    where
        C: ConstraintCondition<T> + 'static,
        V: ValidatorSubset<Target = T> + 'static,
    {
        self.conditional_validators.push(ConditionalValidator::new(
            Box::new(condition),
            Box::new(validator),
        ));
        self
    }

    /// Runs `validator` only when validating under `group`.
    #[must_use = "builder methods must be chained or built"]
    pub fn constraint_on_group<V>(self, group: ConstraintGroup, validator: V) -> Self
    where
        V: ValidatorSubset<Target = T> + 'static,
    {
        self.constraint_on_condition(group, validator)
    }

    // ------------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------------

    /// Sets the formatter used to render messages of this validator's
    /// violations. Defaults to [`SimpleMessageFormatter`].
    #[must_use = "builder methods must be chained or built"]
    pub fn message_formatter(mut self, formatter: impl MessageFormatter + 'static) -> Self {
        self.message_formatter = Some(Arc::new(formatter));
        self
    }

    /// Stops at the first violation instead of collecting all of them.
    #[must_use = "builder methods must be chained or built"]
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Freezes the rules into a validator.
    pub fn build(self) -> Validator<T> {
        Validator::from_inner(Inner {
            predicates: self.predicates,
            collection_validators: self.collection_validators,
            conditional_validators: self.conditional_validators,
            message_formatter: self
                .message_formatter
                .unwrap_or_else(|| Arc::new(SimpleMessageFormatter)),
            fail_fast: self.fail_fast,
        })
    }
}

impl<T> std::fmt::Debug for ValidatorBuilder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("predicates", &self.predicates.len())
            .field("collection_validators", &self.collection_validators.len())
            .field("conditional_validators", &self.conditional_validators.len())
            .field("fail_fast", &self.fail_fast)
            .finish_non_exhaustive()
    }
}
