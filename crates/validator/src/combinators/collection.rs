//! Per-element validation of list-valued fields.

use crate::foundation::{BoxedSubset, ConstraintViolation, ValidationContext, ValidatorSubset};

/// Borrowing accessor from a target to one of its list fields.
pub type SliceExtractor<T, E> = Box<dyn for<'a> Fn(&'a T) -> Option<&'a [E]> + Send + Sync>;

/// Applies an element validator to every member of a list field.
///
/// Violations of the element at index `i` are renamed to `"<name>[i].<path>"`
/// and emitted in element order. An empty or absent list emits nothing.
///
/// # Examples
///
/// ```
/// use verity_validator::prelude::*;
///
/// struct Line {
///     quantity: u32,
/// }
///
/// struct Order {
///     lines: Vec<Line>,
/// }
///
/// let line = ValidatorBuilder::<Line>::new()
///     .constraint("quantity", |l| &l.quantity, |c| c.positive())
///     .build();
/// let order = ValidatorBuilder::<Order>::new()
///     .for_each("lines", |o| o.lines.as_slice(), line)
///     .build();
///
/// let violations = order.validate(&Order {
///     lines: vec![Line { quantity: 1 }, Line { quantity: 0 }],
/// });
/// assert_eq!(violations.violations()[0].name(), "lines[1].quantity");
/// ```
pub struct CollectionValidator<T, E> {
    name: String,
    extractor: SliceExtractor<T, E>,
    validator: BoxedSubset<E>,
}

impl<T, E> CollectionValidator<T, E> {
    /// Creates a collection validator for the field `name`.
    pub fn new<F>(name: impl Into<String>, extractor: F, validator: BoxedSubset<E>) -> Self
    where
        F: for<'a> Fn(&'a T) -> Option<&'a [E]> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            extractor: Box::new(extractor),
            validator,
        }
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T, E> ValidatorSubset for CollectionValidator<T, E> {
    type Target = T;

    fn validate_into(
        &self,
        target: &T,
        ctx: &ValidationContext<'_>,
        out: &mut Vec<ConstraintViolation>,
    ) {
        let Some(elements) = (self.extractor)(target) else {
            return;
        };
        let mut element_violations = Vec::new();
        for (index, element) in elements.iter().enumerate() {
            self.validator
                .validate_into(element, ctx, &mut element_violations);
            if element_violations.is_empty() {
                continue;
            }
            let prefix = format!("{}[{index}].", self.name);
            out.extend(
                element_violations
                    .drain(..)
                    .map(|v| v.with_prefix(&prefix)),
            );
            if ctx.is_fail_fast() {
                return;
            }
        }
    }
}

impl<T, E> std::fmt::Debug for CollectionValidator<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionValidator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
