//! Merging tuples of [`Validated`] values.

use crate::foundation::ConstraintViolations;
use crate::macros::for_each_arity;
use crate::outcome::Validated;

/// A tuple of [`Validated`] values that can be merged into a single
/// `Validated` of the tuple of their values.
///
/// Implemented for tuples of 1 to 10 elements. See
/// [`Validated::combine`].
pub trait Combine {
    /// Tuple of the wrapped value types.
    type Output;

    /// Merges the tuple, accumulating the violations of every invalid
    /// element in tuple order.
    fn combine(self) -> Validated<Self::Output>;
}

fn collect<T>(validated: Validated<T>, errors: &mut Option<ConstraintViolations>) -> Option<T> {
    match validated {
        Validated::Valid(value) => Some(value),
        Validated::Invalid(violations) => {
            match errors {
                Some(accumulated) => accumulated.append(violations),
                None => *errors = Some(violations),
            }
            None
        }
    }
}

macro_rules! impl_combine {
    ($($arg:ident: $ty:ident),+) => {
        impl<$($ty),+> Combine for ($(Validated<$ty>,)+) {
            type Output = ($($ty,)+);

            fn combine(self) -> Validated<Self::Output> {
                let ($($arg,)+) = self;
                let mut errors = None;
                $(let $arg = collect($arg, &mut errors);)+
                match ($($arg,)+) {
                    ($(Some($arg),)+) => Validated::Valid(($($arg,)+)),
                    _ => Validated::Invalid(errors.unwrap_or_default()),
                }
            }
        }
    };
}

for_each_arity!(impl_combine);
