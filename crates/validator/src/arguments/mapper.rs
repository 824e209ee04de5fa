//! Applying a mapper of matching arity to an argument tuple.

use crate::macros::for_each_arity;

/// A function that accepts the elements of the tuple `A` as separate
/// arguments.
///
/// Implemented for every `Fn(A1, ..., An) -> X + Send + Sync` with
/// `A = (A1, ..., An)` and `n` from 1 to 10, so a plain constructor such as
/// `User::new` can consume a validated tuple.
///
/// # Examples
///
/// ```
/// use verity_validator::arguments::ArgumentsMapper;
///
/// let area = |w: u32, h: u32| w * h;
/// assert_eq!(area.apply((3, 4)), 12);
/// ```
pub trait ArgumentsMapper<A>: Send + Sync {
    /// The mapped value.
    type Output;

    /// Calls the mapper with the elements of `args`.
    fn apply(&self, args: A) -> Self::Output;
}

macro_rules! impl_arguments_mapper {
    ($($arg:ident: $ty:ident),+) => {
        impl<F, X, $($ty),+> ArgumentsMapper<($($ty,)+)> for F
        where
            F: Fn($($ty),+) -> X + Send + Sync,
        {
            type Output = X;

            fn apply(&self, ($($arg,)+): ($($ty,)+)) -> X {
                self($($arg),+)
            }
        }
    };
}

for_each_arity!(impl_arguments_mapper);
