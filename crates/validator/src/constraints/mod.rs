//! Constraint builders
//!
//! Every builder collects [`ConstraintPredicate`]s for one value type and
//! shares the behaviour of the [`Constraint`] trait (`not_null`, `predicate`,
//! `custom`, `message`, ...).
//!
//! | Value type | Builder |
//! |---|---|
//! | integers, floats | [`NumericConstraint`] |
//! | `String` | [`CharSequenceConstraint`] |
//! | `bool` | [`BooleanConstraint`] |
//! | `Vec<E>` | [`CollectionConstraint`] |
//! | chrono dates and times | [`TemporalConstraint`] (feature `temporal`) |
//! | anything `Debug + PartialEq` | [`ObjectConstraint`] |

use std::fmt::Display;

use crate::foundation::ConstraintError;

pub mod boolean;
pub mod collection;
pub mod numeric;
pub mod object;
pub mod predicate;
pub mod string;
#[cfg(feature = "temporal")]
pub mod temporal;

pub use boolean::BooleanConstraint;
pub use collection::CollectionConstraint;
pub use numeric::{Number, NumericConstraint};
pub use object::ObjectConstraint;
pub use predicate::{Constrainable, Constraint, ConstraintPredicate, CustomConstraint, NullAs};
pub use string::CharSequenceConstraint;
#[cfg(feature = "temporal")]
pub use temporal::{Temporal, TemporalConstraint};

/// Checks that `from` is strictly before `to`.
pub(crate) fn ensure_range<T: PartialOrd + Display>(from: &T, to: &T) -> Result<(), ConstraintError> {
    if from < to {
        Ok(())
    } else {
        Err(ConstraintError::invalid_range(from, to))
    }
}
