//! Two-armed sum type.

use serde::{Deserialize, Serialize};

/// Either a `Left(L)` or a `Right(R)`, never both and never neither.
///
/// By convention `Left` carries the failure and `Right` the success, so
/// [`map`](Self::map) is right-biased.
///
/// # Examples
///
/// ```
/// use verity_validator::outcome::Either;
///
/// let parsed: Either<String, i32> = Either::Right(20);
/// let doubled = parsed.map(|n| n * 2);
/// assert_eq!(doubled.right(), Some(&40));
///
/// let message = doubled.fold(|err| err, |n| format!("ok: {n}"));
/// assert_eq!(message, "ok: 40");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Either<L, R> {
    /// The left arm, by convention the failure.
    Left(L),
    /// The right arm, by convention the success.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns true for `Left`.
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns true for `Right`.
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns the left value, if present.
    pub const fn left(&self) -> Option<&L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    /// Returns the right value, if present.
    pub const fn right(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    /// Consumes `self`, returning the left value if present.
    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    /// Consumes `self`, returning the right value if present.
    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    /// Borrows both arms.
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Alias of [`right_map`](Self::right_map).
    pub fn map<U, F: FnOnce(R) -> U>(self, f: F) -> Either<L, U> {
        self.right_map(f)
    }

    /// Transforms the right value, leaving `Left` untouched.
    pub fn right_map<U, F: FnOnce(R) -> U>(self, f: F) -> Either<L, U> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(f(r)),
        }
    }

    /// Transforms the left value, leaving `Right` untouched.
    pub fn left_map<U, F: FnOnce(L) -> U>(self, f: F) -> Either<U, R> {
        match self {
            Self::Left(l) => Either::Left(f(l)),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Chains a computation on the right value.
    pub fn right_flat_map<U, F: FnOnce(R) -> Either<L, U>>(self, f: F) -> Either<L, U> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => f(r),
        }
    }

    /// Collapses both arms into one value.
    pub fn fold<U>(self, on_left: impl FnOnce(L) -> U, on_right: impl FnOnce(R) -> U) -> U {
        match self {
            Self::Left(l) => on_left(l),
            Self::Right(r) => on_right(r),
        }
    }

    /// Transforms whichever arm is present.
    pub fn bimap<L2, R2>(
        self,
        on_left: impl FnOnce(L) -> L2,
        on_right: impl FnOnce(R) -> R2,
    ) -> Either<L2, R2> {
        match self {
            Self::Left(l) => Either::Left(on_left(l)),
            Self::Right(r) => Either::Right(on_right(r)),
        }
    }

    /// Exchanges the arms.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(l) => Either::Right(l),
            Self::Right(r) => Either::Left(r),
        }
    }

    /// Returns the left value, or derives one from the right value.
    pub fn left_or_else_get(self, f: impl FnOnce(R) -> L) -> L {
        match self {
            Self::Left(l) => l,
            Self::Right(r) => f(r),
        }
    }

    /// Returns the right value, or derives one from the left value.
    pub fn right_or_else_get(self, f: impl FnOnce(L) -> R) -> R {
        match self {
            Self::Left(l) => f(l),
            Self::Right(r) => r,
        }
    }

    /// Returns the right value, or the error `factory` builds from the left one.
    ///
    /// # Errors
    ///
    /// Whatever `factory` produces when `self` is `Left`.
    pub fn right_or_else_throw<E>(self, factory: impl FnOnce(L) -> E) -> Result<R, E> {
        match self {
            Self::Left(l) => Err(factory(l)),
            Self::Right(r) => Ok(r),
        }
    }

    /// Converts into a `Result`, `Right` becoming `Ok`.
    ///
    /// # Errors
    ///
    /// The left value when `self` is `Left`.
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(l) => Err(l),
            Self::Right(r) => Ok(r),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Self::Right(r),
            Err(l) => Self::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

// ============================================================================
// TESTS
// ============================================================================
