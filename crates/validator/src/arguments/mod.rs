//! Argument tuples
//!
//! Validating the parameters of a constructor or function before calling it:
//! a [`Validator`](crate::Validator) over the tuple `(A1, ..., An)` checks
//! the arguments, and an [`ArgumentsMapper`] of the same arity consumes
//! them. [`ArgumentsValidator`] packages both; [`Combine`] merges
//! independently validated values into one tuple.

pub mod combine;
pub mod mapper;
pub mod validator;

pub use combine::Combine;
pub use mapper::ArgumentsMapper;
pub use validator::ArgumentsValidator;
