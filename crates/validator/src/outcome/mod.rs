//! Result algebra: [`Either`] and [`Validated`].

pub mod either;
pub mod validated;

pub use either::Either;
pub use validated::Validated;
