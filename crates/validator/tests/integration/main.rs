//! Integration tests for verity-validator.
//!
//! Each module drives the public API the way a consumer would, through
//! `verity_validator::prelude::*`.

mod arguments;
mod collections;
mod conditional;
mod end_to_end;
mod fixtures;
mod outcome;
mod sharing;
