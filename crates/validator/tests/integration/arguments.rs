//! Validating constructor arguments.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use verity_validator::prelude::*;

use crate::fixtures::names;

#[derive(Debug, Clone, PartialEq)]
struct Range {
    from: i32,
    to: i32,
}

impl Range {
    fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }
}

fn range_validator() -> ArgumentsValidator<(i32, i32), Range> {
    ArgumentsValidator::new(
        ValidatorBuilder::<(i32, i32)>::new()
            .constraint("from", |a| &a.0, |c| c.positive_or_zero())
            .constraint("to", |a| &a.1, |c| c.less_than_or_equal(100))
            .constraint_on_target("range", "range.ordered", "\"{0}\" must be ordered", |a| {
                a.0 <= a.1
            })
            .build(),
        Range::new,
    )
}

#[test]
fn valid_arguments_reach_the_constructor() {
    let range = range_validator();
    assert_eq!(range.validated((1, 10)).unwrap(), Range::new(1, 10));
    assert_eq!(range.validate_args((0, 0)).right(), Some(&Range::new(0, 0)));
}

#[test]
fn invalid_arguments_accumulate_and_skip_the_constructor() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let validator = range_validator().validator().clone();
    let range = ArgumentsValidator::new(validator, move |from: i32, to: i32| {
        counter.fetch_add(1, Ordering::SeqCst);
        Range::new(from, to)
    });

    let result = range.validate((-1, 500));
    assert_eq!(
        result.errors().map(names),
        Some(vec!["from".into(), "to".into()])
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let result = range.validate((50, 10));
    assert_eq!(result.errors().map(names), Some(vec!["range".into()]));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn and_then_chains_after_the_mapper() {
    let width = range_validator().and_then(|r| r.to - r.from);
    assert_eq!(width.validated((3, 10)).unwrap(), 7);
    assert!(width.validated((3, 1)).is_err());
}

#[test]
fn lazy_defers_construction() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let validator = range_validator().validator().clone();
    let lazy = ArgumentsValidator::new(validator, move |from: i32, to: i32| {
        counter.fetch_add(1, Ordering::SeqCst);
        Range::new(from, to)
    })
    .lazy();

    let build = lazy.validated((2, 4)).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(build(), Range::new(2, 4));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn single_argument_validator() {
    #[derive(Debug, PartialEq)]
    struct Email(String);

    let email = ArgumentsValidator::new(
        ValidatorBuilder::<(String,)>::new()
            .constraint("email", |a| &a.0, |c| c.not_blank().email())
            .build(),
        Email,
    );

    assert_eq!(
        email.validated(("a@b.io".into(),)).unwrap(),
        Email("a@b.io".into())
    );
    let error = email.validated(("nope".into(),)).unwrap_err();
    assert_eq!(names(error.violations()), ["email"]);
}
