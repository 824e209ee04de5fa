//! Group and predicate gated rule sets.

use pretty_assertions::assert_eq;
use verity_validator::prelude::*;

use crate::fixtures::names;

const CREATE: ConstraintGroup = ConstraintGroup::new("CREATE");
const UPDATE: ConstraintGroup = ConstraintGroup::new("UPDATE");

#[derive(Debug, Clone)]
struct Account {
    id: Option<u64>,
    name: String,
    premium: bool,
    credit: i64,
}

fn account_validator() -> Validator<Account> {
    ValidatorBuilder::<Account>::new()
        .constraint("name", |a| &a.name, |c| c.not_empty())
        .constraint_on_group(
            CREATE,
            ValidatorBuilder::<Account>::new()
                .constraint_opt("id", |a| a.id.as_ref(), |c| c.is_null())
                .build(),
        )
        .constraint_on_group(
            UPDATE,
            ValidatorBuilder::<Account>::new()
                .constraint_opt("id", |a| a.id.as_ref(), |c| c.not_null())
                .build(),
        )
        .constraint_on_condition(
            |a: &Account, _: &ConstraintGroup| a.premium,
            ValidatorBuilder::<Account>::new()
                .constraint("credit", |a| &a.credit, |c| c.greater_than_or_equal(1000))
                .build(),
        )
        .build()
}

fn account(id: Option<u64>) -> Account {
    Account {
        id,
        name: String::new(),
        premium: false,
        credit: 0,
    }
}

#[test]
fn group_selects_which_rules_apply() {
    let validator = account_validator();

    let create = validator.validate_with(&account(Some(7)), &Locale::ROOT, &CREATE);
    assert_eq!(names(&create), ["name", "id"]);
    assert_eq!(create.violations()[1].message_key(), "object.isNull");

    let update = validator.validate_with(&account(None), &Locale::ROOT, &UPDATE);
    assert_eq!(names(&update), ["name", "id"]);
    assert_eq!(update.violations()[1].message_key(), "object.notNull");
}

#[test]
fn default_group_skips_group_rules() {
    let violations = account_validator().validate(&account(Some(7)));
    assert_eq!(names(&violations), ["name"]);
}

#[test]
fn predicate_condition_sees_the_target() {
    let validator = account_validator();

    let mut premium = account(None);
    premium.name = "Ann".into();
    premium.premium = true;
    premium.credit = 10;
    let violations = validator.validate(&premium);
    assert_eq!(names(&violations), ["credit"]);

    premium.premium = false;
    assert!(validator.validate(&premium).is_valid());
}

#[test]
fn conditional_rules_run_last() {
    let validator = ValidatorBuilder::<Account>::new()
        .constraint_on_condition(
            |_: &Account, _: &ConstraintGroup| true,
            ValidatorBuilder::<Account>::new()
                .constraint("credit", |a| &a.credit, |c| c.positive())
                .build(),
        )
        .constraint("name", |a| &a.name, |c| c.not_empty())
        .build();

    let violations = validator.validate(&account(None));
    assert_eq!(names(&violations), ["name", "credit"]);
}

#[test]
fn group_constant_and_runtime_group_compare_equal() {
    let runtime = ConstraintGroup::of(String::from("CREATE"));
    let violations = account_validator().validate_with(&account(None), &Locale::ROOT, &runtime);
    // id is absent, so the CREATE rule holds; only the name fails.
    assert_eq!(names(&violations), ["name"]);
    assert_eq!(runtime, CREATE);
}

#[test]
fn accepted_group_matches_running_the_rule_set_directly() {
    let premium_rules = ValidatorBuilder::<Account>::new()
        .constraint("credit", |a| &a.credit, |c| c.greater_than_or_equal(1000))
        .constraint("name", |a| &a.name, |c| c.not_empty())
        .build();
    let gated = ValidatorBuilder::<Account>::new()
        .constraint_on_group(UPDATE, premium_rules.clone())
        .build();

    let target = account(Some(1));
    let direct = premium_rules.validate_with(&target, &Locale::ROOT, &UPDATE);
    assert_eq!(gated.validate_with(&target, &Locale::ROOT, &UPDATE), direct);
    assert_eq!(names(&direct), ["credit", "name"]);
    assert!(gated.validate_with(&target, &Locale::ROOT, &CREATE).is_valid());
}
