//! Character sequence constraints
//!
//! Lengths count Unicode scalar values (`chars()`), not bytes.
//!
//! Pattern-based rules ([`pattern`](CharSequenceConstraint::pattern),
//! [`email`](CharSequenceConstraint::email)) need the `pattern` feature.

#[cfg(feature = "pattern")]
use std::sync::LazyLock;

use serde_json::Value;
use smallvec::smallvec;

use crate::constraints::predicate::{
    Constrainable, Constraint, ConstraintPredicate, violated_unless,
};
#[cfg(feature = "pattern")]
use crate::foundation::ConstraintError;

#[cfg(feature = "pattern")]
#[allow(clippy::expect_used)]
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email regex is valid")
});

/// Constraint builder for `String` fields.
///
/// # Examples
///
/// ```
/// use verity_validator::constraints::{CharSequenceConstraint, Constraint};
///
/// let name = CharSequenceConstraint::default().not_blank().max_length(20);
///
/// let [not_blank, max_length] = name.predicates() else { unreachable!() };
/// assert!(!not_blank.test(&"   ".to_string()));
/// assert!(!max_length.test(&"x".repeat(21)));
/// ```
#[derive(Debug, Default)]
pub struct CharSequenceConstraint {
    predicates: Vec<ConstraintPredicate<String>>,
}

impl Constraint for CharSequenceConstraint {
    type Value = String;

    fn predicates(&self) -> &[ConstraintPredicate<String>] {
        &self.predicates
    }

    fn predicates_mut(&mut self) -> &mut Vec<ConstraintPredicate<String>> {
        &mut self.predicates
    }

    fn into_predicates(self) -> Vec<ConstraintPredicate<String>> {
        self.predicates
    }

    fn to_arg(value: &String) -> Value {
        Value::String(value.clone())
    }
}

fn char_count(value: &str) -> usize {
    value.chars().count()
}

impl CharSequenceConstraint {
    fn length(
        self,
        message_key: &'static str,
        default_message: &'static str,
        bound: usize,
        holds: fn(usize, usize) -> bool,
    ) -> Self {
        self.push(ConstraintPredicate::new(
            message_key,
            default_message,
            move |value: &String| {
                let len = char_count(value);
                violated_unless(holds(len, bound), || smallvec![len.into(), bound.into()])
            },
        ))
    }

    fn text(
        self,
        message_key: &'static str,
        default_message: &'static str,
        needle: String,
        holds: fn(&str, &str) -> bool,
    ) -> Self {
        self.push(ConstraintPredicate::new(
            message_key,
            default_message,
            move |value: &String| {
                violated_unless(holds(value, &needle), || {
                    smallvec![Value::String(value.clone()), Value::String(needle.clone())]
                })
            },
        ))
    }

    /// Requires at least one character.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_empty(self) -> Self {
        self.push(ConstraintPredicate::new(
            "charSequence.notEmpty",
            "\"{0}\" must not be empty",
            |value: &String| violated_unless(!value.is_empty(), || smallvec![value.as_str().into()]),
        ))
    }

    /// Requires at least one non-whitespace character.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_blank(self) -> Self {
        self.push(ConstraintPredicate::new(
            "charSequence.notBlank",
            "\"{0}\" must not be blank",
            |value: &String| {
                violated_unless(!value.trim().is_empty(), || smallvec![value.as_str().into()])
            },
        ))
    }

    /// Requires at least `min` characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(self, min: usize) -> Self {
        self.length(
            "container.greaterThanOrEqual",
            "The size of \"{0}\" must be greater than or equal to {2}. The given size is {1}",
            min,
            |len, min| len >= min,
        )
    }

    /// Requires at most `max` characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(self, max: usize) -> Self {
        self.length(
            "container.lessThanOrEqual",
            "The size of \"{0}\" must be less than or equal to {2}. The given size is {1}",
            max,
            |len, max| len <= max,
        )
    }

    /// Requires exactly `size` characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn fixed_length(self, size: usize) -> Self {
        self.length(
            "container.fixedSize",
            "The size of \"{0}\" must be {2}. The given size is {1}",
            size,
            |len, size| len == size,
        )
    }

    /// Shorthand for `min_length(min).max_length(max)`.
    #[must_use = "builder methods must be chained or built"]
    pub fn length_between(self, min: usize, max: usize) -> Self {
        self.min_length(min).max_length(max)
    }

    /// Requires a match of `pattern` somewhere in the value.
    ///
    /// Anchor the expression with `^...$` to require a full match.
    #[cfg(feature = "pattern")]
    #[must_use = "builder methods must be chained or built"]
    pub fn pattern(self, pattern: regex::Regex) -> Self {
        self.push(ConstraintPredicate::new(
            "charSequence.pattern",
            "\"{0}\" must match {2}",
            move |value: &String| {
                violated_unless(pattern.is_match(value), || {
                    smallvec![value.as_str().into(), pattern.as_str().into()]
                })
            },
        ))
    }

    /// Compiles `pattern` and delegates to [`pattern`](Self::pattern).
    ///
    /// # Errors
    ///
    /// [`ConstraintError::InvalidPattern`] if the expression does not compile.
    #[cfg(feature = "pattern")]
    pub fn try_pattern(self, pattern: &str) -> Result<Self, ConstraintError> {
        let regex = regex::Regex::new(pattern).map_err(|e| ConstraintError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(self.pattern(regex))
    }

    /// Requires a syntactically valid email address. The empty string passes;
    /// combine with [`not_empty`](Self::not_empty) to require a value.
    #[cfg(feature = "pattern")]
    #[must_use = "builder methods must be chained or built"]
    pub fn email(self) -> Self {
        self.push(ConstraintPredicate::new(
            "charSequence.email",
            "\"{0}\" must be a valid email address",
            |value: &String| {
                violated_unless(value.is_empty() || EMAIL_REGEX.is_match(value), || {
                    smallvec![value.as_str().into()]
                })
            },
        ))
    }

    /// Requires `needle` to occur in the value.
    #[must_use = "builder methods must be chained or built"]
    pub fn contains(self, needle: impl Into<String>) -> Self {
        self.text(
            "charSequence.contains",
            "\"{0}\" must contain {2}",
            needle.into(),
            |value, needle| value.contains(needle),
        )
    }

    /// Requires the value to start with `prefix`.
    #[must_use = "builder methods must be chained or built"]
    pub fn starts_with(self, prefix: impl Into<String>) -> Self {
        self.text(
            "charSequence.startsWith",
            "\"{0}\" must start with \"{2}\"",
            prefix.into(),
            |value, prefix| value.starts_with(prefix),
        )
    }

    /// Requires the value to end with `suffix`.
    #[must_use = "builder methods must be chained or built"]
    pub fn ends_with(self, suffix: impl Into<String>) -> Self {
        self.text(
            "charSequence.endsWith",
            "\"{0}\" must end with \"{2}\"",
            suffix.into(),
            |value, suffix| value.ends_with(suffix),
        )
    }

    /// Requires the value to be one of `allowed`.
    #[must_use = "builder methods must be chained or built"]
    pub fn one_of<I, S>(self, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        self.push(ConstraintPredicate::new(
            "object.oneOf",
            "\"{0}\" must be one of the following values: {2}",
            move |value: &String| {
                violated_unless(allowed.contains(value), || {
                    smallvec![
                        value.as_str().into(),
                        Value::Array(allowed.iter().map(|s| s.as_str().into()).collect()),
                    ]
                })
            },
        ))
    }
}

impl Constrainable for String {
    type Constraint = CharSequenceConstraint;
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn only(constraint: CharSequenceConstraint) -> ConstraintPredicate<String> {
        let mut predicates = constraint.into_predicates();
        assert_eq!(predicates.len(), 1);
        predicates.remove(0)
    }

    #[rstest]
    #[case("a", true)]
    #[case("", false)]
    #[case(" ", true)]
    fn test_not_empty(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(only(CharSequenceConstraint::default().not_empty()).test(&input.into()), ok);
    }

    #[rstest]
    #[case("a", true)]
    #[case("", false)]
    #[case(" \t\n", false)]
    fn test_not_blank(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(only(CharSequenceConstraint::default().not_blank()).test(&input.into()), ok);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let predicate = only(CharSequenceConstraint::default().max_length(3));
        assert!(predicate.test(&"日本語".to_string()));
        assert_eq!(
            predicate.check(Some(&"日本語です".to_string())).unwrap().as_slice(),
            &[json!(5), json!(3)]
        );
    }

    #[test]
    fn test_length_between_adds_two_predicates() {
        let constraint = CharSequenceConstraint::default().length_between(2, 4);
        let keys: Vec<_> = constraint
            .predicates()
            .iter()
            .map(ConstraintPredicate::message_key)
            .collect();
        assert_eq!(keys, ["container.greaterThanOrEqual", "container.lessThanOrEqual"]);
    }

    #[test]
    fn test_fixed_length() {
        let predicate = only(CharSequenceConstraint::default().fixed_length(2));
        assert!(predicate.test(&"ab".into()));
        assert!(!predicate.test(&"abc".into()));
    }

    #[cfg(feature = "pattern")]
    #[test]
    fn test_pattern_is_partial_match() {
        let predicate = only(CharSequenceConstraint::default().try_pattern("[0-9]+").unwrap());
        assert!(predicate.test(&"abc123".into()));
        assert!(!predicate.test(&"abc".into()));
    }

    #[cfg(feature = "pattern")]
    #[test]
    fn test_try_pattern_rejects_bad_regex() {
        let error = CharSequenceConstraint::default().try_pattern("(").unwrap_err();
        assert!(matches!(error, ConstraintError::InvalidPattern { .. }));
    }

    #[cfg(feature = "pattern")]
    #[rstest]
    #[case("user@example.com", true)]
    #[case("", true)]
    #[case("not-an-email", false)]
    #[case("a@b@c", false)]
    fn test_email(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(only(CharSequenceConstraint::default().email()).test(&input.into()), ok);
    }

    #[test]
    fn test_affixes() {
        let constraint = CharSequenceConstraint::default()
            .starts_with("ab")
            .ends_with("yz")
            .contains("mm");
        let value = "abmmyz".to_string();
        assert!(constraint.predicates().iter().all(|p| p.test(&value)));
        assert_eq!(
            constraint.predicates()[0].check(Some(&"xx".into())).unwrap().as_slice(),
            &[json!("xx"), json!("ab")]
        );
    }

    #[test]
    fn test_one_of() {
        let predicate = only(CharSequenceConstraint::default().one_of(["red", "green"]));
        assert!(predicate.test(&"red".into()));
        assert_eq!(
            predicate.check(Some(&"blue".into())).unwrap()[1],
            json!(["red", "green"])
        );
    }
}
