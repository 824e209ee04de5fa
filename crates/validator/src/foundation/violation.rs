//! Violation records and their ordered accumulation.
//!
//! A [`ConstraintViolation`] is plain data: field path, message key,
//! interpolation arguments and a fallback message. Human-readable text is
//! produced only on request through a [`MessageFormatter`].

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

use crate::foundation::Locale;
use crate::foundation::message::{MessageFormatter, SimpleMessageFormatter};

/// Interpolation arguments of a violation (actual value first, then bounds).
///
/// Stored inline for the common case of at most four arguments.
pub type Args = SmallVec<[Value; 4]>;

// ============================================================================
// CONSTRAINT VIOLATION
// ============================================================================

/// One failed constraint occurrence.
///
/// `name` is the full field path, composed with `.` for nested objects and
/// `[i]` for collection elements, e.g. `"orders[1].lines[0].quantity"`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use verity_validator::foundation::ConstraintViolation;
///
/// let violation = ConstraintViolation::new(
///     "age",
///     "number.greaterThanOrEqual",
///     "\"{0}\" must be greater than or equal to {2}",
///     [json!(-1), json!(0)],
/// );
/// assert_eq!(violation.name(), "age");
/// assert_eq!(violation.args(), &[json!(-1), json!(0)]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintViolation {
    name: String,
    message_key: Cow<'static, str>,
    default_message: Cow<'static, str>,
    args: Args,
}

impl ConstraintViolation {
    /// Creates a violation.
    pub fn new(
        name: impl Into<String>,
        message_key: impl Into<Cow<'static, str>>,
        default_message: impl Into<Cow<'static, str>>,
        args: impl IntoIterator<Item = Value>,
    ) -> Self {
        Self {
            name: name.into(),
            message_key: message_key.into(),
            default_message: default_message.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Returns the field path.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the message key, e.g. `"temporal.before"`.
    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Returns the fallback message template.
    #[must_use]
    pub fn default_message(&self) -> &str {
        &self.default_message
    }

    /// Returns the violated arguments: the actual value, then any bounds.
    #[must_use]
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Returns the arguments as seen by a message template: `{0}` is the
    /// field path, `{1}` the actual value, `{2}..` the bounds.
    #[must_use]
    pub fn message_args(&self) -> Vec<Value> {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(Value::String(self.name.clone()));
        args.extend(self.args.iter().cloned());
        args
    }

    /// Renders the message with the given formatter and locale.
    #[must_use]
    pub fn message(&self, formatter: &dyn MessageFormatter, locale: &Locale) -> String {
        formatter.format(
            &self.message_key,
            &self.message_args(),
            &self.default_message,
            locale,
        )
    }

    /// Returns the formatter-facing view of this violation.
    #[must_use]
    pub fn detail(&self) -> ViolationDetail {
        ViolationDetail {
            key: self.message_key.to_string(),
            args: self.message_args(),
            default_message: self.default_message.to_string(),
        }
    }

    /// Returns a copy whose path is `prefix` followed by the current name.
    ///
    /// An unnamed violation (a scalar element or nested value) takes the
    /// prefix without its trailing `.`.
    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        if self.name.is_empty() {
            self.name = prefix.strip_suffix('.').unwrap_or(prefix).to_string();
        } else if !prefix.is_empty() {
            self.name.insert_str(0, prefix);
        }
        self
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.message(&SimpleMessageFormatter, &Locale::ROOT);
        write!(f, "[{}] {}: {}", self.name, self.message_key, message)
    }
}

/// Flattened violation used by message formatting integrations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationDetail {
    /// Message key.
    pub key: String,
    /// Template arguments, field path first.
    pub args: Vec<Value>,
    /// Fallback message template.
    pub default_message: String,
}

// ============================================================================
// CONSTRAINT VIOLATIONS
// ============================================================================

/// Ordered result of one validation pass.
///
/// Order follows evaluation order: field rules in declaration order, then
/// collection validators, then conditional validators. The pass is valid iff
/// the sequence is empty.
///
/// The locale and formatter used for [`messages`](Self::messages) travel with
/// the sequence but take no part in equality.
#[derive(Clone)]
pub struct ConstraintViolations {
    violations: Vec<ConstraintViolation>,
    locale: Locale,
    formatter: Arc<dyn MessageFormatter>,
}

impl ConstraintViolations {
    /// Wraps violations produced under `locale`, rendered by `formatter`.
    #[must_use]
    pub fn new(
        violations: Vec<ConstraintViolation>,
        locale: Locale,
        formatter: Arc<dyn MessageFormatter>,
    ) -> Self {
        Self {
            violations,
            locale,
            formatter,
        }
    }

    /// Returns true if no constraint was violated.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if empty. Same as [`is_valid`](Self::is_valid).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the violations in evaluation order.
    #[must_use]
    pub fn violations(&self) -> &[ConstraintViolation] {
        &self.violations
    }

    /// Iterates over the violations in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, ConstraintViolation> {
        self.violations.iter()
    }

    /// Returns the locale messages are rendered in.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns the flattened details of every violation.
    #[must_use]
    pub fn details(&self) -> Vec<ViolationDetail> {
        self.violations
            .iter()
            .map(ConstraintViolation::detail)
            .collect()
    }

    /// Renders every violation with the attached formatter and locale.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.violations
            .iter()
            .map(|v| v.message(self.formatter.as_ref(), &self.locale))
            .collect()
    }

    /// Appends the violations of `other`, keeping this sequence's locale.
    pub fn append(&mut self, other: ConstraintViolations) {
        self.violations.extend(other.violations);
    }

    /// Consumes the sequence and returns the violations.
    #[must_use]
    pub fn into_vec(self) -> Vec<ConstraintViolation> {
        self.violations
    }
}

impl Default for ConstraintViolations {
    fn default() -> Self {
        Self::from(Vec::new())
    }
}

impl From<Vec<ConstraintViolation>> for ConstraintViolations {
    fn from(violations: Vec<ConstraintViolation>) -> Self {
        Self::new(violations, Locale::ROOT, Arc::new(SimpleMessageFormatter))
    }
}

impl FromIterator<ConstraintViolation> for ConstraintViolations {
    fn from_iter<I: IntoIterator<Item = ConstraintViolation>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl PartialEq for ConstraintViolations {
    fn eq(&self, other: &Self) -> bool {
        self.violations == other.violations
    }
}

impl fmt::Debug for ConstraintViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintViolations")
            .field("violations", &self.violations)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ConstraintViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} constraint violation(s):", self.violations.len())?;
        for (i, message) in self.messages().iter().enumerate() {
            writeln!(f, "  {}. [{}] {}", i + 1, self.violations[i].name, message)?;
        }
        Ok(())
    }
}

impl Serialize for ConstraintViolations {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.violations)
    }
}

impl IntoIterator for ConstraintViolations {
    type Item = ConstraintViolation;
    type IntoIter = std::vec::IntoIter<ConstraintViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConstraintViolations {
    type Item = &'a ConstraintViolation;
    type IntoIter = std::slice::Iter<'a, ConstraintViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn age_violation() -> ConstraintViolation {
        ConstraintViolation::new(
            "age",
            "number.greaterThanOrEqual",
            "\"{0}\" must be greater than or equal to {2}",
            [json!(-1), json!(0)],
        )
    }

    #[test]
    fn test_message_args_prepend_name() {
        assert_eq!(
            age_violation().message_args(),
            vec![json!("age"), json!(-1), json!(0)]
        );
    }

    #[test]
    fn test_message_uses_default_template() {
        let message = age_violation().message(&SimpleMessageFormatter, &Locale::ROOT);
        assert_eq!(message, "\"age\" must be greater than or equal to 0");
    }

    #[test]
    fn test_with_prefix() {
        let violation = age_violation().with_prefix("people[3].");
        assert_eq!(violation.name(), "people[3].age");
        assert_eq!(age_violation().with_prefix("").name(), "age");
    }

    #[test]
    fn test_with_prefix_on_unnamed_violation() {
        let unnamed = ConstraintViolation::new("", "number.positive", "\"{0}\" must be positive", []);
        assert_eq!(unnamed.clone().with_prefix("scores[2].").name(), "scores[2]");
        assert_eq!(unnamed.with_prefix("").name(), "");
    }

    #[test]
    fn test_valid_iff_empty() {
        let empty = ConstraintViolations::default();
        assert!(empty.is_valid());
        assert_eq!(empty.len(), 0);

        let one: ConstraintViolations = vec![age_violation()].into();
        assert!(!one.is_valid());
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn test_equality_ignores_locale() {
        let a = ConstraintViolations::new(
            vec![age_violation()],
            Locale::ENGLISH,
            Arc::new(SimpleMessageFormatter),
        );
        let b = ConstraintViolations::new(
            vec![age_violation()],
            Locale::JAPANESE,
            Arc::new(SimpleMessageFormatter),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_details() {
        let violations: ConstraintViolations = vec![age_violation()].into();
        let details = violations.details();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].key, "number.greaterThanOrEqual");
        assert_eq!(details[0].args, vec![json!("age"), json!(-1), json!(0)]);
    }

    #[test]
    fn test_serialize_as_sequence() {
        let violations: ConstraintViolations = vec![age_violation()].into();
        let value = serde_json::to_value(&violations).unwrap();
        assert_eq!(
            value,
            json!([{
                "name": "age",
                "messageKey": "number.greaterThanOrEqual",
                "defaultMessage": "\"{0}\" must be greater than or equal to {2}",
                "args": [-1, 0],
            }])
        );
    }

    #[test]
    fn test_append_preserves_order() {
        let mut first: ConstraintViolations = vec![age_violation()].into();
        let second: ConstraintViolations =
            vec![age_violation().with_prefix("spouse.")].into();
        first.append(second);
        let names: Vec<_> = first.iter().map(ConstraintViolation::name).collect();
        assert_eq!(names, ["age", "spouse.age"]);
    }
}
