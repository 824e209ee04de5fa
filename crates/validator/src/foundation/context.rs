//! Per-call validation context: constraint group, locale and evaluation mode.
//!
//! Nothing here is global. Every `validate` call receives its group and
//! locale explicitly, so a single [`Validator`](crate::Validator) can be
//! shared between threads that validate under different groups at once.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTRAINT GROUP
// ============================================================================

/// Tag selecting which conditional rule sets are active for a pass.
///
/// Groups compare by name. [`ConstraintGroup::DEFAULT`] is used when the
/// caller does not pick one.
///
/// # Examples
///
/// ```
/// use verity_validator::foundation::ConstraintGroup;
///
/// const CREATE: ConstraintGroup = ConstraintGroup::new("CREATE");
///
/// assert_ne!(CREATE, ConstraintGroup::DEFAULT);
/// assert_eq!(CREATE, ConstraintGroup::of(String::from("CREATE")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstraintGroup(Cow<'static, str>);

impl ConstraintGroup {
    /// The group used when none is given.
    pub const DEFAULT: Self = Self::new("DEFAULT");

    /// Creates a group from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a group from any string-like name.
    pub fn of(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Returns the group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for ConstraintGroup {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ConstraintGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ConstraintGroup {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

// ============================================================================
// LOCALE
// ============================================================================

/// Opaque language tag handed to the message formatter.
///
/// The engine never inspects it; it only travels with the resulting
/// [`ConstraintViolations`](crate::foundation::ConstraintViolations) so that
/// messages can be rendered later.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(Cow<'static, str>);

impl Locale {
    /// The root locale (empty tag). Used when the caller does not pick one.
    pub const ROOT: Self = Self::new("");

    /// English.
    pub const ENGLISH: Self = Self::new("en");

    /// Japanese.
    pub const JAPANESE: Self = Self::new("ja");

    /// Creates a locale from a static tag such as `"en-US"`.
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    /// Creates a locale from any string-like tag.
    pub fn of(tag: impl Into<Cow<'static, str>>) -> Self {
        Self(tag.into())
    }

    /// Returns the language tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.0
    }

    /// Returns true for the root locale.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::ROOT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// VALIDATION CONTEXT
// ============================================================================

/// State threaded through one validation pass.
///
/// Built fresh by [`Validator::validate_with`](crate::Validator::validate_with)
/// and passed by reference to every rule set, so nested validators see the
/// same group.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    group: &'a ConstraintGroup,
    fail_fast: bool,
}

impl<'a> ValidationContext<'a> {
    /// Creates a context for the given group, accumulating all violations.
    #[must_use]
    pub fn new(group: &'a ConstraintGroup) -> Self {
        Self {
            group,
            fail_fast: false,
        }
    }

    /// Returns the active constraint group.
    #[must_use]
    pub fn group(&self) -> &'a ConstraintGroup {
        self.group
    }

    /// Returns true if evaluation should stop at the first violation.
    #[must_use]
    pub fn is_fail_fast(&self) -> bool {
        self.fail_fast
    }

    /// Returns a copy with fail-fast switched on if `fail_fast` is set.
    ///
    /// Fail-fast is sticky: a nested validator can turn it on for its own
    /// subtree but never turn it off for a parent that asked for it.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_fail_fast(self, fail_fast: bool) -> Self {
        Self {
            fail_fast: self.fail_fast || fail_fast,
            ..self
        }
    }
}
