//! Message formatting contract.
//!
//! Formatting is lazy: violations are accumulated as keys plus arguments and
//! only turned into text when a caller asks for messages.

use serde_json::Value;

use crate::foundation::Locale;

/// Turns a violation's key and arguments into a human-readable message.
///
/// `args[0]` is the field path, `args[1]` the actual value and the rest are
/// the constraint's bounds. Implementations may look the key up in a
/// localized catalogue and fall back to `default_message`.
pub trait MessageFormatter: Send + Sync {
    /// Renders one message.
    fn format(&self, message_key: &str, args: &[Value], default_message: &str, locale: &Locale)
    -> String;
}

impl<F> MessageFormatter for F
where
    F: Fn(&str, &[Value], &str, &Locale) -> String + Send + Sync,
{
    fn format(
        &self,
        message_key: &str,
        args: &[Value],
        default_message: &str,
        locale: &Locale,
    ) -> String {
        self(message_key, args, default_message, locale)
    }
}

/// Formatter that substitutes `{n}` placeholders in the default message.
///
/// Strings are inserted without quotes, other JSON values in their compact
/// JSON form. Unknown placeholders are left untouched. The locale is ignored.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use verity_validator::foundation::{Locale, MessageFormatter, SimpleMessageFormatter};
///
/// let text = SimpleMessageFormatter.format(
///     "number.lessThan",
///     &[json!("qty"), json!(12), json!(10)],
///     "\"{0}\" must be less than {2}",
///     &Locale::ROOT,
/// );
/// assert_eq!(text, "\"qty\" must be less than 10");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleMessageFormatter;

impl MessageFormatter for SimpleMessageFormatter {
    fn format(
        &self,
        _message_key: &str,
        args: &[Value],
        default_message: &str,
        _locale: &Locale,
    ) -> String {
        interpolate(default_message, args)
    }
}

/// Replaces `{n}` with the rendering of `args[n]`.
pub(crate) fn interpolate(template: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((close, render(arg)))
        });
        match replaced {
            Some((close, text)) => {
                out.push_str(&text);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(render).collect();
            format!("[{}]", parts.join(", "))
        }
        other => other.to_string(),
    }
}
