use serde_json::Value;
use std::borrow::Cow;

/// Turns a loosely typed scripting value into the text that is matched against the catalog.
///
/// `null` has no text. Strings are taken verbatim, without trimming.
pub(crate) fn normalize_value(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(Cow::Borrowed(text.as_str())),
        Value::Number(number) => Some(Cow::Owned(number.to_string())),
        Value::Bool(flag) => Some(Cow::Owned(flag.to_string())),
        other => Some(Cow::Owned(other.to_string())),
    }
}
