//! Typed values carried by a log call.
//!
//! A call site hands a channel an [`Args`] list of [`LogValue`]s instead of a
//! positional untyped array, so the dispatch pipeline can classify the first
//! value (text / error-like / other) without inspecting runtime types.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::kind::LogKind;

/// A single value passed to a log call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LogValue {
    /// String-like value; eligible for style-directive processing.
    Text(String),
    /// Error-like value carrying its rendered stack text.
    Error {
        /// The error's display message.
        message: String,
        /// Rendered stack: `"Error: <message>"` plus the source chain.
        stack: String,
    },
    /// Any other structured value.
    Data(serde_json::Value),
}

impl LogValue {
    /// Capture an error-like value, rendering its source chain as the stack.
    #[must_use]
    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        let message = err.to_string();
        let mut stack = format!("Error: {message}");
        let mut source = err.source();
        while let Some(cause) = source {
            stack.push_str("\n    caused by: ");
            stack.push_str(&cause.to_string());
            source = cause.source();
        }
        LogValue::Error { message, stack }
    }

    /// Whether this value is string-like.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, LogValue::Text(_))
    }

    /// Whether this value is error-like (has a stack).
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, LogValue::Error { .. })
    }

    /// The text content, when string-like.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            LogValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Runtime type label used for the `"type: <label>"` prefix fallback.
    #[must_use]
    pub fn type_label(&self) -> &'static str {
        match self {
            LogValue::Text(_) => "String",
            LogValue::Error { .. } => "Error",
            LogValue::Data(value) => match value {
                serde_json::Value::Null => "Null",
                serde_json::Value::Bool(_) => "Boolean",
                serde_json::Value::Number(_) => "Number",
                serde_json::Value::String(_) => "String",
                serde_json::Value::Array(_) => "Array",
                serde_json::Value::Object(_) => "Object",
            },
        }
    }

    /// Render the value as display text for a sink.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            LogValue::Text(text) => text.clone(),
            LogValue::Error { stack, .. } => stack.clone(),
            LogValue::Data(value) => value.to_string(),
        }
    }
}

impl From<&str> for LogValue {
    fn from(text: &str) -> Self {
        LogValue::Text(text.to_string())
    }
}

impl From<String> for LogValue {
    fn from(text: String) -> Self {
        LogValue::Text(text)
    }
}

impl From<serde_json::Value> for LogValue {
    fn from(value: serde_json::Value) -> Self {
        LogValue::Data(value)
    }
}

impl From<bool> for LogValue {
    fn from(value: bool) -> Self {
        LogValue::Data(serde_json::Value::Bool(value))
    }
}

impl From<i64> for LogValue {
    fn from(value: i64) -> Self {
        LogValue::Data(serde_json::Value::from(value))
    }
}

impl From<u64> for LogValue {
    fn from(value: u64) -> Self {
        LogValue::Data(serde_json::Value::from(value))
    }
}

impl From<f64> for LogValue {
    fn from(value: f64) -> Self {
        LogValue::Data(serde_json::Value::from(value))
    }
}

/// The argument list of one log call.
///
/// Most call sites pass a single `&str` or an array literal; the [`values!`]
/// macro builds heterogeneous lists.
///
/// [`values!`]: crate::values!
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    /// The values, in call order.
    pub values: Vec<LogValue>,
}

impl Args {
    /// An empty argument list (for kinds like `clear` or `groupEnd`).
    #[must_use]
    pub fn empty() -> Self {
        Self { values: Vec::new() }
    }
}

impl From<Vec<LogValue>> for Args {
    fn from(values: Vec<LogValue>) -> Self {
        Self { values }
    }
}

impl From<LogValue> for Args {
    fn from(value: LogValue) -> Self {
        Self { values: vec![value] }
    }
}

impl From<&str> for Args {
    fn from(text: &str) -> Self {
        LogValue::from(text).into()
    }
}

impl From<String> for Args {
    fn from(text: String) -> Self {
        LogValue::from(text).into()
    }
}

impl From<serde_json::Value> for Args {
    fn from(value: serde_json::Value) -> Self {
        LogValue::from(value).into()
    }
}

impl From<()> for Args {
    fn from((): ()) -> Self {
        Self::empty()
    }
}

impl<T: Into<LogValue>, const N: usize> From<[T; N]> for Args {
    fn from(values: [T; N]) -> Self {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// One recorded dispatch: the argument list plus the kind used, as buffered
/// in channel history and replayed by `force()`.
#[derive(Debug, Clone)]
pub struct LogCall {
    /// The kind the call was dispatched with.
    pub kind: LogKind,
    /// The argument list, post-classification but before style injection.
    pub values: Vec<LogValue>,
    /// When the call was recorded.
    pub at: OffsetDateTime,
}

impl LogCall {
    /// Record a call now.
    #[must_use]
    pub fn new(kind: LogKind, values: Vec<LogValue>) -> Self {
        Self {
            kind,
            values,
            at: OffsetDateTime::now_utc(),
        }
    }

    /// The capture time as `HH:MM:SS` UTC, for introspection displays.
    #[must_use]
    pub fn time_display(&self) -> String {
        let format = time::macros::format_description!("[hour]:[minute]:[second]");
        self.at.format(&format).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Boom;

    impl std::fmt::Display for Boom {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "boom")
        }
    }

    impl std::error::Error for Boom {}

    #[test]
    fn test_error_value_renders_stack() {
        let value = LogValue::error(&Boom);
        match &value {
            LogValue::Error { message, stack } => {
                assert_eq!(message, "boom");
                assert!(stack.starts_with("Error: boom"));
            }
            other => panic!("expected error value, got {other:?}"),
        }
    }

    #[test]
    fn test_type_labels() {
        assert_eq!(LogValue::from("x").type_label(), "String");
        assert_eq!(LogValue::from(serde_json::json!(1)).type_label(), "Number");
        assert_eq!(LogValue::from(serde_json::json!([1])).type_label(), "Array");
        assert_eq!(LogValue::from(serde_json::json!({})).type_label(), "Object");
        assert_eq!(LogValue::error(&Boom).type_label(), "Error");
    }

    #[test]
    fn test_args_from_array() {
        let args = Args::from(["a", "b"]);
        assert_eq!(args.values.len(), 2);
        assert_eq!(args.values[0].as_text(), Some("a"));
    }

    #[test]
    fn test_args_from_unit_is_empty() {
        assert!(Args::from(()).values.is_empty());
    }

    #[test]
    fn test_render_data_is_compact_json() {
        let value = LogValue::from(serde_json::json!({"a": 1}));
        assert_eq!(value.render(), "{\"a\":1}");
    }
}
