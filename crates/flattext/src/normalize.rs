//! Total normalization of values into display-safe text
//!
//! [`normalize`] is the crate's exported operation: it renders any
//! [`Value`] as a `String` for direct display and never fails. Malformed
//! or unrepresentable content degrades to empty text rather than
//! surfacing an error; display code must never throw on bad data.

use crate::value::{RecordValue, Value};

/// Record field holding a plain-text representation
pub const TEXT_FIELD: &str = "text";

/// Record field holding an ordered sequence of rich-text spans
pub const RICH_TEXT_FIELD: &str = "richText";

/// Convert a value of unknown shape into display-safe text.
///
/// Dispatch is by shape, first match wins:
///
/// 1. [`Value::Null`] → empty text.
/// 2. Strings pass through verbatim; integers, floats, and booleans use
///    their canonical `Display` form.
/// 3. Timestamps render as ISO-8601 UTC with millisecond precision.
/// 4. Records: a string `text` field wins; otherwise a `richText` array
///    is concatenated span by span (spans without string text contribute
///    nothing); otherwise the record is JSON-serialized.
/// 5. Arrays are JSON-serialized.
/// 6. Opaque kinds (symbols, decimals, callables) use their textual
///    representation.
///
/// Serialization failure in steps 4-5 degrades to empty text.
pub fn normalize(value: &Value) -> String {
    match value {
        Value::Null => String::new(),

        Value::String(s) => s.as_ref().clone(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(n) => n.to_string(),

        Value::Timestamp(t) => t.to_iso_string(),

        Value::Record(record) => normalize_record(record, value),
        Value::Array(_) => serialize_or_empty(value),

        Value::Symbol(sym) => sym.to_string(),
        Value::Decimal(d) => d.to_string(),
        Value::Callable(func) => format!("<fn {}>", func.name),
    }
}

impl Value {
    /// Convenience method form of [`normalize`]
    pub fn to_display_string(&self) -> String {
        normalize(self)
    }
}

fn normalize_record(record: &RecordValue, value: &Value) -> String {
    if let Some(Value::String(text)) = record.get(TEXT_FIELD) {
        return text.as_ref().clone();
    }

    if let Some(Value::Array(spans)) = record.get(RICH_TEXT_FIELD) {
        return spans.iter().map(span_text).collect();
    }

    serialize_or_empty(value)
}

/// Text of a single rich-text span; anything but a record with a string
/// `text` field contributes nothing.
fn span_text(span: &Value) -> &str {
    match span {
        Value::Record(record) => match record.get(TEXT_FIELD) {
            Some(Value::String(text)) => text.as_str(),
            _ => "",
        },
        _ => "",
    }
}

fn serialize_or_empty(value: &Value) -> String {
    match serde_json::to_string(value) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(%err, "structural serialization failed, degrading to empty text");
            String::new()
        }
    }
}
