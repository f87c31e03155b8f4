use super::model::{NormalizedText, RawReply};
use crate::markup::{sanitize_html, SanitizedMarkup};
use serde_json::Value;

/// Reply fields, checked in priority order.
pub const REPLY_FIELDS: [&str; 3] = ["reply", "bot", "message"];

pub const LINE_BREAK: &str = "<br>";

/// Pick the reply text out of a payload. Never fails: unrecognized shapes
/// fall back to their compact JSON dump.
pub fn extract_reply_text(raw: &RawReply) -> String {
    match raw {
        RawReply::Text(s) => s.clone(),
        RawReply::Json(v) => {
            if let Value::Object(map) = v {
                for field in REPLY_FIELDS {
                    if let Some(found) = map.get(field).filter(|f| is_present(f)) {
                        return value_text(found);
                    }
                }
            }
            v.to_string()
        }
    }
}

/// Present means: non-empty string, non-zero number, `true`, or any
/// object/array.
fn is_present(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|x| x != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Strings are used as-is; any other value becomes its compact JSON text,
/// so `{"reply": {"text": "x"}}` yields `{"text":"x"}` rather than a
/// browser's `[object Object]`, and arrays keep their brackets.
fn value_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn rewrite_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', LINE_BREAK)
}

pub fn normalize_reply(raw: &RawReply) -> NormalizedText {
    NormalizedText {
        content: rewrite_line_breaks(&extract_reply_text(raw)),
    }
}

/// Normalize then sanitize: the markup that goes into the transcript.
pub fn render_bot_reply(raw: &RawReply) -> SanitizedMarkup {
    sanitize_html(normalize_reply(raw).as_str())
}
