use serde_json::{json, Value};
use std::fmt;

/// Reply payload as received from the chat endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum RawReply {
    Text(String),
    Json(Value),
}

impl RawReply {
    /// Decode a response body. A body that is not JSON is wrapped as
    /// `{"reply": body}`, so an empty body falls through to the JSON dump.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(v) => RawReply::from(v),
            Err(e) => {
                log::warn!("[chat] non-JSON reply body, using text: {}", e);
                RawReply::Json(json!({ "reply": body }))
            }
        }
    }
}

impl From<Value> for RawReply {
    fn from(v: Value) -> Self {
        match v {
            Value::String(s) => RawReply::Text(s),
            other => RawReply::Json(other),
        }
    }
}

impl From<&str> for RawReply {
    fn from(s: &str) -> Self {
        RawReply::Text(s.to_string())
    }
}

/// Reply text with line breaks rewritten to `<br>`. Not escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    pub content: String,
}

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
