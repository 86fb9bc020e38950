//! Header-block documents: a YAML key/value header fenced by `---` lines,
//! followed by a free-text body.
//!
//! Field access is deliberately lenient. Content is hand-edited, so
//! `order: "2"` and `order: 2` both read as 2, and a bare number is an
//! acceptable string.

use serde_yaml::{Mapping, Value};

use super::ContentError;

const FENCE: &str = "---";

#[derive(Debug, Clone, Default)]
pub struct Document {
    fields: Mapping,
    pub body: String,
}

impl Document {
    /// Non-empty, trimmed string value of `key`.
    pub fn str(&self, key: &str) -> Option<String> {
        let s = match self.fields.get(key)? {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => return None,
        };
        (!s.is_empty()).then_some(s)
    }

    /// First non-empty string among `keys`.
    pub fn str_any(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|k| self.str(k))
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        match self.fields.get(key)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// A sequence of strings, or a single string as a one-element list.
    pub fn list(&self, key: &str) -> Vec<String> {
        match self.fields.get(key) {
            Some(Value::Sequence(items)) => items
                .iter()
                .filter_map(|v| v.as_str())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Some(_) => self.str(key).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// The trimmed body, if it has any content.
    pub fn body_text(&self) -> Option<&str> {
        let body = self.body.trim();
        (!body.is_empty()).then_some(body)
    }
}

/// Split `text` into header fields and body. Text without a leading fence
/// is all body.
pub fn parse_document(text: &str) -> Result<Document, ContentError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut lines = text.split_inclusive('\n');
    let first = match lines.next() {
        Some(line) if line.trim_end() == FENCE => line,
        _ => {
            return Ok(Document {
                fields: Mapping::new(),
                body: text.to_string(),
            })
        }
    };

    let mut header_len = 0;
    let mut closed = false;
    for line in lines.by_ref() {
        if line.trim_end() == FENCE {
            closed = true;
            break;
        }
        header_len += line.len();
    }
    if !closed {
        return Err(ContentError::UnterminatedHeader);
    }

    let header_start = first.len();
    let header = &text[header_start..header_start + header_len];
    let body: String = lines.collect();

    let fields = match serde_yaml::from_str::<Value>(header)? {
        Value::Mapping(map) => map,
        Value::Null => Mapping::new(),
        _ => return Err(ContentError::HeaderNotAMapping),
    };

    Ok(Document { fields, body })
}
