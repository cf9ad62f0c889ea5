//! JSON object extraction from free-form model output
//!
//! Models wrap their JSON in prose or markdown fences. Rather than a greedy
//! first-`{`-to-last-`}` match, the scanner walks the text tracking string
//! literals and escapes, collects every balanced top-level `{...}` span, and
//! returns the first span that parses as a JSON object.

use serde_json::Value;

use crate::error::{AiError, AiResult};

/// Byte ranges of balanced top-level `{...}` spans, in order of appearance
pub fn object_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in text.bytes().enumerate() {
        if depth == 0 {
            if b == b'{' {
                depth = 1;
                start = i;
                in_string = false;
                escaped = false;
            }
            continue;
        }

        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    spans.push((start, i + 1));
                }
            }
            _ => {}
        }
    }

    spans
}

/// First balanced span in `text` that parses as a JSON object
pub fn extract_json_object(text: &str) -> AiResult<Value> {
    let spans = object_spans(text);
    if spans.is_empty() {
        return Err(AiError::NoJsonObject);
    }

    let mut last_error = None;
    for (start, end) in spans {
        match serde_json::from_str::<Value>(&text[start..end]) {
            Ok(value) if value.is_object() => return Ok(value),
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(start, end, error = %e, "skipping unparseable span");
                last_error = Some(e.to_string());
            }
        }
    }

    Err(AiError::InvalidJson(
        last_error.unwrap_or_else(|| "no object span".to_string()),
    ))
}
