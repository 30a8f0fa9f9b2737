//! Response normalizer — turns whatever text the model returned into an `Evaluation`.
//!
//! Algorithm:
//! 1. Parse the whole text as a JSON object.
//! 2. If the whole text is valid JSON of another kind (array, number, ...), stop here
//!    and fall back.
//! 3. Otherwise parse the slice from the first `{` to the last `}` (salvage).
//! 4. Otherwise return the fixed fallback, keeping the raw text for diagnosis.
//!
//! Field coercion runs on whichever object was recovered. `normalize` never fails.

use serde_json::{Map, Value};

use crate::models::evaluation::{Evaluation, DEFAULT_RECOMMENDATION};

/// Summary used when the model output could not be parsed at all.
pub const UNPARSEABLE_SUMMARY: &str = "Could not parse model output as JSON.";

/// Produces a well-typed evaluation from raw model text. Never fails.
pub fn normalize(raw: &str) -> Evaluation {
    match recover_object(raw) {
        Some(object) => from_object(&object),
        None => fallback(raw),
    }
}

/// Coerces a score to an integer if it converts cleanly.
///
/// Accepts JSON integers, floats with no fractional part, and strings holding an
/// integer (surrounding whitespace allowed). Everything else is treated as absent.
pub fn parse_score(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn recover_object(raw: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(object)) => Some(object),
        Ok(_) => None,
        Err(_) => salvage(raw),
    }
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}

/// Retries parsing on the outermost brace-delimited span.
fn salvage(raw: &str) -> Option<Map<String, Value>> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    // Both braces are ASCII, so these byte offsets sit on char boundaries.
    parse_object(&raw[start..=end])
}

fn from_object(object: &Map<String, Value>) -> Evaluation {
    Evaluation {
        score: object.get("score").and_then(parse_score),
        summary: summary_text(object.get("summary")),
        strengths: string_list(object.get("strengths")),
        gaps: string_list(object.get("gaps")),
        recommendation: match object.get("recommendation") {
            Some(Value::String(s)) => s.clone(),
            _ => DEFAULT_RECOMMENDATION.to_string(),
        },
        raw_output: None,
    }
}

/// Summary is passed through; non-string values keep their JSON rendering.
fn summary_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// An array made only of strings; anything else becomes empty.
fn string_list(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| item.as_str().map(String::from))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default()
}

fn fallback(raw: &str) -> Evaluation {
    Evaluation {
        score: None,
        summary: UNPARSEABLE_SUMMARY.to_string(),
        strengths: Vec::new(),
        gaps: Vec::new(),
        recommendation: DEFAULT_RECOMMENDATION.to_string(),
        raw_output: Some(raw.to_string()),
    }
}
