//! Recovery of a ranked name list from free-text model output.
//!
//! Models are asked for a bare JSON array but often wrap it in prose or code
//! fences. Parsing is two explicit steps: the whole text as JSON, then the
//! widest bracketed span inside it.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::errors::ResponseParseError;

static BRACKETED_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*\]").expect("bracketed array regex"));

/// Parses the whole response as a JSON array of names.
pub fn parse_strict(text: &str) -> Result<Vec<String>, ResponseParseError> {
    if text.trim().is_empty() {
        return Err(ResponseParseError::Empty);
    }

    let parsed: Value =
        serde_json::from_str(text).map_err(|_| ResponseParseError::NotJsonArray)?;

    names_from_value(parsed)
}

/// Parses the span from the first `[` to the last `]`, newlines included.
pub fn parse_bracketed(text: &str) -> Result<Vec<String>, ResponseParseError> {
    if text.trim().is_empty() {
        return Err(ResponseParseError::Empty);
    }

    let span = BRACKETED_ARRAY
        .find(text)
        .map(|m| m.as_str())
        .ok_or(ResponseParseError::NoBracketedArray)?;

    let parsed: Value =
        serde_json::from_str(span).map_err(|_| ResponseParseError::NotJsonArray)?;

    names_from_value(parsed)
}

/// Strict parse first, bracketed span second.
pub fn parse_ranked_names(text: &str) -> Result<Vec<String>, ResponseParseError> {
    parse_strict(text).or_else(|_| parse_bracketed(text))
}

// A single non-string element invalidates the whole array.
fn names_from_value(value: Value) -> Result<Vec<String>, ResponseParseError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(name) => Ok(name),
                _ => Err(ResponseParseError::NonStringElement),
            })
            .collect(),
        _ => Err(ResponseParseError::NotJsonArray),
    }
}
