//! Locates the JSON payload inside free-form model output.
//!
//! Models wrap JSON in prose, markdown fences, or apologies. This is a
//! bracket scan, not a parser: nesting is not checked, so odd inputs such as
//! `{a} and {b}` yield a span that will later fail to parse.

use serde::de::DeserializeOwned;

use super::LlmError;

/// Returns the outermost `{...}` or `[...]` region of `text`.
///
/// Whichever opener appears first decides the delimiter type; the span ends at
/// the last closer of that type.
pub fn extract_json_span(text: &str) -> Option<&str> {
    let (start, close) = match (text.find('{'), text.find('[')) {
        (Some(brace), Some(bracket)) if bracket < brace => (bracket, ']'),
        (Some(brace), _) => (brace, '}'),
        (None, Some(bracket)) => (bracket, ']'),
        (None, None) => return None,
    };

    let end = text.rfind(close)?;
    if end < start {
        return None;
    }

    Some(&text[start..=end])
}

/// Extracts the JSON span from `text` and deserializes it.
pub fn parse_json_fragment<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    let span = extract_json_span(text).ok_or(LlmError::NoJson)?;
    serde_json::from_str(span).map_err(LlmError::Parse)
}
