//! Tolerant extraction of generated text from a chat-completions payload.
//!
//! Shapes are tried in a fixed order on the first choice:
//! `message.content`, then `text`, then `content`.

use serde_json::Value;

fn nested_message_content(choice: &Value) -> Option<&str> {
    choice.get("message")?.get("content")?.as_str()
}

fn flat_text(choice: &Value) -> Option<&str> {
    choice.get("text")?.as_str()
}

fn flat_content(choice: &Value) -> Option<&str> {
    choice.get("content")?.as_str()
}

/// Returns the first extractable text, or `None` for an unrecognised shape.
pub fn extract_text(payload: &Value) -> Option<String> {
    let first = payload.get("choices")?.as_array()?.first()?;

    let extractors: [fn(&Value) -> Option<&str>; 3] =
        [nested_message_content, flat_text, flat_content];

    extractors
        .iter()
        .find_map(|extract| extract(first))
        .map(str::to_string)
}
