//! Output sanitization for generated text.
//!
//! Removes chat-template control tokens that some models leak into their
//! output, then trims. Removal repeats until nothing matches, which keeps
//! `sanitize` idempotent even when removing one token exposes another
//! (e.g. `<s<s>>`).

use regex::Regex;
use std::sync::LazyLock;

/// Maximum number of characters shown from a generated answer.
pub const MAX_OUTPUT_CHARS: usize = 4000;

/// Appended when an answer is cut at [`MAX_OUTPUT_CHARS`].
pub const TRUNCATION_MARKER: &str = "...";

static CONTROL_TOKENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)",
        // ChatML and friends
        r"<\|(?:im_start|im_end|system|user|assistant|end|endoftext|eot_id|begin_of_text|start_header_id|end_header_id)\|>",
        // Llama / Mistral instruction wrappers
        r"|\[/?INST\]|<</?SYS>>|</?s>",
        // reasoning-trace wrappers
        r"|</?(?:think|thinking|reasoning)>",
    ))
    .expect("Invalid regex: control tokens")
});

/// Strips model-control tokens and surrounding whitespace.
pub fn sanitize(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = CONTROL_TOKENS.replace_all(&current, "");
        if next == current {
            break;
        }
        current = next.into_owned();
    }
    current.trim().to_string()
}

/// Cuts `text` to `max_chars` characters, appending [`TRUNCATION_MARKER`] when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

/// Sanitize then truncate to [`MAX_OUTPUT_CHARS`]; applied to every generated answer.
pub fn clean_output(text: &str) -> String {
    truncate(&sanitize(text), MAX_OUTPUT_CHARS)
}
