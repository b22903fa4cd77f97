//! Detects when the user asks for more than the canned answer.

use regex::Regex;
use std::sync::LazyLock;

static EXPANSION_TRIGGERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(explain|explanation|detail|details|detailed|elaborate|why|how to|more|expand|in depth|deep dive)\b",
    )
    .expect("Invalid regex: expansion triggers")
});

/// True if the message asks for an elaborated answer.
pub fn wants_expansion(message: &str) -> bool {
    EXPANSION_TRIGGERS.is_match(message)
}
