//! Role extraction.
//!
//! Case-insensitive substring containment against dataset keys. When several
//! keys are contained in the message, dataset iteration order decides; there
//! is no longest-match resolution.

use regex::Regex;
use std::sync::LazyLock;

use crate::dataset::RoleDataset;

static COMPARE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bvs\b\.?|\bversus\b|\band\b|/|,|-").expect("Invalid regex: compare separators")
});

/// Returns the first dataset role whose name occurs in `message`.
pub fn extract_role<'a>(dataset: &'a RoleDataset, message: &str) -> Option<&'a str> {
    let msg = message.to_lowercase();
    dataset
        .names()
        .find(|name| msg.contains(&name.to_lowercase()))
}

/// Returns every distinct dataset role occurring in `message`, in dataset order.
pub fn extract_roles<'a>(dataset: &'a RoleDataset, message: &str) -> Vec<&'a str> {
    let msg = message.to_lowercase();
    dataset
        .names()
        .filter(|name| msg.contains(&name.to_lowercase()))
        .collect()
}

/// Splits a free-text comparison request on `vs`, `versus`, `and`, `/`, `,` or `-`
/// and returns the non-empty trimmed segments.
pub fn split_role_labels(message: &str) -> Vec<String> {
    COMPARE_SEPARATORS
        .split(message)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// The two roles to compare, either dataset keys or free-text labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePair {
    pub first: String,
    pub second: String,
    /// True when both names came from the dataset rather than the separator split.
    pub from_dataset: bool,
}

/// Resolves the two roles of a comparison request.
///
/// Dataset matches are preferred; with fewer than two, the first two separator
/// segments are used verbatim. `None` when neither strategy yields two names.
pub fn resolve_comparison(dataset: &RoleDataset, message: &str) -> Option<RolePair> {
    let matches = extract_roles(dataset, message);
    if let [first, second, ..] = matches.as_slice() {
        return Some(RolePair {
            first: (*first).to_string(),
            second: (*second).to_string(),
            from_dataset: true,
        });
    }

    let mut segments = split_role_labels(message).into_iter();
    match (segments.next(), segments.next()) {
        (Some(first), Some(second)) => Some(RolePair {
            first,
            second,
            from_dataset: false,
        }),
        _ => None,
    }
}
