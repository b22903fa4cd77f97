//! # Brain Module
//!
//! Fast, non-LLM analysis of a user message.
//! Everything here is a pure function of its input and the role dataset.
//!
//! ## Components
//! - `intent`: Intent classification using ordered regex pattern groups
//! - `roles`: Role extraction against dataset keys
//! - `expansion`: Detects requests for elaborated answers
//! - `sanitizer`: Cleans and truncates generated text
//! - `prompts`: Fixed replies, deterministic blocks and LLM prompts

pub mod expansion;
pub mod intent;
pub mod prompts;
pub mod roles;
pub mod sanitizer;

// Re-export main types for convenience
pub use expansion::wants_expansion;
pub use intent::{Intent, IntentClassifier, IntentResult, UnknownIntent};
pub use roles::{extract_role, extract_roles, resolve_comparison, split_role_labels, RolePair};
pub use sanitizer::{clean_output, sanitize, truncate, MAX_OUTPUT_CHARS, TRUNCATION_MARKER};
