use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::config::ChatConfig;
use crate::models::ChatMessage;

/// One outbound completion call. Built fresh per call, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    pub max_tokens: u32,
    /// Per-attempt network timeout.
    pub timeout: Duration,
    /// Extra attempts after the first; total attempts are `retries + 1`.
    pub retries: u32,
    pub backoff_base: Duration,
}

impl CompletionRequest {
    /// A request using the model and retry settings from `config`.
    pub fn from_config(messages: Vec<ChatMessage>, config: &ChatConfig) -> Self {
        Self {
            messages,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            timeout: config.timeout(),
            retries: config.retries,
            backoff_base: config.backoff_base(),
        }
    }

    /// `[system, user]` pair, the shape every assembler call uses.
    pub fn prompt(system: &str, user: impl Into<String>, config: &ChatConfig) -> Self {
        Self::from_config(
            vec![ChatMessage::system(system), ChatMessage::user(user)],
            config,
        )
    }
}

/// Successful completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub text: String,
    /// The decoded response body, kept for diagnostics.
    pub raw: Value,
}

/// Failure kinds of a completion call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompletionError {
    /// The credential is missing. Never retried.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("request timed out after {attempts} attempt(s)")]
    Timeout { attempts: u32 },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("rate limited (HTTP {status})")]
    RateLimited { status: u16 },

    #[error("HTTP {status}: {detail}")]
    Http { status: u16, detail: String },

    #[error("response had no extractable text")]
    UnparsedResponse { raw: Value },

    #[error("completion failed for an unknown reason")]
    Unknown,
}

impl CompletionError {
    /// Stable short name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CompletionError::Configuration(_) => "configuration_error",
            CompletionError::Timeout { .. } => "timeout",
            CompletionError::Transport(_) => "transport_error",
            CompletionError::RateLimited { .. } => "rate_limited",
            CompletionError::Http { .. } => "http_error",
            CompletionError::UnparsedResponse { .. } => "unparsed_response",
            CompletionError::Unknown => "unknown_failure",
        }
    }

    /// HTTP status attached to the failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            CompletionError::RateLimited { status } | CompletionError::Http { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Configuration problems mean the deployment is broken; everything else
    /// degrades to deterministic text.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CompletionError::Configuration(_))
    }
}

/// What a completion call returns.
pub type CompletionResult = Result<Completion, CompletionError>;
