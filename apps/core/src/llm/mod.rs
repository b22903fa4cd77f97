//! Completion client: the only component that talks to the network.
//!
//! ## Components
//! - `types`: request, completion and the failure taxonomy
//! - `traits`: the `LlmClient` seam and the injectable `Sleeper`
//! - `backoff`: retry delays and per-attempt outcomes
//! - `response`: tolerant response-shape parsing
//! - `client`: reqwest-backed OpenRouter implementation

pub mod backoff;
pub mod client;
pub mod response;
pub mod traits;
pub mod types;

pub use backoff::{backoff_delay, AttemptOutcome, BackoffPolicy};
pub use client::{ApiKeySource, OpenRouterClient};
pub use response::extract_text;
pub use traits::{LlmClient, Sleeper, TokioSleeper};
pub use types::{Completion, CompletionError, CompletionRequest, CompletionResult};
