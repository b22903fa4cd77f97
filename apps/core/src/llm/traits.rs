use async_trait::async_trait;
use std::time::Duration;

use super::types::{CompletionRequest, CompletionResult};

/// Defines the public interface for a completion backend.
///
/// This is the only seam through which the pipeline reaches the network, so
/// tests substitute it freely.
#[async_trait]
pub trait LlmClient: Send + Sync + 'static {
    /// Runs one completion call, including its own retry loop.
    async fn complete(&self, request: CompletionRequest) -> CompletionResult;
}

/// Sleeps between retry attempts. Injected so tests can record backoff instead of waiting.
#[async_trait]
pub trait Sleeper: Send + Sync + 'static {
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the Tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
