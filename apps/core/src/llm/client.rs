use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::env;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::backoff::{backoff_delay, AttemptOutcome, BackoffPolicy};
use super::response::extract_text;
use super::traits::{LlmClient, Sleeper, TokioSleeper};
use super::types::{Completion, CompletionError, CompletionRequest, CompletionResult};
use crate::config::ChatConfig;
use crate::error::AppError;
use crate::models::ChatMessage;

/// Where the bearer credential comes from. Resolved on every call.
#[derive(Clone)]
pub enum ApiKeySource {
    /// Read from the named environment variable.
    Env(String),
    /// A fixed key.
    Static(String),
}

impl fmt::Debug for ApiKeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKeySource::Env(var) => f.debug_tuple("Env").field(var).finish(),
            ApiKeySource::Static(_) => f.write_str("Static(<redacted>)"),
        }
    }
}

impl ApiKeySource {
    pub fn resolve(&self) -> Result<String, CompletionError> {
        let key = match self {
            ApiKeySource::Env(var) => env::var(var).map_err(|_| {
                CompletionError::Configuration(format!(
                    "{} not set. Export it as an environment variable (do not commit it).",
                    var
                ))
            })?,
            ApiKeySource::Static(key) => key.clone(),
        };

        if key.trim().is_empty() {
            return Err(CompletionError::Configuration(
                "API key is empty".to_string(),
            ));
        }
        Ok(key)
    }
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
}

/// Chat-completions client for OpenRouter-compatible endpoints.
pub struct OpenRouterClient {
    client: Client,
    endpoint: Url,
    api_key: ApiKeySource,
    app_headers: HeaderMap,
    sleeper: Arc<dyn Sleeper>,
}

impl OpenRouterClient {
    /// Creates a client for the endpoint and headers in `config`.
    ///
    /// The credential is not read here; a missing key only surfaces when a call is made.
    pub fn new(config: &ChatConfig) -> Result<Self, AppError> {
        let endpoint = Url::parse(&config.endpoint)?;

        let mut app_headers = HeaderMap::new();
        app_headers.insert(
            HeaderName::from_static("http-referer"),
            header_value("referer", &config.referer)?,
        );
        app_headers.insert(
            HeaderName::from_static("x-title"),
            header_value("app title", &config.app_title)?,
        );

        Ok(Self {
            client: Client::new(),
            endpoint,
            api_key: ApiKeySource::Env(config.api_key_env.clone()),
            app_headers,
            sleeper: Arc::new(TokioSleeper),
        })
    }

    pub fn with_api_key(mut self, api_key: ApiKeySource) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    fn build_request(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<reqwest::RequestBuilder, CompletionError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
            CompletionError::Configuration("API key contains invalid header characters".to_string())
        })?;
        auth.set_sensitive(true);

        let mut headers = self.app_headers.clone();
        headers.insert(AUTHORIZATION, auth);

        let body = ChatCompletionBody {
            model: &request.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
        };

        Ok(self
            .client
            .post(self.endpoint.clone())
            .headers(headers)
            .timeout(request.timeout)
            .json(&body))
    }

    /// Sends one attempt and classifies what came back.
    async fn attempt(
        &self,
        api_key: &str,
        request: &CompletionRequest,
        attempt: u32,
    ) -> AttemptOutcome {
        let builder = match self.build_request(api_key, request) {
            Ok(builder) => builder,
            Err(e) => return AttemptOutcome::FailFast(e),
        };

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return transport_outcome(e, attempt),
        };

        let status = response.status();
        match status {
            StatusCode::OK => {
                let body = match response.text().await {
                    Ok(body) => body,
                    Err(e) => return transport_outcome(e, attempt),
                };
                let payload: Value = match serde_json::from_str(&body) {
                    Ok(payload) => payload,
                    Err(_) => {
                        return AttemptOutcome::FailFast(CompletionError::UnparsedResponse {
                            raw: Value::String(body),
                        })
                    }
                };
                match extract_text(&payload) {
                    Some(text) => AttemptOutcome::Succeeded(Completion { text, raw: payload }),
                    None => AttemptOutcome::FailFast(CompletionError::UnparsedResponse { raw: payload }),
                }
            }
            StatusCode::TOO_MANY_REQUESTS | StatusCode::SERVICE_UNAVAILABLE => AttemptOutcome::Retry {
                policy: BackoffPolicy::Exponential,
                exhausted: CompletionError::RateLimited {
                    status: status.as_u16(),
                },
            },
            _ => {
                let body = response.text().await.unwrap_or_default();
                let detail = serde_json::from_str::<Value>(&body)
                    .map(|json| json.to_string())
                    .unwrap_or(body);
                AttemptOutcome::FailFast(CompletionError::Http {
                    status: status.as_u16(),
                    detail,
                })
            }
        }
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(value)
        .map_err(|_| AppError::Config(format!("{} is not a valid header value: {:?}", name, value)))
}

fn transport_outcome(err: reqwest::Error, attempt: u32) -> AttemptOutcome {
    if err.is_timeout() {
        AttemptOutcome::Retry {
            policy: BackoffPolicy::Linear,
            exhausted: CompletionError::Timeout { attempts: attempt },
        }
    } else {
        AttemptOutcome::FailFast(CompletionError::Transport(err.without_url().to_string()))
    }
}

#[async_trait]
impl LlmClient for OpenRouterClient {
    #[instrument(skip(self, request), fields(model = %request.model, messages = request.messages.len()))]
    async fn complete(&self, request: CompletionRequest) -> CompletionResult {
        let api_key = self.api_key.resolve()?;
        let total_attempts = request.retries.saturating_add(1);

        for attempt in 1..=total_attempts {
            debug!(attempt, total_attempts, "Sending completion request");

            match self.attempt(&api_key, &request, attempt).await {
                AttemptOutcome::Succeeded(completion) => {
                    info!(attempt, chars = completion.text.len(), "Completion succeeded");
                    return Ok(completion);
                }
                AttemptOutcome::FailFast(e) => {
                    warn!(attempt, kind = e.kind(), status = ?e.status(), "Completion failed");
                    return Err(e);
                }
                AttemptOutcome::Retry { policy, exhausted } => {
                    if attempt >= total_attempts {
                        warn!(attempt, kind = exhausted.kind(), "Completion retries exhausted");
                        return Err(exhausted);
                    }
                    let delay = backoff_delay(policy, request.backoff_base, attempt);
                    info!(attempt, kind = exhausted.kind(), ?delay, "Retrying completion request");
                    self.sleeper.sleep(delay).await;
                }
            }
        }

        Err(CompletionError::Unknown)
    }
}
