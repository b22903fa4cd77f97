//! Runtime configuration.
//!
//! Defaults, overridden by `CAREER_CHAT_*` environment variables (an optional
//! `.env` file is loaded first). The API key itself is not part of the config;
//! only the name of the variable holding it is.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;
use validator::Validate;

use crate::error::AppError;

pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "mistralai/mistral-7b-instruct";
pub const DEFAULT_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ChatConfig {
    /// Chat-completions endpoint.
    #[validate(url)]
    pub endpoint: String,
    #[validate(length(min = 1))]
    pub model: String,
    #[validate(range(min = 1, max = 32768))]
    pub max_tokens: u32,
    /// Per-attempt timeout in seconds.
    #[validate(range(min = 1, max = 600))]
    pub timeout_secs: u64,
    #[validate(range(max = 10))]
    pub retries: u32,
    #[validate(range(max = 60000))]
    pub backoff_base_ms: u64,
    /// Name of the environment variable holding the API key.
    #[validate(length(min = 1))]
    pub api_key_env: String,
    pub referer: String,
    #[validate(length(min = 1))]
    pub app_title: String,
    pub dataset_path: PathBuf,
    pub sessions_dir: PathBuf,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 512,
            timeout_secs: 15,
            retries: 2,
            backoff_base_ms: 1000,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            referer: "http://localhost".to_string(),
            app_title: "StudentCareerChatbot".to_string(),
            dataset_path: PathBuf::from("data/role_skill_map.json"),
            sessions_dir: PathBuf::from("data/sessions"),
        }
    }
}

fn read_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::Config(format!("{} has an invalid value: {:?}", name, raw))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(AppError::Config(format!("{} is not valid UTF-8", name)))
        }
    }
}

impl ChatConfig {
    /// Loads `.env` if present, then applies environment overrides and validates.
    pub fn from_env() -> Result<Self, AppError> {
        if let Ok(path) = dotenv::dotenv() {
            debug!("Loaded environment from {:?}", path);
        }
        Self::default().with_env_overrides()
    }

    /// Applies `CAREER_CHAT_*` overrides on top of `self` and validates the result.
    pub fn with_env_overrides(mut self) -> Result<Self, AppError> {
        if let Some(v) = read_var("CAREER_CHAT_ENDPOINT")? {
            self.endpoint = v;
        }
        if let Some(v) = read_var("CAREER_CHAT_MODEL")? {
            self.model = v;
        }
        if let Some(v) = read_var("CAREER_CHAT_MAX_TOKENS")? {
            self.max_tokens = v;
        }
        if let Some(v) = read_var("CAREER_CHAT_TIMEOUT_SECS")? {
            self.timeout_secs = v;
        }
        if let Some(v) = read_var("CAREER_CHAT_RETRIES")? {
            self.retries = v;
        }
        if let Some(v) = read_var("CAREER_CHAT_BACKOFF_MS")? {
            self.backoff_base_ms = v;
        }
        if let Some(v) = read_var("CAREER_CHAT_API_KEY_ENV")? {
            self.api_key_env = v;
        }
        if let Some(v) = read_var("CAREER_CHAT_REFERER")? {
            self.referer = v;
        }
        if let Some(v) = read_var("CAREER_CHAT_APP_TITLE")? {
            self.app_title = v;
        }
        if let Some(v) = read_var("CAREER_CHAT_DATASET")? {
            self.dataset_path = v;
        }
        if let Some(v) = read_var("CAREER_CHAT_SESSIONS_DIR")? {
            self.sessions_dir = v;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn backoff_base(&self) -> Duration {
        Duration::from_millis(self.backoff_base_ms)
    }
}
