//! In-memory chat transcript with optional flat-file dumps.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{ChatMessage, Role};

/// Ordered, append-only record of one chat session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub session_id: Uuid,
    pub started_at: DateTime<Local>,
    messages: Vec<ChatMessage>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: Local::now(),
            messages: Vec::new(),
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(Role::User, content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(Role::Assistant, content));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// File name used by [`Transcript::save`].
    pub fn file_name(&self) -> String {
        let short_id: String = self.session_id.simple().to_string().chars().take(8).collect();
        format!(
            "session_{}_{}.json",
            Local::now().format("%Y%m%d_%H%M%S"),
            short_id
        )
    }

    /// Writes the transcript as pretty JSON into `dir` and returns the file path.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<PathBuf, AppError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        info!(
            session_id = %self.session_id,
            messages = self.messages.len(),
            "Transcript saved to {:?}",
            path
        );
        Ok(path)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
