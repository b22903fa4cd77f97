//! Role Dataset.
//!
//! Static mapping of role name -> skills / roadmap / projects, loaded once at
//! startup and shared read-only. Iteration order is the key order of the
//! source file, which is what role extraction tie-breaks on.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::info;

use crate::error::AppError;
use crate::models::RoleEntry;

#[derive(Debug, Clone, Default)]
pub struct RoleDataset {
    entries: Vec<(String, RoleEntry)>,
}

impl RoleDataset {
    /// Loads the dataset from a JSON file. Any failure here is fatal for the caller.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::Dataset(format!("cannot read {}: {}", path.display(), e))
        })?;
        let dataset = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            roles = dataset.len(),
            "Role dataset loaded"
        );
        Ok(dataset)
    }

    /// Parses a dataset document, keeping the document's key order.
    pub fn from_json_str(raw: &str) -> Result<Self, AppError> {
        let root: Map<String, Value> = serde_json::from_str(raw)
            .map_err(|e| AppError::Dataset(format!("malformed dataset: {}", e)))?;

        let mut entries = Vec::with_capacity(root.len());
        for (name, value) in root {
            if name.trim().is_empty() {
                return Err(AppError::Dataset("role name must not be empty".to_string()));
            }
            let entry: RoleEntry = serde_json::from_value(value)
                .map_err(|e| AppError::Dataset(format!("role '{}': {}", name, e)))?;
            entries.push((name, entry));
        }

        Ok(Self { entries })
    }

    /// Builds a dataset from already-parsed entries, in the given order.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, RoleEntry)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, entry)| (name.into(), entry))
                .collect(),
        }
    }

    pub fn get(&self, role: &str) -> Option<&RoleEntry> {
        self.entries
            .iter()
            .find(|(name, _)| name == role)
            .map(|(_, entry)| entry)
    }

    /// Role names in iteration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RoleEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
