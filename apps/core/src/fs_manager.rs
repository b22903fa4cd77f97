use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::ChatConfig;

/// Resolves the on-disk locations the chatbot reads and writes.
///
/// Relative paths in the configuration are taken relative to `root`.
#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
    dataset: PathBuf,
    sessions: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>, config: &ChatConfig) -> Self {
        let root = root.into();
        let dataset = root.join(&config.dataset_path);
        let sessions = root.join(&config.sessions_dir);
        Self {
            root,
            dataset,
            sessions,
        }
    }

    /// Paths relative to the current working directory.
    pub fn from_current_dir(config: &ChatConfig) -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?, config))
    }

    pub fn root_dir(&self) -> &Path {
        &self.root
    }

    /// Role dataset file (./data/role_skill_map.json by default).
    pub fn dataset_path(&self) -> &Path {
        &self.dataset
    }

    /// Directory for saved transcripts (./data/sessions by default).
    pub fn sessions_dir(&self) -> &Path {
        &self.sessions
    }

    /// Creates the sessions directory if it does not exist.
    pub fn init(&self) -> Result<(), std::io::Error> {
        if !self.sessions.exists() {
            info!("Creating sessions directory: {:?}", self.sessions);
            fs::create_dir_all(&self.sessions)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_hang_off_root() {
        let paths = DataPaths::new("/srv/chat", &ChatConfig::default());
        assert_eq!(paths.dataset_path(), Path::new("/srv/chat/data/role_skill_map.json"));
        assert_eq!(paths.sessions_dir(), Path::new("/srv/chat/data/sessions"));
    }

    #[test]
    fn absolute_config_paths_win() {
        let config = ChatConfig {
            dataset_path: PathBuf::from("/etc/roles.json"),
            ..ChatConfig::default()
        };
        let paths = DataPaths::new("/srv/chat", &config);
        assert_eq!(paths.dataset_path(), Path::new("/etc/roles.json"));
    }

    #[test]
    fn init_creates_sessions_dir() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path(), &ChatConfig::default());
        paths.init().unwrap();
        assert!(paths.sessions_dir().is_dir());
    }
}
