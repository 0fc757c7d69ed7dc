//! Bookshelf configuration
//!
//! Values are layered: defaults, then an optional TOML file, then the
//! environment, then whatever the caller sets explicitly.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{BookshelfError, Result, ResultExt};
use crate::storage::json_file::DEFAULT_DATA_FILE;

/// Environment variable overriding the data file location
pub const DATA_FILE_ENV: &str = "BOOKSHELF_DATA_FILE";

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "bookshelf.toml";

/// Main bookshelf configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookshelfConfig {
    /// JSON file holding the collection
    pub data_file: PathBuf,
}

impl Default for BookshelfConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl BookshelfConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data file
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(BookshelfError::from)
            .with_context(|| format!("Reading config '{}'", path.display()))?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `path` if given, otherwise `bookshelf.toml` when it exists, otherwise defaults
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        Self::discover_in(Path::new("."), path)
    }

    /// Like [`discover`](Self::discover), looking for `bookshelf.toml` under `dir`
    pub fn discover_in(dir: &Path, path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.exists() {
            tracing::debug!("Using config {}", candidate.display());
            Self::from_file(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Override values from the process environment
    pub fn apply_env(self) -> Self {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Override values from an arbitrary variable lookup
    pub fn apply_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(DATA_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            self.data_file = PathBuf::from(path);
        }
        self
    }
}
