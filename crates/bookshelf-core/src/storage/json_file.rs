//! JsonFileStorage: the collection as a JSON document on disk

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::BookStorage;
use crate::book::Book;
use crate::error::{BookshelfError, Result, ResultExt};

/// Default storage file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "books-data.json";

const INDENT: &[u8] = b"    ";

/// JSON array of book objects, rewritten wholesale on every save
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render the collection exactly as it is written to disk
    pub fn to_pretty_json(books: &[Book]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        books.serialize(&mut ser)?;
        Ok(buf)
    }
}

impl Default for JsonFileStorage {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl BookStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Book>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            BookshelfError::InvalidInput(format!(
                "cannot read storage file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let books: Vec<Book> = serde_json::from_str(&content).map_err(|e| {
            tracing::warn!("Ignoring malformed storage file {}: {}", self.path.display(), e);
            BookshelfError::InvalidInput(format!(
                "malformed storage file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!("Loaded {} books from {}", books.len(), self.path.display());
        Ok(books)
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        let content = Self::to_pretty_json(books)?;
        std::fs::write(&self.path, content)
            .map_err(BookshelfError::from)
            .with_context(|| format!("Writing storage file '{}'", self.path.display()))?;

        tracing::debug!("Saved {} books to {}", books.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
