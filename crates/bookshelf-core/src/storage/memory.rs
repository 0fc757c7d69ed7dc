//! In-memory storage backend

use super::BookStorage;
use crate::book::Book;
use crate::error::{BookshelfError, Result};

/// Keeps the saved collection in process memory.
///
/// Every save is recorded, which lets callers check how many times the
/// collection was persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    books: Option<Vec<Book>>,
    saves: usize,
}

impl MemoryStorage {
    /// Storage with nothing saved yet; loading it behaves like a missing file
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with records
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Some(books),
            saves: 0,
        }
    }

    /// Number of completed saves
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Last saved (or seeded) collection
    pub fn snapshot(&self) -> Option<&[Book]> {
        self.books.as_deref()
    }
}

impl BookStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Book>> {
        self.books
            .clone()
            .ok_or_else(|| BookshelfError::InvalidInput("nothing saved in memory".to_string()))
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.books = Some(books.to_vec());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_storage_reports_invalid_input() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap_err().is_recoverable());
    }

    #[test]
    fn test_save_replaces_and_counts() {
        let mut storage = MemoryStorage::with_books(vec![Book::new("A", "B", "C", "D", false)]);
        storage.save(&[]).unwrap();

        assert_eq!(storage.save_count(), 1);
        assert!(storage.load().unwrap().is_empty());
    }
}
