//! Persistent storage for the book collection
//!
//! The store never talks to the filesystem directly: it loads and saves the
//! whole sequence through a [`BookStorage`] backend.
//!
//! - [`JsonFileStorage`]: a pretty-printed JSON array on disk (default
//!   `books-data.json`)
//! - [`MemoryStorage`]: in-process backend, keeps every saved snapshot
//!
//! # Example
//!
//! ```no_run
//! use bookshelf_core::storage::{BookStorage, JsonFileStorage};
//!
//! # fn example() -> bookshelf_core::Result<()> {
//! let mut storage = JsonFileStorage::new("books-data.json");
//! let books = storage.load()?;
//! storage.save(&books)?;
//! # Ok(())
//! # }
//! ```

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::book::Book;
use crate::error::Result;

/// Backend able to load and overwrite the full collection
pub trait BookStorage {
    /// Read every record.
    ///
    /// An absent, unreadable or malformed source is reported as
    /// [`crate::BookshelfError::InvalidInput`].
    fn load(&self) -> Result<Vec<Book>>;

    /// Replace the stored collection with `books`
    fn save(&mut self, books: &[Book]) -> Result<()>;

    /// Where the records live, for log and user messages
    fn location(&self) -> String;
}
