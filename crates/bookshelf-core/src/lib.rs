//! Bookshelf Core - collection store for a personal book tracker
//!
//! A single local user keeps a list of books, marks what they have read,
//! searches and edits entries and checks their reading progress. The
//! collection lives in memory and is rewritten in full to a JSON file after
//! every change.
//!
//! # Quick Start
//!
//! ```
//! use bookshelf_core::{Book, BookCollection, SearchKind};
//! use bookshelf_core::storage::MemoryStorage;
//!
//! let mut shelf = BookCollection::open(MemoryStorage::new()).unwrap();
//!
//! shelf.add(Book::new("1984", "George Orwell", "1949", "Dystopian", true)).unwrap();
//! shelf.add(Book::new("Dune", "Frank Herbert", "1965", "Science Fiction", false)).unwrap();
//!
//! assert_eq!(shelf.find(SearchKind::Title, "dune").len(), 1);
//! println!("Progress: {}", shelf.progress());
//! ```

#![deny(unsafe_code)]
#![warn(rust_2018_idioms, missing_debug_implementations, clippy::all)]

pub mod book;
pub mod collection;
pub mod config;
pub mod error;
pub mod progress;
pub mod search;
pub mod storage;

// Re-export commonly used types for convenience
pub use book::{parse_read_answer, Book, BookUpdate};
pub use collection::BookCollection;
pub use config::BookshelfConfig;
pub use error::{BookshelfError, Result, ResultExt};
pub use progress::ReadingProgress;
pub use search::SearchKind;
pub use storage::{BookStorage, JsonFileStorage, MemoryStorage};
