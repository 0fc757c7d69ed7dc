//! BookCollection: the in-memory collection mirrored to storage
//!
//! Every mutating operation rewrites the whole collection through the
//! storage backend before returning, so memory and storage agree after each
//! successful call. Reads (`find`, `books`, `progress`) never touch storage.

use crate::book::{Book, BookUpdate};
use crate::error::{BookshelfError, Result};
use crate::progress::ReadingProgress;
use crate::search::SearchKind;
use crate::storage::BookStorage;

/// Ordered collection of books owned by a single process
#[derive(Debug)]
pub struct BookCollection<S: BookStorage> {
    books: Vec<Book>,
    storage: S,
}

impl<S: BookStorage> BookCollection<S> {
    /// Load the collection from `storage`.
    ///
    /// An absent or malformed source starts an empty collection instead of
    /// failing; any other error is returned.
    pub fn open(storage: S) -> Result<Self> {
        let books = match storage.load() {
            Ok(books) => books,
            Err(e) if e.is_recoverable() => {
                tracing::info!("Starting with an empty collection: {}", e);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        tracing::debug!("Opened {} with {} books", storage.location(), books.len());
        Ok(Self { books, storage })
    }

    /// Append a book and persist
    pub fn add(&mut self, book: Book) -> Result<&Book> {
        tracing::info!("Adding book '{}'", book.title);
        self.books.push(book);
        self.save()?;
        let index = self.books.len() - 1;
        Ok(&self.books[index])
    }

    /// Remove the first book whose title matches (ignoring case) and persist
    pub fn delete(&mut self, title: &str) -> Result<Book> {
        let index = self.position(title)?;
        let removed = self.books.remove(index);
        tracing::info!("Deleted book '{}'", removed.title);
        self.save()?;
        Ok(removed)
    }

    /// Books whose title or author contains `term`, ignoring case
    pub fn find(&self, kind: SearchKind, term: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| kind.matches(book, term))
            .collect()
    }

    /// Like [`find`](Self::find), parsing the search kind from user text
    pub fn find_by(&self, kind: &str, term: &str) -> Result<Vec<&Book>> {
        let kind: SearchKind = kind.parse()?;
        Ok(self.find(kind, term))
    }

    /// Apply `update` to the first book whose title matches and persist
    pub fn update(&mut self, title: &str, update: &BookUpdate) -> Result<&Book> {
        let index = self.position(title)?;
        self.books[index].apply(update);
        tracing::info!("Updated book '{}'", self.books[index].title);
        self.save()?;
        Ok(&self.books[index])
    }

    /// Look up the first book whose title matches, ignoring case
    pub fn get(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.has_title(title))
    }

    /// Reading progress over the whole collection
    pub fn progress(&self) -> ReadingProgress {
        ReadingProgress::from_books(&self.books)
    }

    /// All books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Overwrite storage with the current collection
    pub fn save(&mut self) -> Result<()> {
        self.storage.save(&self.books)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Persist one last time and hand back the storage backend
    pub fn close(mut self) -> Result<S> {
        self.save()?;
        Ok(self.storage)
    }

    fn position(&self, title: &str) -> Result<usize> {
        self.books
            .iter()
            .position(|book| book.has_title(title))
            .ok_or_else(|| BookshelfError::NotFound(title.to_string()))
    }
}
