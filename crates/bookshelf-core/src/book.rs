//! Book records
//!
//! A [`Book`] is the unit stored in the collection. Its serialized form is the
//! on-disk format: an object with `title`, `author`, `year`, `genre` and `read`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single book entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title, also the case-insensitive lookup key
    pub title: String,
    pub author: String,
    /// Free text, never validated
    pub year: String,
    pub genre: String,
    /// Whether the user has read the book
    pub read: bool,
}

impl Book {
    /// Create a new book record
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            genre: genre.into(),
            read,
        }
    }

    /// Case-insensitive exact comparison against the title
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Human-readable reading status
    pub fn status_label(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Not Read"
        }
    }

    /// Apply an update in place
    pub fn apply(&mut self, update: &BookUpdate) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(author) = &update.author {
            self.author = author.clone();
        }
        if let Some(year) = &update.year {
            self.year = year.clone();
        }
        if let Some(genre) = &update.genre {
            self.genre = genre.clone();
        }
        self.read = update.read;
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {} Author: {} Year: {} Genre: {} Status: {}",
            self.title,
            self.author,
            self.year,
            self.genre,
            self.status_label()
        )
    }
}

/// Replacement values for an existing record.
///
/// `None` keeps the current value. The read status has no "keep" state: it is
/// always asked again and always applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub read: bool,
}

impl BookUpdate {
    /// Update that only sets the read status
    pub fn new(read: bool) -> Self {
        Self {
            read,
            ..Self::default()
        }
    }

    /// Build from raw prompt answers, where an empty answer means "keep"
    pub fn from_answers(title: &str, author: &str, year: &str, genre: &str, read: bool) -> Self {
        Self {
            title: non_empty(title),
            author: non_empty(author),
            year: non_empty(year),
            genre: non_empty(genre),
            read,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Resolve a yes/no answer: only "yes" (trimmed, any case) counts as read
pub fn parse_read_answer(answer: &str) -> bool {
    answer.trim().to_lowercase() == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book::new("Dune", "Frank Herbert", "1965", "Science Fiction", false)
    }

    #[test]
    fn test_has_title_ignores_case() {
        let book = dune();
        assert!(book.has_title("dune"));
        assert!(book.has_title("DUNE"));
        assert!(!book.has_title("dun"));
        assert!(!book.has_title("Dune Messiah"));
    }

    #[test]
    fn test_empty_answers_keep_fields() {
        let mut book = dune();
        book.apply(&BookUpdate::from_answers("", "", "", "", true));

        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.year, "1965");
        assert_eq!(book.genre, "Science Fiction");
        assert!(book.read);
    }

    #[test]
    fn test_non_empty_answers_overwrite() {
        let mut book = dune();
        book.read = true;
        book.apply(&BookUpdate::new(false).with_year("1966").with_genre("SF"));

        assert_eq!(book.year, "1966");
        assert_eq!(book.genre, "SF");
        assert_eq!(book.title, "Dune");
        assert!(!book.read);
    }

    #[test]
    fn test_whitespace_answer_is_a_value() {
        let update = BookUpdate::from_answers(" ", "", "", "", false);
        assert_eq!(update.title.as_deref(), Some(" "));
    }

    #[test]
    fn test_parse_read_answer() {
        assert!(parse_read_answer("yes"));
        assert!(parse_read_answer("  YES \n"));
        assert!(!parse_read_answer("y"));
        assert!(!parse_read_answer("no"));
        assert!(!parse_read_answer(""));
    }

    #[test]
    fn test_display_line() {
        let line = dune().to_string();
        assert_eq!(
            line,
            "Title: Dune Author: Frank Herbert Year: 1965 Genre: Science Fiction Status: Not Read"
        );
    }

    #[test]
    fn test_json_field_names() {
        let value = serde_json::to_value(dune()).unwrap();
        assert_eq!(value["title"], "Dune");
        assert_eq!(value["year"], "1965");
        assert_eq!(value["read"], false);
        assert_eq!(value.as_object().unwrap().len(), 5);
    }
}
