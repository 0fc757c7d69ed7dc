//! Search over the collection

use crate::book::Book;
use crate::error::BookshelfError;
use std::str::FromStr;

/// Which field a search looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Title,
    Author,
}

impl SearchKind {
    /// Case-insensitive substring match of `term` against the selected field.
    ///
    /// The term is trimmed first; an empty term matches every book.
    pub fn matches(self, book: &Book, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        let haystack = match self {
            SearchKind::Title => &book.title,
            SearchKind::Author => &book.author,
        };
        haystack.to_lowercase().contains(&needle)
    }
}

impl FromStr for SearchKind {
    type Err = BookshelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SearchKind::Title),
            "author" => Ok(SearchKind::Author),
            other => Err(BookshelfError::InvalidInput(format!(
                "unknown search type '{}', expected 'title' or 'author'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!("title".parse::<SearchKind>().unwrap(), SearchKind::Title);
        assert_eq!(" Author \n".parse::<SearchKind>().unwrap(), SearchKind::Author);

        let err = "genre".parse::<SearchKind>().unwrap_err();
        assert!(matches!(err, BookshelfError::InvalidInput(_)));
        assert!(err.to_string().contains("genre"));
    }

    #[test]
    fn test_substring_match_ignores_case() {
        let book = Book::new("Dune", "Frank Herbert", "1965", "SF", false);

        assert!(SearchKind::Title.matches(&book, "dune"));
        assert!(SearchKind::Title.matches(&book, "UN"));
        assert!(SearchKind::Author.matches(&book, "  herb "));
        assert!(!SearchKind::Author.matches(&book, "dune"));
        assert!(SearchKind::Title.matches(&book, ""));
    }
}
