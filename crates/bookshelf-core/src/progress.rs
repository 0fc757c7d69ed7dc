//! Reading progress statistics

use crate::book::Book;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// How many books of the collection have been read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadingProgress {
    pub read: usize,
    pub total: usize,
}

impl ReadingProgress {
    /// Count read books over the given records
    pub fn from_books<'a>(books: impl IntoIterator<Item = &'a Book>) -> Self {
        let mut progress = Self::default();
        for book in books {
            progress.total += 1;
            if book.read {
                progress.read += 1;
            }
        }
        progress
    }

    /// Get completion percentage (0.0-100.0)
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.read as f64 / self.total as f64 * 100.0
    }
}

/// Serialized as `{"read", "total", "percentage"}`
impl Serialize for ReadingProgress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ReadingProgress", 3)?;
        state.serialize_field("read", &self.read)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("percentage", &self.percentage())?;
        state.end()
    }
}

impl fmt::Display for ReadingProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn shelf(read_flags: &[bool]) -> Vec<Book> {
        read_flags
            .iter()
            .enumerate()
            .map(|(i, read)| Book::new(format!("Book {}", i), "Anon", "2000", "Misc", *read))
            .collect()
    }

    #[test]
    fn test_empty_collection_is_zero() {
        let progress = ReadingProgress::from_books(&Vec::<Book>::new());
        assert_eq!(progress.total, 0);
        assert_eq!(progress.percentage(), 0.0);
        assert_eq!(progress.to_string(), "0.00%");
    }

    #[test]
    fn test_one_of_four() {
        let books = shelf(&[true, false, false, false]);
        let progress = ReadingProgress::from_books(&books);

        assert_eq!(progress.read, 1);
        assert_eq!(progress.to_string(), "25.00%");
    }

    #[test]
    fn test_two_decimals() {
        let books = shelf(&[true, false, false]);
        assert_eq!(ReadingProgress::from_books(&books).to_string(), "33.33%");
    }

    #[test]
    fn test_json_carries_percentage() {
        let books = shelf(&[true, false, false, false]);
        let json = serde_json::to_string(&ReadingProgress::from_books(&books)).unwrap();
        assert_eq!(json, r#"{"read":1,"total":4,"percentage":25.0}"#);

        let empty = serde_json::to_value(ReadingProgress::default()).unwrap();
        assert_eq!(empty["percentage"], 0.0);
    }

    proptest! {
        #[test]
        fn percentage_stays_in_bounds(flags in proptest::collection::vec(any::<bool>(), 0..64)) {
            let progress = ReadingProgress::from_books(&shelf(&flags));
            let pct = progress.percentage();

            prop_assert!((0.0..=100.0).contains(&pct));
            prop_assert_eq!(progress.read, flags.iter().filter(|r| **r).count());
            prop_assert_eq!(progress.total, flags.len());
        }
    }
}
