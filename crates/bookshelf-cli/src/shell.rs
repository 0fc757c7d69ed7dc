//! Interactive menu over a book collection
//!
//! The shell reads from any `BufRead` and writes to any `Write`, so the same
//! loop serves the terminal and scripted sessions in tests.

use anyhow::Result;
use bookshelf_core::{
    parse_read_answer, Book, BookCollection, BookStorage, BookUpdate, BookshelfError,
};
use colored::Colorize;
use std::io::{BufRead, Write};

use crate::display;

/// What the menu loop does after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Shell<S: BookStorage, R: BufRead, W: Write> {
    collection: BookCollection<S>,
    input: R,
    output: W,
}

impl<S: BookStorage, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(collection: BookCollection<S>, input: R, output: W) -> Self {
        Self {
            collection,
            input,
            output,
        }
    }

    /// Run the menu until the user exits or input ends.
    ///
    /// Exiting always saves. A failed save ends the session with an error.
    pub fn run(mut self) -> Result<S> {
        loop {
            let menu = display::menu();
            write!(self.output, "{}", menu)?;
            self.output.flush()?;

            let choice = match self.read_line()? {
                Some(choice) => choice,
                None => break,
            };

            let flow = match choice.trim() {
                "1" => self.add_book()?,
                "2" => self.delete_book()?,
                "3" => self.find_book()?,
                "4" => self.update_book()?,
                "5" => self.list_books()?,
                "6" => self.show_progress()?,
                "7" => Flow::Exit,
                other => {
                    tracing::debug!("Unknown menu choice {:?}", other);
                    let msg = "❌ Invalid choice. Please try again.".red();
                    writeln!(self.output, "{}\n", msg)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        let storage = self.collection.close()?;
        writeln!(
            self.output,
            "Thank you for using Book Collection Manager. Goodbye! 👋"
        )?;
        Ok(storage)
    }

    fn add_book(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt("Enter the book title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt("Enter the book author: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(year) = self.prompt("Enter the book year: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(genre) = self.prompt("Enter the book genre: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(read) = self.prompt_read()? else {
            return Ok(Flow::Exit);
        };

        let book = Book::new(title, author, year, genre, read);
        let added = self.collection.add(book)?;
        let msg = format!("Book added successfully! Title: {}.", added.title).green();
        writeln!(self.output, "{}\n", msg)?;
        Ok(Flow::Continue)
    }

    fn delete_book(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt("Enter the book title: ")? else {
            return Ok(Flow::Exit);
        };

        match self.collection.delete(&title) {
            Ok(_) => writeln!(self.output, "{}", "Book deleted successfully!".green())?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn find_book(&mut self) -> Result<Flow> {
        let Some(kind) = self.prompt("Search by (title/author)\nEnter your choice: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(term) = self.prompt("Enter the search term: ")? else {
            return Ok(Flow::Exit);
        };

        let found = self
            .collection
            .find_by(&kind, &term)
            .map(display::book_lines);
        let lines = match found {
            Ok(lines) => lines,
            Err(e) => {
                self.report(e)?;
                return Ok(Flow::Continue);
            }
        };

        if lines.is_empty() {
            writeln!(self.output, "No books found.\n")?;
        } else {
            writeln!(self.output, "Found the following books:\n")?;
            for line in lines {
                writeln!(self.output, "{}", line)?;
            }
            writeln!(self.output)?;
        }
        Ok(Flow::Continue)
    }

    fn update_book(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt("Enter the book title you want to update: ")? else {
            return Ok(Flow::Exit);
        };

        let current = match self.collection.get(&title) {
            Some(book) => book.clone(),
            None => {
                self.report(BookshelfError::NotFound(title))?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(
            self.output,
            "Leave the field empty if you don't want to update it."
        )?;
        let Some(new_title) =
            self.prompt(&format!("Enter the new book title ({}): ", current.title))?
        else {
            return Ok(Flow::Exit);
        };
        let Some(author) =
            self.prompt(&format!("Enter the new book author ({}): ", current.author))?
        else {
            return Ok(Flow::Exit);
        };
        let Some(year) =
            self.prompt(&format!("Enter the new book year ({}): ", current.year))?
        else {
            return Ok(Flow::Exit);
        };
        let Some(genre) =
            self.prompt(&format!("Enter the new book genre ({}): ", current.genre))?
        else {
            return Ok(Flow::Exit);
        };
        let Some(read) = self.prompt_read()? else {
            return Ok(Flow::Exit);
        };

        let update = BookUpdate::from_answers(&new_title, &author, &year, &genre, read);
        let updated = self
            .collection
            .update(&title, &update)
            .map(|book| book.title.clone());
        match updated {
            Ok(new_title) => {
                let msg = format!("Book updated successfully! Title: {}", new_title).green();
                writeln!(self.output, "{}\n", msg)?;
            }
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn list_books(&mut self) -> Result<Flow> {
        if self.collection.is_empty() {
            writeln!(self.output, "Your book list is empty.\n")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "Your book list:\n")?;
        for line in display::book_lines(self.collection.books()) {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn show_progress(&mut self) -> Result<Flow> {
        let progress = self.collection.progress();
        for line in display::progress_lines(&progress) {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    /// Print a recoverable error, propagate anything else
    fn report(&mut self, err: BookshelfError) -> Result<()> {
        if !err.is_recoverable() {
            return Err(err.into());
        }

        let msg = match &err {
            BookshelfError::NotFound(_) => "Book not found!".to_string(),
            BookshelfError::InvalidInput(_) => {
                "Invalid search type! Please enter 'title' or 'author'.".to_string()
            }
            other => other.to_string(),
        };
        writeln!(self.output, "{}\n", msg.red())?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_read(&mut self) -> Result<Option<bool>> {
        let answer = self.prompt("Have you read the book? (yes/no): ")?;
        Ok(answer.as_deref().map(parse_read_answer))
    }

    /// Next input line without its line terminator, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::MemoryStorage;
    use std::io::Cursor;

    /// Run a scripted session against seeded storage, returning storage and transcript
    fn session(books: Vec<Book>, script: &str) -> (MemoryStorage, String) {
        colored::control::set_override(false);
        let collection = BookCollection::open(MemoryStorage::with_books(books)).unwrap();
        let mut output = Vec::new();
        let storage = Shell::new(collection, Cursor::new(script.to_string()), &mut output)
            .run()
            .unwrap();
        (storage, String::from_utf8(output).unwrap())
    }

    fn dune() -> Book {
        Book::new("Dune", "Frank Herbert", "1965", "Science Fiction", false)
    }

    #[test]
    fn test_add_then_exit() {
        let (storage, out) = session(vec![], "1\n1984\nOrwell\n1949\nDystopian\n YES \n7\n");

        assert!(out.contains("Book added successfully! Title: 1984."));
        assert!(out.contains("Goodbye"));
        assert_eq!(
            storage.snapshot().unwrap(),
            &[Book::new("1984", "Orwell", "1949", "Dystopian", true)]
        );
        // one save for the add, one on exit
        assert_eq!(storage.save_count(), 2);
    }

    #[test]
    fn test_delete_found_and_missing() {
        let (storage, out) = session(vec![dune()], "2\nUlysses\n2\nDUNE\n7\n");

        assert!(out.contains("Book not found!"));
        assert!(out.contains("Book deleted successfully!"));
        assert!(storage.snapshot().unwrap().is_empty());
    }

    #[test]
    fn test_find_lists_only_matches() {
        let books = vec![
            dune(),
            Book::new("Emma", "Jane Austen", "1815", "Romance", true),
        ];
        let (_, out) = session(books, "3\ntitle\ndune\n3\nauthor\nnobody\n7\n");

        assert!(out.contains("Found the following books:"));
        assert!(out.contains("1. Title: Dune Author: Frank Herbert"));
        assert!(!out.contains("Title: Emma"));
        assert!(out.contains("No books found."));
    }

    #[test]
    fn test_find_with_bad_kind() {
        let (_, out) = session(vec![dune()], "3\ngenre\nsf\n7\n");
        assert!(out.contains("Invalid search type! Please enter 'title' or 'author'."));
    }

    #[test]
    fn test_update_keeps_empty_fields() {
        let (storage, out) = session(vec![dune()], "4\ndune\n\n\n1966\n\nyes\n7\n");

        assert!(out.contains("Enter the new book title (Dune): "));
        assert!(out.contains("Book updated successfully! Title: Dune"));
        let book = &storage.snapshot().unwrap()[0];
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.year, "1966");
        assert!(book.read);
    }

    #[test]
    fn test_update_missing_title_skips_prompts() {
        let (_, out) = session(vec![dune()], "4\nUlysses\n7\n");

        assert!(out.contains("Book not found!"));
        assert!(!out.contains("Leave the field empty"));
    }

    #[test]
    fn test_list_and_progress() {
        let books = vec![
            dune(),
            Book::new("Emma", "Jane Austen", "1815", "Romance", true),
        ];
        let (_, out) = session(books, "5\n6\n7\n");

        assert!(out.contains("Your book list:"));
        assert!(out.contains(
            "2. Title: Emma Author: Jane Austen Year: 1815 Genre: Romance Status: Read"
        ));
        assert!(out.contains("You have read 1 out of 2 books."));
        assert!(out.contains("Your reading progress is 50.00%."));
    }

    #[test]
    fn test_empty_list_message() {
        let (_, out) = session(vec![], "5\n7\n");
        assert!(out.contains("Your book list is empty."));
    }

    #[test]
    fn test_invalid_choice_then_end_of_input_saves() {
        let (storage, out) = session(vec![dune()], "9\n");

        assert!(out.contains("Invalid choice. Please try again."));
        assert!(out.contains("Goodbye"));
        assert_eq!(storage.save_count(), 1);
    }

    #[test]
    fn test_input_ending_mid_prompt_exits_cleanly() {
        let (storage, _) = session(vec![], "1\nHalf a book\n");

        assert!(storage.snapshot().unwrap().is_empty());
        assert_eq!(storage.save_count(), 1);
    }

    #[test]
    fn test_crlf_input() {
        let (storage, _) = session(vec![], "1\r\nDune\r\nHerbert\r\n1965\r\nSF\r\nno\r\n7\r\n");
        assert_eq!(storage.snapshot().unwrap()[0].title, "Dune");
    }
}
