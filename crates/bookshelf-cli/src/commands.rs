//! One-shot subcommands: run a single store operation and exit

use bookshelf_core::{Book, BookCollection, BookStorage, BookUpdate, BookshelfError};
use clap::Subcommand;
use std::io::Write;
use std::process::ExitCode;

use crate::display;

#[derive(Subcommand)]
pub enum BookCommand {
    /// Add a book to the collection
    Add {
        title: String,
        author: String,
        year: String,
        genre: String,
        /// Mark the book as already read
        #[arg(long)]
        read: bool,
    },

    /// Delete the first book with this title
    Delete { title: String },

    /// Search books by title or author
    Find {
        /// Field to search: title or author
        kind: String,
        term: String,
        /// JSON output for integrations
        #[arg(long)]
        json: bool,
    },

    /// Edit the first book with this title; omitted fields are kept
    Update {
        title: String,
        #[arg(long = "title", value_name = "TITLE")]
        new_title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        year: Option<String>,
        #[arg(long)]
        genre: Option<String>,
        /// Read status is always replaced: absent means not read
        #[arg(long)]
        read: bool,
    },

    /// Show every book
    List {
        /// JSON output for integrations
        #[arg(long)]
        json: bool,
    },

    /// Show reading progress
    Progress {
        /// JSON output for integrations
        #[arg(long)]
        json: bool,
    },
}

/// Execute `command` against `shelf`, writing user-facing output to `out`
pub fn run<S, W>(
    command: BookCommand,
    shelf: &mut BookCollection<S>,
    out: &mut W,
) -> bookshelf_core::Result<()>
where
    S: BookStorage,
    W: Write,
{
    match command {
        BookCommand::Add {
            title,
            author,
            year,
            genre,
            read,
        } => {
            let book = shelf.add(Book::new(title, author, year, genre, read))?;
            writeln!(out, "Book added successfully! Title: {}.", book.title)?;
        }
        BookCommand::Delete { title } => {
            let book = shelf.delete(&title)?;
            writeln!(out, "Book deleted successfully! Title: {}", book.title)?;
        }
        BookCommand::Find { kind, term, json } => {
            let found = shelf.find_by(&kind, &term)?;
            if json {
                serde_json::to_writer_pretty(&mut *out, &found)?;
                writeln!(out)?;
            } else if found.is_empty() {
                writeln!(out, "No books found.")?;
            } else {
                for line in display::book_lines(found) {
                    writeln!(out, "{}", line)?;
                }
            }
        }
        BookCommand::Update {
            title,
            new_title,
            author,
            year,
            genre,
            read,
        } => {
            let update = BookUpdate::from_answers(
                new_title.as_deref().unwrap_or_default(),
                author.as_deref().unwrap_or_default(),
                year.as_deref().unwrap_or_default(),
                genre.as_deref().unwrap_or_default(),
                read,
            );
            let book = shelf.update(&title, &update)?;
            writeln!(out, "Book updated successfully! Title: {}", book.title)?;
        }
        BookCommand::List { json } => {
            if json {
                serde_json::to_writer_pretty(&mut *out, shelf.books())?;
                writeln!(out)?;
            } else if shelf.is_empty() {
                writeln!(out, "Your book list is empty.")?;
            } else {
                for line in display::book_lines(shelf.books()) {
                    writeln!(out, "{}", line)?;
                }
            }
        }
        BookCommand::Progress { json } => {
            let progress = shelf.progress();
            if json {
                serde_json::to_writer(&mut *out, &progress)?;
                writeln!(out)?;
            } else {
                for line in display::progress_lines(&progress) {
                    writeln!(out, "{}", line)?;
                }
            }
        }
    }
    Ok(())
}

/// Recoverable failures become a message and exit status 1
pub fn report_outcome(outcome: bookshelf_core::Result<()>) -> anyhow::Result<ExitCode> {
    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_recoverable() => {
            match e {
                BookshelfError::NotFound(title) => eprintln!("Book not found: {}", title),
                other => eprintln!("{}", other),
            }
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
