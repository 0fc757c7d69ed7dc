//! Text rendering shared by the shell and the one-shot commands

use bookshelf_core::{Book, ReadingProgress};
use colored::Colorize;

pub const MENU_OPTIONS: [&str; 7] = [
    "➕ Add a new book",
    "🗑️ Delete a book",
    "🔍 Find a book",
    "✏️ Update a book",
    "📖 Show book list",
    "📊 Show reading progress",
    "🚪 Exit",
];

pub fn menu() -> String {
    let mut out = format!(
        "\n{}\nSelect an option:\n",
        "📚 Welcome to Your Book Collection Manager! 📚".bold()
    );
    for (i, option) in MENU_OPTIONS.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, option));
    }
    out.push_str("Enter your choice (1-7): ");
    out
}

/// Numbered listing, one book per line, numbering from 1
pub fn book_lines<'a>(books: impl IntoIterator<Item = &'a Book>) -> Vec<String> {
    books
        .into_iter()
        .enumerate()
        .map(|(i, book)| format!("{}. {}", i + 1, book))
        .collect()
}

pub fn progress_lines(progress: &ReadingProgress) -> Vec<String> {
    vec![
        format!(
            "You have read {} out of {} books.",
            progress.read, progress.total
        ),
        format!("Total book in collection: {}", progress.total),
        format!("Your reading progress is {}.", progress),
    ]
}
