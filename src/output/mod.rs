//! Output formatting for CLI results

use crate::cli::OutputFormat;
use crate::client::Book;
use crate::error::Result;
use crate::models::{BookCard, BookDisplay};
use crate::router::Role;

pub mod formatters;
pub mod json;
pub mod notify;
pub mod table;

const NO_BOOKS: &str = "No books found.";

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

/// A listing as seen from one role's view
pub struct BookList<'a> {
    pub books: &'a [Book],
    pub role: Role,
}

impl Formattable for BookList<'_> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json_list(self.books)?),
            OutputFormat::Table => {
                let rows: Vec<BookDisplay> = self.books.iter().map(BookDisplay::from).collect();
                Ok(table::format_table(&rows, NO_BOOKS))
            }
            OutputFormat::Pretty => {
                if self.books.is_empty() {
                    return Ok(NO_BOOKS.to_string());
                }
                let cards: Vec<String> = self
                    .books
                    .iter()
                    .map(|book| BookCard::new(book, self.role).render())
                    .collect();
                Ok(cards.join("\n\n"))
            }
        }
    }
}
