//! Book display models

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use super::common::{DESCRIPTION_PREVIEW_CHARS, availability, truncate_chars};
use crate::client::Book;
use crate::router::Role;

/// Book row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BookDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "AUTHOR")]
    pub author: String,

    #[tabled(rename = "GENRE")]
    pub genre: String,

    #[tabled(rename = "YEAR")]
    pub year: i32,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<&Book> for BookDisplay {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            year: book.year,
            status: availability(book.status).to_string(),
            description: truncate_chars(&book.description, DESCRIPTION_PREVIEW_CHARS),
        }
    }
}

/// Card layout used by the pretty format.
///
/// Readers see what they can do with a copy; editors see reservations.
pub struct BookCard<'a> {
    book: &'a Book,
    role: Role,
}

impl<'a> BookCard<'a> {
    pub fn new(book: &'a Book, role: Role) -> Self {
        Self { book, role }
    }

    fn badge(&self) -> String {
        match (self.role, self.book.status) {
            (Role::Reader, true) => "RESERVE".green().to_string(),
            (Role::Reader, false) => "NOTIFY WHEN AVAILABLE".yellow().to_string(),
            (Role::Editor, true) => "RESERVED: 0".dimmed().to_string(),
            (Role::Editor, false) => "RESERVED: 1".yellow().to_string(),
        }
    }

    pub fn render(&self) -> String {
        let book = self.book;
        let mut lines = vec![
            format!("{}  {}", book.title.bold(), format!("#{}", book.id).dimmed()),
            format!("  Author:      {}", book.author),
            format!("  Genre:       {}", book.genre),
            format!("  Year:        {}", book.year),
            format!("  Status:      {}", availability(book.status)),
        ];
        if let Some(house) = &book.publishing_house {
            lines.push(format!("  Publisher:   {}", house));
        }
        if !book.description.is_empty() {
            lines.push(format!(
                "  Description: {}",
                truncate_chars(&book.description, DESCRIPTION_PREVIEW_CHARS)
            ));
        }
        lines.push(format!("  [{}]", self.badge()));
        lines.join("\n")
    }
}
