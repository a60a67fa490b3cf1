//! Filter argument types for listing commands

use clap::Args;

use crate::client::BookQuery;

/// Search and filter arguments for book listings.
///
/// The search runs once per invocation; there is no incremental search.
#[derive(Args, Debug, Default, Clone)]
pub struct BookFilterArgs {
    /// Search by title (case-insensitive substring)
    pub title: Option<String>,

    /// Filter by author name
    #[arg(long, short = 'a')]
    pub author: Option<String>,

    /// Filter by genre
    #[arg(long, short = 'g')]
    pub genre: Option<String>,

    /// Filter by publishing house
    #[arg(long)]
    pub publisher: Option<String>,

    /// Published in exactly this year
    #[arg(long, conflicts_with_all = ["after", "before"])]
    pub year: Option<i32>,

    /// Published after this year
    #[arg(long)]
    pub after: Option<i32>,

    /// Published before this year
    #[arg(long)]
    pub before: Option<i32>,

    /// Only books on the shelf
    #[arg(long, conflicts_with = "unavailable")]
    pub available: bool,

    /// Only books currently lent out
    #[arg(long)]
    pub unavailable: bool,
}

impl BookFilterArgs {
    pub fn to_query(&self) -> BookQuery {
        let available = match (self.available, self.unavailable) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        BookQuery {
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
            publishing_house: self.publisher.clone(),
            year: self.year,
            year_gt: self.after,
            year_lt: self.before,
            available,
        }
    }
}
