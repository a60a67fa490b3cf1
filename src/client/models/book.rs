//! Book models

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Book record as served by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: i32,

    #[serde(default)]
    pub description: String,

    /// Whether a copy is on the shelf
    pub status: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publishing_house: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Filters for `GET /lib/books/list/`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookQuery {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub publishing_house: Option<String>,
    /// Exact year
    pub year: Option<i32>,
    /// Published after this year
    pub year_gt: Option<i32>,
    /// Published before this year
    pub year_lt: Option<i32>,
    /// Availability, filtered on this side; the backend has no such filter
    pub available: Option<bool>,
}

impl BookQuery {
    #[cfg(test)]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Query string pairs, skipping unset and blank filters
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let text = [
            ("title", &self.title),
            ("author", &self.author),
            ("genre", &self.genre),
            ("publishing_house", &self.publishing_house),
        ];
        let years = [
            ("year", self.year),
            ("year_gt", self.year_gt),
            ("year_lt", self.year_lt),
        ];

        text.into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| (key, v.to_string()))
            })
            .chain(
                years
                    .into_iter()
                    .filter_map(|(key, value)| value.map(|v| (key, v.to_string()))),
            )
            .collect()
    }

    /// Apply filters the backend does not support
    pub fn retain_matching(&self, books: Vec<Book>) -> Vec<Book> {
        match self.available {
            None => books,
            Some(available) => books.into_iter().filter(|b| b.status == available).collect(),
        }
    }
}

/// Body of `POST /lib/books/list/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBook {
    pub author: String,
    pub genre: String,
    pub publishing_house: String,
    pub title: String,
    pub description: String,
    pub year: i32,
    pub status: bool,
}

/// Publisher the add form sends when none is given
pub const DEFAULT_PUBLISHING_HOUSE: &str = "we";

impl NewBook {
    /// Build a submission from raw form input.
    ///
    /// Every field is required and the year must be a whole number.
    pub fn from_form(
        title: &str,
        author: &str,
        year: &str,
        genre: &str,
        description: &str,
    ) -> Result<Self, ValidationError> {
        let required = |name: &'static str, value: &str| -> Result<String, ValidationError> {
            let value = value.trim();
            if value.is_empty() {
                Err(ValidationError::MissingField(name))
            } else {
                Ok(value.to_string())
            }
        };

        let title = required("title", title)?;
        let author = required("author", author)?;
        let year_raw = required("year", year)?;
        let genre = required("genre", genre)?;
        let description = required("description", description)?;

        let year = year_raw
            .parse::<i32>()
            .map_err(|_| ValidationError::InvalidYear(year_raw.clone()))?;

        Ok(Self {
            author,
            genre,
            publishing_house: DEFAULT_PUBLISHING_HOUSE.to_string(),
            title,
            description,
            year,
            status: true,
        })
    }

    pub fn with_publishing_house(mut self, house: Option<&str>) -> Self {
        if let Some(house) = house.map(str::trim).filter(|h| !h.is_empty()) {
            self.publishing_house = house.to_string();
        }
        self
    }

    pub fn with_status(mut self, available: bool) -> Self {
        self.status = available;
        self
    }
}

/// Body of a successful create. The catalog echoes the record back, but
/// only the identifier is relied on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatedBook {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub title: Option<String>,
}
