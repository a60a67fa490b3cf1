//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod book;
pub mod common;

pub use book::{BookCard, BookDisplay};
