//! View logic behind each route
//!
//! These functions hold what a view does with the catalog and the session,
//! independent of how the terminal prompts for input or renders results.

pub mod add_book;
pub mod auth;
pub mod search;

pub use search::{BookSearch, SearchOutcome};
