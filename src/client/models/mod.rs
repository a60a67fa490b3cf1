//! Catalog API data models
//!
//! Every response body is parsed into one of these types at the gateway, so
//! a backend shape change fails with `ApiError::Parse` instead of leaking
//! missing fields into the views.

mod auth;
mod book;

pub use auth::{Credentials, Profile, RegisterResponse, Registration, TokenResponse};
#[cfg(test)]
pub use auth::UserProfile;
pub use book::{Book, BookQuery, CreatedBook, NewBook};
