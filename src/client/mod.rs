//! Library catalog API client

use async_trait::async_trait;

use crate::error::ApiResult;

pub mod catalog;
pub mod gateway;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use catalog::CatalogClient;
pub use gateway::Gateway;
#[cfg(test)]
pub use mock::MockCatalogClient;
pub use models::{
    Book, BookQuery, CreatedBook, Credentials, NewBook, Profile, RegisterResponse, Registration,
    TokenResponse,
};

/// Operations the catalog backend offers
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Exchange credentials for an access token. Sent without a bearer.
    async fn obtain_token(&self, credentials: &Credentials) -> ApiResult<TokenResponse>;

    /// Create a reader account
    async fn register(&self, registration: &Registration) -> ApiResult<RegisterResponse>;

    /// List books matching the query
    async fn list_books(&self, query: &BookQuery) -> ApiResult<Vec<Book>>;

    /// Add an edition to the catalog
    async fn create_book(&self, book: &NewBook) -> ApiResult<CreatedBook>;

    /// Account behind the current token
    async fn profile(&self) -> ApiResult<Profile>;
}
