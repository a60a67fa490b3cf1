//! Catalog API over the authorized gateway

use async_trait::async_trait;
use reqwest::Method;

use super::models::{
    Book, BookQuery, CreatedBook, Credentials, NewBook, Profile, RegisterResponse, Registration,
    TokenResponse,
};
use super::{CatalogApi, Gateway};
use crate::error::{ApiError, ApiResult};

const TOKEN_PATH: &str = "/api/token/";
const REGISTER_PATH: &str = "/user/reg/";
const PROFILE_PATH: &str = "/user/profile/";
const BOOKS_PATH: &str = "/lib/books/list/";

pub struct CatalogClient {
    gateway: Gateway,
}

impl CatalogClient {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn obtain_token(&self, credentials: &Credentials) -> ApiResult<TokenResponse> {
        let token: TokenResponse = self
            .gateway
            .request_anonymous(Method::POST, TOKEN_PATH, Some(credentials))
            .await?;

        if token.access.is_empty() {
            return Err(ApiError::Parse("Token response has an empty `access`".to_string()));
        }
        Ok(token)
    }

    async fn register(&self, registration: &Registration) -> ApiResult<RegisterResponse> {
        let response: Option<RegisterResponse> = self
            .gateway
            .request_anonymous(Method::POST, REGISTER_PATH, Some(registration))
            .await?;
        Ok(response.unwrap_or_default())
    }

    async fn list_books(&self, query: &BookQuery) -> ApiResult<Vec<Book>> {
        let params = query.to_params();
        let books: Vec<Book> = if params.is_empty() {
            self.gateway
                .request(Method::GET, BOOKS_PATH, None::<&()>)
                .await?
        } else {
            self.gateway
                .request_with_query(Method::GET, BOOKS_PATH, &params)
                .await?
        };
        Ok(query.retain_matching(books))
    }

    async fn create_book(&self, book: &NewBook) -> ApiResult<CreatedBook> {
        let created: Option<CreatedBook> = self
            .gateway
            .request(Method::POST, BOOKS_PATH, Some(book))
            .await?;
        Ok(created.unwrap_or_default())
    }

    async fn profile(&self) -> ApiResult<Profile> {
        self.gateway
            .request(Method::GET, PROFILE_PATH, None::<&()>)
            .await
    }
}
