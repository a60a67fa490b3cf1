//! Mock catalog client for testing
//!
//! Configure responses with the builder methods, then hand the mock to the
//! flow under test in place of [`CatalogClient`](super::CatalogClient).

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::CatalogApi;
use super::models::{
    Book, BookQuery, CreatedBook, Credentials, NewBook, Profile, RegisterResponse, Registration,
    TokenResponse, UserProfile,
};
use crate::error::{ApiError, ApiResult};

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub obtain_token: usize,
    pub register: usize,
    pub list_books: usize,
    pub create_book: usize,
    pub profile: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.obtain_token + self.register + self.list_books + self.create_book + self.profile
    }
}

#[derive(Default)]
pub struct MockCatalogClient {
    /// Token returned from obtain_token
    access: Mutex<Option<String>>,
    /// Books returned from list_books when nothing is scripted
    books: Mutex<Vec<Book>>,
    /// Per-call list_books responses, consumed in call order
    scripted: Mutex<VecDeque<(Duration, Vec<Book>)>>,
    /// Error to return (if any), consumed on first use
    error: Mutex<Option<ApiError>>,
    calls: Mutex<CallCounts>,
    queries: Mutex<Vec<BookQuery>>,
    created: Mutex<Vec<NewBook>>,
}

impl MockCatalogClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(self, access: &str) -> Self {
        *self.access.try_lock().expect("mock not shared yet") = Some(access.to_string());
        self
    }

    pub fn with_books(self, books: Vec<Book>) -> Self {
        *self.books.try_lock().expect("mock not shared yet") = books;
        self
    }

    /// Answer successive list_books calls with these books after the delay
    pub fn with_scripted_books(self, responses: Vec<(Duration, Vec<Book>)>) -> Self {
        *self.scripted.try_lock().expect("mock not shared yet") = responses.into();
        self
    }

    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().expect("mock not shared yet") = Some(error);
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.calls.lock().await.clone()
    }

    pub async fn queries(&self) -> Vec<BookQuery> {
        self.queries.lock().await.clone()
    }

    pub async fn created(&self) -> Vec<NewBook> {
        self.created.lock().await.clone()
    }

    async fn take_error(&self) -> ApiResult<()> {
        match self.error.lock().await.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Book fixture
pub fn book(id: i64, title: &str) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: "J. R. R. Tolkien".to_string(),
        genre: "fantasy".to_string(),
        year: 1937 + id as i32,
        description: format!("Description of {}", title),
        status: id % 2 == 1,
        publishing_house: Some("Allen & Unwin".to_string()),
        image: None,
    }
}

pub fn unauthorized() -> ApiError {
    ApiError::Http {
        status: 401,
        reason: "Unauthorized".to_string(),
    }
}

#[async_trait]
impl CatalogApi for MockCatalogClient {
    async fn obtain_token(&self, _credentials: &Credentials) -> ApiResult<TokenResponse> {
        self.calls.lock().await.obtain_token += 1;
        self.take_error().await?;

        let access = self.access.lock().await.clone().ok_or_else(unauthorized)?;
        Ok(TokenResponse {
            access,
            refresh: None,
        })
    }

    async fn register(&self, _registration: &Registration) -> ApiResult<RegisterResponse> {
        self.calls.lock().await.register += 1;
        self.take_error().await?;
        Ok(RegisterResponse {
            message: Some("User created".to_string()),
        })
    }

    async fn list_books(&self, query: &BookQuery) -> ApiResult<Vec<Book>> {
        self.calls.lock().await.list_books += 1;
        self.queries.lock().await.push(query.clone());
        self.take_error().await?;

        let scripted = self.scripted.lock().await.pop_front();
        match scripted {
            Some((delay, books)) => {
                tokio::time::sleep(delay).await;
                Ok(books)
            }
            None => Ok(query.retain_matching(self.books.lock().await.clone())),
        }
    }

    async fn create_book(&self, book: &NewBook) -> ApiResult<CreatedBook> {
        self.calls.lock().await.create_book += 1;
        self.take_error().await?;

        let mut created = self.created.lock().await;
        created.push(book.clone());
        Ok(CreatedBook {
            id: Some(created.len() as i64),
            title: Some(book.title.clone()),
        })
    }

    async fn profile(&self) -> ApiResult<Profile> {
        self.calls.lock().await.profile += 1;
        self.take_error().await?;
        Ok(Profile {
            user: UserProfile {
                id: 1,
                username: "reader".to_string(),
                email: None,
                is_staff: false,
            },
        })
    }
}
