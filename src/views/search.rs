//! Book search box state
//!
//! Each submission gets a ticket from a monotonically increasing sequence.
//! Only the response for the latest ticket may replace the displayed list or
//! clear the loading flag; responses for older tickets are dropped.

use log::debug;
use parking_lot::Mutex;

use crate::client::{Book, BookQuery, CatalogApi};
use crate::error::ApiResult;

/// What the search box currently shows
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub books: Vec<Book>,
    pub loading: bool,
    /// Query that produced `books`
    pub query: Option<BookQuery>,
}

/// Handle for one in-flight submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// How a resolved submission affected the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The list now holds exactly this many records
    Replaced(usize),
    /// A newer submission was issued; the response was discarded
    Stale,
}

#[derive(Default)]
struct Inner {
    state: SearchState,
    issued: u64,
}

#[derive(Default)]
pub struct BookSearch {
    inner: Mutex<Inner>,
}

impl BookSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> SearchState {
        self.inner.lock().state.clone()
    }

    /// Issue a ticket and raise the loading flag
    pub fn begin(&self) -> SearchTicket {
        let mut inner = self.inner.lock();
        inner.issued += 1;
        inner.state.loading = true;
        SearchTicket(inner.issued)
    }

    /// Apply a response. Stale tickets leave the state untouched.
    pub fn resolve(
        &self,
        ticket: SearchTicket,
        query: &BookQuery,
        result: ApiResult<Vec<Book>>,
    ) -> ApiResult<SearchOutcome> {
        let mut inner = self.inner.lock();
        if ticket.0 != inner.issued {
            debug!("Dropping search #{} (latest is #{})", ticket.0, inner.issued);
            return Ok(SearchOutcome::Stale);
        }

        inner.state.loading = false;
        let books = result?;
        let count = books.len();
        inner.state.books = books;
        inner.state.query = Some(query.clone());
        Ok(SearchOutcome::Replaced(count))
    }

    /// Run one submission against the catalog
    pub async fn submit<A>(&self, api: &A, query: &BookQuery) -> ApiResult<SearchOutcome>
    where
        A: CatalogApi + ?Sized,
    {
        let ticket = self.begin();
        debug!("Search #{}: {:?}", ticket.0, query.to_params());
        let result = api.list_books(query).await;
        self.resolve(ticket, query, result)
    }
}
