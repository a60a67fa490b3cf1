//! Add-edition form

use log::debug;

use crate::client::{CatalogApi, CreatedBook, NewBook};
use crate::error::Result;
use crate::output::notify::{Notifier, Toast};

pub const BOOK_ADDED: &str = "Book added successfully";

/// Send a validated edition to the catalog.
///
/// A success toast is raised once per accepted submission. Failures are
/// returned to the caller, which reports them.
pub async fn submit<A>(api: &A, notifier: &dyn Notifier, book: &NewBook) -> Result<CreatedBook>
where
    A: CatalogApi + ?Sized,
{
    debug!("Adding \"{}\" by {}", book.title, book.author);
    let created = api.create_book(book).await?;

    notifier.notify(Toast::success(BOOK_ADDED));
    Ok(created)
}
