//! Catalog listing for the reader home page (/) and the editor dashboard
//! (/editor)

use log::debug;

use crate::cli::{BookFilterArgs, CommandContext, GlobalOptions};
use crate::error::Result;
use crate::output::{BookList, Formattable};
use crate::router::{Role, Route};
use crate::views::{BookSearch, SearchOutcome};

/// Run the books command (reader view)
pub async fn run(opts: &GlobalOptions, filters: &BookFilterArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    list(&ctx, Route::Home, filters).await
}

/// Search the catalog from `route` and print what the view shows
pub async fn list(ctx: &CommandContext, route: Route, filters: &BookFilterArgs) -> Result<()> {
    ctx.enter(route)?;

    let query = filters.to_query();
    let search = BookSearch::new();

    let spinner = ctx.spinner("Searching the catalog...");
    let result = search.submit(ctx.client.as_ref(), &query).await;
    spinner.finish_and_clear();

    if let SearchOutcome::Replaced(count) = ctx.check_session(route, result)? {
        debug!("{} book(s) for {:?}", count, query.to_params());
    }

    let state = search.snapshot();
    let role = route.role().unwrap_or(Role::Reader);
    BookList {
        books: &state.books,
        role,
    }
    .print(ctx.format)
}
