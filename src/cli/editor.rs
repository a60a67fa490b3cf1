//! Editor dashboard (/editor) and add-edition form (/editor/add)

use colored::Colorize;

use crate::cli::{AddBookArgs, CommandContext, EditorArgs, EditorCommands, GlobalOptions, books};
use crate::cli::{OutputFormat, prompt};
use crate::client::NewBook;
use crate::error::{Error, Result};
use crate::output::json::format_json;
use crate::router::Route;
use crate::views::add_book;

/// Run the editor command
pub async fn run(opts: &GlobalOptions, args: &EditorArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    match &args.command {
        Some(EditorCommands::Add(form)) => add(&ctx, form).await,
        None => books::list(&ctx, Route::Editor, &args.filters).await,
    }
}

/// Fill in and submit the add-edition form
pub async fn add(ctx: &CommandContext, form: &AddBookArgs) -> Result<()> {
    ctx.enter(Route::EditorAdd)?;

    let form = form.clone();
    let title = prompt::text(form.title, "title", "Title")?;
    let author = prompt::text(form.author, "author", "Author")?;
    let year = prompt::text(form.year, "year", "Year")?;
    let genre = prompt::text(form.genre, "genre", "Genre")?;
    let description = prompt::text(form.description, "description", "Description")?;

    let book = NewBook::from_form(&title, &author, &year, &genre, &description)?
        .with_publishing_house(form.publisher.as_deref())
        .with_status(!form.unavailable);

    // No spinner here: the success toast is printed from inside submit
    let result = add_book::submit(ctx.client.as_ref(), ctx.notifier.as_ref(), &book).await;
    let created = match result {
        Err(Error::Api(err)) => ctx.check_session(Route::EditorAdd, Err(err))?,
        other => other?,
    };

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&created)?),
        _ => {
            if let Some(id) = created.id {
                println!("{} {} (id {})", "+".green(), book.title.bold(), id);
            }
        }
    }
    Ok(())
}
