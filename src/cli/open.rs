//! Navigate by route path

use log::debug;

use crate::cli::{
    AddBookArgs, BookFilterArgs, EditorArgs, EditorCommands, GlobalOptions, books, editor, login,
    register,
};
use crate::error::Result;
use crate::router::Route;

/// Open the view at `path`. Forms are prompted for; listings are unfiltered.
pub async fn run(opts: &GlobalOptions, path: &str) -> Result<()> {
    let route: Route = path.parse()?;
    debug!("Opening {}", route);

    match route {
        Route::Home => books::run(opts, &BookFilterArgs::default()).await,
        Route::Editor => editor::run(opts, &editor_args(None)).await,
        Route::EditorAdd => {
            editor::run(opts, &editor_args(Some(EditorCommands::Add(AddBookArgs::default())))).await
        }
        Route::Login => login::run(opts, false, None, None).await,
        Route::EditorLogin => login::run(opts, true, None, None).await,
        Route::Register => register::run(opts, None, None, None).await,
    }
}

fn editor_args(command: Option<EditorCommands>) -> EditorArgs {
    EditorArgs {
        command,
        filters: BookFilterArgs::default(),
    }
}
