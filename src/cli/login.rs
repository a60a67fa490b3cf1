//! Login command implementation (/login and /login/editor)

use serde::Serialize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat, prompt};
use crate::client::Credentials;
use crate::error::Result;
use crate::output::json::format_json;
use crate::output::notify::Toast;
use crate::router::Role;
use crate::views::auth;

#[derive(Serialize)]
struct LoginResult<'a> {
    username: &'a str,
    next: &'a str,
}

/// Sign in and point at the view to continue with
pub async fn run(
    opts: &GlobalOptions,
    editor: bool,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let role = if editor { Role::Editor } else { Role::Reader };
    ctx.enter(role.login_route())?;

    let username = prompt::text(username, "username", "Username")?;
    let password = prompt::secret(password, "password", "Password")?;
    let credentials = Credentials::new(username, password);

    let spinner = ctx.spinner("Signing in...");
    let result = auth::login(ctx.client.as_ref(), &ctx.session, &credentials, role).await;
    spinner.finish_and_clear();
    let next = result?;

    if ctx.format == OutputFormat::Json {
        println!(
            "{}",
            format_json(&LoginResult {
                username: &credentials.username,
                next: next.path(),
            })?
        );
        return Ok(());
    }

    ctx.notifier
        .notify(Toast::success(format!("Signed in as {}", credentials.username)));
    ctx.notifier
        .notify(Toast::info(format!("Continue with `{}`", next.command())));
    Ok(())
}
