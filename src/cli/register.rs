//! Register command implementation (/register)

use crate::cli::{CommandContext, GlobalOptions, prompt};
use crate::client::Registration;
use crate::error::Result;
use crate::output::notify::Toast;
use crate::router::Route;
use crate::views::auth;

pub async fn run(
    opts: &GlobalOptions,
    username: Option<String>,
    password: Option<String>,
    confirm: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.enter(Route::Register)?;

    let username = prompt::text(username, "username", "Username")?;
    let password = prompt::secret(password, "password", "Password")?;
    let confirm = prompt::secret(confirm, "password2", "Repeat password")?;
    let registration = Registration::new(username, password, confirm);

    // Mismatched passwords never reach the backend
    registration.validate()?;

    let spinner = ctx.spinner("Creating account...");
    let result = auth::register(ctx.client.as_ref(), &registration).await;
    spinner.finish_and_clear();
    let (next, message) = result?;

    let confirmation =
        message.unwrap_or_else(|| format!("Account {} created", registration.username));
    ctx.notifier.notify(Toast::success(confirmation));
    ctx.notifier
        .notify(Toast::info(format!("Sign in with `{}`", next.command())));
    Ok(())
}
