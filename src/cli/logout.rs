//! Logout command implementation

use log::debug;

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::output::notify::Toast;
use crate::views::auth;

/// Forget the token. Running it while signed out is fine.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let was_signed_in = ctx.session.is_signed_in();

    let home = auth::sign_out(&ctx.session)?;
    debug!("Signed out, back to {}", home);

    if was_signed_in {
        ctx.notifier.notify(Toast::success("Signed out"));
    } else {
        ctx.notifier.notify(Toast::info("Not signed in"));
    }
    Ok(())
}
