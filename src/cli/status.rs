//! Status command implementation

use chrono::Utc;
use colored::Colorize;
use serde::Serialize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::CatalogApi;
use crate::config::Config;
use crate::error::Result;
use crate::output::formatters::{describe_expiry, format_local};
use crate::output::json::format_json;
use crate::router::Route;
use crate::session::SESSION_KEY;
use crate::session::token::peek_claims;

#[derive(Debug, Serialize)]
struct StatusReport {
    config_file: String,
    config_exists: bool,
    api_root: String,
    timeout_secs: u64,
    session_file: String,
    signed_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_staff: Option<bool>,
}

/// Run the status command to display configuration and session status
pub async fn run(opts: &GlobalOptions, verify: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let config_path = Config::resolve_path(opts.config_ref())?;
    let claims = ctx.session.get().as_deref().and_then(peek_claims);

    let mut report = StatusReport {
        config_file: config_path.display().to_string(),
        config_exists: config_path.exists(),
        api_root: ctx.client.gateway().base_url().to_string(),
        timeout_secs: ctx.config.preferences.timeout_secs,
        session_file: ctx.session_path.display().to_string(),
        signed_in: ctx.session.is_signed_in(),
        user_id: claims.as_ref().and_then(|c| c.user_id()),
        expires_at: claims
            .as_ref()
            .and_then(|c| c.expires_at())
            .map(|at| at.to_rfc3339()),
        username: None,
        is_staff: None,
    };

    if verify && report.signed_in {
        let spinner = ctx.spinner("Checking session...");
        let result = ctx.client.profile().await;
        spinner.finish_and_clear();

        let profile = ctx.check_session(Route::Home, result)?;
        report.username = Some(profile.user.username);
        report.is_staff = Some(profile.user.is_staff);
    }

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&report)?);
        return Ok(());
    }

    println!("{}\n", "libcat Status".bold());

    if report.config_exists {
        println!("Config file: {}", report.config_file.cyan());
    } else {
        println!(
            "Config file: {} {}",
            report.config_file.cyan(),
            "(not created, using defaults)".dimmed()
        );
    }
    println!("Catalog: {}", report.api_root.cyan());
    println!("Request timeout: {}s", report.timeout_secs);
    println!();

    if !report.signed_in {
        println!("{} Not signed in", "○".dimmed());
        println!("  → Run '{}' to sign in", Route::Login.command());
        println!();
        return Ok(());
    }

    println!(
        "{} Signed in ({} stored in {})",
        "✓".green(),
        SESSION_KEY,
        report.session_file
    );

    if let Some(ref user_id) = report.user_id {
        println!("{} User id: {}", "○".dimmed(), user_id);
    }

    if let Some(expires_at) = claims.as_ref().and_then(|c| c.expires_at()) {
        let when = describe_expiry(expires_at, Utc::now());
        if expires_at <= Utc::now() {
            println!(
                "{} Token {} (the next request will ask you to sign in)",
                "⚠".yellow(),
                when
            );
        } else {
            println!(
                "{} Token {} ({})",
                "✓".green(),
                when,
                format_local(expires_at)
            );
        }
    }

    if let Some(ref username) = report.username {
        let role = if report.is_staff == Some(true) {
            "editor"
        } else {
            "reader"
        };
        println!("{} Backend accepts the token: {} ({})", "✓".green(), username.bold(), role);
    }

    println!();
    Ok(())
}
