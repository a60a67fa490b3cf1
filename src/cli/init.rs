//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::{Config, validate_api_root};
use crate::error::Result;
use crate::router::Route;

const FORMATS: [&str; 3] = ["pretty", "table", "json"];

/// Run the init command
///
/// `--api-root` skips the backend prompt, which makes the command usable
/// from scripts.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let mut config = Config::load_at(opts.config_ref())?;

    println!("{}", "Welcome to libcat!".bold().green());
    println!("Let's point libcat at your library catalog.\n");

    config.api_root = match opts.api_root_ref() {
        Some(root) => root.to_string(),
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Catalog URL")
            .default(config.api_root.clone())
            .validate_with(|input: &String| validate_api_root(input).map_err(|e| e.to_string()))
            .interact_text()?,
    };
    validate_api_root(&config.api_root)?;

    if let Some(format) = opts.format {
        config.preferences.format = Some(format_name(format).to_string());
    } else if opts.api_root_ref().is_none() {
        let current = config
            .preferences
            .format
            .as_deref()
            .and_then(|name| FORMATS.iter().position(|f| f.eq_ignore_ascii_case(name)))
            .unwrap_or(0);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Default output format")
            .items(&FORMATS)
            .default(current)
            .interact()?;
        config.preferences.format = Some(FORMATS[selection].to_string());
    }

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );
    println!("  Catalog: {}", config.api_root.bold());

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Sign in as a reader", Route::Login.command().cyan());
    println!("  {} - Sign in as an editor", Route::EditorLogin.command().cyan());
    println!("  {} - Show configuration status", "libcat status".cyan());

    Ok(())
}

fn format_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Pretty => "pretty",
        OutputFormat::Table => "table",
        OutputFormat::Json => "json",
    }
}
