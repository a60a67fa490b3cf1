//! Form field prompts
//!
//! A field given on the command line is used as is. Otherwise the user is
//! asked on a terminal; without one the field counts as missing.

use std::io::IsTerminal;

use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::error::{Result, ValidationError};

fn interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Text field
pub fn text(value: Option<String>, field: &'static str, prompt: &str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    if !interactive() {
        return Err(ValidationError::MissingField(field).into());
    }

    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

/// Hidden field
pub fn secret(value: Option<String>, field: &'static str, prompt: &str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    if !interactive() {
        return Err(ValidationError::MissingField(field).into());
    }

    Ok(Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?)
}
