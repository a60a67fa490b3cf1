//! Command execution context
//!
//! Provides a unified context for command execution: config loading, the
//! session handle, the catalog client and output preferences are resolved
//! once here and shared by every command.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{CatalogClient, Gateway};
use crate::config::{Config, validate_api_root};
use crate::error::{ApiResult, Error, Result};
use crate::output::notify::{Notifier, TerminalNotifier};
use crate::router::{GuardDecision, Route, RouteGuard};
use crate::session::SessionContext;
use crate::views::auth::expire_session;

/// Context for command execution containing config, session, client and
/// runtime options.
pub struct CommandContext {
    /// Loaded and validated configuration
    pub config: Config,
    /// Path of the session file in use
    pub session_path: PathBuf,
    /// Shared session handle; the client holds a clone
    pub session: SessionContext,
    /// Catalog client (Arc-wrapped so searches can be spawned)
    pub client: Arc<CatalogClient>,
    /// Output format preference
    pub format: OutputFormat,
    /// Where toasts go
    pub notifier: Arc<dyn Notifier>,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Precedence for every setting is CLI flag (or env) > config file >
    /// default.
    ///
    /// # Errors
    /// Returns error if the config or session file cannot be read, or the
    /// API root is not a usable URL.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_at(opts.config_ref())?;

        if let Some(root) = opts.api_root_ref() {
            validate_api_root(root)?;
            config.api_root = root.to_string();
        }

        let format = opts
            .format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_name)
            })
            .unwrap_or_default();

        let session_path = config.session_path(opts.session_ref())?;
        let session = SessionContext::open(session_path.clone())?;
        debug!(
            "api_root={} session={} signed_in={}",
            config.api_root,
            session_path.display(),
            session.is_signed_in()
        );

        let timeout = Duration::from_secs(config.preferences.timeout_secs);
        let gateway = Gateway::with_timeout(&config.api_root, session.clone(), timeout)?;

        Ok(Self {
            config,
            session_path,
            session,
            client: Arc::new(CatalogClient::new(gateway)),
            format,
            notifier: Arc::new(TerminalNotifier),
        })
    }

    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(self.session.clone())
    }

    /// Navigate to `route`, failing with the login command to run when the
    /// guard redirects.
    pub fn enter(&self, route: Route) -> Result<Route> {
        match self.guard().evaluate(route) {
            GuardDecision::Render(route) => Ok(route),
            GuardDecision::Redirect(login) => {
                debug!("Guard redirected {} to {}", route, login);
                Err(Error::SignInRequired { route, login })
            }
        }
    }

    /// Pass a result from an authorized request through, dropping the
    /// session when the backend refused the token.
    pub fn check_session<T>(&self, route: Route, result: ApiResult<T>) -> Result<T> {
        match result {
            Err(err) if err.is_unauthorized() && self.session.is_signed_in() => {
                Err(expire_session(&self.session, route)?)
            }
            other => Ok(other?),
        }
    }

    /// Spinner on stderr while a request is in flight. Hidden when stderr is
    /// not a terminal or output is JSON.
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if self.format == OutputFormat::Json || !std::io::stderr().is_terminal() {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use tempfile::tempdir;

    fn opts_in(dir: &std::path::Path) -> GlobalOptions {
        GlobalOptions {
            format: None,
            config: Some(dir.join("config.yaml").to_string_lossy().into_owned()),
            session: Some(dir.join("session.yaml").to_string_lossy().into_owned()),
            api_root: None,
        }
    }

    #[test]
    fn test_defaults_without_config_file() {
        let dir = tempdir().unwrap();
        let ctx = CommandContext::new(&opts_in(dir.path())).unwrap();

        assert_eq!(ctx.client.gateway().base_url(), "http://localhost:8000");
        assert_eq!(ctx.format, OutputFormat::Pretty);
        assert!(!ctx.session.is_signed_in());
    }

    #[test]
    fn test_flags_override_config() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.yaml"),
            "api_root: http://catalog.internal\npreferences:\n  format: table\n",
        )
        .unwrap();

        let ctx = CommandContext::new(&opts_in(dir.path())).unwrap();
        assert_eq!(ctx.client.gateway().base_url(), "http://catalog.internal");
        assert_eq!(ctx.format, OutputFormat::Table);

        let mut opts = opts_in(dir.path());
        opts.api_root = Some("https://other.example/".to_string());
        opts.format = Some(OutputFormat::Json);
        let ctx = CommandContext::new(&opts).unwrap();
        assert_eq!(ctx.client.gateway().base_url(), "https://other.example");
        assert_eq!(ctx.format, OutputFormat::Json);
    }

    #[test]
    fn test_rejects_bad_api_root_flag() {
        let dir = tempdir().unwrap();
        let mut opts = opts_in(dir.path());
        opts.api_root = Some("localhost:8000".to_string());

        assert!(matches!(
            CommandContext::new(&opts),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_enter_redirects_without_token() {
        let dir = tempdir().unwrap();
        let ctx = CommandContext::new(&opts_in(dir.path())).unwrap();

        match ctx.enter(Route::EditorAdd) {
            Err(Error::SignInRequired { route, login }) => {
                assert_eq!(route, Route::EditorAdd);
                assert_eq!(login, Route::EditorLogin);
            }
            other => panic!("Expected redirect, got {:?}", other),
        }
        assert_eq!(ctx.enter(Route::Register).unwrap(), Route::Register);

        ctx.session.set("tok").unwrap();
        assert_eq!(ctx.enter(Route::EditorAdd).unwrap(), Route::EditorAdd);
    }

    #[test]
    fn test_unauthorized_response_clears_session() {
        let dir = tempdir().unwrap();
        let ctx = CommandContext::new(&opts_in(dir.path())).unwrap();
        ctx.session.set("stale").unwrap();

        let result: ApiResult<()> = Err(ApiError::Http {
            status: 401,
            reason: "Unauthorized".to_string(),
        });
        let err = ctx.check_session(Route::Home, result).unwrap_err();

        assert!(matches!(err, Error::SessionExpired { login: Route::Login }));
        assert!(!ctx.session.is_signed_in());
        assert!(!dir.path().join("session.yaml").exists());
    }

    #[test]
    fn test_other_failures_keep_session() {
        let dir = tempdir().unwrap();
        let ctx = CommandContext::new(&opts_in(dir.path())).unwrap();
        ctx.session.set("tok").unwrap();

        let result: ApiResult<()> = Err(ApiError::Http {
            status: 500,
            reason: "Internal Server Error".to_string(),
        });
        assert!(matches!(
            ctx.check_session(Route::Editor, result),
            Err(Error::Api(_))
        ));
        assert!(ctx.session.is_signed_in());
    }
}
