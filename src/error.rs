//! Error types for libcat

use thiserror::Error;

use crate::router::Route;

/// Result type alias for libcat operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result of a single request through the gateway
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The route guard redirected a protected view to its login route
    #[error("Sign in required to open {route}. Run `{}` first.", .login.command())]
    SignInRequired { route: Route, login: Route },

    /// An authorized request was refused; the stored token was dropped
    #[error("Your session has expired. Run `{}` to sign in again.", .login.command())]
    SessionExpired { login: Route },

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Failures of a request sent through the gateway
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not complete (DNS, refused connection, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("Request failed: {status} {reason}")]
    Http { status: u16, reason: String },

    /// A 2xx body did not match the expected shape
    #[error("Invalid API response: {0}")]
    Parse(String),
}

impl ApiError {
    /// HTTP status of the failure, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to the catalog".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Client-side form validation failures. These block submission before any
/// request is sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Field `{0}` is required")]
    MissingField(&'static str),

    #[error("Year must be a whole number, got `{0}`")]
    InvalidYear(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
