//! Configuration management for libcat

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::client::gateway::DEFAULT_TIMEOUT;
use crate::error::{ConfigError, Result};

/// Backend used when nothing else is configured
pub const DEFAULT_API_ROOT: &str = "http://localhost:8000";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the catalog backend
    #[serde(default = "default_api_root")]
    pub api_root: String,

    /// Session file override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_file: Option<PathBuf>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_root() -> String {
    DEFAULT_API_ROOT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_root: default_api_root(),
            session_file: None,
            preferences: Preferences::default(),
        }
    }
}

impl Config {
    /// Directory holding config and session files
    pub fn home_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".libcat"))
    }

    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join("config.yaml"))
    }

    /// Resolve an optional override to a concrete path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, falling back to defaults when the file is missing
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(&path, contents)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Session file to use: explicit override, then config, then the default
    /// next to the config file.
    pub fn session_path(&self, session_override: Option<&str>) -> Result<PathBuf> {
        if let Some(p) = session_override {
            return Ok(PathBuf::from(p));
        }
        match &self.session_file {
            Some(p) => Ok(p.clone()),
            None => Ok(Self::home_dir()?.join("session.yaml")),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_api_root(&self.api_root)?;
        if self.preferences.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "preferences.timeout_secs must be at least 1".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Check that a backend URL is usable as a base for request paths
pub fn validate_api_root(root: &str) -> Result<()> {
    if !(root.starts_with("http://") || root.starts_with("https://")) {
        return Err(ConfigError::Invalid(format!(
            "api_root must start with http:// or https://, got `{}`",
            root
        ))
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_root, DEFAULT_API_ROOT);
        assert!(config.session_file.is_none());
        assert_eq!(config.preferences.timeout_secs, 30);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config.api_root, DEFAULT_API_ROOT);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let config = Config {
            api_root: "https://catalog.example.org".to_string(),
            ..Config::default()
        };
        config.save_to(path.clone()).unwrap();

        let loaded = Config::load_from(path).unwrap();
        assert_eq!(loaded.api_root, "https://catalog.example.org");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "preferences:\n  format: json\n").unwrap();

        let loaded = Config::load_from(path).unwrap();
        assert_eq!(loaded.api_root, DEFAULT_API_ROOT);
        assert_eq!(loaded.preferences.format.as_deref(), Some("json"));
        assert_eq!(loaded.preferences.timeout_secs, 30);
    }

    #[test]
    fn test_invalid_api_root_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api_root: catalog.local\n").unwrap();

        let err = Config::load_from(path).unwrap_err();
        assert!(err.to_string().contains("api_root"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "preferences:\n  timeout_secs: 0\n").unwrap();

        let err = Config::load_from(path.clone()).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));

        let mut config = Config::default();
        config.preferences.timeout_secs = 0;
        assert!(config.save_to(path).is_err());
    }

    #[test]
    fn test_session_path_precedence() {
        let mut config = Config::default();
        assert_eq!(
            config.session_path(Some("/tmp/s.yaml")).unwrap(),
            PathBuf::from("/tmp/s.yaml")
        );

        config.session_file = Some(PathBuf::from("/var/tmp/other.yaml"));
        assert_eq!(
            config.session_path(None).unwrap(),
            PathBuf::from("/var/tmp/other.yaml")
        );
    }
}
