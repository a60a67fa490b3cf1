//! Session store implementations

use std::io::Write;
use std::path::PathBuf;

use log::warn;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::SessionStore;
use crate::error::{ConfigError, Result};

/// On-disk shape of the session file
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
}

/// Session kept in a YAML file, loaded once when opened.
///
/// Reads are served from memory; writes go through to the file.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    token: RwLock<Option<String>>,
}

impl FileSessionStore {
    pub fn open(path: PathBuf) -> Result<Self> {
        let token = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            parse_token(&contents).unwrap_or_else(|e| {
                warn!(
                    "Ignoring unreadable session file {}: {}",
                    path.display(),
                    e
                );
                None
            })
        } else {
            None
        };

        Ok(Self {
            path,
            token: RwLock::new(token),
        })
    }

    fn write(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_yaml::to_string(&SessionFile {
            access_token: Some(token.to_string()),
        })
        .map_err(|e| ConfigError::SaveError(e.to_string()))?;

        // The token is a credential: owner read/write only, from creation on
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path)?;

        // `mode` only applies to new files
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }

        file.write_all(contents.as_bytes())?;
        Ok(())
    }
}

fn parse_token(contents: &str) -> std::result::Result<Option<String>, serde_yaml::Error> {
    if contents.trim().is_empty() {
        return Ok(None);
    }
    let file: SessionFile = serde_yaml::from_str(contents)?;
    Ok(file.access_token.filter(|t| !t.is_empty()))
}

impl SessionStore for FileSessionStore {
    fn set(&self, token: &str) -> Result<()> {
        self.write(token)?;
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn get(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn clear(&self) -> Result<()> {
        *self.token.write() = None;
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Session that is never persisted
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn set(&self, token: &str) -> Result<()> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn get(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn clear(&self) -> Result<()> {
        *self.token.write() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_set_overwrites() {
        let store = MemorySessionStore::default();
        assert_eq!(store.get(), None);

        store.set("first").unwrap();
        store.set("second").unwrap();
        assert_eq!(store.get().as_deref(), Some("second"));
    }

    #[test]
    fn test_clear_then_get_is_absent() {
        let store = MemorySessionStore::default();
        for prior in [None, Some("tok"), Some("")] {
            if let Some(token) = prior {
                store.set(token).unwrap();
            }
            store.clear().unwrap();
            assert_eq!(store.get(), None);
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = MemorySessionStore::default();
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("session.yaml");

        let store = FileSessionStore::open(path.clone()).unwrap();
        assert_eq!(store.get(), None);
        store.set("tok123").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("accessToken: tok123"));

        let reopened = FileSessionStore::open(path).unwrap();
        assert_eq!(reopened.get().as_deref(), Some("tok123"));
    }

    #[test]
    fn test_file_store_clear_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.yaml");

        let store = FileSessionStore::open(path.clone()).unwrap();
        store.set("tok").unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(!path.exists());
        assert_eq!(store.get(), None);

        // Second clear on a missing file still succeeds
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_empty_file_is_signed_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.yaml");
        std::fs::write(&path, "").unwrap();

        let store = FileSessionStore::open(path).unwrap();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_corrupt_file_is_signed_out_and_clearable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.yaml");
        std::fs::write(&path, "accessToken: [unclosed").unwrap();

        let store = FileSessionStore::open(path.clone()).unwrap();
        assert_eq!(store.get(), None);

        store.clear().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_wrong_shape_is_signed_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.yaml");
        std::fs::write(&path, "accessToken:\n  - a\n  - b\n").unwrap();

        let store = FileSessionStore::open(path).unwrap();
        assert_eq!(store.get(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_tightens_existing_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("session.yaml");
        std::fs::write(&path, "").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let store = FileSessionStore::open(path.clone()).unwrap();
        store.set("tok").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert!(std::fs::read_to_string(&path).unwrap().contains("tok"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("session.yaml");
        let store = FileSessionStore::open(path.clone()).unwrap();
        store.set("tok").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
