//! Session token storage
//!
//! A session holds at most one bearer token. The [`SessionContext`] is built
//! once at start-up and handed to the gateway, the route guard and every
//! command that needs to know whether the user is signed in.

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Result;

mod store;
pub mod token;

pub use store::FileSessionStore;
#[cfg(test)]
pub use store::MemorySessionStore;

/// Key the token is stored under in the session file
pub const SESSION_KEY: &str = "accessToken";

/// Storage for the single session token
pub trait SessionStore: Send + Sync {
    /// Store the token, replacing any previous one
    fn set(&self, token: &str) -> Result<()>;

    /// Current token, if any
    fn get(&self) -> Option<String>;

    /// Remove the token. Removing an absent token is not an error.
    fn clear(&self) -> Result<()>;
}

/// Shared handle to the session store
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Open the file-backed session at `path`
    pub fn open(path: PathBuf) -> Result<Self> {
        Ok(Self::new(Arc::new(FileSessionStore::open(path)?)))
    }

    /// Session that lives only as long as the process
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::default()))
    }

    pub fn set(&self, token: &str) -> Result<()> {
        self.store.set(token)
    }

    pub fn get(&self) -> Option<String> {
        self.store.get()
    }

    pub fn clear(&self) -> Result<()> {
        self.store.clear()
    }

    pub fn is_signed_in(&self) -> bool {
        self.get().is_some()
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("signed_in", &self.is_signed_in())
            .finish()
    }
}
