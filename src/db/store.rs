use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use parking_lot::Mutex;
use crate::model::account::Account;
use crate::utils::errors::LockboxError;

///
/// Durable mapping from username to account record.
///
/// The core loads the full record set once at start-up and saves it back after
/// every mutating operation. Implementations only need those two calls - there
/// is no per-record access and no locking discipline beyond single-process use.
///
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Result<BTreeMap<String, Account>, LockboxError>;
    fn save(&self, accounts: &BTreeMap<String, Account>) -> Result<(), LockboxError>;
}

///
/// The production store - a single JSON document on disk.
///
/// A missing file is an empty record set, not an error, so a fresh install
/// works without any set-up.
///
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileStore { path: path.as_ref().to_path_buf() }
    }
}

impl CredentialStore for FileStore {
    fn load(&self) -> Result<BTreeMap<String, Account>, LockboxError> {
        if !self.path.exists() {
            tracing::info!("No credential store at {} - starting empty", self.path.display());
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let accounts = serde_json::from_str(&contents)?;
        Ok(accounts)
    }

    fn save(&self, accounts: &BTreeMap<String, Account>) -> Result<(), LockboxError> {
        let contents = serde_json::to_string_pretty(accounts)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

///
/// An in-memory store for tests - same contract, no disk.
///
pub struct MemoryStore {
    accounts: Mutex<BTreeMap<String, Account>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore { accounts: Mutex::new(BTreeMap::new()) }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Result<BTreeMap<String, Account>, LockboxError> {
        Ok(self.accounts.lock().clone())
    }

    fn save(&self, accounts: &BTreeMap<String, Account>) -> Result<(), LockboxError> {
        *self.accounts.lock() = accounts.clone();
        Ok(())
    }
}
