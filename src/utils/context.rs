use std::collections::BTreeMap;
use parking_lot::{RwLock, lock_api::{RwLockReadGuard, RwLockWriteGuard}};
use crate::db::common_passwords::CommonPasswordList;
use crate::db::store::CredentialStore;
use crate::model::account::Account;
use crate::utils::config::Configuration;
use crate::utils::errors::LockboxError;

///
/// The context is available to all service operations and gives them access to the
/// credential store, the common-password list and the config.
///
/// The account records are mirrored in memory - loaded once from the injected
/// store at construction and written back through it after every mutation.
///
pub struct ServiceContext {
    config: Configuration,
    store: Box<dyn CredentialStore>,
    accounts: RwLock<BTreeMap<String, Account>>,
    common_passwords: CommonPasswordList,
}

impl ServiceContext {
    pub fn new(config: Configuration, store: Box<dyn CredentialStore>) -> Result<Self, LockboxError> {
        let accounts = store.load()?;
        tracing::info!("Loaded {} account(s) from the credential store", accounts.len());

        let common_passwords = CommonPasswordList::new(&config.common_passwords_file);

        Ok(ServiceContext {
            config,
            store,
            accounts: RwLock::new(accounts),
            common_passwords,
        })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn common_passwords(&self) -> &CommonPasswordList {
        &self.common_passwords
    }

    ///
    /// Returns the account records with a read-lock guard.
    ///
    pub fn accounts(&self) -> RwLockReadGuard<'_, parking_lot::RawRwLock, BTreeMap<String, Account>> {
        self.accounts.read()
    }

    ///
    /// Returns the account records with a write-lock guard. Callers must persist
    /// after mutating.
    ///
    pub fn accounts_mut(&self) -> RwLockWriteGuard<'_, parking_lot::RawRwLock, BTreeMap<String, Account>> {
        self.accounts.write()
    }

    ///
    /// Write the full record set back through the injected store.
    ///
    pub fn persist(&self, accounts: &BTreeMap<String, Account>) -> Result<(), LockboxError> {
        self.store.save(accounts)
    }
}
