use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// A single account record as persisted in the credential store.
///
/// The username is the key the record is stored under, so it doesn't appear
/// here. The salt and digest are only ever replaced together - registration
/// and recovery both generate a fresh pair.
///
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Account {
    pub password_hash: String,
    pub salt: String,
    pub security_answer: String,  // Normalised to lowercase before storage.
    pub failed_attempts: u32,
    pub locked: bool,
}

#[derive(Clone, Copy, Debug, Display, PartialEq)]
pub enum AccountState {
    Active,
    Locked,
}

impl Account {
    ///
    /// Create a new, unlocked record with a fresh salt and digest.
    ///
    pub fn new(plain_text_password: &str, security_answer: &str) -> Self {
        let salt = super::digest::generate_salt();
        let password_hash = super::digest::hash(plain_text_password, &salt);

        Account {
            password_hash,
            salt,
            security_answer: security_answer.to_lowercase(),
            failed_attempts: 0,
            locked: false,
        }
    }

    pub fn state(&self) -> AccountState {
        match self.locked {
            true  => AccountState::Locked,
            false => AccountState::Active,
        }
    }

    ///
    /// Replace the digest and salt together - used by recovery when a new
    /// password is installed.
    ///
    pub fn reset_password(&mut self, plain_text_password: &str) {
        self.salt = super::digest::generate_salt();
        self.password_hash = super::digest::hash(plain_text_password, &self.salt);
        self.failed_attempts = 0;
        self.locked = false;
    }
}
