use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

const SALT_BYTES: usize = 16;

///
/// Generate a fresh random salt, rendered as 32 hex characters.
///
/// Salts are never shared between accounts and are replaced together with the
/// digest whenever a password is set.
///
pub fn generate_salt() -> String {
    let mut bytes = [0u8; SALT_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

///
/// One-way digest of the password and salt, rendered as lowercase hex.
///
pub fn hash(plain_text_password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plain_text_password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

///
/// Validate if the plain_text_password matches the stored digest and salt.
///
pub fn verify(plain_text_password: &str, digest: &str, salt: &str) -> bool {
    hash(plain_text_password, salt) == digest
}
