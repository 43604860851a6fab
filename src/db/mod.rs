pub mod common_passwords;
pub mod store;
