use lockbox::db::store::{CredentialStore, MemoryStore};
use lockbox::utils::config::Configuration;
use lockbox::utils::context::ServiceContext;

pub const STRONG_PWD: &str = "Sn0w!leopard99";
pub const OTHER_STRONG_PWD: &str = "Gr4nite?peak77";
pub const WRONG_PWD: &str = "Not-the-one-42";

///
/// Build a context over an in-memory store with no common-password list.
///
pub fn test_context() -> ServiceContext {
    with_store(Box::new(MemoryStore::new()))
}

pub fn with_store(store: Box<dyn CredentialStore>) -> ServiceContext {
    ServiceContext::new(test_config(None), store)
        .expect("test context should build")
}

pub fn with_common_list(path: &str) -> ServiceContext {
    ServiceContext::new(test_config(Some(path)), Box::new(MemoryStore::new()))
        .expect("test context should build")
}

fn test_config(common_passwords_file: Option<&str>) -> Configuration {
    Configuration {
        users_file: "unused-in-tests.json".to_string(),
        common_passwords_file: common_passwords_file
            .unwrap_or("no/such/common_passwords.txt")
            .to_string(),
        max_attempts: 3,
    }
}
