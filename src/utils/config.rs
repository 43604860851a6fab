use std::fmt::Write;
use std::env::VarError;
use config::ConfigError;
use serde::{Deserialize, Serialize};
use super::errors::LockboxError;

///
/// The service configuration - initialised at start-up.
///
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Configuration {
    pub users_file: String,             // Path to the credential store document.
    pub common_passwords_file: String,  // Path to the known-weak password list (optional at runtime).
    pub max_attempts: u32,              // Failed logins tolerated before the account is locked.
}

impl Configuration {
    ///
    /// Load the service's configuration.
    ///
    pub fn from_env() -> Result<Configuration, ConfigError> {
        let mut cfg = config::Config::default();

        // Merge any environment variables with the same name as the struct fields.
        cfg.merge(config::Environment::new())?;

        // Set defaults for settings that were not specified.
        cfg.set_default("users_file", "users.json")?;
        cfg.set_default("common_passwords_file", "common_passwords.txt")?;
        cfg.set_default("max_attempts", 3)?;

        let config: Configuration = cfg.try_into()?;

        Ok(config)
    }

    ///
    /// Pretty-print the config so it can be logged at start-up.
    ///
    pub fn fmt_console(&self) -> Result<String, LockboxError> {
        // Serialise to JSON so we have fields to iterate.
        let values = serde_json::to_value(&self)?;

        // Turn into a hashmap.
        let values = match values.as_object() {
            Some(values) => values,
            None => return Ok(String::new()),
        };

        // Sort by keys.
        let mut sorted: Vec<_> = values.iter().collect();
        sorted.sort_by_key(|a| a.0);

        let mut output = String::new();
        for (k, v) in sorted {
            let _ = writeln!(&mut output, "{:>23}: {}", k, v);
        }

        Ok(output)
    }
}

///
/// If the specified environment variable is not set for this process, set it to the default value specified.
///
pub fn default_env(key: &str, value: &str) {
    if let Err(VarError::NotPresent) = std::env::var(key) {
        std::env::set_var(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_applied() -> Result<(), ConfigError> {
        let config = Configuration::from_env()?;
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.users_file, "users.json");
        assert_eq!(config.common_passwords_file, "common_passwords.txt");
        Ok(())
    }
}
