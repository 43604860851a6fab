use config::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ErrorCode {
    ConfigurationInvalid   = 0400,
    StoreIOError           = 0500,
    StoreCorrupt           = 0501,
    DuplicateUsername      = 2001,
    WeakPassword           = 2002,
    UserNotFound           = 2101,
    AccountLocked          = 2102,
    SecurityAnswerMismatch = 2200,
    PasswordReused         = 2201,
}

impl ErrorCode {
    pub fn with_msg(&self, message: &str) -> LockboxError {
        LockboxError::new(*self, message)
    }

    ///
    /// Attach an itemised remediation list to the error - used by WeakPassword
    /// so the caller can tell the user exactly what to fix.
    ///
    pub fn with_feedback(&self, message: &str, feedback: Vec<String>) -> LockboxError {
        LockboxError { error_code: *self, message: message.to_string(), feedback }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LockboxError {
    error_code: ErrorCode,
    message: String,
    feedback: Vec<String>,
}

impl LockboxError {
    pub fn new(error_code: ErrorCode, message: &str) -> Self {
        LockboxError { error_code, message: message.to_string(), feedback: vec![] }
    }

    pub fn error_code(&self) -> ErrorCode {
        self.error_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }
}

impl std::fmt::Display for LockboxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<std::io::Error> for LockboxError {
    fn from(error: std::io::Error) -> Self {
        ErrorCode::StoreIOError.with_msg(&format!("Credential store IO failure: {}", error))
    }
}

impl From<serde_json::Error> for LockboxError {
    fn from(error: serde_json::Error) -> Self {
        ErrorCode::StoreCorrupt.with_msg(&format!("Credential store is not valid JSON: {}", error))
    }
}

impl From<ConfigError> for LockboxError {
    fn from(error: ConfigError) -> Self {
        ErrorCode::ConfigurationInvalid.with_msg(&format!("The service configuration is not correct: {}", error))
    }
}
