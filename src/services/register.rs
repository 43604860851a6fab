use crate::model::account::Account;
use crate::model::strength::score_password;
use crate::utils::context::ServiceContext;
use crate::utils::errors::{ErrorCode, LockboxError};

///
/// Create a new account record.
///
/// The chosen password must classify as Strong - anything less is rejected with
/// the remediation feedback so the caller can re-prompt. On success the record
/// is created unlocked, with a fresh salt and digest, and persisted.
///
pub fn register(ctx: &ServiceContext, username: &str, plain_text_password: &str, security_answer: &str)
    -> Result<(), LockboxError> {

    let mut accounts = ctx.accounts_mut();

    if accounts.contains_key(username) {
        return Err(ErrorCode::DuplicateUsername
            .with_msg(&format!("The username {} already exists", username)))
    }

    let report = score_password(plain_text_password, ctx.common_passwords());

    if !report.is_strong() {
        return Err(ErrorCode::WeakPassword.with_feedback(
            &format!("The password is {} - only Strong passwords are accepted", report.label()),
            report.feedback))
    }

    accounts.insert(username.to_string(), Account::new(plain_text_password, security_answer));
    ctx.persist(&accounts)?;

    tracing::info!("Registered new account {}", username);
    Ok(())
}
