use crate::model::digest;
use crate::model::strength::score_password;
use crate::utils::context::ServiceContext;
use crate::utils::errors::{ErrorCode, LockboxError};

///
/// Recover access via the security-question challenge.
///
/// The answer comparison is lowercase exact-match and a mismatch carries no
/// lockout penalty. The replacement password must not verify against the
/// current digest+salt and must classify as Strong. On success a fresh
/// salt+digest pair is installed, the failure counter is cleared and the
/// account is unconditionally unlocked.
///
pub fn recover(ctx: &ServiceContext, username: &str, security_answer: &str, new_password: &str)
    -> Result<(), LockboxError> {

    let mut accounts = ctx.accounts_mut();

    let account = match accounts.get_mut(username) {
        Some(account) => account,
        None => return Err(ErrorCode::UserNotFound
            .with_msg(&format!("The username {} does not exist", username))),
    };

    if security_answer.to_lowercase() != account.security_answer {
        return Err(ErrorCode::SecurityAnswerMismatch
            .with_msg("The security answer did not match"))
    }

    // The reuse check only covers the single current password.
    if digest::verify(new_password, &account.password_hash, &account.salt) {
        return Err(ErrorCode::PasswordReused
            .with_msg("The new password cannot be the same as the old password"))
    }

    let report = score_password(new_password, ctx.common_passwords());

    if !report.is_strong() {
        return Err(ErrorCode::WeakPassword.with_feedback(
            &format!("The password is {} - only Strong passwords are accepted", report.label()),
            report.feedback))
    }

    account.reset_password(new_password);
    ctx.persist(&accounts)?;

    tracing::info!("Password reset for {} - account unlocked", username);
    Ok(())
}
