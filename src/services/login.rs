use crate::model::account::AccountState;
use crate::model::digest;
use crate::utils::context::ServiceContext;
use crate::utils::errors::{ErrorCode, LockboxError};

///
/// The result of a login attempt that was actually evaluated - a wrong password
/// is an outcome, not an error, so the caller can see the state it left the
/// account in.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoginOutcome {
    pub succeeded: bool,
    pub state: AccountState,
}

///
/// Authenticate a login attempt.
///
/// A locked account is refused before the password is even checked. A correct
/// password resets the failure counter; a wrong one increments it and, on
/// reaching the configured maximum, locks the account. Only recovery can
/// unlock it again.
///
pub fn login(ctx: &ServiceContext, username: &str, plain_text_password: &str)
    -> Result<LoginOutcome, LockboxError> {

    let mut accounts = ctx.accounts_mut();

    let account = match accounts.get_mut(username) {
        Some(account) => account,
        None => return Err(ErrorCode::UserNotFound
            .with_msg(&format!("The username {} does not exist", username))),
    };

    if account.locked {
        return Err(ErrorCode::AccountLocked
            .with_msg("The account is locked due to too many failed attempts"))
    }

    if digest::verify(plain_text_password, &account.password_hash, &account.salt) {
        account.failed_attempts = 0;
        ctx.persist(&accounts)?;

        tracing::info!("Successful login for {}", username);
        return Ok(LoginOutcome { succeeded: true, state: AccountState::Active })
    }

    account.failed_attempts += 1;

    if account.failed_attempts >= ctx.config().max_attempts {
        account.locked = true;
        tracing::warn!("Account {} locked after {} failed attempts", username, account.failed_attempts);
    }

    let state = account.state();
    ctx.persist(&accounts)?;

    Ok(LoginOutcome { succeeded: false, state })
}
