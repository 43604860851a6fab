use std::io::{self, BufRead, Write};
use crate::model::strength::score_password;
use crate::services;
use crate::utils::context::ServiceContext;
use crate::utils::errors::{ErrorCode, LockboxError};

///
/// The interactive menu - a thin shell over the service operations.
///
/// All prompting and retry loops live here; the services only report typed
/// rejections (with feedback where applicable) per attempt.
///
pub fn run(ctx: &ServiceContext) -> Result<(), LockboxError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!();
        println!("=== MAIN MENU ===");
        println!("1 - Register");
        println!("2 - Login");
        println!("3 - Recover Password");
        println!("4 - Exit");

        let choice = match prompt(&mut input, "Choose an option: ")? {
            Some(choice) => choice,
            None => break, // stdin closed.
        };

        match choice.as_str() {
            "1" => register(ctx, &mut input)?,
            "2" => login(ctx, &mut input)?,
            "3" => recover(ctx, &mut input)?,
            "4" => {
                println!("Goodbye.");
                break
            },
            _ => println!("Invalid option."),
        }
    }

    Ok(())
}

fn register<B: BufRead>(ctx: &ServiceContext, input: &mut B) -> Result<(), LockboxError> {
    println!();
    println!("=== User Registration ===");

    let username = match prompt(input, "Choose a username: ")? {
        Some(username) => username,
        None => return Ok(()),
    };

    if ctx.accounts().contains_key(&username) {
        println!("Username already exists.");
        return Ok(())
    }

    // Keep prompting until the candidate password classifies as Strong.
    let password = loop {
        let password = match prompt(input, "Create a strong password: ")? {
            Some(password) => password,
            None => return Ok(()),
        };

        let report = score_password(&password, ctx.common_passwords());
        println!("Strength: {}", report.label());

        if report.is_strong() {
            break password
        }

        println!("Password is not strong enough.");
        for item in &report.feedback {
            println!("- {}", item);
        }
    };

    let answer = match prompt(input, "Security Question - What was the name of your first pet? ")? {
        Some(answer) => answer,
        None => return Ok(()),
    };

    match services::register(ctx, &username, &password, &answer) {
        Ok(()) => println!("Registration successful!"),
        Err(err) => println!("{}", err.message()),
    }

    Ok(())
}

fn login<B: BufRead>(ctx: &ServiceContext, input: &mut B) -> Result<(), LockboxError> {
    println!();
    println!("=== Login ===");

    let username = match prompt(input, "Username: ")? {
        Some(username) => username,
        None => return Ok(()),
    };

    let password = match prompt(input, "Password: ")? {
        Some(password) => password,
        None => return Ok(()),
    };

    match services::login(ctx, &username, &password) {
        Ok(outcome) if outcome.succeeded => println!("Login successful!"),
        Ok(outcome) => {
            println!("Wrong password.");
            if outcome.state == crate::model::account::AccountState::Locked {
                println!("Account locked due to multiple failed attempts.");
            }
        },
        Err(err) if err.error_code() == ErrorCode::UserNotFound => println!("User not found."),
        Err(err) if err.error_code() == ErrorCode::AccountLocked => {
            println!("Account is locked due to too many failed attempts.");
        },
        Err(err) => return Err(err),
    }

    Ok(())
}

fn recover<B: BufRead>(ctx: &ServiceContext, input: &mut B) -> Result<(), LockboxError> {
    println!();
    println!("=== Password Recovery ===");

    let username = match prompt(input, "Username: ")? {
        Some(username) => username,
        None => return Ok(()),
    };

    let answer = match prompt(input, "What was the name of your first pet? ")? {
        Some(answer) => answer,
        None => return Ok(()),
    };

    let mut verified = false;

    loop {
        let new_password = match prompt(input, "Enter new strong password: ")? {
            Some(new_password) => new_password,
            None => return Ok(()),
        };

        match services::recover(ctx, &username, &answer, &new_password) {
            Ok(()) => {
                println!("Password successfully updated.");
                return Ok(())
            },
            Err(err) => match err.error_code() {
                ErrorCode::UserNotFound => {
                    println!("User not found.");
                    return Ok(())
                },
                ErrorCode::SecurityAnswerMismatch => {
                    println!("Incorrect answer.");
                    return Ok(())
                },
                ErrorCode::PasswordReused => {
                    announce_verified(&mut verified);
                    println!("You cannot reuse your old password.");
                },
                ErrorCode::WeakPassword => {
                    announce_verified(&mut verified);
                    println!("Password is not strong enough.");
                    for item in err.feedback() {
                        println!("- {}", item);
                    }
                },
                _ => return Err(err),
            },
        }
    }
}

// The identity check has passed once we get any password-related rejection;
// tell the user so exactly once.
fn announce_verified(verified: &mut bool) {
    if !*verified {
        println!("Identity verified. Create a new password.");
        *verified = true;
    }
}

///
/// Print the label and read a trimmed line - None means stdin has closed.
///
fn prompt<B: BufRead>(input: &mut B, label: &str) -> Result<Option<String>, LockboxError> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None)
    }

    Ok(Some(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string()))
}
