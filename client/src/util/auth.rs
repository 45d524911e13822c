//! Shared auth form helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and signup pages validate locally before calling the session context
//! and render every `AuthError` through the same copy, so both forms read the
//! same way to the user.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::{AuthError, Profile};

/// Trim the identifier and require both fields.
///
/// # Errors
///
/// Returns the message to show under the form.
pub fn validate_login_input(identifier: &str, password: &str) -> Result<(String, String), &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() || password.is_empty() {
        return Err("Enter your username or email and password.");
    }
    Ok((identifier.to_owned(), password.to_owned()))
}

/// Check the signup form and build the profile to register.
///
/// Field-level rules (email shape, '@' in usernames) are left to the session
/// context so both paths report them identically.
///
/// # Errors
///
/// Returns the message to show under the form.
pub fn validate_signup_input(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<Profile, &'static str> {
    if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err("Fill in every field.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(Profile::new(username.trim(), email.trim(), password))
}

/// User-facing text for a failed login or signup.
pub fn auth_error_message(err: &AuthError) -> String {
    match err {
        AuthError::InvalidInput { field, reason } => {
            let mut label = (*field).to_owned();
            if let Some(first) = label.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            format!("{label} {reason}.")
        }
        AuthError::InvalidCredentials => "Incorrect username/email or password.".to_owned(),
        AuthError::AlreadyExists { identifier } => format!("An account for {identifier} already exists."),
        AuthError::Unavailable(_) => "Sign-in is unavailable right now. Please try again.".to_owned(),
        AuthError::Superseded => "Another sign-in request replaced this one.".to_owned(),
    }
}
