//! Credential form validation.
//!
//! Runs before any network call; a validation failure never reaches the
//! session manager. The rules match what the server enforces: required
//! fields, a loose `local@domain` email shape, usernames of at least
//! three characters.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Validate login form input. Returns the first problem found.
pub fn login_input(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() {
        return Err("Email is required");
    }
    if !is_valid_email(email.trim()) {
        return Err("Invalid email address");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok(())
}

/// Validate registration form input.
pub fn register_input(username: &str, email: &str, password: &str) -> Result<(), &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Username is required");
    }
    if username.chars().count() < 3 {
        return Err("Username must be at least 3 characters");
    }
    login_input(email, password)
}

/// Loose `\S+@\S+` shape: one `@` with non-empty sides, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}
