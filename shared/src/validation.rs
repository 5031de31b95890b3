//! Input validation functions
//!
//! The persistence layer carries no field validators, so every schema rule
//! lives here and is applied by the service layer before a write. Email and
//! URL syntax come from the `validator` crate; the username and phone
//! patterns are checked with `regex-lite`.

use validator::{ValidateEmail, ValidateUrl};

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    if !email.validate_email() {
        return Err("Invalid email address format".to_string());
    }
    Ok(())
}

/// Validate a manager username: `manager@<nonempty>`
pub fn validate_username(username: &str) -> Result<(), String> {
    let pattern = regex_lite::Regex::new(r"^manager@.+$").unwrap();
    if !pattern.is_match(username) {
        return Err(format!(
            "{} is not a valid username. It must start with 'manager@'",
            username
        ));
    }
    Ok(())
}

/// Validate password strength: at least 6 characters with one uppercase
/// letter, one lowercase letter, one digit, and one symbol
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 6 {
        return Err("Password must be at least 6 characters long".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());
    if !(has_lower && has_upper && has_digit && has_symbol) {
        return Err(
            "Password must include uppercase, lowercase, number, and special character"
                .to_string(),
        );
    }
    Ok(())
}

/// Validate a display name
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.chars().count() < 2 {
        return Err("Name must be at least 2 characters".to_string());
    }
    Ok(())
}

/// Validate phone number syntax: optional leading `+`, then 7-20 digits
/// with common separators
pub fn validate_phone(phone: &str) -> Result<(), String> {
    let pattern = regex_lite::Regex::new(r"^\+?[0-9][0-9 \-()]{5,18}[0-9]$").unwrap();
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if !pattern.is_match(phone) || digits < 7 {
        return Err("Invalid phone number".to_string());
    }
    Ok(())
}

/// Validate avatar URL syntax
pub fn validate_url(url: &str) -> Result<(), String> {
    if !url.validate_url() {
        return Err("Avatar must be a valid URL".to_string());
    }
    Ok(())
}
