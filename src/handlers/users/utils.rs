use crate::error::ApiError;

/// Minimum plaintext password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validate email shape: exactly one '@' with non-empty local and domain
/// parts, and a dot somewhere in the domain.
pub fn validate_email_format(email: &str) -> Result<(), ApiError> {
    if email.is_empty() {
        return Err(ApiError::validation("Email cannot be empty"));
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() || !parts[1].contains('.') {
        return Err(ApiError::validation("Invalid email format"));
    }

    Ok(())
}

pub fn validate_password_format(password: &str) -> Result<(), ApiError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}
