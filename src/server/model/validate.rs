//! Boundary validation helpers shared by the parameter constructors.

use crate::server::error::AppError;

const MIN_PASSWORD_LENGTH: usize = 8;

/// Rejects addresses without a `local@domain` shape.
pub fn email(value: &str) -> Result<(), AppError> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(AppError::BadRequest("Invalid email address".to_string()))
    }
}

pub fn non_empty(value: &str, message: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        Err(AppError::BadRequest(message.to_string()))
    } else {
        Ok(())
    }
}

pub fn password(value: &str) -> Result<(), AppError> {
    if value.len() < MIN_PASSWORD_LENGTH {
        Err(AppError::BadRequest(
            "Password has to be more than 8 characters".to_string(),
        ))
    } else {
        Ok(())
    }
}
