//! HTTP request handlers, one module per domain.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod folder;
pub mod health;

use coursehub_core::error::AppError;
use validator::Validate;

/// Runs DTO validation, mapping failures to a 400 response.
pub(crate) fn validated<T: Validate>(req: T) -> Result<T, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    Ok(req)
}
