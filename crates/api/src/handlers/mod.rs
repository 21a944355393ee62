//! HTTP handlers, one module per resource family.

pub mod employees;
pub mod menus;

use brigade_core::error::CoreError;

use crate::error::AppError;

/// Unwrap a request envelope, rejecting bodies that lack the resource key
/// (`{}` instead of `{"menu": {...}}`) as a validation failure.
fn require_body<T>(key: &'static str, body: Option<T>) -> Result<T, AppError> {
    body.ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "request body must contain '{key}'"
        )))
    })
}
