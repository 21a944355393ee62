//! Required-field presence checks shared by every write endpoint.
//!
//! The rule is deliberately permissive about types and strict about
//! "emptiness": a string field fails when it is absent or empty, a numeric
//! field fails when it is absent or zero. Rejecting zero means a wage of 0
//! or an inventory of 0 is indistinguishable from a missing field. That is
//! the API's historical behaviour; integration tests pin it so any future
//! change to the rule is visible.

use crate::error::CoreError;

/// Require a non-empty string field.
pub fn require_text<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, CoreError> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(missing(field)),
    }
}

/// Require a non-zero floating-point field (wages, rates, prices, hours).
pub fn require_f64(field: &'static str, value: Option<f64>) -> Result<f64, CoreError> {
    match value {
        Some(n) if n != 0.0 => Ok(n),
        _ => Err(missing(field)),
    }
}

/// Require a non-zero integer field (inventories, epoch dates).
pub fn require_i64(field: &'static str, value: Option<i64>) -> Result<i64, CoreError> {
    match value {
        Some(n) if n != 0 => Ok(n),
        _ => Err(missing(field)),
    }
}

fn missing(field: &'static str) -> CoreError {
    CoreError::Validation(format!("required field '{field}' is missing or empty"))
}
