//! Shared domain types for the brigade workspace.

pub mod error;
pub mod presence;
pub mod types;
