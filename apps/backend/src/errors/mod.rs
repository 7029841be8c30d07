//! Error handling for the Futstats backend.

pub mod domain;
pub mod error_code;
pub mod validation;

pub use domain::DomainError;
pub use error_code::ErrorCode;
pub use validation::{FieldViolation, ValidationErrors};

#[cfg(test)]
mod tests_error_mapping;
