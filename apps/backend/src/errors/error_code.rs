//! Centralized error codes for the Futstats backend.
//!
//! Every code that can appear in the `code` field of an error body is listed
//! here, so the wire vocabulary stays fixed and greppable.

use std::fmt;

/// Stable wire codes, one per error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NotFound,
    BadRequest,
    InvalidData,
    AlreadyExists,
    Unauthorized,
    Forbidden,
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    /// All codes, in declaration order.
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::NotFound,
        ErrorCode::BadRequest,
        ErrorCode::InvalidData,
        ErrorCode::AlreadyExists,
        ErrorCode::Unauthorized,
        ErrorCode::Forbidden,
        ErrorCode::DatabaseError,
        ErrorCode::InternalError,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::BadRequest => "bad_request",
            Self::InvalidData => "invalid_data",
            Self::AlreadyExists => "already_exists",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::DatabaseError => "database_error",
            Self::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
