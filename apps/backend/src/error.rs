use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::errors::{ErrorCode, FieldViolation, ValidationErrors};
use crate::infra::db_errors::map_db_err;
use crate::trace_ctx;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub code: &'static str,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<&'a FieldViolation>>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(ValidationErrors),
    #[error("Bad request: {detail}")]
    BadRequest { detail: String },
    #[error("Invalid data: {detail}")]
    InvalidData { detail: String },
    #[error("Not found: {detail}")]
    NotFound { detail: String },
    #[error("Already exists: {detail}")]
    AlreadyExists { detail: String },
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Database unavailable")]
    DbUnavailable,
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest { .. } => ErrorCode::BadRequest,
            AppError::InvalidData { .. } => ErrorCode::InvalidData,
            AppError::NotFound { .. } => ErrorCode::NotFound,
            AppError::AlreadyExists { .. } => ErrorCode::AlreadyExists,
            AppError::Unauthorized => ErrorCode::Unauthorized,
            AppError::Forbidden => ErrorCode::Forbidden,
            AppError::Db { .. } | AppError::DbUnavailable => ErrorCode::DatabaseError,
            AppError::Config { .. } | AppError::Internal { .. } => ErrorCode::InternalError,
        }
    }

    /// Client-facing message. Only `InvalidData` carries its detail; every
    /// other variant answers with a fixed text so internal errors never leak.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::Validation(_) => "Validation failed",
            AppError::BadRequest { .. } => "Bad request",
            AppError::InvalidData { detail } => detail.as_str(),
            AppError::NotFound { .. } => "Resource not found",
            AppError::AlreadyExists { .. } => "Resource already exists",
            AppError::Unauthorized => "Unauthorized",
            AppError::Forbidden => "Forbidden",
            AppError::Db { .. } | AppError::DbUnavailable => "Database error",
            AppError::Config { .. } | AppError::Internal { .. } => "Unexpected error",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidData { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::AlreadyExists { .. } => StatusCode::CONFLICT,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Db { .. }
            | AppError::DbUnavailable
            | AppError::Config { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::BadRequest {
            detail: detail.into(),
        }
    }

    pub fn invalid_data(detail: impl Into<String>) -> Self {
        Self::InvalidData {
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    pub fn already_exists(detail: impl Into<String>) -> Self {
        Self::AlreadyExists {
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn db_unavailable() -> Self {
        Self::DbUnavailable
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errs: ValidationErrors) -> Self {
        AppError::Validation(errs)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errs) => AppError::Validation(errs),
            // An unknown position in a submission is bad input, not a missing resource.
            DomainError::NotFound(NotFoundKind::Position, detail) => AppError::InvalidData { detail },
            DomainError::NotFound(_, detail) => AppError::NotFound { detail },
            DomainError::Conflict(_, detail) => AppError::AlreadyExists { detail },
            DomainError::Infra(InfraErrorKind::DbUnavailable, _) => AppError::DbUnavailable,
            DomainError::Infra(InfraErrorKind::DataCorruption, detail) => {
                AppError::Internal { detail }
            }
            DomainError::Infra(_, detail) => AppError::Db { detail },
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e).into()
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            error!(trace_id = %trace_id, code = %code, error = %self, "request failed");
        } else {
            warn!(trace_id = %trace_id, code = %code, error = %self, "request rejected");
        }

        let body = ErrorBody {
            code: code.as_str(),
            message: self.public_message(),
            errors: match self {
                AppError::Validation(errs) => Some(errs.iter().collect()),
                _ => None,
            },
        };

        HttpResponse::build(status)
            .insert_header(("x-trace-id", trace_id))
            .json(body)
    }
}
