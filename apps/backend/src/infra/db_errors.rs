//! SeaORM -> DomainError translation helpers.
//!
//! Adapters should convert `sea_orm::DbErr` into `crate::errors::domain::DomainError`
//! here, and higher layers can then map `DomainError` to `AppError` via `From`.
//! Raw driver text goes to the log only, never into the returned detail.

use sea_orm::{ConnAcquireErr, DbErr, SqlErr};
use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database pool acquire timed out");
            return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        DbErr::Json(_) | DbErr::Type(_) => {
            error!(trace_id = %trace_id, raw_error = %error_msg, "Stored row could not be decoded");
            return DomainError::infra(InfraErrorKind::DataCorruption, "Stored data is corrupt");
        }
        _ => {}
    }

    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");
            return DomainError::conflict(ConflictKind::Unique, "Unique constraint violation");
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Foreign key constraint violation");
            return DomainError::infra(
                InfraErrorKind::Other("ForeignKey".into()),
                "Foreign key constraint violation",
            );
        }
        _ => {}
    }

    // Message-based fallback for drivers that don't surface a typed SqlErr.
    if mentions_sqlstate(&error_msg, "23505") || error_msg.contains("UNIQUE constraint failed") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");
        return DomainError::conflict(ConflictKind::Unique, "Unique constraint violation");
    }

    if error_msg.contains("timeout") || error_msg.contains("pool timed out") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        map_db_err(e)
    }
}
