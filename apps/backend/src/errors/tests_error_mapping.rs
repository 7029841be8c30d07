// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::errors::{ErrorCode, ValidationErrors};
use crate::AppError;

#[test]
fn maps_validation_to_400_with_violations_kept() {
    let mut errs = ValidationErrors::new();
    errs.push("name", "Name is required");
    errs.push("positions", "At least one position is required");

    let app: AppError = DomainError::validation(errs).into();
    assert_eq!(app.code(), ErrorCode::BadRequest);
    assert_eq!(app.status().as_u16(), 400);
    match app {
        AppError::Validation(errs) => assert_eq!(errs.fields(), vec!["name", "positions"]),
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn maps_unknown_position_to_422() {
    let nf = DomainError::not_found(NotFoundKind::Position, "position 'Ala' not found");
    let app: AppError = nf.into();
    assert_eq!(app.code(), ErrorCode::InvalidData);
    assert_eq!(app.status().as_u16(), 422);
    assert_eq!(app.public_message(), "position 'Ala' not found");
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Player, "player 42 not found");
    let app: AppError = nf.into();
    assert_eq!(app.code(), ErrorCode::NotFound);
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_conflicts() {
    let unique = DomainError::conflict(ConflictKind::Unique, "Unique constraint violation");
    let app: AppError = unique.into();
    assert_eq!(app.code(), ErrorCode::AlreadyExists);
    assert_eq!(app.status().as_u16(), 409);

    let other = DomainError::conflict(ConflictKind::Other("x".into()), "generic conflict");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::AlreadyExists);
}

#[test]
fn maps_infra() {
    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert!(matches!(app, AppError::DbUnavailable));
    assert_eq!(app.code(), ErrorCode::DatabaseError);
    assert_eq!(app.status().as_u16(), 500);

    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code(), ErrorCode::DatabaseError);

    let corr = DomainError::infra(InfraErrorKind::DataCorruption, "bad stats json");
    let app: AppError = corr.into();
    assert_eq!(app.code(), ErrorCode::InternalError);
    assert_eq!(app.status().as_u16(), 500);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".into()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::DatabaseError);
}

#[test]
fn every_kind_has_one_status() {
    let cases = [
        (AppError::not_found("x"), 404, "not_found"),
        (AppError::bad_request("x"), 400, "bad_request"),
        (AppError::invalid_data("x"), 422, "invalid_data"),
        (AppError::already_exists("x"), 409, "already_exists"),
        (AppError::Unauthorized, 401, "unauthorized"),
        (AppError::Forbidden, 403, "forbidden"),
        (AppError::db("x"), 500, "database_error"),
        (AppError::internal("x"), 500, "internal_error"),
    ];
    for (err, status, code) in cases {
        assert_eq!(err.status().as_u16(), status, "{err:?}");
        assert_eq!(err.code().as_str(), code, "{err:?}");
    }
}

#[test]
fn validation_source_is_the_aggregate() {
    use std::error::Error;

    let mut errs = ValidationErrors::new();
    errs.push("stats", "Stats must contain exactly 6 keys");
    let de = DomainError::validation(errs);

    let source = de.source().expect("aggregate should be the source");
    assert!(source.downcast_ref::<ValidationErrors>().is_some());
}
