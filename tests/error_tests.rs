// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use walk_tracker::db::StoreError;
use walk_tracker::error::AppError;

#[test]
fn test_store_errors_map_to_distinct_statuses() {
    let not_found = AppError::from(StoreError::NotFound("NOPE99".to_string()));
    assert!(matches!(not_found, AppError::NotFound(_)));
    assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

    let not_active = AppError::from(StoreError::NotActive("AB23CD".to_string()));
    assert!(matches!(not_active, AppError::NotActive(_)));
    assert_eq!(not_active.into_response().status(), StatusCode::CONFLICT);
}

#[test]
fn test_code_generation_failure_is_internal() {
    let err = AppError::from(StoreError::CodeGeneration);
    assert!(matches!(err, AppError::Internal(_)));
    assert_eq!(
        err.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_bad_request_status() {
    let err = AppError::BadRequest("Invalid event type".to_string());
    assert_eq!(err.to_string(), "Invalid request: Invalid event type");
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}
