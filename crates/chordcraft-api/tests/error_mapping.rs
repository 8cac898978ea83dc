// SPDX-License-Identifier: Apache-2.0

use chordcraft_api::{map_error, status_for, ApiError, ApiErrorCode};

#[test]
fn status_mapping_follows_the_crud_contract() {
    assert_eq!(status_for(ApiErrorCode::ValidationFailed), 400);
    assert_eq!(status_for(ApiErrorCode::ProgressionNotFound), 404);
    assert_eq!(status_for(ApiErrorCode::StorageUnavailable), 500);
    assert_eq!(status_for(ApiErrorCode::Internal), 500);
}

#[test]
fn map_error_uses_the_code_not_the_message() {
    let err = ApiError::progression_not_found("verse");
    assert_eq!(map_error(&err), 404);
    assert!(err.message.contains("verse"));
}

#[test]
fn storage_unavailable_keeps_its_message_generic() {
    let err = ApiError::storage_unavailable();
    assert_eq!(err.message, "storage unavailable");
    assert_eq!(err.details, serde_json::json!({}));
}

#[test]
fn error_codes_serialize_snake_case() {
    let encoded = serde_json::to_value(ApiErrorCode::ProgressionNotFound).expect("encode");
    assert_eq!(encoded, "progression_not_found");
    let err = ApiError::invalid_field("key", "unknown pitch class: H").with_request_id("req-1");
    let encoded = serde_json::to_value(&err).expect("encode");
    assert_eq!(encoded["code"], "validation_failed");
    assert_eq!(encoded["request_id"], "req-1");
}
