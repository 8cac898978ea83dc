// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ApiErrorCode {
    ValidationFailed,
    ProgressionNotFound,
    StorageUnavailable,
    Internal,
}

impl ApiErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationFailed => "validation_failed",
            Self::ProgressionNotFound => "progression_not_found",
            Self::StorageUnavailable => "storage_unavailable",
            Self::Internal => "internal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
    pub request_id: String,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            request_id: "req-unknown".to_string(),
        }
    }

    #[must_use]
    pub fn validation_failed(message: impl Into<String>, details: Value) -> Self {
        Self::new(ApiErrorCode::ValidationFailed, message, details)
    }

    #[must_use]
    pub fn invalid_field(field: &str, reason: &str) -> Self {
        Self::validation_failed(
            format!("invalid {field}: {reason}"),
            json!({"field": field, "reason": reason}),
        )
    }

    #[must_use]
    pub fn progression_not_found(name: &str) -> Self {
        Self::new(
            ApiErrorCode::ProgressionNotFound,
            format!("no progression named {name:?}"),
            json!({"name": name}),
        )
    }

    /// Storage failure details go to the log, never to the client.
    #[must_use]
    pub fn storage_unavailable() -> Self {
        Self::new(
            ApiErrorCode::StorageUnavailable,
            "storage unavailable",
            json!({}),
        )
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = request_id.to_string();
        self
    }
}

const _: fn() = || {
    fn assert_traits<T: Serialize + for<'de> Deserialize<'de>>() {}
    assert_traits::<ApiErrorCode>();
};
