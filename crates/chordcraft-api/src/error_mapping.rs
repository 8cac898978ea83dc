// SPDX-License-Identifier: Apache-2.0

use crate::{ApiError, ApiErrorCode};

/// HTTP status for an error code. `StorageUnavailable` maps to 500 (a plain
/// server error the caller must re-issue), not 503.
#[must_use]
pub const fn status_for(code: ApiErrorCode) -> u16 {
    match code {
        ApiErrorCode::ValidationFailed => 400,
        ApiErrorCode::ProgressionNotFound => 404,
        ApiErrorCode::StorageUnavailable | ApiErrorCode::Internal => 500,
    }
}

#[must_use]
pub const fn map_error(error: &ApiError) -> u16 {
    status_for(error.code)
}
