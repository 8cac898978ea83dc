#![forbid(unsafe_code)]
//! JSON-document persistence for named chord progressions.
//!
//! One store instance owns one backing file. Every mutation rewrites the full
//! document through an atomic tmp-write-then-rename, so the last successful
//! full write always wins and a crash can never leave a truncated record set.

mod document;
mod store;

use std::fmt::{Display, Formatter};

pub use store::{ProgressionStore, SaveOutcome};

pub const CRATE_NAME: &str = "chordcraft-store";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    NotFound,
    Validation,
    Unavailable,
}

impl StoreErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Validation => "validation_error",
            Self::Unavailable => "storage_unavailable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    pub code: StoreErrorCode,
    pub message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(code: StoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(name: &str) -> Self {
        Self::new(
            StoreErrorCode::NotFound,
            format!("no progression named {name:?}"),
        )
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for StoreError {}

impl From<chordcraft_model::ValidationError> for StoreError {
    fn from(err: chordcraft_model::ValidationError) -> Self {
        Self::new(StoreErrorCode::Validation, err.0)
    }
}
