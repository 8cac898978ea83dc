#![forbid(unsafe_code)]
//! Wire contract of the chordcraft HTTP surface: request/response DTOs, API
//! error codes, the error-to-status mapping, and DTO/domain conversion.
//! No HTTP framework types leak in here.

mod convert;
mod dto;
mod error_mapping;
mod errors;

pub use convert::{
    progression_from_dto, progression_to_dto, scale_chords_dto, shape_from_dto, shape_to_dto,
};
pub use dto::{
    ChordEntryDto, ChordShapeDto, ChromaticNoteDto, DiatonicChordDto, NewChordShapeDto,
    ProgressionDto, ScaleChordsDto,
};
pub use error_mapping::{map_error, status_for};
pub use errors::{ApiError, ApiErrorCode};

pub const CRATE_NAME: &str = "chordcraft-api";
