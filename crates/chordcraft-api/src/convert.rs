// SPDX-License-Identifier: Apache-2.0

use crate::dto::{
    ChordEntryDto, ChordShapeDto, ChromaticNoteDto, DiatonicChordDto, NewChordShapeDto,
    ProgressionDto, ScaleChordsDto,
};
use crate::ApiError;
use chordcraft_model::{
    diatonic_chords, scale_pitch_classes, ChordEntry, ChordQuality, ChordShape, NewChordShape,
    PitchClass, Progression, ProgressionName, ScaleType, ALL_PITCH_CLASSES,
};
use serde_json::json;

/// Validates a submitted progression field by field. Everything the store
/// would reject is caught here, before persistence.
pub fn progression_from_dto(dto: &ProgressionDto) -> Result<Progression, ApiError> {
    let name = ProgressionName::parse(&dto.name)
        .map_err(|e| ApiError::invalid_field("name", &e.0))?;
    let key = PitchClass::parse(&dto.key).map_err(|e| ApiError::invalid_field("key", &e.0))?;
    let scale_type =
        ScaleType::parse(&dto.scale_type).map_err(|e| ApiError::invalid_field("scaleType", &e.0))?;

    let mut chords = Vec::with_capacity(dto.chords.len());
    for (index, entry) in dto.chords.iter().enumerate() {
        let root = PitchClass::parse(&entry.root).map_err(|e| {
            ApiError::validation_failed(
                format!("invalid chord root at position {index}: {}", e.0),
                json!({"field": "chords", "position": index, "reason": e.0}),
            )
        })?;
        let quality = ChordQuality::parse(&entry.quality).map_err(|e| {
            ApiError::validation_failed(
                format!("invalid chord quality at position {index}: {}", e.0),
                json!({"field": "chords", "position": index, "reason": e.0}),
            )
        })?;
        chords.push(ChordEntry::new(root, quality));
    }

    Progression::new(name, key, scale_type, chords)
        .map_err(|e| ApiError::validation_failed(e.0.clone(), json!({"reason": e.0})))
}

#[must_use]
pub fn progression_to_dto(progression: &Progression) -> ProgressionDto {
    ProgressionDto {
        name: progression.name.as_str().to_string(),
        key: progression.key.as_str().to_string(),
        scale_type: progression.scale_type.as_str().to_string(),
        chords: progression
            .chords
            .iter()
            .map(|entry| ChordEntryDto {
                root: entry.root.as_str().to_string(),
                quality: entry.quality.as_str().to_string(),
            })
            .collect(),
    }
}

/// Assembles the theory-table payload for one key/scale pair.
#[must_use]
pub fn scale_chords_dto(key: PitchClass, scale_type: ScaleType) -> ScaleChordsDto {
    let notes = scale_pitch_classes(key, scale_type);
    ScaleChordsDto {
        key: key.as_str().to_string(),
        scale_type: scale_type.as_str().to_string(),
        scale_notes: notes.iter().map(|pc| pc.as_str().to_string()).collect(),
        chords: diatonic_chords(key, scale_type)
            .into_iter()
            .map(|chord| DiatonicChordDto {
                degree: chord.degree,
                root: chord.root.as_str().to_string(),
                quality: chord.quality.as_str().to_string(),
                label: chord.label,
            })
            .collect(),
        chromatic: ALL_PITCH_CLASSES
            .iter()
            .map(|pc| ChromaticNoteDto {
                note: pc.as_str().to_string(),
                in_scale: notes.contains(pc),
            })
            .collect(),
    }
}

pub fn shape_from_dto(dto: NewChordShapeDto) -> Result<NewChordShape, ApiError> {
    NewChordShape::new(&dto.chord, dto.position, dto.diagram)
        .map_err(|e| ApiError::invalid_field("chord", &e.0))
}

#[must_use]
pub fn shape_to_dto(shape: &ChordShape) -> ChordShapeDto {
    ChordShapeDto {
        id: shape.id.clone(),
        chord: shape.chord.clone(),
        position: shape.position.clone(),
        diagram: shape.diagram.clone(),
    }
}
