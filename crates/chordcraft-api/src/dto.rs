// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChordEntryDto {
    pub root: String,
    pub quality: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ProgressionDto {
    pub name: String,
    pub key: String,
    pub scale_type: String,
    pub chords: Vec<ChordEntryDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiatonicChordDto {
    pub degree: u8,
    pub root: String,
    pub quality: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ChromaticNoteDto {
    pub note: String,
    pub in_scale: bool,
}

/// Theory-table response: the seven-degree breakdown of one key/scale pair
/// plus the chromatic highlight row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ScaleChordsDto {
    pub key: String,
    pub scale_type: String,
    pub scale_notes: Vec<String>,
    pub chords: Vec<DiatonicChordDto>,
    pub chromatic: Vec<ChromaticNoteDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChordShapeDto {
    pub id: String,
    pub chord: String,
    #[serde(default)]
    pub position: Option<String>,
    pub diagram: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewChordShapeDto {
    pub chord: String,
    #[serde(default)]
    pub position: Option<String>,
    pub diagram: Value,
}
