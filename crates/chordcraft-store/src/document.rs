// SPDX-License-Identifier: Apache-2.0

use chordcraft_model::{ChordEntry, ChordShape, PitchClass, Progression, ProgressionName, ScaleType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One progression as it sits on disk. The name is the document map key, not
/// a record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub(crate) struct ProgressionRecord {
    pub key: PitchClass,
    pub scale_type: ScaleType,
    pub chords: Vec<ChordEntry>,
}

impl ProgressionRecord {
    pub(crate) fn from_progression(progression: &Progression) -> Self {
        Self {
            key: progression.key,
            scale_type: progression.scale_type,
            chords: progression.chords.clone(),
        }
    }

    pub(crate) fn into_progression(self, name: ProgressionName) -> Progression {
        Progression {
            name,
            key: self.key,
            scale_type: self.scale_type,
            chords: self.chords,
        }
    }
}

/// The full backing document: a single JSON object mapping progression names
/// to records, plus the saved chord shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct StoreDocument {
    #[serde(default)]
    pub progressions: BTreeMap<String, ProgressionRecord>,
    #[serde(default)]
    pub shapes: Vec<ChordShape>,
}
