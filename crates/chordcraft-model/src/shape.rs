use crate::pitch::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SHAPE_CHORD_MAX_LEN: usize = 32;

/// A saved fretboard diagram for one chord voicing. The diagram payload is an
/// opaque JSON document owned by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChordShape {
    pub id: String,
    pub chord: String,
    #[serde(default)]
    pub position: Option<String>,
    pub diagram: Value,
}

/// Shape submission before the store assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChordShape {
    pub chord: String,
    pub position: Option<String>,
    pub diagram: Value,
}

impl NewChordShape {
    pub fn new(chord: &str, position: Option<String>, diagram: Value) -> Result<Self, ValidationError> {
        let chord = chord.trim();
        if chord.is_empty() {
            return Err(ValidationError("shape chord must not be empty".to_string()));
        }
        if chord.len() > SHAPE_CHORD_MAX_LEN {
            return Err(ValidationError(format!(
                "shape chord exceeds max length {SHAPE_CHORD_MAX_LEN}"
            )));
        }
        Ok(Self {
            chord: chord.to_string(),
            position,
            diagram,
        })
    }
}
