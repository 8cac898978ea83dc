use crate::chord::ChordEntry;
use crate::pitch::{PitchClass, ValidationError};
use crate::scale::ScaleType;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const NAME_MAX_LEN: usize = 100;
pub const CHORDS_MAX_LEN: usize = 64;

/// Unique identifier of a saved progression. Trimmed, non-empty, bounded,
/// free of control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct ProgressionName(String);

impl ProgressionName {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError(
                "progression name must not be empty".to_string(),
            ));
        }
        if s.len() > NAME_MAX_LEN {
            return Err(ValidationError(format!(
                "progression name exceeds max length {NAME_MAX_LEN}"
            )));
        }
        if s.chars().any(char::is_control) {
            return Err(ValidationError(
                "progression name must not contain control characters".to_string(),
            ));
        }
        Ok(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ProgressionName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The persisted unit: a named, ordered chord sequence plus its originating
/// key and scale. Sequence order is significant and preserved across
/// save/load round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Progression {
    pub name: ProgressionName,
    pub key: PitchClass,
    pub scale_type: ScaleType,
    pub chords: Vec<ChordEntry>,
}

impl Progression {
    pub fn new(
        name: ProgressionName,
        key: PitchClass,
        scale_type: ScaleType,
        chords: Vec<ChordEntry>,
    ) -> Result<Self, ValidationError> {
        let progression = Self {
            name,
            key,
            scale_type,
            chords,
        };
        progression.validate()?;
        Ok(progression)
    }

    /// Re-checks invariants that serde's transparent name representation
    /// cannot enforce on its own.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ProgressionName::parse(self.name.as_str())?;
        if self.chords.len() > CHORDS_MAX_LEN {
            return Err(ValidationError(format!(
                "progression exceeds max chord count {CHORDS_MAX_LEN}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::ChordQuality;

    #[test]
    fn name_parse_trims_and_rejects_empty() {
        let name = ProgressionName::parse("  verse 1  ").expect("parse");
        assert_eq!(name.as_str(), "verse 1");
        assert!(ProgressionName::parse("   ").is_err());
        assert!(ProgressionName::parse("a\nb").is_err());
    }

    #[test]
    fn progression_rejects_oversized_sequences() {
        let chords = vec![
            ChordEntry::new(PitchClass::C, ChordQuality::Major);
            CHORDS_MAX_LEN + 1
        ];
        let err = Progression::new(
            ProgressionName::parse("too long").expect("name"),
            PitchClass::C,
            ScaleType::Major,
            chords,
        )
        .expect_err("must reject");
        assert!(err.0.contains("max chord count"));
    }
}
