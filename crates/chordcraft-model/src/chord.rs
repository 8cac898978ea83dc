use crate::pitch::{PitchClass, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Chord quality of a single triad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
}

impl ChordQuality {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Diminished => "diminished",
            Self::Augmented => "augmented",
        }
    }

    /// Suffix appended to degree labels and chord names: `Am`, `Bdim`, `Caug`.
    /// Major carries no marker.
    #[must_use]
    pub const fn label_marker(self) -> &'static str {
        match self {
            Self::Major => "",
            Self::Minor => "m",
            Self::Diminished => "dim",
            Self::Augmented => "aug",
        }
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim() {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "diminished" => Ok(Self::Diminished),
            "augmented" => Ok(Self::Augmented),
            other => Err(ValidationError(format!("unknown chord quality: {other}"))),
        }
    }
}

impl Display for ChordQuality {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One slot in a progression. Position is the entry's index in the sequence;
/// the `Vec` representation keeps the ordering dense and 0-based after any
/// add/remove/swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChordEntry {
    pub root: PitchClass,
    pub quality: ChordQuality,
}

impl ChordEntry {
    #[must_use]
    pub const fn new(root: PitchClass, quality: ChordQuality) -> Self {
        Self { root, quality }
    }

    /// Display name of the chord, e.g. `G`, `Em`, `Bdim`.
    #[must_use]
    pub fn chord_name(&self) -> String {
        format!("{}{}", self.root.as_str(), self.quality.label_marker())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chord_name_combines_root_and_marker() {
        let entry = ChordEntry::new(PitchClass::E, ChordQuality::Minor);
        assert_eq!(entry.chord_name(), "Em");
        let entry = ChordEntry::new(PitchClass::G, ChordQuality::Major);
        assert_eq!(entry.chord_name(), "G");
    }
}
