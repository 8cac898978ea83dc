use crate::chord::ChordQuality;
use crate::pitch::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Interval pattern applied to a key to produce a seven-degree scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    Major,
    NaturalMinor,
    HarmonicMinor,
}

pub const ALL_SCALE_TYPES: [ScaleType; 3] = [
    ScaleType::Major,
    ScaleType::NaturalMinor,
    ScaleType::HarmonicMinor,
];

impl ScaleType {
    /// Cumulative semitone offsets of the seven scale degrees.
    #[must_use]
    pub const fn intervals(self) -> [u8; 7] {
        match self {
            Self::Major => [0, 2, 4, 5, 7, 9, 11],
            Self::NaturalMinor => [0, 2, 3, 5, 7, 8, 10],
            Self::HarmonicMinor => [0, 2, 3, 5, 7, 8, 11],
        }
    }

    /// Fixed triad quality of each scale degree.
    #[must_use]
    pub const fn degree_qualities(self) -> [ChordQuality; 7] {
        use ChordQuality::{Augmented, Diminished, Major, Minor};
        match self {
            Self::Major => [Major, Minor, Minor, Major, Major, Minor, Diminished],
            Self::NaturalMinor => [Minor, Diminished, Major, Minor, Minor, Major, Major],
            Self::HarmonicMinor => [Minor, Diminished, Augmented, Minor, Major, Major, Diminished],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::NaturalMinor => "natural_minor",
            Self::HarmonicMinor => "harmonic_minor",
        }
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim() {
            "major" => Ok(Self::Major),
            "natural_minor" => Ok(Self::NaturalMinor),
            "harmonic_minor" => Ok(Self::HarmonicMinor),
            other => Err(ValidationError(format!("unknown scale type: {other}"))),
        }
    }
}

impl Display for ScaleType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_tables_are_strictly_increasing_within_an_octave() {
        for scale in ALL_SCALE_TYPES {
            let intervals = scale.intervals();
            assert_eq!(intervals[0], 0, "{scale} must start on the tonic");
            for pair in intervals.windows(2) {
                assert!(pair[0] < pair[1], "{scale} intervals must increase");
            }
            assert!(intervals[6] < 12, "{scale} must stay within the octave");
        }
    }

    #[test]
    fn parse_round_trips_every_scale_type() {
        for scale in ALL_SCALE_TYPES {
            assert_eq!(ScaleType::parse(scale.as_str()).expect("parse"), scale);
        }
    }
}
