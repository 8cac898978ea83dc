use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

pub const PITCH_CLASS_COUNT: u8 = 12;

/// The 12 pitch classes. Rendering uses a single flat-based accidental
/// convention regardless of key; sharp spellings are accepted on parse and
/// normalized to their enharmonic flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PitchClass {
    C,
    DFlat,
    D,
    EFlat,
    E,
    F,
    GFlat,
    G,
    AFlat,
    A,
    BFlat,
    B,
}

pub const ALL_PITCH_CLASSES: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::DFlat,
    PitchClass::D,
    PitchClass::EFlat,
    PitchClass::E,
    PitchClass::F,
    PitchClass::GFlat,
    PitchClass::G,
    PitchClass::AFlat,
    PitchClass::A,
    PitchClass::BFlat,
    PitchClass::B,
];

impl PitchClass {
    #[must_use]
    pub const fn semitone(self) -> u8 {
        match self {
            Self::C => 0,
            Self::DFlat => 1,
            Self::D => 2,
            Self::EFlat => 3,
            Self::E => 4,
            Self::F => 5,
            Self::GFlat => 6,
            Self::G => 7,
            Self::AFlat => 8,
            Self::A => 9,
            Self::BFlat => 10,
            Self::B => 11,
        }
    }

    #[must_use]
    pub const fn from_semitone(value: u8) -> Self {
        match value % PITCH_CLASS_COUNT {
            0 => Self::C,
            1 => Self::DFlat,
            2 => Self::D,
            3 => Self::EFlat,
            4 => Self::E,
            5 => Self::F,
            6 => Self::GFlat,
            7 => Self::G,
            8 => Self::AFlat,
            9 => Self::A,
            10 => Self::BFlat,
            _ => Self::B,
        }
    }

    #[must_use]
    pub const fn transpose(self, semitones: u8) -> Self {
        Self::from_semitone(self.semitone() + semitones % PITCH_CLASS_COUNT)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::DFlat => "Db",
            Self::D => "D",
            Self::EFlat => "Eb",
            Self::E => "E",
            Self::F => "F",
            Self::GFlat => "Gb",
            Self::G => "G",
            Self::AFlat => "Ab",
            Self::A => "A",
            Self::BFlat => "Bb",
            Self::B => "B",
        }
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError("pitch class must not be empty".to_string()));
        }
        match s {
            "C" => Ok(Self::C),
            "Db" | "C#" => Ok(Self::DFlat),
            "D" => Ok(Self::D),
            "Eb" | "D#" => Ok(Self::EFlat),
            "E" => Ok(Self::E),
            "F" => Ok(Self::F),
            "Gb" | "F#" => Ok(Self::GFlat),
            "G" => Ok(Self::G),
            "Ab" | "G#" => Ok(Self::AFlat),
            "A" => Ok(Self::A),
            "Bb" | "A#" => Ok(Self::BFlat),
            "B" => Ok(Self::B),
            other => Err(ValidationError(format!("unknown pitch class: {other}"))),
        }
    }
}

impl Display for PitchClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PitchClass> for String {
    fn from(value: PitchClass) -> Self {
        value.as_str().to_string()
    }
}

impl TryFrom<String> for PitchClass {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
