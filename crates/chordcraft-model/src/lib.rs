#![forbid(unsafe_code)]
//! Chordcraft domain model: pitch classes, scales, diatonic chord derivation,
//! and the persisted progression record shapes. Pure data and functions, no I/O.

mod chord;
mod pitch;
mod progression;
mod scale;
mod shape;
mod theory;

pub use chord::{ChordEntry, ChordQuality};
pub use pitch::{PitchClass, ValidationError, ALL_PITCH_CLASSES, PITCH_CLASS_COUNT};
pub use progression::{Progression, ProgressionName, CHORDS_MAX_LEN, NAME_MAX_LEN};
pub use scale::{ScaleType, ALL_SCALE_TYPES};
pub use shape::{ChordShape, NewChordShape, SHAPE_CHORD_MAX_LEN};
pub use theory::{
    diatonic_chords, is_scale_member, scale_pitch_classes, DiatonicChord, SCALE_DEGREES,
};

pub const CRATE_NAME: &str = "chordcraft-model";
