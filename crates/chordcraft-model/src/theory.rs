use crate::chord::ChordQuality;
use crate::pitch::PitchClass;
use crate::scale::ScaleType;
use serde::Serialize;

pub const SCALE_DEGREES: usize = 7;

const DEGREE_NUMERALS: [&str; SCALE_DEGREES] = ["Ⅰ", "Ⅱ", "Ⅲ", "Ⅳ", "Ⅴ", "Ⅵ", "Ⅶ"];

/// A diatonic chord of a scale. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiatonicChord {
    pub degree: u8,
    pub root: PitchClass,
    pub quality: ChordQuality,
    pub label: String,
}

/// The seven scale-degree pitch classes of `scale` built on `key`.
#[must_use]
pub fn scale_pitch_classes(key: PitchClass, scale: ScaleType) -> [PitchClass; SCALE_DEGREES] {
    let mut out = [key; SCALE_DEGREES];
    for (slot, step) in out.iter_mut().zip(scale.intervals()) {
        *slot = key.transpose(step);
    }
    out
}

/// The seven diatonic chords of `scale` built on `key`, degrees 1..=7 in
/// order. Total for every valid input.
#[must_use]
pub fn diatonic_chords(key: PitchClass, scale: ScaleType) -> Vec<DiatonicChord> {
    let roots = scale_pitch_classes(key, scale);
    let qualities = scale.degree_qualities();
    roots
        .iter()
        .zip(qualities)
        .enumerate()
        .map(|(idx, (root, quality))| DiatonicChord {
            degree: idx as u8 + 1,
            root: *root,
            quality,
            label: format!("{}{}", DEGREE_NUMERALS[idx], quality.label_marker()),
        })
        .collect()
}

/// Whether `pitch` belongs to `scale` built on `key`. Backs the chromatic
/// highlight in the client.
#[must_use]
pub fn is_scale_member(key: PitchClass, scale: ScaleType, pitch: PitchClass) -> bool {
    scale_pitch_classes(key, scale).contains(&pitch)
}
