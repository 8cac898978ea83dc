// SPDX-License-Identifier: Apache-2.0

use chordcraft_api::{
    progression_from_dto, progression_to_dto, scale_chords_dto, ApiErrorCode, ChordEntryDto,
    ProgressionDto,
};
use chordcraft_model::{PitchClass, ScaleType};

fn verse_dto() -> ProgressionDto {
    ProgressionDto {
        name: "verse".to_string(),
        key: "G".to_string(),
        scale_type: "major".to_string(),
        chords: vec![
            ChordEntryDto {
                root: "G".to_string(),
                quality: "major".to_string(),
            },
            ChordEntryDto {
                root: "D".to_string(),
                quality: "major".to_string(),
            },
            ChordEntryDto {
                root: "E".to_string(),
                quality: "minor".to_string(),
            },
        ],
    }
}

#[test]
fn valid_dto_converts_and_round_trips() {
    let progression = progression_from_dto(&verse_dto()).expect("convert");
    assert_eq!(progression.key, PitchClass::G);
    assert_eq!(progression.scale_type, ScaleType::Major);
    assert_eq!(progression_to_dto(&progression), verse_dto());
}

#[test]
fn empty_name_is_a_validation_failure() {
    let mut dto = verse_dto();
    dto.name = "   ".to_string();
    let err = progression_from_dto(&dto).expect_err("must reject");
    assert_eq!(err.code, ApiErrorCode::ValidationFailed);
    assert!(err.message.contains("name"));
}

#[test]
fn malformed_chord_entries_report_their_position() {
    let mut dto = verse_dto();
    dto.chords[1].quality = "power".to_string();
    let err = progression_from_dto(&dto).expect_err("must reject");
    assert_eq!(err.code, ApiErrorCode::ValidationFailed);
    assert!(err.message.contains("position 1"));
    assert_eq!(err.details["position"], 1);
}

#[test]
fn unknown_key_and_scale_are_rejected() {
    let mut dto = verse_dto();
    dto.key = "H".to_string();
    assert!(progression_from_dto(&dto).is_err());

    let mut dto = verse_dto();
    dto.scale_type = "phrygian".to_string();
    assert!(progression_from_dto(&dto).is_err());
}

#[test]
fn sharp_input_normalizes_to_flats_on_the_way_out() {
    let mut dto = verse_dto();
    dto.chords[0].root = "F#".to_string();
    let progression = progression_from_dto(&dto).expect("convert");
    assert_eq!(progression_to_dto(&progression).chords[0].root, "Gb");
}

#[test]
fn theory_payload_carries_seven_chords_and_twelve_chromatic_notes() {
    let dto = scale_chords_dto(PitchClass::C, ScaleType::Major);
    assert_eq!(dto.chords.len(), 7);
    assert_eq!(dto.scale_notes, ["C", "D", "E", "F", "G", "A", "B"]);
    assert_eq!(dto.chromatic.len(), 12);
    let in_scale: Vec<&str> = dto
        .chromatic
        .iter()
        .filter(|n| n.in_scale)
        .map(|n| n.note.as_str())
        .collect();
    assert_eq!(in_scale, ["C", "D", "E", "F", "G", "A", "B"]);
    assert_eq!(dto.chords[4].label, "Ⅴ");
    assert_eq!(dto.chords[6].label, "Ⅶdim");
}
