// SPDX-License-Identifier: Apache-2.0

use chordcraft_model::{
    ChordEntry, ChordQuality, NewChordShape, PitchClass, Progression, ProgressionName, ScaleType,
};
use chordcraft_store::{ProgressionStore, SaveOutcome, StoreErrorCode};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn store_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("data").join("progressions.json")
}

fn mk_progression(name: &str, chords: &[(PitchClass, ChordQuality)]) -> Progression {
    Progression::new(
        ProgressionName::parse(name).expect("name"),
        PitchClass::G,
        ScaleType::Major,
        chords
            .iter()
            .map(|(root, quality)| ChordEntry::new(*root, *quality))
            .collect(),
    )
    .expect("progression")
}

fn verse() -> Progression {
    mk_progression(
        "verse",
        &[
            (PitchClass::G, ChordQuality::Major),
            (PitchClass::D, ChordQuality::Major),
            (PitchClass::E, ChordQuality::Minor),
        ],
    )
}

#[test]
fn open_on_missing_file_yields_an_empty_store() {
    let dir = tempdir().expect("tempdir");
    let store = ProgressionStore::open(store_path(&dir)).expect("open");
    assert!(store.list().is_empty());
    assert!(store.list_shapes().is_empty());
}

#[test]
fn save_then_get_round_trips_the_verse_scenario() {
    let dir = tempdir().expect("tempdir");
    let mut store = ProgressionStore::open(store_path(&dir)).expect("open");

    let outcome = store.save(&verse()).expect("save");
    assert_eq!(outcome, SaveOutcome::Created);

    let loaded = store.get("verse").expect("get");
    assert_eq!(loaded.key, PitchClass::G);
    assert_eq!(loaded.scale_type, ScaleType::Major);
    let names: Vec<String> = loaded.chords.iter().map(ChordEntry::chord_name).collect();
    assert_eq!(names, ["G", "D", "Em"]);

    store.delete("verse").expect("delete");
    let err = store.get("verse").expect_err("gone");
    assert_eq!(err.code, StoreErrorCode::NotFound);
}

#[test]
fn get_is_idempotent_between_writes() {
    let dir = tempdir().expect("tempdir");
    let mut store = ProgressionStore::open(store_path(&dir)).expect("open");
    store.save(&verse()).expect("save");
    let first = store.get("verse").expect("first get");
    let second = store.get("verse").expect("second get");
    assert_eq!(first, second);
}

#[test]
fn save_with_a_used_name_replaces_the_whole_record() {
    let dir = tempdir().expect("tempdir");
    let mut store = ProgressionStore::open(store_path(&dir)).expect("open");
    store.save(&verse()).expect("create");

    let replacement = mk_progression("verse", &[(PitchClass::C, ChordQuality::Major)]);
    let outcome = store.save(&replacement).expect("replace");
    assert_eq!(outcome, SaveOutcome::Replaced);

    let loaded = store.get("verse").expect("get");
    assert_eq!(loaded.chords.len(), 1, "old sequence must be fully replaced");
    assert_eq!(loaded.chords[0].root, PitchClass::C);
    assert_eq!(store.list().len(), 1);
}

#[test]
fn delete_removes_from_list_and_second_delete_reports_not_found() {
    let dir = tempdir().expect("tempdir");
    let mut store = ProgressionStore::open(store_path(&dir)).expect("open");
    store.save(&verse()).expect("save");
    assert_eq!(store.list().len(), 1);

    store.delete("verse").expect("first delete");
    assert!(store.list().is_empty());

    let err = store.delete("verse").expect_err("second delete");
    assert_eq!(err.code, StoreErrorCode::NotFound);
}

#[test]
fn records_survive_a_store_reopen() {
    let dir = tempdir().expect("tempdir");
    let path = store_path(&dir);
    {
        let mut store = ProgressionStore::open(&path).expect("open");
        store.save(&verse()).expect("save");
        store
            .save(&mk_progression("chorus", &[(PitchClass::C, ChordQuality::Major)]))
            .expect("save second");
    }

    let reopened = ProgressionStore::open(&path).expect("reopen");
    let listed = reopened.list();
    assert_eq!(listed.len(), 2);
    // BTreeMap keying: list is name-ordered.
    assert_eq!(listed[0].name.as_str(), "chorus");
    assert_eq!(listed[1].name.as_str(), "verse");
    assert_eq!(reopened.get("verse").expect("get").chords.len(), 3);
}

#[test]
fn mutations_leave_no_tmp_file_behind() {
    let dir = tempdir().expect("tempdir");
    let path = store_path(&dir);
    let mut store = ProgressionStore::open(&path).expect("open");
    store.save(&verse()).expect("save");

    let dir_entries: Vec<String> = fs::read_dir(path.parent().expect("parent"))
        .expect("read_dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(dir_entries, ["progressions.json"]);
}

#[test]
fn corrupt_backing_file_is_refused() {
    let dir = tempdir().expect("tempdir");
    let path = store_path(&dir);
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(&path, b"{ not json").expect("write garbage");

    let err = ProgressionStore::open(&path).expect_err("must refuse");
    assert_eq!(err.code, StoreErrorCode::Unavailable);
}

#[test]
fn unreadable_path_is_refused() {
    let dir = tempdir().expect("tempdir");
    // The path is a directory, so reading it as a file fails with a
    // non-NotFound error.
    let err = ProgressionStore::open(dir.path()).expect_err("must refuse");
    assert_eq!(err.code, StoreErrorCode::Unavailable);
}

#[test]
fn validation_failures_reject_before_any_write() {
    let dir = tempdir().expect("tempdir");
    let path = store_path(&dir);
    let mut store = ProgressionStore::open(&path).expect("open");

    let raw = r#"{"name":"  ","key":"C","scaleType":"major","chords":[]}"#;
    let invalid: Progression = serde_json::from_str(raw).expect("decode");
    let err = store.save(&invalid).expect_err("must reject");
    assert_eq!(err.code, StoreErrorCode::Validation);
    assert!(!path.exists(), "rejected save must not touch the file");
}

#[test]
fn shapes_get_sequential_ids_and_persist() {
    let dir = tempdir().expect("tempdir");
    let path = store_path(&dir);
    let mut store = ProgressionStore::open(&path).expect("open");

    let first = store
        .add_shape(NewChordShape::new("G", Some("open".to_string()), serde_json::json!({"frets": [3, 2, 0, 0, 0, 3]})).expect("shape"))
        .expect("add");
    let second = store
        .add_shape(NewChordShape::new("Am", None, serde_json::json!({})).expect("shape"))
        .expect("add");
    assert_eq!(first.id, "shape-0001");
    assert_eq!(second.id, "shape-0002");

    let reopened = ProgressionStore::open(&path).expect("reopen");
    assert_eq!(reopened.list_shapes().len(), 2);
    assert_eq!(reopened.list_shapes()[0].chord, "G");
}

#[test]
fn document_layout_maps_names_to_records() {
    let dir = tempdir().expect("tempdir");
    let path = store_path(&dir);
    let mut store = ProgressionStore::open(&path).expect("open");
    store.save(&verse()).expect("save");

    let raw = fs::read(&path).expect("read document");
    let doc: serde_json::Value = serde_json::from_slice(&raw).expect("decode");
    assert_eq!(doc["progressions"]["verse"]["key"], "G");
    assert_eq!(doc["progressions"]["verse"]["scaleType"], "major");
    assert_eq!(doc["progressions"]["verse"]["chords"][0]["root"], "G");
}
