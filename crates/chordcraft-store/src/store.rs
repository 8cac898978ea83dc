// SPDX-License-Identifier: Apache-2.0

use crate::document::{ProgressionRecord, StoreDocument};
use crate::{StoreError, StoreErrorCode};
use chordcraft_model::{ChordShape, NewChordShape, Progression, ProgressionName};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Replaced,
}

/// CRUD store for named progressions over one JSON backing file.
///
/// The store is the sole writer of its file. All records live in memory; the
/// file is read once at `open` and rewritten in full, durably, on every
/// mutation. A mutation whose flush fails is rolled back in memory so store
/// state never runs ahead of disk state.
#[derive(Debug)]
pub struct ProgressionStore {
    path: PathBuf,
    progressions: BTreeMap<ProgressionName, ProgressionRecord>,
    shapes: Vec<ChordShape>,
}

impl ProgressionStore {
    /// Opens the store over `path`. A missing file yields an empty store; an
    /// unreadable or unparseable file is refused rather than silently
    /// replaced.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let document = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice::<StoreDocument>(&bytes).map_err(|e| {
                StoreError::new(
                    StoreErrorCode::Unavailable,
                    format!("backing file {} is not a valid store document: {e}", path.display()),
                )
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreDocument::default(),
            Err(e) => {
                return Err(StoreError::new(
                    StoreErrorCode::Unavailable,
                    format!("failed to read backing file {}: {e}", path.display()),
                ))
            }
        };

        let mut progressions = BTreeMap::new();
        for (name, record) in document.progressions {
            let name = ProgressionName::parse(&name).map_err(|e| {
                StoreError::new(
                    StoreErrorCode::Unavailable,
                    format!("backing file holds an invalid progression name: {e}"),
                )
            })?;
            progressions.insert(name, record);
        }

        Ok(Self {
            path,
            progressions,
            shapes: document.shapes,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All saved progressions, name-ordered.
    #[must_use]
    pub fn list(&self) -> Vec<Progression> {
        self.progressions
            .iter()
            .map(|(name, record)| record.clone().into_progression(name.clone()))
            .collect()
    }

    pub fn get(&self, name: &str) -> Result<Progression, StoreError> {
        let Ok(key) = ProgressionName::parse(name) else {
            return Err(StoreError::not_found(name));
        };
        self.progressions
            .get(&key)
            .map(|record| record.clone().into_progression(key))
            .ok_or_else(|| StoreError::not_found(name))
    }

    /// Upserts by name: creates the record if absent, otherwise replaces it
    /// in full. The write is flushed before this returns.
    pub fn save(&mut self, progression: &Progression) -> Result<SaveOutcome, StoreError> {
        progression.validate()?;
        let name = progression.name.clone();
        let record = ProgressionRecord::from_progression(progression);

        let previous = self.progressions.insert(name.clone(), record);
        if let Err(e) = self.persist() {
            match previous {
                Some(record) => {
                    self.progressions.insert(name, record);
                }
                None => {
                    self.progressions.remove(&name);
                }
            }
            return Err(e);
        }
        Ok(match previous {
            Some(_) => SaveOutcome::Replaced,
            None => SaveOutcome::Created,
        })
    }

    /// Removes a record permanently. Deletion is not idempotent: once a name
    /// is gone, deleting it again reports `NotFound`.
    pub fn delete(&mut self, name: &str) -> Result<(), StoreError> {
        let Ok(key) = ProgressionName::parse(name) else {
            return Err(StoreError::not_found(name));
        };
        let Some(record) = self.progressions.remove(&key) else {
            return Err(StoreError::not_found(name));
        };
        if let Err(e) = self.persist() {
            self.progressions.insert(key, record);
            return Err(e);
        }
        Ok(())
    }

    #[must_use]
    pub fn list_shapes(&self) -> &[ChordShape] {
        &self.shapes
    }

    /// Appends a shape under a fresh `shape-NNNN` id.
    pub fn add_shape(&mut self, shape: NewChordShape) -> Result<ChordShape, StoreError> {
        let id = format!("shape-{:04}", self.shapes.len() + 1);
        let stored = ChordShape {
            id,
            chord: shape.chord,
            position: shape.position,
            diagram: shape.diagram,
        };
        self.shapes.push(stored.clone());
        if let Err(e) = self.persist() {
            self.shapes.pop();
            return Err(e);
        }
        Ok(stored)
    }

    fn persist(&self) -> Result<(), StoreError> {
        let document = StoreDocument {
            progressions: self
                .progressions
                .iter()
                .map(|(name, record)| (name.as_str().to_string(), record.clone()))
                .collect(),
            shapes: self.shapes.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&document).map_err(|e| {
            StoreError::new(
                StoreErrorCode::Unavailable,
                format!("failed to encode store document: {e}"),
            )
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::new(
                        StoreErrorCode::Unavailable,
                        format!("failed to create data directory {}: {e}", parent.display()),
                    )
                })?;
            }
        }

        // Atomic replace: a crash mid-write leaves the previous document intact.
        let tmp = tmp_path(&self.path);
        write_and_sync(&tmp, &bytes)?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            StoreError::new(
                StoreErrorCode::Unavailable,
                format!("failed to publish store document {}: {e}", self.path.display()),
            )
        })
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map_or_else(
        || std::ffi::OsString::from("store"),
        std::ffi::OsStr::to_os_string,
    );
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let mut file = std::fs::File::create(path).map_err(|e| {
        StoreError::new(
            StoreErrorCode::Unavailable,
            format!("failed to write {}: {e}", path.display()),
        )
    })?;
    file.write_all(bytes).map_err(|e| {
        StoreError::new(
            StoreErrorCode::Unavailable,
            format!("failed to write {}: {e}", path.display()),
        )
    })?;
    file.sync_all().map_err(|e| {
        StoreError::new(
            StoreErrorCode::Unavailable,
            format!("failed to sync {}: {e}", path.display()),
        )
    })
}
