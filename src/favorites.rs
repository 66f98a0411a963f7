use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{KogeiError, Result};

const STORAGE_VERSION: i32 = 1;

/// Favorited craft ids persisted as a small JSON document.
///
/// Ids keep the order they were favorited in.
pub struct FavoritesStorage {
    label: String,
    path: PathBuf,
    data: FavoritesData,
}

#[derive(Serialize, Deserialize)]
struct FavoritesData {
    version: i32,
    entries: Vec<String>,
}

impl FavoritesStorage {
    /// Create an empty storage with a diagnostic label and file path
    pub fn new(label: String, path: &Path) -> Self {
        Self {
            label,
            path: PathBuf::from(path),
            data: FavoritesData {
                version: STORAGE_VERSION,
                entries: Vec::new(),
            },
        }
    }

    /// Storage loaded from `path`. A file that cannot be read starts an
    /// empty list instead of failing.
    pub fn open(label: String, path: &Path) -> Self {
        let mut storage = Self::new(label, path);
        match storage.read_fs() {
            Ok(entries) => storage.data.entries = entries,
            Err(e) => {
                log::warn!("{} starting with no favorites: {}", storage.label, e)
            }
        }
        storage
    }

    pub fn entries(&self) -> &[String] {
        &self.data.entries
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.data.entries.iter().any(|entry| entry == id)
    }

    /// Add `id` if absent, remove it otherwise, then persist.
    /// Returns whether `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let favorite = if self.is_favorite(id) {
            self.data.entries.retain(|entry| entry != id);
            false
        } else {
            self.data.entries.push(id.to_owned());
            true
        };
        self.write_fs()?;
        Ok(favorite)
    }

    /// Read the favorites file; a missing file is an empty list.
    pub fn read_fs(&mut self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let data: FavoritesData =
            serde_json::from_reader(file).map_err(|err| {
                KogeiError::Storage(self.label.clone(), err.to_string())
            })?;
        if data.version != STORAGE_VERSION {
            return Err(KogeiError::Storage(
                self.label.clone(),
                format!(
                    "Storage version mismatch: expected {}, got {}",
                    STORAGE_VERSION, data.version
                ),
            ));
        }

        Ok(data.entries)
    }

    pub fn write_fs(&mut self) -> Result<()> {
        let parent_dir = self.path.parent().ok_or_else(|| {
            KogeiError::Storage(
                self.label.clone(),
                "Failed to get parent directory".to_owned(),
            )
        })?;
        fs::create_dir_all(parent_dir)?;
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &self.data)?;
        writer.flush()?;

        log::info!(
            "{} {} entries have been written",
            self.label,
            self.data.entries.len()
        );
        Ok(())
    }

    /// Remove the favorites file from disk
    pub fn erase(&self) -> Result<()> {
        fs::remove_file(&self.path).map_err(|err| {
            KogeiError::Storage(self.label.clone(), err.to_string())
        })
    }
}
