// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed blob storage.
///
/// Writes go through a sibling temporary file followed by a rename, so an
/// interrupted write leaves the previous blob intact.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Creates a backend storing at the given path.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Returns the storage path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored blob. A missing file is not an error: it means
    /// nothing was ever stored.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ReadFailed` on any other IO failure.
    pub fn read(&self) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PersistenceError::ReadFailed(err.to_string())),
        }
    }

    /// Replaces the stored blob.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::WriteFailed` if the temporary file
    /// cannot be written or renamed into place.
    pub fn write(&mut self, blob: &str) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| PersistenceError::WriteFailed(e.to_string()))?;
        }

        let mut tmp: PathBuf = self.path.clone();
        tmp.set_extension("json.tmp");
        fs::write(&tmp, blob).map_err(|e| PersistenceError::WriteFailed(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| PersistenceError::WriteFailed(e.to_string()))?;
        Ok(())
    }
}
