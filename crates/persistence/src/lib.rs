// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Room Desk console.
//!
//! The whole `AppState` aggregate is mirrored to one JSON document under a
//! fixed storage key after every committed transition. There is no partial
//! write path: the adapter only ever reads and writes the aggregate as a
//! whole.
//!
//! ## Backend support
//!
//! - **File** (default) — a single JSON document on disk
//! - **Memory** — used by unit and integration tests; fast, deterministic,
//!   and requiring no filesystem
//!
//! ## Load semantics
//!
//! Loading never fails the application:
//!
//! - no stored blob → the initial state
//! - a corrupt blob → logged, then the initial state
//! - a partially-shaped blob → missing top-level keys fill from the
//!   initial state; unknown keys are ignored
//!
//! Whatever happens, startup ends with a usable state.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod backend;
mod error;

#[cfg(test)]
mod tests;

pub use backend::{Backend, FileBackend, MemoryBackend};
pub use error::PersistenceError;

use room_desk::AppState;
use std::path::Path;
use tracing::{debug, warn};

/// Default storage file name, the fixed key the blob lives under.
pub const DEFAULT_STORAGE_FILE: &str = "room-desk-data.json";

/// The persistence adapter.
pub struct Persistence {
    backend: Backend,
}

impl Persistence {
    /// Creates a file-backed adapter storing at the given path.
    #[must_use]
    pub fn new_with_file(path: &Path) -> Self {
        Self {
            backend: Backend::File(FileBackend::new(path)),
        }
    }

    /// Creates an in-memory adapter for tests.
    #[must_use]
    pub const fn new_in_memory() -> Self {
        Self {
            backend: Backend::Memory(MemoryBackend::new()),
        }
    }

    /// Creates an in-memory adapter pre-seeded with a blob.
    #[must_use]
    pub fn new_in_memory_with_blob(blob: &str) -> Self {
        Self {
            backend: Backend::Memory(MemoryBackend::with_blob(blob)),
        }
    }

    /// Rehydrates the aggregate from storage.
    ///
    /// Never fails: a missing, unreadable, or corrupt blob falls back to
    /// the initial state so the application always starts usable.
    #[must_use]
    pub fn load(&self) -> AppState {
        let blob: String = match self.backend.read() {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                debug!("No stored state found, starting from the initial state");
                return AppState::initial();
            }
            Err(err) => {
                warn!(error = %err, "Could not read stored state, starting from the initial state");
                return AppState::initial();
            }
        };

        match serde_json::from_str::<AppState>(&blob) {
            Ok(state) => state,
            Err(err) => {
                warn!(error = %err, "Stored state is corrupt, starting from the initial state");
                AppState::initial()
            }
        }
    }

    /// Writes the aggregate to storage, replacing the previous blob.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails. The
    /// previous blob stays intact on failure.
    pub fn save(&mut self, state: &AppState) -> Result<(), PersistenceError> {
        let blob: String = serde_json::to_string(state)
            .map_err(|e| PersistenceError::SerializationFailed(e.to_string()))?;
        self.backend.write(&blob)
    }
}
