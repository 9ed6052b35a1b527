// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// Reading the storage blob failed.
    ReadFailed(String),
    /// Writing the storage blob failed.
    WriteFailed(String),
    /// Serializing the state to JSON failed.
    SerializationFailed(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadFailed(msg) => write!(f, "Failed to read storage: {msg}"),
            Self::WriteFailed(msg) => write!(f, "Failed to write storage: {msg}"),
            Self::SerializationFailed(msg) => write!(f, "Failed to serialize state: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}
