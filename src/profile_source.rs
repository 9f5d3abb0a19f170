// ABOUTME: Boundary for loading musician profiles from storage
// ABOUTME: ProfileSource trait plus a JSON-file-per-profile directory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

//! Profile loading
//!
//! The engine never touches storage. Callers resolve a profile through a
//! [`ProfileSource`] and hand the decoded value to the engine.

use stagecraft_core::errors::{AppError, AppResult};
use stagecraft_core::models::MusicianProfile;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves a profile id to a decoded profile
pub trait ProfileSource: Send + Sync {
    /// Load one profile
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, `InvalidInput` for a
    /// malformed id, and `StorageError` or `SerializationError` when the
    /// stored record cannot be read or decoded.
    fn load(&self, profile_id: &str) -> AppResult<MusicianProfile>;
}

/// Reads `<dir>/<profile_id>.json`
#[derive(Debug, Clone)]
pub struct JsonDirectoryProfileSource {
    root: PathBuf,
}

impl JsonDirectoryProfileSource {
    /// Create a source rooted at a directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory profiles are read from
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, profile_id: &str) -> AppResult<PathBuf> {
        let valid = !profile_id.is_empty()
            && profile_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(AppError::invalid_input(format!(
                "Invalid profile id: {profile_id:?}"
            )));
        }
        Ok(self.root.join(format!("{profile_id}.json")))
    }
}

impl ProfileSource for JsonDirectoryProfileSource {
    fn load(&self, profile_id: &str) -> AppResult<MusicianProfile> {
        let path = self.path_for(profile_id)?;
        debug!(profile_id, path = %path.display(), "loading profile");

        let mut profile = read_profile_file(&path)?;
        if profile.id.is_empty() {
            profile_id.clone_into(&mut profile.id);
        }
        Ok(profile)
    }
}

/// Decode a single profile file
///
/// # Errors
///
/// Returns `ResourceNotFound` when the file is missing, `StorageError` for other
/// I/O failures, and `SerializationError` when the JSON does not match the model.
pub fn read_profile_file(path: &Path) -> AppResult<MusicianProfile> {
    let raw = fs::read_to_string(path).map_err(|e| {
        let err = AppError::from(e);
        AppError::new(err.code, format!("{}: {}", path.display(), err.message))
    })?;
    let profile = serde_json::from_str(&raw)?;
    Ok(profile)
}
