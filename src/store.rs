//! Persistence collaborator for the scene config.
//!
//! The config is a single mutable JSON document with last-write-wins
//! semantics and no schema version. Saves are whole-document replacements:
//! the new document is written to a sibling temp file and renamed over the
//! old one under a lock, so concurrent writers serialize and no reader ever
//! observes a torn file. Loading uses the tolerant reader pattern: a missing
//! document is created with defaults, and an unreadable one falls back to
//! defaults with a warning instead of failing the request.

use crate::error::ValidationError;
use crate::scene::config::SceneConfig;
use log::warn;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("config serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid scene config: {0}")]
    Invalid(#[from] ValidationError),
}

pub struct ConfigStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ConfigStore {
    /// Opens a store backed by the given document path. Nothing is touched
    /// on disk until the first load or save.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        ConfigStore {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the current persisted document.
    ///
    /// A missing document (first run) is created with defaults. A document
    /// that no longer parses yields defaults with a warning; individual
    /// missing fields are filled in by the serde defaults on `SceneConfig`.
    pub fn load(&self) -> Result<SceneConfig, StoreError> {
        if !self.path.exists() {
            let config = SceneConfig::default();
            self.save(&config)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(err) => {
                warn!(
                    "failed to parse config {}: {}, using defaults",
                    self.path.display(),
                    err
                );
                Ok(SceneConfig::default())
            }
        }
    }

    /// Validates and persists the document atomically, returning the stored
    /// config. No field is normalized at save time; in particular the
    /// auto-center sentinel is written through untouched.
    pub fn save(&self, config: &SceneConfig) -> Result<SceneConfig, StoreError> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;

        // A poisoned lock only means another writer panicked mid-save; the
        // document itself is still consistent thanks to the rename.
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        Ok(config.clone())
    }
}
