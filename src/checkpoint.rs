//! Persistent record of the last upload status of every asset.
//!
//! The checkpoint file is a flat JSON object mapping asset names to HTTP
//! status codes:
//!
//! ```json
//! { "0001": 200, "0002": 500 }
//! ```
//!
//! It is read once when a run starts and rewritten in full when it ends.

use crate::error::UploadError;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;
use tracing::warn;

/// The default checkpoint file name, relative to the working directory.
pub const DEFAULT_CHECKPOINT_FILE: &str = "processed.json";

/// Maps asset names to the HTTP status code of their most recent upload attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checkpoint {
    entries: BTreeMap<String, u16>,
}

impl Checkpoint {
    /// Creates an empty checkpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a checkpoint from `path`.
    ///
    /// A missing file yields an empty checkpoint.
    ///
    /// # Errors
    ///
    /// - `UploadError::File` if the file exists but cannot be read.
    /// - `UploadError::InvalidJson` if it is not a JSON object of status codes.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, UploadError> {
        let path = path.as_ref();
        let content = match std::fs::read(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("No checkpoint found at {}, starting fresh", path.display());
                return Ok(Self::new());
            }
            Err(e) => return Err(UploadError::file(path, e)),
        };

        let entries = serde_json::from_slice(&content).map_err(|source| UploadError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { entries })
    }

    /// Writes the checkpoint to `path`, replacing any existing file.
    ///
    /// The content goes to a temporary file in the same directory first and
    /// is then renamed over `path`, so readers never observe a partial file.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::File` if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), UploadError> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let content = serde_json::to_vec_pretty(&self.entries).map_err(|source| {
            UploadError::InvalidJson {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| UploadError::file(dir, e))?;
        file.write_all(&content)
            .map_err(|e| UploadError::file(file.path(), e))?;
        file.persist(path)
            .map_err(|e| UploadError::file(path, e.error))?;
        Ok(())
    }

    /// Records the status code of an upload attempt, replacing any earlier one.
    pub fn record(&mut self, name: impl Into<String>, status: u16) {
        self.entries.insert(name.into(), status);
    }

    /// Returns the last recorded status code for `name`.
    pub fn status(&self, name: &str) -> Option<u16> {
        self.entries.get(name).copied()
    }

    /// Returns `true` if the last attempt for `name` succeeded (2xx).
    ///
    /// Assets that were never attempted, or whose last attempt failed, are
    /// uploaded again on the next run.
    pub fn is_uploaded(&self, name: &str) -> bool {
        self.status(name).is_some_and(is_success)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, status)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> {
        self.entries.iter().map(|(name, status)| (name.as_str(), *status))
    }
}

pub(crate) fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
