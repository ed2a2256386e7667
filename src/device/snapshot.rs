//! File-backed console device.
//!
//! Stores the configuration as a binary screen-buffer record, so a snapshot
//! taken from one console can be inspected, edited and replayed elsewhere.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::DeviceError;
use super::{ConfigurationSink, ConfigurationSource, ConsoleDevice};
use crate::console::record;
use crate::console::ConsoleConfiguration;

/// A console device backed by a snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> DeviceError {
        DeviceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ConfigurationSource for SnapshotFile {
    fn read_configuration(&self) -> Result<ConsoleConfiguration, DeviceError> {
        if !self.path.exists() {
            return Err(DeviceError::SnapshotNotFound {
                path: self.path.clone(),
            });
        }

        let bytes = fs::read(&self.path).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), len = bytes.len(), "read snapshot");

        record::decode(&bytes).map_err(|source| DeviceError::InvalidSnapshot {
            path: self.path.clone(),
            source,
        })
    }
}

impl ConfigurationSink for SnapshotFile {
    fn apply_configuration(&self, config: &ConsoleConfiguration) -> Result<(), DeviceError> {
        let bytes = record::encode(config);
        fs::write(&self.path, bytes).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), "wrote snapshot");
        Ok(())
    }
}

impl ConsoleDevice for SnapshotFile {
    fn describe(&self) -> String {
        format!("snapshot {}", self.path.display())
    }
}
