//! Console device errors.

use std::path::PathBuf;

use crate::console::record::RecordError;

/// Errors raised by a console device while reading or applying a configuration.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("Snapshot file not found: {path}")]
    SnapshotNotFound { path: PathBuf },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot {path}: {source}")]
    InvalidSnapshot {
        path: PathBuf,
        #[source]
        source: RecordError,
    },

    #[error("No console is attached to {stream}")]
    NoConsole { stream: &'static str },

    #[error("{call} failed with error code {code}")]
    Win32 { call: &'static str, code: u32 },

    #[error("Live console access is only supported on Windows; use --snapshot FILE")]
    UnsupportedPlatform,
}
