//! Console devices: where configurations are read from and applied to.
//!
//! The rest of the crate only sees the [`ConfigurationSource`] and
//! [`ConfigurationSink`] traits. The device for an invocation is chosen once,
//! from a [`DeviceTarget`], and passed in explicitly.

mod error;
mod snapshot;
#[cfg(windows)]
mod win32;

pub use error::DeviceError;
pub use snapshot::SnapshotFile;
#[cfg(windows)]
pub use win32::Win32Console;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::DeviceConfig;
use crate::console::ConsoleConfiguration;

/// Supplies the current console configuration.
pub trait ConfigurationSource {
    /// Read the configuration. Either fully succeeds or fails without side effects.
    fn read_configuration(&self) -> Result<ConsoleConfiguration, DeviceError>;
}

/// Applies a console configuration.
pub trait ConfigurationSink {
    /// Apply the configuration as given; no correction happens here.
    fn apply_configuration(&self, config: &ConsoleConfiguration) -> Result<(), DeviceError>;
}

/// A device that can be both read and written.
pub trait ConsoleDevice: ConfigurationSource + ConfigurationSink {
    /// Human-readable description for logs and messages.
    fn describe(&self) -> String;
}

/// Standard stream whose screen buffer is addressed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StdStream {
    #[default]
    Stdout,
    Stderr,
}

impl StdStream {
    pub fn name(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

impl fmt::Display for StdStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which device an invocation talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceTarget {
    Console(StdStream),
    Snapshot(PathBuf),
}

impl DeviceTarget {
    /// Combine command-line flags with configured defaults.
    ///
    /// A snapshot path (flag first, then config) wins over the live console.
    pub fn resolve(
        snapshot: Option<&Path>,
        stream: Option<StdStream>,
        config: &DeviceConfig,
    ) -> Self {
        match snapshot.or(config.snapshot.as_deref()) {
            Some(path) => Self::Snapshot(path.to_path_buf()),
            None => Self::Console(stream.unwrap_or(config.stream)),
        }
    }
}

/// Open the device for `target`.
pub fn open(target: &DeviceTarget) -> Box<dyn ConsoleDevice> {
    match target {
        DeviceTarget::Snapshot(path) => Box::new(SnapshotFile::new(path)),
        DeviceTarget::Console(stream) => console(*stream),
    }
}

#[cfg(windows)]
fn console(stream: StdStream) -> Box<dyn ConsoleDevice> {
    Box::new(Win32Console::new(stream))
}

#[cfg(not(windows))]
fn console(stream: StdStream) -> Box<dyn ConsoleDevice> {
    Box::new(UnavailableConsole { stream })
}

/// Stand-in for the live console on platforms without one; every call fails.
#[cfg(not(windows))]
#[derive(Debug, Clone, Copy)]
struct UnavailableConsole {
    stream: StdStream,
}

#[cfg(not(windows))]
impl ConfigurationSource for UnavailableConsole {
    fn read_configuration(&self) -> Result<ConsoleConfiguration, DeviceError> {
        Err(DeviceError::UnsupportedPlatform)
    }
}

#[cfg(not(windows))]
impl ConfigurationSink for UnavailableConsole {
    fn apply_configuration(&self, _config: &ConsoleConfiguration) -> Result<(), DeviceError> {
        Err(DeviceError::UnsupportedPlatform)
    }
}

#[cfg(not(windows))]
impl ConsoleDevice for UnavailableConsole {
    fn describe(&self) -> String {
        format!("console ({})", self.stream)
    }
}
