//! Application configuration.
//!
//! Stored as TOML at `<config dir>/conpalette/config.toml`. Set
//! `CONPALETTE_CONFIG_DIR` to use another directory. Every section has
//! defaults, so a partial (or missing) file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item};

use crate::device::StdStream;
use crate::render::OutputFormat;

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "CONPALETTE_CONFIG_DIR";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub device: DeviceConfig,
    pub schemes: SchemesConfig,
}

/// How `get` and `set` print configurations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format for `get`
    pub format: OutputFormat,
    /// Show true-color swatches next to hex values
    pub swatches: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            swatches: true,
        }
    }
}

/// Which device to use when no flag is given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Standard stream whose screen buffer is used
    pub stream: StdStream,
    /// Snapshot file to use instead of the live console
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<PathBuf>,
}

/// Where user presets live.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemesConfig {
    /// Directory searched for `<name>.toml` by `set --preset`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Config {
    /// Directory holding the configuration file.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("conpalette"))
    }

    /// Full path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load the configuration, falling back to defaults if the file is missing.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Write the configuration to its default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// Outcome of [`migrate_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateResult {
    /// Updated file content (existing content and comments preserved).
    pub content: String,
    /// Added fields as `section.key`.
    pub added_fields: Vec<String>,
    /// Sections that were missing entirely.
    pub sections_added: Vec<String>,
    /// `section.key = value` for each added field, in the order added.
    pub added_lines: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add fields present in the default configuration but missing from `content`.
///
/// Existing values, ordering and comments are kept. Optional fields without a
/// default value are never added.
pub fn migrate_config(content: &str) -> Result<MigrateResult> {
    let mut doc: DocumentMut = content.parse().context("Failed to parse config file")?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())
        .context("Failed to serialize default config")?
        .parse()
        .context("Failed to parse default config")?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();
    let mut added_lines = Vec::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };
        if default_table.is_empty() {
            continue;
        }

        if !doc.contains_key(section) {
            doc.insert(section, Item::Table(default_table.clone()));
            sections_added.push(section.to_string());
            for (key, value) in default_table.iter() {
                added_fields.push(format!("{}.{}", section, key));
                added_lines.push(entry_line(section, key, value));
            }
            continue;
        }

        let Some(table) = doc.get_mut(section).and_then(Item::as_table_mut) else {
            tracing::warn!(section, "config section is not a table; leaving it alone");
            continue;
        };
        for (key, value) in default_table.iter() {
            if !table.contains_key(key) {
                table.insert(key, value.clone());
                added_fields.push(format!("{}.{}", section, key));
                added_lines.push(entry_line(section, key, value));
            }
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
        added_lines,
    })
}

fn entry_line(section: &str, key: &str, value: &Item) -> String {
    format!("{}.{} = {}", section, key, value.to_string().trim())
}
