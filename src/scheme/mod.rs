//! Color scheme files.
//!
//! A scheme is a TOML document naming colors for any subset of the 16 slots,
//! optionally with default text and popup attributes:
//!
//! ```toml
//! name = "Campbell"
//!
//! [colors]
//! Black = "#0c0c0c"
//! Red = [231, 72, 86]
//! White = 15921906
//!
//! [text]
//! foreground = "Gray"
//! background = "Black"
//!
//! [popup]
//! foreground = 5
//! background = "White"
//! ```

mod presets;

pub use presets::{builtin_preset, PRESET_NAMES};

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::{ColorInput, ColorValue};
use crate::console::{AttributeWord, ConsoleConfiguration};
use crate::error::PaletteError;
use crate::merge::{attribute_index, parse_attribute_index, AttributeOverrides, MergeRequest};

/// Errors from loading or writing scheme files.
#[derive(Debug, thiserror::Error)]
pub enum SchemeError {
    #[error("Scheme file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read scheme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse scheme: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize scheme: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown preset '{name}' (available: {available})")]
    UnknownPreset { name: String, available: String },
}

/// A slot reference in a scheme file: index or name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotRef {
    Index(i64),
    Name(String),
}

impl SlotRef {
    fn to_index(&self) -> Result<u8, PaletteError> {
        match self {
            Self::Index(index) => attribute_index(*index),
            Self::Name(name) => parse_attribute_index(name),
        }
    }
}

/// Foreground/background pair for one attribute word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributePair {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<SlotRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<SlotRef>,
}

impl AttributePair {
    fn from_word(word: AttributeWord) -> Self {
        Self {
            foreground: Some(SlotRef::Name(word.foreground().name().to_string())),
            background: Some(SlotRef::Name(word.background().name().to_string())),
        }
    }
}

/// A named set of slot colors and attribute defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Slot colors in file order. Keys are resolved when the scheme is applied.
    #[serde(default, with = "ordered_colors")]
    pub colors: Vec<(String, ColorInput)>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<AttributePair>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popup: Option<AttributePair>,
}

impl ColorScheme {
    /// Load a scheme from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SchemeError> {
        if !path.exists() {
            return Err(SchemeError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| SchemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, SchemeError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, SchemeError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Export the palette and attributes of a configuration.
    pub fn from_configuration(config: &ConsoleConfiguration, name: Option<String>) -> Self {
        Self {
            name,
            colors: config
                .slots()
                .map(|(slot, color)| (slot.name().to_string(), ColorInput::Text(color.to_hex_string())))
                .collect(),
            text: Some(AttributePair::from_word(config.text_attributes)),
            popup: Some(AttributePair::from_word(config.popup_attributes)),
        }
    }

    /// Attribute overrides named by the scheme.
    pub fn overrides(&self) -> Result<AttributeOverrides, PaletteError> {
        let index = |slot: Option<&SlotRef>| slot.map(SlotRef::to_index).transpose();
        let text = self.text.clone().unwrap_or_default();
        let popup = self.popup.clone().unwrap_or_default();

        Ok(AttributeOverrides {
            text_foreground: index(text.foreground.as_ref())?,
            text_background: index(text.background.as_ref())?,
            popup_foreground: index(popup.foreground.as_ref())?,
            popup_background: index(popup.background.as_ref())?,
        })
    }

    /// Turn the scheme into a bulk merge request.
    ///
    /// Every color and slot is validated; the first problem is returned.
    pub fn to_request(&self) -> Result<MergeRequest, PaletteError> {
        let pairs = self
            .colors
            .iter()
            .map(|(name, input)| Ok((name.as_str(), ColorValue::try_from(input.clone())?)))
            .collect::<Result<Vec<_>, PaletteError>>()?;

        Ok(MergeRequest::bulk_named(pairs)?.with_overrides(self.overrides()?))
    }
}

/// Find a preset by name: `<name>.toml` in `schemes_dir` first, then the built-ins.
pub fn resolve_preset(name: &str, schemes_dir: Option<&Path>) -> Result<ColorScheme, SchemeError> {
    if let Some(dir) = schemes_dir {
        let path = dir.join(format!("{}.toml", name));
        if path.exists() {
            return ColorScheme::load(&path);
        }
    }

    builtin_preset(name).ok_or_else(|| SchemeError::UnknownPreset {
        name: name.to_string(),
        available: PRESET_NAMES.join(", "),
    })
}

/// (De)serializes `Vec<(String, ColorInput)>` as a TOML table, keeping order.
mod ordered_colors {
    use super::*;

    pub fn serialize<S: Serializer>(
        colors: &[(String, ColorInput)],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(colors.iter().map(|(k, v)| (k, v)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, ColorInput)>, D::Error> {
        struct ColorsVisitor;

        impl<'de> Visitor<'de> for ColorsVisitor {
            type Value = Vec<(String, ColorInput)>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of slot names to colors")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut colors = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, ColorInput>()? {
                    colors.push(entry);
                }
                Ok(colors)
            }
        }

        deserializer.deserialize_map(ColorsVisitor)
    }
}
