//! Palette operation errors.

/// Errors that can occur while building, merging or applying a color table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("Invalid color value '{input}' (expected #rrggbb, r,g,b or 0-16777215)")]
    InvalidColorValue { input: String },

    #[error("Unknown color slot '{name}' (expected one of Black, DarkBlue, DarkGreen, DarkCyan, DarkRed, DarkMagenta, DarkYellow, Gray, DarkGray, Blue, Green, Cyan, Red, Magenta, Yellow, White)")]
    UnknownColorSlot { name: String },

    #[error("Attribute index {index} is out of range (expected 0-15)")]
    InvalidAttributeIndex { index: i64 },

    #[error("Color slot {slot} is assigned more than once")]
    DuplicateColorSlot { slot: &'static str },

    #[error("Failed to read console configuration: {reason}")]
    ConfigurationReadFailed { reason: String },

    #[error("Failed to apply console configuration: {reason}")]
    ConfigurationWriteFailed { reason: String },
}

impl PaletteError {
    pub(crate) fn invalid_color(input: impl Into<String>) -> Self {
        Self::InvalidColorValue {
            input: input.into(),
        }
    }

    /// Whether the error was caused by user input rather than the device.
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            Self::ConfigurationReadFailed { .. } | Self::ConfigurationWriteFailed { .. }
        )
    }
}

/// Result alias for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;
