//! The 16 named palette slots of the console color table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PaletteError;

/// Number of entries in the console color table.
pub const SLOT_COUNT: usize = 16;

/// One of the 16 named entries of the console color table.
///
/// The discriminant is the slot's position in the native color table and
/// the value stored in an attribute nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ColorSlot {
    Black = 0,
    DarkBlue = 1,
    DarkGreen = 2,
    DarkCyan = 3,
    DarkRed = 4,
    DarkMagenta = 5,
    DarkYellow = 6,
    Gray = 7,
    DarkGray = 8,
    Blue = 9,
    Green = 10,
    Cyan = 11,
    Red = 12,
    Magenta = 13,
    Yellow = 14,
    White = 15,
}

impl ColorSlot {
    /// All slots in color-table order.
    pub const ALL: [ColorSlot; SLOT_COUNT] = [
        ColorSlot::Black,
        ColorSlot::DarkBlue,
        ColorSlot::DarkGreen,
        ColorSlot::DarkCyan,
        ColorSlot::DarkRed,
        ColorSlot::DarkMagenta,
        ColorSlot::DarkYellow,
        ColorSlot::Gray,
        ColorSlot::DarkGray,
        ColorSlot::Blue,
        ColorSlot::Green,
        ColorSlot::Cyan,
        ColorSlot::Red,
        ColorSlot::Magenta,
        ColorSlot::Yellow,
        ColorSlot::White,
    ];

    /// Position in the color table (0-15).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Slot at the given color-table position.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Canonical name, as used in scheme files and CLI output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::DarkBlue => "DarkBlue",
            Self::DarkGreen => "DarkGreen",
            Self::DarkCyan => "DarkCyan",
            Self::DarkRed => "DarkRed",
            Self::DarkMagenta => "DarkMagenta",
            Self::DarkYellow => "DarkYellow",
            Self::Gray => "Gray",
            Self::DarkGray => "DarkGray",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Cyan => "Cyan",
            Self::Red => "Red",
            Self::Magenta => "Magenta",
            Self::Yellow => "Yellow",
            Self::White => "White",
        }
    }

    /// Resolve a slot from its name (case-insensitive) or its index (`0`-`15`).
    pub fn parse(input: &str) -> Result<Self, PaletteError> {
        let trimmed = input.trim();

        if let Ok(index) = trimmed.parse::<i64>() {
            return u8::try_from(index)
                .ok()
                .and_then(Self::from_index)
                .ok_or_else(|| PaletteError::UnknownColorSlot {
                    name: input.to_string(),
                });
        }

        Self::ALL
            .iter()
            .copied()
            .find(|slot| slot.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PaletteError::UnknownColorSlot {
                name: input.to_string(),
            })
    }
}

impl fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSlot {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ColorSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ColorSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::parse(&name).map_err(serde::de::Error::custom)
    }
}
