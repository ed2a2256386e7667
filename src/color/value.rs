//! RGB color values and their textual/numeric encodings.
//!
//! A [`ColorValue`] is stored in *color-table order*: the layout of a native
//! palette entry, with red in the low byte and blue in bits 16-23. Textual and
//! packed-integer forms use the conventional `0xRRGGBB` order instead, so the
//! red/blue swap happens here and nowhere else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};

/// Largest conventional `0xRRGGBB` value.
const MAX_PACKED: i64 = 0x00ff_ffff;

/// Bits of a color-table entry that carry color data.
const COLORREF_MASK: u32 = 0x00ff_ffff;

/// Maximum number of hex digits accepted by [`ColorValue::from_hex_string`].
const MAX_HEX_DIGITS: usize = 8;

/// A validated RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorInput", into = "String")]
pub struct ColorValue {
    colorref: u32,
}

impl ColorValue {
    /// Build a color from in-range components (usable in constants).
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            colorref: (red as u32) | ((green as u32) << 8) | ((blue as u32) << 16),
        }
    }

    /// Build a color from three integers, each of which must be in `0..=255`.
    pub fn from_components(red: i64, green: i64, blue: i64) -> Result<Self> {
        let component = |value: i64| {
            u8::try_from(value).map_err(|_| {
                PaletteError::invalid_color(format!("{},{},{}", red, green, blue))
            })
        };

        Ok(Self::from_rgb(component(red)?, component(green)?, component(blue)?))
    }

    /// Build a color from a conventional `0xRRGGBB` integer.
    pub fn from_packed_int(value: i64) -> Result<Self> {
        if !(0..=MAX_PACKED).contains(&value) {
            return Err(PaletteError::invalid_color(value.to_string()));
        }

        Ok(Self {
            colorref: swap_red_and_blue(value as u32),
        })
    }

    /// Parse `#rrggbb` or `rrggbb` (any number of hex digits up to the 24-bit range).
    ///
    /// Surrounding whitespace and a single leading `#` are ignored. Anything that
    /// is not a hex digit is rejected.
    pub fn from_hex_string(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.is_empty()
            || digits.len() > MAX_HEX_DIGITS
            || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(PaletteError::invalid_color(input));
        }

        let value =
            u32::from_str_radix(digits, 16).map_err(|_| PaletteError::invalid_color(input))?;

        Self::from_packed_int(i64::from(value)).map_err(|_| PaletteError::invalid_color(input))
    }

    /// Decode a raw color-table entry. The unused top byte is discarded.
    pub fn from_colorref(raw: u32) -> Self {
        Self {
            colorref: raw & COLORREF_MASK,
        }
    }

    /// The color-table entry for this color.
    pub fn to_colorref(self) -> u32 {
        self.colorref
    }

    /// The conventional `0xRRGGBB` value for this color.
    pub fn to_packed_int(self) -> u32 {
        swap_red_and_blue(self.colorref)
    }

    /// Render as lowercase `#rrggbb`.
    pub fn to_hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
    }

    pub fn red(self) -> u8 {
        (self.colorref & 0xff) as u8
    }

    pub fn green(self) -> u8 {
        ((self.colorref >> 8) & 0xff) as u8
    }

    pub fn blue(self) -> u8 {
        ((self.colorref >> 16) & 0xff) as u8
    }

    /// Components as an `(r, g, b)` tuple.
    pub fn components(self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }
}

/// Exchange the low and high bytes of a 24-bit color.
fn swap_red_and_blue(value: u32) -> u32 {
    ((value & 0xff) << 16) | (value & 0xff00) | ((value & 0x00ff_0000) >> 16)
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

/// Parses `#rrggbb`, `rrggbb` or `r,g,b`.
impl FromStr for ColorValue {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        if !s.contains(',') {
            return Self::from_hex_string(s);
        }

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [red, green, blue] = parts.as_slice() else {
            return Err(PaletteError::invalid_color(s));
        };

        let component = |part: &str| {
            part.parse::<i64>()
                .map_err(|_| PaletteError::invalid_color(s))
        };

        Self::from_components(component(red)?, component(green)?, component(blue)?)
            .map_err(|_| PaletteError::invalid_color(s))
    }
}

impl From<ColorValue> for String {
    fn from(color: ColorValue) -> Self {
        color.to_hex_string()
    }
}

/// A color as written in a scheme file or JSON document.
///
/// Integers are conventional packed `0xRRGGBB` values, strings are parsed by
/// [`ColorValue::from_str`], and arrays must hold exactly three components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    Packed(i64),
    Text(String),
    Components(Vec<i64>),
}

impl TryFrom<ColorInput> for ColorValue {
    type Error = PaletteError;

    fn try_from(input: ColorInput) -> Result<Self> {
        match input {
            ColorInput::Packed(value) => Self::from_packed_int(value),
            ColorInput::Text(text) => text.parse(),
            ColorInput::Components(parts) => match parts.as_slice() {
                [red, green, blue] => Self::from_components(*red, *green, *blue),
                _ => Err(PaletteError::invalid_color(format!("{:?}", parts))),
            },
        }
    }
}
