//! In-memory console screen-buffer configuration.
//!
//! [`ConsoleConfiguration`] mirrors the native screen-buffer record: the 16-entry
//! color table, the packed text and popup attribute words, and the buffer and
//! window geometry that is carried through untouched.

pub mod geometry;
pub mod record;

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::color::{ColorSlot, ColorValue, SLOT_COUNT};
use crate::error::{PaletteError, Result};

/// Keeps every bit except the foreground nibble.
const FOREGROUND_MASK: u16 = 0xfff0;
/// Keeps every bit except the background nibble.
const BACKGROUND_MASK: u16 = 0xff0f;
const BACKGROUND_SHIFT: u16 = 4;
const MAX_ATTRIBUTE_INDEX: u8 = 15;

/// A column/row pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Coord {
    pub x: i16,
    pub y: i16,
}

impl Coord {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// Window rectangle in buffer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WindowRect {
    pub left: i16,
    pub top: i16,
    pub right: i16,
    pub bottom: i16,
}

impl WindowRect {
    pub const fn new(left: i16, top: i16, right: i16, bottom: i16) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// A 16-bit character attribute word.
///
/// Bits 0-3 select the foreground slot, bits 4-7 the background slot. The high
/// byte holds other attribute flags and is never modified here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttributeWord(u16);

impl AttributeWord {
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u16 {
        self.0
    }

    pub fn foreground(self) -> ColorSlot {
        ColorSlot::ALL[usize::from(self.0 & 0x000f)]
    }

    pub fn background(self) -> ColorSlot {
        ColorSlot::ALL[usize::from((self.0 >> BACKGROUND_SHIFT) & 0x000f)]
    }

    /// Replace the foreground nibble, keeping every other bit.
    pub fn with_foreground(self, index: u8) -> Result<Self> {
        let index = checked_index(index)?;
        Ok(Self((self.0 & FOREGROUND_MASK) | index))
    }

    /// Replace the background nibble, keeping every other bit.
    pub fn with_background(self, index: u8) -> Result<Self> {
        let index = checked_index(index)?;
        Ok(Self((self.0 & BACKGROUND_MASK) | (index << BACKGROUND_SHIFT)))
    }
}

fn checked_index(index: u8) -> Result<u16> {
    if index > MAX_ATTRIBUTE_INDEX {
        return Err(PaletteError::InvalidAttributeIndex {
            index: i64::from(index),
        });
    }
    Ok(u16::from(index))
}

impl Serialize for AttributeWord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AttributeWord", 3)?;
        state.serialize_field("value", &self.0)?;
        state.serialize_field("foreground", &self.foreground())?;
        state.serialize_field("background", &self.background())?;
        state.end()
    }
}

/// A complete console screen-buffer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsoleConfiguration {
    pub buffer_size: Coord,
    pub cursor_position: Coord,
    pub text_attributes: AttributeWord,
    pub window: WindowRect,
    pub maximum_window_size: Coord,
    pub popup_attributes: AttributeWord,
    pub fullscreen_supported: bool,
    /// Color table, indexed by [`ColorSlot::index`].
    #[serde(serialize_with = "serialize_palette")]
    pub palette: [ColorValue; SLOT_COUNT],
}

impl ConsoleConfiguration {
    pub fn slot(&self, slot: ColorSlot) -> ColorValue {
        self.palette[usize::from(slot.index())]
    }

    pub fn set_slot(&mut self, slot: ColorSlot, color: ColorValue) {
        self.palette[usize::from(slot.index())] = color;
    }

    /// Look up a slot by name or index.
    pub fn slot_by_name(&self, name: &str) -> Result<ColorValue> {
        Ok(self.slot(ColorSlot::parse(name)?))
    }

    /// Overwrite a slot given by name or index.
    pub fn set_slot_by_name(&mut self, name: &str, color: ColorValue) -> Result<()> {
        let slot = ColorSlot::parse(name)?;
        self.set_slot(slot, color);
        Ok(())
    }

    /// All slots with their colors, in color-table order.
    pub fn slots(&self) -> impl Iterator<Item = (ColorSlot, ColorValue)> + '_ {
        ColorSlot::ALL.iter().copied().zip(self.palette.iter().copied())
    }

    pub fn with_text_foreground(mut self, index: u8) -> Result<Self> {
        self.text_attributes = self.text_attributes.with_foreground(index)?;
        Ok(self)
    }

    pub fn with_text_background(mut self, index: u8) -> Result<Self> {
        self.text_attributes = self.text_attributes.with_background(index)?;
        Ok(self)
    }

    pub fn with_popup_foreground(mut self, index: u8) -> Result<Self> {
        self.popup_attributes = self.popup_attributes.with_foreground(index)?;
        Ok(self)
    }

    pub fn with_popup_background(mut self, index: u8) -> Result<Self> {
        self.popup_attributes = self.popup_attributes.with_background(index)?;
        Ok(self)
    }

    /// Slots whose color differs between `self` and `other`.
    pub fn changed_slots(&self, other: &ConsoleConfiguration) -> Vec<ColorSlot> {
        ColorSlot::ALL
            .iter()
            .copied()
            .filter(|slot| self.slot(*slot) != other.slot(*slot))
            .collect()
    }
}

fn serialize_palette<S: Serializer>(
    palette: &[ColorValue; SLOT_COUNT],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(ColorSlot::ALL.iter().zip(palette.iter()))
}
