//! Color table merging.
//!
//! A [`MergeRequest`] carries either one slot assignment or a map of them, plus
//! up to four attribute-nibble overrides. [`merge`] validates the whole request
//! and only then applies it to a copy of the base configuration, so a rejected
//! request never yields a partially updated palette.

use std::collections::BTreeMap;

use tracing::debug;

use crate::color::{ColorSlot, ColorValue};
use crate::console::ConsoleConfiguration;
use crate::error::{PaletteError, Result};

const MAX_ATTRIBUTE_INDEX: i64 = 15;

/// The slot assignments of a request.
///
/// Single and bulk forms are separate variants, so a request can never carry
/// both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    /// Overwrite exactly one slot.
    Single { slot: ColorSlot, color: ColorValue },
    /// Overwrite every slot in the map; other slots keep their color.
    Bulk(BTreeMap<ColorSlot, ColorValue>),
}

impl Assignment {
    /// The (slot, color) pairs this assignment writes, in slot order.
    pub fn pairs(&self) -> Vec<(ColorSlot, ColorValue)> {
        match self {
            Self::Single { slot, color } => vec![(*slot, *color)],
            Self::Bulk(map) => map.iter().map(|(slot, color)| (*slot, *color)).collect(),
        }
    }
}

/// Optional replacements for the attribute-word nibbles.
///
/// Values are slot indices; anything above 15 is rejected by [`merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeOverrides {
    pub text_foreground: Option<u8>,
    pub text_background: Option<u8>,
    pub popup_foreground: Option<u8>,
    pub popup_background: Option<u8>,
}

impl AttributeOverrides {
    pub fn is_empty(&self) -> bool {
        self.text_foreground.is_none()
            && self.text_background.is_none()
            && self.popup_foreground.is_none()
            && self.popup_background.is_none()
    }

    /// Combine with `top`; every override present in `top` wins.
    pub fn overlay(self, top: AttributeOverrides) -> Self {
        Self {
            text_foreground: top.text_foreground.or(self.text_foreground),
            text_background: top.text_background.or(self.text_background),
            popup_foreground: top.popup_foreground.or(self.popup_foreground),
            popup_background: top.popup_background.or(self.popup_background),
        }
    }

    fn validate(&self) -> Result<()> {
        for index in [
            self.text_foreground,
            self.text_background,
            self.popup_foreground,
            self.popup_background,
        ]
        .into_iter()
        .flatten()
        {
            attribute_index(i64::from(index))?;
        }
        Ok(())
    }
}

/// Check that an integer is a valid attribute index (0-15).
pub fn attribute_index(value: i64) -> Result<u8> {
    if (0..=MAX_ATTRIBUTE_INDEX).contains(&value) {
        Ok(value as u8)
    } else {
        Err(PaletteError::InvalidAttributeIndex { index: value })
    }
}

/// Parse an attribute override given as an index or a slot name.
///
/// Numbers outside 0-15 fail with `InvalidAttributeIndex`; unknown names fail
/// with `UnknownColorSlot`.
pub fn parse_attribute_index(input: &str) -> Result<u8> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return ColorSlot::parse(input).map(ColorSlot::index);
    }

    // Too many digits for i64: report it saturated, still out of range.
    let value = trimmed.parse::<i64>().unwrap_or(if trimmed.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    });
    attribute_index(value)
}

/// A full request to change the color table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    pub assignment: Assignment,
    pub overrides: AttributeOverrides,
}

impl MergeRequest {
    pub fn single(slot: ColorSlot, color: ColorValue) -> Self {
        Self {
            assignment: Assignment::Single { slot, color },
            overrides: AttributeOverrides::default(),
        }
    }

    /// Single assignment with the slot given by name or index.
    pub fn single_named(name: &str, color: ColorValue) -> Result<Self> {
        Ok(Self::single(ColorSlot::parse(name)?, color))
    }

    pub fn bulk(colors: BTreeMap<ColorSlot, ColorValue>) -> Self {
        Self {
            assignment: Assignment::Bulk(colors),
            overrides: AttributeOverrides::default(),
        }
    }

    /// Bulk assignment from (name, color) pairs.
    ///
    /// Every name must resolve to a slot, and no two names may resolve to the
    /// same slot.
    pub fn bulk_named<I, K>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, ColorValue)>,
        K: AsRef<str>,
    {
        let mut colors = BTreeMap::new();
        for (name, color) in pairs {
            let slot = ColorSlot::parse(name.as_ref())?;
            if colors.insert(slot, color).is_some() {
                return Err(PaletteError::DuplicateColorSlot { slot: slot.name() });
            }
        }
        Ok(Self::bulk(colors))
    }

    pub fn with_overrides(mut self, overrides: AttributeOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Apply `request` to a copy of `base`.
///
/// Fails with `InvalidAttributeIndex` before touching anything if any override
/// is out of range. Fields the request does not address are carried through.
pub fn merge(base: &ConsoleConfiguration, request: &MergeRequest) -> Result<ConsoleConfiguration> {
    request.overrides.validate()?;

    let mut merged = base.clone();

    for (slot, color) in request.assignment.pairs() {
        debug!(%slot, from = %base.slot(slot), to = %color, "assigning slot");
        merged.set_slot(slot, color);
    }

    let overrides = &request.overrides;
    if let Some(index) = overrides.text_foreground {
        merged = merged.with_text_foreground(index)?;
    }
    if let Some(index) = overrides.text_background {
        merged = merged.with_text_background(index)?;
    }
    if let Some(index) = overrides.popup_foreground {
        merged = merged.with_popup_foreground(index)?;
    }
    if let Some(index) = overrides.popup_background {
        merged = merged.with_popup_background(index)?;
    }

    Ok(merged)
}
