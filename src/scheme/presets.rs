//! Built-in color scheme presets.

use super::{AttributePair, ColorScheme, SlotRef};
use crate::color::{ColorInput, ColorSlot};

/// Names accepted by [`builtin_preset`].
pub const PRESET_NAMES: &[&str] = &["campbell", "legacy", "powershell"];

struct Preset {
    name: &'static str,
    /// Conventional `0xRRGGBB` values in color-table order.
    colors: [u32; 16],
    text: (ColorSlot, ColorSlot),
    popup: (ColorSlot, ColorSlot),
}

/// Current Windows console default.
const CAMPBELL: Preset = Preset {
    name: "Campbell",
    colors: [
        0x0c0c0c, 0x0037da, 0x13a10e, 0x3a96dd, 0xc50f1f, 0x881798, 0xc19c00, 0xcccccc,
        0x767676, 0x3b78ff, 0x16c60c, 0x61d6d6, 0xe74856, 0xb4009e, 0xf9f1a5, 0xf2f2f2,
    ],
    text: (ColorSlot::Gray, ColorSlot::Black),
    popup: (ColorSlot::DarkMagenta, ColorSlot::White),
};

/// Pre-2017 console colors.
const LEGACY: Preset = Preset {
    name: "Legacy",
    colors: [
        0x000000, 0x000080, 0x008000, 0x008080, 0x800000, 0x800080, 0x808000, 0xc0c0c0,
        0x808080, 0x0000ff, 0x00ff00, 0x00ffff, 0xff0000, 0xff00ff, 0xffff00, 0xffffff,
    ],
    text: (ColorSlot::Gray, ColorSlot::Black),
    popup: (ColorSlot::DarkMagenta, ColorSlot::White),
};

/// Legacy colors with the Windows PowerShell shortcut's blue background.
const POWERSHELL: Preset = Preset {
    name: "PowerShell",
    colors: [
        0x000000, 0x000080, 0x008000, 0x008080, 0x800000, 0x012456, 0xeeedf0, 0xc0c0c0,
        0x808080, 0x0000ff, 0x00ff00, 0x00ffff, 0xff0000, 0xff00ff, 0xffff00, 0xffffff,
    ],
    text: (ColorSlot::DarkYellow, ColorSlot::DarkMagenta),
    popup: (ColorSlot::DarkCyan, ColorSlot::White),
};

/// Look up a built-in preset (case-insensitive).
pub fn builtin_preset(name: &str) -> Option<ColorScheme> {
    let preset = match name.to_ascii_lowercase().as_str() {
        "campbell" => &CAMPBELL,
        "legacy" => &LEGACY,
        "powershell" => &POWERSHELL,
        _ => return None,
    };
    Some(preset.to_scheme())
}

impl Preset {
    fn to_scheme(&self) -> ColorScheme {
        let pair = |(fg, bg): (ColorSlot, ColorSlot)| AttributePair {
            foreground: Some(SlotRef::Name(fg.name().to_string())),
            background: Some(SlotRef::Name(bg.name().to_string())),
        };

        ColorScheme {
            name: Some(self.name.to_string()),
            colors: ColorSlot::ALL
                .iter()
                .zip(self.colors)
                .map(|(slot, rgb)| {
                    (
                        slot.name().to_string(),
                        ColorInput::Text(format!("#{:06x}", rgb)),
                    )
                })
                .collect(),
            text: Some(pair(self.text)),
            popup: Some(pair(self.popup)),
        }
    }
}
