//! Presets command handler

use anyhow::Result;
use crossterm::style::{Color, Stylize};

use conpalette::color::ColorInput;
use conpalette::scheme::{builtin_preset, PRESET_NAMES};
use conpalette::theme::color_enabled;
use conpalette::{current_theme, ColorValue};

/// List the built-in presets with their palettes.
#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    let theme = current_theme();
    let swatches = color_enabled();

    for name in PRESET_NAMES {
        let Some(scheme) = builtin_preset(name) else {
            continue;
        };
        let title = scheme.name.as_deref().unwrap_or(name);
        println!("{}  {}", theme.accent_text(name), theme.secondary_text(title));
        println!("    {}", palette_line(&scheme.colors, swatches)?);
    }

    println!();
    println!(
        "{}",
        theme.secondary_text("Apply one with: conpalette set --preset <NAME>")
    );
    Ok(())
}

/// One line of hex values, or colored blocks when the terminal supports it.
fn palette_line(colors: &[(String, ColorInput)], swatches: bool) -> Result<String> {
    let values = colors
        .iter()
        .map(|(_, input)| ColorValue::try_from(input.clone()))
        .collect::<Result<Vec<_>, _>>()?;

    let line = values
        .iter()
        .map(|color| {
            if swatches {
                let (r, g, b) = color.components();
                "  ".on(Color::Rgb { r, g, b }).to_string()
            } else {
                color.to_hex_string()
            }
        })
        .collect::<Vec<_>>();

    Ok(line.join(if swatches { "" } else { " " }))
}
