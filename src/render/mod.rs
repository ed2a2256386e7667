//! Output rendering for configurations.

use anyhow::{Context, Result};
use crossterm::style::{Color, Stylize};
use serde::{Deserialize, Serialize};

use crate::console::{AttributeWord, ConsoleConfiguration};
use crate::scheme::ColorScheme;
use crate::table::SetOutcome;

/// Output format for `get` and `set --format`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Text,
    /// JSON document
    Json,
    /// Color scheme file, reusable with `set --scheme`
    Toml,
}

/// Options for text rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Append a true-color swatch to each palette entry.
    pub swatches: bool,
}

/// Render a configuration in the requested format.
pub fn render(
    config: &ConsoleConfiguration,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(config, options)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(config).context("Failed to serialize configuration")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Toml => ColorScheme::from_configuration(config, None)
            .to_toml()
            .context("Failed to serialize configuration"),
    }
}

/// Slot table followed by attributes and geometry.
pub fn render_text(config: &ConsoleConfiguration, options: RenderOptions) -> String {
    let mut out = String::new();

    out.push_str(" #  Slot         Color\n");
    for (slot, color) in config.slots() {
        let mut line = format!("{:>2}  {:<12} {}", slot.index(), slot.name(), color);
        if options.swatches {
            let (r, g, b) = color.components();
            line.push(' ');
            line.push_str(&"    ".on(Color::Rgb { r, g, b }).to_string());
        }
        out.push_str(&line);
        out.push('\n');
    }

    let window = config.window;
    out.push('\n');
    out.push_str(&format!(
        "Text attributes:   {}\n",
        describe_attributes(config.text_attributes)
    ));
    out.push_str(&format!(
        "Popup attributes:  {}\n",
        describe_attributes(config.popup_attributes)
    ));
    out.push_str(&format!(
        "Window:            left {}, top {}, right {}, bottom {}\n",
        window.left, window.top, window.right, window.bottom
    ));
    out.push_str(&format!(
        "Buffer size:       {} x {}\n",
        config.buffer_size.x, config.buffer_size.y
    ));
    out.push_str(&format!(
        "Cursor position:   {}, {}\n",
        config.cursor_position.x, config.cursor_position.y
    ));
    out.push_str(&format!(
        "Max window size:   {} x {}\n",
        config.maximum_window_size.x, config.maximum_window_size.y
    ));
    out.push_str(&format!(
        "Fullscreen:        {}\n",
        if config.fullscreen_supported {
            "supported"
        } else {
            "not supported"
        }
    ));

    out
}

/// `0x0007 (Gray on Black)`
pub fn describe_attributes(word: AttributeWord) -> String {
    format!(
        "{:#06x} ({} on {})",
        word.raw(),
        word.foreground(),
        word.background()
    )
}

/// One line per changed slot or attribute word; empty when nothing changed.
pub fn render_changes(outcome: &SetOutcome) -> Vec<String> {
    let mut lines: Vec<String> = outcome
        .changed_slots()
        .into_iter()
        .map(|slot| {
            format!(
                "{:<12} {} -> {}",
                slot.name(),
                outcome.previous.slot(slot),
                outcome.applied.slot(slot)
            )
        })
        .collect();

    if outcome.text_attributes_changed() {
        lines.push(format!(
            "{:<12} {} -> {}",
            "Text",
            describe_attributes(outcome.previous.text_attributes),
            describe_attributes(outcome.applied.text_attributes)
        ));
    }
    if outcome.popup_attributes_changed() {
        lines.push(format!(
            "{:<12} {} -> {}",
            "Popup",
            describe_attributes(outcome.previous.popup_attributes),
            describe_attributes(outcome.applied.popup_attributes)
        ));
    }

    lines
}
