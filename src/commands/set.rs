//! Set command handler

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};

use conpalette::cli::SetArgs;
use conpalette::device::{self, DeviceTarget};
use conpalette::merge::{parse_attribute_index, AttributeOverrides};
use conpalette::render::{self, RenderOptions};
use conpalette::scheme::{resolve_preset, ColorScheme};
use conpalette::theme::color_enabled;
use conpalette::{current_theme, plan_color_table, set_color_table, ColorValue, Config, MergeRequest};

/// Read, merge, correct and apply (or preview with `--dry-run`).
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &SetArgs, target: &DeviceTarget, config: &Config) -> Result<()> {
    let theme = current_theme();
    let request = build_request(args, config)?;
    let device = device::open(target);

    let outcome = if args.dry_run {
        plan_color_table(device.as_ref(), &request)
    } else {
        set_color_table(device.as_ref(), &request)
    }
    .with_context(|| format!("Could not update {}", device.describe()))?;

    let changes = render::render_changes(&outcome);
    if changes.is_empty() {
        println!("{}", theme.primary_text("Color table already matches; nothing changed."));
    } else {
        for line in &changes {
            println!("{}", theme.primary_text(line));
        }
    }

    if args.dry_run {
        println!("{}", theme.secondary_text("Dry run: nothing was written."));
    } else {
        println!(
            "{}",
            theme.success_text(&format!("Applied color table to {}.", device.describe()))
        );
    }

    if let Some(format) = args.format {
        let options = RenderOptions {
            swatches: config.output.swatches && color_enabled(),
        };
        print!("{}", render::render(&outcome.applied, format, options)?);
    }

    Ok(())
}

/// Turn the command-line arguments into a merge request.
///
/// Attribute options on the command line win over those in a scheme or preset.
fn build_request(args: &SetArgs, config: &Config) -> Result<MergeRequest> {
    let cli_overrides = AttributeOverrides {
        text_foreground: parse_override(args.text_foreground.as_deref())?,
        text_background: parse_override(args.text_background.as_deref())?,
        popup_foreground: parse_override(args.popup_foreground.as_deref())?,
        popup_background: parse_override(args.popup_background.as_deref())?,
    };

    let request = if let (Some(slot), Some(color)) = (&args.slot, &args.color) {
        MergeRequest::single_named(slot, color.parse::<ColorValue>()?)?
    } else if !args.map.is_empty() {
        let pairs = args
            .map
            .iter()
            .map(|entry| parse_map_entry(entry))
            .collect::<Result<Vec<_>>>()?;
        MergeRequest::bulk_named(pairs)?
    } else if let Some(path) = &args.scheme {
        ColorScheme::load(path)?.to_request()?
    } else if let Some(name) = &args.preset {
        resolve_preset(name, config.schemes.directory.as_deref())?.to_request()?
    } else if cli_overrides.is_empty() {
        bail!(
            "Nothing to set: use --slot/--color, --map, --scheme, --preset or an attribute option"
        );
    } else {
        MergeRequest::bulk(BTreeMap::new())
    };

    let overrides = request.overrides.overlay(cli_overrides);
    Ok(request.with_overrides(overrides))
}

fn parse_override(value: Option<&str>) -> Result<Option<u8>> {
    Ok(value.map(parse_attribute_index).transpose()?)
}

/// Split `SLOT=COLOR` and parse the color.
fn parse_map_entry(entry: &str) -> Result<(String, ColorValue)> {
    let Some((slot, color)) = entry.split_once('=') else {
        bail!("Invalid --map entry '{}' (expected SLOT=COLOR)", entry);
    };
    Ok((slot.trim().to_string(), color.parse()?))
}
