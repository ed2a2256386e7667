//! Get command handler

use anyhow::{Context, Result};

use conpalette::cli::GetArgs;
use conpalette::device::{self, DeviceTarget};
use conpalette::render::{self, RenderOptions};
use conpalette::theme::color_enabled;
use conpalette::{get_color_table, Config};

/// Print the device's configuration exactly as read.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &GetArgs, target: &DeviceTarget, config: &Config) -> Result<()> {
    let device = device::open(target);
    let current = get_color_table(device.as_ref())
        .with_context(|| format!("Could not read {}", device.describe()))?;

    let format = args.format.unwrap_or(config.output.format);
    let options = RenderOptions {
        swatches: config.output.swatches && !args.no_swatches && color_enabled(),
    };

    print!("{}", render::render(&current, format, options)?);
    Ok(())
}
