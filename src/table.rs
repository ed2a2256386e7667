//! Get and set operations on a console's color table.
//!
//! `get` reads and returns the device's configuration as-is. `set` reads,
//! merges, corrects the window geometry and applies the result. Each device is
//! read at most once and written at most once.

use tracing::{debug, info};

use crate::color::ColorSlot;
use crate::console::geometry::correct_for_apply;
use crate::console::ConsoleConfiguration;
use crate::device::{ConfigurationSink, ConfigurationSource};
use crate::error::{PaletteError, Result};
use crate::merge::{merge, MergeRequest};

/// Result of a set (or dry-run) operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetOutcome {
    /// Configuration as read from the device.
    pub previous: ConsoleConfiguration,
    /// Configuration handed to the sink, geometry correction included.
    pub applied: ConsoleConfiguration,
}

impl SetOutcome {
    /// Slots whose color changed.
    pub fn changed_slots(&self) -> Vec<ColorSlot> {
        self.previous.changed_slots(&self.applied)
    }

    pub fn text_attributes_changed(&self) -> bool {
        self.previous.text_attributes != self.applied.text_attributes
    }

    pub fn popup_attributes_changed(&self) -> bool {
        self.previous.popup_attributes != self.applied.popup_attributes
    }
}

/// Read the current configuration without modification.
pub fn get_color_table<S>(source: &S) -> Result<ConsoleConfiguration>
where
    S: ConfigurationSource + ?Sized,
{
    source
        .read_configuration()
        .map_err(|e| PaletteError::ConfigurationReadFailed {
            reason: e.to_string(),
        })
}

/// Compute what [`set_color_table`] would apply, without writing.
pub fn plan_color_table<S>(source: &S, request: &MergeRequest) -> Result<SetOutcome>
where
    S: ConfigurationSource + ?Sized,
{
    let previous = get_color_table(source)?;
    let merged = merge(&previous, request)?;
    let applied = correct_for_apply(merged);
    debug!(?request, "planned color table update");

    Ok(SetOutcome { previous, applied })
}

/// Read, merge, correct and apply.
///
/// Nothing is written if the read or the merge fails. A failed write is
/// reported as `ConfigurationWriteFailed` and not retried.
pub fn set_color_table<D>(device: &D, request: &MergeRequest) -> Result<SetOutcome>
where
    D: ConfigurationSource + ConfigurationSink + ?Sized,
{
    let outcome = plan_color_table(device, request)?;

    device
        .apply_configuration(&outcome.applied)
        .map_err(|e| PaletteError::ConfigurationWriteFailed {
            reason: e.to_string(),
        })?;

    info!(
        changed_slots = outcome.changed_slots().len(),
        "applied color table"
    );
    Ok(outcome)
}
