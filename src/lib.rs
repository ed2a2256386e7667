//! conpalette - read and rewrite a console window's color table.
//!
//! The core is a pure pipeline over [`ConsoleConfiguration`]:
//! read it from a device, [`merge`] a [`MergeRequest`] into it, widen the window
//! rectangle with [`console::geometry::correct_for_apply`] and hand it back to
//! the device. Devices are explicit values implementing
//! [`device::ConfigurationSource`] and [`device::ConfigurationSink`].

pub mod cli;
pub mod color;
pub mod config;
pub mod console;
pub mod device;
pub mod error;
pub mod merge;
pub mod render;
pub mod scheme;
pub mod table;
pub mod theme;

pub use color::{ColorSlot, ColorValue};
pub use config::Config;
pub use console::ConsoleConfiguration;
pub use error::PaletteError;
pub use merge::{merge, AttributeOverrides, MergeRequest};
pub use table::{get_color_table, plan_color_table, set_color_table, SetOutcome};
pub use theme::current_theme;
