//! Subcommand handlers

pub mod config;
pub mod get;
pub mod presets;
pub mod set;
