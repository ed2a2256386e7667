//! Window-rectangle correction for the write path.
//!
//! The platform reports a window rectangle whose right and bottom edges are one
//! unit short of the visible extent. Writing that rectangle back unchanged
//! shrinks the window by a column and a row, so every configuration headed for
//! a sink is widened by one first. Configurations that are only displayed are
//! never corrected.

use tracing::debug;

use super::ConsoleConfiguration;

/// Extend the window's right and bottom edges by one.
///
/// Edges already at `i16::MAX` stay there.
pub fn correct_for_apply(mut config: ConsoleConfiguration) -> ConsoleConfiguration {
    let before = config.window;
    config.window.right = config.window.right.saturating_add(1);
    config.window.bottom = config.window.bottom.saturating_add(1);
    debug!(?before, after = ?config.window, "corrected window bounds");
    config
}
