//! Palette colors and slot names.

mod slot;
mod value;

pub use slot::{ColorSlot, SLOT_COUNT};
pub use value::{ColorInput, ColorValue};
