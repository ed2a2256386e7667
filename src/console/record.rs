//! Binary screen-buffer record codec.
//!
//! The record is the little-endian, fixed-order image of the native extended
//! screen-buffer info structure:
//!
//! | offset | field                                |
//! |-------:|--------------------------------------|
//! | 0      | size header (`u32`, always 96)       |
//! | 4      | buffer width, height (`i16` x2)      |
//! | 8      | cursor column, row (`i16` x2)        |
//! | 12     | text attributes (`u16`)              |
//! | 14     | window left, top, right, bottom      |
//! | 22     | maximum window width, height         |
//! | 26     | popup attributes (`u16`)             |
//! | 28     | fullscreen supported (`i32` BOOL)    |
//! | 32     | 16 color-table entries (`u32` each)  |
//!
//! Color-table entries are written exactly as [`ColorValue::to_colorref`]
//! returns them; no byte swapping happens at this layer.

use tracing::warn;

use super::{AttributeWord, ConsoleConfiguration, Coord, WindowRect};
use crate::color::{ColorValue, SLOT_COUNT};

/// Size in bytes of an encoded record.
pub const RECORD_SIZE: usize = 96;

const PALETTE_OFFSET: usize = 32;

/// Errors from decoding a binary record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("Record is {actual} bytes, expected {expected}")]
    WrongLength { actual: usize, expected: usize },

    #[error("Record size header is {found}, expected {expected}")]
    SizeHeaderMismatch { found: u32, expected: u32 },
}

/// Encode a configuration into its binary record.
pub fn encode(config: &ConsoleConfiguration) -> [u8; RECORD_SIZE] {
    let mut writer = Writer::new();

    writer.put_u32(RECORD_SIZE as u32);
    writer.put_coord(config.buffer_size);
    writer.put_coord(config.cursor_position);
    writer.put_u16(config.text_attributes.raw());
    writer.put_i16(config.window.left);
    writer.put_i16(config.window.top);
    writer.put_i16(config.window.right);
    writer.put_i16(config.window.bottom);
    writer.put_coord(config.maximum_window_size);
    writer.put_u16(config.popup_attributes.raw());
    writer.put_i32(i32::from(config.fullscreen_supported));
    debug_assert_eq!(writer.pos, PALETTE_OFFSET);
    for color in &config.palette {
        writer.put_u32(color.to_colorref());
    }

    writer.finish()
}

/// Decode a binary record.
///
/// The input must be exactly [`RECORD_SIZE`] bytes and carry a matching size
/// header.
pub fn decode(bytes: &[u8]) -> Result<ConsoleConfiguration, RecordError> {
    if bytes.len() != RECORD_SIZE {
        return Err(RecordError::WrongLength {
            actual: bytes.len(),
            expected: RECORD_SIZE,
        });
    }

    let mut reader = Reader::new(bytes);

    let size = reader.u32();
    if size != RECORD_SIZE as u32 {
        return Err(RecordError::SizeHeaderMismatch {
            found: size,
            expected: RECORD_SIZE as u32,
        });
    }

    let buffer_size = reader.coord();
    let cursor_position = reader.coord();
    let text_attributes = AttributeWord::new(reader.u16());
    let window = WindowRect::new(reader.i16(), reader.i16(), reader.i16(), reader.i16());
    let maximum_window_size = reader.coord();
    let popup_attributes = AttributeWord::new(reader.u16());
    let fullscreen_supported = reader.i32() != 0;

    let mut palette = [ColorValue::from_rgb(0, 0, 0); SLOT_COUNT];
    for (index, entry) in palette.iter_mut().enumerate() {
        let raw = reader.u32();
        if raw > 0x00ff_ffff {
            warn!(index, raw, "color-table entry has its top byte set; ignoring it");
        }
        *entry = ColorValue::from_colorref(raw);
    }

    Ok(ConsoleConfiguration {
        buffer_size,
        cursor_position,
        text_attributes,
        window,
        maximum_window_size,
        popup_attributes,
        fullscreen_supported,
        palette,
    })
}

struct Writer {
    buf: [u8; RECORD_SIZE],
    pos: usize,
}

impl Writer {
    fn new() -> Self {
        Self {
            buf: [0; RECORD_SIZE],
            pos: 0,
        }
    }

    fn put(&mut self, bytes: &[u8]) {
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
    }

    fn put_u16(&mut self, value: u16) {
        self.put(&value.to_le_bytes());
    }

    fn put_i16(&mut self, value: i16) {
        self.put(&value.to_le_bytes());
    }

    fn put_u32(&mut self, value: u32) {
        self.put(&value.to_le_bytes());
    }

    fn put_i32(&mut self, value: i32) {
        self.put(&value.to_le_bytes());
    }

    fn put_coord(&mut self, coord: Coord) {
        self.put_i16(coord.x);
        self.put_i16(coord.y);
    }

    fn finish(self) -> [u8; RECORD_SIZE] {
        debug_assert_eq!(self.pos, RECORD_SIZE);
        self.buf
    }
}

/// Reads fixed-width fields from a buffer already checked to be `RECORD_SIZE` long.
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.bytes[self.pos..self.pos + N]);
        self.pos += N;
        out
    }

    fn u16(&mut self) -> u16 {
        u16::from_le_bytes(self.take())
    }

    fn i16(&mut self) -> i16 {
        i16::from_le_bytes(self.take())
    }

    fn u32(&mut self) -> u32 {
        u32::from_le_bytes(self.take())
    }

    fn i32(&mut self) -> i32 {
        i32::from_le_bytes(self.take())
    }

    fn coord(&mut self) -> Coord {
        let x = self.i16();
        let y = self.i16();
        Coord::new(x, y)
    }
}
