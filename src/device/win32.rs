//! Live Windows console device.

use std::mem;

use tracing::debug;
use windows_sys::Win32::Foundation::{GetLastError, HANDLE, INVALID_HANDLE_VALUE};
use windows_sys::Win32::System::Console::{
    GetConsoleScreenBufferInfoEx, GetStdHandle, SetConsoleScreenBufferInfoEx,
    CONSOLE_SCREEN_BUFFER_INFOEX, COORD, SMALL_RECT, STD_ERROR_HANDLE, STD_OUTPUT_HANDLE,
};

use super::error::DeviceError;
use super::{ConfigurationSink, ConfigurationSource, ConsoleDevice, StdStream};
use crate::color::{ColorValue, SLOT_COUNT};
use crate::console::{AttributeWord, ConsoleConfiguration, Coord, WindowRect};

/// The screen buffer behind one of the process's standard streams.
#[derive(Debug, Clone, Copy)]
pub struct Win32Console {
    stream: StdStream,
}

impl Win32Console {
    pub fn new(stream: StdStream) -> Self {
        Self { stream }
    }

    fn handle(&self) -> Result<HANDLE, DeviceError> {
        let id = match self.stream {
            StdStream::Stdout => STD_OUTPUT_HANDLE,
            StdStream::Stderr => STD_ERROR_HANDLE,
        };

        // SAFETY: GetStdHandle has no preconditions.
        let handle = unsafe { GetStdHandle(id) };
        if handle == INVALID_HANDLE_VALUE {
            return Err(last_error("GetStdHandle"));
        }
        if handle.is_null() {
            return Err(DeviceError::NoConsole {
                stream: self.stream.name(),
            });
        }
        Ok(handle)
    }
}

fn last_error(call: &'static str) -> DeviceError {
    // SAFETY: GetLastError has no preconditions.
    let code = unsafe { GetLastError() };
    DeviceError::Win32 { call, code }
}

fn info_size() -> u32 {
    mem::size_of::<CONSOLE_SCREEN_BUFFER_INFOEX>() as u32
}

impl ConfigurationSource for Win32Console {
    fn read_configuration(&self) -> Result<ConsoleConfiguration, DeviceError> {
        let handle = self.handle()?;

        // SAFETY: CONSOLE_SCREEN_BUFFER_INFOEX is plain old data; all-zero is valid.
        let mut info: CONSOLE_SCREEN_BUFFER_INFOEX = unsafe { mem::zeroed() };
        info.cbSize = info_size();

        // SAFETY: `handle` is a console handle and `info` has cbSize set.
        if unsafe { GetConsoleScreenBufferInfoEx(handle, &mut info) } == 0 {
            return Err(last_error("GetConsoleScreenBufferInfoEx"));
        }
        debug!(stream = self.stream.name(), "read console screen buffer info");

        Ok(from_native(&info))
    }
}

impl ConfigurationSink for Win32Console {
    fn apply_configuration(&self, config: &ConsoleConfiguration) -> Result<(), DeviceError> {
        let handle = self.handle()?;
        let info = to_native(config);

        // SAFETY: `handle` is a console handle and `info` is fully initialized.
        if unsafe { SetConsoleScreenBufferInfoEx(handle, &info) } == 0 {
            return Err(last_error("SetConsoleScreenBufferInfoEx"));
        }
        debug!(stream = self.stream.name(), "applied console screen buffer info");
        Ok(())
    }
}

impl ConsoleDevice for Win32Console {
    fn describe(&self) -> String {
        format!("console ({})", self.stream.name())
    }
}

fn from_native(info: &CONSOLE_SCREEN_BUFFER_INFOEX) -> ConsoleConfiguration {
    let coord = |c: COORD| Coord::new(c.X, c.Y);
    let rect = info.srWindow;

    let mut palette = [ColorValue::from_rgb(0, 0, 0); SLOT_COUNT];
    for (entry, raw) in palette.iter_mut().zip(info.ColorTable.iter()) {
        *entry = ColorValue::from_colorref(*raw);
    }

    ConsoleConfiguration {
        buffer_size: coord(info.dwSize),
        cursor_position: coord(info.dwCursorPosition),
        text_attributes: AttributeWord::new(info.wAttributes),
        window: WindowRect::new(rect.Left, rect.Top, rect.Right, rect.Bottom),
        maximum_window_size: coord(info.dwMaximumWindowSize),
        popup_attributes: AttributeWord::new(info.wPopupAttributes),
        fullscreen_supported: info.bFullscreenSupported != 0,
        palette,
    }
}

fn to_native(config: &ConsoleConfiguration) -> CONSOLE_SCREEN_BUFFER_INFOEX {
    let coord = |c: Coord| COORD { X: c.x, Y: c.y };

    CONSOLE_SCREEN_BUFFER_INFOEX {
        cbSize: info_size(),
        dwSize: coord(config.buffer_size),
        dwCursorPosition: coord(config.cursor_position),
        wAttributes: config.text_attributes.raw(),
        srWindow: SMALL_RECT {
            Left: config.window.left,
            Top: config.window.top,
            Right: config.window.right,
            Bottom: config.window.bottom,
        },
        dwMaximumWindowSize: coord(config.maximum_window_size),
        wPopupAttributes: config.popup_attributes.raw(),
        bFullscreenSupported: i32::from(config.fullscreen_supported),
        ColorTable: config.palette.map(ColorValue::to_colorref),
    }
}
