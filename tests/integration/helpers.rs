//! Shared fixtures for the integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use conpalette::console::record::{self, RECORD_SIZE};
use conpalette::console::{AttributeWord, Coord, WindowRect};
use conpalette::scheme::builtin_preset;
use conpalette::{merge, ColorValue, ConsoleConfiguration};
use tempfile::TempDir;

/// A console on the legacy palette with gray-on-black text.
pub fn legacy_console() -> ConsoleConfiguration {
    let blank = ConsoleConfiguration {
        buffer_size: Coord::new(120, 9001),
        cursor_position: Coord::new(0, 42),
        text_attributes: AttributeWord::new(0x0007),
        window: WindowRect::new(0, 17, 79, 41),
        maximum_window_size: Coord::new(120, 63),
        popup_attributes: AttributeWord::new(0x00f5),
        fullscreen_supported: false,
        palette: [ColorValue::from_rgb(0, 0, 0); 16],
    };
    let request = builtin_preset("legacy")
        .expect("legacy preset")
        .to_request()
        .expect("legacy preset request");
    merge(&blank, &request).expect("legacy preset merge")
}

/// Temp directory holding `console.bin` and an (empty) config directory.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self::with_console(&legacy_console())
    }

    pub fn with_console(config: &ConsoleConfiguration) -> Self {
        let dir = TempDir::new().expect("temp dir");
        fs::create_dir_all(dir.path().join("config")).expect("config dir");
        fs::write(dir.path().join("console.bin"), record::encode(config)).expect("write snapshot");
        Self { dir }
    }

    pub fn snapshot(&self) -> PathBuf {
        self.dir.path().join("console.bin")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Decode the snapshot as it is on disk now.
    pub fn read_console(&self) -> ConsoleConfiguration {
        let bytes = fs::read(self.snapshot()).expect("read snapshot");
        assert_eq!(bytes.len(), RECORD_SIZE);
        record::decode(&bytes).expect("decode snapshot")
    }

    pub fn snapshot_bytes(&self) -> Vec<u8> {
        fs::read(self.snapshot()).expect("read snapshot")
    }

    /// Command for the binary with colors off and config isolated here.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_conpalette"));
        cmd.env("NO_COLOR", "1")
            .env("CONPALETTE_CONFIG_DIR", self.config_dir())
            .env_remove("RUST_LOG");
        cmd
    }

    /// [`Workspace::command`] wrapped for `assert_cmd`, snapshot flag included.
    pub fn assert_command(&self) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.arg("--snapshot").arg(self.snapshot());
        assert_cmd::Command::from_std(cmd)
    }

    /// Run with `--snapshot <console.bin>` appended.
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let mut cmd = self.command();
        cmd.args(args).arg("--snapshot").arg(self.snapshot());
        run_command(cmd)
    }

    /// Run without a snapshot flag.
    pub fn run_bare(&self, args: &[&str]) -> (String, String, i32) {
        let mut cmd = self.command();
        cmd.args(args);
        run_command(cmd)
    }
}

fn run_command(mut cmd: Command) -> (String, String, i32) {
    let output = cmd.output().expect("Failed to execute conpalette");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
