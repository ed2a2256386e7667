//! Command-line interface definitions.
//!
//! Lives in the library so the xtask crate can generate man pages from it.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};

use crate::device::StdStream;
use crate::render::OutputFormat;

/// Version string with build metadata, for `--version`.
pub fn long_version() -> &'static str {
    static LONG_VERSION: OnceLock<String> = OnceLock::new();
    LONG_VERSION.get_or_init(|| {
        let built = option_env!("CONPALETTE_BUILD_DATE").unwrap_or("unknown");
        match option_env!("VERGEN_GIT_SHA") {
            Some(sha) => format!("{} ({}, built {})", env!("CARGO_PKG_VERSION"), sha, built),
            None => format!("{} (built {})", env!("CARGO_PKG_VERSION"), built),
        }
    })
}

#[derive(Debug, Parser)]
#[command(
    name = "conpalette",
    version,
    about = "Read and rewrite the console color table",
    long_about = "Read and rewrite the 16-color palette and the default text and popup \
                  attributes of a console window.\n\n\
                  Use --snapshot FILE to work on a saved screen-buffer record instead of the \
                  live console."
)]
pub struct Cli {
    /// Read and write a screen-buffer snapshot file instead of the live console
    #[arg(long, global = true, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Standard stream whose console screen buffer is used
    #[arg(long, global = true, value_enum, value_name = "STREAM")]
    pub stream: Option<StdStream>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the current color table and attributes
    Get(GetArgs),

    /// Change palette slots and default attributes
    #[command(long_about = "Change palette slots and default attributes.\n\n\
        Assign one slot with --slot/--color, several with repeated --map SLOT=COLOR, \
        or a whole scheme with --scheme FILE or --preset NAME. These forms are \
        mutually exclusive. Attribute options may be combined with any of them.\n\n\
        Slots are names (case-insensitive) or indices 0-15. Colors are #rrggbb, \
        rrggbb or r,g,b.")]
    Set(SetArgs),

    /// List built-in color scheme presets
    Presets,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Output format (default from config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Do not print color swatches
    #[arg(long)]
    pub no_swatches: bool,
}

#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("assignment")
        .args(["slot", "map", "scheme", "preset"])
        .multiple(false)
))]
pub struct SetArgs {
    /// Slot to assign (use with --color)
    #[arg(long, value_name = "SLOT", requires = "color")]
    pub slot: Option<String>,

    /// Color for --slot
    #[arg(long, value_name = "COLOR", requires = "slot")]
    pub color: Option<String>,

    /// Assign a slot; repeat for several slots
    #[arg(long = "map", value_name = "SLOT=COLOR")]
    pub map: Vec<String>,

    /// Apply a color scheme file
    #[arg(long, value_name = "FILE")]
    pub scheme: Option<PathBuf>,

    /// Apply a named preset (see `conpalette presets`)
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Default text foreground slot
    #[arg(long, value_name = "SLOT", allow_negative_numbers = true)]
    pub text_foreground: Option<String>,

    /// Default text background slot
    #[arg(long, value_name = "SLOT", allow_negative_numbers = true)]
    pub text_background: Option<String>,

    /// Popup foreground slot
    #[arg(long, value_name = "SLOT", allow_negative_numbers = true)]
    pub popup_foreground: Option<String>,

    /// Popup background slot
    #[arg(long, value_name = "SLOT", allow_negative_numbers = true)]
    pub popup_background: Option<String>,

    /// Show what would change without applying it
    #[arg(long)]
    pub dry_run: bool,

    /// Also print the resulting configuration in this format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,

    /// Open configuration file in $EDITOR
    Edit,

    /// Add missing fields to the configuration file
    Migrate {
        /// Apply without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}
