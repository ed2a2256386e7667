//! conpalette CLI entry point

mod commands;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches};

use conpalette::cli::{long_version, Cli, Commands, ConfigCommands};
use conpalette::device::DeviceTarget;
use conpalette::Config;

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let matches = Cli::command().long_version(long_version()).get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(cli.verbose);

    match cli.command {
        Commands::Get(args) => {
            let config = Config::load()?;
            let target = DeviceTarget::resolve(cli.snapshot.as_deref(), cli.stream, &config.device);
            commands::get::handle(&args, &target, &config)
        }
        Commands::Set(args) => {
            let config = Config::load()?;
            let target = DeviceTarget::resolve(cli.snapshot.as_deref(), cli.stream, &config.device);
            commands::set::handle(&args, &target, &config)
        }
        Commands::Presets => commands::presets::handle(),
        Commands::Config(command) => match command {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Migrate { yes } => commands::config::handle_migrate(yes),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "conpalette",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

/// Route log records (and `tracing` events) to stderr.
///
/// `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
