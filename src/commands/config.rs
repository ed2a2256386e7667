//! Config subcommands handler

use std::fs;
use std::io::{self, Write};
use std::process::Command;

use anyhow::{bail, Context, Result};

use conpalette::config::{migrate_config, MigrateResult};
use conpalette::theme::Theme;
use conpalette::{current_theme, Config};

/// Print the effective configuration, preceded by where it came from.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let theme = current_theme();
    let path = Config::config_path()?;
    let config = Config::load_from(&path)?;

    let origin = if path.exists() {
        format!("# {}", path.display())
    } else {
        format!("# {} (not present, showing defaults)", path.display())
    };
    println!("{}", theme.secondary_text(&origin));
    print!(
        "{}",
        toml::to_string_pretty(&config).context("Failed to serialize config")?
    );
    Ok(())
}

/// Open the config file in `$VISUAL` or `$EDITOR` (falling back to `vi`).
///
/// The file is created with defaults first if needed, and checked again after
/// the editor exits.
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let theme = current_theme();
    let path = Config::config_path()?;
    if !path.exists() {
        Config::default().save_to(&path)?;
    }

    let editor = std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .unwrap_or_else(|_| "vi".to_string());
    println!(
        "{}",
        theme.secondary_text(&format!("Editing {} with {}", path.display(), editor))
    );

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| format!("Failed to open editor '{}'", editor))?;
    if !status.success() {
        bail!("Editor '{}' exited with {}", editor, status);
    }

    if let Err(e) = Config::load_from(&path) {
        println!(
            "{}",
            theme.error_text(&format!("Warning: edited config does not load: {:#}", e))
        );
    }
    Ok(())
}

/// Add settings missing from the config file.
///
/// Lists what would be added and writes only after confirmation, or right away
/// with `--yes`.
#[cfg(not(tarpaulin_include))]
pub fn handle_migrate(yes: bool) -> Result<()> {
    let theme = current_theme();
    let path = Config::config_path()?;
    let existing = if path.exists() {
        Some(
            fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
        )
    } else {
        None
    };

    let result = migrate_config(existing.as_deref().unwrap_or_default())?;
    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    let heading = match existing {
        None => format!("{} does not exist; it would be created with:", path.display()),
        Some(_) => format!(
            "{} is missing {} setting(s):",
            path.display(),
            result.added_fields.len()
        ),
    };
    println!("{}", theme.primary_text(&heading));
    for line in preview(&result, &theme) {
        println!("{}", line);
    }

    if !yes && !confirm(&theme, &format!("Write {}?", path.display()))? {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, &result.content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote {}", path.display()))
    );
    Ok(())
}

/// One `+ section.key = value` line per added setting, new sections marked.
fn preview(result: &MigrateResult, theme: &Theme) -> Vec<String> {
    let mut lines = Vec::with_capacity(result.added_lines.len() + result.sections_added.len());
    let mut last_section = "";

    for (field, line) in result.added_fields.iter().zip(&result.added_lines) {
        let section = field.split_once('.').map_or(field.as_str(), |(s, _)| s);
        if section != last_section && result.sections_added.iter().any(|s| s == section) {
            lines.push(theme.success_text(&format!("+ [{}]", section)));
        }
        last_section = section;
        lines.push(theme.success_text(&format!("+ {}", line)));
    }
    lines
}

/// Ask on stdin; a non-terminal stdin counts as "no".
fn confirm(theme: &Theme, question: &str) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("stdin is not a terminal; pass --yes to write the file")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(question));
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
