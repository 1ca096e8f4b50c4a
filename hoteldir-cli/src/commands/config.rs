use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::settings;

pub(crate) fn run_config_show(db_path: &Path) {
    let path = settings::settings_path();
    log::info!("{}", "Settings".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  File: {}", path.display());

    match settings::load_settings_string() {
        Some(contents) if !contents.trim().is_empty() => {
            crate::log_blank();
            for line in contents.lines() {
                log::info!("  {line}");
            }
        }
        _ => log::info!("  (no settings saved)"),
    }

    crate::log_blank();
    let state = if db_path.exists() { "" } else { " (not created yet)" };
    log::info!("  Database: {}{state}", db_path.display());
}

/// Save the default database path.
pub(crate) fn run_config_set_db(path: &Path) -> Result<(), CliError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    settings::save_database_path(&absolute)
        .map_err(|e| CliError::config(format!("Failed to save settings: {e}")))?;

    log::info!(
        "{} Default database set to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        absolute.display(),
    );
    Ok(())
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}
