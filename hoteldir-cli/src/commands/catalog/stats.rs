use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::commands::{open_catalog, query_error};

pub(crate) fn run_catalog_stats(db_path: &Path) -> Result<(), CliError> {
    if !db_path.exists() {
        log::warn!("No catalog database found at {}", db_path.display());
        log::info!("Run 'hoteldir catalog seed' to create one.");
        return Ok(());
    }

    let conn = open_catalog(db_path)?;
    let stats = hoteldir_db::catalog_stats(&conn).map_err(query_error)?;

    log::info!(
        "{}",
        "Catalog Database Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());
    crate::log_blank();
    log::info!("  Cities:          {:>8}", stats.cities);
    log::info!("  Categories:      {:>8}", stats.categories);
    log::info!(
        "  Hotels:          {:>8} ({} available)",
        stats.hotels,
        stats.available_hotels,
    );
    log::info!("  Users:           {:>8}", stats.users);

    Ok(())
}

/// Show recent import runs, newest first.
pub(crate) fn run_catalog_imports(db_path: &Path, limit: Option<u32>) -> Result<(), CliError> {
    let conn = crate::commands::open_existing_catalog(db_path)?;
    let logs = hoteldir_db::list_import_logs(&conn, limit).map_err(query_error)?;

    if logs.is_empty() {
        log::info!("No imports recorded yet.");
        return Ok(());
    }

    log::info!("{}", "Recent Imports".if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();
    for entry in &logs {
        log::info!(
            "  {}  {:<10} {:<30} {:>5} created  {:>5} skipped",
            entry.imported_at.if_supports_color(Stdout, |t| t.dimmed()),
            entry.source_type,
            crate::commands::truncate_str(&entry.source_name, 30),
            entry.records_created,
            entry.records_skipped,
        );
    }
    Ok(())
}
