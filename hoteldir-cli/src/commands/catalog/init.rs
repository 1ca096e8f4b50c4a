use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::commands::open_catalog;

/// Create an empty catalog database (or upgrade an existing one).
pub(crate) fn run_catalog_init(db_path: &Path) -> Result<(), CliError> {
    let existed = db_path.exists();
    let conn = open_catalog(db_path)?;
    let version = hoteldir_db::schema::get_schema_version(&conn)
        .map_err(|e| CliError::database(format!("Failed to read schema version: {e}")))?;

    if existed {
        log::info!("Catalog database already exists (schema v{version})");
    } else {
        log::info!(
            "{} {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            "Catalog database created".if_supports_color(Stdout, |t| t.bold()),
        );
    }
    log::info!("  Path: {}", db_path.display());
    crate::log_blank();
    log::info!("Run 'hoteldir catalog seed' to load the sample dataset.");
    Ok(())
}
